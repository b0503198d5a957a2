//! Keybinding configuration types and parsing.
//!
//! Every tool command is an [`Action`]; users map key strings to actions in
//! the `[keybindings]` table of the config file.

use crate::input::Modifiers;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use std::collections::HashMap;
use thiserror::Error;

/// All commands that can be bound to keys.
///
/// Declaration order breaks ties between equally specific bindings.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    /// Terminate the overlay
    Exit,
    /// Drop every stroke, including the one being drawn
    ClearCanvas,
    /// Darken the background without touching the ink
    ToggleDim,
    /// Wide translucent black ink
    Highlighter,

    // Width presets
    WidthSmall,
    WidthMedium,
    WidthLarge,

    // Palette
    SetColorRed,
    SetColorGreen,
    SetColorBlue,
    SetColorYellow,
    SetColorOrange,
    SetColorPink,
}

/// Errors raised while turning keybinding strings into an action map.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum KeybindingError {
    #[error("empty keybinding string")]
    Empty,
    #[error("no key specified in '{0}'")]
    MissingKey(String),
    #[error("more than one key in '{0}'")]
    MultipleKeys(String),
    #[error("duplicate keybinding '{binding}' assigned to both {first:?} and {second:?}")]
    Duplicate {
        binding: String,
        first: Action,
        second: Action,
    },
}

/// A single keybinding: a key name with optional modifiers.
///
/// Single-character keys are stored upper-cased so `"r"` and `"R"` are the
/// same binding.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyBinding {
    pub key: String,
    pub ctrl: bool,
    pub shift: bool,
    pub alt: bool,
}

impl KeyBinding {
    /// Parse a keybinding string like "Ctrl+Shift+W", "Escape" or "1".
    ///
    /// Modifiers can appear in any order and spaces around '+' are allowed.
    /// A trailing '+' binds the plus key itself ("Ctrl++").
    pub fn parse(s: &str) -> Result<Self, KeybindingError> {
        let s = s.trim();
        if s.is_empty() {
            return Err(KeybindingError::Empty);
        }

        let normalized: String = s.split('+').map(str::trim).collect::<Vec<_>>().join("+");

        let (body, plus_key) = match normalized.strip_suffix("++") {
            Some(rest) => (rest, true),
            None if normalized == "+" => ("", true),
            None => (normalized.as_str(), false),
        };

        let mut ctrl = false;
        let mut shift = false;
        let mut alt = false;
        let mut key = if plus_key { Some("+".to_string()) } else { None };

        for part in body.split('+').filter(|p| !p.is_empty()) {
            match part.to_lowercase().as_str() {
                "ctrl" | "control" => ctrl = true,
                "shift" => shift = true,
                "alt" => alt = true,
                _ => {
                    if key.is_some() {
                        return Err(KeybindingError::MultipleKeys(s.to_string()));
                    }
                    key = Some(canonical_key(part));
                }
            }
        }

        let key = key.ok_or_else(|| KeybindingError::MissingKey(s.to_string()))?;
        Ok(Self {
            key,
            ctrl,
            shift,
            alt,
        })
    }

    /// Returns true if `key` is this binding's key and every declared modifier is held.
    ///
    /// Modifiers the binding does not mention are ignored, so a plain `R`
    /// binding still fires with Shift or Caps Lock producing an upper-case key.
    pub fn matches(&self, key: &str, modifiers: &Modifiers) -> bool {
        self.key.eq_ignore_ascii_case(key)
            && (!self.ctrl || modifiers.ctrl)
            && (!self.shift || modifiers.shift)
            && (!self.alt || modifiers.alt)
    }

    /// Number of modifiers the binding requires; used to prefer the most specific match.
    pub fn specificity(&self) -> usize {
        usize::from(self.ctrl) + usize::from(self.shift) + usize::from(self.alt)
    }
}

fn canonical_key(part: &str) -> String {
    let mut chars = part.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => c.to_uppercase().collect(),
        _ => match part.to_lowercase().as_str() {
            "escape" | "esc" => "Escape".to_string(),
            _ => part.to_string(),
        },
    }
}

/// Lookup table built from [`KeybindingsConfig`].
pub type ActionMap = HashMap<KeyBinding, Action>;

/// Finds the action bound to `key`, preferring bindings that require more modifiers.
///
/// Among equally specific matches the action declared first in [`Action`] wins.
pub fn find_action(map: &ActionMap, key: &str, modifiers: &Modifiers) -> Option<Action> {
    map.iter()
        .filter(|(binding, _)| binding.matches(key, modifiers))
        .max_by_key(|(binding, action)| (binding.specificity(), Reverse(**action)))
        .map(|(_, action)| *action)
}

/// Configuration for all keybindings.
///
/// Each action can have multiple keybindings. Users specify them in config.toml as:
/// ```toml
/// [keybindings]
/// exit = ["Escape", "Ctrl+Q"]
/// clear_canvas = ["C"]
/// toggle_dim = ["A"]
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct KeybindingsConfig {
    #[serde(default = "default_exit")]
    pub exit: Vec<String>,

    #[serde(default = "default_clear_canvas")]
    pub clear_canvas: Vec<String>,

    #[serde(default = "default_toggle_dim")]
    pub toggle_dim: Vec<String>,

    #[serde(default = "default_highlighter")]
    pub highlighter: Vec<String>,

    #[serde(default = "default_width_small")]
    pub width_small: Vec<String>,

    #[serde(default = "default_width_medium")]
    pub width_medium: Vec<String>,

    #[serde(default = "default_width_large")]
    pub width_large: Vec<String>,

    #[serde(default = "default_set_color_red")]
    pub set_color_red: Vec<String>,

    #[serde(default = "default_set_color_green")]
    pub set_color_green: Vec<String>,

    #[serde(default = "default_set_color_blue")]
    pub set_color_blue: Vec<String>,

    #[serde(default = "default_set_color_yellow")]
    pub set_color_yellow: Vec<String>,

    #[serde(default = "default_set_color_orange")]
    pub set_color_orange: Vec<String>,

    #[serde(default = "default_set_color_pink")]
    pub set_color_pink: Vec<String>,
}

impl Default for KeybindingsConfig {
    fn default() -> Self {
        Self {
            exit: default_exit(),
            clear_canvas: default_clear_canvas(),
            toggle_dim: default_toggle_dim(),
            highlighter: default_highlighter(),
            width_small: default_width_small(),
            width_medium: default_width_medium(),
            width_large: default_width_large(),
            set_color_red: default_set_color_red(),
            set_color_green: default_set_color_green(),
            set_color_blue: default_set_color_blue(),
            set_color_yellow: default_set_color_yellow(),
            set_color_orange: default_set_color_orange(),
            set_color_pink: default_set_color_pink(),
        }
    }
}

impl KeybindingsConfig {
    /// Build a lookup map from keybindings to actions.
    /// Returns an error if any keybinding string is invalid or if duplicates are detected.
    pub fn build_action_map(&self) -> Result<ActionMap, KeybindingError> {
        let groups: [(&[String], Action); 13] = [
            (&self.exit, Action::Exit),
            (&self.clear_canvas, Action::ClearCanvas),
            (&self.toggle_dim, Action::ToggleDim),
            (&self.highlighter, Action::Highlighter),
            (&self.width_small, Action::WidthSmall),
            (&self.width_medium, Action::WidthMedium),
            (&self.width_large, Action::WidthLarge),
            (&self.set_color_red, Action::SetColorRed),
            (&self.set_color_green, Action::SetColorGreen),
            (&self.set_color_blue, Action::SetColorBlue),
            (&self.set_color_yellow, Action::SetColorYellow),
            (&self.set_color_orange, Action::SetColorOrange),
            (&self.set_color_pink, Action::SetColorPink),
        ];

        let mut map = ActionMap::new();
        for (bindings, action) in groups {
            for binding_str in bindings {
                let binding = KeyBinding::parse(binding_str)?;
                if let Some(first) = map.insert(binding, action) {
                    return Err(KeybindingError::Duplicate {
                        binding: binding_str.clone(),
                        first,
                        second: action,
                    });
                }
            }
        }

        Ok(map)
    }
}

// =============================================================================
// Default keybinding functions
// =============================================================================

fn default_exit() -> Vec<String> {
    vec!["Escape".to_string()]
}

fn default_clear_canvas() -> Vec<String> {
    vec!["C".to_string()]
}

fn default_toggle_dim() -> Vec<String> {
    vec!["A".to_string()]
}

fn default_highlighter() -> Vec<String> {
    vec!["X".to_string()]
}

fn default_width_small() -> Vec<String> {
    vec!["1".to_string()]
}

fn default_width_medium() -> Vec<String> {
    vec!["2".to_string()]
}

fn default_width_large() -> Vec<String> {
    vec!["3".to_string()]
}

fn default_set_color_red() -> Vec<String> {
    vec!["R".to_string()]
}

fn default_set_color_green() -> Vec<String> {
    vec!["G".to_string()]
}

fn default_set_color_blue() -> Vec<String> {
    vec!["B".to_string()]
}

fn default_set_color_yellow() -> Vec<String> {
    vec!["Y".to_string()]
}

fn default_set_color_orange() -> Vec<String> {
    vec!["O".to_string()]
}

fn default_set_color_pink() -> Vec<String> {
    vec!["P".to_string()]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn held(ctrl: bool, shift: bool, alt: bool) -> Modifiers {
        Modifiers {
            ctrl,
            shift,
            alt,
            ..Modifiers::default()
        }
    }

    #[test]
    fn parse_simple_key() {
        let binding = KeyBinding::parse("Escape").unwrap();
        assert_eq!(binding.key, "Escape");
        assert!(!binding.ctrl && !binding.shift && !binding.alt);
    }

    #[test]
    fn parse_upper_cases_single_characters() {
        assert_eq!(KeyBinding::parse("r").unwrap(), KeyBinding::parse("R").unwrap());
        assert_eq!(KeyBinding::parse("esc").unwrap().key, "Escape");
    }

    #[test]
    fn parse_modifiers_in_any_order_with_spaces() {
        let a = KeyBinding::parse("Ctrl + Shift + W").unwrap();
        let b = KeyBinding::parse("shift+ctrl+w").unwrap();
        assert_eq!(a, b);
        assert!(a.ctrl && a.shift && !a.alt);
        assert_eq!(a.key, "W");
    }

    #[test]
    fn parse_plus_key() {
        let binding = KeyBinding::parse("Ctrl++").unwrap();
        assert_eq!(binding.key, "+");
        assert!(binding.ctrl);
        assert_eq!(KeyBinding::parse("+").unwrap().key, "+");
    }

    #[test]
    fn parse_rejects_empty_and_modifier_only_strings() {
        assert_eq!(KeyBinding::parse("  "), Err(KeybindingError::Empty));
        assert!(matches!(
            KeyBinding::parse("Ctrl+Shift"),
            Err(KeybindingError::MissingKey(_))
        ));
        assert!(matches!(
            KeyBinding::parse("A+B"),
            Err(KeybindingError::MultipleKeys(_))
        ));
    }

    #[test]
    fn matches_ignores_undeclared_modifiers() {
        let plain = KeyBinding::parse("R").unwrap();
        assert!(plain.matches("r", &held(false, false, false)));
        assert!(plain.matches("R", &held(false, true, false)));
        assert!(plain.matches("R", &held(true, false, false)));

        let ctrl_q = KeyBinding::parse("Ctrl+Q").unwrap();
        assert!(ctrl_q.matches("q", &held(true, false, false)));
        assert!(!ctrl_q.matches("q", &held(false, false, false)));
    }

    #[test]
    fn find_action_prefers_most_specific_binding() {
        let mut config = KeybindingsConfig::default();
        config.clear_canvas = vec!["Ctrl+R".to_string()];
        let map = config.build_action_map().unwrap();

        assert_eq!(
            find_action(&map, "r", &held(true, false, false)),
            Some(Action::ClearCanvas)
        );
        assert_eq!(
            find_action(&map, "r", &held(false, false, false)),
            Some(Action::SetColorRed)
        );
        assert_eq!(find_action(&map, "z", &held(false, false, false)), None);
    }

    #[test]
    fn equally_specific_bindings_resolve_by_action_order() {
        let mut config = KeybindingsConfig::default();
        config.clear_canvas = vec!["Ctrl+R".to_string()];
        config.toggle_dim = vec!["Shift+R".to_string()];

        // Each map gets its own hash seed, so repeat to catch order dependence.
        for _ in 0..32 {
            let map = config.build_action_map().unwrap();
            assert_eq!(
                find_action(&map, "R", &held(true, true, false)),
                Some(Action::ClearCanvas)
            );
            assert_eq!(
                find_action(&map, "R", &held(false, true, false)),
                Some(Action::ToggleDim)
            );
        }
    }

    #[test]
    fn default_map_covers_every_command_key() {
        let map = KeybindingsConfig::default().build_action_map().unwrap();
        let none = Modifiers::default();
        let expected = [
            ("R", Action::SetColorRed),
            ("G", Action::SetColorGreen),
            ("B", Action::SetColorBlue),
            ("Y", Action::SetColorYellow),
            ("O", Action::SetColorOrange),
            ("P", Action::SetColorPink),
            ("X", Action::Highlighter),
            ("1", Action::WidthSmall),
            ("2", Action::WidthMedium),
            ("3", Action::WidthLarge),
            ("A", Action::ToggleDim),
            ("C", Action::ClearCanvas),
            ("Escape", Action::Exit),
        ];
        for (key, action) in expected {
            assert_eq!(find_action(&map, key, &none), Some(action), "key {key}");
        }
    }

    #[test]
    fn duplicate_keybinding_is_rejected() {
        let mut config = KeybindingsConfig::default();
        config.toggle_dim = vec!["c".to_string()];

        let err = config.build_action_map().unwrap_err();
        assert!(matches!(err, KeybindingError::Duplicate { .. }));
        assert!(err.to_string().contains("duplicate keybinding 'c'"));
    }
}
