//! Tool state: the color, width and dim flag that new strokes snapshot.

use crate::config::{Action, Config};
use crate::draw::{BLUE, Color, GREEN, HIGHLIGHTER, ORANGE, PINK, RED, YELLOW};

/// Palette and width presets the key commands switch between.
///
/// Widths are in device-independent units.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolPresets {
    pub red: Color,
    pub green: Color,
    pub blue: Color,
    pub yellow: Color,
    pub orange: Color,
    pub pink: Color,
    pub width_small: f64,
    pub width_medium: f64,
    pub width_large: f64,
    pub highlighter_color: Color,
    pub highlighter_width: f64,
}

impl Default for ToolPresets {
    fn default() -> Self {
        Self {
            red: RED,
            green: GREEN,
            blue: BLUE,
            yellow: YELLOW,
            orange: ORANGE,
            pink: PINK,
            width_small: 3.0,
            width_medium: 6.0,
            width_large: 12.0,
            highlighter_color: HIGHLIGHTER,
            highlighter_width: 20.0,
        }
    }
}

impl ToolPresets {
    /// Builds presets from the `[tools]` section.
    pub fn from_config(config: &Config) -> Self {
        let tools = &config.tools;
        Self {
            width_small: tools.width_small,
            width_medium: tools.width_medium,
            width_large: tools.width_large,
            highlighter_color: Color::from_rgba8(0, 0, 0, tools.highlighter_alpha),
            highlighter_width: tools.highlighter_width,
            ..Self::default()
        }
    }
}

/// Current tool settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToolState {
    /// Ink color for the next stroke
    pub color: Color,
    /// Ink width for the next stroke, in device-independent units
    pub width_dp: f64,
    /// Whether the dim overlay is painted over the background
    pub dim: bool,
}

impl Default for ToolState {
    fn default() -> Self {
        Self {
            color: RED,
            width_dp: 6.0,
            dim: false,
        }
    }
}

impl ToolState {
    pub fn new(color: Color, width_dp: f64) -> Self {
        Self {
            color,
            width_dp,
            dim: false,
        }
    }

    /// Starting tool state from the `[drawing]` section.
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.drawing.default_color.to_color(),
            config.drawing.default_width,
        )
    }

    /// Applies a tool command.
    ///
    /// Returns false for actions that do not touch tool state (exit, clear).
    pub fn apply(&mut self, action: Action, presets: &ToolPresets) -> bool {
        match action {
            Action::SetColorRed => self.color = presets.red,
            Action::SetColorGreen => self.color = presets.green,
            Action::SetColorBlue => self.color = presets.blue,
            Action::SetColorYellow => self.color = presets.yellow,
            Action::SetColorOrange => self.color = presets.orange,
            Action::SetColorPink => self.color = presets.pink,
            Action::Highlighter => {
                self.color = presets.highlighter_color;
                self.width_dp = presets.highlighter_width;
            }
            Action::WidthSmall => self.width_dp = presets.width_small,
            Action::WidthMedium => self.width_dp = presets.width_medium,
            Action::WidthLarge => self.width_dp = presets.width_large,
            Action::ToggleDim => self.dim = !self.dim,
            Action::Exit | Action::ClearCanvas => return false,
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn highlighter_sets_color_and_width() {
        let presets = ToolPresets::default();
        let mut tool = ToolState::default();
        assert!(tool.apply(Action::Highlighter, &presets));
        assert_eq!(tool.color, HIGHLIGHTER);
        assert_eq!(tool.width_dp, 20.0);
    }

    #[test]
    fn width_presets_apply() {
        let presets = ToolPresets::default();
        let mut tool = ToolState::default();
        tool.apply(Action::WidthSmall, &presets);
        assert_eq!(tool.width_dp, 3.0);
        tool.apply(Action::WidthLarge, &presets);
        assert_eq!(tool.width_dp, 12.0);
        tool.apply(Action::WidthMedium, &presets);
        assert_eq!(tool.width_dp, 6.0);
    }

    #[test]
    fn color_commands_are_idempotent() {
        let presets = ToolPresets::default();
        let mut tool = ToolState::default();
        tool.apply(Action::SetColorOrange, &presets);
        let once = tool;
        tool.apply(Action::SetColorOrange, &presets);
        assert_eq!(tool, once);
        assert_eq!(tool.color, ORANGE);
    }

    #[test]
    fn non_tool_actions_leave_state_untouched() {
        let presets = ToolPresets::default();
        let mut tool = ToolState::default();
        assert!(!tool.apply(Action::ClearCanvas, &presets));
        assert!(!tool.apply(Action::Exit, &presets));
        assert_eq!(tool, ToolState::default());
    }

    #[test]
    fn presets_follow_config() {
        let mut config = Config::default();
        config.tools.width_large = 16.0;
        config.tools.highlighter_alpha = 0x80;
        let presets = ToolPresets::from_config(&config);
        assert_eq!(presets.width_large, 16.0);
        assert_eq!(presets.highlighter_color.a, 128.0 / 255.0);
        assert_eq!(presets.red, RED);
    }
}
