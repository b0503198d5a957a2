//! One-shot placement signal and output naming helpers.
//!
//! The compositor tells us which output the overlay landed on through
//! `wl_surface.enter`. Only the first such event matters; later enters (for
//! example after an output hotplug) are ignored.

use thiserror::Error;

/// Errors while resolving which output the overlay is on.
///
/// These are never fatal; the caller logs them in debug mode.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PlacementError {
    #[error("no output named '{0}'")]
    UnknownOutput(String),
    #[error("compositor sent no information for the output")]
    NoOutputInfo,
}

/// Single-fire guard for the placement event.
#[derive(Debug, Default)]
pub struct Placement {
    handled: bool,
}

impl Placement {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true the first time it is called, false afterwards.
    pub fn fire(&mut self) -> bool {
        if self.handled {
            return false;
        }
        self.handled = true;
        true
    }

    pub fn is_handled(&self) -> bool {
        self.handled
    }
}

/// Human-readable identity for an output: `name-make-model`, skipping blanks.
///
/// Falls back to `id<N>` when the compositor sent nothing descriptive.
pub fn output_identity(name: Option<&str>, make: &str, model: &str, id: u32) -> String {
    let components: Vec<&str> = [name.unwrap_or(""), make, model]
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect();

    if components.is_empty() {
        format!("id{id}")
    } else {
        components.join("-")
    }
}

/// Picks the candidate whose output name equals `wanted`.
pub fn select_output<T, I>(candidates: I, wanted: &str) -> Result<T, PlacementError>
where
    I: IntoIterator<Item = (Option<String>, T)>,
{
    candidates
        .into_iter()
        .find(|(name, _)| name.as_deref() == Some(wanted))
        .map(|(_, candidate)| candidate)
        .ok_or_else(|| PlacementError::UnknownOutput(wanted.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placement_fires_once() {
        let mut placement = Placement::new();
        assert!(!placement.is_handled());
        assert!(placement.fire());
        assert!(placement.is_handled());
        assert!(!placement.fire());
        assert!(!placement.fire());
    }

    #[test]
    fn identity_joins_known_parts() {
        assert_eq!(
            output_identity(Some("DP-1"), "Dell", "U2720Q", 3),
            "DP-1-Dell-U2720Q"
        );
        assert_eq!(output_identity(None, "", "Panel", 3), "Panel");
        assert_eq!(output_identity(Some(""), "", "", 7), "id7");
    }

    #[test]
    fn select_output_by_name() {
        let candidates = vec![
            (Some("eDP-1".to_string()), 1),
            (None, 2),
            (Some("HDMI-A-1".to_string()), 3),
        ];
        assert_eq!(select_output(candidates.clone(), "HDMI-A-1"), Ok(3));
        assert_eq!(
            select_output(candidates, "DP-9"),
            Err(PlacementError::UnknownOutput("DP-9".to_string()))
        );
    }
}
