//! Utility functions for colors and unit conversion.
//!
//! This module provides:
//! - Color name parsing for the config file
//! - Human-readable color names for log output
//! - Device-independent to device-pixel conversion

use crate::draw::{Color, color::*};

// ============================================================================
// Color Mapping
// ============================================================================

/// Maps color name strings to Color values.
///
/// Used by the configuration system to parse color names from the config file.
///
/// # Supported Names (case-insensitive)
/// - "red", "green", "blue", "yellow", "orange", "pink", "white", "black"
///
/// # Returns
/// - `Some(Color)` if the name matches a predefined color
/// - `None` if the name is not recognized
pub fn name_to_color(name: &str) -> Option<Color> {
    match name.trim().to_lowercase().as_str() {
        "red" => Some(RED),
        "green" => Some(GREEN),
        "blue" => Some(BLUE),
        "yellow" => Some(YELLOW),
        "orange" => Some(ORANGE),
        "pink" => Some(PINK),
        "white" => Some(WHITE),
        "black" => Some(BLACK),
        _ => None,
    }
}

/// Maps a Color value to its human-readable name.
///
/// Uses approximate matching (0.1 tolerance per channel). Translucent black
/// reports as "Highlighter". Anything else is "Custom".
pub fn color_to_name(color: &Color) -> &'static str {
    let near = |value: f64, target: f64| (value - target).abs() < 0.1;
    let rgb = |r: f64, g: f64, b: f64| near(color.r, r) && near(color.g, g) && near(color.b, b);

    if rgb(0.0, 0.0, 0.0) && color.a < 0.9 {
        "Highlighter"
    } else if rgb(1.0, 0.0, 0.0) {
        "Red"
    } else if rgb(0.0, 1.0, 0.0) {
        "Green"
    } else if rgb(0.0, 0.0, 1.0) {
        "Blue"
    } else if rgb(1.0, 1.0, 0.0) {
        "Yellow"
    } else if rgb(ORANGE.r, ORANGE.g, ORANGE.b) {
        "Orange"
    } else if rgb(PINK.r, PINK.g, PINK.b) {
        "Pink"
    } else if rgb(1.0, 1.0, 1.0) {
        "White"
    } else if rgb(0.0, 0.0, 0.0) {
        "Black"
    } else {
        "Custom"
    }
}

// ============================================================================
// Unit Conversion
// ============================================================================

/// Converts a device-independent length to device pixels.
///
/// `pixels_per_dp` is the output's buffer scale; values below 1 are treated as 1.
pub fn dp_to_px(dp: f64, pixels_per_dp: f64) -> f64 {
    dp * pixels_per_dp.max(1.0)
}
