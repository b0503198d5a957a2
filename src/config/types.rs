//! Configuration type definitions.

use super::enums::ColorSpec;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Drawing-related settings.
///
/// Controls the tool state the overlay starts with. Users change these at
/// runtime with the color and width keys.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct DrawingConfig {
    /// Initial ink color - either a named color (red, green, blue, yellow, orange, pink, white, black)
    /// or an RGB array like `[255, 0, 0]`
    #[serde(default = "default_color")]
    pub default_color: ColorSpec,

    /// Initial ink width in device-independent units (valid range: 1.0 - 50.0)
    #[serde(default = "default_width")]
    pub default_width: f64,
}

impl Default for DrawingConfig {
    fn default() -> Self {
        Self {
            default_color: default_color(),
            default_width: default_width(),
        }
    }
}

/// Width presets and highlighter settings.
///
/// All widths are in device-independent units (valid range: 1.0 - 50.0) and
/// are converted to pixels with the output's scale factor when a stroke starts.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ToolsConfig {
    /// Width selected by the small-width key
    #[serde(default = "default_width_small")]
    pub width_small: f64,

    /// Width selected by the medium-width key
    #[serde(default = "default_width_medium")]
    pub width_medium: f64,

    /// Width selected by the large-width key
    #[serde(default = "default_width_large")]
    pub width_large: f64,

    /// Width selected together with the highlighter color
    #[serde(default = "default_highlighter_width")]
    pub highlighter_width: f64,

    /// Opacity of the black highlighter ink (0 - 255)
    #[serde(default = "default_highlighter_alpha")]
    pub highlighter_alpha: u8,
}

impl Default for ToolsConfig {
    fn default() -> Self {
        Self {
            width_small: default_width_small(),
            width_medium: default_width_medium(),
            width_large: default_width_large(),
            highlighter_width: default_highlighter_width(),
            highlighter_alpha: default_highlighter_alpha(),
        }
    }
}

/// Canvas appearance.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct UiConfig {
    /// Background fill [R, G, B, A] (0.0-1.0 range); lower the alpha to see the desktop
    #[serde(default = "default_background_color")]
    pub background_color: [f64; 4],

    /// Overlay painted over the background when dimming is toggled [R, G, B, A]
    #[serde(default = "default_dim_color")]
    pub dim_color: [f64; 4],
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            background_color: default_background_color(),
            dim_color: default_dim_color(),
        }
    }
}

/// Performance tuning options.
///
/// These settings control rendering performance and smoothness. Most users
/// won't need to change these from their defaults.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct PerformanceConfig {
    /// Number of shm buffers in the pool (valid range: 2 - 4)
    #[serde(default = "default_buffer_count")]
    pub buffer_count: u32,

    /// Pace rendering with compositor frame callbacks
    /// Set to false for lower latency at the cost of extra redraws
    #[serde(default = "default_enable_vsync")]
    pub enable_vsync: bool,
}

impl Default for PerformanceConfig {
    fn default() -> Self {
        Self {
            buffer_count: default_buffer_count(),
            enable_vsync: default_enable_vsync(),
        }
    }
}

/// Verbose-logging behaviour (only relevant when debug logging is on).
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct DebugConfig {
    /// Minimum gap between two pointer log lines in milliseconds (valid range: 0 - 5000)
    #[serde(default = "default_pointer_log_interval_ms")]
    pub pointer_log_interval_ms: u64,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            pointer_log_interval_ms: default_pointer_log_interval_ms(),
        }
    }
}

// =============================================================================
// Default value functions
// =============================================================================

fn default_color() -> ColorSpec {
    ColorSpec::Name("red".to_string())
}

fn default_width() -> f64 {
    6.0
}

fn default_width_small() -> f64 {
    3.0
}

fn default_width_medium() -> f64 {
    6.0
}

fn default_width_large() -> f64 {
    12.0
}

fn default_highlighter_width() -> f64 {
    20.0
}

fn default_highlighter_alpha() -> u8 {
    0x40
}

fn default_background_color() -> [f64; 4] {
    [245.0 / 255.0, 245.0 / 255.0, 245.0 / 255.0, 1.0]
}

fn default_dim_color() -> [f64; 4] {
    [0.0, 0.0, 0.0, 120.0 / 255.0]
}

fn default_buffer_count() -> u32 {
    3
}

fn default_enable_vsync() -> bool {
    true
}

fn default_pointer_log_interval_ms() -> u64 {
    150
}
