//! Configuration file support for screenpen.
//!
//! This module handles loading and validating user settings from the configuration file
//! located at `~/.config/screenpen/config.toml`. Settings include the starting tool state,
//! width presets, canvas colors, keybindings, performance tuning and debug logging.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod enums;
pub mod keybindings;
pub mod types;

// Re-export commonly used types at module level
pub use enums::ColorSpec;
pub use keybindings::{Action, ActionMap, KeyBinding, KeybindingError, KeybindingsConfig};
pub use types::{DebugConfig, DrawingConfig, PerformanceConfig, ToolsConfig, UiConfig};

use crate::draw::{Color, FrameStyle};
use anyhow::{Context, Result};
use log::{debug, info, warn};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Environment variable that turns on verbose event logging.
pub const DEBUG_ENV: &str = "SCREENPEN_DEBUG";

/// Parses the debug flag value: only the exact strings `1` and `true` enable it.
pub fn parse_debug_flag(value: Option<&str>) -> bool {
    matches!(value, Some("1" | "true"))
}

/// Reads [`DEBUG_ENV`] from the process environment.
pub fn debug_from_env() -> bool {
    parse_debug_flag(std::env::var(DEBUG_ENV).ok().as_deref())
}

/// Main configuration structure containing all user settings.
///
/// This is the root configuration type that gets deserialized from the TOML file.
/// All fields have sensible defaults and will use those if not specified in the config file.
///
/// # Example TOML
/// ```toml
/// [drawing]
/// default_color = "red"
/// default_width = 6.0
///
/// [tools]
/// width_small = 3.0
/// width_medium = 6.0
/// width_large = 12.0
/// highlighter_width = 20.0
/// highlighter_alpha = 64
///
/// [ui]
/// background_color = [0.96, 0.96, 0.96, 1.0]
///
/// [performance]
/// buffer_count = 3
/// enable_vsync = true
///
/// [keybindings]
/// exit = ["Escape", "Ctrl+Q"]
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, JsonSchema)]
pub struct Config {
    /// Starting tool state (color, width)
    #[serde(default)]
    pub drawing: DrawingConfig,

    /// Width presets and highlighter settings
    #[serde(default)]
    pub tools: ToolsConfig,

    /// Canvas colors
    #[serde(default)]
    pub ui: UiConfig,

    /// Performance tuning options
    #[serde(default)]
    pub performance: PerformanceConfig,

    /// Verbose logging behaviour
    #[serde(default)]
    pub debug: DebugConfig,

    /// Key-to-command mapping
    #[serde(default)]
    pub keybindings: KeybindingsConfig,
}

const WIDTH_RANGE: (f64, f64) = (1.0, 50.0);

fn clamp_width(name: &str, value: &mut f64) {
    let (min, max) = WIDTH_RANGE;
    if !(min..=max).contains(value) {
        warn!("Invalid {name} {value:.1}, clamping to {min:.1}-{max:.1} range");
        *value = if value.is_nan() {
            min
        } else {
            value.clamp(min, max)
        };
    }
}

fn clamp_channels(name: &str, rgba: &mut [f64; 4]) {
    for (i, channel) in rgba.iter_mut().enumerate() {
        if !(0.0..=1.0).contains(channel) {
            warn!("Invalid {name}[{i}] = {channel:.3}, clamping to 0.0-1.0");
            *channel = if channel.is_nan() {
                0.0
            } else {
                channel.clamp(0.0, 1.0)
            };
        }
    }
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Invalid values are clamped to the nearest valid value and a warning is logged.
    ///
    /// Validated ranges:
    /// - widths (default and presets): 1.0 - 50.0
    /// - color channels: 0.0 - 1.0
    /// - `buffer_count`: 2 - 4
    /// - `pointer_log_interval_ms`: 0 - 5000
    ///
    /// Keybindings that fail to parse are replaced by the defaults.
    pub fn validate_and_clamp(&mut self) {
        clamp_width("default_width", &mut self.drawing.default_width);
        clamp_width("width_small", &mut self.tools.width_small);
        clamp_width("width_medium", &mut self.tools.width_medium);
        clamp_width("width_large", &mut self.tools.width_large);
        clamp_width("highlighter_width", &mut self.tools.highlighter_width);

        clamp_channels("background_color", &mut self.ui.background_color);
        clamp_channels("dim_color", &mut self.ui.dim_color);

        if !(2..=4).contains(&self.performance.buffer_count) {
            warn!(
                "Invalid buffer_count {}, clamping to 2-4 range",
                self.performance.buffer_count
            );
            self.performance.buffer_count = self.performance.buffer_count.clamp(2, 4);
        }

        if self.debug.pointer_log_interval_ms > 5000 {
            warn!(
                "Invalid pointer_log_interval_ms {}, clamping to 5000",
                self.debug.pointer_log_interval_ms
            );
            self.debug.pointer_log_interval_ms = 5000;
        }

        if let Err(err) = self.keybindings.build_action_map() {
            warn!("Invalid keybindings ({err}), falling back to defaults");
            self.keybindings = KeybindingsConfig::default();
        }
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/screenpen/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("screenpen");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from the default path, or returns defaults if not found.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::get_config_path()?)
    }

    /// Loads configuration from `config_path`, or returns defaults if the file is missing.
    ///
    /// All loaded values are validated and clamped to acceptable ranges.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or is not valid TOML.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        let config_str = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

        let mut config: Config = toml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config from {}", config_path.display()))?;

        config.validate_and_clamp();

        info!("Loaded config from {}", config_path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    /// JSON schema describing the config file.
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Config)
    }

    /// Colors for the background and dim layers.
    pub fn frame_style(&self) -> FrameStyle {
        FrameStyle {
            background: Color::from_array(self.ui.background_color),
            dim_overlay: Color::from_array(self.ui.dim_color),
        }
    }

    /// Gap enforced between pointer debug log lines.
    pub fn pointer_log_interval(&self) -> Duration {
        Duration::from_millis(self.debug.pointer_log_interval_ms)
    }
}
