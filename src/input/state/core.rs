//! Drawing state machine and input state management.

use super::debug::DebugLog;
use crate::config::{ActionMap, Config};
use crate::draw::{Frame, Point, Stroke};
use crate::input::events::InputEvent;
use crate::input::modifiers::Modifiers;
use crate::input::tool::{ToolPresets, ToolState};
use log::{debug, warn};

/// Current drawing mode state machine.
///
/// At most one stroke is open at a time. It exists only between a primary
/// press and the matching release or cancel.
#[derive(Debug, Default)]
pub enum DrawingState {
    /// Not actively drawing - waiting for a primary press
    #[default]
    Idle,
    /// A stroke is open (primary button held)
    Drawing {
        /// The stroke being extended by drags
        stroke: Stroke,
    },
}

/// Main input state containing all drawing session state.
///
/// This struct holds the committed strokes, the tool settings, the modifier
/// keys and the drawing mode. It consumes [`InputEvent`]s and records whether
/// a redraw or exit was requested.
pub struct InputState {
    /// Color, width and dim flag snapshotted into new strokes
    pub tool: ToolState,
    /// Palette and width presets the key commands select from
    pub presets: ToolPresets,
    /// Committed strokes in drawing order
    pub frame: Frame,
    /// Current drawing mode state machine
    pub state: DrawingState,
    /// Modifiers held at the last key event
    pub modifiers: Modifiers,
    /// Whether user requested to exit the overlay
    pub should_exit: bool,
    /// Whether the display needs to be redrawn
    pub needs_redraw: bool,
    /// Surface width in device pixels (set by backend after configuration)
    pub screen_width: u32,
    /// Surface height in device pixels (set by backend after configuration)
    pub screen_height: u32,
    /// Device pixels per device-independent unit (the output's buffer scale)
    pub pixels_per_dp: f64,
    /// Keybinding action map
    pub(super) action_map: ActionMap,
    /// Verbose logging switch and pointer log throttle
    pub(super) debug: DebugLog,
}

impl InputState {
    /// Creates a new InputState.
    ///
    /// Screen dimensions default to 0 and should be updated by the backend
    /// after surface configuration (see `update_screen_dimensions`).
    pub fn with_defaults(
        tool: ToolState,
        presets: ToolPresets,
        action_map: ActionMap,
        debug: DebugLog,
    ) -> Self {
        Self {
            tool,
            presets,
            frame: Frame::new(),
            state: DrawingState::Idle,
            modifiers: Modifiers::new(),
            should_exit: false,
            needs_redraw: true,
            screen_width: 0,
            screen_height: 0,
            pixels_per_dp: 1.0,
            action_map,
            debug,
        }
    }

    /// Builds the input state from a loaded config.
    pub fn from_config(config: &Config, debug_enabled: bool) -> Self {
        let action_map = match config.keybindings.build_action_map() {
            Ok(map) => map,
            Err(err) => {
                warn!("Failed to build keybindings ({err}), using defaults");
                crate::config::KeybindingsConfig::default()
                    .build_action_map()
                    .unwrap_or_default()
            }
        };

        Self::with_defaults(
            ToolState::from_config(config),
            ToolPresets::from_config(config),
            action_map,
            DebugLog::new(debug_enabled, config.pointer_log_interval()),
        )
    }

    /// Processes one batch of queued events in order.
    ///
    /// Processing stops as soon as an exit is requested. While a stroke is
    /// open a redraw is requested even if the batch was empty.
    pub fn dispatch<I>(&mut self, events: I)
    where
        I: IntoIterator<Item = InputEvent>,
    {
        for event in events {
            match event {
                InputEvent::Pointer(pointer) => self.on_pointer(pointer),
                InputEvent::Key(key) => self.on_key(key),
                InputEvent::Focus(focused) => self.on_focus(focused),
            }
            if self.should_exit {
                break;
            }
        }

        if self.is_drawing() {
            self.needs_redraw = true;
        }
    }

    /// Handles keyboard focus changes.
    ///
    /// Losing focus forgets held modifiers; the backend reports an
    /// interrupted drag separately as a pointer cancel.
    pub fn on_focus(&mut self, focused: bool) {
        if self.debug.enabled() {
            debug!("Keyboard focus {}", if focused { "gained" } else { "lost" });
        }
        if !focused {
            self.modifiers = Modifiers::new();
        }
    }

    /// Returns true while a stroke is open.
    pub fn is_drawing(&self) -> bool {
        matches!(self.state, DrawingState::Drawing { .. })
    }

    /// The stroke being drawn, if any.
    pub fn current_stroke(&self) -> Option<&Stroke> {
        match &self.state {
            DrawingState::Drawing { stroke } => Some(stroke),
            DrawingState::Idle => None,
        }
    }

    /// Empties the committed strokes and discards the open stroke.
    pub fn clear(&mut self) {
        let discarded = self.current_stroke().is_some();
        self.frame.clear();
        self.state = DrawingState::Idle;
        self.needs_redraw = true;
        if self.debug.enabled() {
            debug!("Canvas cleared (open stroke discarded: {discarded})");
        }
    }

    /// Moves the open stroke into the committed strokes.
    pub(super) fn commit_current(&mut self) {
        if let DrawingState::Drawing { stroke } = std::mem::take(&mut self.state) {
            if self.debug.enabled() {
                debug!(
                    "Stroke committed with {} points (width {:.1}px)",
                    stroke.points().len(),
                    stroke.width
                );
            }
            self.frame.commit(stroke);
            self.needs_redraw = true;
        }
    }

    /// Updates screen dimensions after backend configuration.
    ///
    /// # Arguments
    /// * `width` - Surface width in device pixels
    /// * `height` - Surface height in device pixels
    pub fn update_screen_dimensions(&mut self, width: u32, height: u32) {
        self.screen_width = width;
        self.screen_height = height;
        self.needs_redraw = true;
    }

    /// Sets the dp to px factor used for strokes started from now on.
    pub fn set_pixels_per_dp(&mut self, pixels_per_dp: f64) {
        self.pixels_per_dp = pixels_per_dp.max(1.0);
    }

    /// Returns true if `position` lies on the surface.
    ///
    /// Before the first configure the size is unknown and every position is accepted.
    pub(super) fn in_bounds(&self, position: Point) -> bool {
        if self.screen_width == 0 || self.screen_height == 0 {
            return true;
        }
        position.x >= 0.0
            && position.y >= 0.0
            && position.x < f64::from(self.screen_width)
            && position.y < f64::from(self.screen_height)
    }
}
