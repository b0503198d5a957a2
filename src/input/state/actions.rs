use crate::config::{Action, keybindings};
use crate::input::events::{KeyInput, KeyState};
use crate::util;
use log::{debug, info};

use super::InputState;

impl InputState {
    /// Processes a keyboard event.
    ///
    /// Records the held modifiers, then looks the key up in the action map.
    /// Releases never trigger actions.
    pub fn on_key(&mut self, input: KeyInput) {
        self.modifiers = input.modifiers;

        if input.state != KeyState::Pressed {
            return;
        }

        if self.debug.enabled() {
            debug!("Key {:?} pressed (modifiers: {})", input.key, input.modifiers);
        }

        let Some(name) = input.key.name() else {
            return;
        };

        if let Some(action) = keybindings::find_action(&self.action_map, &name, &input.modifiers) {
            self.handle_action(action);
        }
    }

    /// Handle an action triggered by a keybinding.
    pub fn handle_action(&mut self, action: Action) {
        match action {
            Action::Exit => {
                info!("Exit requested");
                self.should_exit = true;
            }
            Action::ClearCanvas => self.clear(),
            _ => {
                self.tool.apply(action, &self.presets);
                if self.debug.enabled() {
                    debug!(
                        "Tool: {} width {:.1}dp dim {}",
                        util::color_to_name(&self.tool.color),
                        self.tool.width_dp,
                        self.tool.dim
                    );
                }
            }
        }
        self.needs_redraw = true;
    }
}
