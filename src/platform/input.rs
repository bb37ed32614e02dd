//! Keyboard state to per-frame commands

use crate::sim::TickInput;

/// Raw key state as polled from the window this frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyState {
    /// Fire / start (space)
    pub action: bool,
    /// Pause (P)
    pub pause: bool,
    /// Thrust (Up / W)
    pub thrust: bool,
    /// Rotate left (Left / A)
    pub left: bool,
    /// Rotate right (Right / D)
    pub right: bool,
}

/// Turns held keys into a [`TickInput`]. The action and pause keys only
/// register on the frame they go down; movement keys register while held.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputLatch {
    previous: KeyState,
}

impl InputLatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sample(&mut self, keys: KeyState) -> TickInput {
        let action_pressed = keys.action && !self.previous.action;
        let pause_pressed = keys.pause && !self.previous.pause;
        self.previous = keys;

        // The action key doubles as fire and start; the state machine
        // ignores whichever does not apply to the current mode
        TickInput {
            fire: action_pressed,
            start: action_pressed,
            pause: pause_pressed,
            thrust: keys.thrust,
            rotate_left: keys.left,
            rotate_right: keys.right,
        }
    }
}
