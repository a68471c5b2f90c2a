//! Player input handling.
//!
//! The window layer fills a [`PlayerInput`] each frame; it gets converted to
//! a [`PlayerCommand`] for the movement controller.

use glam::Vec2;
use maze_movement::{MoveKeys, PlayerCommand};
use serde::{Deserialize, Serialize};

/// Raw player input for a single frame.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayerInput {
    /// Movement keys held.
    pub movement: MovementInput,

    /// Mouse delta this frame (pixels, +y down).
    pub mouse_delta: (f32, f32),

    /// Exit was requested (Escape).
    pub exit: bool,
}

/// WASD key states.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct MovementInput {
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,
}

impl PlayerInput {
    /// Convert to a movement command. Mouse sensitivity is applied by the
    /// controller, so the delta is passed through raw.
    pub fn to_command(&self) -> PlayerCommand {
        let mut keys = MoveKeys::default();
        if self.movement.forward {
            keys.press(MoveKeys::FORWARD);
        }
        if self.movement.backward {
            keys.press(MoveKeys::BACKWARD);
        }
        if self.movement.left {
            keys.press(MoveKeys::LEFT);
        }
        if self.movement.right {
            keys.press(MoveKeys::RIGHT);
        }

        PlayerCommand {
            keys,
            look_delta: Vec2::new(self.mouse_delta.0, self.mouse_delta.1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_to_command() {
        let mut input = PlayerInput::default();
        input.movement.forward = true;
        input.movement.left = true;
        input.mouse_delta = (3.0, -2.0);

        let cmd = input.to_command();
        assert!(cmd.keys.held(MoveKeys::FORWARD));
        assert!(cmd.keys.held(MoveKeys::LEFT));
        assert!(!cmd.keys.held(MoveKeys::BACKWARD));
        assert!(!cmd.keys.held(MoveKeys::RIGHT));
        assert_eq!(cmd.look_delta, Vec2::new(3.0, -2.0));
    }

    #[test]
    fn test_idle_input() {
        let input = PlayerInput::default();
        let cmd = input.to_command();
        assert!(!cmd.keys.any());
        assert_eq!(cmd.look_delta, Vec2::ZERO);
    }
}
