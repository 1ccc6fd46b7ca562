//! Key-to-intent mapping
//!
//! Turning and thrust are held controls, sampled once per frame from the
//! held-key set. Firing is edge-triggered: it happens once per key press.

use crate::config::ControlsConfig;
use bitflags::bitflags;
use rust_engine::input::{InputManager, KeyCode};

bitflags! {
    /// Held controls sampled for one frame; any combination may be set
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Controls: u8 {
        /// Rotate counter-clockwise
        const TURN_LEFT = 1 << 0;
        /// Rotate clockwise
        const TURN_RIGHT = 1 << 1;
        /// Push along the facing
        const THRUST_FORWARD = 1 << 2;
        /// Push against the facing
        const THRUST_BACKWARD = 1 << 3;
    }
}

/// Game action bound to a key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Held: turn left
    TurnLeft,
    /// Held: turn right
    TurnRight,
    /// Held: forward thrust
    ThrustForward,
    /// Held: reverse thrust
    ThrustBackward,
    /// One-shot: fire a bullet
    Fire,
}

impl Action {
    /// The held control for this action, `None` for one-shot actions
    pub const fn held_control(self) -> Option<Controls> {
        match self {
            Self::TurnLeft => Some(Controls::TURN_LEFT),
            Self::TurnRight => Some(Controls::TURN_RIGHT),
            Self::ThrustForward => Some(Controls::THRUST_FORWARD),
            Self::ThrustBackward => Some(Controls::THRUST_BACKWARD),
            Self::Fire => None,
        }
    }
}

/// Key bindings resolved from [`ControlsConfig`]
#[derive(Debug, Clone)]
pub struct KeyBindings {
    bindings: Vec<(Action, Vec<KeyCode>)>,
}

impl KeyBindings {
    /// Build bindings from config
    pub fn new(config: &ControlsConfig) -> Self {
        Self {
            bindings: vec![
                (Action::TurnLeft, config.turn_left.clone()),
                (Action::TurnRight, config.turn_right.clone()),
                (Action::ThrustForward, config.thrust_forward.clone()),
                (Action::ThrustBackward, config.thrust_backward.clone()),
                (Action::Fire, config.fire.clone()),
            ],
        }
    }

    /// Actions bound to a key, in binding order
    pub fn actions_for(&self, key: KeyCode) -> impl Iterator<Item = Action> + '_ {
        self.bindings
            .iter()
            .filter(move |(_, keys)| keys.contains(&key))
            .map(|(action, _)| *action)
    }

    /// Whether the key fires
    pub fn is_fire(&self, key: KeyCode) -> bool {
        self.actions_for(key).any(|action| action == Action::Fire)
    }

    /// Sample the held controls for this frame
    pub fn held_controls(&self, input: &InputManager) -> Controls {
        self.bindings
            .iter()
            .filter(|(_, keys)| input.any_held(keys))
            .filter_map(|(action, _)| action.held_control())
            .fold(Controls::empty(), |held, control| held | control)
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self::new(&ControlsConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn held(keys: &[KeyCode]) -> InputManager {
        let mut input = InputManager::new();
        for key in keys {
            input.handle_key_input(*key, true);
        }
        input
    }

    #[test]
    fn test_arrows_and_wasd_are_equivalent() {
        let bindings = KeyBindings::default();
        assert_eq!(bindings.held_controls(&held(&[KeyCode::Left])), Controls::TURN_LEFT);
        assert_eq!(bindings.held_controls(&held(&[KeyCode::A])), Controls::TURN_LEFT);
        assert_eq!(bindings.held_controls(&held(&[KeyCode::W])), Controls::THRUST_FORWARD);
        assert_eq!(bindings.held_controls(&held(&[KeyCode::Down])), Controls::THRUST_BACKWARD);
        assert_eq!(bindings.held_controls(&held(&[KeyCode::D])), Controls::TURN_RIGHT);
    }

    #[test]
    fn test_controls_combine() {
        let bindings = KeyBindings::default();
        let controls = bindings.held_controls(&held(&[KeyCode::Left, KeyCode::Right, KeyCode::Up, KeyCode::S]));
        assert_eq!(controls, Controls::all());
    }

    #[test]
    fn test_fire_is_not_a_held_control() {
        let bindings = KeyBindings::default();
        assert!(bindings.held_controls(&held(&[KeyCode::Space])).is_empty());
        assert!(bindings.is_fire(KeyCode::Space));
        assert!(!bindings.is_fire(KeyCode::Up));
    }

    #[test]
    fn test_unbound_key_does_nothing() {
        let bindings = KeyBindings::default();
        assert!(bindings.held_controls(&held(&[KeyCode::Escape, KeyCode::Enter])).is_empty());
        assert_eq!(bindings.actions_for(KeyCode::Escape).count(), 0);
    }

    #[test]
    fn test_custom_bindings() {
        let config = ControlsConfig {
            fire: vec![KeyCode::Enter, KeyCode::Up],
            ..ControlsConfig::default()
        };
        let bindings = KeyBindings::new(&config);

        assert!(bindings.is_fire(KeyCode::Enter));
        let actions: Vec<Action> = bindings.actions_for(KeyCode::Up).collect();
        assert_eq!(actions, vec![Action::ThrustForward, Action::Fire]);
    }
}
