//! Input management system
//!
//! Key events arrive from the host whenever it delivers them; the manager
//! only buffers them into a held-keys set. Game code samples that set once
//! per frame, and uses the return value of [`InputManager::handle_key_input`]
//! for actions that should fire once per press.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Held-key tracker
#[derive(Debug, Default, Clone)]
pub struct InputManager {
    held: HashSet<KeyCode>,
}

impl InputManager {
    /// Create a new input manager
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle key input
    ///
    /// Returns `true` only for a fresh press, i.e. the key was not already
    /// held. Key-repeat presses and releases return `false`.
    pub fn handle_key_input(&mut self, key: KeyCode, pressed: bool) -> bool {
        if pressed {
            self.held.insert(key)
        } else {
            self.held.remove(&key);
            false
        }
    }

    /// Whether the key is currently held
    pub fn is_held(&self, key: KeyCode) -> bool {
        self.held.contains(&key)
    }

    /// Whether any of the keys is currently held
    pub fn any_held(&self, keys: &[KeyCode]) -> bool {
        keys.iter().any(|key| self.held.contains(key))
    }

    /// Number of keys currently held
    pub fn held_count(&self) -> usize {
        self.held.len()
    }

    /// Forget every held key
    pub fn clear(&mut self) {
        self.held.clear();
    }
}

/// Key codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KeyCode {
    /// A key
    A,
    /// D key
    D,
    /// S key
    S,
    /// W key
    W,
    /// Space key
    Space,
    /// Enter key
    Enter,
    /// Escape key
    Escape,
    /// Up arrow
    Up,
    /// Down arrow
    Down,
    /// Left arrow
    Left,
    /// Right arrow
    Right,
}
