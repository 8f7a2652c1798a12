//! Keyboard state
//!
//! The host forwards key down/up events by their DOM-style key name; the
//! game polls which keys are held once per tick.

use std::collections::HashSet;

use crate::sim::TickInput;

/// Set of currently held keys, by normalized name
#[derive(Debug, Clone, Default)]
pub struct KeyState {
    held: HashSet<String>,
}

/// Map a DOM `KeyboardEvent.key` value onto the names the game polls.
/// Canonical names map onto themselves.
fn normalize(key: &str) -> String {
    let key = key.to_lowercase();
    let canonical = match key.as_str() {
        " " | "spacebar" | "space" => "space",
        "arrowleft" | "left" => "left",
        "arrowright" | "right" => "right",
        "arrowup" | "up" => "up",
        "arrowdown" | "down" => "down",
        _ => return key,
    };
    canonical.to_string()
}

impl KeyState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn key_down(&mut self, key: &str) {
        self.held.insert(normalize(key));
    }

    pub fn key_up(&mut self, key: &str) {
        self.held.remove(&normalize(key));
    }

    /// Forget everything (e.g. on window blur)
    pub fn clear(&mut self) {
        self.held.clear();
    }

    pub fn is_down(&self, key: &str) -> bool {
        self.held.contains(&normalize(key))
    }

    /// Held-key part of a tick's input
    pub fn to_tick_input(&self) -> TickInput {
        TickInput {
            up: self.is_down("up") || self.is_down("w"),
            down: self.is_down("down") || self.is_down("s"),
            left: self.is_down("left") || self.is_down("a"),
            right: self.is_down("right") || self.is_down("d"),
            pause: self.is_down("space"),
            ..TickInput::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrows_and_wasd() {
        let mut keys = KeyState::new();
        keys.key_down("ArrowUp");
        keys.key_down("D");
        let input = keys.to_tick_input();
        assert!(input.up && input.right);
        assert!(!input.down && !input.left && !input.pause);

        keys.key_up("ArrowUp");
        keys.key_down(" ");
        let input = keys.to_tick_input();
        assert!(!input.up && input.pause);
    }

    #[test]
    fn test_key_names_are_interchangeable() {
        let mut keys = KeyState::new();
        keys.key_down("ArrowLeft");
        assert!(keys.is_down("ArrowLeft"));
        assert!(keys.is_down("Left"));
        assert!(keys.is_down("LEFT"));
        assert!(keys.is_down("left"));

        keys.key_down("Spacebar");
        assert!(keys.is_down(" ") && keys.is_down("SPACE"));
        keys.key_up("SPACE");
        assert!(!keys.is_down(" "));

        keys.key_down("ArrowDown");
        keys.key_down("ArrowRight");
        let input = keys.to_tick_input();
        assert!(input.left && input.down && input.right);
        assert!(!input.up && !input.pause);
    }

    #[test]
    fn test_clear_releases_all() {
        let mut keys = KeyState::new();
        keys.key_down("a");
        keys.key_down("Space");
        keys.clear();
        let input = keys.to_tick_input();
        assert!(!input.left && !input.pause);
    }
}
