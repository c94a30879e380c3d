//! Keyboard state tracking

use std::collections::HashSet;
use winit::event::ElementState;
use winit::keyboard::KeyCode;

use crate::sim::TickInput;

const UP_KEY: KeyCode = KeyCode::ArrowUp;
const DOWN_KEY: KeyCode = KeyCode::ArrowDown;

/// Keys currently held down
#[derive(Debug, Default)]
pub struct KeyboardState {
    keys_down: HashSet<KeyCode>,
}

impl KeyboardState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key press or release
    pub fn process_key(&mut self, key: KeyCode, state: ElementState) {
        match state {
            ElementState::Pressed => {
                self.keys_down.insert(key);
            }
            ElementState::Released => {
                self.keys_down.remove(&key);
            }
        }
    }

    pub fn is_down(&self, key: KeyCode) -> bool {
        self.keys_down.contains(&key)
    }

    /// Forget all held keys (window lost focus, releases never arrive)
    pub fn release_all(&mut self) {
        self.keys_down.clear();
    }

    /// Snapshot for the next simulation tick
    pub fn tick_input(&self) -> TickInput {
        TickInput {
            up: self.is_down(UP_KEY),
            down: self.is_down(DOWN_KEY),
        }
    }
}
