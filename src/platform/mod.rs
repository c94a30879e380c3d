//! Platform abstraction layer
//!
//! Handles the native side of the game loop:
//! - Keyboard state (held keys -> tick input)
//! - Frame pacing (fixed 60 Hz cap)

pub mod clock;
pub mod input;

pub use clock::FrameLimiter;
pub use input::KeyboardState;
