//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed step per tick (integer velocities, no delta time)
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod ball;
pub mod collision;
pub mod paddle;
pub mod state;
pub mod tick;

pub use ball::Ball;
pub use collision::{Rect, circle_rect_overlap, snap_off_paddle};
pub use paddle::{Controller, Paddle, clamp_to_screen};
pub use state::{GameState, Score, Side};
pub use tick::{TickInput, TickReport, tick};
