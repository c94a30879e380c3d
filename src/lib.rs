//! Ray Pong - classic two-paddle Pong
//!
//! Core modules:
//! - `sim`: Deterministic simulation (ball, paddles, collisions, scoring)
//! - `renderer`: Draw-list building and the wgpu pipeline
//! - `platform`: Keyboard state and frame pacing
//! - `app`: winit application driving one tick + render per frame
//! - `settings`: Optional JSON settings

pub mod app;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use app::PongApp;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Logical field dimensions (simulation units == pixels at native size)
    pub const SCREEN_WIDTH: f32 = 1920.0;
    pub const SCREEN_HEIGHT: f32 = 1080.0;

    /// Frame cap; the simulation advances exactly one tick per frame
    pub const TARGET_FPS: u32 = 60;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 15.0;
    /// Per-tick step on each axis (sign is randomized on reset)
    pub const BALL_SPEED: i32 = 7;

    /// Paddle defaults (shared by player and opponent)
    pub const PADDLE_WIDTH: f32 = 25.0;
    pub const PADDLE_HEIGHT: f32 = 120.0;
    pub const PADDLE_SPEED: u32 = 6;
    /// Gap between a paddle and its side of the screen
    pub const PADDLE_EDGE_OFFSET: f32 = 30.0;

    /// Score text
    pub const SCORE_FONT_SIZE: f32 = 80.0;
    pub const SCORE_TOP: f32 = 20.0;
}

/// Field size as (width, height)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
}

impl Default for Bounds {
    fn default() -> Self {
        Self {
            width: consts::SCREEN_WIDTH,
            height: consts::SCREEN_HEIGHT,
        }
    }
}

impl Bounds {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Exact center of the field
    #[inline]
    pub fn center(&self) -> glam::Vec2 {
        glam::Vec2::new(self.width / 2.0, self.height / 2.0)
    }
}
