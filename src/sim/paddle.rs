//! Paddles and their movement policies
//!
//! Both paddles share one data type. What differs is the [`Controller`]
//! that decides the raw vertical step each tick; the result is always
//! passed through [`clamp_to_screen`].

use glam::Vec2;

use super::collision::Rect;
use super::tick::TickInput;
use crate::Bounds;
use crate::consts::{PADDLE_EDGE_OFFSET, PADDLE_HEIGHT, PADDLE_SPEED, PADDLE_WIDTH};

/// Movement policy for a paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Controller {
    /// Driven by the up/down keys
    Human,
    /// Chases the ball's vertical position, one speed step per tick
    BallTracker,
}

impl Controller {
    /// Vertical displacement for this tick, before clamping
    pub fn displacement(self, paddle: &Paddle, input: &TickInput, ball_y: f32) -> f32 {
        let step = paddle.speed as f32;
        match self {
            Controller::Human => {
                let mut dy = 0.0;
                if input.up {
                    dy -= step;
                }
                if input.down {
                    dy += step;
                }
                dy
            }
            Controller::BallTracker => {
                // Ties move down
                if paddle.center_y() > ball_y { -step } else { step }
            }
        }
    }
}

/// A paddle entity
#[derive(Debug, Clone, PartialEq)]
pub struct Paddle {
    /// Top-left corner
    pub pos: Vec2,
    /// (width, height)
    pub size: Vec2,
    /// Pixels moved per tick
    pub speed: u32,
    /// Gap between the paddle and its screen edge
    pub edge_offset: f32,
    pub controller: Controller,
}

impl Paddle {
    /// Human paddle on the left edge, vertically centered
    pub fn player(bounds: Bounds) -> Self {
        let mut paddle = Self::centered(bounds, Controller::Human);
        paddle.pos.x = paddle.edge_offset;
        paddle
    }

    /// Ball-tracking paddle on the right edge, vertically centered
    pub fn opponent(bounds: Bounds) -> Self {
        let mut paddle = Self::centered(bounds, Controller::BallTracker);
        paddle.pos.x = bounds.width - paddle.width() - paddle.edge_offset;
        paddle
    }

    fn centered(bounds: Bounds, controller: Controller) -> Self {
        Self {
            pos: Vec2::new(0.0, bounds.height / 2.0 - PADDLE_HEIGHT / 2.0),
            size: Vec2::new(PADDLE_WIDTH, PADDLE_HEIGHT),
            speed: PADDLE_SPEED,
            edge_offset: PADDLE_EDGE_OFFSET,
            controller,
        }
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.size.x
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.size.y
    }

    #[inline]
    pub fn center_y(&self) -> f32 {
        self.pos.y + self.size.y / 2.0
    }

    /// Bounding rectangle for collision and drawing
    pub fn rect(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, self.size.x, self.size.y)
    }

    /// Move one tick under this paddle's controller, then clamp.
    /// `ball_y` is ignored by human paddles, `input` by trackers.
    pub fn update(&mut self, input: &TickInput, ball_y: f32, bounds: Bounds) {
        let dy = self.controller.displacement(self, input, ball_y);
        self.pos.y += dy;
        self.clamp(bounds);
    }

    /// Keep the paddle fully on screen
    pub fn clamp(&mut self, bounds: Bounds) {
        self.pos.y = clamp_to_screen(self.pos.y, self.size.y, bounds.height);
    }
}

/// Constrain a paddle's top edge so the whole paddle stays on screen
#[inline]
pub fn clamp_to_screen(y: f32, height: f32, screen_height: f32) -> f32 {
    if y < 0.0 {
        0.0
    } else if y + height > screen_height {
        screen_height - height
    } else {
        y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn held(up: bool, down: bool) -> TickInput {
        TickInput { up, down }
    }

    #[test]
    fn test_paddles_start_centered_at_their_edges() {
        let bounds = Bounds::default();
        let player = Paddle::player(bounds);
        let opponent = Paddle::opponent(bounds);

        assert_eq!(player.pos, Vec2::new(30.0, 480.0));
        assert_eq!(opponent.pos, Vec2::new(1920.0 - 25.0 - 30.0, 480.0));
        assert_eq!(player.controller, Controller::Human);
        assert_eq!(opponent.controller, Controller::BallTracker);
    }

    #[test]
    fn test_paddles_sit_edge_offset_from_their_walls() {
        let bounds = Bounds::new(800.0, 600.0);
        let player = Paddle::player(bounds);
        let opponent = Paddle::opponent(bounds);

        assert_eq!(player.pos.x, player.edge_offset);
        assert_eq!(
            bounds.width - opponent.rect().right(),
            opponent.edge_offset
        );
        assert_eq!(opponent.pos.y, 300.0 - opponent.height() / 2.0);
    }

    #[test]
    fn test_human_up_and_down() {
        let bounds = Bounds::default();
        let mut paddle = Paddle::player(bounds);

        paddle.update(&held(true, false), 0.0, bounds);
        assert_eq!(paddle.pos.y, 474.0);

        paddle.update(&held(false, true), 0.0, bounds);
        assert_eq!(paddle.pos.y, 480.0);
    }

    #[test]
    fn test_human_both_keys_cancel() {
        let bounds = Bounds::default();
        let mut paddle = Paddle::player(bounds);

        paddle.update(&held(true, true), 0.0, bounds);
        assert_eq!(paddle.pos.y, 480.0);
    }

    #[test]
    fn test_human_ignores_ball() {
        let bounds = Bounds::default();
        let mut paddle = Paddle::player(bounds);

        paddle.update(&TickInput::default(), 0.0, bounds);
        assert_eq!(paddle.pos.y, 480.0);
    }

    #[test]
    fn test_clamp_top_and_bottom() {
        let bounds = Bounds::default();
        let mut paddle = Paddle::player(bounds);

        paddle.pos.y = 3.0;
        paddle.update(&held(true, false), 0.0, bounds);
        assert_eq!(paddle.pos.y, 0.0);

        paddle.pos.y = bounds.height - paddle.height() - 2.0;
        paddle.update(&held(false, true), 0.0, bounds);
        assert_eq!(paddle.pos.y, bounds.height - paddle.height());
    }

    #[test]
    fn test_clamp_to_screen_passes_through_in_range() {
        assert_eq!(clamp_to_screen(100.0, 120.0, 1080.0), 100.0);
        assert_eq!(clamp_to_screen(0.0, 120.0, 1080.0), 0.0);
        assert_eq!(clamp_to_screen(960.0, 120.0, 1080.0), 960.0);
        assert_eq!(clamp_to_screen(-5.0, 120.0, 1080.0), 0.0);
        assert_eq!(clamp_to_screen(970.0, 120.0, 1080.0), 960.0);
    }

    #[test]
    fn test_tracker_moves_up_toward_higher_ball() {
        let bounds = Bounds::default();
        let mut paddle = Paddle::opponent(bounds);
        let before = paddle.pos.y;

        // center is 540
        paddle.update(&TickInput::default(), 100.0, bounds);
        assert_eq!(paddle.pos.y, before - PADDLE_SPEED as f32);
    }

    #[test]
    fn test_tracker_moves_down_on_tie() {
        let bounds = Bounds::default();
        let mut paddle = Paddle::opponent(bounds);
        let before = paddle.pos.y;

        paddle.update(&TickInput::default(), paddle.center_y(), bounds);
        assert_eq!(paddle.pos.y, before + PADDLE_SPEED as f32);
    }

    #[test]
    fn test_tracker_ignores_keys() {
        let bounds = Bounds::default();
        let mut paddle = Paddle::opponent(bounds);
        let before = paddle.pos.y;

        paddle.update(&held(true, false), 1000.0, bounds);
        assert_eq!(paddle.pos.y, before + PADDLE_SPEED as f32);
    }

    #[test]
    fn test_tracker_clamps_at_top() {
        let bounds = Bounds::default();
        let mut paddle = Paddle::opponent(bounds);
        paddle.pos.y = 2.0;

        paddle.update(&TickInput::default(), 0.0, bounds);
        assert_eq!(paddle.pos.y, 0.0);
    }
}
