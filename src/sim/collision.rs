//! Collision detection and response for axis-aligned paddles
//!
//! The ball is a circle and paddles are axis-aligned rectangles. Detection
//! uses the closest point on the rectangle to the circle center; response
//! pushes the ball out horizontally and forces its direction away from the
//! paddle instead of blindly flipping it.

use glam::Vec2;

use super::ball::Ball;
use super::state::Side;

/// Axis-aligned rectangle (top-left origin)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Point inside (or on) the rectangle nearest to `point`
    #[inline]
    pub fn closest_point(&self, point: Vec2) -> Vec2 {
        Vec2::new(
            point.x.clamp(self.x, self.right()),
            point.y.clamp(self.y, self.bottom()),
        )
    }
}

/// Circle vs rectangle overlap; touching counts
pub fn circle_rect_overlap(center: Vec2, radius: f32, rect: &Rect) -> bool {
    let closest = rect.closest_point(center);
    center.distance_squared(closest) <= radius * radius
}

/// Resolve a ball/paddle contact.
///
/// `side` is the owner of the paddle. The player's paddle sends the ball to
/// the right and the opponent's to the left; the ball is placed flush with
/// the paddle's inner face. Vertical velocity is left alone. Returns whether
/// a contact was resolved.
pub fn snap_off_paddle(ball: &mut Ball, paddle: &Rect, side: Side) -> bool {
    if !circle_rect_overlap(ball.pos, ball.radius, paddle) {
        return false;
    }

    match side {
        Side::Player => {
            ball.speed_x = ball.speed_x.abs();
            ball.pos.x = paddle.right() + ball.radius;
        }
        Side::Opponent => {
            ball.speed_x = -ball.speed_x.abs();
            ball.pos.x = paddle.x - ball.radius;
        }
    }
    true
}
