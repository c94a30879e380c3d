//! The ball: integer-step motion, wall reflection and goal detection

use glam::Vec2;
use rand::Rng;

use super::state::Side;
use crate::Bounds;
use crate::consts::{BALL_RADIUS, BALL_SPEED};

/// A ball entity
#[derive(Debug, Clone, PartialEq)]
pub struct Ball {
    pub pos: Vec2,
    pub radius: f32,
    /// Horizontal step per tick
    pub speed_x: i32,
    /// Vertical step per tick
    pub speed_y: i32,
}

impl Ball {
    /// Ball at the center of `bounds` with default radius and speed
    pub fn new(bounds: Bounds) -> Self {
        Self {
            pos: bounds.center(),
            radius: BALL_RADIUS,
            speed_x: BALL_SPEED,
            speed_y: BALL_SPEED,
        }
    }

    #[inline]
    pub fn velocity(&self) -> Vec2 {
        Vec2::new(self.speed_x as f32, self.speed_y as f32)
    }

    /// Advance one tick.
    ///
    /// Reflects off the top and bottom edges and returns the side that scored
    /// if the ball crossed the left or right edge. A scoring ball is reset
    /// before returning, so at most one side scores per tick.
    pub fn update<R: Rng>(&mut self, bounds: Bounds, rng: &mut R) -> Option<Side> {
        self.pos += self.velocity();

        // Edge-crossing test only, no penetration correction
        if self.hits_horizontal_wall(bounds) {
            self.speed_y = -self.speed_y;
        }

        let scorer = if self.pos.x + self.radius >= bounds.width {
            Some(Side::Opponent)
        } else if self.pos.x - self.radius <= 0.0 {
            Some(Side::Player)
        } else {
            None
        };

        if scorer.is_some() {
            self.reset(bounds, rng);
        }
        scorer
    }

    /// True if the ball's top or bottom edge is on or past the field edge
    #[inline]
    pub fn hits_horizontal_wall(&self, bounds: Bounds) -> bool {
        self.pos.y + self.radius >= bounds.height || self.pos.y - self.radius <= 0.0
    }

    /// Re-center and pick a fresh sign for each velocity component.
    /// Magnitudes are left untouched.
    pub fn reset<R: Rng>(&mut self, bounds: Bounds, rng: &mut R) {
        self.pos = bounds.center();
        self.speed_x *= random_sign(rng);
        self.speed_y *= random_sign(rng);
    }
}

/// Uniform draw of -1 or +1
fn random_sign<R: Rng>(rng: &mut R) -> i32 {
    const SIGNS: [i32; 2] = [-1, 1];
    SIGNS[rng.random_range(0..=1usize)]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn rng() -> Pcg32 {
        Pcg32::seed_from_u64(7)
    }

    #[test]
    fn test_update_moves_one_step_per_axis() {
        let bounds = Bounds::default();
        let mut ball = Ball::new(bounds);
        let start = ball.pos;

        assert_eq!(ball.update(bounds, &mut rng()), None);
        assert_eq!(ball.pos, start + Vec2::new(7.0, 7.0));
        assert_eq!((ball.speed_x, ball.speed_y), (7, 7));
    }

    #[test]
    fn test_bottom_wall_reflects() {
        let bounds = Bounds::default();
        let mut ball = Ball::new(bounds);
        ball.pos.y = bounds.height - ball.radius - 3.0;

        ball.update(bounds, &mut rng());
        assert_eq!(ball.speed_y, -7);
        // No position correction
        assert_eq!(ball.pos.y, bounds.height - ball.radius + 4.0);
    }

    #[test]
    fn test_top_wall_reflects() {
        let bounds = Bounds::default();
        let mut ball = Ball::new(bounds);
        ball.speed_y = -7;
        ball.pos.y = ball.radius + 7.0;

        ball.update(bounds, &mut rng());
        assert_eq!(ball.speed_y, 7);
    }

    #[test]
    fn test_right_edge_scores_for_opponent() {
        let bounds = Bounds::default();
        let mut ball = Ball::new(bounds);
        ball.pos.x = bounds.width - ball.radius;

        let scorer = ball.update(bounds, &mut rng());
        assert_eq!(scorer, Some(Side::Opponent));
        assert_eq!(ball.pos, bounds.center());
        assert_eq!(ball.speed_x.abs(), BALL_SPEED);
        assert_eq!(ball.speed_y.abs(), BALL_SPEED);
    }

    #[test]
    fn test_left_edge_scores_for_player() {
        let bounds = Bounds::default();
        let mut ball = Ball::new(bounds);
        ball.speed_x = -7;
        ball.pos.x = ball.radius;

        let scorer = ball.update(bounds, &mut rng());
        assert_eq!(scorer, Some(Side::Player));
        assert_eq!(ball.pos, bounds.center());
    }

    #[test]
    fn test_reset_randomizes_both_signs() {
        let bounds = Bounds::default();
        let mut rng = rng();
        let mut seen = std::collections::HashSet::new();

        for _ in 0..64 {
            let mut ball = Ball::new(bounds);
            ball.reset(bounds, &mut rng);
            assert_eq!(ball.speed_x.abs(), BALL_SPEED);
            assert_eq!(ball.speed_y.abs(), BALL_SPEED);
            seen.insert((ball.speed_x.signum(), ball.speed_y.signum()));
        }

        assert_eq!(seen.len(), 4);
    }

    #[test]
    fn test_reset_is_deterministic_for_seed() {
        let bounds = Bounds::default();
        let mut a = Ball::new(bounds);
        let mut b = Ball::new(bounds);
        let mut rng_a = Pcg32::seed_from_u64(99);
        let mut rng_b = Pcg32::seed_from_u64(99);

        for _ in 0..10 {
            a.reset(bounds, &mut rng_a);
            b.reset(bounds, &mut rng_b);
            assert_eq!(a, b);
        }
    }
}
