//! Game state and core simulation types
//!
//! Everything the game loop owns lives here: the ball, both paddles, the
//! score and the seeded RNG used for relaunch directions.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::ball::Ball;
use super::paddle::Paddle;
use crate::Bounds;

/// Which side of the table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// Human paddle (left)
    Player,
    /// Ball-tracking paddle (right)
    Opponent,
}

/// Points per side. Only ever incremented.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub player: u32,
    pub opponent: u32,
}

impl Score {
    pub fn award(&mut self, side: Side) {
        match side {
            Side::Player => self.player += 1,
            Side::Opponent => self.opponent += 1,
        }
    }

    pub fn get(&self, side: Side) -> u32 {
        match side {
            Side::Player => self.player,
            Side::Opponent => self.opponent,
        }
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Relaunch direction source
    pub rng: Pcg32,
    pub bounds: Bounds,
    pub ball: Ball,
    pub player: Paddle,
    pub opponent: Paddle,
    pub score: Score,
    /// Simulation tick counter
    pub time_ticks: u64,
}

impl GameState {
    /// Create a new game on the default 1920x1080 field
    pub fn new(seed: u64) -> Self {
        Self::with_bounds(seed, Bounds::default())
    }

    pub fn with_bounds(seed: u64, bounds: Bounds) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            bounds,
            ball: Ball::new(bounds),
            player: Paddle::player(bounds),
            opponent: Paddle::opponent(bounds),
            score: Score::default(),
            time_ticks: 0,
        }
    }

    /// Paddle owned by `side`
    pub fn paddle(&self, side: Side) -> &Paddle {
        match side {
            Side::Player => &self.player,
            Side::Opponent => &self.opponent,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;

    #[test]
    fn test_new_game_layout() {
        let state = GameState::new(12345);
        assert_eq!(state.ball.pos, state.bounds.center());
        assert_eq!(state.ball.radius, BALL_RADIUS);
        assert_eq!((state.ball.speed_x, state.ball.speed_y), (BALL_SPEED, BALL_SPEED));
        assert_eq!(state.score, Score::default());
        assert!(state.player.pos.x < state.opponent.pos.x);
        assert_eq!(state.time_ticks, 0);
    }

    #[test]
    fn test_score_award() {
        let mut score = Score::default();
        score.award(Side::Opponent);
        score.award(Side::Opponent);
        score.award(Side::Player);
        assert_eq!(score.get(Side::Player), 1);
        assert_eq!(score.get(Side::Opponent), 2);
    }
}
