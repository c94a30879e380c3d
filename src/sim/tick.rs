//! Fixed step simulation tick
//!
//! Advances the game by exactly one frame. Rendering happens afterwards and
//! is not part of the simulation.

use super::collision::snap_off_paddle;
use super::state::{GameState, Side};

/// Input commands for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Up key held
    pub up: bool,
    /// Down key held
    pub down: bool,
}

/// What happened during a tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickReport {
    /// Side that scored, if any
    pub scored: Option<Side>,
    /// Paddle the ball was snapped off, if any
    pub paddle_hit: Option<Side>,
}

/// Advance the game state by one tick
pub fn tick(state: &mut GameState, input: &TickInput) -> TickReport {
    let mut report = TickReport::default();
    state.time_ticks += 1;

    let bounds = state.bounds;
    report.scored = state.ball.update(bounds, &mut state.rng);
    if let Some(side) = report.scored {
        state.score.award(side);
        log::debug!(
            "{:?} scored at tick {} ({} - {})",
            side,
            state.time_ticks,
            state.score.player,
            state.score.opponent
        );
    }

    // Opponent sees the ball after this tick's move
    let ball_y = state.ball.pos.y;
    state.player.update(input, ball_y, bounds);
    state.opponent.update(input, ball_y, bounds);

    for side in [Side::Player, Side::Opponent] {
        let rect = state.paddle(side).rect();
        if snap_off_paddle(&mut state.ball, &rect, side) {
            report.paddle_hit = Some(side);
        }
    }

    report
}
