//! Landing evaluation
//!
//! Runs whenever the player's position changes, against the grid as it
//! stands at that instant. Not a timer: purely a reaction to movement.

use super::grid::CellState;
use super::state::{GameState, GameStatus};
use crate::config::SweetPolicy;
use crate::consts::HARD_FAIL_SCORE;

/// What landing on a cell did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LandingOutcome {
    /// Empty, locked, or already consumed cell - no effect
    Nothing,
    /// Spicy hit: one point, cell consumed
    Scored,
    /// Sweet hit: the run ends per the configured policy
    SweetHit,
}

/// Classify a landing on a cell in the given state
pub fn evaluate_landing(cell_state: CellState) -> LandingOutcome {
    match cell_state {
        CellState::Empty | CellState::Active | CellState::Done => LandingOutcome::Nothing,
        CellState::Spicy => LandingOutcome::Scored,
        CellState::Sweet => LandingOutcome::SweetHit,
    }
}

/// Evaluate the cell under the player and apply the result.
///
/// A spicy hit consumes the cell permanently, so landing there again is
/// a no-op; collecting every cell completes the run. A sweet hit ends
/// the run, with the score forced to the failure sentinel under the
/// hard-fail policy.
pub fn resolve_landing(state: &mut GameState) -> LandingOutcome {
    let pos = state.player.pos;
    let outcome = evaluate_landing(state.grid.cell(pos).state);

    match outcome {
        LandingOutcome::Nothing => {}
        LandingOutcome::Scored => {
            state.grid.mark_done(pos);
            state.score += 1;
            if state.score == state.grid.len() as i32 {
                state.status = GameStatus::Completed;
            }
        }
        LandingOutcome::SweetHit => {
            if state.config.sweet_policy == SweetPolicy::HardFail {
                state.score = HARD_FAIL_SCORE;
            }
            state.status = GameStatus::GameOver;
        }
    }

    outcome
}
