//! Scheduler tick
//!
//! One global pass over the grid per call, against an explicit clock.
//! Pure and total: a tick with nothing due changes nothing, and a tick
//! never errors.

use rand::Rng;
use rand_pcg::Pcg32;

use super::grid::CellState;
use super::state::GameState;
use crate::config::GameConfig;

/// Draw the next trigger instant: `now + uniform(min, min + range)`
pub(crate) fn draw_trigger_at(rng: &mut Pcg32, config: &GameConfig, now_ms: u64) -> u64 {
    now_ms + config.trigger_min_ms + rng.random_range(0..=config.trigger_range_ms)
}

/// Roll a triggered outcome: SWEET with probability 1/weight, else SPICY
fn roll_outcome(rng: &mut Pcg32, weight: u32) -> CellState {
    if rng.random_range(0..weight) == 0 {
        CellState::Sweet
    } else {
        CellState::Spicy
    }
}

/// Advance the scheduler to `now_ms`.
///
/// Every cell that is due (not Active, not Done, not resolved, trigger
/// instant reached) draws a fresh future trigger and a new outcome.
/// Cells the player has consumed and cells held Active are never
/// touched. No-op once the run is terminal.
pub fn tick(state: &mut GameState, now_ms: u64) {
    if state.status.is_terminal() {
        return;
    }
    state.time_ticks += 1;

    let config = state.config;
    for cell in state.grid.cells_mut() {
        if !cell.due(now_ms) {
            continue;
        }
        cell.next_trigger_at = draw_trigger_at(&mut state.rng, &config, now_ms);
        cell.state = roll_outcome(&mut state.rng, cell.spicy_weight);
        if config.warm_up && cell.state == CellState::Sweet {
            // A miss warms the cell up: later rolls lean spicy.
            cell.spicy_weight = config.warmed_spicy_weight;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{GameConfig, GridShape};
    use crate::sim::state::GameStatus;

    fn game(seed: u64) -> GameState {
        GameState::new(GameConfig::default(), seed, 0)
    }

    /// Initial triggers are drawn at t=0, so everything is due by then.
    fn all_due_by(state: &GameState) -> u64 {
        let config = state.config();
        config.trigger_min_ms + config.trigger_range_ms
    }

    #[test]
    fn test_tick_before_any_trigger_is_noop() {
        let mut state = game(11);
        let before = state.cells().to_vec();

        tick(&mut state, 0);

        assert_eq!(state.cells(), &before[..]);
        assert_eq!(state.time_ticks(), 1);
    }

    #[test]
    fn test_due_cells_roll_and_redraw() {
        let mut state = game(11);
        let now = all_due_by(&state);

        tick(&mut state, now);

        for cell in state.cells() {
            assert!(matches!(cell.state, CellState::Spicy | CellState::Sweet));
            assert!(cell.next_trigger_at > now);
        }
    }

    #[test]
    fn test_resolved_cell_never_rolls_again() {
        let mut state = game(11);
        let pos = state.grid().pos_of(3);
        state.grid.mark_done(pos);

        for step in 1..50u64 {
            tick(&mut state, step * 10_000);
        }

        let cell = state.grid().cell(pos);
        assert_eq!(cell.state, CellState::Done);
        assert!(cell.resolved);
    }

    #[test]
    fn test_active_cell_is_frozen() {
        let mut state = game(11);
        let trigger = {
            let cell = &mut state.grid.cells_mut()[0];
            cell.state = CellState::Active;
            cell.next_trigger_at
        };

        for step in 1..50u64 {
            tick(&mut state, step * 10_000);
        }

        let cell = &state.cells()[0];
        assert_eq!(cell.state, CellState::Active);
        assert_eq!(cell.next_trigger_at, trigger);
    }

    #[test]
    fn test_tick_is_noop_when_terminal() {
        let mut state = game(11);
        state.status = GameStatus::GameOver;
        let before = state.clone();

        tick(&mut state, u64::MAX);

        assert_eq!(state, before);
    }

    #[test]
    fn test_warm_up_sticks_after_a_sweet_roll() {
        let config = GameConfig {
            shape: GridShape::Line { len: 10 },
            warm_up: true,
            ..Default::default()
        };
        let mut state = GameState::new(config, 11, 0);

        for step in 1..200u64 {
            tick(&mut state, step * 10_000);
        }

        // Over ~200 rolls per cell plenty rolled SWEET at least once and
        // SPICY afterwards; stickiness shows as a warmed weight on a
        // currently spicy cell.
        assert!(
            state
                .cells()
                .iter()
                .any(|c| c.state == CellState::Spicy
                    && c.spicy_weight == config.warmed_spicy_weight)
        );
        assert!(
            state
                .cells()
                .iter()
                .all(|c| c.spicy_weight == config.spicy_weight
                    || c.spicy_weight == config.warmed_spicy_weight)
        );
    }

    #[test]
    fn test_warm_up_off_keeps_base_weight() {
        let mut state = game(11);
        for step in 1..100u64 {
            tick(&mut state, step * 10_000);
        }
        let base = state.config().spicy_weight;
        assert!(state.cells().iter().all(|c| c.spicy_weight == base));
    }

    #[test]
    fn test_determinism() {
        // Two states with the same seed fed the same clock stay identical
        let mut a = game(99_999);
        let mut b = game(99_999);

        for step in 1..64u64 {
            tick(&mut a, step * 777);
            tick(&mut b, step * 777);
            assert_eq!(a, b);
        }
    }
}
