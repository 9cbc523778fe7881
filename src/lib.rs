//! Scoville Rush - a reflex grid game of spicy and sweet peppers
//!
//! Core modules:
//! - `sim`: Deterministic game engine (grid, scheduler, collisions, run status)
//! - `config`: Init-time tuning and the SWEET-failure policy switch
//!
//! The engine never samples a clock or an ambient RNG: callers pass an
//! explicit `now_ms` into `tick`/`new`/`reset`, and all randomness comes
//! from a single seeded generator owned by the game state. Rendering and
//! input capture live entirely outside this crate; a host polls the read
//! accessors and feeds `MoveIntent`s in.

pub mod config;
pub mod sim;

pub use config::{GameConfig, GridShape, SweetPolicy};
pub use sim::{
    Cell, CellState, GameState, GameStatus, LandingOutcome, MoveIntent, Player, Pos,
    resolve_landing, tick,
};

/// Baseline tuning constants (the `GameConfig` defaults)
pub mod consts {
    /// Scheduler cadence the host should aim for (milliseconds)
    pub const TICK_INTERVAL_MS: u64 = 250;

    /// Default line-grid length
    pub const GRID_LEN: usize = 10;

    /// Minimum delay before a cell may trigger again (milliseconds)
    pub const TRIGGER_MIN_MS: u64 = 3_000;
    /// Uniform range above the minimum delay (milliseconds)
    pub const TRIGGER_RANGE_MS: u64 = 5_000;

    /// A roll comes up SWEET with probability 1/SPICY_WEIGHT
    pub const SPICY_WEIGHT: u32 = 2;
    /// Weight a cell keeps after rolling SWEET once (warm-up enabled)
    pub const WARMED_SPICY_WEIGHT: u32 = 3;

    /// Score value a hard-fail SWEET landing forces
    pub const HARD_FAIL_SCORE: i32 = -1;
}
