//! Deterministic game engine
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Explicit clock only (`now_ms` passed in, never sampled)
//! - Seeded RNG only, owned by the game state
//! - No rendering or platform dependencies
//!
//! Hosts drive it with `tick` on a fixed cadence and `submit_move` as
//! input arrives, and render from the read accessors. The engine assumes
//! one writer: a multi-threaded host must serialize all calls on a
//! `GameState` behind a single lock to keep tick/move interleavings
//! totally ordered.

pub mod collision;
pub mod grid;
pub mod state;
pub mod tick;

pub use collision::{LandingOutcome, evaluate_landing, resolve_landing};
pub use grid::{Cell, CellState, Grid, Pos};
pub use state::{GameState, GameStatus, MoveIntent, Player};
pub use tick::tick;
