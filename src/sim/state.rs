//! Run state and the public engine API
//!
//! `GameState` owns everything a run needs: the grid, the player, the
//! score, the run status, and the seeded RNG every draw flows through.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::{LandingOutcome, resolve_landing};
use super::grid::{Cell, Grid, Pos};
use crate::config::{GameConfig, GridShape};

/// Overall run status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GameStatus {
    /// Run in progress: ticking and input accepted
    #[default]
    Active,
    /// Run lost; frozen until reset
    GameOver,
    /// Every cell consumed; frozen until reset
    Completed,
}

impl GameStatus {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameStatus::Active)
    }
}

/// A discrete movement request, one axis by exactly one cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveIntent {
    Left,
    Right,
    Up,
    Down,
}

/// The player's cursor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub pos: Pos,
}

impl Player {
    /// Spawn at a uniformly random in-bounds coordinate
    fn spawn(shape: GridShape, rng: &mut Pcg32) -> Self {
        Self {
            pos: Pos::new(
                rng.random_range(0..shape.width()),
                rng.random_range(0..shape.height()),
            ),
        }
    }

    /// Apply one intent, clamping at the edges instead of wrapping.
    /// Returns whether the position actually changed. Intents along a
    /// collapsed axis (vertical on a line grid) can never change it.
    fn step(&mut self, intent: MoveIntent, shape: GridShape) -> bool {
        let Pos { x, y } = self.pos;
        let next = match intent {
            MoveIntent::Left => Pos::new(x.saturating_sub(1), y),
            MoveIntent::Right => Pos::new((x + 1).min(shape.width() - 1), y),
            MoveIntent::Up => Pos::new(x, y.saturating_sub(1)),
            MoveIntent::Down => Pos::new(x, (y + 1).min(shape.height() - 1)),
        };
        if next == self.pos {
            return false;
        }
        self.pos = next;
        true
    }
}

/// Complete run state
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    /// Run seed for reproducibility
    pub(crate) seed: u64,
    pub(crate) config: GameConfig,
    pub(crate) grid: Grid,
    pub(crate) player: Player,
    pub(crate) score: i32,
    pub(crate) status: GameStatus,
    /// Scheduler passes accepted while the run was active
    pub(crate) time_ticks: u64,
    pub(crate) rng: Pcg32,
}

impl GameState {
    /// Start a run: fresh all-Empty grid, random player spawn, score 0.
    pub fn new(config: GameConfig, seed: u64, now_ms: u64) -> Self {
        let config = config.normalized();
        let mut rng = Pcg32::seed_from_u64(seed);
        let grid = Grid::new(&config, now_ms, &mut rng);
        let player = Player::spawn(config.shape, &mut rng);
        Self {
            seed,
            config,
            grid,
            player,
            score: 0,
            status: GameStatus::Active,
            time_ticks: 0,
            rng,
        }
    }

    /// Tear the run down and start over. The grid is replaced wholesale
    /// (no cell identity survives), the player respawns, score and status
    /// return to their initial values. Draws continue from the run's RNG
    /// stream, so a seeded run stays reproducible across resets.
    pub fn reset(&mut self, now_ms: u64) {
        self.grid = Grid::new(&self.config, now_ms, &mut self.rng);
        self.player = Player::spawn(self.config.shape, &mut self.rng);
        self.score = 0;
        self.status = GameStatus::Active;
        self.time_ticks = 0;
    }

    /// Apply a move intent. Silently ignored once the run is terminal;
    /// clamped at the edges. Only an actual position change triggers
    /// landing resolution.
    pub fn submit_move(&mut self, intent: MoveIntent) -> LandingOutcome {
        if self.status.is_terminal() {
            return LandingOutcome::Nothing;
        }
        if !self.player.step(intent, self.config.shape) {
            return LandingOutcome::Nothing;
        }
        resolve_landing(self)
    }

    // === Read accessors for the host/rendering layer ===

    /// Row-major snapshot of the board
    pub fn cells(&self) -> &[Cell] {
        self.grid.cells()
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn shape(&self) -> GridShape {
        self.config.shape
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn player_pos(&self) -> Pos {
        self.player.pos
    }

    pub fn score(&self) -> i32 {
        self.score
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn time_ticks(&self) -> u64 {
        self.time_ticks
    }
}
