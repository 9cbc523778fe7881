//! Grid of timed pepper cells
//!
//! The grid owns its cells outright. Reads are public; mutation stays
//! inside the sim module (scheduler scan + the collision step's
//! `mark_done`), so every write goes through one of those two paths.

use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::tick::draw_trigger_at;
use crate::config::{GameConfig, GridShape};

/// State of a single cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CellState {
    /// Never triggered yet
    #[default]
    Empty,
    /// Reserved lock - the scheduler never overwrites it
    Active,
    /// Triggered outcome worth a point
    Spicy,
    /// Triggered outcome that ends the run
    Sweet,
    /// Consumed by the player, terminal
    Done,
}

/// One grid position holding a timed state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub state: CellState,
    /// Next instant (ms) the scheduler may roll this cell
    pub next_trigger_at: u64,
    /// Once true the scheduler never touches the cell again
    pub resolved: bool,
    /// SWEET rolls with probability 1/spicy_weight
    pub spicy_weight: u32,
}

impl Cell {
    fn new(next_trigger_at: u64, spicy_weight: u32) -> Self {
        Self {
            state: CellState::Empty,
            next_trigger_at,
            resolved: false,
            spicy_weight,
        }
    }

    /// Whether the scheduler may roll this cell at `now_ms`
    pub fn due(&self, now_ms: u64) -> bool {
        !self.resolved
            && !matches!(self.state, CellState::Active | CellState::Done)
            && now_ms >= self.next_trigger_at
    }
}

/// Grid coordinate; `y` is always 0 on line grids
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pos {
    pub x: usize,
    pub y: usize,
}

impl Pos {
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

/// The cell collection, fixed size for the lifetime of a run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    shape: GridShape,
    cells: Vec<Cell>,
}

impl Grid {
    /// Build a fresh grid: every cell Empty with an independently drawn
    /// future trigger instant.
    pub(crate) fn new(config: &GameConfig, now_ms: u64, rng: &mut Pcg32) -> Self {
        let shape = config.shape;
        let cells = (0..shape.cell_count())
            .map(|_| Cell::new(draw_trigger_at(rng, config, now_ms), config.spicy_weight))
            .collect();
        Self { shape, cells }
    }

    pub fn shape(&self) -> GridShape {
        self.shape
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn in_bounds(&self, pos: Pos) -> bool {
        pos.x < self.shape.width() && pos.y < self.shape.height()
    }

    /// Row-major index of `pos`.
    ///
    /// Panics on out-of-bounds coordinates: every position reaching the
    /// grid is generated and clamped internally, so a bad one is a bug in
    /// the caller, not an input error.
    pub fn index_of(&self, pos: Pos) -> usize {
        assert!(
            self.in_bounds(pos),
            "position ({}, {}) outside {}x{} grid",
            pos.x,
            pos.y,
            self.shape.width(),
            self.shape.height()
        );
        pos.y * self.shape.width() + pos.x
    }

    pub fn pos_of(&self, index: usize) -> Pos {
        assert!(index < self.cells.len(), "cell index {index} out of range");
        Pos::new(index % self.shape.width(), index / self.shape.width())
    }

    pub fn cell(&self, pos: Pos) -> &Cell {
        &self.cells[self.index_of(pos)]
    }

    /// Read-only view of the whole board, row-major
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Mark the cell consumed: Done, and permanently off the scheduler.
    pub(crate) fn mark_done(&mut self, pos: Pos) {
        let index = self.index_of(pos);
        let cell = &mut self.cells[index];
        cell.state = CellState::Done;
        cell.resolved = true;
    }

    /// Mutable scan access for the scheduler
    pub(crate) fn cells_mut(&mut self) -> &mut [Cell] {
        &mut self.cells
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn test_grid(width: usize, height: usize) -> (Grid, GameConfig) {
        let config = GameConfig {
            shape: GridShape::Plane { width, height },
            ..Default::default()
        };
        let mut rng = Pcg32::seed_from_u64(7);
        (Grid::new(&config, 1_000, &mut rng), config)
    }

    #[test]
    fn test_new_grid_all_empty_with_future_triggers() {
        let (grid, config) = test_grid(4, 3);
        assert_eq!(grid.len(), 12);
        for cell in grid.cells() {
            assert_eq!(cell.state, CellState::Empty);
            assert!(!cell.resolved);
            assert!(cell.next_trigger_at > 1_000);
            assert!(cell.next_trigger_at >= 1_000 + config.trigger_min_ms);
            assert!(
                cell.next_trigger_at <= 1_000 + config.trigger_min_ms + config.trigger_range_ms
            );
        }
    }

    #[test]
    fn test_index_round_trip() {
        let (grid, _) = test_grid(5, 2);
        for index in 0..grid.len() {
            let pos = grid.pos_of(index);
            assert!(grid.in_bounds(pos));
            assert_eq!(grid.index_of(pos), index);
        }
    }

    #[test]
    fn test_line_grid_is_single_row() {
        let config = GameConfig::default();
        let mut rng = Pcg32::seed_from_u64(7);
        let grid = Grid::new(&config, 0, &mut rng);
        assert_eq!(grid.shape().height(), 1);
        assert_eq!(grid.len(), grid.shape().width());
        assert!(!grid.in_bounds(Pos::new(0, 1)));
    }

    #[test]
    #[should_panic(expected = "outside")]
    fn test_out_of_bounds_access_panics() {
        let (grid, _) = test_grid(3, 3);
        grid.cell(Pos::new(3, 0));
    }

    #[test]
    fn test_mark_done_is_terminal() {
        let (mut grid, _) = test_grid(3, 3);
        let pos = Pos::new(1, 2);
        grid.mark_done(pos);

        let cell = grid.cell(pos);
        assert_eq!(cell.state, CellState::Done);
        assert!(cell.resolved);
        assert!(!cell.due(u64::MAX));
    }

    #[test]
    fn test_due_gating() {
        let (grid, _) = test_grid(2, 2);
        let cell = *grid.cell(Pos::new(0, 0));
        assert!(!cell.due(cell.next_trigger_at - 1));
        assert!(cell.due(cell.next_trigger_at));

        let locked = Cell {
            state: CellState::Active,
            ..cell
        };
        assert!(!locked.due(u64::MAX));
    }
}
