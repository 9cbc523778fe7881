//! Game configuration
//!
//! Everything tunable is fixed at init time and carried by the run; there
//! are no mid-run knobs. Persisted as plain JSON when the host wants a
//! config file.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Grid dimensionality and size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GridShape {
    /// Single row of `len` cells; only LEFT/RIGHT intents apply
    Line { len: usize },
    /// `width` x `height` cells; all four intents apply
    Plane { width: usize, height: usize },
}

impl GridShape {
    pub fn width(&self) -> usize {
        match *self {
            GridShape::Line { len } => len,
            GridShape::Plane { width, .. } => width,
        }
    }

    pub fn height(&self) -> usize {
        match *self {
            GridShape::Line { .. } => 1,
            GridShape::Plane { height, .. } => height,
        }
    }

    pub fn cell_count(&self) -> usize {
        self.width() * self.height()
    }

    /// Clamp degenerate dimensions up to 1
    pub fn normalized(self) -> Self {
        match self {
            GridShape::Line { len } => GridShape::Line { len: len.max(1) },
            GridShape::Plane { width, height } => GridShape::Plane {
                width: width.max(1),
                height: height.max(1),
            },
        }
    }
}

impl Default for GridShape {
    fn default() -> Self {
        GridShape::Line { len: GRID_LEN }
    }
}

/// What landing on a SWEET cell does to the run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SweetPolicy {
    /// Score is forced to the -1 sentinel and the run ends
    HardFail,
    /// The run ends; score keeps its last value
    #[default]
    DirectGameOver,
}

impl SweetPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            SweetPolicy::HardFail => "hard-fail",
            SweetPolicy::DirectGameOver => "direct-game-over",
        }
    }
}

/// Init-time game tuning
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Grid dimensionality and size
    pub shape: GridShape,

    // === Scheduler ===
    /// Cadence the host should call `tick` at (milliseconds)
    pub tick_interval_ms: u64,
    /// Minimum delay before a cell triggers (milliseconds)
    pub trigger_min_ms: u64,
    /// Uniform range above the minimum (milliseconds)
    pub trigger_range_ms: u64,

    // === Outcome weighting ===
    /// A roll comes up SWEET with probability 1/spicy_weight
    pub spicy_weight: u32,
    /// Bump a cell's weight after it rolls SWEET once
    pub warm_up: bool,
    /// Weight a warmed cell keeps for the rest of the run
    pub warmed_spicy_weight: u32,

    // === Failure policy ===
    /// What a SWEET landing does
    pub sweet_policy: SweetPolicy,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            shape: GridShape::default(),

            tick_interval_ms: TICK_INTERVAL_MS,
            trigger_min_ms: TRIGGER_MIN_MS,
            trigger_range_ms: TRIGGER_RANGE_MS,

            spicy_weight: SPICY_WEIGHT,
            warm_up: false,
            warmed_spicy_weight: WARMED_SPICY_WEIGHT,

            sweet_policy: SweetPolicy::default(),
        }
    }
}

impl GameConfig {
    /// Clamp degenerate values up to the smallest legal ones.
    ///
    /// A zero minimum delay would let a reset hand out triggers equal to
    /// the reset instant; a zero weight would make the SWEET roll divide
    /// by zero. Both clamp rather than error.
    pub fn normalized(mut self) -> Self {
        self.shape = self.shape.normalized();
        self.tick_interval_ms = self.tick_interval_ms.max(1);
        self.trigger_min_ms = self.trigger_min_ms.max(1);
        self.spicy_weight = self.spicy_weight.max(1);
        self.warmed_spicy_weight = self.warmed_spicy_weight.max(1);
        self
    }

    /// Load a config file, falling back to defaults on any failure
    pub fn load_from(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str::<GameConfig>(&json) {
                Ok(config) => {
                    log::info!("Loaded config from {}", path.display());
                    config.normalized()
                }
                Err(e) => {
                    log::warn!("Ignoring malformed config {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("No config at {}, using defaults", path.display());
                Self::default()
            }
        }
    }

    /// Write the config as pretty JSON
    pub fn save_to(&self, path: &Path) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(self).map_err(std::io::Error::other)?;
        std::fs::write(path, json)?;
        log::info!("Config saved to {}", path.display());
        Ok(())
    }
}
