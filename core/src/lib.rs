#![no_std]

extern crate alloc;

use serde::Serialize;

pub use difficulty::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use listener::*;
pub use target::*;
pub use types::*;

mod difficulty;
mod engine;
mod error;
mod generator;
mod listener;
mod target;
mod types;

/// Number of tiles on the board.
pub const GRID_SIZE: CellCount = 25;

/// Tiles per rendered row.
pub const GRID_COLUMNS: CellCount = 5;

/// How long the target tiles stay highlighted after a round starts.
pub const REVEAL_DELAY_MS: u32 = 1000;

/// Board shape. Only constructible through [`GridConfig::new`], so there is always a tile left outside the target.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GridConfig {
    size: CellCount,
    columns: CellCount,
}

impl GridConfig {
    pub const DEFAULT: Self = Self::new_unchecked(GRID_SIZE, GRID_COLUMNS);

    pub(crate) const fn new_unchecked(size: CellCount, columns: CellCount) -> Self {
        Self { size, columns }
    }

    /// A board needs at least one tile that is not part of the target, so `size` is at least 2.
    pub fn new(size: CellCount, columns: CellCount) -> Self {
        let size = size.max(2);
        let columns = columns.clamp(1, size);
        Self::new_unchecked(size, columns)
    }

    pub const fn size(&self) -> CellCount {
        self.size
    }

    pub const fn columns(&self) -> CellCount {
        self.columns
    }

    pub const fn rows(&self) -> CellCount {
        self.size.div_ceil(self.columns)
    }

    /// Largest target size this board supports.
    pub const fn max_difficulty(&self) -> CellCount {
        let fits = self.size.saturating_sub(1);
        if fits < MAX_DIFFICULTY {
            fits
        } else {
            MAX_DIFFICULTY
        }
    }

    pub fn validate_cell(&self, index: usize) -> Result<CellIndex> {
        if index < usize::from(self.size) {
            // size is a CellCount so this cannot truncate
            Ok(index as CellIndex)
        } else {
            Err(GameError::InvalidCell)
        }
    }

    pub fn cells(&self) -> impl Iterator<Item = CellIndex> + use<> {
        0..self.size
    }

    /// `(row, column)` of `cell` in the rendered grid.
    pub const fn position(&self, cell: CellIndex) -> (CellCount, CellCount) {
        (cell / self.columns, cell % self.columns)
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
