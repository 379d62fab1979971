#![no_std]

extern crate alloc;

use ndarray::Array2;
use serde::{Deserialize, Serialize};

pub use board::*;
pub use cell::*;
pub use error::*;
pub use generator::*;
pub use types::*;

mod board;
mod cell;
mod error;
mod generator;
mod types;

/// Validated board parameters: dimensions and total mine count.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    rows: Coord,
    cols: Coord,
    mines: CellCount,
}

impl GameConfig {
    /// Rejects empty boards and boards without at least one safe cell.
    pub fn new(rows: Coord, cols: Coord, mines: CellCount) -> Result<Self> {
        if rows == 0 || cols == 0 || mines >= mult(rows, cols) {
            return Err(GameError::InvalidConfig { rows, cols, mines });
        }
        Ok(Self { rows, cols, mines })
    }

    pub const fn size(&self) -> Coord2 {
        (self.rows, self.cols)
    }

    pub const fn mines(&self) -> CellCount {
        self.mines
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.rows, self.cols)
    }
}

/// The fixed truth matrix of one game: which cells hold mines and, for every
/// safe cell, its adjacent-mine count. Immutable after construction.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    cells: Array2<LayoutCell>,
    mine_count: CellCount,
}

impl Layout {
    /// Derives the full layout from a mine mask, counting each safe cell's
    /// Moore neighbors exactly once up front.
    pub fn from_mine_mask(mask: Array2<bool>) -> Self {
        let mut mine_count: CellCount = 0;
        let cells = Array2::from_shape_fn(mask.dim(), |(row, col)| {
            if mask[(row, col)] {
                mine_count += 1;
                LayoutCell::Mine
            } else {
                let adjacent = mask
                    .iter_neighbors((row as Coord, col as Coord))
                    .filter(|&pos| mask[pos.to_nd_index()])
                    .count() as u8;
                LayoutCell::Clear(adjacent)
            }
        });
        Self { cells, mine_count }
    }

    /// Deterministic layouts from explicit mine positions, mainly for tests
    /// and fixed scenarios.
    pub fn from_mine_coords(size: Coord2, mine_coords: &[Coord2]) -> Result<Self> {
        let mut mask: Array2<bool> = Array2::default(size.to_nd_index());

        for &coords in mine_coords {
            if coords.0 >= size.0 || coords.1 >= size.1 {
                return Err(GameError::OutOfBounds);
            }
            mask[coords.to_nd_index()] = true;
        }

        Ok(Self::from_mine_mask(mask))
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let size = self.size();
        if coords.0 < size.0 && coords.1 < size.1 {
            Ok(coords)
        } else {
            Err(GameError::OutOfBounds)
        }
    }

    pub fn size(&self) -> Coord2 {
        let dim = self.cells.dim();
        (dim.0.try_into().unwrap(), dim.1.try_into().unwrap())
    }

    pub fn total_cells(&self) -> CellCount {
        self.cells.len().try_into().unwrap()
    }

    pub fn safe_cell_count(&self) -> CellCount {
        self.total_cells() - self.mine_count
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn cell_at(&self, coords: Coord2) -> LayoutCell {
        self.cells[coords.to_nd_index()]
    }

    pub fn contains_mine(&self, coords: Coord2) -> bool {
        self.cell_at(coords).is_mine()
    }

    pub(crate) fn grid(&self) -> &Array2<LayoutCell> {
        &self.cells
    }

    pub(crate) fn iter_neighbors(&self, coords: Coord2) -> NeighborIter {
        self.cells.iter_neighbors(coords)
    }
}

/// Outcome of a flag toggle.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum MarkOutcome {
    NoChange,
    Changed,
}

impl MarkOutcome {
    pub const fn has_update(self) -> bool {
        match self {
            Self::NoChange => false,
            Self::Changed => true,
        }
    }
}

/// Outcome of a reveal. `Opened` carries the number of cells this single
/// call revealed, including everything opened by a flood cascade.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum RevealOutcome {
    NoChange,
    Opened(CellCount),
    MineHit,
}

impl RevealOutcome {
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::NoChange)
    }

    /// The losing reveal counts its single mine cell.
    pub const fn cells_revealed(self) -> CellCount {
        match self {
            Self::NoChange => 0,
            Self::Opened(count) => count,
            Self::MineHit => 1,
        }
    }
}
