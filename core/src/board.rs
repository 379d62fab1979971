use alloc::collections::{BTreeSet, VecDeque};
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Lifecycle of a single game. `Lost` and `Won` are terminal; starting over
/// means constructing a fresh board.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum GameState {
    Playing,
    Lost,
    Won,
}

impl GameState {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Lost | Self::Won)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::Playing
    }
}

/// One game of minesweeper: the fixed layout, the player-facing visibility
/// matrix, and the game state.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    layout: Layout,
    cells: Array2<CellState>,
    state: GameState,
    triggered_mine: Option<Coord2>,
}

impl Board {
    pub fn new(layout: Layout) -> Self {
        let size = layout.size();
        Self {
            layout,
            cells: Array2::default(size.to_nd_index()),
            state: GameState::default(),
            triggered_mine: None,
        }
    }

    /// Fresh board over a seeded uniform layout. Resetting after a win or
    /// loss is the same call with a new seed.
    pub fn generate(config: GameConfig, seed: u64) -> Self {
        Self::new(RandomLayoutGenerator::new(seed).generate(config))
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    pub fn size(&self) -> Coord2 {
        self.layout.size()
    }

    pub fn total_mines(&self) -> CellCount {
        self.layout.mine_count()
    }

    pub fn cell_at(&self, coords: Coord2) -> CellState {
        self.cells[coords.to_nd_index()]
    }

    /// Raw layout access, bounds-checked. The renderer only needs this in
    /// the `Lost` state to draw true mine positions.
    pub fn layout_at(&self, coords: Coord2) -> Result<LayoutCell> {
        let coords = self.layout.validate_coords(coords)?;
        Ok(self.layout.cell_at(coords))
    }

    pub fn triggered_mine(&self) -> Option<Coord2> {
        self.triggered_mine
    }

    pub fn flagged_count(&self) -> CellCount {
        self.cells
            .iter()
            .filter(|&&cell| cell == CellState::Flagged)
            .count() as CellCount
    }

    /// Remaining-mine counter for the collaborator; goes negative when the
    /// player overflags.
    pub fn mines_left(&self) -> isize {
        self.layout.mine_count() as isize - self.flagged_count() as isize
    }

    /// Opens a cell. Revealing a hidden `Clear(0)` cell cascades through the
    /// connected zero region and its numbered border; revealing a hidden
    /// mine loses the game. Flagged and already-open targets are no-ops.
    pub fn reveal(&mut self, coords: Coord2) -> Result<RevealOutcome> {
        let coords = self.layout.validate_coords(coords)?;
        self.check_playing()?;

        match (self.cells[coords.to_nd_index()], self.layout.cell_at(coords)) {
            (CellState::Flagged | CellState::Revealed, _) => Ok(RevealOutcome::NoChange),
            (CellState::Hidden, LayoutCell::Mine) => {
                self.cells[coords.to_nd_index()] = CellState::Revealed;
                self.triggered_mine = Some(coords);
                self.state = GameState::Lost;
                Ok(RevealOutcome::MineHit)
            }
            (CellState::Hidden, LayoutCell::Clear(0)) => {
                Ok(RevealOutcome::Opened(self.flood_reveal(coords)))
            }
            (CellState::Hidden, LayoutCell::Clear(_)) => {
                self.cells[coords.to_nd_index()] = CellState::Revealed;
                Ok(RevealOutcome::Opened(1))
            }
        }
    }

    /// Worklist traversal of the zero region reachable from `start`, which
    /// must be a hidden `Clear(0)` cell. Neighbors of a zero cell are never
    /// mines, so the cascade cannot lose the game; flagged cells stay put.
    fn flood_reveal(&mut self, start: Coord2) -> CellCount {
        let mut opened: CellCount = 0;
        let mut queued = BTreeSet::from([start]);
        let mut worklist = VecDeque::from([start]);

        while let Some(coords) = worklist.pop_front() {
            if self.cells[coords.to_nd_index()] != CellState::Hidden {
                continue;
            }
            self.cells[coords.to_nd_index()] = CellState::Revealed;
            opened += 1;

            if self.layout.cell_at(coords) == LayoutCell::Clear(0) {
                for pos in self.layout.iter_neighbors(coords) {
                    if self.cells[pos.to_nd_index()] == CellState::Hidden && queued.insert(pos) {
                        worklist.push_back(pos);
                    }
                }
            }
        }

        opened
    }

    /// Flags a hidden cell or unflags a flagged one. Open cells are no-ops.
    pub fn toggle_flag(&mut self, coords: Coord2) -> Result<MarkOutcome> {
        let coords = self.layout.validate_coords(coords)?;
        self.check_playing()?;

        let slot = &mut self.cells[coords.to_nd_index()];
        Ok(match *slot {
            CellState::Hidden => {
                *slot = CellState::Flagged;
                MarkOutcome::Changed
            }
            CellState::Flagged => {
                *slot = CellState::Hidden;
                MarkOutcome::Changed
            }
            CellState::Revealed => MarkOutcome::NoChange,
        })
    }

    /// True once every safe cell is open. Flag placement is irrelevant and
    /// mines may stay hidden. Pure query, never mutates state.
    pub fn has_won(&self) -> bool {
        self.layout
            .grid()
            .iter()
            .zip(self.cells.iter())
            .all(|(layout_cell, cell)| layout_cell.is_mine() || *cell == CellState::Revealed)
    }

    /// Collaborator acknowledgement of a won game, typically right after
    /// `has_won` turns true. No-op once the game is already over.
    pub fn mark_won(&mut self) {
        if !self.state.is_finished() {
            self.state = GameState::Won;
        }
    }

    /// Forces every cell open so the collaborator can show the full board
    /// after a win or loss. Leaves the game state alone.
    pub fn reveal_all(&mut self) {
        self.cells.fill(CellState::Revealed);
    }

    /// Read-only render export: one display symbol per cell, derived from
    /// visibility, layout, and game state.
    pub fn render_view(&self) -> Array2<DisplayCell> {
        Array2::from_shape_fn(self.cells.dim(), |(row, col)| {
            self.display_cell((row as Coord, col as Coord))
        })
    }

    fn display_cell(&self, coords: Coord2) -> DisplayCell {
        let layout_cell = self.layout.cell_at(coords);
        match self.cells[coords.to_nd_index()] {
            CellState::Hidden => DisplayCell::Hidden,
            // A lost game exposes flagged mines as mines.
            CellState::Flagged if self.state == GameState::Lost && layout_cell.is_mine() => {
                DisplayCell::Mine
            }
            CellState::Flagged => DisplayCell::Flag,
            CellState::Revealed => match layout_cell {
                LayoutCell::Mine => DisplayCell::Mine,
                LayoutCell::Clear(count) => DisplayCell::Open(count),
            },
        }
    }

    fn check_playing(&self) -> Result<()> {
        if self.state.is_finished() {
            Err(GameError::GameOver)
        } else {
            Ok(())
        }
    }
}
