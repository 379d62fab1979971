use serde::{Deserialize, Serialize};

/// Fixed truth for one cell, computed once when the layout is built.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum LayoutCell {
    Mine,
    /// Safe cell carrying its Moore-neighborhood mine count, 0 to 8.
    Clear(u8),
}

impl LayoutCell {
    pub const fn is_mine(self) -> bool {
        matches!(self, Self::Mine)
    }
}

/// Player-facing state of one cell.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum CellState {
    Hidden,
    Flagged,
    Revealed,
}

impl Default for CellState {
    fn default() -> Self {
        Self::Hidden
    }
}

/// Display symbol consumed by the presentation collaborator. `Open(0)` is
/// expected to be drawn as a blank opened cell, not a zero glyph.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum DisplayCell {
    Hidden,
    Flag,
    Open(u8),
    Mine,
}
