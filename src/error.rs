//! Error types for board mutation and engine configuration.

use crate::board::{Pos, MIN_BOARD_SIZE};

/// A move the board cannot accept.
///
/// Recoverable: surfaced to the caller, which re-prompts for human input.
/// Bot strategies only ever produce legal moves, so seeing this error from a
/// bot path is a programming error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum IllegalMove {
    /// Position lies outside the board.
    #[display("({}, {}) is outside the {}x{} board", pos.row, pos.col, size, size)]
    OutOfBounds { pos: Pos, size: usize },

    /// Target cell already holds a stone.
    #[display("cell ({}, {}) is already occupied", pos.row, pos.col)]
    Occupied { pos: Pos },

    /// Undo requested on a cell with no stone.
    #[display("cannot undo ({}, {}): cell is empty", pos.row, pos.col)]
    UndoEmpty { pos: Pos },
}

impl std::error::Error for IllegalMove {}

/// Invalid engine setup. Fails fast at construction, never silently clamped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum InvalidConfiguration {
    /// Board side length below the playable minimum.
    #[display("board size {} is below the minimum of {}", _0, MIN_BOARD_SIZE)]
    BoardSize(usize),

    /// Search depth of zero plies.
    #[display("search depth must be at least 1 ply")]
    SearchDepth,
}

impl std::error::Error for InvalidConfiguration {}
