//! Jigsaw Gate - image puzzles gated by multiple-choice quizzes
//!
//! Core modules:
//! - `game`: deterministic progression logic (catalog, board, sequencer,
//!   event dispatch)
//!
//! Rendering, drag-and-drop wiring and timers live on the far side of
//! the [`game::Event`] / [`game::Command`] seam.

pub mod game;

pub use game::{Command, Event, GamePhase, GameState, LevelCatalog};

/// Game configuration constants
pub mod consts {
    /// Puzzle grid dimensions (fixed 4x4 cut)
    pub const GRID_ROWS: usize = 4;
    pub const GRID_COLS: usize = 4;
    /// Total cells on the board
    pub const CELL_COUNT: usize = GRID_ROWS * GRID_COLS;

    /// Edge length of one tile in the source image, pixels
    pub const PIECE_SIZE_PX: usize = 100;

    /// Solved-banner display time before the quiz appears
    pub const QUIZ_REVEAL_DELAY_MS: u64 = 2000;
}

/// Grid row of a cell index
#[inline]
pub fn cell_row(index: usize) -> usize {
    index / consts::GRID_COLS
}

/// Grid column of a cell index
#[inline]
pub fn cell_col(index: usize) -> usize {
    index % consts::GRID_COLS
}

/// Cell index of a (row, col) pair
#[inline]
pub fn cell_index(row: usize, col: usize) -> usize {
    row * consts::GRID_COLS + col
}
