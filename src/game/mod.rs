//! Deterministic game module
//!
//! All progression logic lives here. This module must be pure and
//! deterministic:
//! - Seeded RNG only
//! - State transitions only through [`dispatch`]
//! - No rendering or platform dependencies

pub mod board;
pub mod catalog;
pub mod dispatch;
pub mod sequencer;
pub mod state;

pub use board::{Board, Piece, PieceId};
pub use catalog::{CatalogError, ImageRef, Level, LevelCatalog, Quiz, QuizOption};
pub use dispatch::{AnswerVerdict, Command, Event, boot, dispatch};
pub use sequencer::{SequenceError, Sequencer};
pub use state::{GamePhase, GameState, RngState};
