//! Session state for the puzzle/quiz progression
//!
//! One explicit state object owns everything that outlives a single
//! event: the sequencer, the active board and the phase. The
//! presentation layer reads it to draw; mutation happens only inside
//! [`super::dispatch::dispatch`].

use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::board::Board;
use super::catalog::LevelCatalog;
use super::sequencer::Sequencer;

/// Phase of the active level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Level image requested, board not built yet
    Loading,
    /// Image load failed; waiting on a retry
    LoadFailed,
    /// Puzzle on screen, tiles being placed
    Placing,
    /// Puzzle solved, banner up, quiz reveal timer pending
    Revealed,
    /// Quiz on screen, waiting for an answer
    Quiz,
    /// Correct answer given; waiting on the unlock trigger
    Unlocked,
    /// Every level cleared; waiting on the restart trigger
    AllClear,
}

/// RNG state wrapper for serialization. Each level load takes a fresh
/// stream so a reloaded puzzle shuffles differently while the whole
/// session stays reproducible from `seed`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RngState {
    pub seed: u64,
    pub stream: u64,
}

impl RngState {
    pub fn new(seed: u64) -> Self {
        Self { seed, stream: 0 }
    }

    pub fn next_stream(&mut self) -> Pcg32 {
        let rng = Pcg32::new(self.seed, self.stream);
        self.stream = self.stream.wrapping_add(1);
        rng
    }
}

/// Complete session state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Session seed for reproducibility
    pub seed: u64,
    /// RNG state
    pub rng_state: RngState,
    /// Level sequence and unlock position
    pub sequencer: Sequencer,
    /// Phase of the active level
    pub phase: GamePhase,
    /// Board of the active level; rebuilt on every load
    pub board: Board,
}

impl GameState {
    /// Create a session over a validated catalog. The first level's
    /// image load is requested by [`super::dispatch::boot`].
    pub fn new(catalog: LevelCatalog, seed: u64) -> Self {
        Self {
            seed,
            rng_state: RngState::new(seed),
            sequencer: Sequencer::new(catalog),
            phase: GamePhase::Loading,
            board: Board::empty(),
        }
    }
}
