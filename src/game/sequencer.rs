//! Ordered level sequence and the current unlock position
//!
//! The index ranges over `[0, N]`; only `[0, N-1]` are playable and
//! `N` means the whole sequence has been cleared.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::catalog::{Level, LevelCatalog};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SequenceError {
    #[error("level index {index} out of range (sequence has {len} levels)")]
    OutOfRange { index: usize, len: usize },
}

/// Holds the catalog and the position of the level being played
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sequencer {
    catalog: LevelCatalog,
    current: usize,
}

impl Sequencer {
    pub fn new(catalog: LevelCatalog) -> Self {
        Self {
            catalog,
            current: 0,
        }
    }

    pub fn catalog(&self) -> &LevelCatalog {
        &self.catalog
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn len(&self) -> usize {
        self.catalog.len()
    }

    pub fn is_empty(&self) -> bool {
        self.catalog.is_empty()
    }

    /// The level being played
    pub fn current(&self) -> Result<&Level, SequenceError> {
        self.catalog
            .get(self.current)
            .ok_or(SequenceError::OutOfRange {
                index: self.current,
                len: self.catalog.len(),
            })
    }

    /// Move past the current level. Callers detect the end of the
    /// sequence with [`Sequencer::is_complete`].
    pub fn advance(&mut self) {
        if self.current < self.catalog.len() {
            self.current += 1;
        }
    }

    /// Re-enter the sequence from the first level
    pub fn restart(&mut self) {
        self.current = 0;
    }

    /// True once every level has been cleared
    pub fn is_complete(&self) -> bool {
        self.current == self.catalog.len()
    }
}
