//! Puzzle board: pieces, tray and the solved scan
//!
//! Rebuilt from scratch on every level load. Placement operations
//! never fail; bad piece ids or cell indices are dropped at this
//! boundary.

use rand::seq::SliceRandom;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::{GRID_COLS, GRID_ROWS, PIECE_SIZE_PX};

/// Index into [`Board::pieces`]. Equals the piece's home cell under
/// row-major generation.
pub type PieceId = usize;

/// A sub-region of the level image with a fixed home cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Piece {
    /// Origin in the source image, pixels
    pub origin_x: u32,
    pub origin_y: u32,
    /// The cell this piece belongs in
    pub home_cell: usize,
}

/// Grid cells plus the off-board tray holding unplaced tiles
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Board {
    pieces: Vec<Piece>,
    cells: Vec<Option<PieceId>>,
    tray: Vec<PieceId>,
}

impl Board {
    /// A board with no pieces, used before the first level loads
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build the board for a level: all cells empty, every piece in the
    /// tray in shuffled display order (Fisher-Yates, seeded stream)
    pub fn new_shuffled(rng: &mut Pcg32) -> Self {
        Self::with_grid(GRID_ROWS, GRID_COLS, rng)
    }

    /// Same, for an arbitrary grid size
    pub fn with_grid(rows: usize, cols: usize, rng: &mut Pcg32) -> Self {
        let pieces = generate_pieces(rows, cols);
        let mut tray: Vec<PieceId> = (0..pieces.len()).collect();
        tray.shuffle(rng);
        Self {
            cells: vec![None; pieces.len()],
            pieces,
            tray,
        }
    }

    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    /// Cell-index to occupant mapping
    pub fn cells(&self) -> &[Option<PieceId>] {
        &self.cells
    }

    /// Unplaced tiles in display order
    pub fn tray(&self) -> &[PieceId] {
        &self.tray
    }

    /// Drop a tile onto a grid cell. The tile leaves wherever it
    /// currently sits; an occupant of the target cell goes back to the
    /// tray.
    pub fn place(&mut self, piece: PieceId, cell: usize) {
        if piece >= self.pieces.len() || cell >= self.cells.len() {
            return;
        }
        self.detach(piece);
        if let Some(evicted) = self.cells[cell].take() {
            self.tray.push(evicted);
        }
        self.cells[cell] = Some(piece);
    }

    /// Drop a tile back onto the tray
    pub fn return_to_tray(&mut self, piece: PieceId) {
        if piece >= self.pieces.len() {
            return;
        }
        self.detach(piece);
        self.tray.push(piece);
    }

    /// Remove a piece from cell or tray, wherever it is
    fn detach(&mut self, piece: PieceId) {
        for slot in self.cells.iter_mut() {
            if *slot == Some(piece) {
                *slot = None;
            }
        }
        self.tray.retain(|&id| id != piece);
    }

    /// Full-board scan: true iff every cell holds the piece whose home
    /// it is. Evaluated after every placement; at 16 cells the scan is
    /// cheaper than tracking a running count.
    pub fn is_solved(&self) -> bool {
        !self.cells.is_empty()
            && self
                .cells
                .iter()
                .enumerate()
                .all(|(index, slot)| slot.is_some_and(|id| self.pieces[id].home_cell == index))
    }
}

/// Cut the grid into pieces, row-major
fn generate_pieces(rows: usize, cols: usize) -> Vec<Piece> {
    let mut pieces = Vec::with_capacity(rows * cols);
    for row in 0..rows {
        for col in 0..cols {
            pieces.push(Piece {
                origin_x: (col * PIECE_SIZE_PX) as u32,
                origin_y: (row * PIECE_SIZE_PX) as u32,
                home_cell: row * cols + col,
            });
        }
    }
    pieces
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::CELL_COUNT;
    use proptest::prelude::*;
    use rand::SeedableRng;

    fn board_4x4(seed: u64) -> Board {
        let mut rng = Pcg32::seed_from_u64(seed);
        Board::new_shuffled(&mut rng)
    }

    /// All orderings of `items`, for exhaustive small-grid checks
    fn permutations(items: &[PieceId]) -> Vec<Vec<PieceId>> {
        if items.len() <= 1 {
            return vec![items.to_vec()];
        }
        let mut out = Vec::new();
        for (index, &first) in items.iter().enumerate() {
            let mut rest = items.to_vec();
            rest.remove(index);
            for mut tail in permutations(&rest) {
                tail.insert(0, first);
                out.push(tail);
            }
        }
        out
    }

    #[test]
    fn test_new_board_is_empty_with_full_tray() {
        let board = board_4x4(42);
        assert_eq!(board.cells().len(), CELL_COUNT);
        assert!(board.cells().iter().all(|slot| slot.is_none()));
        assert_eq!(board.tray().len(), CELL_COUNT);

        let mut sorted = board.tray().to_vec();
        sorted.sort_unstable();
        let expected: Vec<PieceId> = (0..CELL_COUNT).collect();
        assert_eq!(sorted, expected);
        assert!(!board.is_solved());
    }

    #[test]
    fn test_piece_origins_follow_grid() {
        let board = board_4x4(1);
        let piece = board.pieces()[5];
        assert_eq!(piece.home_cell, 5);
        assert_eq!(piece.origin_x, PIECE_SIZE_PX as u32);
        assert_eq!(piece.origin_y, PIECE_SIZE_PX as u32);
    }

    #[test]
    fn test_shuffle_is_deterministic_per_stream() {
        let a = board_4x4(7);
        let b = board_4x4(7);
        let c = board_4x4(8);
        assert_eq!(a.tray(), b.tray());
        // A different stream almost surely orders 16 tiles differently
        assert_ne!(a.tray(), c.tray());
    }

    #[test]
    fn test_place_evicts_occupant_to_tray() {
        let mut board = board_4x4(3);
        board.place(0, 5);
        board.place(1, 5);
        assert_eq!(board.cells()[5], Some(1));
        assert!(board.tray().contains(&0));
        assert_eq!(board.tray().len(), CELL_COUNT - 1);
    }

    #[test]
    fn test_moving_a_placed_piece_vacates_its_cell() {
        let mut board = board_4x4(3);
        board.place(2, 0);
        board.place(2, 9);
        assert_eq!(board.cells()[0], None);
        assert_eq!(board.cells()[9], Some(2));
        assert_eq!(board.tray().len(), CELL_COUNT - 1);
    }

    #[test]
    fn test_redrop_on_same_cell_is_a_noop() {
        let mut board = board_4x4(3);
        board.place(4, 4);
        board.place(4, 4);
        assert_eq!(board.cells()[4], Some(4));
        assert_eq!(board.tray().len(), CELL_COUNT - 1);
    }

    #[test]
    fn test_return_to_tray() {
        let mut board = board_4x4(3);
        board.place(6, 2);
        board.return_to_tray(6);
        assert_eq!(board.cells()[2], None);
        assert_eq!(board.tray().len(), CELL_COUNT);

        // Returning an already-trayed piece must not duplicate it
        board.return_to_tray(6);
        assert_eq!(board.tray().len(), CELL_COUNT);
    }

    #[test]
    fn test_out_of_range_operations_ignored() {
        let mut board = board_4x4(3);
        board.place(99, 0);
        board.place(0, 99);
        board.return_to_tray(99);
        assert!(board.cells().iter().all(|slot| slot.is_none()));
        assert_eq!(board.tray().len(), CELL_COUNT);
    }

    #[test]
    fn test_empty_board_is_not_solved() {
        assert!(!Board::empty().is_solved());
    }

    #[test]
    fn test_partial_board_is_not_solved() {
        let mut board = board_4x4(11);
        for piece in 0..CELL_COUNT - 1 {
            board.place(piece, piece);
        }
        assert!(!board.is_solved());
    }

    #[test]
    fn test_solved_iff_identity_exhaustive_2x2() {
        let ids: Vec<PieceId> = (0..4).collect();
        for perm in permutations(&ids) {
            let mut rng = Pcg32::seed_from_u64(0);
            let mut board = Board::with_grid(2, 2, &mut rng);
            for (cell, &piece) in perm.iter().enumerate() {
                board.place(piece, cell);
            }
            let identity = perm.iter().enumerate().all(|(cell, &piece)| piece == cell);
            assert_eq!(board.is_solved(), identity, "placement {perm:?}");
        }
    }

    proptest! {
        #[test]
        fn prop_solved_only_by_identity_placement(
            perm in Just((0..CELL_COUNT).collect::<Vec<PieceId>>()).prop_shuffle()
        ) {
            let mut board = board_4x4(99);
            for (cell, &piece) in perm.iter().enumerate() {
                board.place(piece, cell);
            }
            let identity = perm.iter().enumerate().all(|(cell, &piece)| piece == cell);
            prop_assert_eq!(board.is_solved(), identity);
        }
    }
}
