//! Board contents during and after placement.
//!
//! `BoardState` holds the single white piece and the ordered black pieces.
//! Occupancy and capacity are checked at insertion; a failed insertion
//! leaves the board untouched. There is no removal.

use crate::board_state::piece_types::{BlackPiece, WhitePiece, WhitePieceKind};
use crate::board_state::square::Square;
use crate::chess_errors::ChessErrors;

pub const DEFAULT_MAX_BLACK_PIECES: usize = 16;

#[derive(Debug, Clone)]
pub struct BoardState {
    white: Option<WhitePiece>,
    // insertion order, used for display only
    black: Vec<BlackPiece>,
    capacity: usize,
}

impl Default for BoardState {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_BLACK_PIECES)
    }
}

impl BoardState {
    pub fn new(capacity: usize) -> Self {
        Self {
            white: None,
            black: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Places the white piece. Only the first call succeeds.
    pub fn try_set_white_piece(
        &mut self,
        kind: WhitePieceKind,
        square: Square,
    ) -> Result<(), ChessErrors> {
        if let Some(existing) = self.white {
            return Err(ChessErrors::AlreadySet(existing.square));
        }
        self.white = Some(WhitePiece { kind, square });
        Ok(())
    }

    /// Appends a black piece if the board has room and `square` is free.
    pub fn try_add_black_piece(
        &mut self,
        label: impl Into<String>,
        square: Square,
    ) -> Result<(), ChessErrors> {
        if self.is_capacity_reached() {
            return Err(ChessErrors::CapacityExceeded(self.capacity));
        }
        if self.is_occupied(square) {
            return Err(ChessErrors::SquareOccupied(square));
        }
        self.black.push(BlackPiece {
            label: label.into(),
            square,
        });
        Ok(())
    }

    #[inline]
    pub fn black_piece_count(&self) -> usize {
        self.black.len()
    }

    #[inline]
    pub fn is_capacity_reached(&self) -> bool {
        self.black.len() >= self.capacity
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    pub fn white_piece(&self) -> Option<&WhitePiece> {
        self.white.as_ref()
    }

    #[inline]
    pub fn black_pieces(&self) -> &[BlackPiece] {
        &self.black
    }

    pub fn black_piece_at(&self, square: Square) -> Option<&BlackPiece> {
        self.black.iter().find(|piece| piece.square == square)
    }

    pub fn is_occupied(&self, square: Square) -> bool {
        self.white.is_some_and(|white| white.square == square)
            || self.black_piece_at(square).is_some()
    }

    /// Every occupied square, white first.
    pub fn occupied_squares(&self) -> impl Iterator<Item = Square> + '_ {
        self.white
            .iter()
            .map(|white| white.square)
            .chain(self.black.iter().map(|piece| piece.square))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::{rngs::StdRng, Rng, SeedableRng};

    use super::{BoardState, DEFAULT_MAX_BLACK_PIECES};
    use crate::board_state::piece_types::WhitePieceKind;
    use crate::board_state::square::Square;
    use crate::chess_errors::ChessErrors;

    #[test]
    fn white_piece_cannot_be_replaced() {
        let mut board = BoardState::default();
        board
            .try_set_white_piece(WhitePieceKind::Rook, Square::new(3, 3))
            .expect("first white placement should succeed");
        assert_eq!(
            board.try_set_white_piece(WhitePieceKind::Pawn, Square::new(0, 0)),
            Err(ChessErrors::AlreadySet(Square::new(3, 3)))
        );
        assert_eq!(
            ChessErrors::AlreadySet(Square::new(3, 3)).to_string(),
            "The white piece has already been placed"
        );
        let white = board.white_piece().expect("white piece should be present");
        assert_eq!(white.kind, WhitePieceKind::Rook);
        assert_eq!(white.square, Square::new(3, 3));
    }

    #[test]
    fn black_piece_rejected_on_white_square_and_duplicates() {
        let mut board = BoardState::default();
        board
            .try_set_white_piece(WhitePieceKind::Rook, Square::new(0, 4))
            .expect("white placement");
        assert_eq!(
            board.try_add_black_piece("knight", Square::new(0, 4)),
            Err(ChessErrors::SquareOccupied(Square::new(0, 4)))
        );
        board
            .try_add_black_piece("knight", Square::new(0, 6))
            .expect("free square");
        assert_eq!(
            board.try_add_black_piece("bishop", Square::new(0, 6)),
            Err(ChessErrors::SquareOccupied(Square::new(0, 6)))
        );
        assert_eq!(board.black_piece_count(), 1);
    }

    #[test]
    fn capacity_is_enforced_at_sixteen() {
        let mut board = BoardState::default();
        for file in 0..8 {
            for rank in 0..2 {
                board
                    .try_add_black_piece("pawn", Square::new(file, rank))
                    .expect("board has room");
            }
        }
        assert!(board.is_capacity_reached());
        assert_eq!(board.black_piece_count(), DEFAULT_MAX_BLACK_PIECES);
        assert_eq!(
            board.try_add_black_piece("pawn", Square::new(4, 4)),
            Err(ChessErrors::CapacityExceeded(DEFAULT_MAX_BLACK_PIECES))
        );
        assert_eq!(board.black_piece_count(), DEFAULT_MAX_BLACK_PIECES);
    }

    #[test]
    fn occupied_squares_stay_pairwise_distinct() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut board = BoardState::new(40);
        board
            .try_set_white_piece(WhitePieceKind::Pawn, Square::new(4, 1))
            .expect("white placement");

        for _ in 0..200 {
            let square = Square::new(rng.random_range(0..8), rng.random_range(0..8));
            let _ = board.try_add_black_piece("queen", square);

            let occupied: Vec<Square> = board.occupied_squares().collect();
            let unique: HashSet<Square> = occupied.iter().copied().collect();
            assert_eq!(occupied.len(), unique.len());
        }
        assert!(board.black_piece_count() <= 40);
    }
}
