//! Which black pieces the white piece can take in one move.
//!
//! Evaluation is a pure read of a finalized `BoardState`. Results keep the
//! board's insertion order.

use std::fmt;

use log::info;

use crate::board_state::board_state::BoardState;
use crate::board_state::piece_types::BlackPiece;
use crate::chess_errors::ChessErrors;
use crate::utils::algebraic::CoordinateCodec;

/// Every black piece reachable by the white piece's movement rule.
pub fn captures(board: &BoardState) -> Result<Vec<&BlackPiece>, ChessErrors> {
    let white = board.white_piece().ok_or(ChessErrors::WhitePieceNotPlaced)?;
    let rule = white.kind.movement_rule();

    Ok(board
        .black_pieces()
        .iter()
        .filter(|black| rule.can_capture(white.square, black.square))
        .collect())
}

/// Printable capture summary: one `<label> at <square>` line per capture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptureReport {
    pub entries: Vec<String>,
}

impl CaptureReport {
    pub fn from_board(board: &BoardState, codec: &CoordinateCodec) -> Result<Self, ChessErrors> {
        let entries: Vec<String> = captures(board)?
            .into_iter()
            .map(|piece| format!("{} at {}", piece.label, codec.to_notation(piece.square)))
            .collect();
        info!(
            "{} of {} black piece(s) can be captured",
            entries.len(),
            board.black_piece_count()
        );
        Ok(Self { entries })
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Display for CaptureReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.entries.is_empty() {
            return f.write_str("No black pieces to capture");
        }
        f.write_str("Black pieces that can be captured:")?;
        for entry in &self.entries {
            write!(f, "\n{entry}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{captures, CaptureReport};
    use crate::board_state::board_state::BoardState;
    use crate::board_state::piece_types::WhitePieceKind;
    use crate::chess_errors::ChessErrors;
    use crate::utils::algebraic::CoordinateCodec;

    fn board(kind: WhitePieceKind, white: &str, black: &[(&str, &str)]) -> BoardState {
        let codec = CoordinateCodec::standard();
        let mut board = BoardState::default();
        board
            .try_set_white_piece(kind, codec.to_square(white).expect("white square"))
            .expect("white placement");
        for (label, at) in black {
            board
                .try_add_black_piece(*label, codec.to_square(at).expect("black square"))
                .expect("black placement");
        }
        board
    }

    fn captured_squares(board: &BoardState) -> Vec<String> {
        let codec = CoordinateCodec::standard();
        captures(board)
            .expect("white piece is placed")
            .into_iter()
            .map(|piece| codec.to_notation(piece.square))
            .collect()
    }

    #[test]
    fn rook_captures_on_same_file_and_rank() {
        let board = board(
            WhitePieceKind::Rook,
            "d4",
            &[("queen", "d8"), ("knight", "a4"), ("bishop", "e5")],
        );
        assert_eq!(captured_squares(&board), vec!["d8", "a4"]);
    }

    #[test]
    fn rook_ignores_blocking_pieces() {
        let board = board(
            WhitePieceKind::Rook,
            "a1",
            &[("pawn", "a2"), ("queen", "a8"), ("king", "h1")],
        );
        assert_eq!(captured_squares(&board), vec!["a2", "a8", "h1"]);
    }

    #[test]
    fn pawn_captures_forward_diagonals_in_insertion_order() {
        let board = board(
            WhitePieceKind::Pawn,
            "d4",
            &[("rook", "e5"), ("pawn", "d5"), ("bishop", "c3"), ("knight", "c5")],
        );
        assert_eq!(captured_squares(&board), vec!["e5", "c5"]);
    }

    #[test]
    fn pawn_on_edge_file_and_last_rank() {
        let edge = board(WhitePieceKind::Pawn, "a4", &[("knight", "b5"), ("rook", "h5")]);
        assert_eq!(captured_squares(&edge), vec!["b5"]);

        let last = board(WhitePieceKind::Pawn, "e8", &[("knight", "d7"), ("rook", "f7")]);
        assert!(captured_squares(&last).is_empty());
    }

    #[test]
    fn missing_white_piece_is_an_error() {
        let board = BoardState::default();
        assert_eq!(captures(&board), Err(ChessErrors::WhitePieceNotPlaced));
    }

    #[test]
    fn report_lists_captures_or_says_none() {
        let codec = CoordinateCodec::standard();
        let hit = board(WhitePieceKind::Rook, "d4", &[("queen", "d8"), ("bishop", "e5")]);
        let report = CaptureReport::from_board(&hit, &codec).expect("report");
        assert_eq!(report.to_string(), "Black pieces that can be captured:\nqueen at d8");

        let miss = board(WhitePieceKind::Pawn, "d4", &[("bishop", "e3")]);
        let report = CaptureReport::from_board(&miss, &codec).expect("report");
        assert!(report.is_empty());
        assert_eq!(report.to_string(), "No black pieces to capture");
    }
}
