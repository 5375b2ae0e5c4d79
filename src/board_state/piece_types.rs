//! Piece records placed on the board.

use std::fmt;
use std::str::FromStr;

use crate::board_state::square::Square;
use crate::chess_errors::ChessErrors;
use crate::moves::movement_rule::MovementRule;
use crate::moves::pawn_moves::PawnMovement;
use crate::moves::rook_moves::RookMovement;

/// Kinds the white piece may take. Black pieces carry a free-form label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WhitePieceKind {
    Rook,
    Pawn,
}

impl WhitePieceKind {
    pub const ALL: [WhitePieceKind; 2] = [WhitePieceKind::Rook, WhitePieceKind::Pawn];

    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            WhitePieceKind::Rook => "rook",
            WhitePieceKind::Pawn => "pawn",
        }
    }

    /// The capture predicate used for this kind.
    #[inline]
    pub fn movement_rule(self) -> &'static dyn MovementRule {
        match self {
            WhitePieceKind::Rook => &RookMovement,
            WhitePieceKind::Pawn => &PawnMovement,
        }
    }
}

impl fmt::Display for WhitePieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for WhitePieceKind {
    type Err = ChessErrors;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        WhitePieceKind::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ChessErrors::UnsupportedWhitePiece {
                piece: s.to_owned(),
                allowed: describe_kinds(&WhitePieceKind::ALL),
            })
    }
}

/// Human-readable plural list, e.g. `rooks and pawns`.
pub fn describe_kinds(kinds: &[WhitePieceKind]) -> String {
    let names: Vec<String> = kinds.iter().map(|k| format!("{}s", k.name())).collect();
    match names.split_last() {
        None => String::new(),
        Some((last, [])) => last.clone(),
        Some((last, rest)) => format!("{} and {last}", rest.join(", ")),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WhitePiece {
    pub kind: WhitePieceKind,
    pub square: Square,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlackPiece {
    pub label: String,
    pub square: Square,
}
