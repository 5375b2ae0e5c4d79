//! Result of feeding one line to the placement validator.

use std::fmt;

use crate::board_state::piece_types::{BlackPiece, WhitePiece};
use crate::chess_errors::ChessErrors;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementPhase {
    PlacingWhite,
    PlacingBlack,
    Finalized,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Placement {
    White(WhitePiece),
    Black(BlackPiece),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlacementOutcome {
    /// The piece is on the board; `description` is the confirmation text.
    Accepted {
        placement: Placement,
        description: String,
    },
    /// Nothing changed, except that `CapacityExceeded` also finalizes.
    Rejected(ChessErrors),
    /// The termination keyword closed black placement.
    Finalized,
}

impl PlacementOutcome {
    #[inline]
    pub fn is_accepted(&self) -> bool {
        matches!(self, PlacementOutcome::Accepted { .. })
    }

    #[inline]
    pub fn rejection(&self) -> Option<&ChessErrors> {
        match self {
            PlacementOutcome::Rejected(err) => Some(err),
            _ => None,
        }
    }
}

impl fmt::Display for PlacementOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlacementOutcome::Accepted { description, .. } => f.write_str(description),
            PlacementOutcome::Rejected(err) => write!(f, "{err}"),
            PlacementOutcome::Finalized => f.write_str("Black piece placement finished"),
        }
    }
}
