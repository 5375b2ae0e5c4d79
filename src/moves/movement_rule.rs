//! Capture predicates shared by every white piece kind.
//!
//! Each kind maps to one `MovementRule` implementation (see
//! `WhitePieceKind::movement_rule`). Rules ignore blocking pieces and turn
//! order: a black piece is capturable when the white piece's movement
//! pattern reaches its square directly.

use crate::board_state::square::{BoardBounds, Square};

pub trait MovementRule: Sync {
    /// True if a piece standing on `from` could capture on `to`.
    fn can_capture(&self, from: Square, to: Square) -> bool;

    /// Every in-bounds square reached from `from`, excluding `from` itself.
    fn reachable_squares(&self, from: Square, bounds: BoardBounds) -> Vec<Square>;
}
