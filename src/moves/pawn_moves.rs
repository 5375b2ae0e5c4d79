use crate::board_state::square::{BoardBounds, Square};
use crate::moves::movement_rule::MovementRule;

/// White pawn capture: one rank forward, one file to either side.
///
/// Targets off the board are simply absent, so pawns on the a/h files or on
/// the last rank need no special handling.
#[derive(Debug, Clone, Copy, Default)]
pub struct PawnMovement;

const PAWN_CAPTURE_OFFSETS: [(i8, i8); 2] = [(-1, 1), (1, 1)];

impl MovementRule for PawnMovement {
    #[inline]
    fn can_capture(&self, from: Square, to: Square) -> bool {
        from.rank.checked_add(1) == Some(to.rank) && from.file.abs_diff(to.file) == 1
    }

    fn reachable_squares(&self, from: Square, bounds: BoardBounds) -> Vec<Square> {
        PAWN_CAPTURE_OFFSETS
            .iter()
            .filter_map(|&(d_file, d_rank)| from.offset(d_file, d_rank, bounds))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::PawnMovement;
    use crate::board_state::square::{BoardBounds, Square};
    use crate::moves::movement_rule::MovementRule;

    #[test]
    fn pawn_attacks_from_e2() {
        let e2 = Square::new(4, 1);
        let expected = vec![Square::new(3, 2), Square::new(5, 2)];
        assert_eq!(PawnMovement.reachable_squares(e2, BoardBounds::STANDARD), expected);
    }

    #[test]
    fn pawn_does_not_capture_straight_or_backwards() {
        let d4 = Square::new(3, 3);
        assert!(!PawnMovement.can_capture(d4, Square::new(3, 4)));
        assert!(!PawnMovement.can_capture(d4, Square::new(2, 2)));
        assert!(!PawnMovement.can_capture(d4, Square::new(1, 4)));
    }

    #[test]
    fn edge_pawns_have_one_target_and_last_rank_has_none() {
        let a4 = Square::new(0, 3);
        assert_eq!(
            PawnMovement.reachable_squares(a4, BoardBounds::STANDARD),
            vec![Square::new(1, 4)]
        );
        let h4 = Square::new(7, 3);
        assert_eq!(
            PawnMovement.reachable_squares(h4, BoardBounds::STANDARD),
            vec![Square::new(6, 4)]
        );
        let d8 = Square::new(3, 7);
        assert!(PawnMovement.reachable_squares(d8, BoardBounds::STANDARD).is_empty());
    }
}
