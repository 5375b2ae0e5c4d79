use crate::board_state::square::{BoardBounds, Square};
use crate::moves::movement_rule::MovementRule;

/// Rook reach along ranks and files. Nothing blocks a ray.
#[derive(Debug, Clone, Copy, Default)]
pub struct RookMovement;

const ROOK_DIRECTIONS: [(i8, i8); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];

impl MovementRule for RookMovement {
    #[inline]
    fn can_capture(&self, from: Square, to: Square) -> bool {
        from.file == to.file || from.rank == to.rank
    }

    fn reachable_squares(&self, from: Square, bounds: BoardBounds) -> Vec<Square> {
        let mut squares = Vec::new();
        for (file_step, rank_step) in ROOK_DIRECTIONS {
            trace_ray(from, file_step, rank_step, bounds, &mut squares);
        }
        squares
    }
}

fn trace_ray(from: Square, file_step: i8, rank_step: i8, bounds: BoardBounds, out: &mut Vec<Square>) {
    let mut current = from;
    while let Some(next) = current.offset(file_step, rank_step, bounds) {
        out.push(next);
        current = next;
    }
}
