//! Seeded random placement scripts.
//!
//! Produces the lines a person would type for a random position: one white
//! placement, `black_count` black placements on distinct squares, then the
//! termination keyword. Feeding the script to a `PlacementValidator` built
//! from the same config yields no rejections other than the limit-reached
//! signal when `black_count` equals the capacity.

use rand::prelude::IndexedRandom;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::board_state::piece_types::WhitePieceKind;
use crate::board_state::square::Square;
use crate::chess_errors::ChessErrors;
use crate::config::RulesConfig;

pub const BLACK_PIECE_LABELS: [&str; 6] = ["pawn", "knight", "bishop", "rook", "queen", "king"];

pub fn random_scenario_lines<R: Rng + ?Sized>(
    config: &RulesConfig,
    black_count: usize,
    white_kind: Option<WhitePieceKind>,
    rng: &mut R,
) -> Result<Vec<String>, ChessErrors> {
    config.validate()?;
    if black_count == 0 || black_count > config.max_black_pieces {
        return Err(ChessErrors::InvalidConfig(format!(
            "black piece count must be between 1 and {}, got {black_count}",
            config.max_black_pieces
        )));
    }

    let kind = match white_kind {
        Some(kind) if config.white_kinds.contains(&kind) => kind,
        Some(kind) => {
            return Err(ChessErrors::InvalidConfig(format!(
                "white {kind} is not allowed by the rules"
            )))
        }
        None => *config
            .white_kinds
            .choose(rng)
            .ok_or_else(|| ChessErrors::InvalidConfig("no white piece kinds".to_owned()))?,
    };

    let mut squares: Vec<Square> = config.codec.bounds().squares().collect();
    squares.shuffle(rng);
    let mut squares = squares.into_iter();

    let mut lines = Vec::with_capacity(black_count + 2);
    let white_square = squares
        .next()
        .ok_or_else(|| ChessErrors::InvalidConfig("board has no squares".to_owned()))?;
    lines.push(format!("{kind} {}", config.codec.to_notation(white_square)));

    for square in squares.take(black_count) {
        let label = BLACK_PIECE_LABELS.choose(rng).copied().unwrap_or("pawn");
        lines.push(format!("{label} {}", config.codec.to_notation(square)));
    }

    lines.push(config.done_keyword.clone());
    Ok(lines)
}
