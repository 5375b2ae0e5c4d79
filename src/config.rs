//! Rules configuration shared by the validator, the renderer and the CLI.

use crate::board_state::board_state::DEFAULT_MAX_BLACK_PIECES;
use crate::board_state::piece_types::WhitePieceKind;
use crate::chess_errors::ChessErrors;
use crate::utils::algebraic::CoordinateCodec;

pub const DEFAULT_DONE_KEYWORD: &str = "done";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RulesConfig {
    pub codec: CoordinateCodec,
    /// White kinds accepted for the first placement.
    pub white_kinds: Vec<WhitePieceKind>,
    pub max_black_pieces: usize,
    /// Exact, case-sensitive line that ends black placement.
    pub done_keyword: String,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            codec: CoordinateCodec::standard(),
            white_kinds: WhitePieceKind::ALL.to_vec(),
            max_black_pieces: DEFAULT_MAX_BLACK_PIECES,
            done_keyword: DEFAULT_DONE_KEYWORD.to_owned(),
        }
    }
}

impl RulesConfig {
    pub fn validate(&self) -> Result<(), ChessErrors> {
        if self.max_black_pieces == 0 {
            return Err(ChessErrors::InvalidConfig(
                "at least one black piece must be allowed".to_owned(),
            ));
        }
        let squares = self.codec.bounds().square_count();
        if self.max_black_pieces + 1 > squares {
            return Err(ChessErrors::InvalidConfig(format!(
                "{} black pieces and the white piece do not fit on {squares} squares",
                self.max_black_pieces
            )));
        }
        if self.white_kinds.is_empty() {
            return Err(ChessErrors::InvalidConfig(
                "no white piece kinds are allowed".to_owned(),
            ));
        }
        if self.done_keyword.is_empty() || self.done_keyword.chars().any(char::is_whitespace) {
            return Err(ChessErrors::InvalidConfig(format!(
                "termination keyword `{}` must be a single non-empty word",
                self.done_keyword
            )));
        }
        Ok(())
    }
}
