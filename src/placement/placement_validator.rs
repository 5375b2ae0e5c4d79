//! Line-by-line placement state machine.
//!
//! The validator starts in `PlacingWhite`. A valid white line moves it to
//! `PlacingBlack`, where black pieces are added until the termination
//! keyword arrives or the board's capacity has been reached. Once
//! `Finalized`, every further line is rejected and the board can be handed
//! to the capture evaluator.
//!
//! Rejected lines never touch the board. Every line produces exactly one
//! `PlacementOutcome`.

use log::{debug, info, trace};

use crate::board_state::board_state::BoardState;
use crate::board_state::piece_types::{describe_kinds, BlackPiece, WhitePiece, WhitePieceKind};
use crate::board_state::square::Square;
use crate::chess_errors::ChessErrors;
use crate::config::RulesConfig;
use crate::placement::placement_outcome::{Placement, PlacementOutcome, PlacementPhase};

const MIN_BLACK_PIECES: usize = 1;

#[derive(Debug, Clone)]
pub struct PlacementValidator {
    config: RulesConfig,
    board: BoardState,
    phase: PlacementPhase,
}

impl Default for PlacementValidator {
    fn default() -> Self {
        Self::with_checked_config(RulesConfig::default())
    }
}

impl PlacementValidator {
    /// Builds a validator, rejecting configs that `RulesConfig::validate`
    /// refuses (zero capacity, empty keyword, ...).
    pub fn new(config: RulesConfig) -> Result<Self, ChessErrors> {
        config.validate()?;
        Ok(Self::with_checked_config(config))
    }

    fn with_checked_config(config: RulesConfig) -> Self {
        let board = BoardState::new(config.max_black_pieces);
        Self {
            config,
            board,
            phase: PlacementPhase::PlacingWhite,
        }
    }

    #[inline]
    pub fn phase(&self) -> PlacementPhase {
        self.phase
    }

    #[inline]
    pub fn is_finalized(&self) -> bool {
        self.phase == PlacementPhase::Finalized
    }

    #[inline]
    pub fn board(&self) -> &BoardState {
        &self.board
    }

    #[inline]
    pub fn config(&self) -> &RulesConfig {
        &self.config
    }

    /// Prompt text for the current phase, `None` once finalized.
    pub fn prompt(&self) -> Option<&'static str> {
        match self.phase {
            PlacementPhase::PlacingWhite => {
                Some("Input your white piece and its position (example: rook a5): ")
            }
            PlacementPhase::PlacingBlack => {
                Some("Input your black piece and its position (example: knight a7): ")
            }
            PlacementPhase::Finalized => None,
        }
    }

    /// Processes one raw input line. The caller strips the line terminator.
    pub fn process_line(&mut self, line: &str) -> PlacementOutcome {
        trace!("phase {:?} received line {line:?}", self.phase);

        let outcome = match self.phase {
            PlacementPhase::PlacingWhite => self.process_white(line),
            PlacementPhase::PlacingBlack => self.process_black(line),
            PlacementPhase::Finalized => PlacementOutcome::Rejected(ChessErrors::PlacementFinalized),
        };

        match &outcome {
            PlacementOutcome::Accepted { description, .. } => debug!("accepted: {description}"),
            PlacementOutcome::Rejected(err) => debug!("rejected {line:?}: {err:?}"),
            PlacementOutcome::Finalized => {}
        }
        outcome
    }

    fn process_white(&mut self, line: &str) -> PlacementOutcome {
        match self.place_white(line) {
            Ok(outcome) => outcome,
            Err(err) => PlacementOutcome::Rejected(err),
        }
    }

    fn place_white(&mut self, line: &str) -> Result<PlacementOutcome, ChessErrors> {
        let (piece, position) = split_piece_and_position(line)?;

        let kind = piece
            .parse::<WhitePieceKind>()
            .ok()
            .filter(|kind| self.config.white_kinds.contains(kind))
            .ok_or_else(|| ChessErrors::UnsupportedWhitePiece {
                piece: piece.to_owned(),
                allowed: describe_kinds(&self.config.white_kinds),
            })?;
        let square = self.decode_position(position)?;

        self.board.try_set_white_piece(kind, square)?;
        self.phase = PlacementPhase::PlacingBlack;

        Ok(PlacementOutcome::Accepted {
            placement: Placement::White(WhitePiece { kind, square }),
            description: format!(
                "White {} placed at {}",
                kind,
                self.config.codec.to_notation(square)
            ),
        })
    }

    fn process_black(&mut self, line: &str) -> PlacementOutcome {
        if self.board.is_capacity_reached() {
            self.finalize();
            return PlacementOutcome::Rejected(ChessErrors::CapacityExceeded(self.board.capacity()));
        }

        if line == self.config.done_keyword {
            if self.board.black_piece_count() < MIN_BLACK_PIECES {
                return PlacementOutcome::Rejected(ChessErrors::PrematureTermination(MIN_BLACK_PIECES));
            }
            self.finalize();
            return PlacementOutcome::Finalized;
        }

        match self.place_black(line) {
            Ok(outcome) => outcome,
            Err(err) => PlacementOutcome::Rejected(err),
        }
    }

    fn place_black(&mut self, line: &str) -> Result<PlacementOutcome, ChessErrors> {
        let (label, position) = split_piece_and_position(line)?;
        let square = self.decode_position(position)?;

        self.board.try_add_black_piece(label, square)?;

        Ok(PlacementOutcome::Accepted {
            description: format!(
                "You've added {label} at {}",
                self.config.codec.to_notation(square)
            ),
            placement: Placement::Black(BlackPiece {
                label: label.to_owned(),
                square,
            }),
        })
    }

    fn decode_position(&self, position: &str) -> Result<Square, ChessErrors> {
        self.config.codec.to_square(position).map_err(|_| {
            let (first, last) = self.config.codec.notation_range();
            ChessErrors::InvalidPosition {
                token: position.to_owned(),
                first,
                last,
            }
        })
    }

    fn finalize(&mut self) {
        self.phase = PlacementPhase::Finalized;
        info!(
            "placement finalized with {} black piece(s)",
            self.board.black_piece_count()
        );
    }
}

/// Splits `<piece> <position>`; surrounding and repeated whitespace is
/// ignored, but exactly two tokens must remain.
fn split_piece_and_position(line: &str) -> Result<(&str, &str), ChessErrors> {
    let mut tokens = line.split_whitespace();
    match (tokens.next(), tokens.next(), tokens.next()) {
        (Some(piece), Some(position), None) => Ok((piece, position)),
        _ => Err(ChessErrors::MalformedInput(line.to_owned())),
    }
}
