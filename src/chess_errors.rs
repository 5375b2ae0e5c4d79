//! Errors used throughout the capture checker.
//!
//! `ChessErrors` is the single error type returned by the coordinate codec,
//! the board state, the placement validator and the capture evaluator. The
//! `Display` text of each variant is the message shown to the person typing
//! placements, so the console front end prints errors verbatim.
//!
//! Usage guidelines:
//! - Placement-related variants (`MalformedInput`, `InvalidPosition`,
//!   `SquareOccupied`, ...) are recoverable: the validator stays in its
//!   current phase and waits for another line. `CapacityExceeded` is the one
//!   exception and finalizes placement.
//! - `AlreadySet` and `WhitePieceNotPlaced` guard internal preconditions and
//!   are not reachable through the normal console loop.
//! - `InvalidConfig` is reported while building a `RulesConfig` or a random
//!   scenario and should abort start-up.

use thiserror::Error;

use crate::board_state::square::Square;

/// Unified error type for the capture checker.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChessErrors {
    /// The line did not split into exactly two non-empty tokens.
    ///
    /// Payload: the offending line.
    #[error("Invalid format. Should use a piece + coordinates (e.g. bishop e5).")]
    MalformedInput(String),

    /// The white piece kind is not one of the configured white kinds.
    #[error("Only {allowed} are allowed for white pieces (got `{piece}`)")]
    UnsupportedWhitePiece { piece: String, allowed: String },

    /// Notation could not be decoded by the coordinate codec.
    ///
    /// Payload: the original notation string.
    #[error("Invalid algebraic square: `{0}`")]
    InvalidNotation(String),

    /// The position token of a placement line is not a valid square.
    #[error("Invalid coordinates. Use positions from {first} to {last}.")]
    InvalidPosition {
        token: String,
        first: String,
        last: String,
    },

    /// Target square already holds the white piece or a black piece.
    #[error("This spot is already taken. Enter other coordinates")]
    SquareOccupied(Square),

    /// The black piece collection is full.
    ///
    /// Payload: the capacity that was reached.
    #[error("You have reached the limit allowed for black pieces")]
    CapacityExceeded(usize),

    /// Termination keyword received before any black piece was placed.
    ///
    /// Payload: the minimum number of black pieces required.
    #[error("You must add at least {0} black piece")]
    PrematureTermination(usize),

    /// Attempted to replace the white piece.
    ///
    /// Payload: the square of the white piece already on the board.
    #[error("The white piece has already been placed")]
    AlreadySet(Square),

    #[error("No white piece has been placed")]
    WhitePieceNotPlaced,

    #[error("Placement is finished; no more pieces can be added")]
    PlacementFinalized,

    /// Rules configuration or scenario parameters are unusable.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
