//! Crate root module declarations for the capture checker.
//!
//! One white piece (rook or pawn) and up to sixteen black pieces are placed
//! from text lines; the crate then reports which black pieces the white
//! piece could take in one move. This file exposes the board model,
//! movement rules, the placement state machine, capture evaluation, and the
//! console helpers so the binary, benches and tests share module paths.

pub mod chess_errors;
pub mod config;

pub mod board_state {
    pub mod board_state;
    pub mod piece_types;
    pub mod square;
}

pub mod moves {
    pub mod movement_rule;
    pub mod pawn_moves;
    pub mod rook_moves;
}

pub mod placement {
    pub mod placement_outcome;
    pub mod placement_validator;
}

pub mod capture {
    pub mod capture_evaluator;
}

pub mod session {
    pub mod console;
}

pub mod utils {
    pub mod algebraic;
    pub mod random_scenario;
    pub mod render_board;
}
