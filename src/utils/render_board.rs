//! Terminal-oriented Unicode board renderer.
//!
//! Draws the placed pieces for the console front end. With `show_threats`
//! the empty squares the white piece reaches are marked with `×`.

use std::collections::HashSet;

use crate::board_state::board_state::BoardState;
use crate::board_state::piece_types::WhitePieceKind;
use crate::board_state::square::Square;
use crate::utils::algebraic::CoordinateCodec;

/// Render the board with the highest rank on top.
pub fn render_board(board: &BoardState, codec: &CoordinateCodec, show_threats: bool) -> String {
    let bounds = codec.bounds();
    let threatened: HashSet<Square> = match board.white_piece() {
        Some(white) if show_threats => white
            .kind
            .movement_rule()
            .reachable_squares(white.square, bounds)
            .into_iter()
            .collect(),
        _ => HashSet::new(),
    };

    let header = file_header(codec);
    let mut out = String::new();
    out.push_str(&header);
    out.push('\n');

    for rank in (0..bounds.ranks).rev() {
        let label = codec.rank_char(rank).unwrap_or('?');
        out.push(label);
        out.push(' ');

        for file in 0..bounds.files {
            let square = Square::new(file, rank);
            let symbol = piece_on_square(board, square).unwrap_or(if threatened.contains(&square) {
                '×'
            } else {
                '·'
            });
            out.push(symbol);
            if file + 1 < bounds.files {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(label);
        out.push('\n');
    }

    out.push_str(&header);
    out
}

fn file_header(codec: &CoordinateCodec) -> String {
    let files: Vec<String> = (0..codec.bounds().files)
        .filter_map(|file| codec.file_char(file))
        .map(String::from)
        .collect();
    format!("  {}", files.join(" "))
}

fn piece_on_square(board: &BoardState, square: Square) -> Option<char> {
    if let Some(white) = board.white_piece().filter(|white| white.square == square) {
        return Some(white_symbol(white.kind));
    }
    board
        .black_piece_at(square)
        .map(|piece| black_symbol(&piece.label))
}

fn white_symbol(kind: WhitePieceKind) -> char {
    match kind {
        WhitePieceKind::Rook => '♖',
        WhitePieceKind::Pawn => '♙',
    }
}

fn black_symbol(label: &str) -> char {
    match label.to_ascii_lowercase().as_str() {
        "pawn" => '♟',
        "knight" => '♞',
        "bishop" => '♝',
        "rook" => '♜',
        "queen" => '♛',
        "king" => '♚',
        _ => '●',
    }
}
