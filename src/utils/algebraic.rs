//! Square conversions for algebraic coordinates.
//!
//! Converts between human-readable coordinates (e.g. `e4`) and zero-based
//! `Square`s. The file and rank alphabets are held by the codec instead of
//! being global constants, so tests and the CLI can describe smaller or
//! larger boards.

use crate::board_state::square::{BoardBounds, Square};
use crate::chess_errors::ChessErrors;

pub const STANDARD_FILES: &str = "abcdefgh";
pub const STANDARD_RANKS: &str = "12345678";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoordinateCodec {
    files: Vec<char>,
    ranks: Vec<char>,
}

impl Default for CoordinateCodec {
    fn default() -> Self {
        Self::standard()
    }
}

impl CoordinateCodec {
    /// Files `a`-`h`, ranks `1`-`8`.
    pub fn standard() -> Self {
        Self {
            files: STANDARD_FILES.chars().collect(),
            ranks: STANDARD_RANKS.chars().collect(),
        }
    }

    /// Builds a codec for custom alphabets.
    ///
    /// Files must be distinct lowercase ASCII letters; ranks must be distinct
    /// ASCII alphanumerics. Each alphabet needs at least one entry.
    pub fn new(files: &str, ranks: &str) -> Result<Self, ChessErrors> {
        let files: Vec<char> = files.chars().collect();
        let ranks: Vec<char> = ranks.chars().collect();

        validate_alphabet("file", &files, |c| c.is_ascii_lowercase())?;
        validate_alphabet("rank", &ranks, |c| c.is_ascii_alphanumeric())?;

        Ok(Self { files, ranks })
    }

    #[inline]
    pub fn bounds(&self) -> BoardBounds {
        // alphabet lengths are capped by validate_alphabet
        BoardBounds {
            files: self.files.len() as u8,
            ranks: self.ranks.len() as u8,
        }
    }

    #[inline]
    pub fn contains(&self, square: Square) -> bool {
        self.bounds().contains(square)
    }

    pub fn file_char(&self, file: u8) -> Option<char> {
        self.files.get(usize::from(file)).copied()
    }

    pub fn rank_char(&self, rank: u8) -> Option<char> {
        self.ranks.get(usize::from(rank)).copied()
    }

    /// Convert notation (for example: "e4" or "E4") to a square.
    pub fn to_square(&self, notation: &str) -> Result<Square, ChessErrors> {
        let invalid = || ChessErrors::InvalidNotation(notation.to_owned());

        let mut chars = notation.chars();
        let (Some(file), Some(rank), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(invalid());
        };

        let file = file.to_ascii_lowercase();
        let file_index = self.files.iter().position(|&c| c == file).ok_or_else(invalid)?;
        let rank_index = self.ranks.iter().position(|&c| c == rank).ok_or_else(invalid)?;

        Ok(Square::new(file_index as u8, rank_index as u8))
    }

    /// Convert an in-bounds square to its canonical lowercase notation.
    ///
    /// Callers guarantee `square` lies on this codec's board; an out-of-range
    /// index is rendered as `?` rather than panicking.
    pub fn to_notation(&self, square: Square) -> String {
        let file = self.file_char(square.file).unwrap_or('?');
        let rank = self.rank_char(square.rank).unwrap_or('?');
        format!("{file}{rank}")
    }

    /// Notation of the first and last squares, used in error messages.
    pub fn notation_range(&self) -> (String, String) {
        let bounds = self.bounds();
        (
            self.to_notation(Square::new(0, 0)),
            self.to_notation(Square::new(bounds.files - 1, bounds.ranks - 1)),
        )
    }
}

fn validate_alphabet(
    what: &str,
    alphabet: &[char],
    allowed: impl Fn(char) -> bool,
) -> Result<(), ChessErrors> {
    if alphabet.is_empty() {
        return Err(ChessErrors::InvalidConfig(format!("{what} alphabet is empty")));
    }
    if alphabet.len() > usize::from(u8::MAX) {
        return Err(ChessErrors::InvalidConfig(format!("{what} alphabet is too long")));
    }
    if let Some(bad) = alphabet.iter().find(|&&c| !allowed(c)) {
        return Err(ChessErrors::InvalidConfig(format!(
            "{what} alphabet contains unsupported character `{bad}`"
        )));
    }
    for (i, c) in alphabet.iter().enumerate() {
        if alphabet[..i].contains(c) {
            return Err(ChessErrors::InvalidConfig(format!(
                "{what} alphabet repeats `{c}`"
            )));
        }
    }
    Ok(())
}
