//! Zero-based board coordinates.

use std::fmt;

/// Board dimensions, derived from the codec's file and rank alphabets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoardBounds {
    pub files: u8,
    pub ranks: u8,
}

impl BoardBounds {
    pub const STANDARD: BoardBounds = BoardBounds { files: 8, ranks: 8 };

    #[inline]
    pub const fn contains(self, square: Square) -> bool {
        square.file < self.files && square.rank < self.ranks
    }

    #[inline]
    pub const fn square_count(self) -> usize {
        self.files as usize * self.ranks as usize
    }

    /// All squares of the board, rank by rank starting from the first rank.
    pub fn squares(self) -> impl Iterator<Item = Square> {
        (0..self.ranks).flat_map(move |rank| (0..self.files).map(move |file| Square { file, rank }))
    }
}

impl Default for BoardBounds {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// A square as (file index, rank index). Increasing `rank` means increasing
/// rank number, so white pawns move towards higher ranks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    pub file: u8,
    pub rank: u8,
}

impl Square {
    #[inline]
    pub const fn new(file: u8, rank: u8) -> Self {
        Self { file, rank }
    }

    /// Moves a square by a file and rank offset.
    ///
    /// # Returns
    ///
    /// * `Some(Square)` if the result lies within `bounds`, otherwise `None`.
    pub fn offset(self, d_file: i8, d_rank: i8, bounds: BoardBounds) -> Option<Square> {
        let file = i16::from(self.file) + i16::from(d_file);
        let rank = i16::from(self.rank) + i16::from(d_rank);
        if file < 0 || rank < 0 || file >= i16::from(bounds.files) || rank >= i16::from(bounds.ranks) {
            return None;
        }
        // both are in 0..=u8::MAX here
        Some(Square::new(file as u8, rank as u8))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.file, self.rank)
    }
}
