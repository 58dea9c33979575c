use std::fmt;
use std::str::FromStr;

use super::board::{COLS, ROWS};
use crate::error::MoveError;

/// A grid position. Row 0 is the top, row 5 is the bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub const fn new(row: usize, col: usize) -> Self {
        Coord { row, col }
    }
}

impl From<(usize, usize)> for Coord {
    fn from((row, col): (usize, usize)) -> Self {
        Coord::new(row, col)
    }
}

/// Four same-token coordinates in scan order.
pub type WinLine = [Coord; 4];

/// Column letter for a zero-based column index.
pub fn column_letter(col: usize) -> char {
    debug_assert!(col < COLS);
    (b'A' + col as u8) as char
}

/// Zero-based column index for an upper-case letter in `A..=G`.
pub fn column_index(letter: char) -> Option<usize> {
    match letter {
        'A'..='G' => Some(letter as usize - 'A' as usize),
        _ => None,
    }
}

/// Human-readable point identifier: a column letter followed by a rank.
///
/// Ranks run 1..=6 and line up with grid rows, so `A1` addresses the top-left
/// cell and `G6` the bottom-right one. A `PointId` can only be built for a
/// point that exists on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PointId {
    col: u8,
    rank: u8,
}

impl PointId {
    /// Build a point from a zero-based column and a rank in `1..=6`.
    pub fn new(col: usize, rank: usize) -> Option<Self> {
        if col < COLS && (1..=ROWS).contains(&rank) {
            Some(PointId {
                col: col as u8,
                rank: rank as u8,
            })
        } else {
            None
        }
    }

    pub fn col(self) -> usize {
        self.col as usize
    }

    pub fn rank(self) -> usize {
        self.rank as usize
    }

    pub fn letter(self) -> char {
        column_letter(self.col())
    }
}

impl fmt::Display for PointId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.letter(), self.rank)
    }
}

impl FromStr for PointId {
    type Err = MoveError;

    /// Accepts exactly one letter `A..=G` followed by one digit `1..=6`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || MoveError::InvalidPoint(s.to_string());
        let mut chars = s.chars();
        let (Some(letter), Some(digit), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(invalid());
        };
        let col = column_index(letter).ok_or_else(invalid)?;
        let rank = digit.to_digit(10).ok_or_else(invalid)? as usize;
        PointId::new(col, rank).ok_or_else(invalid)
    }
}
