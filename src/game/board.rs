use std::collections::{HashMap, HashSet};

use tracing::debug;

use super::point::{column_index, column_letter, Coord, PointId, WinLine};
use crate::error::MoveError;

pub const ROWS: usize = 6;
pub const COLS: usize = 7;

/// Number of same-token cells needed to win.
pub const CONNECT: usize = 4;

/// Symbol used when printing an empty cell.
pub const EMPTY_SYMBOL: char = '.';

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Token(char),
}

impl Cell {
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => EMPTY_SYMBOL,
            Cell::Token(token) => token,
        }
    }

    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

/// The 7x6 playing field.
///
/// Gravity is simulated through a per-column frontier: the rank of the next
/// open point in that column. A fresh column starts at rank 6 (the bottom row)
/// and each drop moves the frontier one rank up; rank 0 means the column is
/// closed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; COLS]; ROWS],
    key: [[PointId; COLS]; ROWS],
    index: HashMap<PointId, Coord>,
    frontier: [usize; COLS],
    marked: HashSet<PointId>,
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        let key = build_key();
        let index = key
            .iter()
            .enumerate()
            .flat_map(|(row, ids)| {
                ids.iter()
                    .enumerate()
                    .map(move |(col, &id)| (id, Coord::new(row, col)))
            })
            .collect();

        Board {
            cells: [[Cell::Empty; COLS]; ROWS],
            key,
            index,
            frontier: [ROWS; COLS],
            marked: HashSet::with_capacity(ROWS * COLS),
        }
    }

    /// Get the cell at a specific position
    /// Row 0 is the top, row 5 is the bottom
    ///
    /// # Panics
    ///
    /// Panics if `row >= ROWS` or `col >= COLS`.
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    pub fn grid(&self) -> &[[Cell; COLS]; ROWS] {
        &self.cells
    }

    /// Point identifiers laid out like the grid: `key()[r][c]` addresses
    /// `grid()[r][c]`.
    pub fn key(&self) -> &[[PointId; COLS]; ROWS] {
        &self.key
    }

    /// Grid position addressed by a point.
    pub fn locate(&self, point: PointId) -> Option<Coord> {
        self.index.get(&point).copied()
    }

    /// Next open point in a column, or `None` if the column is full or out of
    /// range.
    pub fn frontier(&self, col: usize) -> Option<PointId> {
        let rank = *self.frontier.get(col)?;
        PointId::new(col, rank)
    }

    pub fn is_marked(&self, point: PointId) -> bool {
        self.marked.contains(&point)
    }

    /// Check if a column is full
    pub fn is_column_full(&self, col: usize) -> bool {
        self.frontier(col).is_none()
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        (0..COLS).all(|col| self.is_column_full(col))
    }

    /// Place a token addressed either by column letter (one character) or by
    /// full point identifier (letter and rank). Returns where the token landed.
    pub fn insert(&mut self, token: char, input: &str) -> Result<Coord, MoveError> {
        let mut chars = input.chars();
        match (chars.next(), chars.next()) {
            (Some(letter), None) => self.insert_column(token, letter),
            (None, _) => Err(MoveError::InvalidColumn(String::new())),
            _ => self.insert_point(token, input),
        }
    }

    /// Drop a token into the column named by `letter` (`A..=G`).
    pub fn insert_column(&mut self, token: char, letter: char) -> Result<Coord, MoveError> {
        let col = column_index(letter).ok_or_else(|| MoveError::InvalidColumn(letter.into()))?;
        let point = self.frontier(col).ok_or(MoveError::ColumnFull(letter))?;
        self.place(token, point)
    }

    /// Place a token at an explicit point. The point must be the next open
    /// point of its column.
    pub fn insert_point(&mut self, token: char, input: &str) -> Result<Coord, MoveError> {
        let point: PointId = input.parse()?;
        if self.is_marked(point) {
            return Err(MoveError::PointUnavailable(point.to_string()));
        }
        match self.frontier(point.col()) {
            Some(next) if next == point => self.place(token, point),
            next => Err(MoveError::PointBlocked {
                point: point.to_string(),
                frontier: next.map_or_else(|| "none".to_string(), |p| p.to_string()),
            }),
        }
    }

    fn place(&mut self, token: char, point: PointId) -> Result<Coord, MoveError> {
        let coord = self
            .locate(point)
            .ok_or_else(|| MoveError::InvalidPoint(point.to_string()))?;
        debug_assert!(self.cells[coord.row][coord.col].is_empty());

        self.cells[coord.row][coord.col] = Cell::Token(token);
        self.marked.insert(point);
        self.frontier[point.col()] = point.rank() - 1;

        debug!(%point, row = coord.row, col = coord.col, %token, "token placed");
        Ok(coord)
    }

    /// First winning line for `token`: rows, then columns, then diagonals.
    pub fn check_win(&self, token: char) -> Option<WinLine> {
        self.check_row_win(token)
            .or_else(|| self.check_column_win(token))
            .or_else(|| self.check_diagonal_win(token))
    }

    /// Scan rows top-to-bottom, starting columns left-to-right.
    pub fn check_row_win(&self, token: char) -> Option<WinLine> {
        (0..ROWS).find_map(|row| {
            (0..=COLS - CONNECT).find_map(|col| self.line_at(token, Coord::new(row, col), (0, 1)))
        })
    }

    /// Scan columns left-to-right, starting rows top-to-bottom.
    pub fn check_column_win(&self, token: char) -> Option<WinLine> {
        (0..COLS).find_map(|col| {
            (0..=ROWS - CONNECT).find_map(|row| self.line_at(token, Coord::new(row, col), (1, 0)))
        })
    }

    /// Down-right diagonals first, down-left only if none was found.
    pub fn check_diagonal_win(&self, token: char) -> Option<WinLine> {
        self.check_down_right_win(token)
            .or_else(|| self.check_down_left_win(token))
    }

    /// Diagonals stepping (+1 row, +1 col), starting columns 0..=3.
    pub fn check_down_right_win(&self, token: char) -> Option<WinLine> {
        (0..=COLS - CONNECT).find_map(|col| {
            (0..=ROWS - CONNECT).find_map(|row| self.line_at(token, Coord::new(row, col), (1, 1)))
        })
    }

    /// Diagonals stepping (+1 row, -1 col), starting columns 6 down to 3.
    pub fn check_down_left_win(&self, token: char) -> Option<WinLine> {
        (CONNECT - 1..COLS).rev().find_map(|col| {
            (0..=ROWS - CONNECT).find_map(|row| self.line_at(token, Coord::new(row, col), (1, -1)))
        })
    }

    /// The four cells from `start` along `step`, if all hold `token`.
    /// Callers keep the whole line on the board.
    fn line_at(&self, token: char, start: Coord, step: (usize, isize)) -> Option<WinLine> {
        let mut line = [start; CONNECT];
        for (i, coord) in line.iter_mut().enumerate() {
            let row = start.row + step.0 * i;
            let col = start.col.checked_add_signed(step.1 * i as isize)?;
            if self.cells.get(row)?.get(col)? != &Cell::Token(token) {
                return None;
            }
            *coord = Coord::new(row, col);
        }
        Some(line)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Ranks outer, columns inner: `A1 B1 .. G1`, then `A2 .. G2`, up to `G6`.
fn build_key() -> [[PointId; COLS]; ROWS] {
    std::array::from_fn(|row| {
        std::array::from_fn(|col| {
            PointId::new(col, row + 1).unwrap_or_else(|| {
                unreachable!("{}{} is on the board", column_letter(col), row + 1)
            })
        })
    })
}
