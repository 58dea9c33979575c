//! Core Connect Four game logic: the board with its point-id key and gravity
//! frontier, players, and the turn-by-turn game state.

mod board;
mod player;
mod point;
mod state;

pub use board::{Board, Cell, COLS, CONNECT, EMPTY_SYMBOL, ROWS};
pub use player::{Player, Seat};
pub use point::{column_index, column_letter, Coord, PointId, WinLine};
pub use state::{GameOutcome, GameState};
