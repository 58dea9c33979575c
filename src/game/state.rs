use tracing::info;

use super::board::COLS;
use super::point::{column_letter, Coord, WinLine};
use super::{Board, Player, Seat};
use crate::error::MoveError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner { seat: Seat, line: WinLine },
    Draw,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    players: [Player; 2],
    current: Seat,
    last_move: Option<Coord>,
    outcome: Option<GameOutcome>,
}

impl GameState {
    /// Create a game between two players; seat One moves first.
    pub fn new(players: [Player; 2]) -> Self {
        GameState {
            board: Board::new(),
            players,
            current: Seat::One,
            last_move: None,
            outcome: None,
        }
    }

    /// Create initial game state with the default players
    pub fn initial() -> Self {
        Self::new(Player::default_pair())
    }

    pub fn current_seat(&self) -> Seat {
        self.current
    }

    pub fn current_player(&self) -> &Player {
        self.player(self.current)
    }

    pub fn player(&self, seat: Seat) -> &Player {
        &self.players[seat.index()]
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Where the most recent token landed
    pub fn last_move(&self) -> Option<Coord> {
        self.last_move
    }

    /// Get game outcome if game is over
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    /// The winning line, if the game was won
    pub fn winning_line(&self) -> Option<WinLine> {
        match self.outcome {
            Some(GameOutcome::Winner { line, .. }) => Some(line),
            _ => None,
        }
    }

    /// Check if game is over
    pub fn is_terminal(&self) -> bool {
        self.outcome.is_some()
    }

    /// Letters of the columns that still accept a token
    pub fn legal_columns(&self) -> Vec<char> {
        if self.is_terminal() {
            return Vec::new();
        }

        (0..COLS)
            .filter(|&col| !self.board.is_column_full(col))
            .map(column_letter)
            .collect()
    }

    /// Apply a move and return new state (immutable)
    pub fn apply_move(&self, input: &str) -> Result<GameState, MoveError> {
        let mut next = self.clone();
        next.apply_move_mut(input)?;
        Ok(next)
    }

    /// Place the current player's token at a column letter or point id, then
    /// check whether the mover won. Input is trimmed and upper-cased.
    pub fn apply_move_mut(&mut self, input: &str) -> Result<Coord, MoveError> {
        if self.is_terminal() {
            return Err(MoveError::GameOver);
        }

        let input = input.trim().to_uppercase();
        let token = self.current_player().token();
        let coord = self.board.insert(token, &input)?;
        self.last_move = Some(coord);

        if let Some(line) = self.board.check_win(token) {
            info!(player = self.current_player().name(), ?line, "game won");
            self.outcome = Some(GameOutcome::Winner {
                seat: self.current,
                line,
            });
        } else if self.board.is_full() {
            info!("game drawn");
            self.outcome = Some(GameOutcome::Draw);
        }

        self.current = self.current.other();

        Ok(coord)
    }

    /// Clear the board and start over with the same players
    pub fn restart(&mut self) {
        *self = Self::new(self.players.clone());
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::initial()
    }
}
