//! Line-based turn loop: prompt the active player for a column, echo errors,
//! announce the result.

use std::io::{self, BufRead, Write};

use crossterm::style::Stylize;
use tracing::debug;

use super::render::{render_board, RenderStyle};
use crate::game::{Coord, GameOutcome, GameState, WinLine};

const BANNER: &str = "*******************************************";

pub struct Console<R, W> {
    input: R,
    output: W,
    style: RenderStyle,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W, style: RenderStyle) -> Self {
        Console {
            input,
            output,
            style,
        }
    }

    /// Play until someone wins or the board fills. Returns `None` if input
    /// runs out first.
    pub fn play(&mut self, state: &mut GameState) -> io::Result<Option<GameOutcome>> {
        while !state.is_terminal() {
            let turn = format!("{}: your turn to play!", state.current_player().name());
            writeln!(self.output)?;
            if self.style.color {
                writeln!(self.output, "{}", turn.black().on_white())?;
            } else {
                writeln!(self.output, "{turn}")?;
            }
            self.print_board(state, None)?;

            if self.select_point(state)?.is_none() {
                writeln!(self.output, "\nInput closed, leaving the game.")?;
                return Ok(None);
            }
        }

        let outcome = state.outcome();
        self.announce(state)?;
        Ok(outcome)
    }

    /// Prompt until the current player makes a legal move.
    fn select_point(&mut self, state: &mut GameState) -> io::Result<Option<Coord>> {
        loop {
            let Some(input) = self.prompt_input()? else {
                return Ok(None);
            };

            match state.apply_move_mut(&input) {
                Ok(coord) => return Ok(Some(coord)),
                Err(err) => {
                    debug!(input = input.trim(), %err, "move rejected");
                    if self.style.color {
                        writeln!(self.output, "{}", err.to_string().yellow())?;
                    } else {
                        writeln!(self.output, "{err}")?;
                    }
                }
            }
        }
    }

    fn prompt_input(&mut self) -> io::Result<Option<String>> {
        write!(self.output, "\nEnter column: ")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }

    fn announce(&mut self, state: &GameState) -> io::Result<()> {
        let message = match state.outcome() {
            Some(GameOutcome::Winner { seat, .. }) => {
                format!("=====> {} is the winner!", state.player(seat).name())
            }
            Some(GameOutcome::Draw) => "=====> It's a draw!".to_string(),
            None => return Ok(()),
        };

        writeln!(self.output, "{BANNER}")?;
        if self.style.color {
            writeln!(self.output, "\n{}", message.green())?;
        } else {
            writeln!(self.output, "\n{message}")?;
        }
        writeln!(self.output, "\n{BANNER}")?;

        let winning = state.winning_line();
        self.print_board(state, winning.as_ref())
    }

    fn print_board(&mut self, state: &GameState, winning: Option<&WinLine>) -> io::Result<()> {
        let last_move = if winning.is_some() { None } else { state.last_move() };
        let text = render_board(state.board(), last_move, winning, self.style);
        write!(self.output, "{text}")
    }

    pub fn into_output(self) -> W {
        self.output
    }
}
