//! Plain-text board rendering for the console driver.

use std::fmt::Write;

use crossterm::style::Stylize;

use crate::config::DisplayConfig;
use crate::game::{column_letter, Board, Cell, Coord, WinLine, COLS, ROWS};

/// Gap between the grid and the key.
const KEY_GAP: &str = "      ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderStyle {
    pub color: bool,
    pub show_key: bool,
}

impl Default for RenderStyle {
    fn default() -> Self {
        RenderStyle {
            color: true,
            show_key: true,
        }
    }
}

impl From<&DisplayConfig> for RenderStyle {
    fn from(display: &DisplayConfig) -> Self {
        RenderStyle {
            color: display.color,
            show_key: display.show_key,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Highlight {
    None,
    LastMove,
    Winning,
}

/// Render the grid with the point-id key beside it. Each key row sits next to
/// the grid row it addresses.
pub fn render_board(
    board: &Board,
    last_move: Option<Coord>,
    winning: Option<&WinLine>,
    style: RenderStyle,
) -> String {
    let mut out = String::new();

    let header: String = (0..COLS)
        .map(|col| format!(" {} ", column_letter(col)))
        .collect();
    let _ = writeln!(out, "{}", header.trim_end());

    for row in 0..ROWS {
        let mut line = String::new();
        for col in 0..COLS {
            let coord = Coord::new(row, col);
            let highlight = if winning.is_some_and(|w| w.contains(&coord)) {
                Highlight::Winning
            } else if last_move == Some(coord) {
                Highlight::LastMove
            } else {
                Highlight::None
            };
            line.push_str(&render_cell(board.get(row, col), highlight, style.color));
        }

        if style.show_key {
            line.push_str(KEY_GAP);
            let ids: Vec<String> = board.key()[row].iter().map(|p| p.to_string()).collect();
            line.push_str(&ids.join(" "));
        }
        let _ = writeln!(out, "{}", line.trim_end());
    }

    out
}

fn render_cell(cell: Cell, highlight: Highlight, color: bool) -> String {
    let symbol = cell.symbol();
    match (highlight, color) {
        (Highlight::None, false) => format!(" {symbol} "),
        (Highlight::LastMove, false) => format!("({symbol})"),
        (Highlight::Winning, false) => format!("[{symbol}]"),
        (Highlight::None, true) if cell.is_empty() => format!(" {symbol} ").dark_grey().to_string(),
        (Highlight::None, true) => format!(" {symbol} ").bold().to_string(),
        (Highlight::LastMove, true) => format!(" {symbol} ").black().on_white().to_string(),
        (Highlight::Winning, true) => format!(" {symbol} ").green().bold().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PLAIN: RenderStyle = RenderStyle {
        color: false,
        show_key: true,
    };

    #[test]
    fn test_empty_board_with_key() {
        let text = render_board(&Board::new(), None, None, PLAIN);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), ROWS + 1);
        assert_eq!(lines[0], " A  B  C  D  E  F  G");
        assert_eq!(
            lines[1],
            " .  .  .  .  .  .  .       A1 B1 C1 D1 E1 F1 G1"
        );
        assert!(lines[6].ends_with("A6 B6 C6 D6 E6 F6 G6"));
    }

    #[test]
    fn test_key_can_be_hidden() {
        let style = RenderStyle {
            color: false,
            show_key: false,
        };
        let text = render_board(&Board::new(), None, None, style);
        assert!(!text.contains("A1"));
        assert_eq!(text.lines().nth(1), Some(" .  .  .  .  .  .  ."));
    }

    #[test]
    fn test_last_move_and_winning_highlights() {
        let mut board = Board::new();
        for _ in 0..4 {
            board.insert('X', "B").unwrap();
        }
        let line = board.check_win('X').unwrap();
        let text = render_board(&board, Some(Coord::new(2, 1)), Some(&line), PLAIN);
        let rows: Vec<&str> = text.lines().skip(1).collect();
        assert!(rows[2].starts_with(" . [X]"));
        assert!(rows[5].starts_with(" . [X]"));

        let text = render_board(&board, Some(Coord::new(2, 1)), None, PLAIN);
        let rows: Vec<&str> = text.lines().skip(1).collect();
        assert!(rows[2].starts_with(" . (X)"));
        assert!(rows[3].starts_with(" .  X "));
    }

    #[test]
    fn test_color_output_uses_ansi_styling() {
        let mut board = Board::new();
        board.insert('O', "A").unwrap();
        board.insert('X', "B").unwrap();
        let styled = render_board(&board, Some(Coord::new(5, 0)), None, RenderStyle::default());
        let plain = render_board(&board, Some(Coord::new(5, 0)), None, PLAIN);
        // Placed tokens are bold even when NO_COLOR suppresses colors
        assert!(styled.contains('\u{1b}'));
        assert_ne!(styled, plain);
        assert!(styled.contains('O') && styled.contains('X'));
    }
}
