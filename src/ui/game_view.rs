use crate::game::{column_letter, Cell, Coord, GameState, Seat, COLS, ROWS};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(
    frame: &mut Frame,
    game_state: &GameState,
    selected_column: usize,
    message: &Option<String>,
    show_key: bool,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(11),   // Board
            Constraint::Length(3), // Message
            Constraint::Length(3), // Controls
        ])
        .split(frame.area());

    render_header(frame, game_state, chunks[0]);
    render_board(frame, game_state, selected_column, show_key, chunks[1]);
    render_message(frame, message, chunks[2]);
    render_controls(frame, chunks[3]);
}

fn seat_color(seat: Seat) -> Color {
    match seat {
        Seat::One => Color::Red,
        Seat::Two => Color::Yellow,
    }
}

fn render_header(frame: &mut Frame, game_state: &GameState, area: Rect) {
    let seat = game_state.current_seat();
    let player = game_state.current_player();

    let status = if game_state.is_terminal() {
        "Game Over".to_string()
    } else {
        format!("Current Player: {} ({})", player.name(), player.token())
    };

    let header = Paragraph::new(status)
        .style(
            Style::default()
                .fg(seat_color(seat))
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Connect Four"));

    frame.render_widget(header, area);
}

fn render_board(
    frame: &mut Frame,
    game_state: &GameState,
    selected_column: usize,
    show_key: bool,
    area: Rect,
) {
    let board = game_state.board();
    let winning = game_state.winning_line();
    let last_move = game_state.last_move();
    let token_color = |token: char| {
        if token == game_state.player(Seat::One).token() {
            seat_color(Seat::One)
        } else {
            seat_color(Seat::Two)
        }
    };
    let key_width = if show_key { 3 * COLS + 1 } else { 0 };

    let mut lines = Vec::new();

    // Column letters with selection indicator
    let mut col_line = vec![Span::raw("   ")]; // Padding (3 chars to match "  ║")
    for col in 0..COLS {
        let label = format!(" {} ", column_letter(col));
        if col == selected_column {
            col_line.push(Span::styled(
                label,
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            ));
        } else {
            col_line.push(Span::raw(label));
        }
    }
    col_line.push(Span::raw(" ".repeat(2 + key_width)));
    lines.push(Line::from(col_line));

    lines.push(Line::from(format!(
        "  ╔{}╗{}",
        "═".repeat(3 * COLS + 1),
        " ".repeat(key_width)
    )));

    for row in 0..ROWS {
        let mut row_spans = vec![Span::raw("  ║")];

        for col in 0..COLS {
            let coord = Coord::new(row, col);
            let (symbol, mut style) = match board.get(row, col) {
                Cell::Empty => (" . ".to_string(), Style::default().fg(Color::DarkGray)),
                Cell::Token(token) => (
                    format!(" {token} "),
                    Style::default().fg(token_color(token)),
                ),
            };
            if winning.is_some_and(|line| line.contains(&coord)) {
                style = style.bg(Color::Green).add_modifier(Modifier::BOLD);
            } else if last_move == Some(coord) {
                style = style.add_modifier(Modifier::REVERSED);
            }
            row_spans.push(Span::styled(symbol, style));
        }

        row_spans.push(Span::raw(" ║"));

        if show_key {
            let ids: Vec<String> = board.key()[row].iter().map(|p| p.to_string()).collect();
            row_spans.push(Span::raw("  "));
            row_spans.push(Span::styled(
                ids.join(" "),
                Style::default().fg(Color::DarkGray),
            ));
        }
        lines.push(Line::from(row_spans));
    }

    lines.push(Line::from(format!(
        "  ╚{}╝{}",
        "═".repeat(3 * COLS + 1),
        " ".repeat(key_width)
    )));

    // Selection indicator
    let mut indicator_line = vec![Span::raw("   ")]; // Align with board (3 chars to match "  ║")
    for col in 0..COLS {
        if col == selected_column {
            indicator_line.push(Span::styled(" ▲ ", Style::default().fg(Color::Cyan)));
        } else {
            indicator_line.push(Span::raw("   "));
        }
    }
    indicator_line.push(Span::raw(" ".repeat(2 + key_width)));
    lines.push(Line::from(indicator_line));

    let board_widget = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(board_widget, area);
}

fn render_message(frame: &mut Frame, message: &Option<String>, area: Rect) {
    let text = message.as_deref().unwrap_or("");
    let msg_widget = Paragraph::new(text)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let line = Line::from("←/→: Move  |  Enter: Drop  |  A-G: Drop in column  |  R: Restart  |  Q: Quit");

    let controls = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Controls"));

    frame.render_widget(controls, area);
}
