//! Stateless UI rendering for tic-tac-toe.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use super::app::App;
use super::notifier::{Notice, turn_indicator};
use crate::games::tictactoe::{Orientation, Player, Position, Square, WinningLine};

const CELL_WIDTH: u16 = 11;
const CELL_HEIGHT: u16 = 3;
const BOARD_WIDTH: u16 = CELL_WIDTH * 3 + 2;
const BOARD_HEIGHT: u16 = CELL_HEIGHT * 3 + 2;

/// Renders the whole screen for `app`.
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),            // Title
            Constraint::Length(3),            // Players
            Constraint::Min(BOARD_HEIGHT),    // Board
            Constraint::Length(3),            // Status
        ])
        .split(area);

    let title = Paragraph::new("Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    draw_players(frame, chunks[1], app);
    draw_board(frame, chunks[2], app);

    let status = Paragraph::new(app.status_line())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[3]);

    if let Some(notice) = app.popup() {
        draw_popup(frame, area, notice);
    }
}

fn draw_players(frame: &mut Frame, area: Rect, app: &App) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    for (col, player) in cols.iter().zip([Player::X, Player::O]) {
        let engine = app.engine();
        let active = !engine.status().is_terminal() && engine.turn() == player;
        let border = if active {
            Style::default().fg(mark_color(player)).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let panel = Paragraph::new(turn_indicator(engine, player))
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(border)
                    .title(format!(" {} ({}) ", app.config().name_of(player), player)),
            );
        frame.render_widget(panel, *col);
    }
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App) {
    let board_area = center_rect(area, BOARD_WIDTH, BOARD_HEIGHT);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(CELL_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(CELL_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(CELL_HEIGHT),
        ])
        .split(board_area);

    for row in 0..3 {
        draw_row(frame, rows[row * 2], app, row);
        if row < 2 {
            draw_separator(frame, rows[row * 2 + 1]);
        }
    }
}

fn draw_row(frame: &mut Frame, area: Rect, app: &App, row: usize) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(CELL_WIDTH),
            Constraint::Length(1),
            Constraint::Length(CELL_WIDTH),
            Constraint::Length(1),
            Constraint::Length(CELL_WIDTH),
        ])
        .split(area);

    for col in 0..3 {
        draw_cell(frame, cols[col * 2], app, Position::ALL[row * 3 + col]);
        if col < 2 {
            draw_separator_vertical(frame, cols[col * 2 + 1]);
        }
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, app: &App, pos: Position) {
    let index = pos.to_index();
    let square = app.engine().board().get(index).unwrap_or_default();
    let winning_line = app
        .engine()
        .status()
        .winning_line()
        .filter(|line| line.contains(index));

    let (mark, mut style) = match square {
        Square::Empty if *app.config().show_hints() => (
            (index + 1).to_string(),
            Style::default().fg(Color::DarkGray),
        ),
        Square::Empty => (String::new(), Style::default()),
        Square::Occupied(player) => (
            player.to_string(),
            Style::default()
                .fg(mark_color(player))
                .add_modifier(Modifier::BOLD),
        ),
    };

    if winning_line.is_some() {
        style = style.fg(Color::Green).add_modifier(Modifier::BOLD);
    }
    if pos == app.cursor() && !app.engine().status().is_terminal() {
        style = style.bg(Color::White).fg(Color::Black);
    }

    let lines = match winning_line {
        Some(line) => stroke_lines(&mark, line),
        None => [String::new(), mark, String::new()],
    };
    let text: Vec<Line> = lines
        .into_iter()
        .map(|l| Line::from(Span::styled(l, style)))
        .collect();

    let paragraph = Paragraph::new(text)
        .style(style)
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

/// Three text rows for a cell on the winning line, with the stroke
/// running through the mark in the line's direction.
fn stroke_lines(mark: &str, line: WinningLine) -> [String; 3] {
    match line.orientation() {
        Orientation::Horizontal => [String::new(), format!("━━━ {} ━━━", mark), String::new()],
        Orientation::Vertical => ["┃".to_string(), mark.to_string(), "┃".to_string()],
        Orientation::Diagonal => ["╲    ".to_string(), mark.to_string(), "    ╲".to_string()],
        Orientation::AntiDiagonal => ["    ╱".to_string(), mark.to_string(), "╱    ".to_string()],
    }
}

fn draw_popup(frame: &mut Frame, area: Rect, notice: &Notice) {
    let popup_area = center_rect(area, 44, 7);
    let text = vec![
        Line::from(Span::styled(
            notice.title.as_str(),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        )),
        Line::from(notice.subtitle.as_str()),
        Line::from(""),
        Line::from(Span::styled(
            "[p] play again   [c] close",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    let popup = Paragraph::new(text)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title(" Game over "));
    frame.render_widget(Clear, popup_area);
    frame.render_widget(popup, popup_area);
}

fn mark_color(player: Player) -> Color {
    match player {
        Player::X => Color::Blue,
        Player::O => Color::Red,
    }
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new(vec![Line::from("│"); area.height as usize])
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}
