//! Stateless UI rendering.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use tictactoe_engine::{Coord, GameEngine};

use crate::app::App;

/// Renders whichever screen the engine reports.
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(11),   // Body
            Constraint::Length(3), // Status
        ])
        .split(area);

    let title = Paragraph::new("Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let engine = app.engine();
    if engine.show_intro() {
        draw_intro(frame, chunks[1]);
    } else {
        let cursor = engine.show_board().then_some(app.cursor());
        draw_board(frame, chunks[1], engine, cursor);
    }

    let status = Paragraph::new(app.status_message())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[2]);
}

fn draw_intro(frame: &mut Frame, area: Rect) {
    let text = vec![
        Line::from("You play X. The computer plays O."),
        Line::from(""),
        Line::from("The computer takes a winning cell when it has one,"),
        Line::from("blocks yours when it can, and otherwise plays at random."),
    ];
    let intro = Paragraph::new(text).alignment(Alignment::Center);
    frame.render_widget(intro, center_rect(area, 60, 4));
}

fn draw_board(frame: &mut Frame, area: Rect, engine: &GameEngine, cursor: Option<Coord>) {
    let board_area = center_rect(area, 40, 11);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    for row in 0..3 {
        draw_row(frame, rows[row * 2], engine, cursor, row);
    }
    draw_separator(frame, rows[1]);
    draw_separator(frame, rows[3]);
}

fn draw_row(frame: &mut Frame, area: Rect, engine: &GameEngine, cursor: Option<Coord>, row: usize) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
        ])
        .split(area);

    for col in 0..3 {
        draw_cell(frame, cols[col * 2], engine, cursor, row, col);
    }
    draw_separator_vertical(frame, cols[1]);
    draw_separator_vertical(frame, cols[3]);
}

fn draw_cell(
    frame: &mut Frame,
    area: Rect,
    engine: &GameEngine,
    cursor: Option<Coord>,
    row: usize,
    col: usize,
) {
    let (symbol, mut style) = if engine.is_player_x_at(row, col) {
        (" X ", Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD))
    } else if engine.is_player_o_at(row, col) {
        (" O ", Style::default().fg(Color::Red).add_modifier(Modifier::BOLD))
    } else {
        ("   ", Style::default().fg(Color::DarkGray))
    };

    if engine.is_winning_cell_at(row, col) {
        style = style.bg(Color::Green).fg(Color::Black);
    } else if cursor.is_some_and(|c| c.row() == row && c.col() == col) {
        style = style.bg(Color::White).fg(Color::Black);
    }

    let paragraph =
        Paragraph::new(Line::from(Span::styled(symbol, style))).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("│").style(Style::default().fg(Color::DarkGray));
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
