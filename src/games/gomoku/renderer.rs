//! Gomoku renderer - turns the controller's queries into ratatui widgets
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::board::{Mark, Player, Position};
use super::game::{GomokuGame, Outcome};
use crate::core::renderer::GameRenderer;

#[derive(Debug, Default)]
pub struct GomokuRenderer;

impl GameRenderer<GomokuGame> for GomokuRenderer {
    fn render(&self, game: &GomokuGame, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),                       // Header
                Constraint::Length(game.size() as u16 + 2), // Board
                Constraint::Length(1),                       // Cursor line
                Constraint::Min(0),
                Constraint::Length(3), // Controls
            ])
            .split(frame.area());

        render_header(frame, game, chunks[0]);
        render_board(frame, game, chunks[1]);
        render_cursor_line(frame, game, chunks[2]);
        render_controls(frame, game, chunks[4]);
    }
}

fn player_color(player: Player) -> Color {
    match player {
        Player::A => Color::Cyan,
        Player::B => Color::Yellow,
    }
}

fn render_header(frame: &mut Frame, game: &GomokuGame, area: Rect) {
    let (text, color) = match game.outcome() {
        None => (
            format!("Turn: {}", game.turn()),
            player_color(game.turn()),
        ),
        Some(Outcome::Won { winner, .. }) => {
            (format!("Game set, winner is {}", winner), Color::Green)
        }
        Some(Outcome::Quit) => ("Game quit".to_string(), Color::DarkGray),
    };

    let header = Paragraph::new(text)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Gomoku"));
    frame.render_widget(header, area);
}

/// One line per board row. The cursor is red, a winning run green.
pub fn board_lines(game: &GomokuGame) -> Vec<Line<'static>> {
    let run = match game.outcome() {
        Some(Outcome::Won { run, .. }) => Some(run),
        _ => None,
    };
    let show_cursor = !game.is_finished();

    (0..game.size())
        .map(|row| {
            let spans: Vec<Span> = (0..game.size())
                .map(|col| {
                    let pos = Position::new(row, col);
                    let mark = game.board().mark_at(row, col);
                    let mut style = match mark {
                        Mark::Empty => Style::default().fg(Color::DarkGray),
                        Mark::Occupied(player) => Style::default().fg(player_color(player)),
                    };
                    if run.is_some_and(|run| run.contains(pos)) {
                        style = style.fg(Color::Green).add_modifier(Modifier::BOLD);
                    }
                    if show_cursor && pos == game.cursor() {
                        style = style.fg(Color::Red).add_modifier(Modifier::REVERSED);
                    }
                    Span::styled(format!("{} ", mark.symbol()), style)
                })
                .collect();
            Line::from(spans)
        })
        .collect()
}

fn render_board(frame: &mut Frame, game: &GomokuGame, area: Rect) {
    let width = (game.size() * 2) as u16 + 2;
    let area = Rect {
        width: width.min(area.width),
        ..area
    };
    let board = Paragraph::new(board_lines(game)).block(Block::default().borders(Borders::ALL));
    frame.render_widget(board, area);
}

fn render_cursor_line(frame: &mut Frame, game: &GomokuGame, area: Rect) {
    let cursor = game.cursor();
    let text = format!("curr: {} at ({}, {})", game.turn(), cursor.row, cursor.col);
    frame.render_widget(Paragraph::new(text), area);
}

fn render_controls(frame: &mut Frame, game: &GomokuGame, area: Rect) {
    // Only a won game stays on screen waiting for a key
    let text = if game.winner().is_some() {
        "Press any key to exit"
    } else {
        "hjkl/arrows: Move  |  z/Enter/Space: Place  |  q/Esc: Quit"
    };
    let controls = Paragraph::new(text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Controls"));
    frame.render_widget(controls, area);
}
