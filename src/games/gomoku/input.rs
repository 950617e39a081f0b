//! Keyboard bindings for Gomoku - the only place key codes are interpreted
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::game::{Command, Direction};

/// Keys and what they do, in the order shown to the player.
pub const KEY_BINDINGS: &[(&str, &str)] = &[
    ("k / ↑", "move up"),
    ("j / ↓", "move down"),
    ("h / ←", "move left"),
    ("l / →", "move right"),
    ("z / Enter / Space", "place a stone"),
    ("q / Esc / Ctrl+C", "quit"),
];

/// Translate a key press into a game command
pub fn command_for(key: KeyEvent) -> Option<Command> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(Command::Quit),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Char('k') | KeyCode::Up => Some(Command::Navigate(Direction::Up)),
        KeyCode::Char('j') | KeyCode::Down => Some(Command::Navigate(Direction::Down)),
        KeyCode::Char('h') | KeyCode::Left => Some(Command::Navigate(Direction::Left)),
        KeyCode::Char('l') | KeyCode::Right => Some(Command::Navigate(Direction::Right)),
        KeyCode::Char('z') | KeyCode::Enter | KeyCode::Char(' ') => Some(Command::PlaceAtCursor),
        KeyCode::Char('q') | KeyCode::Esc => Some(Command::Quit),
        _ => None,
    }
}
