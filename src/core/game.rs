//! Core game interface shared by the engine and every game
use std::fmt::Debug;

use crossterm::event::KeyEvent;

/// Main game trait - a state machine driven by commands
///
/// The engine owns the game value and is its only writer: every key press is
/// translated into at most one command, which runs to completion before the
/// next event is read.
pub trait Game {
    /// Commands the game accepts from the input layer
    type Command: Debug;

    /// Payload of the terminal state
    type Outcome: Debug;

    const NAME: &'static str;

    /// Map a key press to a command, or `None` for unbound keys
    fn handle_key(&self, key: KeyEvent) -> Option<Self::Command>;

    fn apply(&mut self, command: Self::Command);

    /// `Some` once the game has reached its terminal state
    fn outcome(&self) -> Option<Self::Outcome>;

    /// Force the terminal state, e.g. on an interrupt signal
    fn quit(&mut self);

    /// Keep the final position on screen until the next key press
    fn linger_on_finish(&self) -> bool {
        false
    }
}
