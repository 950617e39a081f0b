//! Two-player five-in-a-row in the terminal.
//!
//! - [`games::gomoku`] — board, win detection, and the turn state machine
//! - [`core`] — the `Game` / `GameRenderer` seams and the event loop
//! - [`cli`] — command line, logging, and the end-of-game report

pub mod cli;
pub mod core;
pub mod games;

// Re-export for convenience
pub use crate::core::game::Game;
pub use crate::core::renderer::GameRenderer;
