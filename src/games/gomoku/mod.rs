//! Gomoku - five in a row on a fixed square grid
pub mod board;
pub mod game;
pub mod input;
pub mod renderer;

pub use board::{
    Axis, Board, BoardError, Mark, PlaceError, Player, Position, Run, BOARD_SIZE, RUN_LENGTH,
};
pub use game::{
    Command, Direction, GameStatus, GameSummary, GomokuGame, Move, Outcome, Placement,
};
pub use renderer::GomokuRenderer;
