pub mod engine;
pub mod game;
pub mod renderer; // Drawing kept apart from game state
pub mod terminal; // Raw mode / alternate screen guard
