//! Renderer trait - keeps drawing out of the game state machine
use ratatui::Frame;

/// Draws a game's current state. Renderers only read the game.
pub trait GameRenderer<G> {
    fn render(&self, game: &G, frame: &mut Frame);
}
