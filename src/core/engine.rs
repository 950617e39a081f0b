use crate::core::game::Game;
use crate::core::renderer::GameRenderer;
use anyhow::{Context, Result};
use crossterm::event::{Event, EventStream, KeyEventKind};
use futures_util::StreamExt;
use ratatui::{backend::Backend, Terminal};
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Default)]
pub struct EngineConfig {
    /// Leave as soon as the game is won instead of showing the final board
    pub exit_on_finish: bool,
}

/// Whether the event loop keeps going after an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

pub struct Engine<G: Game, R: GameRenderer<G>> {
    game: G,
    renderer: R,
    config: EngineConfig,
}

impl<G: Game, R: GameRenderer<G>> Engine<G, R> {
    pub fn new(game: G, renderer: R, config: EngineConfig) -> Self {
        Self {
            game,
            renderer,
            config,
        }
    }

    pub fn game(&self) -> &G {
        &self.game
    }

    /// Drive the game until it exits, then hand it back to the caller.
    pub async fn run<B>(mut self, terminal: &mut Terminal<B>) -> Result<G>
    where
        B: Backend,
        B::Error: Send + Sync + 'static,
    {
        let mut events = EventStream::new();
        info!(game = G::NAME, "engine started");

        loop {
            terminal.draw(|frame| self.renderer.render(&self.game, frame))?;

            tokio::select! {
                maybe_event = events.next() => match maybe_event {
                    Some(Ok(event)) => {
                        if self.handle_event(event) == Flow::Exit {
                            break;
                        }
                    }
                    Some(Err(err)) => return Err(err).context("failed to read terminal event"),
                    None => {
                        warn!("terminal event stream closed");
                        break;
                    }
                },

                signal = tokio::signal::ctrl_c() => {
                    signal.context("failed to listen for interrupt")?;
                    info!("interrupted");
                    self.game.quit();
                    break;
                }
            }
        }

        info!(game = G::NAME, outcome = ?self.game.outcome(), "engine stopped");
        Ok(self.game)
    }

    /// Process one terminal event to completion.
    ///
    /// Non-key events only cause a redraw. Once the game is over, any key
    /// press leaves.
    pub fn handle_event(&mut self, event: Event) -> Flow {
        let Event::Key(key) = event else {
            return Flow::Continue;
        };
        if key.kind != KeyEventKind::Press {
            return Flow::Continue;
        }
        if self.game.outcome().is_some() {
            return Flow::Exit;
        }

        if let Some(command) = self.game.handle_key(key) {
            debug!(?command, "applying command");
            self.game.apply(command);
        }

        match self.game.outcome() {
            Some(outcome) if self.config.exit_on_finish || !self.game.linger_on_finish() => {
                info!(?outcome, "game over");
                Flow::Exit
            }
            _ => Flow::Continue,
        }
    }
}
