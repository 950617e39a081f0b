//! Terminal session that hands the screen back no matter how the game ends
use ratatui::DefaultTerminal;

pub struct TerminalSession {
    pub terminal: DefaultTerminal,
}

impl TerminalSession {
    /// Enter raw mode and the alternate screen
    pub fn new() -> Self {
        // ratatui also installs a panic hook that restores the terminal
        Self {
            terminal: ratatui::init(),
        }
    }
}

impl Default for TerminalSession {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        ratatui::restore();
    }
}
