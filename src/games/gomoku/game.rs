use std::fmt;

use crossterm::event::KeyEvent;
use serde::Serialize;
use tracing::{debug, info};

use super::board::{Board, PlaceError, Player, Position, Run};
use super::input;
use crate::core::game::Game;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Everything the input layer can ask the game to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Navigate(Direction),
    PlaceAtCursor,
    Quit,
}

/// How a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum Outcome {
    Won { winner: Player, run: Run },
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Playing,
    Finished(Outcome),
}

/// Result of a place command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    Placed,
    Won,
    /// Cell occupied or game already over. Nothing changed.
    Ignored,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Move {
    pub player: Player,
    pub position: Position,
}

/// Turn order, cursor, and win state for one game of five-in-a-row.
#[derive(Debug, Clone)]
pub struct GomokuGame {
    board: Board,
    cursor: Position,
    turn: Player,
    status: GameStatus,
    history: Vec<Move>,
}

impl GomokuGame {
    pub fn new() -> Self {
        Self::with_board(Board::new())
    }

    /// Start a game on the given board. Player A moves first.
    pub fn with_board(board: Board) -> Self {
        Self {
            board,
            cursor: Position::new(0, 0),
            turn: Player::A,
            status: GameStatus::Playing,
            history: Vec::new(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn size(&self) -> usize {
        self.board.size()
    }

    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// The player whose stone goes down on the next placement
    pub fn turn(&self) -> Player {
        self.turn
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_finished(&self) -> bool {
        matches!(self.status, GameStatus::Finished(_))
    }

    pub fn outcome(&self) -> Option<Outcome> {
        match self.status {
            GameStatus::Playing => None,
            GameStatus::Finished(outcome) => Some(outcome),
        }
    }

    pub fn winner(&self) -> Option<Player> {
        match self.status {
            GameStatus::Finished(Outcome::Won { winner, .. }) => Some(winner),
            _ => None,
        }
    }

    pub fn history(&self) -> &[Move] {
        &self.history
    }

    pub fn apply(&mut self, command: Command) {
        match command {
            Command::Navigate(direction) => self.navigate(direction),
            Command::PlaceAtCursor => {
                self.place_at_cursor();
            }
            Command::Quit => self.quit(),
        }
    }

    /// Move the cursor one cell, stopping at the edges.
    pub fn navigate(&mut self, direction: Direction) {
        if self.is_finished() {
            return;
        }
        let last = self.board.size() - 1;
        let Position { row, col } = self.cursor;
        self.cursor = match direction {
            Direction::Up => Position::new(row.saturating_sub(1), col),
            Direction::Down => Position::new((row + 1).min(last), col),
            Direction::Left => Position::new(row, col.saturating_sub(1)),
            Direction::Right => Position::new(row, (col + 1).min(last)),
        };
        debug!(?direction, cursor = %self.cursor, "cursor moved");
    }

    /// Put the current player's stone under the cursor.
    ///
    /// Ends the game when the stone completes a run of five; otherwise the
    /// turn passes to the other player. An occupied cell is ignored.
    pub fn place_at_cursor(&mut self) -> Placement {
        if self.is_finished() {
            return Placement::Ignored;
        }
        let Position { row, col } = self.cursor;
        match self.board.place(row, col, self.turn) {
            Err(PlaceError::CellOccupied { .. }) => {
                debug!(cursor = %self.cursor, "placement on occupied cell ignored");
                return Placement::Ignored;
            }
            Ok(()) => {}
        }

        self.history.push(Move {
            player: self.turn,
            position: self.cursor,
        });
        info!(player = %self.turn, position = %self.cursor, moves = self.history.len(), "stone placed");

        if let Some(run) = self.board.run_completed_by(row, col) {
            info!(winner = %self.turn, axis = ?run.axis, "five in a row");
            self.status = GameStatus::Finished(Outcome::Won {
                winner: self.turn,
                run,
            });
            return Placement::Won;
        }

        self.turn = self.turn.other();
        Placement::Placed
    }

    /// End the game without a winner. A game that is already over keeps its result.
    pub fn quit(&mut self) {
        if self.is_finished() {
            return;
        }
        info!(moves = self.history.len(), "game quit");
        self.status = GameStatus::Finished(Outcome::Quit);
    }

    pub fn summary(&self) -> GameSummary {
        GameSummary {
            outcome: self.outcome(),
            moves: self.history.len(),
            board: self.board.rows(),
        }
    }
}

impl Default for GomokuGame {
    fn default() -> Self {
        Self::new()
    }
}

impl Game for GomokuGame {
    type Command = Command;
    type Outcome = Outcome;

    const NAME: &'static str = "Gomoku";

    fn handle_key(&self, key: KeyEvent) -> Option<Self::Command> {
        input::command_for(key)
    }

    fn apply(&mut self, command: Self::Command) {
        GomokuGame::apply(self, command);
    }

    fn outcome(&self) -> Option<Self::Outcome> {
        GomokuGame::outcome(self)
    }

    fn quit(&mut self) {
        GomokuGame::quit(self);
    }

    fn linger_on_finish(&self) -> bool {
        self.winner().is_some()
    }
}

/// What is reported once the terminal has been restored.
#[derive(Debug, Clone, Serialize)]
pub struct GameSummary {
    /// `None` only if the game was still running.
    pub outcome: Option<Outcome>,
    pub moves: usize,
    pub board: Vec<String>,
}

impl fmt::Display for GameSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.board {
            let cells: Vec<String> = row.chars().map(String::from).collect();
            writeln!(f, "{}", cells.join(" "))?;
        }
        match self.outcome {
            Some(Outcome::Won { winner, .. }) => {
                write!(f, "Game set, winner is {} after {} moves", winner, self.moves)
            }
            Some(Outcome::Quit) => write!(f, "Game quit after {} moves", self.moves),
            None => write!(f, "Game in progress after {} moves", self.moves),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::gomoku::board::{Axis, Mark};

    fn place_at(game: &mut GomokuGame, row: usize, col: usize) -> Placement {
        game.cursor = Position::new(row, col);
        game.place_at_cursor()
    }

    #[test]
    fn test_initial_state() {
        let game = GomokuGame::new();
        assert_eq!(game.cursor(), Position::new(0, 0));
        assert_eq!(game.turn(), Player::A);
        assert_eq!(game.status(), GameStatus::Playing);
        assert_eq!(game.size(), 10);
        assert!(game.history().is_empty());
        assert!(!game.is_finished());
    }

    #[test]
    fn test_navigate_moves_one_step() {
        let mut game = GomokuGame::new();
        game.navigate(Direction::Down);
        game.navigate(Direction::Right);
        game.navigate(Direction::Right);
        assert_eq!(game.cursor(), Position::new(1, 2));
        game.navigate(Direction::Up);
        game.navigate(Direction::Left);
        assert_eq!(game.cursor(), Position::new(0, 1));
        assert_eq!(game.turn(), Player::A);
    }

    #[test]
    fn test_navigate_clamps_at_edges() {
        let mut game = GomokuGame::new();
        for _ in 0..3 {
            game.navigate(Direction::Up);
            game.navigate(Direction::Left);
        }
        assert_eq!(game.cursor(), Position::new(0, 0));
        for _ in 0..25 {
            game.navigate(Direction::Down);
            game.navigate(Direction::Right);
        }
        assert_eq!(game.cursor(), Position::new(9, 9));
    }

    #[test]
    fn test_place_alternates_turn() {
        let mut game = GomokuGame::new();
        assert_eq!(game.place_at_cursor(), Placement::Placed);
        assert_eq!(game.board().mark_at(0, 0), Mark::Occupied(Player::A));
        assert_eq!(game.turn(), Player::B);

        game.navigate(Direction::Right);
        assert_eq!(game.place_at_cursor(), Placement::Placed);
        assert_eq!(game.board().mark_at(0, 1), Mark::Occupied(Player::B));
        assert_eq!(game.turn(), Player::A);
        assert_eq!(game.history().len(), 2);
    }

    #[test]
    fn test_place_on_occupied_cell_changes_nothing() {
        let mut game = GomokuGame::new();
        game.place_at_cursor();
        let board = game.board().clone();

        assert_eq!(game.place_at_cursor(), Placement::Ignored);
        assert_eq!(game.board(), &board);
        assert_eq!(game.turn(), Player::B);
        assert_eq!(game.cursor(), Position::new(0, 0));
        assert_eq!(game.status(), GameStatus::Playing);
        assert_eq!(game.history().len(), 1);
    }

    #[test]
    fn test_win_keeps_turn_and_finishes() {
        let mut game = GomokuGame::new();
        for col in 0..4 {
            assert_eq!(place_at(&mut game, 0, col), Placement::Placed);
            assert_eq!(place_at(&mut game, 5, col), Placement::Placed);
        }
        assert_eq!(place_at(&mut game, 0, 4), Placement::Won);
        assert_eq!(game.turn(), Player::A);
        assert_eq!(game.winner(), Some(Player::A));
        match game.outcome() {
            Some(Outcome::Won { run, .. }) => {
                assert_eq!(run.axis, Axis::Horizontal);
                assert!(run.contains(Position::new(0, 4)));
            }
            other => panic!("expected a win, got {other:?}"),
        }
    }

    #[test]
    fn test_finished_game_ignores_commands() {
        let mut game = GomokuGame::new();
        game.quit();
        let cursor = game.cursor();

        game.apply(Command::Navigate(Direction::Down));
        assert_eq!(game.cursor(), cursor);
        assert_eq!(game.place_at_cursor(), Placement::Ignored);
        assert_eq!(game.board().mark_at(0, 0), Mark::Empty);
        assert_eq!(game.turn(), Player::A);
    }

    #[test]
    fn test_quit_records_no_winner() {
        let mut game = GomokuGame::new();
        game.apply(Command::PlaceAtCursor);
        game.apply(Command::Quit);
        assert_eq!(game.outcome(), Some(Outcome::Quit));
        assert_eq!(game.winner(), None);
    }

    #[test]
    fn test_quit_after_win_keeps_winner() {
        let mut game = GomokuGame::new();
        for row in 2..6 {
            place_at(&mut game, row, 3);
            place_at(&mut game, row, 8);
        }
        assert_eq!(place_at(&mut game, 6, 3), Placement::Won);
        game.quit();
        assert_eq!(game.winner(), Some(Player::A));
    }

    #[test]
    fn test_summary_text_and_json() {
        let mut game = GomokuGame::with_board(Board::with_size(5).unwrap());
        game.apply(Command::PlaceAtCursor);
        game.apply(Command::Quit);

        let summary = game.summary();
        assert_eq!(summary.moves, 1);
        let text = summary.to_string();
        assert!(text.starts_with("O . . . ."));
        assert!(text.ends_with("Game quit after 1 moves"));

        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["outcome"]["result"], "quit");
        assert_eq!(json["board"][0], "O....");
    }

    #[test]
    fn test_summary_json_for_win() {
        let mut game = GomokuGame::new();
        for i in 0..4 {
            place_at(&mut game, i, i);
            place_at(&mut game, i, 9);
        }
        place_at(&mut game, 4, 4);

        let json = serde_json::to_value(game.summary()).unwrap();
        assert_eq!(json["outcome"]["result"], "won");
        // Same symbol as the stones in the board rows
        assert_eq!(json["outcome"]["winner"], "O");
        assert_eq!(json["board"][0], "O........X");
        assert_eq!(json["outcome"]["run"]["axis"], "Diagonal");
        assert_eq!(json["moves"], 9);
        assert!(game.summary().to_string().ends_with("Game set, winner is O after 9 moves"));
    }

    #[test]
    fn test_linger_only_after_win() {
        let mut game = GomokuGame::new();
        assert!(!game.linger_on_finish());
        game.quit();
        assert!(!game.linger_on_finish());
    }
}
