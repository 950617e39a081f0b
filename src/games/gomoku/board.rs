use std::fmt;

use serde::Serialize;
use thiserror::Error;

/// Side length of the board the game is played on.
pub const BOARD_SIZE: usize = 10;

/// Number of identical marks in a line that wins the game.
pub const RUN_LENGTH: usize = 5;

const REACH: isize = (RUN_LENGTH / 2) as isize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Player {
    #[serde(rename = "O")]
    A,
    #[serde(rename = "X")]
    B,
}

impl Player {
    /// Get the other player
    pub fn other(self) -> Player {
        match self {
            Player::A => Player::B,
            Player::B => Player::A,
        }
    }

    /// Symbol drawn on the board for this player's stones
    pub fn symbol(self) -> char {
        match self {
            Player::A => 'O',
            Player::B => 'X',
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Content of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Mark {
    Empty,
    Occupied(Player),
}

impl Mark {
    pub fn player(self) -> Option<Player> {
        match self {
            Mark::Empty => None,
            Mark::Occupied(player) => Some(player),
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Mark::Empty => '.',
            Mark::Occupied(player) => player.symbol(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Step `steps` cells along `axis`, or `None` when that leaves the grid.
    fn offset(self, axis: Axis, steps: isize, size: usize) -> Option<Position> {
        let (dr, dc) = axis.delta();
        let row = self.row as isize + dr * steps;
        let col = self.col as isize + dc * steps;
        let in_range = |v: isize| v >= 0 && (v as usize) < size;
        (in_range(row) && in_range(col)).then(|| Position::new(row as usize, col as usize))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// The four lines a run can lie on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Axis {
    /// Along a row.
    Horizontal,
    /// Along a column.
    Vertical,
    /// Top-left to bottom-right.
    Diagonal,
    /// Bottom-left to top-right.
    AntiDiagonal,
}

impl Axis {
    pub const ALL: [Axis; 4] = [
        Axis::Horizontal,
        Axis::Vertical,
        Axis::Diagonal,
        Axis::AntiDiagonal,
    ];

    /// (row, col) step for one cell along the axis
    pub fn delta(self) -> (isize, isize) {
        match self {
            Axis::Horizontal => (0, 1),
            Axis::Vertical => (1, 0),
            Axis::Diagonal => (1, 1),
            Axis::AntiDiagonal => (-1, 1),
        }
    }
}

/// Five identical marks in a line, ordered along the axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Run {
    pub player: Player,
    pub axis: Axis,
    pub cells: [Position; RUN_LENGTH],
}

impl Run {
    pub fn contains(&self, pos: Position) -> bool {
        self.cells.contains(&pos)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlaceError {
    #[error("cell ({row}, {col}) is already occupied")]
    CellOccupied { row: usize, col: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("board size {size} is too small, a run needs at least {min} cells")]
    TooSmall { size: usize, min: usize },
}

/// Square grid of marks. The size is fixed once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<Mark>,
}

impl Board {
    /// Create an empty board of the standard size
    pub fn new() -> Self {
        Self::empty(BOARD_SIZE)
    }

    /// Create an empty board with `size` rows and columns
    pub fn with_size(size: usize) -> Result<Self, BoardError> {
        if size < RUN_LENGTH {
            return Err(BoardError::TooSmall {
                size,
                min: RUN_LENGTH,
            });
        }
        Ok(Self::empty(size))
    }

    fn empty(size: usize) -> Self {
        Board {
            size,
            cells: vec![Mark::Empty; size * size],
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    fn index(&self, row: usize, col: usize) -> usize {
        assert!(
            row < self.size && col < self.size,
            "({row}, {col}) is outside a {0}x{0} board",
            self.size
        );
        row * self.size + col
    }

    /// Get the mark at a specific position
    pub fn mark_at(&self, row: usize, col: usize) -> Mark {
        self.cells[self.index(row, col)]
    }

    /// Put `player`'s stone on an empty cell. Occupied cells are left untouched.
    pub fn place(&mut self, row: usize, col: usize, player: Player) -> Result<(), PlaceError> {
        let idx = self.index(row, col);
        if self.cells[idx] != Mark::Empty {
            return Err(PlaceError::CellOccupied { row, col });
        }
        self.cells[idx] = Mark::Occupied(player);
        Ok(())
    }

    /// Whether `(row, col)` is the middle cell of five identical marks on
    /// any axis.
    pub fn has_winning_line_through(&self, row: usize, col: usize) -> bool {
        self.winning_run_through(row, col).is_some()
    }

    /// The run centered on `(row, col)`, if there is one. Windows that would
    /// leave the grid are not considered.
    pub fn winning_run_through(&self, row: usize, col: usize) -> Option<Run> {
        let center = Position::new(row, col);
        Axis::ALL
            .into_iter()
            .find_map(|axis| self.centered_run(center, axis))
    }

    /// A run that includes `(row, col)` anywhere among its five cells.
    ///
    /// Checks the centered window of every cell up to two steps away along
    /// each axis. A placement can only complete runs it belongs to, so this is
    /// all that needs checking after the stone at `(row, col)` was put down.
    pub fn run_completed_by(&self, row: usize, col: usize) -> Option<Run> {
        let placed = Position::new(row, col);
        if self.mark_at(row, col) == Mark::Empty {
            return None;
        }
        Axis::ALL.into_iter().find_map(|axis| {
            (-REACH..=REACH)
                .filter_map(|steps| placed.offset(axis, steps, self.size))
                .find_map(|center| self.centered_run(center, axis))
        })
    }

    /// Scan every stone on the board for a winning run.
    pub fn any_winning_line(&self) -> bool {
        self.positions()
            .any(|pos| self.has_winning_line_through(pos.row, pos.col))
    }

    fn centered_run(&self, center: Position, axis: Axis) -> Option<Run> {
        let player = self.mark_at(center.row, center.col).player()?;
        let mut cells = [center; RUN_LENGTH];
        for (slot, steps) in cells.iter_mut().zip(-REACH..=REACH) {
            let pos = center.offset(axis, steps, self.size)?;
            if self.mark_at(pos.row, pos.col) != Mark::Occupied(player) {
                return None;
            }
            *slot = pos;
        }
        Some(Run {
            player,
            axis,
            cells,
        })
    }

    /// Iterate over every position in row-major order
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.size).flat_map(move |row| (0..self.size).map(move |col| Position::new(row, col)))
    }

    /// Board rows as text, one symbol per cell.
    pub fn rows(&self) -> Vec<String> {
        self.cells
            .chunks(self.size)
            .map(|row| row.iter().map(|mark| mark.symbol()).collect())
            .collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.size) {
            let line: Vec<String> = row.iter().map(|mark| mark.symbol().to_string()).collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}
