//! The 4x4 board and its string form.
//!
//! Boards are read top-left to bottom-right, row-major, one symbol per cell:
//! `0` for empty, `1` and `2` for the players. The string
//! `"0110210022000010"` is the grid
//!
//! ```text
//! 0 1 1 0
//! 2 1 0 0
//! 2 2 0 0
//! 0 0 1 0
//! ```

use crate::error::{BoardError, BoardErrorKind};
use crate::types::{Cell, Player};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::{debug, instrument, warn};

/// Cells along one side of the board.
pub const SIDE: usize = 4;

/// Total number of cells on the board.
pub const CELL_COUNT: usize = SIDE * SIDE;

/// How malformed board strings are handled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BoardPolicy {
    /// Wrong-length input becomes an empty board; unknown symbols are kept
    /// as inert cells.
    #[default]
    Lenient,
    /// Wrong-length input and unknown symbols are rejected.
    Strict,
}

/// 4x4 tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Board {
    /// Cells in row-major order (0-15).
    cells: [Cell; CELL_COUNT],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; CELL_COUNT],
        }
    }

    /// Parses a board string under the given policy.
    ///
    /// # Errors
    ///
    /// Under [`BoardPolicy::Strict`], returns [`BoardErrorKind::InvalidLength`]
    /// unless the input has exactly 16 characters, and
    /// [`BoardErrorKind::InvalidCell`] for the first symbol outside `0`/`1`/`2`.
    /// [`BoardPolicy::Lenient`] never fails.
    #[instrument(fields(len = input.chars().count()))]
    pub fn parse(input: &str, policy: BoardPolicy) -> Result<Self, BoardError> {
        let found = input.chars().count();
        if found != CELL_COUNT {
            return match policy {
                BoardPolicy::Lenient => {
                    warn!(found, "Board has wrong length, using empty board");
                    Ok(Self::new())
                }
                BoardPolicy::Strict => Err(BoardError::new(BoardErrorKind::InvalidLength { found })),
            };
        }

        let mut cells = [Cell::Empty; CELL_COUNT];
        for (index, symbol) in input.chars().enumerate() {
            let cell = Cell::from_symbol(symbol);
            if policy == BoardPolicy::Strict && matches!(cell, Cell::Foreign(_)) {
                return Err(BoardError::new(BoardErrorKind::InvalidCell { index, symbol }));
            }
            cells[index] = cell;
        }

        debug!("Board parsed");
        Ok(Self { cells })
    }

    /// Parses a board, substituting an empty board for wrong-length input.
    pub fn lenient(input: &str) -> Self {
        // Lenient parsing has no failure path.
        Self::parse(input, BoardPolicy::Lenient).unwrap_or_default()
    }

    /// Gets the cell at the given index (0-15).
    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// Bit for a cell index: index 0 is the most significant of the 16 bits.
    ///
    /// # Panics
    ///
    /// Panics if `index` is 16 or more.
    pub const fn bit(index: usize) -> u16 {
        assert!(index < CELL_COUNT, "cell index out of range");
        1 << (CELL_COUNT - 1 - index)
    }

    /// Occupancy masks for both players, built in one pass.
    ///
    /// Returns `(player_one, player_two)`. Empty and foreign cells set no bits.
    pub fn occupancy(&self) -> (u16, u16) {
        let mut one = 0u16;
        let mut two = 0u16;
        for (index, cell) in self.cells.iter().enumerate() {
            match cell.owner() {
                Some(Player::One) => one |= Self::bit(index),
                Some(Player::Two) => two |= Self::bit(index),
                None => {}
            }
        }
        (one, two)
    }

    /// Occupancy mask for a single player.
    pub fn player_mask(&self, player: Player) -> u16 {
        let (one, two) = self.occupancy();
        match player {
            Player::One => one,
            Player::Two => two,
        }
    }

    /// Number of empty cells.
    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_empty()).count()
    }

    /// Checks if at least one cell is empty.
    pub fn has_empty(&self) -> bool {
        self.cells.iter().any(|c| c.is_empty())
    }

    /// Formats the board as a 4x4 grid, one row per line.
    pub fn pretty(&self) -> String {
        self.cells
            .chunks(SIDE)
            .map(|row| {
                row.iter()
                    .map(|c| c.symbol().to_string())
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for cell in &self.cells {
            write!(f, "{}", cell.symbol())?;
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s, BoardPolicy::Strict)
    }
}

impl From<&str> for Board {
    fn from(s: &str) -> Self {
        Self::lenient(s)
    }
}

impl From<String> for Board {
    fn from(s: String) -> Self {
        Self::lenient(&s)
    }
}

impl From<Board> for String {
    fn from(board: Board) -> Self {
        board.to_string()
    }
}
