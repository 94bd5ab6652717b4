//! Core domain types for 4x4 tic-tac-toe.

use serde::{Deserialize, Serialize};

/// Player in the game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumIter,
)]
pub enum Player {
    /// Player one, written as `'1'` on the board.
    #[display("1")]
    #[serde(rename = "1")]
    One,
    /// Player two, written as `'2'` on the board.
    #[display("2")]
    #[serde(rename = "2")]
    Two,
}

impl Player {
    /// Board symbol for this player's mark.
    pub fn symbol(self) -> char {
        match self {
            Player::One => '1',
            Player::Two => '2',
        }
    }
}

/// A cell on the 4x4 board.
///
/// Symbols other than `'0'`, `'1'` and `'2'` are kept as [`Cell::Foreign`].
/// A foreign cell belongs to neither player and does not count as empty.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Unplayed cell (`'0'`).
    #[default]
    Empty,
    /// Cell occupied by a player.
    Marked(Player),
    /// Any other symbol.
    Foreign(char),
}

impl Cell {
    /// Reads a cell from its board symbol.
    pub fn from_symbol(symbol: char) -> Self {
        match symbol {
            '0' => Cell::Empty,
            '1' => Cell::Marked(Player::One),
            '2' => Cell::Marked(Player::Two),
            other => Cell::Foreign(other),
        }
    }

    /// Returns the board symbol for this cell.
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => '0',
            Cell::Marked(player) => player.symbol(),
            Cell::Foreign(c) => c,
        }
    }

    /// Returns the owning player, if any.
    pub fn owner(self) -> Option<Player> {
        match self {
            Cell::Marked(player) => Some(player),
            Cell::Empty | Cell::Foreign(_) => None,
        }
    }

    /// Checks if the cell is unplayed.
    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }
}

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
pub enum GameStatus {
    /// Game is ongoing.
    #[display("in progress")]
    InProgress,
    /// Game ended in a win.
    #[display("won by player {}", _0)]
    Won(Player),
    /// Game ended in a draw.
    #[display("draw")]
    Draw,
}
