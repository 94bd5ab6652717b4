//! Draw detection logic.

use super::masks::WinRule;
use super::win::check_winner;
use crate::board::Board;
use tracing::instrument;

/// Checks if the board has no empty cells.
///
/// Foreign symbols fill a cell just like a player's mark.
#[instrument(skip(board), fields(board = %board))]
pub fn is_full(board: &Board) -> bool {
    !board.has_empty()
}

/// Checks if the board is full with no winner.
#[instrument(skip(board), fields(board = %board))]
pub fn is_draw(board: &Board, rule: WinRule) -> bool {
    is_full(board) && check_winner(board, rule).is_none()
}
