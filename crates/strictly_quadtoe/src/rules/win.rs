//! Win detection logic.

use super::masks::{WinRule, WinningMask, find_match};
use crate::board::Board;
use crate::types::Player;
use tracing::{debug, instrument};

/// Finds the winner and the pattern they completed.
///
/// Player one is tested before player two, so a board satisfying both
/// reports player one.
#[instrument(skip(board), fields(board = %board))]
pub fn winning_pattern(board: &Board, rule: WinRule) -> Option<(Player, &'static WinningMask)> {
    let (one, two) = board.occupancy();
    debug!(one, two, "Scanned occupancy");

    if let Some(mask) = find_match(one, rule) {
        return Some((Player::One, mask));
    }
    find_match(two, rule).map(|mask| (Player::Two, mask))
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` if the player's cells satisfy a winning pattern
/// under `rule`, `None` otherwise.
pub fn check_winner(board: &Board, rule: WinRule) -> Option<Player> {
    winning_pattern(board, rule).map(|(player, _)| player)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::masks::WinKind;

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(check_winner(&Board::new(), WinRule::Exact), None);
    }

    #[test]
    fn test_winner_top_row() {
        let board = Board::lenient("2222000000000000");
        let (player, mask) = winning_pattern(&board, WinRule::Exact).unwrap();
        assert_eq!(player, Player::Two);
        assert_eq!(mask.kind, WinKind::Row(0));
    }

    #[test]
    fn test_winner_corners() {
        let board = Board::lenient("1021000000001221");
        let (player, mask) = winning_pattern(&board, WinRule::Exact).unwrap();
        assert_eq!(player, Player::One);
        assert_eq!(mask.kind, WinKind::Corners);
    }

    #[test]
    fn test_extra_cell_depends_on_rule() {
        // Left column plus cell 1.
        let board = Board::lenient("1100100010001000");
        assert_eq!(check_winner(&board, WinRule::Exact), None);
        assert_eq!(check_winner(&board, WinRule::Contains), Some(Player::One));
    }

    #[test]
    fn test_player_one_checked_first() {
        // Both players hold exactly one pattern: one the top row, two the bottom row.
        let board = Board::lenient("1111000000002222");
        assert_eq!(check_winner(&board, WinRule::Exact), Some(Player::One));
    }

    #[test]
    fn test_foreign_symbols_do_not_count() {
        let board = Board::lenient("111x000000000000");
        assert_eq!(check_winner(&board, WinRule::Contains), None);
    }
}
