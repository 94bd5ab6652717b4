//! Tests for the board evaluator.

use strictly_quadtoe::{
    Board, BoardErrorKind, CELL_COUNT, Evaluator, GameStatus, Player, WINNING_MASKS, WinKind,
    WinRule,
};
use strum::IntoEnumIterator;

/// Board string with `symbol` on every cell set in `bits`.
fn board_from_mask(bits: u16, symbol: char) -> String {
    (0..CELL_COUNT)
        .map(|i| if bits & Board::bit(i) != 0 { symbol } else { '0' })
        .collect()
}

#[test]
fn test_row_win() {
    let game = Evaluator::new(Some("2222000000000000"));
    assert_eq!(game.check_winner(), Some(Player::Two));
}

#[test]
fn test_column_win() {
    let game = Evaluator::new(Some("1000100010001000"));
    assert_eq!(game.check_winner(), Some(Player::One));
}

#[test]
fn test_diagonal_win() {
    let game = Evaluator::new(Some("1000010000100001"));
    assert_eq!(game.check_winner(), Some(Player::One));
}

#[test]
fn test_corner_win() {
    let game = Evaluator::new(Some("1021000000001221"));
    assert_eq!(game.check_winner(), Some(Player::One));
}

#[test]
fn test_box_win() {
    let game = Evaluator::new(Some("2200220000001110"));
    assert_eq!(game.check_winner(), Some(Player::Two));
}

#[test]
fn test_no_winner_game_continues() {
    let game = Evaluator::new(Some("1201201200000000"));
    assert_eq!(game.check_winner(), None);
    assert!(game.any_moves_left());
    assert!(!game.is_game_over());
    assert_eq!(game.status(), GameStatus::InProgress);
}

#[test]
fn test_full_board_draw() {
    let game = Evaluator::new(Some("1212212112121122"));
    assert_eq!(game.check_winner(), None);
    assert!(!game.any_moves_left());
    assert!(game.is_game_over());
    assert_eq!(game.status(), GameStatus::Draw);

    let contains = Evaluator::new(Some("1212212112121122")).with_rule(WinRule::Contains);
    assert_eq!(contains.check_winner(), None);
    assert_eq!(contains.status(), GameStatus::Draw);
}

#[test]
fn test_no_moves_after_win() {
    let game = Evaluator::new(Some("1120110000000000"));
    assert!(!game.any_moves_left());
    assert_eq!(game.status(), GameStatus::Won(Player::One));
}

#[test]
fn test_game_over_on_win() {
    let game = Evaluator::new(Some("1111222000000000"));
    assert!(game.is_game_over());
}

#[test]
fn test_every_pattern_wins_for_both_players() {
    for mask in WINNING_MASKS {
        for player in Player::iter() {
            let board = board_from_mask(mask.bits, player.symbol());
            let game = Evaluator::new(Some(&board));
            assert_eq!(game.check_winner(), Some(player), "{} for {}", mask.kind, player);
            assert!(!game.any_moves_left());
            assert!(game.is_game_over());
        }
    }
}

#[test]
fn test_wrong_length_behaves_as_empty() {
    let empty = Evaluator::new(None);
    for input in ["", "1111", "111111111111111", "22220000000000000", "1111111111111111111111"] {
        let game = Evaluator::new(Some(input));
        assert_eq!(game.board(), empty.board());
        assert_eq!(game.check_winner(), None);
        assert!(game.any_moves_left());
        assert!(!game.is_game_over());
    }
}

#[test]
fn test_foreign_symbols_are_inert() {
    // Top row is three marks and a stray symbol; the rest is filled with it.
    let game = Evaluator::new(Some("111?????????????"));
    assert_eq!(game.check_winner(), None);
    assert!(!game.any_moves_left());
    assert!(game.is_game_over());
}

#[test]
fn test_exact_rule_ignores_win_plus_extra() {
    // Top row for one, plus cell 5.
    let board = "1111010000000000";
    let exact = Evaluator::new(Some(board));
    assert_eq!(exact.check_winner(), None);
    assert!(!exact.is_game_over());

    let contains = Evaluator::new(Some(board)).with_rule(WinRule::Contains);
    assert_eq!(contains.check_winner(), Some(Player::One));
    assert_eq!(contains.evaluate().pattern(), &Some(WinKind::Row(0)));
}

#[test]
fn test_game_over_iff_winner_or_full() {
    let boards = [
        "0000000000000000",
        "1201201200000000",
        "1212212112121122",
        "2222000000000000",
        "1111010000000000",
        "2112121212211221",
    ];
    for board in boards {
        let game = Evaluator::new(Some(board));
        let full = !game.board().has_empty();
        assert_eq!(game.is_game_over(), game.check_winner().is_some() || full, "{}", board);
        if game.check_winner().is_some() {
            assert!(!game.any_moves_left());
        }
    }
}

#[test]
fn test_repeated_queries_are_stable() {
    let game = Evaluator::new(Some("2200220000001110"));
    let first = game.check_winner();
    assert_eq!(game.memoized_winner(), first);
    for _ in 0..3 {
        assert_eq!(game.check_winner(), first);
    }
}

#[test]
fn test_strict_construction() {
    assert!(Evaluator::strict("2222000000000000").is_ok());

    let err = Evaluator::strict("222200000000000").unwrap_err();
    assert_eq!(err.kind, BoardErrorKind::InvalidLength { found: 15 });

    let err = Evaluator::strict("2222000000000003").unwrap_err();
    assert_eq!(
        err.kind,
        BoardErrorKind::InvalidCell {
            index: 15,
            symbol: '3'
        }
    );
}

#[test]
fn test_evaluator_is_send() {
    fn assert_send<T: Send>() {}
    assert_send::<Evaluator>();
}
