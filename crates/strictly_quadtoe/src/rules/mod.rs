//! Game rules for 4x4 tic-tac-toe.
//!
//! This module contains pure functions for evaluating a board. Rules are
//! separated from the evaluator so they can be used without memoization.

pub mod draw;
pub mod masks;
pub mod win;

pub use draw::{is_draw, is_full};
pub use masks::{WINNING_MASKS, WinKind, WinRule, WinningMask, find_match};
pub use win::{check_winner, winning_pattern};
