//! Strictly Quadtoe - outcome evaluation for 4x4 tic-tac-toe
//!
//! A player wins by holding a full row, column or diagonal, any 2x2 box,
//! or all four corners. Boards are 16-character strings read top-left to
//! bottom-right, with `0` for empty and `1`/`2` for the players.
//!
//! # Example
//!
//! ```
//! use strictly_quadtoe::{Evaluator, Player};
//!
//! let game = Evaluator::new(Some("1000100010001000"));
//! assert_eq!(game.check_winner(), Some(Player::One));
//! assert!(!game.any_moves_left());
//! assert!(game.is_game_over());
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod board;
mod config;
mod error;
mod evaluator;
mod rules;
mod types;

// Crate-level exports - Board
pub use board::{Board, BoardPolicy, CELL_COUNT, SIDE};

// Crate-level exports - Configuration
pub use config::EvaluatorConfig;

// Crate-level exports - Errors
pub use error::{BoardError, BoardErrorKind, ConfigError};

// Crate-level exports - Evaluation
pub use evaluator::{Evaluation, Evaluator};

// Crate-level exports - Rules
pub use rules::{
    WINNING_MASKS, WinKind, WinRule, WinningMask, check_winner, find_match, is_draw, is_full,
    winning_pattern,
};

// Crate-level exports - Domain types
pub use types::{Cell, GameStatus, Player};
