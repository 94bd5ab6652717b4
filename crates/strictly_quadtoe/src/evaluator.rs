//! Board evaluator with a memoized winner.
//!
//! An [`Evaluator`] answers the three outcome queries for one board
//! snapshot. The first winner found is cached for the lifetime of the
//! evaluator and never recomputed. Draws are not cached.

use crate::board::{Board, BoardPolicy};
use crate::config::EvaluatorConfig;
use crate::error::BoardError;
use crate::rules::{self, WinKind, WinRule};
use crate::types::{GameStatus, Player};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::cell::OnceCell;
use tracing::{debug, instrument};

/// Evaluates a single board snapshot.
///
/// The winner cache is a [`OnceCell`], so an evaluator can move between
/// threads but cannot be shared by them.
#[derive(Debug, Clone)]
pub struct Evaluator {
    board: Board,
    rule: WinRule,
    winner: OnceCell<Player>,
}

impl Evaluator {
    /// Creates an evaluator from an optional board string.
    ///
    /// Missing or wrong-length input yields an empty board. Symbols other
    /// than `0`, `1` and `2` are kept and never match a player.
    #[instrument]
    pub fn new(board: Option<&str>) -> Self {
        Self::from_board(board.map(Board::lenient).unwrap_or_default())
    }

    /// Creates an evaluator for an already parsed board.
    pub fn from_board(board: Board) -> Self {
        Self {
            board,
            rule: WinRule::default(),
            winner: OnceCell::new(),
        }
    }

    /// Creates an evaluator, rejecting malformed board strings.
    ///
    /// # Errors
    ///
    /// Returns a [`BoardError`] if the input is not exactly 16 symbols
    /// drawn from `0`, `1` and `2`.
    #[instrument]
    pub fn strict(board: &str) -> Result<Self, BoardError> {
        Ok(Self::from_board(Board::parse(board, BoardPolicy::Strict)?))
    }

    /// Creates an evaluator using the policy and win rule from `config`.
    ///
    /// # Errors
    ///
    /// Returns a [`BoardError`] only when the config selects
    /// [`BoardPolicy::Strict`] and the board is malformed.
    #[instrument(skip(config), fields(policy = ?config.policy(), rule = ?config.win_rule()))]
    pub fn with_config(board: &str, config: &EvaluatorConfig) -> Result<Self, BoardError> {
        let board = Board::parse(board, *config.policy())?;
        Ok(Self::from_board(board).with_rule(*config.win_rule()))
    }

    /// Replaces the win rule, discarding any cached winner.
    pub fn with_rule(self, rule: WinRule) -> Self {
        Self {
            board: self.board,
            rule,
            winner: OnceCell::new(),
        }
    }

    /// Returns the board being evaluated.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the active win rule.
    pub fn rule(&self) -> WinRule {
        self.rule
    }

    /// Returns the cached winner without scanning.
    pub fn memoized_winner(&self) -> Option<Player> {
        self.winner.get().copied()
    }

    /// Determines the winner, if any.
    ///
    /// The board is scanned at most until a winner is found; after that
    /// the cached player is returned.
    #[instrument(skip(self), fields(board = %self.board))]
    pub fn check_winner(&self) -> Option<Player> {
        if let Some(&player) = self.winner.get() {
            debug!(%player, "Winner cached");
            return Some(player);
        }

        let player = rules::check_winner(&self.board, self.rule)?;
        debug!(%player, "Winner found");
        Some(*self.winner.get_or_init(|| player))
    }

    /// Checks if any move can still be made.
    ///
    /// Always false once someone has won, even with empty cells left.
    #[instrument(skip(self), fields(board = %self.board))]
    pub fn any_moves_left(&self) -> bool {
        if self.check_winner().is_some() {
            return false;
        }
        self.board.has_empty()
    }

    /// Checks if the game has ended by a win or a full board.
    #[instrument(skip(self), fields(board = %self.board))]
    pub fn is_game_over(&self) -> bool {
        if self.check_winner().is_some() {
            return true;
        }
        !self.any_moves_left()
    }

    /// Returns the current game status.
    pub fn status(&self) -> GameStatus {
        match self.check_winner() {
            Some(player) => GameStatus::Won(player),
            None if self.any_moves_left() => GameStatus::InProgress,
            None => GameStatus::Draw,
        }
    }

    /// Summarizes every query in one report.
    #[instrument(skip(self), fields(board = %self.board))]
    pub fn evaluate(&self) -> Evaluation {
        let winner = self.check_winner();
        let pattern = winner
            .and_then(|_| rules::winning_pattern(&self.board, self.rule))
            .map(|(_, mask)| mask.kind);

        Evaluation {
            board: self.board,
            rule: self.rule,
            winner,
            pattern,
            any_moves_left: self.any_moves_left(),
            is_game_over: self.is_game_over(),
            status: self.status(),
            empty_cells: self.board.empty_count(),
        }
    }
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new(None)
    }
}

/// Outcome report for one board.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Evaluation {
    /// The evaluated board.
    board: Board,
    /// Win rule in effect.
    rule: WinRule,
    /// Winning player, if any.
    winner: Option<Player>,
    /// Pattern the winner completed.
    pattern: Option<WinKind>,
    /// Whether a move can still be made.
    any_moves_left: bool,
    /// Whether the game has ended.
    is_game_over: bool,
    /// Overall status.
    status: GameStatus,
    /// Number of empty cells.
    empty_cells: usize,
}
