//! Command-line interface for strictly_quadtoe.

use clap::{Parser, Subcommand, ValueEnum};
use strictly_quadtoe::{BoardPolicy, EvaluatorConfig, WinRule};

/// Strictly Quadtoe - 4x4 tic-tac-toe outcome evaluator
#[derive(Parser, Debug)]
#[command(name = "strictly_quadtoe")]
#[command(about = "Decide the outcome of a 4x4 tic-tac-toe board", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Evaluate a 16-character board string
    Evaluate {
        /// Board, top-left to bottom-right (0 = empty, 1/2 = players)
        board: String,

        /// Path to a TOML evaluator config
        #[arg(short, long)]
        config: Option<std::path::PathBuf>,

        /// Reject malformed boards instead of normalizing them
        #[arg(long)]
        strict: bool,

        /// Override the win rule from the config
        #[arg(long, value_enum)]
        rule: Option<RuleArg>,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the twenty winning patterns
    Masks,
}

/// Win rule as accepted on the command line.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleArg {
    /// Player's cells must equal a pattern
    Exact,
    /// Player's cells must include a pattern
    Contains,
}

impl From<RuleArg> for WinRule {
    fn from(arg: RuleArg) -> Self {
        match arg {
            RuleArg::Exact => WinRule::Exact,
            RuleArg::Contains => WinRule::Contains,
        }
    }
}

/// Applies command-line overrides on top of a loaded config.
///
/// `--strict` only ever tightens the policy; `--rule` replaces the win rule.
pub fn apply_overrides(
    config: EvaluatorConfig,
    strict: bool,
    rule: Option<RuleArg>,
) -> EvaluatorConfig {
    let config = if strict {
        config.with_policy(BoardPolicy::Strict)
    } else {
        config
    };
    match rule {
        Some(rule) => config.with_win_rule(rule.into()),
        None => config,
    }
}
