//! Strictly Quadtoe - CLI
//!
//! Evaluates 4x4 tic-tac-toe boards from the command line.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command, RuleArg};
use std::path::PathBuf;
use strictly_quadtoe::{Board, Evaluation, Evaluator, EvaluatorConfig, WINNING_MASKS};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Evaluate {
            board,
            config,
            strict,
            rule,
            json,
        } => run_evaluate(&board, config, strict, rule, json),
        Command::Masks => run_masks(),
    }
}

/// Evaluate one board and print the report
#[instrument(skip(config_path))]
fn run_evaluate(
    board: &str,
    config_path: Option<PathBuf>,
    strict: bool,
    rule: Option<RuleArg>,
    json: bool,
) -> Result<()> {
    let config = match config_path {
        Some(path) => EvaluatorConfig::from_file(path)?,
        None => EvaluatorConfig::default(),
    };
    let config = cli::apply_overrides(config, strict, rule);

    let evaluator = Evaluator::with_config(board, &config)?;
    let report = evaluator.evaluate();
    info!(status = %report.status(), "Board evaluated");

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }
    Ok(())
}

/// Print a report as plain text
fn print_report(report: &Evaluation) {
    println!("{}", report.board().pretty());
    println!();
    match (report.winner(), report.pattern()) {
        (Some(player), Some(pattern)) => println!("winner:     {} ({})", player, pattern),
        (Some(player), None) => println!("winner:     {}", player),
        _ => println!("winner:     none"),
    }
    println!("moves left: {}", report.any_moves_left());
    println!("game over:  {}", report.is_game_over());
    println!("status:     {}", report.status());
}

/// Print every winning pattern with its mask and shape
fn run_masks() -> Result<()> {
    for mask in WINNING_MASKS {
        println!("{:<16} {:>5}  {:#06x}", mask.kind.to_string(), mask.bits, mask.bits);
        let picture: String = (0..strictly_quadtoe::CELL_COUNT)
            .map(|i| if mask.bits & Board::bit(i) != 0 { 'X' } else { '0' })
            .collect();
        println!("{}\n", Board::lenient(&picture).pretty());
    }
    Ok(())
}
