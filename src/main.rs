//! crab-combat CLI - play Combat games from input files.

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use log::{info, LevelFilter};
use serde::Serialize;
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use crab_combat::games::combat;
use crab_combat::{format_decks, parse_decks, EndReason, Evaluation, GameConfig, Variant};

/// Combat card game engine
#[derive(Parser, Debug)]
#[command(name = "crab-combat")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Play a game from an input file and print the winner's score
    Play {
        /// Input file with both players' decks
        #[arg(required = true)]
        input: PathBuf,

        /// Rule set
        #[arg(long, value_enum, default_value = "recursive")]
        variant: VariantArg,

        /// Sub-game evaluation strategy
        #[arg(long, value_enum, default_value = "call-stack")]
        evaluation: EvaluationArg,

        /// Print a JSON summary instead of the bare score
        #[arg(long)]
        json: bool,
    },

    /// Print a randomly dealt input file
    Deal {
        /// Number of cards to deal (numbered 1..=N)
        #[arg(short, long, default_value = "50")]
        cards: u32,

        /// Random seed
        #[arg(short, long, default_value = "0")]
        seed: u64,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum VariantArg {
    /// Higher card always wins
    Classic,
    /// Recursive Combat
    Recursive,
}

impl From<VariantArg> for Variant {
    fn from(arg: VariantArg) -> Self {
        match arg {
            VariantArg::Classic => Variant::Classic,
            VariantArg::Recursive => Variant::Recursive,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum EvaluationArg {
    /// Nested calls
    CallStack,
    /// Explicit heap-allocated stack
    WorkStack,
}

impl From<EvaluationArg> for Evaluation {
    fn from(arg: EvaluationArg) -> Self {
        match arg {
            EvaluationArg::CallStack => Evaluation::CallStack,
            EvaluationArg::WorkStack => Evaluation::WorkStack,
        }
    }
}

/// JSON output for `play --json`.
#[derive(Serialize)]
struct Summary {
    variant: Variant,
    winner: u32,
    score: u64,
    reason: EndReason,
    rounds: u64,
    sub_games: u64,
}

fn play(
    input: PathBuf,
    config: GameConfig,
    json: bool,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let text = std::fs::read_to_string(&input)
        .with_context(|| format!("reading {}", input.display()))?;
    let decks = parse_decks(&text).with_context(|| format!("parsing {}", input.display()))?;

    info!("playing {} from {}", config.variant.name(), input.display());
    let result = combat::play(config, decks)?;

    if json {
        let summary = Summary {
            variant: config.variant,
            winner: result.winner.number(),
            score: result.score(),
            reason: result.reason,
            rounds: result.rounds,
            sub_games: result.sub_games,
        };
        writeln!(out, "{}", serde_json::to_string_pretty(&summary)?)?;
    } else {
        writeln!(out, "{}", result.score())?;
    }
    Ok(())
}

fn deal(cards: u32, seed: u64, out: &mut impl Write) -> anyhow::Result<()> {
    anyhow::ensure!(cards >= 2, "--cards must be at least 2");
    write!(out, "{}", format_decks(&combat::deal(cards, seed)))?;
    Ok(())
}

fn run(command: Commands, out: &mut impl Write) -> anyhow::Result<()> {
    match command {
        Commands::Play {
            input,
            variant,
            evaluation,
            json,
        } => {
            let config = GameConfig::new()
                .with_variant(variant.into())
                .with_evaluation(evaluation.into());
            play(input, config, json, out)
        }
        Commands::Deal { cards, seed } => deal(cards, seed, out),
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    let level = match args.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::builder()
        .format_target(false)
        .filter_level(level)
        .parse_default_env()
        .init();

    match run(args.command, &mut std::io::stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn run_args(args: &[&str]) -> anyhow::Result<String> {
        let args = Args::try_parse_from(["crab-combat"].iter().chain(args))?;
        let mut out = Vec::new();
        run(args.command, &mut out)?;
        Ok(String::from_utf8(out)?)
    }

    #[test]
    fn test_deal_then_play() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("decks.txt");

        let dealt = run_args(&["deal", "--cards", "20", "--seed", "9"]).unwrap();
        std::fs::write(&path, &dealt).unwrap();
        let decks = parse_decks(&dealt).unwrap();

        for variant in ["classic", "recursive"] {
            let printed =
                run_args(&["play", path.to_str().unwrap(), "--variant", variant]).unwrap();

            let config = GameConfig::new().with_variant(if variant == "classic" {
                Variant::Classic
            } else {
                Variant::Recursive
            });
            let expected = combat::play(config, decks.clone()).unwrap().score();
            assert_eq!(printed, format!("{expected}\n"));
        }
    }

    #[test]
    fn test_play_sample_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("sample.txt");
        let sample = "Player 1:\n9\n2\n6\n3\n1\n\nPlayer 2:\n5\n8\n4\n7\n10\n";
        std::fs::write(&path, sample).unwrap();

        let printed = run_args(&[
            "play",
            path.to_str().unwrap(),
            "--evaluation",
            "work-stack",
            "--json",
        ])
        .unwrap();
        let summary: serde_json::Value = serde_json::from_str(&printed).unwrap();

        assert_eq!(summary["variant"], "recursive");
        assert_eq!(summary["winner"], 2);
        assert_eq!(summary["score"], 291);
        assert_eq!(summary["reason"], "deck-exhausted");
        assert_eq!(summary["rounds"], 17);
        assert_eq!(summary["sub_games"], 4);
    }

    #[test]
    fn test_deal_needs_two_cards() {
        let err = run_args(&["deal", "--cards", "1"]).unwrap_err();
        assert!(err.to_string().contains("at least 2"), "{err}");
        assert!(run_args(&["deal", "--cards", "2"]).is_ok());
    }

    #[test]
    fn test_play_reports_bad_input() {
        let dir = tempdir().unwrap();

        let missing = dir.path().join("missing.txt");
        let err = run_args(&["play", missing.to_str().unwrap()]).unwrap_err();
        assert!(format!("{err:#}").starts_with("reading "), "{err:#}");

        let tied = dir.path().join("tied.txt");
        std::fs::write(&tied, "Player 1:\n5\n\nPlayer 2:\n5\n").unwrap();
        let err = run_args(&["play", tied.to_str().unwrap()]).unwrap_err();
        assert!(err.to_string().contains("tied"), "{err}");
    }
}
