#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Command-line adapter that previews spiral hazard growth turn by turn.

mod config;
mod idle;

use std::{
    io::{self, Write},
    path::PathBuf,
};

use anyhow::{Context, Result};
use clap::Parser;
use spiral_hazards_core::{BoardState, Ruleset};
use spiral_hazards_system_ruleset::SpiralHazardRuleset;
use tracing::info;
use tracing_subscriber::EnvFilter;

use self::{config::PreviewConfig, idle::IdleRuleset};

/// Prints the spiral hazards produced for each turn of an idle game.
#[derive(Debug, Parser)]
#[command(name = "spiral-hazards", version)]
struct Cli {
    /// TOML file providing the seed and board settings.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Seed used to place the spiral center.
    #[arg(long, allow_hyphen_values = true)]
    seed: Option<i64>,
    /// Number of board columns.
    #[arg(long)]
    width: Option<i32>,
    /// Number of board rows.
    #[arg(long)]
    height: Option<i32>,
    /// Number of turns to play.
    #[arg(long)]
    turns: Option<u32>,
}

impl Cli {
    fn resolve(&self) -> Result<PreviewConfig> {
        let mut config = match &self.config {
            Some(path) => PreviewConfig::load(path)?,
            None => PreviewConfig::default(),
        };
        if let Some(seed) = self.seed {
            config.ruleset.seed = seed;
        }
        if let Some(width) = self.width {
            config.width = width;
        }
        if let Some(height) = self.height {
            config.height = height;
        }
        if let Some(turns) = self.turns {
            config.turns = turns;
        }
        Ok(config)
    }
}

/// Entry point for the spiral hazards command-line interface.
fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let config = Cli::parse().resolve()?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run(&config, &mut out)
}

fn run(config: &PreviewConfig, out: &mut impl Write) -> Result<()> {
    let ruleset = SpiralHazardRuleset::from_config(IdleRuleset, &config.ruleset);
    info!(
        ruleset = ruleset.name(),
        seed = ruleset.seed(),
        width = config.width,
        height = config.height,
        turns = config.turns,
        "previewing spiral hazards"
    );

    let mut state = BoardState::new(config.width, config.height);
    for _ in 0..config.turns {
        state = ruleset
            .create_next_board_state(&state, &[])
            .with_context(|| format!("failed to advance past turn {}", state.turn))?;
        writeln!(out, "{}", describe_turn(&state)).context("failed to write preview line")?;
    }
    Ok(())
}

fn describe_turn(state: &BoardState) -> String {
    let cells: Vec<String> = state
        .hazards
        .iter()
        .map(|point| format!("({},{})", point.x, point.y))
        .collect();
    format!("turn {}: {}", state.turn, cells.join(" "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use spiral_hazards_core::{Point, RulesetConfig};

    fn preview(config: &PreviewConfig) -> Vec<String> {
        let mut buffer = Vec::new();
        run(config, &mut buffer).expect("preview runs");
        String::from_utf8(buffer)
            .expect("utf-8 output")
            .lines()
            .map(str::to_owned)
            .collect()
    }

    #[test]
    fn prints_one_line_per_turn() {
        let config = PreviewConfig {
            ruleset: RulesetConfig::new(42),
            width: 11,
            height: 11,
            turns: 9,
        };
        let lines = preview(&config);
        assert_eq!(lines.len(), 9);
        for (index, line) in lines.iter().enumerate() {
            assert!(
                line.starts_with(&format!("turn {}: (", index + 1)),
                "unexpected line {line:?}"
            );
        }
    }

    #[test]
    fn preview_is_reproducible() {
        let config = PreviewConfig {
            ruleset: RulesetConfig::new(-7),
            ..PreviewConfig::default()
        };
        assert_eq!(preview(&config), preview(&config));
    }

    #[test]
    fn invalid_board_surfaces_ruleset_error() {
        let config = PreviewConfig {
            width: 0,
            ..PreviewConfig::default()
        };
        let mut buffer = Vec::new();
        let error = run(&config, &mut buffer).expect_err("zero-width board");
        assert!(format!("{error:#}").contains("board dimensions must be positive"));
        assert!(buffer.is_empty());
    }

    #[test]
    fn describe_turn_lists_hazards_in_order() {
        let mut state = BoardState::new(5, 5);
        state.turn = 4;
        state.hazards = vec![Point::new(2, 2), Point::new(2, 3)];
        assert_eq!(describe_turn(&state), "turn 4: (2,2) (2,3)");
    }

    #[test]
    fn flags_override_config_values() {
        let cli = Cli::parse_from([
            "spiral-hazards",
            "--seed",
            "-5",
            "--width",
            "7",
            "--turns",
            "3",
        ]);
        let config = cli.resolve().expect("resolve");
        assert_eq!(config.ruleset.seed, -5);
        assert_eq!(config.width, 7);
        assert_eq!(config.height, 11);
        assert_eq!(config.turns, 3);
    }
}
