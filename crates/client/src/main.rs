//! `tower` command line entry point.
//!
//! Checks, re-exports and plays tower records. Settings that are not per
//! invocation come from the environment (see [`config::CliConfig`]).
mod commands;
mod config;
mod input;
mod view;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{Check, Export, Play};
use config::CliConfig;

/// Tower dungeon-crawler tools
#[derive(Parser)]
#[command(name = "tower")]
#[command(about = "Check, convert and play tower records", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Import a tower record and report its errors
    Check(Check),

    /// Re-export a tower record in canonical form
    Export(Export),

    /// Play a tower in the terminal
    Play(Play),
}

fn main() -> Result<()> {
    // Load .env file if it exists (for TOWER_CONFIG and TOWER_LOG)
    let _ = dotenvy::dotenv();

    let config = CliConfig::from_env();
    init_logging(&config);

    let cli = Cli::parse();
    tracing::debug!(?config, "starting tower client");

    match cli.command {
        Command::Check(cmd) => cmd.execute(),
        Command::Export(cmd) => cmd.execute(),
        Command::Play(cmd) => cmd.execute(&config),
    }
}

fn init_logging(config: &CliConfig) {
    let filter = tracing_subscriber::EnvFilter::try_new(&config.log_filter).unwrap_or_else(|_| {
        tracing_subscriber::EnvFilter::new(CliConfig::DEFAULT_LOG_FILTER)
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_line_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn play_accepts_a_move_script() {
        let cli = Cli::try_parse_from(["tower", "play", "tower.json", "--moves", "uu rr"])
            .expect("parses");
        assert!(matches!(cli.command, Command::Play(_)));

        assert!(Cli::try_parse_from(["tower", "export", "only-input.json"]).is_err());
    }
}
