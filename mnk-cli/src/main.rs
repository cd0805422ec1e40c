//! MNK CLI - Command-line interface
//!
//! Commands:
//! - play: Play against the alpha-beta AI
//! - match: Pit two AI configurations against each other
//! - config: Print the resolved engine configuration as JSON

mod match_cmd;
mod play;
mod render;
mod settings;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use settings::EngineArgs;

#[derive(Parser)]
#[command(name = "mnk")]
#[command(about = "m,n,k connect game with an alpha-beta opponent")]
struct Cli {
    /// Engine configuration JSON file
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a game in the terminal
    Play(play::PlayArgs),
    /// Run AI self-play games
    Match(match_cmd::MatchArgs),
    /// Print the engine configuration (defaults plus overrides)
    Config {
        #[command(flatten)]
        engine: EngineArgs,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config_path = cli.config.as_deref();

    match cli.command {
        Commands::Play(args) => play::run(args, config_path),
        Commands::Match(args) => match_cmd::run(args, config_path),
        Commands::Config { engine } => {
            let config = engine.resolve(config_path)?;
            println!("{}", serde_json::to_string_pretty(&config)?);
            Ok(())
        }
    }
}
