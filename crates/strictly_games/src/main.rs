//! Strictly Games - Connect Four CLI

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use std::path::Path;
use strictly_games::{
    Cli, Command, ConfigOverrides, GameConfig, GameEvent, HumanPlayer, Orchestrator, render,
};
use tokio::io::BufReader;
use tokio::sync::mpsc;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Logs go to stderr so they never interleave with the board
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            config,
            human,
            first,
            delay_ms,
            seed,
        } => {
            let overrides = ConfigOverrides {
                human,
                first,
                opponent_delay_ms: delay_ms,
                seed,
            };
            run_play(&config, overrides).await
        }
        Command::ShowConfig { config } => show_config(&config),
    }
}

/// Play games on stdin/stdout until the human quits
#[instrument(skip(overrides), fields(config = %config_path.display()))]
async fn run_play(config_path: &Path, overrides: ConfigOverrides) -> Result<()> {
    let config = GameConfig::load_or_default(config_path)?.with_overrides(overrides)?;
    info!(human = %config.human(), first = %config.first(), "Starting session");

    let human_mark = *config.human();
    let engine = config.build_engine();
    let human = HumanPlayer::new("Human", BufReader::new(tokio::io::stdin()));

    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<GameEvent>();
    let printer = tokio::spawn(async move {
        while let Some(event) = event_rx.recv().await {
            if let Some(text) = render::event(&event, human_mark) {
                println!("{}", text);
            }
        }
    });

    let mut orchestrator =
        Orchestrator::new(engine, Box::new(human), config.opponent_delay(), event_tx);
    let scoreboard = orchestrator.run().await?;

    // Closing the channel lets the printer drain and exit
    drop(orchestrator);
    printer.await?;

    println!("\nFinal score: {}", scoreboard);
    Ok(())
}

/// Print the merged configuration
fn show_config(config_path: &Path) -> Result<()> {
    let config = GameConfig::load_or_default(config_path)?;
    print!("{}", config.to_toml()?);
    Ok(())
}
