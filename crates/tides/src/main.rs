//! Tides CLI binary.
//!
//! This binary provides command-line access to the game:
//! - Play Tides of Remembrance in the terminal
//! - Serve the game over HTTP for a browser front end

use clap::Parser;

mod cli;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    use cli::{Cli, Commands, load_config, play, serve};

    // A missing .env file is fine; the environment may already be set.
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Game text goes to stdout, so keep the terminal quiet unless asked.
    let default_level = match (&cli.command, cli.verbose) {
        (_, true) => "debug",
        (Commands::Play { .. }, false) => "warn",
        (Commands::Serve { .. }, false) => "info",
    };
    tides_server::init_observability(
        tides_server::ObservabilityConfig::new()
            .with_log_level(default_level)
            .with_json_logs(cli.json_logs)
            .with_target(cli.verbose),
    )?;

    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Serve { bind } => {
            serve(config, bind).await?;
        }

        Commands::Play { lenient } => {
            let config = if lenient { config.lenient() } else { config };
            play(config).await?;
        }
    }

    Ok(())
}
