//! Character Export - admin utility for dumping a player's characters
//!
//! Given a player id or user name, the tool:
//! - Resolves the player against the SQLite player table
//! - Loads their stored preferences and character slots
//! - Writes every humanoid profile to `ExportedCharacters/<argument>/<slot>_<name>.yml`
//!   under the configured user-data directory

mod application;
mod domain;
mod infrastructure;

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::application::ports::inbound::{COMMAND_DESCRIPTION, COMMAND_NAME};
use crate::infrastructure::config::AppConfig;
use crate::infrastructure::console::{CommandOutcome, ExportCharactersCommand};
use crate::infrastructure::state::AppState;

/// Every argument, hyphenated or not, is handed to the command as an identity
#[derive(Parser)]
#[command(
    name = COMMAND_NAME,
    about = COMMAND_DESCRIPTION,
    disable_version_flag = true,
    disable_help_flag = true
)]
struct Cli {
    /// Player user id or user name (exactly one)
    #[arg(
        value_name = "playerUserId OR playerUsername",
        num_args = 0..,
        allow_hyphen_values = true,
        trailing_var_arg = true
    )]
    args: Vec<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "character_export=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match run(&cli.args, AppConfig::from_env).await? {
        CommandOutcome::Success(line) => {
            println!("{line}");
            Ok(ExitCode::SUCCESS)
        }
        CommandOutcome::Error(line) => {
            eprintln!("{line}");
            Ok(ExitCode::FAILURE)
        }
    }
}

/// Validate the arguments, then open the backends and run the export
///
/// A usage error returns before configuration is loaded, so it never touches
/// the database or the user-data root.
async fn run(
    args: &[String],
    load_config: impl FnOnce() -> anyhow::Result<AppConfig>,
) -> anyhow::Result<CommandOutcome> {
    if let Err(outcome) = ExportCharactersCommand::check_arguments(args) {
        return Ok(outcome);
    }

    // Load configuration
    let config = load_config()?;
    let state = AppState::new(config).await?;
    tracing::info!("Configuration loaded");
    tracing::info!("  Database: {}", state.config.database_url);
    tracing::info!("  User data: {}", state.config.user_data_dir.display());

    let command = ExportCharactersCommand::new(state.export_characters.clone());

    let outcome = command.execute(args).await;
    state.database.pool().close().await;

    Ok(outcome)
}
