//! Export characters use case - the operator-facing contract

use async_trait::async_trait;

use crate::application::ports::outbound::{DocumentError, LookupError};
use crate::domain::value_objects::{PlayerId, ResPath, ResPathError};

pub const COMMAND_NAME: &str = "exportcharacters";
pub const COMMAND_DESCRIPTION: &str = "Exports the characters of a given player as .yml files. \
The output must be retrieved from the server files.";

/// One-line usage text shown when the argument count is wrong
pub fn usage() -> String {
    format!("Usage: {COMMAND_NAME} <playerUserId OR playerUsername>")
}

/// The single player argument, or `InvalidArguments` for any other count
pub fn single_argument(args: &[String]) -> Result<&str, ExportError> {
    match args {
        [argument] => Ok(argument.as_str()),
        _ => Err(ExportError::InvalidArguments { usage: usage() }),
    }
}

/// Use case errors, one per way an export can stop
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("Invalid arguments.\n{usage}")]
    InvalidArguments { usage: String },
    #[error("Unable to find {0} netuserid")]
    IdentityNotFound(String),
    #[error("No preferences stored for player {0}")]
    PreferencesNotFound(PlayerId),
    #[error("Player lookup failed: {0}")]
    LookupFailed(#[from] LookupError),
    #[error("Failed to export characters into {player_directory}: {cause}")]
    ExportFailure {
        player_directory: String,
        #[source]
        cause: ExportFailureCause,
    },
}

/// What went wrong while writing export files
#[derive(Debug, thiserror::Error)]
pub enum ExportFailureCause {
    #[error(transparent)]
    Path(#[from] ResPathError),
    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Document(#[from] DocumentError),
}

/// Counts gathered while writing one player's export directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    pub directory: ResPath,
    pub exported: usize,
    pub skipped: usize,
}

/// Result of a successful export
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportReport {
    /// The argument exactly as the operator typed it
    pub argument: String,
    pub player: PlayerId,
    pub summary: ExportSummary,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ExportCharactersUseCase: Send + Sync {
    /// Resolve the single argument to a player and export all of their humanoid characters
    async fn export_characters(&self, args: &[String]) -> Result<ExportReport, ExportError>;
}
