//! `exportcharacters` console command
//!
//! Collapses the export pipeline into the two outcomes the operator sees: one
//! success line naming the target, or one error line.

use std::sync::Arc;

use tracing::{error, info};

use crate::application::ports::inbound::{single_argument, ExportCharactersUseCase, ExportError};

/// What the operator is shown after the command runs
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    Success(String),
    Error(String),
}

pub struct ExportCharactersCommand {
    use_case: Arc<dyn ExportCharactersUseCase>,
}

impl ExportCharactersCommand {
    pub fn new(use_case: Arc<dyn ExportCharactersUseCase>) -> Self {
        Self { use_case }
    }

    /// Reject a wrong argument count before any backend is opened
    pub fn check_arguments(args: &[String]) -> Result<(), CommandOutcome> {
        single_argument(args)
            .map(|_| ())
            .map_err(|e| CommandOutcome::Error(operator_message(args, &e)))
    }

    pub async fn execute(&self, args: &[String]) -> CommandOutcome {
        match self.use_case.export_characters(args).await {
            Ok(report) => {
                info!(
                    player = %report.player,
                    directory = %report.summary.directory,
                    exported = report.summary.exported,
                    "Export succeeded"
                );
                CommandOutcome::Success(format!(
                    "Successfully exported characters for {} - please check server data!",
                    report.argument
                ))
            }
            Err(e) => {
                error!(error = %e, "Export failed");
                CommandOutcome::Error(operator_message(args, &e))
            }
        }
    }
}

fn operator_message(args: &[String], error: &ExportError) -> String {
    match error {
        ExportError::InvalidArguments { .. } | ExportError::IdentityNotFound(_) => error.to_string(),
        _ => format!(
            "Failed to export characters for {}.",
            args.first().map(String::as_str).unwrap_or_default()
        ),
    }
}
