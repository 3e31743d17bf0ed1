//! Inbound ports - Interfaces that the application exposes to the outside world

pub mod export_characters;

pub use export_characters::{
    single_argument, ExportCharactersUseCase, ExportError, ExportFailureCause, ExportReport,
    ExportSummary, COMMAND_DESCRIPTION, COMMAND_NAME,
};

#[cfg(test)]
pub use export_characters::MockExportCharactersUseCase;
