//! Console commands exposed to server operators

mod export_characters_command;

pub use export_characters_command::{CommandOutcome, ExportCharactersCommand};
