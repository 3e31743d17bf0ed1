//! Shared application state

use std::sync::Arc;

use anyhow::Result;

use crate::application::ports::inbound::ExportCharactersUseCase;
use crate::application::services::{
    CharacterExportService, CharacterExporter, PlayerIdentityResolver, PreferenceFetcher,
};
use crate::infrastructure::config::AppConfig;
use crate::infrastructure::export::YamlProfileSerializer;
use crate::infrastructure::persistence::SqliteDatabase;
use crate::infrastructure::user_data::DiskUserData;

/// Shared application state
pub struct AppState {
    pub config: AppConfig,
    pub database: SqliteDatabase,
    // Application services
    pub export_characters: Arc<dyn ExportCharactersUseCase>,
}

impl AppState {
    pub async fn new(config: AppConfig) -> Result<Self> {
        // Initialize SQLite database
        let database = SqliteDatabase::connect(&config.database_url).await?;

        // Initialize adapters
        let user_data = Arc::new(DiskUserData::new(config.user_data_dir.clone()));
        let serializer = Arc::new(YamlProfileSerializer::new(config.fork_id.clone()));

        // Initialize application services
        let export_characters = Arc::new(CharacterExportService::new(
            PlayerIdentityResolver::new(Arc::new(database.players())),
            PreferenceFetcher::new(Arc::new(database.preferences())),
            CharacterExporter::new(user_data, serializer),
        ));

        Ok(Self {
            config,
            database,
            export_characters,
        })
    }
}
