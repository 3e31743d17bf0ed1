//! Application configuration

use std::env;
use std::path::PathBuf;

use anyhow::Result;

/// Application configuration loaded from environment
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// SQLite URL of the player and preference database
    pub database_url: String,

    /// Root of the user-data sandbox exports are written into
    pub user_data_dir: PathBuf,

    /// Fork identifier stamped into every exported document
    pub fork_id: String,
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let user_data_dir = env::var("CHARACTER_EXPORT_USER_DATA")
            .unwrap_or_else(|_| "data".to_string());
        if user_data_dir.trim().is_empty() {
            anyhow::bail!("CHARACTER_EXPORT_USER_DATA must not be empty");
        }

        Ok(Self {
            database_url: env::var("CHARACTER_EXPORT_DATABASE_URL")
                .unwrap_or_else(|_| "sqlite://preferences.db".to_string()),

            user_data_dir: PathBuf::from(user_data_dir),

            fork_id: env::var("CHARACTER_EXPORT_FORK_ID").unwrap_or_default(),
        })
    }
}
