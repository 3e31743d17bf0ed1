//! SQLite persistence adapters
//!
//! This module implements the repository pattern over a shared sqlx pool,
//! providing the player locator and preference store the exporter reads from.

mod player_repository;
mod preferences_repository;

pub use player_repository::SqlitePlayerRepository;
pub use preferences_repository::SqlitePreferencesRepository;

use std::str::FromStr;

use anyhow::{Context, Result};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

/// Tables the exporter reads; the game server owns and migrates them
#[cfg(test)]
const SCHEMA: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS player (
        user_id TEXT PRIMARY KEY,
        last_seen_user_name TEXT NOT NULL,
        last_seen_time TEXT NOT NULL
    )
    "#,
    r#"
    CREATE INDEX IF NOT EXISTS player_last_seen_user_name
        ON player (last_seen_user_name COLLATE NOCASE)
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS preference (
        user_id TEXT PRIMARY KEY,
        selected_character_slot INTEGER NOT NULL DEFAULT 0,
        admin_ooc_color TEXT NOT NULL DEFAULT '#ff0000'
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS profile (
        user_id TEXT NOT NULL REFERENCES preference (user_id) ON DELETE CASCADE,
        slot INTEGER NOT NULL,
        kind TEXT NOT NULL,
        data TEXT NOT NULL,
        PRIMARY KEY (user_id, slot)
    )
    "#,
];

/// Combined database handle providing access to all repositories
#[derive(Clone)]
pub struct SqliteDatabase {
    pool: SqlitePool,
}

impl SqliteDatabase {
    /// Open an existing preference store read-only
    ///
    /// A missing database file is an error; the exporter never creates one.
    pub async fn connect(url: &str) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(url)
            .with_context(|| format!("Invalid database URL: {url}"))?
            .create_if_missing(false)
            .read_only(true);

        Self::open(options, url).await
    }

    async fn open(options: SqliteConnectOptions, url: &str) -> Result<Self> {
        // One connection: a single export at a time, and required for `sqlite::memory:`
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(options)
            .await
            .with_context(|| format!("Failed to open database {url}"))?;

        Ok(Self { pool })
    }

    /// Create a writable store with the schema in place
    #[cfg(test)]
    pub async fn create(url: &str) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(url)?.create_if_missing(true);
        let database = Self::open(options, url).await?;
        database.initialize_schema().await?;
        Ok(database)
    }

    #[cfg(test)]
    pub async fn connect_in_memory() -> Result<Self> {
        Self::create("sqlite::memory:").await
    }

    #[cfg(test)]
    async fn initialize_schema(&self) -> Result<()> {
        for statement in SCHEMA {
            sqlx::query(statement)
                .execute(&self.pool)
                .await
                .context("Failed to initialize schema")?;
        }
        Ok(())
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    pub fn players(&self) -> SqlitePlayerRepository {
        SqlitePlayerRepository::new(self.pool.clone())
    }

    pub fn preferences(&self) -> SqlitePreferencesRepository {
        SqlitePreferencesRepository::new(self.pool.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn missing_store_is_not_created() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("preferences.db");

        let result = SqliteDatabase::connect(&format!("sqlite://{}", path.display())).await;

        assert!(result.is_err());
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn existing_store_is_opened_read_only() {
        let dir = TempDir::new().unwrap();
        let url = format!("sqlite://{}", dir.path().join("preferences.db").display());
        SqliteDatabase::create(&url).await.unwrap().pool().close().await;

        let db = SqliteDatabase::connect(&url).await.unwrap();
        let write = sqlx::query("DELETE FROM player").execute(db.pool()).await;

        assert!(write.is_err());
    }
}
