//! Preferences repository implementation for SQLite
//!
//! Profiles are stored one row per slot with a `kind` discriminator and the
//! profile body as JSON. Only the humanoid kind is decoded; any other kind is
//! surfaced as [`CharacterProfile::Other`].

use std::collections::BTreeMap;

use async_trait::async_trait;
use sqlx::SqlitePool;

use crate::application::ports::outbound::{LookupError, PreferencesRepositoryPort};
use crate::domain::entities::{CharacterProfile, HumanoidCharacterProfile, PlayerPreferences};
use crate::domain::value_objects::PlayerId;

pub struct SqlitePreferencesRepository {
    pool: SqlitePool,
}

impl SqlitePreferencesRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

fn decode_profile(slot: i32, kind: String, data: &str) -> Result<CharacterProfile, LookupError> {
    if kind != HumanoidCharacterProfile::KIND {
        return Ok(CharacterProfile::Other { kind });
    }

    serde_json::from_str(data)
        .map(CharacterProfile::Humanoid)
        .map_err(|e| LookupError::Serialization(format!("Profile in slot {slot}: {e}")))
}

#[async_trait]
impl PreferencesRepositoryPort for SqlitePreferencesRepository {
    async fn get_user_preferences(
        &self,
        player: PlayerId,
    ) -> Result<Option<PlayerPreferences>, LookupError> {
        let user_id = player.to_string();

        let prefs: Option<(i32, String)> = sqlx::query_as(
            "SELECT selected_character_slot, admin_ooc_color FROM preference WHERE user_id = ?",
        )
        .bind(&user_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| LookupError::Database(e.to_string()))?;

        let Some((selected_character_slot, admin_ooc_color)) = prefs else {
            return Ok(None);
        };

        let rows: Vec<(i32, String, String)> = sqlx::query_as(
            "SELECT slot, kind, data FROM profile WHERE user_id = ? ORDER BY slot",
        )
        .bind(&user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| LookupError::Database(e.to_string()))?;

        let mut characters = BTreeMap::new();
        for (slot, kind, data) in rows {
            characters.insert(slot, decode_profile(slot, kind, &data)?);
        }

        Ok(Some(PlayerPreferences {
            characters,
            selected_character_slot,
            admin_ooc_color,
        }))
    }
}
