//! Player repository implementation for SQLite

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

use crate::application::ports::outbound::{LocatedPlayer, LookupError, PlayerLocatorPort};
use crate::domain::value_objects::PlayerId;

/// Looks players up by the user name they were last seen with
pub struct SqlitePlayerRepository {
    pool: SqlitePool,
}

impl SqlitePlayerRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PlayerLocatorPort for SqlitePlayerRepository {
    async fn lookup_id_by_name(
        &self,
        user_name: &str,
    ) -> Result<Option<LocatedPlayer>, LookupError> {
        // Names are matched case-insensitively; if several accounts have used
        // the name, the most recently seen one wins. Timestamps may carry any
        // UTC offset, so they are compared as instants rather than as text.
        let row: Option<(String, String, String)> = sqlx::query_as(
            "SELECT user_id, last_seen_user_name, last_seen_time
            FROM player
            WHERE last_seen_user_name = ? COLLATE NOCASE
            ORDER BY julianday(last_seen_time) DESC
            LIMIT 1",
        )
        .bind(user_name)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| LookupError::Database(e.to_string()))?;

        let Some((user_id, last_seen_user_name, last_seen_time)) = row else {
            return Ok(None);
        };

        let user_id = PlayerId::parse(&user_id)
            .ok_or_else(|| LookupError::Serialization(format!("Invalid user id: {user_id}")))?;
        let last_seen_time = DateTime::parse_from_rfc3339(&last_seen_time)
            .map_err(|e| LookupError::Serialization(e.to_string()))?
            .with_timezone(&Utc);

        tracing::debug!("Located player {} as {}", user_name, user_id);
        Ok(Some(LocatedPlayer {
            user_id,
            user_name: last_seen_user_name,
            last_seen_time,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::persistence::SqliteDatabase;
    use chrono::TimeZone;

    async fn seed_player(db: &SqliteDatabase, id: PlayerId, name: &str, seen: DateTime<Utc>) {
        seed_player_seen_at(db, id, name, &seen.to_rfc3339()).await;
    }

    async fn seed_player_seen_at(db: &SqliteDatabase, id: PlayerId, name: &str, seen: &str) {
        sqlx::query(
            "INSERT INTO player (user_id, last_seen_user_name, last_seen_time) VALUES (?, ?, ?)",
        )
        .bind(id.to_string())
        .bind(name)
        .bind(seen)
        .execute(db.pool())
        .await
        .unwrap();
    }

    #[tokio::test]
    async fn finds_player_ignoring_case() {
        let db = SqliteDatabase::connect_in_memory().await.unwrap();
        let id = PlayerId::new();
        let seen = Utc.with_ymd_and_hms(2025, 2, 14, 20, 30, 0).unwrap();
        seed_player(&db, id, "UristMcHands", seen).await;

        let located = db
            .players()
            .lookup_id_by_name("uristmchands")
            .await
            .unwrap()
            .expect("player should be found");

        assert_eq!(located.user_id, id);
        assert_eq!(located.user_name, "UristMcHands");
        assert_eq!(located.last_seen_time, seen);
    }

    #[tokio::test]
    async fn prefers_most_recently_seen_account() {
        let db = SqliteDatabase::connect_in_memory().await.unwrap();
        let old = PlayerId::new();
        let recent = PlayerId::new();
        seed_player(&db, old, "Urist", Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap()).await;
        seed_player(&db, recent, "urist", Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap()).await;

        let located = db.players().lookup_id_by_name("Urist").await.unwrap().unwrap();

        assert_eq!(located.user_id, recent);
    }

    #[tokio::test]
    async fn recency_compares_instants_across_offsets() {
        let db = SqliteDatabase::connect_in_memory().await.unwrap();
        let earlier = PlayerId::new();
        let later = PlayerId::new();
        // 10:00 UTC sorts after 09:00-05:00 as text, but is four hours earlier
        seed_player_seen_at(&db, earlier, "Urist", "2025-01-01T10:00:00+00:00").await;
        seed_player_seen_at(&db, later, "Urist", "2025-01-01T09:00:00-05:00").await;

        let located = db.players().lookup_id_by_name("Urist").await.unwrap().unwrap();

        assert_eq!(located.user_id, later);
        assert_eq!(
            located.last_seen_time,
            Utc.with_ymd_and_hms(2025, 1, 1, 14, 0, 0).unwrap()
        );
    }

    #[tokio::test]
    async fn unknown_name_is_none() {
        let db = SqliteDatabase::connect_in_memory().await.unwrap();

        let located = db.players().lookup_id_by_name("Nobody").await.unwrap();

        assert!(located.is_none());
    }
}
