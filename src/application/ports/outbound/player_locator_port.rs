use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::value_objects::PlayerId;

#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("Database error: {0}")]
    Database(String),
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// A player account found by name
#[derive(Debug, Clone, PartialEq)]
pub struct LocatedPlayer {
    pub user_id: PlayerId,
    /// Canonical spelling of the user name as last seen
    pub user_name: String,
    pub last_seen_time: DateTime<Utc>,
}

/// Maps a human-readable player name to the account's stable id
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PlayerLocatorPort: Send + Sync {
    /// Look up a player by user name; `Ok(None)` if no account matches
    async fn lookup_id_by_name(&self, user_name: &str)
        -> Result<Option<LocatedPlayer>, LookupError>;
}
