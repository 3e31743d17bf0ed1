use std::sync::Arc;

use tracing::{info, instrument};

use crate::application::ports::inbound::ExportError;
use crate::application::ports::outbound::PreferencesRepositoryPort;
use crate::domain::entities::PlayerPreferences;
use crate::domain::value_objects::PlayerId;

/// Loads a player's preference record, treating "nothing stored" as an error
pub struct PreferenceFetcher {
    repository: Arc<dyn PreferencesRepositoryPort>,
}

impl PreferenceFetcher {
    pub fn new(repository: Arc<dyn PreferencesRepositoryPort>) -> Self {
        Self { repository }
    }

    #[instrument(skip(self))]
    pub async fn fetch(&self, player: PlayerId) -> Result<PlayerPreferences, ExportError> {
        let prefs = self
            .repository
            .get_user_preferences(player)
            .await?
            .ok_or(ExportError::PreferencesNotFound(player))?;

        info!(characters = prefs.characters.len(), "Loaded player preferences");
        Ok(prefs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::outbound::MockPreferencesRepositoryPort;
    use mockall::predicate::eq;
    use std::collections::BTreeMap;

    #[tokio::test]
    async fn missing_record_is_preferences_not_found() {
        let player = PlayerId::new();
        let mut repository = MockPreferencesRepositoryPort::new();
        repository
            .expect_get_user_preferences()
            .with(eq(player))
            .returning(|_| Ok(None));

        let fetcher = PreferenceFetcher::new(Arc::new(repository));
        let err = fetcher.fetch(player).await.unwrap_err();

        assert!(matches!(err, ExportError::PreferencesNotFound(id) if id == player));
    }

    #[tokio::test]
    async fn empty_record_is_not_an_error() {
        let mut repository = MockPreferencesRepositoryPort::new();
        repository
            .expect_get_user_preferences()
            .returning(|_| Ok(Some(PlayerPreferences::new(BTreeMap::new()))));

        let fetcher = PreferenceFetcher::new(Arc::new(repository));
        let prefs = fetcher.fetch(PlayerId::new()).await.unwrap();

        assert!(prefs.characters.is_empty());
    }
}
