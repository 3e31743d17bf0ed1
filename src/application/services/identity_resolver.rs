//! Identity Resolver - turns an operator argument into a player id
//!
//! The argument is either a player id already (used as-is, without checking
//! the account exists) or a user name that is looked up through the
//! [`PlayerLocatorPort`].

use std::sync::Arc;

use tracing::{debug, info, instrument};

use crate::application::ports::inbound::{single_argument, ExportError};
use crate::application::ports::outbound::PlayerLocatorPort;
use crate::domain::value_objects::PlayerId;

/// A player id together with the argument it was resolved from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPlayer {
    pub id: PlayerId,
    pub argument: String,
}

pub struct PlayerIdentityResolver {
    locator: Arc<dyn PlayerLocatorPort>,
}

impl PlayerIdentityResolver {
    pub fn new(locator: Arc<dyn PlayerLocatorPort>) -> Self {
        Self { locator }
    }

    /// Resolve the command arguments, which must be exactly one
    pub async fn resolve_args(&self, args: &[String]) -> Result<ResolvedPlayer, ExportError> {
        let argument = single_argument(args)?;

        let id = self.resolve(argument).await?;
        Ok(ResolvedPlayer {
            id,
            argument: argument.to_string(),
        })
    }

    #[instrument(skip(self))]
    pub async fn resolve(&self, argument: &str) -> Result<PlayerId, ExportError> {
        if let Some(id) = PlayerId::parse(argument) {
            debug!("Argument is a player id, skipping name lookup");
            return Ok(id);
        }

        let located = self
            .locator
            .lookup_id_by_name(argument)
            .await?
            .ok_or_else(|| ExportError::IdentityNotFound(argument.to_string()))?;

        info!(
            user_id = %located.user_id,
            user_name = %located.user_name,
            last_seen = %located.last_seen_time,
            "Resolved player by name"
        );
        Ok(located.user_id)
    }
}
