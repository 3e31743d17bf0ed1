//! Character Export Service - runs resolve, fetch and export in order

use async_trait::async_trait;
use tracing::{info, instrument};

use super::{CharacterExporter, PlayerIdentityResolver, PreferenceFetcher};
use crate::application::ports::inbound::{ExportCharactersUseCase, ExportError, ExportReport};

pub struct CharacterExportService {
    resolver: PlayerIdentityResolver,
    fetcher: PreferenceFetcher,
    exporter: CharacterExporter,
}

impl CharacterExportService {
    pub fn new(
        resolver: PlayerIdentityResolver,
        fetcher: PreferenceFetcher,
        exporter: CharacterExporter,
    ) -> Self {
        Self {
            resolver,
            fetcher,
            exporter,
        }
    }
}

#[async_trait]
impl ExportCharactersUseCase for CharacterExportService {
    #[instrument(skip(self))]
    async fn export_characters(&self, args: &[String]) -> Result<ExportReport, ExportError> {
        let resolved = self.resolver.resolve_args(args).await?;
        info!(player = %resolved.id, argument = %resolved.argument, "Exporting characters");

        let prefs = self.fetcher.fetch(resolved.id).await?;
        let summary = self.exporter.export(&resolved.argument, &prefs)?;

        Ok(ExportReport {
            argument: resolved.argument,
            player: resolved.id,
            summary,
        })
    }
}
