//! Application services - Use case implementations
//!
//! The export pipeline is split into three services that run strictly in
//! order: identity resolution, preference retrieval, and file export. Each
//! takes its collaborators as port trait objects.

pub mod character_export_service;
pub mod character_exporter;
pub mod identity_resolver;
pub mod preference_fetcher;

pub use character_export_service::CharacterExportService;
pub use character_exporter::CharacterExporter;
pub use identity_resolver::PlayerIdentityResolver;
pub use preference_fetcher::PreferenceFetcher;
