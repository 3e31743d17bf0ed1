//! Outbound ports - Interfaces that the application requires from external systems

mod player_locator_port;
mod preferences_port;
mod profile_serializer_port;
mod user_data_port;

pub use player_locator_port::{LocatedPlayer, LookupError, PlayerLocatorPort};
pub use preferences_port::PreferencesRepositoryPort;
pub use profile_serializer_port::{DocumentError, ProfileDocument, ProfileSerializerPort};
pub use user_data_port::UserDataPort;

#[cfg(test)]
pub use player_locator_port::MockPlayerLocatorPort;
#[cfg(test)]
pub use preferences_port::MockPreferencesRepositoryPort;
