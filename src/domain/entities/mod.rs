//! Domain entities - Core business objects with identity

mod character_profile;
mod player_preferences;

pub use character_profile::{CharacterProfile, HumanoidCharacterProfile};
pub use player_preferences::PlayerPreferences;
