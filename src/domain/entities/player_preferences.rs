//! Player preferences - the stored aggregate of a player's character slots

use std::collections::BTreeMap;

use super::CharacterProfile;

/// Everything the preference store holds for one player
///
/// Read-only from the exporter's point of view: a snapshot taken at fetch time.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerPreferences {
    /// Slot number -> profile; slots are unique per player only
    pub characters: BTreeMap<i32, CharacterProfile>,
    pub selected_character_slot: i32,
    pub admin_ooc_color: String,
}

#[cfg(test)]
impl PlayerPreferences {
    pub fn new(characters: BTreeMap<i32, CharacterProfile>) -> Self {
        Self {
            characters,
            selected_character_slot: 0,
            admin_ooc_color: "#ff0000".to_string(),
        }
    }
}
