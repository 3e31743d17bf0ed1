//! Humanoid appearance value objects

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Sex {
    #[default]
    Male,
    Female,
    Unsexed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Gender {
    Epicene,
    Female,
    #[default]
    Male,
    Neuter,
}

/// Where the character prefers to spawn at round start
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum SpawnPriority {
    #[default]
    None,
    Arrivals,
    Cryosleep,
}

/// What happens when none of the preferred jobs are available
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum PreferenceUnavailableMode {
    #[default]
    SpawnAsOverflow,
    StayInLobby,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum JobPriority {
    Never,
    Low,
    Medium,
    High,
}

/// A single body marking applied on top of the base sprite
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Marking {
    pub marking_id: String,
    /// Hex colours, one per marking layer
    pub marking_colors: Vec<String>,
}

/// Visual customisation of a humanoid character
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HumanoidCharacterAppearance {
    pub hair_style_id: String,
    pub hair_color: String,
    pub facial_hair_style_id: String,
    pub facial_hair_color: String,
    pub eye_color: String,
    pub skin_color: String,
    #[serde(default)]
    pub markings: Vec<Marking>,
}

impl Default for HumanoidCharacterAppearance {
    fn default() -> Self {
        Self {
            hair_style_id: "HairBald".to_string(),
            hair_color: "#000000".to_string(),
            facial_hair_style_id: "FacialHairShaved".to_string(),
            facial_hair_color: "#000000".to_string(),
            eye_color: "#000000".to_string(),
            skin_color: "#C0967F".to_string(),
            markings: Vec::new(),
        }
    }
}
