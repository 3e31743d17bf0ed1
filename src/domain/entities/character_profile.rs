//! Character profile entity - one saved character in a player's preference slots

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{
    Gender, HumanoidCharacterAppearance, JobPriority, PreferenceUnavailableMode, Sex,
    SpawnPriority,
};

/// A stored character profile
///
/// Only the humanoid kind is understood here. Profiles of any other kind are
/// carried as [`CharacterProfile::Other`] with their stored discriminator.
#[derive(Debug, Clone, PartialEq)]
pub enum CharacterProfile {
    Humanoid(HumanoidCharacterProfile),
    Other { kind: String },
}

/// A humanoid character: name, body, and round-start preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HumanoidCharacterProfile {
    pub name: String,
    #[serde(default)]
    pub flavor_text: String,
    pub species: String,
    pub age: i32,
    pub sex: Sex,
    pub gender: Gender,
    pub appearance: HumanoidCharacterAppearance,
    #[serde(default)]
    pub spawn_priority: SpawnPriority,
    /// Job prototype id -> priority
    #[serde(default)]
    pub job_priorities: BTreeMap<String, JobPriority>,
    #[serde(default)]
    pub preference_unavailable: PreferenceUnavailableMode,
    #[serde(default)]
    pub antag_preferences: BTreeSet<String>,
    #[serde(default)]
    pub trait_preferences: BTreeSet<String>,
    /// Role loadout id -> selected loadout item ids
    #[serde(default)]
    pub loadouts: BTreeMap<String, Vec<String>>,
}

impl HumanoidCharacterProfile {
    pub const KIND: &'static str = "humanoid";
}

#[cfg(test)]
impl HumanoidCharacterProfile {
    pub fn new(name: impl Into<String>, species: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            flavor_text: String::new(),
            species: species.into(),
            age: 18,
            sex: Sex::default(),
            gender: Gender::default(),
            appearance: HumanoidCharacterAppearance::default(),
            spawn_priority: SpawnPriority::default(),
            job_priorities: BTreeMap::new(),
            preference_unavailable: PreferenceUnavailableMode::default(),
            antag_preferences: BTreeSet::new(),
            trait_preferences: BTreeSet::new(),
            loadouts: BTreeMap::new(),
        }
    }

    pub fn with_job_priority(mut self, job: impl Into<String>, priority: JobPriority) -> Self {
        self.job_priorities.insert(job.into(), priority);
        self
    }
}
