//! YAML profile serializer
//!
//! Each profile is wrapped in a small envelope before encoding:
//!
//! ```yaml
//! forkId: ""
//! version: 1
//! profile:
//!   name: Urist McHands
//!   species: Dwarf
//!   ...
//! ```

use serde::{Deserialize, Serialize};

use crate::application::ports::outbound::{DocumentError, ProfileDocument, ProfileSerializerPort};
use crate::domain::entities::HumanoidCharacterProfile;

/// Current envelope version written into every export
pub const EXPORT_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HumanoidProfileExport {
    pub fork_id: String,
    pub version: u32,
    pub profile: HumanoidCharacterProfile,
}

pub struct YamlProfileSerializer {
    fork_id: String,
}

impl YamlProfileSerializer {
    pub fn new(fork_id: impl Into<String>) -> Self {
        Self {
            fork_id: fork_id.into(),
        }
    }
}

impl ProfileSerializerPort for YamlProfileSerializer {
    fn to_document(
        &self,
        profile: &HumanoidCharacterProfile,
    ) -> Result<ProfileDocument, DocumentError> {
        let export = HumanoidProfileExport {
            fork_id: self.fork_id.clone(),
            version: EXPORT_VERSION,
            profile: profile.clone(),
        };

        serde_yaml::to_value(&export)
            .map(ProfileDocument::new)
            .map_err(|e| DocumentError::Encode(e.to_string()))
    }

    fn from_document(
        &self,
        document: &ProfileDocument,
    ) -> Result<HumanoidCharacterProfile, DocumentError> {
        let export: HumanoidProfileExport = serde_yaml::from_value(document.root().clone())
            .map_err(|e| DocumentError::Decode(e.to_string()))?;

        if export.version != EXPORT_VERSION {
            return Err(DocumentError::UnsupportedVersion {
                found: export.version,
                expected: EXPORT_VERSION,
            });
        }

        Ok(export.profile)
    }
}
