// Only the encoding half is driven by the export command; decoding is part of
// the serializer contract and is exercised by the round-trip tests.
#![cfg_attr(not(test), allow(dead_code))]

use std::io::Write;

use crate::domain::entities::HumanoidCharacterProfile;

#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    #[error("Failed to encode profile: {0}")]
    Encode(String),
    #[error("Failed to decode profile: {0}")]
    Decode(String),
    #[error("Unsupported export version {found} (expected {expected})")]
    UnsupportedVersion { found: u32, expected: u32 },
}

/// A structured, human-readable key/value tree describing one profile
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileDocument(serde_yaml::Value);

impl ProfileDocument {
    pub fn new(root: serde_yaml::Value) -> Self {
        Self(root)
    }

    pub fn root(&self) -> &serde_yaml::Value {
        &self.0
    }

    /// Write the document as YAML text
    pub fn write<W: Write>(&self, writer: W) -> Result<(), DocumentError> {
        serde_yaml::to_writer(writer, &self.0).map_err(|e| DocumentError::Encode(e.to_string()))
    }

    pub fn parse(text: &str) -> Result<Self, DocumentError> {
        serde_yaml::from_str(text)
            .map(Self)
            .map_err(|e| DocumentError::Decode(e.to_string()))
    }
}

/// Converts humanoid profiles to and from structured documents
///
/// Implementations must be pure and lossless: decoding an encoded profile
/// yields a value equal to the original.
pub trait ProfileSerializerPort: Send + Sync {
    fn to_document(&self, profile: &HumanoidCharacterProfile)
        -> Result<ProfileDocument, DocumentError>;

    fn from_document(&self, document: &ProfileDocument)
        -> Result<HumanoidCharacterProfile, DocumentError>;
}
