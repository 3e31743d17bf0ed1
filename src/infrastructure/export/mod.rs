//! Character export formats
//!
//! Profiles are written as YAML documents through [`YamlProfileSerializer`],
//! each wrapped in a versioned envelope.

mod yaml_profile_serializer;

pub use yaml_profile_serializer::YamlProfileSerializer;
