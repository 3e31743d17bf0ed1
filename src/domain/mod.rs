//! Domain layer - Core business logic with no external dependencies
//!
//! This layer contains:
//! - Entities: PlayerPreferences and the character profiles it holds
//! - Value Objects: identifiers, appearance data, sandboxed resource paths

pub mod entities;
pub mod value_objects;
