//! Infrastructure layer - External adapters and implementations
//!
//! This layer contains:
//! - Persistence: SQLite adapters for player lookup and stored preferences
//! - Export: YAML serialization of character profiles
//! - User data: the sandboxed directory exports are written to
//! - Console: the operator-facing `exportcharacters` command
//! - Config: Application configuration
//! - State: Shared application state

pub mod config;
pub mod console;
pub mod export;
pub mod persistence;
pub mod state;
pub mod user_data;
