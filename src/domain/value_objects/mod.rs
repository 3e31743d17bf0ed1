//! Value objects - Immutable objects defined by their attributes

mod appearance;
mod ids;
mod res_path;

pub use appearance::{
    Gender, HumanoidCharacterAppearance, JobPriority, PreferenceUnavailableMode, Sex,
    SpawnPriority,
};
#[cfg(test)]
pub use appearance::Marking;
pub use ids::*;
pub use res_path::{ResPath, ResPathError};
