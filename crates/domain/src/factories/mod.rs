//! Factories - the only way to obtain races and characters
//!
//! Each factory is split in two:
//! - a port trait with the single generic entry point (`create_race`,
//!   `create_character`), which is what implementations provide
//! - a blanket extension trait with the named presets (`create_human`,
//!   `create_warrior`, ...), which always route through that entry point
//!
//! Every implementation of a port, test doubles included, therefore gets the
//! presets for free and cannot bypass the generic path.
//!
//! Factories are stateless: every call builds a fresh entity.

use std::sync::Arc;

use crate::aggregates::{Character, Race};
use crate::error::FactoryError;
use crate::value_objects::AttributeMap;

mod character_factory;
mod presets;
mod race_factory;

pub use character_factory::{CharacterFactory, CharacterPresets};
pub use presets::{
    CharacterPreset, RacePreset, ARCHER_ATTRIBUTES, ELF_ATTRIBUTES, HUMAN_ATTRIBUTES,
    WARRIOR_ATTRIBUTES,
};
pub use race_factory::{RaceFactory, RacePresets};

/// Builds races.
#[cfg_attr(test, mockall::automock)]
pub trait RaceFactoryPort: Send + Sync {
    /// Create a race from explicit values.
    ///
    /// The returned handle is fresh; share it by cloning the `Arc`.
    fn create_race(
        &self,
        name: &str,
        description: &str,
        base_attributes: AttributeMap,
    ) -> Result<Arc<Race>, FactoryError>;
}

/// Builds characters.
#[cfg_attr(test, mockall::automock)]
pub trait CharacterFactoryPort: Send + Sync {
    /// Create a character from explicit values.
    ///
    /// `race` is shared with the new character, not copied.
    fn create_character(
        &self,
        name: &str,
        age: u32,
        gender: &str,
        attributes: AttributeMap,
        race: Arc<Race>,
    ) -> Result<Character, FactoryError>;
}
