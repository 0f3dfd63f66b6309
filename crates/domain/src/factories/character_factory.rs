//! Character factory and character presets.

use std::sync::Arc;

use crate::aggregates::{Character, Race};
use crate::error::FactoryError;
use crate::factories::presets::CharacterPreset;
use crate::factories::CharacterFactoryPort;
use crate::value_objects::AttributeMap;

const OPERATION: &str = "character";

/// The standard character factory.
#[derive(Debug, Clone, Copy, Default)]
pub struct CharacterFactory;

impl CharacterFactory {
    /// Create a character factory.
    pub fn new() -> Self {
        Self
    }
}

impl CharacterFactoryPort for CharacterFactory {
    fn create_character(
        &self,
        name: &str,
        age: u32,
        gender: &str,
        attributes: AttributeMap,
        race: Arc<Race>,
    ) -> Result<Character, FactoryError> {
        let race_name = race.race_name().to_string();
        let character = Character::new(name, age, gender, attributes, race).map_err(|err| {
            tracing::warn!(
                character = %name,
                race = %race_name,
                error = %err,
                "Character rejected"
            );
            FactoryError::new(OPERATION, err)
        })?;

        tracing::debug!(
            character = %character.character_name(),
            race = %race_name,
            "Character created"
        );
        Ok(character)
    }
}

/// Named character presets, available on every [`CharacterFactoryPort`].
///
/// The caller always supplies the race; presets only fix the attributes.
pub trait CharacterPresets: CharacterFactoryPort {
    /// Create a character from a named preset.
    fn create_from_preset(
        &self,
        preset: CharacterPreset,
        name: &str,
        age: u32,
        gender: &str,
        race: Arc<Race>,
    ) -> Result<Character, FactoryError> {
        self.create_character(name, age, gender, preset.attributes(), race)
            .map_err(|err| err.during(preset.as_str()))
    }

    /// Create an archer, built for ranged combat.
    fn create_archer(
        &self,
        name: &str,
        age: u32,
        gender: &str,
        race: Arc<Race>,
    ) -> Result<Character, FactoryError> {
        self.create_from_preset(CharacterPreset::Archer, name, age, gender, race)
    }

    /// Create a warrior, built for melee combat.
    fn create_warrior(
        &self,
        name: &str,
        age: u32,
        gender: &str,
        race: Arc<Race>,
    ) -> Result<Character, FactoryError> {
        self.create_from_preset(CharacterPreset::Warrior, name, age, gender, race)
    }
}

impl<T: CharacterFactoryPort + ?Sized> CharacterPresets for T {}
