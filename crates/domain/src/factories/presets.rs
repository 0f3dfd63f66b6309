//! Named presets - the hard-coded bundles behind `create_human`, `create_archer`, etc.
//!
//! Each preset has a lowercase name that doubles as the `operation` label of a
//! [`FactoryError`](crate::error::FactoryError) raised while building it.

use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;
use crate::value_objects::AttributeMap;

/// Human base attributes: 10 across the board.
pub const HUMAN_ATTRIBUTES: AttributeMap = AttributeMap::uniform(10);

/// Elf base attributes: agile, clever and dexterous, but frail.
pub const ELF_ATTRIBUTES: AttributeMap = AttributeMap::from_ordered([8, 12, 12, 10, 12, 8, 8]);

/// Archer attributes, tuned for ranged combat.
pub const ARCHER_ATTRIBUTES: AttributeMap = AttributeMap::from_ordered([7, 10, 13, 10, 10, 6, 14]);

/// Warrior attributes, tuned for melee combat.
pub const WARRIOR_ATTRIBUTES: AttributeMap =
    AttributeMap::from_ordered([15, 9, 8, 9, 11, 14, 4]);

// ============================================================================
// RacePreset
// ============================================================================

/// A race the race factory can build without further input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RacePreset {
    Human,
    Elf,
}

impl RacePreset {
    /// Returns the lowercase preset name (e.g., "elf").
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Human => "human",
            Self::Elf => "elf",
        }
    }

    /// Returns every race preset.
    pub fn all() -> [RacePreset; 2] {
        [Self::Human, Self::Elf]
    }

    /// The name given to races built from this preset.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Human => "Human",
            Self::Elf => "Elf",
        }
    }

    /// The description given to races built from this preset.
    pub fn description(&self) -> &'static str {
        match self {
            Self::Human => "Adaptable and ambitious, standard for all races",
            Self::Elf => "Intelligent and graceful, with a deep connection to nature",
        }
    }

    /// The base attributes given to races built from this preset.
    pub fn attributes(&self) -> AttributeMap {
        match self {
            Self::Human => HUMAN_ATTRIBUTES,
            Self::Elf => ELF_ATTRIBUTES,
        }
    }
}

impl fmt::Display for RacePreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RacePreset {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "human" => Ok(Self::Human),
            "elf" => Ok(Self::Elf),
            _ => Err(ValidationError::unknown_preset("race", s)),
        }
    }
}

// ============================================================================
// CharacterPreset
// ============================================================================

/// A character archetype with a fixed attribute bundle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharacterPreset {
    Archer,
    Warrior,
}

impl CharacterPreset {
    /// Returns the lowercase preset name (e.g., "warrior").
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Archer => "archer",
            Self::Warrior => "warrior",
        }
    }

    /// Returns every character preset.
    pub fn all() -> [CharacterPreset; 2] {
        [Self::Archer, Self::Warrior]
    }

    /// The attributes given to characters built from this preset.
    pub fn attributes(&self) -> AttributeMap {
        match self {
            Self::Archer => ARCHER_ATTRIBUTES,
            Self::Warrior => WARRIOR_ATTRIBUTES,
        }
    }
}

impl fmt::Display for CharacterPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for CharacterPreset {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "archer" => Ok(Self::Archer),
            "warrior" => Ok(Self::Warrior),
            _ => Err(ValidationError::unknown_preset("character", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn named(pairs: [(&str, i32); 7]) -> AttributeMap {
        AttributeMap::try_from_named(pairs).unwrap()
    }

    #[test]
    fn test_elf_table() {
        let expected = named([
            ("strength", 8),
            ("agility", 12),
            ("intelligence", 12),
            ("wisdom", 10),
            ("dexterity", 12),
            ("constitution", 8),
            ("charisma", 8),
        ]);
        assert_eq!(ELF_ATTRIBUTES, expected);
    }

    #[test]
    fn test_archer_table() {
        let expected = named([
            ("strength", 7),
            ("agility", 10),
            ("intelligence", 13),
            ("wisdom", 10),
            ("dexterity", 10),
            ("constitution", 6),
            ("charisma", 14),
        ]);
        assert_eq!(ARCHER_ATTRIBUTES, expected);
    }

    #[test]
    fn test_warrior_table() {
        let expected = named([
            ("strength", 15),
            ("agility", 9),
            ("intelligence", 8),
            ("wisdom", 9),
            ("dexterity", 11),
            ("constitution", 14),
            ("charisma", 4),
        ]);
        assert_eq!(WARRIOR_ATTRIBUTES, expected);
    }

    #[test]
    fn test_human_table() {
        assert!(HUMAN_ATTRIBUTES.iter().all(|(_, score)| score == 10));
    }

    #[test]
    fn test_race_preset_from_str() {
        assert_eq!("human".parse::<RacePreset>(), Ok(RacePreset::Human));
        assert_eq!("Elf".parse::<RacePreset>(), Ok(RacePreset::Elf));
        assert_eq!(
            "dwarf".parse::<RacePreset>(),
            Err(ValidationError::unknown_preset("race", "dwarf"))
        );
    }

    #[test]
    fn test_character_preset_from_str() {
        assert_eq!("ARCHER".parse::<CharacterPreset>(), Ok(CharacterPreset::Archer));
        assert_eq!("warrior".parse::<CharacterPreset>(), Ok(CharacterPreset::Warrior));
        assert!("bard".parse::<CharacterPreset>().is_err());
    }

    #[test]
    fn test_display_round_trips_through_from_str() {
        for preset in RacePreset::all() {
            assert_eq!(preset.to_string().parse::<RacePreset>(), Ok(preset));
        }
        for preset in CharacterPreset::all() {
            assert_eq!(preset.to_string().parse::<CharacterPreset>(), Ok(preset));
        }
    }
}
