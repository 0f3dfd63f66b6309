//! Character aggregate - a named hero of a given race
//!
//! A character shares its race rather than owning a copy: many characters
//! can point at the same `Arc<Race>`, and none of them can change it.

use std::sync::Arc;

use crate::aggregates::Race;
use crate::error::ValidationError;
use crate::value_objects::{AttributeMap, CharacterName};

/// Read access to a character.
pub trait CharacterProfile {
    /// The character's name.
    fn name(&self) -> &str;

    /// The character's age in years.
    fn age(&self) -> u32;

    /// The character's gender (e.g., "male", "female", "non-binary").
    fn gender(&self) -> &str;

    /// The character's attribute scores.
    fn attributes(&self) -> &AttributeMap;

    /// The race this character belongs to.
    fn race(&self) -> &Race;
}

/// A playable character
///
/// # Invariants
///
/// - `name` is always 3-50 characters (enforced by `CharacterName`)
/// - `attributes` scores all seven attributes (enforced by `AttributeMap`)
/// - `race` is shared and read-only
///
/// # Example
///
/// ```
/// use anvil_domain::{
///     CharacterFactory, CharacterPresets, CharacterProfile, RaceFactory, RacePresets,
///     RaceProfile,
/// };
///
/// let elf = RaceFactory::new().create_elf().unwrap();
/// let archer = CharacterFactory::new()
///     .create_archer("Legolas", 200, "male", elf.clone())
///     .unwrap();
///
/// assert_eq!(archer.name(), "Legolas");
/// assert_eq!(archer.race().name(), "Elf");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Character {
    name: CharacterName,
    age: u32,
    gender: String,
    attributes: AttributeMap,
    race: Arc<Race>,
}

impl Character {
    /// Validate every field and build the character.
    ///
    /// Age and gender are accepted as given.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::Length` if the name is outside 3-50 characters.
    pub(crate) fn new(
        name: impl Into<String>,
        age: u32,
        gender: impl Into<String>,
        attributes: AttributeMap,
        race: Arc<Race>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            name: CharacterName::new(name)?,
            age,
            gender: gender.into(),
            attributes,
            race,
        })
    }

    /// Returns the validated name.
    #[inline]
    pub fn character_name(&self) -> &CharacterName {
        &self.name
    }

    /// Returns a new handle to the shared race.
    #[inline]
    pub fn shared_race(&self) -> Arc<Race> {
        Arc::clone(&self.race)
    }
}

impl CharacterProfile for Character {
    #[inline]
    fn name(&self) -> &str {
        self.name.as_str()
    }

    #[inline]
    fn age(&self) -> u32 {
        self.age
    }

    #[inline]
    fn gender(&self) -> &str {
        &self.gender
    }

    #[inline]
    fn attributes(&self) -> &AttributeMap {
        &self.attributes
    }

    #[inline]
    fn race(&self) -> &Race {
        &self.race
    }
}
