//! Validated string newtypes for domain entities
//!
//! These newtypes ensure that names are valid by construction:
//! - Within the length bounds of their field
//! - Stored exactly as given (no trimming)
//!
//! Lengths are counted in characters, not bytes, so "Éowyn" is five long.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::ValidationError;

/// Minimum length for name fields (RaceName, CharacterName)
pub const MIN_NAME_LENGTH: usize = 3;

/// Maximum length for name fields (RaceName, CharacterName)
pub const MAX_NAME_LENGTH: usize = 50;

/// Minimum length for race descriptions
pub const MIN_DESCRIPTION_LENGTH: usize = 3;

/// Maximum length for race descriptions
pub const MAX_DESCRIPTION_LENGTH: usize = 500;

fn check_length(
    value: &str,
    field: &'static str,
    min: usize,
    max: usize,
) -> Result<(), ValidationError> {
    let actual = value.chars().count();
    if actual < min || actual > max {
        return Err(ValidationError::length(field, min, max, actual));
    }
    Ok(())
}

// ============================================================================
// RaceName
// ============================================================================

/// A validated race name (3-50 chars)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RaceName(String);

impl RaceName {
    /// Create a new validated race name.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::Length` if the name is shorter than 3 or
    /// longer than 50 characters.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        check_length(&name, "Race name", MIN_NAME_LENGTH, MAX_NAME_LENGTH)?;
        Ok(Self(name))
    }

    /// Returns the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RaceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for RaceName {
    type Error = ValidationError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<RaceName> for String {
    fn from(name: RaceName) -> String {
        name.0
    }
}

// ============================================================================
// RaceDescription
// ============================================================================

/// A validated race description (3-500 chars)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RaceDescription(String);

impl RaceDescription {
    /// Create a new validated description.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::Length` if the text is shorter than 3 or
    /// longer than 500 characters.
    pub fn new(text: impl Into<String>) -> Result<Self, ValidationError> {
        let text = text.into();
        check_length(
            &text,
            "Race description",
            MIN_DESCRIPTION_LENGTH,
            MAX_DESCRIPTION_LENGTH,
        )?;
        Ok(Self(text))
    }

    /// Returns the description as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RaceDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for RaceDescription {
    type Error = ValidationError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<RaceDescription> for String {
    fn from(description: RaceDescription) -> String {
        description.0
    }
}

// ============================================================================
// CharacterName
// ============================================================================

/// A validated character name (3-50 chars)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CharacterName(String);

impl CharacterName {
    /// Create a new validated character name.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::Length` if the name is shorter than 3 or
    /// longer than 50 characters.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        check_length(&name, "Character name", MIN_NAME_LENGTH, MAX_NAME_LENGTH)?;
        Ok(Self(name))
    }

    /// Returns the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CharacterName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for CharacterName {
    type Error = ValidationError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<CharacterName> for String {
    fn from(name: CharacterName) -> String {
        name.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_race_name_bounds() {
        assert!(RaceName::new("Elf").is_ok());
        assert!(RaceName::new("x".repeat(50)).is_ok());
        assert!(RaceName::new("El").is_err());
        assert!(RaceName::new("x".repeat(51)).is_err());
    }

    #[test]
    fn test_race_name_keeps_input_verbatim() {
        let name = RaceName::new("  Half-Orc ").unwrap();
        assert_eq!(name.as_str(), "  Half-Orc ");
    }

    #[test]
    fn test_race_name_error_reports_actual_length() {
        let err = RaceName::new("").unwrap_err();
        assert_eq!(err, ValidationError::length("Race name", 3, 50, 0));
    }

    #[test]
    fn test_description_bounds() {
        assert!(RaceDescription::new("Old").is_ok());
        assert!(RaceDescription::new("d".repeat(500)).is_ok());
        assert!(RaceDescription::new("ab").is_err());
        assert!(RaceDescription::new("d".repeat(501)).is_err());
    }

    #[test]
    fn test_character_name_bounds() {
        assert!(CharacterName::new("Bob").is_ok());
        assert!(CharacterName::new("n".repeat(50)).is_ok());
        assert!(CharacterName::new("Bo").is_err());
        assert!(CharacterName::new("n".repeat(51)).is_err());
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        // three characters, six bytes
        assert!(CharacterName::new("ÉÅÖ").is_ok());
        assert!(CharacterName::new("é".repeat(50)).is_ok());
        assert!(CharacterName::new("é".repeat(51)).is_err());
    }

    #[test]
    fn test_display() {
        let name = CharacterName::new("Legolas").unwrap();
        assert_eq!(format!("{}", name), "Legolas");
    }

    #[test]
    fn test_serde_validates_on_deserialize() {
        let name: CharacterName = serde_json::from_str("\"Conan\"").unwrap();
        assert_eq!(name.as_str(), "Conan");

        let short: Result<CharacterName, _> = serde_json::from_str("\"Al\"");
        assert!(short.is_err());

        let json = serde_json::to_string(&RaceName::new("Dwarf").unwrap()).unwrap();
        assert_eq!(json, "\"Dwarf\"");
    }
}
