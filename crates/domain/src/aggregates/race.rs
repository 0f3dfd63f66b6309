//! Race aggregate - a people whose base attributes characters inherit
//!
//! # Rustic DDD Design
//!
//! - **Private fields**: All fields are encapsulated
//! - **Newtypes**: `RaceName` and `RaceDescription` for validated strings
//! - **Immutable**: No `&mut` methods; accessors return borrows or copies
//! - **Factory-only**: `new()` is crate-private, hosts go through `RaceFactory`

use crate::error::ValidationError;
use crate::value_objects::{AttributeMap, RaceDescription, RaceName};

/// Read access to a race.
///
/// Implemented by [`Race`]; kept as a trait so callers that only read race
/// data can accept a test double instead.
pub trait RaceProfile {
    /// The race's name (e.g., "Human", "Elf").
    fn name(&self) -> &str;

    /// A short description of the race.
    fn description(&self) -> &str;

    /// The base attribute scores of the race.
    fn base_attributes(&self) -> &AttributeMap;
}

/// A playable race
///
/// # Invariants
///
/// - `name` is always 3-50 characters (enforced by `RaceName`)
/// - `description` is always 3-500 characters (enforced by `RaceDescription`)
/// - `base_attributes` scores all seven attributes (enforced by `AttributeMap`)
///
/// # Example
///
/// ```
/// use anvil_domain::{RaceFactory, RacePresets, RaceProfile};
///
/// let human = RaceFactory::new().create_human().unwrap();
///
/// assert_eq!(human.name(), "Human");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Race {
    name: RaceName,
    description: RaceDescription,
    base_attributes: AttributeMap,
}

impl Race {
    /// Validate every field and build the race.
    ///
    /// Either all fields pass or no race is built.
    ///
    /// # Errors
    ///
    /// Returns the first failing `ValidationError`, checking the name before
    /// the description.
    pub(crate) fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        base_attributes: AttributeMap,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            name: RaceName::new(name)?,
            description: RaceDescription::new(description)?,
            base_attributes,
        })
    }

    /// Returns the validated name.
    #[inline]
    pub fn race_name(&self) -> &RaceName {
        &self.name
    }

    /// Returns the validated description.
    #[inline]
    pub fn race_description(&self) -> &RaceDescription {
        &self.description
    }
}

impl RaceProfile for Race {
    #[inline]
    fn name(&self) -> &str {
        self.name.as_str()
    }

    #[inline]
    fn description(&self) -> &str {
        self.description.as_str()
    }

    #[inline]
    fn base_attributes(&self) -> &AttributeMap {
        &self.base_attributes
    }
}
