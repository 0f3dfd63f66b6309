//! Value objects - Immutable objects defined by their attributes

mod attribute;
mod names;

// Ability scores shared by races and characters
pub use attribute::{Attribute, AttributeMap, ATTRIBUTE_COUNT};

// Validated strings with their length bounds
pub use names::{
    CharacterName, RaceDescription, RaceName, MAX_DESCRIPTION_LENGTH, MAX_NAME_LENGTH,
    MIN_DESCRIPTION_LENGTH, MIN_NAME_LENGTH,
};
