//! Anvil domain - races, characters and the factories that build them
//!
//! Entities are immutable and valid by construction. Hosts never call their
//! constructors directly; they go through a factory port:
//!
//! ```
//! use anvil_domain::{
//!     CharacterFactory, CharacterPresets, CharacterProfile, RaceFactory, RacePresets,
//! };
//!
//! let human = RaceFactory::new().create_human().unwrap();
//! let warrior = CharacterFactory::new()
//!     .create_warrior("Aragorn", 87, "male", human)
//!     .unwrap();
//!
//! assert_eq!(warrior.name(), "Aragorn");
//! ```

pub mod aggregates;
pub mod error;
pub mod factories;
pub mod value_objects;

pub use aggregates::{Character, CharacterProfile, Race, RaceProfile};
pub use error::{FactoryError, ValidationError};

// Re-export factory ports, implementations and presets
pub use factories::{
    CharacterFactory, CharacterFactoryPort, CharacterPreset, CharacterPresets, RaceFactory,
    RaceFactoryPort, RacePreset, RacePresets,
};

// Re-export value objects
pub use value_objects::{Attribute, AttributeMap, CharacterName, RaceDescription, RaceName};
