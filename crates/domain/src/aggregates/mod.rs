//! Aggregate roots - domain objects that own their related data
//!
//! Each aggregate:
//! - Validates every field when it is built
//! - Exposes behavior through read accessors, not public fields
//! - Has no `&mut` methods once constructed
//!
//! Constructors are crate-private. Hosts obtain races and characters through
//! the factories in [`crate::factories`].

pub mod character;
pub mod race;

pub use character::{Character, CharacterProfile};
pub use race::{Race, RaceProfile};
