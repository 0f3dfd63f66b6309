//! Error types for the domain layer
//!
//! Entities and value objects fail with [`ValidationError`]. Factories wrap that
//! error in a [`FactoryError`] naming the operation that was attempted, so callers
//! see which preset failed while the underlying validation failure stays reachable
//! through `source()`.

use thiserror::Error;

use crate::value_objects::Attribute;

/// A field failed its declared constraint during construction.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A string field is shorter or longer than allowed
    #[error("{field} must be between {min} and {max} characters, got {actual}")]
    Length {
        field: &'static str,
        min: usize,
        max: usize,
        actual: usize,
    },

    /// An attribute map does not score every recognized attribute
    #[error("Attribute map is missing a score for {0}")]
    MissingAttribute(Attribute),

    /// An attribute was scored more than once
    #[error("Attribute map scores {0} more than once")]
    DuplicateAttribute(Attribute),

    /// An attribute name is not one of the recognized seven
    #[error("Unknown attribute: {0}")]
    UnknownAttribute(String),

    /// A preset name did not match any known preset
    #[error("Unknown {kind} preset: {name}")]
    UnknownPreset { kind: &'static str, name: String },
}

impl ValidationError {
    /// Create a length violation for `field`.
    pub fn length(field: &'static str, min: usize, max: usize, actual: usize) -> Self {
        Self::Length {
            field,
            min,
            max,
            actual,
        }
    }

    /// Create an unknown preset error
    pub fn unknown_preset(kind: &'static str, name: impl Into<String>) -> Self {
        Self::UnknownPreset {
            kind,
            name: name.into(),
        }
    }
}

/// A factory could not build the requested entity.
///
/// `operation` names what was being created: the generic entry points use
/// `"race"` and `"character"`, presets use their own name (`"elf"`, `"warrior"`).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Error creating {operation}: {source}")]
pub struct FactoryError {
    operation: &'static str,
    #[source]
    source: ValidationError,
}

impl FactoryError {
    /// Wrap `source` as a failure of `operation`.
    pub fn new(operation: &'static str, source: ValidationError) -> Self {
        Self { operation, source }
    }

    /// Relabel the error with the operation that was actually requested.
    ///
    /// Presets delegate to the generic entry point, so they call this instead
    /// of wrapping a second time.
    pub fn during(self, operation: &'static str) -> Self {
        Self { operation, ..self }
    }

    /// The operation that failed.
    pub fn operation(&self) -> &'static str {
        self.operation
    }

    /// The underlying validation failure.
    pub fn validation(&self) -> &ValidationError {
        &self.source
    }
}
