//! Race factory and race presets.

use std::sync::Arc;

use crate::aggregates::Race;
use crate::error::FactoryError;
use crate::factories::presets::RacePreset;
use crate::factories::RaceFactoryPort;
use crate::value_objects::AttributeMap;

const OPERATION: &str = "race";

/// The standard race factory.
///
/// # Example
///
/// ```
/// use anvil_domain::value_objects::AttributeMap;
/// use anvil_domain::{RaceFactory, RaceFactoryPort, RaceProfile};
///
/// let factory = RaceFactory::new();
/// let dwarf = factory
///     .create_race("Dwarf", "Stout miners of the deep halls", AttributeMap::uniform(11))
///     .unwrap();
///
/// assert_eq!(dwarf.name(), "Dwarf");
/// assert!(factory.create_race("Dw", "Too short a name", AttributeMap::uniform(11)).is_err());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct RaceFactory;

impl RaceFactory {
    /// Create a race factory.
    pub fn new() -> Self {
        Self
    }
}

impl RaceFactoryPort for RaceFactory {
    fn create_race(
        &self,
        name: &str,
        description: &str,
        base_attributes: AttributeMap,
    ) -> Result<Arc<Race>, FactoryError> {
        let race = Race::new(name, description, base_attributes).map_err(|err| {
            tracing::warn!(race = %name, error = %err, "Race rejected");
            FactoryError::new(OPERATION, err)
        })?;

        tracing::debug!(race = %race.race_name(), "Race created");
        Ok(Arc::new(race))
    }
}

/// Named race presets, available on every [`RaceFactoryPort`].
///
/// Presets pass hard-coded values to [`RaceFactoryPort::create_race`] and
/// relabel any error with the preset name.
pub trait RacePresets: RaceFactoryPort {
    /// Create a race from a named preset.
    fn create_preset(&self, preset: RacePreset) -> Result<Arc<Race>, FactoryError> {
        self.create_race(preset.name(), preset.description(), preset.attributes())
            .map_err(|err| err.during(preset.as_str()))
    }

    /// Create a human: balanced, 10 in every attribute.
    fn create_human(&self) -> Result<Arc<Race>, FactoryError> {
        self.create_preset(RacePreset::Human)
    }

    /// Create an elf: agile and intelligent, physically frail.
    fn create_elf(&self) -> Result<Arc<Race>, FactoryError> {
        self.create_preset(RacePreset::Elf)
    }
}

impl<T: RaceFactoryPort + ?Sized> RacePresets for T {}
