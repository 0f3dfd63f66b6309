//! Attribute and AttributeMap - the seven ability scores shared by races and characters
//!
//! `AttributeMap` is complete by construction: every recognized attribute has
//! exactly one score. String-keyed input is accepted through
//! [`AttributeMap::try_from_named`], which rejects unknown, duplicate and
//! missing names.

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;

/// Number of recognized attributes
pub const ATTRIBUTE_COUNT: usize = 7;

/// A recognized ability score name.
///
/// Variants are declared in canonical order, which is the order used by
/// [`AttributeMap::from_ordered`] and [`AttributeMap::iter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Attribute {
    /// Physical power
    Strength,
    /// Speed and nimbleness
    Agility,
    /// Reasoning and memory
    Intelligence,
    /// Perception and insight
    Wisdom,
    /// Fine motor control
    Dexterity,
    /// Endurance and health
    Constitution,
    /// Force of personality
    Charisma,
}

impl Attribute {
    /// Returns the lowercase key (e.g., "strength").
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Strength => "strength",
            Self::Agility => "agility",
            Self::Intelligence => "intelligence",
            Self::Wisdom => "wisdom",
            Self::Dexterity => "dexterity",
            Self::Constitution => "constitution",
            Self::Charisma => "charisma",
        }
    }

    /// Returns the capitalized name (e.g., "Strength").
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Strength => "Strength",
            Self::Agility => "Agility",
            Self::Intelligence => "Intelligence",
            Self::Wisdom => "Wisdom",
            Self::Dexterity => "Dexterity",
            Self::Constitution => "Constitution",
            Self::Charisma => "Charisma",
        }
    }

    /// Returns every attribute in canonical order.
    pub fn all() -> [Attribute; ATTRIBUTE_COUNT] {
        [
            Self::Strength,
            Self::Agility,
            Self::Intelligence,
            Self::Wisdom,
            Self::Dexterity,
            Self::Constitution,
            Self::Charisma,
        ]
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Attribute {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "strength" => Ok(Self::Strength),
            "agility" => Ok(Self::Agility),
            "intelligence" => Ok(Self::Intelligence),
            "wisdom" => Ok(Self::Wisdom),
            "dexterity" => Ok(Self::Dexterity),
            "constitution" => Ok(Self::Constitution),
            "charisma" => Ok(Self::Charisma),
            _ => Err(ValidationError::UnknownAttribute(s.to_string())),
        }
    }
}

// ============================================================================
// AttributeMap
// ============================================================================

/// A complete table of attribute scores.
///
/// Immutable once built. Accessors hand out copies or shared borrows, so a
/// holder of `&AttributeMap` can never change the scores of the entity that
/// owns it.
///
/// # Example
///
/// ```
/// use anvil_domain::value_objects::{Attribute, AttributeMap};
///
/// let scores = AttributeMap::try_from_named([
///     ("strength", 8),
///     ("agility", 12),
///     ("intelligence", 12),
///     ("wisdom", 10),
///     ("dexterity", 12),
///     ("constitution", 8),
///     ("charisma", 8),
/// ])
/// .unwrap();
///
/// assert_eq!(scores.get(Attribute::Agility), 12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "BTreeMap<String, i32>")]
pub struct AttributeMap {
    scores: [i32; ATTRIBUTE_COUNT],
}

impl AttributeMap {
    /// Build a map from scores listed in canonical order: strength, agility,
    /// intelligence, wisdom, dexterity, constitution, charisma.
    pub const fn from_ordered(scores: [i32; ATTRIBUTE_COUNT]) -> Self {
        Self { scores }
    }

    /// Build a map where every attribute has the same score.
    pub const fn uniform(score: i32) -> Self {
        Self {
            scores: [score; ATTRIBUTE_COUNT],
        }
    }

    /// Build a map from `(attribute, score)` pairs.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::DuplicateAttribute` if an attribute appears
    /// twice, or `ValidationError::MissingAttribute` for the first attribute
    /// (in canonical order) that has no score.
    pub fn try_from_scores(
        scores: impl IntoIterator<Item = (Attribute, i32)>,
    ) -> Result<Self, ValidationError> {
        let mut slots: [Option<i32>; ATTRIBUTE_COUNT] = [None; ATTRIBUTE_COUNT];
        for (attribute, score) in scores {
            let slot = &mut slots[attribute.index()];
            if slot.is_some() {
                return Err(ValidationError::DuplicateAttribute(attribute));
            }
            *slot = Some(score);
        }

        let mut complete = [0; ATTRIBUTE_COUNT];
        for attribute in Attribute::all() {
            complete[attribute.index()] = slots[attribute.index()]
                .ok_or(ValidationError::MissingAttribute(attribute))?;
        }
        Ok(Self { scores: complete })
    }

    /// Build a map from string-keyed pairs such as `("strength", 10)`.
    ///
    /// Names are matched case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::UnknownAttribute` for an unrecognized name,
    /// plus the errors of [`AttributeMap::try_from_scores`].
    pub fn try_from_named<K: AsRef<str>>(
        scores: impl IntoIterator<Item = (K, i32)>,
    ) -> Result<Self, ValidationError> {
        let parsed = scores
            .into_iter()
            .map(|(name, score)| {
                name.as_ref()
                    .parse::<Attribute>()
                    .map(|attribute| (attribute, score))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::try_from_scores(parsed)
    }

    /// Returns the score for `attribute`.
    #[inline]
    pub fn get(&self, attribute: Attribute) -> i32 {
        self.scores[attribute.index()]
    }

    /// Iterate over `(attribute, score)` pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (Attribute, i32)> + '_ {
        Attribute::all()
            .into_iter()
            .map(move |attribute| (attribute, self.get(attribute)))
    }

    /// Returns an owned, string-keyed copy of the scores.
    ///
    /// The copy is detached: changing it has no effect on this map.
    pub fn to_named_map(&self) -> BTreeMap<String, i32> {
        self.iter()
            .map(|(attribute, score)| (attribute.as_str().to_string(), score))
            .collect()
    }
}

impl TryFrom<BTreeMap<String, i32>> for AttributeMap {
    type Error = ValidationError;

    fn try_from(map: BTreeMap<String, i32>) -> Result<Self, Self::Error> {
        Self::try_from_named(map)
    }
}

impl From<AttributeMap> for BTreeMap<String, i32> {
    fn from(map: AttributeMap) -> Self {
        map.to_named_map()
    }
}

impl<'de> Deserialize<'de> for AttributeMap {
    /// Reads every entry of the object, repeats included, so duplicate keys
    /// fail the same way they do in [`AttributeMap::try_from_named`].
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::{self, MapAccess, Visitor};

        struct AttributeMapVisitor;

        impl<'de> Visitor<'de> for AttributeMapVisitor {
            type Value = AttributeMap;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a map of attribute names to integer scores")
            }

            fn visit_map<M>(self, mut map: M) -> Result<Self::Value, M::Error>
            where
                M: MapAccess<'de>,
            {
                let mut entries: Vec<(String, i32)> = Vec::with_capacity(ATTRIBUTE_COUNT);
                while let Some(entry) = map.next_entry::<String, i32>()? {
                    entries.push(entry);
                }
                AttributeMap::try_from_named(entries).map_err(de::Error::custom)
            }
        }

        deserializer.deserialize_map(AttributeMapVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn elf_pairs() -> Vec<(&'static str, i32)> {
        vec![
            ("strength", 8),
            ("agility", 12),
            ("intelligence", 12),
            ("wisdom", 10),
            ("dexterity", 12),
            ("constitution", 8),
            ("charisma", 8),
        ]
    }

    #[test]
    fn test_attribute_from_str_is_case_insensitive() {
        assert_eq!(Attribute::from_str("strength"), Ok(Attribute::Strength));
        assert_eq!(Attribute::from_str("Wisdom"), Ok(Attribute::Wisdom));
        assert_eq!(Attribute::from_str("CHARISMA"), Ok(Attribute::Charisma));
        assert_eq!(
            Attribute::from_str("luck"),
            Err(ValidationError::UnknownAttribute("luck".to_string()))
        );
    }

    #[test]
    fn test_attribute_display_and_names() {
        assert_eq!(Attribute::Dexterity.to_string(), "dexterity");
        assert_eq!(Attribute::Dexterity.display_name(), "Dexterity");
        assert_eq!(Attribute::all().len(), 7);
    }

    #[test]
    fn test_from_ordered_follows_canonical_order() {
        let map = AttributeMap::from_ordered([1, 2, 3, 4, 5, 6, 7]);
        assert_eq!(map.get(Attribute::Strength), 1);
        assert_eq!(map.get(Attribute::Agility), 2);
        assert_eq!(map.get(Attribute::Intelligence), 3);
        assert_eq!(map.get(Attribute::Wisdom), 4);
        assert_eq!(map.get(Attribute::Dexterity), 5);
        assert_eq!(map.get(Attribute::Constitution), 6);
        assert_eq!(map.get(Attribute::Charisma), 7);
    }

    #[test]
    fn test_uniform() {
        let map = AttributeMap::uniform(10);
        assert!(map.iter().all(|(_, score)| score == 10));
    }

    #[test]
    fn test_try_from_named_accepts_any_order() {
        let mut pairs = elf_pairs();
        pairs.reverse();
        let map = AttributeMap::try_from_named(pairs).unwrap();
        assert_eq!(map, AttributeMap::from_ordered([8, 12, 12, 10, 12, 8, 8]));
    }

    #[test]
    fn test_try_from_named_rejects_missing_key() {
        let pairs: Vec<_> = elf_pairs()
            .into_iter()
            .filter(|(name, _)| *name != "wisdom")
            .collect();
        assert_eq!(
            AttributeMap::try_from_named(pairs),
            Err(ValidationError::MissingAttribute(Attribute::Wisdom))
        );
    }

    #[test]
    fn test_try_from_named_rejects_unknown_key() {
        let mut pairs = elf_pairs();
        pairs.push(("luck", 3));
        assert_eq!(
            AttributeMap::try_from_named(pairs),
            Err(ValidationError::UnknownAttribute("luck".to_string()))
        );
    }

    #[test]
    fn test_try_from_scores_rejects_duplicate() {
        let mut scores: Vec<_> = Attribute::all().into_iter().map(|a| (a, 10)).collect();
        scores.push((Attribute::Agility, 11));
        assert_eq!(
            AttributeMap::try_from_scores(scores),
            Err(ValidationError::DuplicateAttribute(Attribute::Agility))
        );
    }

    #[test]
    fn test_try_from_named_rejects_key_repeated_in_other_case() {
        let mut pairs = elf_pairs();
        pairs.insert(0, ("Strength", 1));
        assert_eq!(
            AttributeMap::try_from_named(pairs),
            Err(ValidationError::DuplicateAttribute(Attribute::Strength))
        );
    }

    #[test]
    fn test_try_from_scores_rejects_empty() {
        assert_eq!(
            AttributeMap::try_from_scores(Vec::<(Attribute, i32)>::new()),
            Err(ValidationError::MissingAttribute(Attribute::Strength))
        );
    }

    #[test]
    fn test_named_copy_is_detached() {
        let map = AttributeMap::uniform(10);
        let mut copy = map.to_named_map();
        copy.insert("strength".to_string(), 99);
        copy.remove("charisma");

        assert_eq!(map.get(Attribute::Strength), 10);
        assert_eq!(map.to_named_map().len(), 7);
        assert_eq!(map.to_named_map().get("charisma"), Some(&10));
    }

    #[test]
    fn test_serde_uses_named_keys() {
        let map = AttributeMap::from_ordered([15, 9, 8, 9, 11, 14, 4]);
        let json = serde_json::to_value(map).unwrap();
        assert_eq!(json["strength"], 15);
        assert_eq!(json["charisma"], 4);

        let parsed: AttributeMap = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, map);
    }

    #[test]
    fn test_serde_rejects_repeated_key() {
        let json = r#"{"strength": 1, "strength": 2, "agility": 10, "intelligence": 10,
            "wisdom": 10, "dexterity": 10, "constitution": 10, "charisma": 10}"#;
        let err = serde_json::from_str::<AttributeMap>(json).unwrap_err();
        assert!(err.to_string().contains("scores strength more than once"));
    }

    #[test]
    fn test_serde_rejects_key_repeated_in_other_case() {
        let json = r#"{"Strength": 1, "strength": 2, "agility": 10, "intelligence": 10,
            "wisdom": 10, "dexterity": 10, "constitution": 10, "charisma": 10}"#;
        let result: Result<AttributeMap, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_serde_rejects_incomplete_map() {
        let json = r#"{"strength": 10, "agility": 10}"#;
        let result: Result<AttributeMap, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }
}
