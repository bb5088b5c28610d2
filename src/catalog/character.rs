//! Character definitions - static character data.
//!
//! A `Character` is one entry in the catalog: an id, a display name, an
//! opaque image reference, and one value for every schema property.
//! `CharacterRecord` is the serde-facing shape of the same data as it
//! appears in catalog files; records are validated against the schema when
//! the catalog is built.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Unique identifier for a character in a catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CharacterId(pub u32);

impl CharacterId {
    /// Create a new character ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CharacterId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Character({})", self.0)
    }
}

/// On-disk character record: `{id, name, file, properties}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterRecord {
    pub id: u32,
    pub name: String,
    /// Image path, opaque to the engine.
    pub file: String,
    pub properties: FxHashMap<String, String>,
}

/// A validated catalog character.
///
/// The property mapping is guaranteed (by catalog construction) to cover the
/// schema exactly, with legal values only.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Character {
    pub id: CharacterId,
    pub name: String,
    /// Image path, opaque to the engine.
    pub file: String,
    properties: FxHashMap<String, String>,
}

impl Character {
    pub(crate) fn new(
        id: CharacterId,
        name: String,
        file: String,
        properties: FxHashMap<String, String>,
    ) -> Self {
        Self {
            id,
            name,
            file,
            properties,
        }
    }

    /// This character's value for a property, if the property exists.
    #[must_use]
    pub fn value(&self, property: &str) -> Option<&str> {
        self.properties.get(property).map(String::as_str)
    }

    /// Check whether this character matches a (property, value) query.
    #[must_use]
    pub fn matches(&self, property: &str, value: &str) -> bool {
        self.value(property) == Some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_lookup() {
        let mut props = FxHashMap::default();
        props.insert("hair".to_string(), "brown".to_string());

        let c = Character::new(
            CharacterId::new(1),
            "Alex".to_string(),
            "./images/alex.jpg".to_string(),
            props,
        );

        assert_eq!(c.value("hair"), Some("brown"));
        assert_eq!(c.value("glasses"), None);
        assert!(c.matches("hair", "brown"));
        assert!(!c.matches("hair", "blond"));
    }
}
