//! Property schema: the questions that can be asked.
//!
//! A schema is an ordered list of properties, each with an ordered list of
//! legal values. The engine never interprets property names; it only
//! compares them. Order matters: the optimal strategy breaks ties by
//! property order, then by value order within a property, so two sessions
//! built from the same schema behave identically.

use rustc_hash::FxHashMap;
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::core::{EngineError, EngineResult};

/// One property: a name plus its legal values, in declaration order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyDef {
    pub name: String,
    pub values: Vec<String>,
}

/// The full, ordered property schema shared by every character.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Schema {
    properties: Vec<PropertyDef>,
    index: FxHashMap<String, usize>,
}

impl Schema {
    /// Build a schema from (name, values) pairs in declaration order.
    ///
    /// Rejects duplicate property names, properties with no values, and
    /// duplicate values within a property.
    pub fn new(
        properties: impl IntoIterator<Item = (String, Vec<String>)>,
    ) -> EngineResult<Self> {
        let mut defs = Vec::new();
        let mut index = FxHashMap::default();

        for (name, values) in properties {
            if values.is_empty() {
                return Err(EngineError::MalformedCatalog(format!(
                    "property '{name}' has no values"
                )));
            }
            for (i, value) in values.iter().enumerate() {
                if values[..i].contains(value) {
                    return Err(EngineError::MalformedCatalog(format!(
                        "property '{name}' lists value '{value}' twice"
                    )));
                }
            }
            if index.insert(name.clone(), defs.len()).is_some() {
                return Err(EngineError::MalformedCatalog(format!(
                    "duplicate property '{name}'"
                )));
            }
            defs.push(PropertyDef { name, values });
        }

        Ok(Self {
            properties: defs,
            index,
        })
    }

    /// Properties in declaration order.
    pub fn properties(&self) -> impl Iterator<Item = &PropertyDef> {
        self.properties.iter()
    }

    /// Look up a property by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&PropertyDef> {
        self.index.get(name).map(|&i| &self.properties[i])
    }

    /// Number of properties.
    #[must_use]
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    /// Check if the schema has no properties.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Validate that a (property, value) query lies inside the schema.
    pub fn validate_query(&self, property: &str, value: &str) -> EngineResult<()> {
        let def = self
            .get(property)
            .ok_or_else(|| EngineError::UnknownProperty(property.to_string()))?;
        if !def.values.iter().any(|v| v == value) {
            return Err(EngineError::UnknownValue {
                property: property.to_string(),
                value: value.to_string(),
            });
        }
        Ok(())
    }
}

impl Serialize for Schema {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.properties.len()))?;
        for def in &self.properties {
            map.serialize_entry(&def.name, &def.values)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Schema {
    /// Deserialize from a JSON-style map, preserving document order.
    ///
    /// Serde map visitors receive entries in the order they appear in the
    /// document, so collecting into a `Vec` keeps the on-disk property order
    /// without any special map type.
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct SchemaVisitor;

        impl<'de> Visitor<'de> for SchemaVisitor {
            type Value = Schema;

            fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str("a map of property name to list of values")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Schema, A::Error> {
                let mut entries = Vec::new();
                while let Some((name, values)) =
                    access.next_entry::<String, Vec<String>>()?
                {
                    entries.push((name, values));
                }
                Schema::new(entries).map_err(serde::de::Error::custom)
            }
        }

        deserializer.deserialize_map(SchemaVisitor)
    }
}
