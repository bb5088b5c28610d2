//! The character catalog: the fixed universe for a game.
//!
//! A `Catalog` is the ordered list of characters plus the property schema
//! they are described by. It is validated once at construction and read-only
//! afterwards; both sides of a game share it.

pub mod character;
pub mod schema;

pub use character::{Character, CharacterId, CharacterRecord};
pub use schema::{PropertyDef, Schema};

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::{EngineError, EngineResult, GameRng};

/// On-disk catalog document: `{schema, characters}`.
#[derive(Serialize, Deserialize)]
struct CatalogFile {
    schema: Schema,
    characters: Vec<CharacterRecord>,
}

/// Immutable character catalog with id and name lookup.
///
/// ## Example
///
/// ```
/// use guesswho_engine::catalog::{Catalog, CharacterId};
///
/// let catalog = Catalog::from_json_str(r#"{
///     "schema": {"hair": ["brown", "blond"]},
///     "characters": [
///         {"id": 1, "name": "Alex", "file": "alex.jpg", "properties": {"hair": "brown"}},
///         {"id": 2, "name": "Billie", "file": "billie.jpg", "properties": {"hair": "blond"}}
///     ]
/// }"#).unwrap();
///
/// assert_eq!(catalog.len(), 2);
/// assert_eq!(catalog.get_by_name("Alex").unwrap().id, CharacterId::new(1));
/// ```
#[derive(Clone, Debug)]
pub struct Catalog {
    schema: Schema,
    characters: Vec<Character>,
    by_id: FxHashMap<CharacterId, usize>,
    by_name: FxHashMap<String, usize>,
}

impl Catalog {
    /// Build a catalog from a schema and character records.
    ///
    /// Fails with `MalformedCatalog` if the catalog is empty, ids or names
    /// are not unique, or any record's property mapping does not exactly
    /// cover the schema with legal values.
    pub fn new(schema: Schema, records: Vec<CharacterRecord>) -> EngineResult<Self> {
        if records.is_empty() {
            return Err(EngineError::MalformedCatalog(
                "catalog contains no characters".to_string(),
            ));
        }

        let mut characters = Vec::with_capacity(records.len());
        let mut by_id = FxHashMap::default();
        let mut by_name = FxHashMap::default();

        for record in records {
            let id = CharacterId::new(record.id);
            validate_properties(&schema, &record)?;

            if by_id.insert(id, characters.len()).is_some() {
                return Err(EngineError::MalformedCatalog(format!(
                    "duplicate character id {}",
                    record.id
                )));
            }
            if by_name
                .insert(record.name.clone(), characters.len())
                .is_some()
            {
                return Err(EngineError::MalformedCatalog(format!(
                    "duplicate character name '{}'",
                    record.name
                )));
            }

            characters.push(Character::new(id, record.name, record.file, record.properties));
        }

        log::debug!(
            "catalog built: {} characters, {} properties",
            characters.len(),
            schema.len()
        );

        Ok(Self {
            schema,
            characters,
            by_id,
            by_name,
        })
    }

    /// Load a catalog from a `{schema, characters}` JSON document.
    pub fn from_json_str(json: &str) -> EngineResult<Self> {
        let file: CatalogFile = serde_json::from_str(json)
            .map_err(|e| EngineError::MalformedCatalog(e.to_string()))?;
        Self::new(file.schema, file.characters)
    }

    /// Generate a catalog by rolling a random legal value for every property
    /// of every named character. Intended for demos and tests.
    pub fn generate(schema: Schema, names: &[&str], rng: &mut GameRng) -> EngineResult<Self> {
        let records = names
            .iter()
            .enumerate()
            .map(|(i, name)| {
                let properties = schema
                    .properties()
                    .map(|def| {
                        let pick = rng.gen_range_usize(0..def.values.len());
                        (def.name.clone(), def.values[pick].clone())
                    })
                    .collect();
                CharacterRecord {
                    id: i as u32 + 1,
                    name: (*name).to_string(),
                    file: format!("./images/{name}.jpg"),
                    properties,
                }
            })
            .collect();
        Self::new(schema, records)
    }

    /// The property schema.
    #[must_use]
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// All characters in declaration order.
    #[must_use]
    pub fn characters(&self) -> &[Character] {
        &self.characters
    }

    /// All character ids in declaration order.
    pub fn ids(&self) -> impl Iterator<Item = CharacterId> + '_ {
        self.characters.iter().map(|c| c.id)
    }

    /// Look up a character by id.
    #[must_use]
    pub fn get(&self, id: CharacterId) -> Option<&Character> {
        self.by_id.get(&id).map(|&i| &self.characters[i])
    }

    /// Look up a character by its unique name.
    #[must_use]
    pub fn get_by_name(&self, name: &str) -> Option<&Character> {
        self.by_name.get(name).map(|&i| &self.characters[i])
    }

    /// Number of characters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.characters.len()
    }

    /// Check if the catalog is empty. Construction rejects empty catalogs,
    /// so this is always false for a built catalog.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.characters.is_empty()
    }
}

/// Check that a record's properties exactly cover the schema.
fn validate_properties(schema: &Schema, record: &CharacterRecord) -> EngineResult<()> {
    for def in schema.properties() {
        match record.properties.get(&def.name) {
            None => {
                return Err(EngineError::MalformedCatalog(format!(
                    "character '{}' is missing property '{}'",
                    record.name, def.name
                )))
            }
            Some(value) if !def.values.contains(value) => {
                return Err(EngineError::MalformedCatalog(format!(
                    "character '{}' has illegal value '{}' for property '{}'",
                    record.name, value, def.name
                )))
            }
            Some(_) => {}
        }
    }
    if record.properties.len() != schema.len() {
        let extra = record
            .properties
            .keys()
            .find(|k| schema.get(k).is_none())
            .cloned()
            .unwrap_or_default();
        return Err(EngineError::MalformedCatalog(format!(
            "character '{}' has property '{}' outside the schema",
            record.name, extra
        )));
    }
    Ok(())
}
