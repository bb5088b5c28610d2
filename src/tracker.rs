//! Candidate tracking: which characters could still be the secret.
//!
//! Each side keeps a `CandidateTracker` over the opponent's secret. Answers
//! filter it, wrong guesses eliminate single entries. The set only ever
//! shrinks, and under truthful answers the real secret never leaves it.

use crate::catalog::{Catalog, CharacterId};
use crate::core::EngineResult;

/// The subset of the catalog still consistent with every answer received,
/// in catalog order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CandidateTracker {
    remaining: Vec<CharacterId>,
}

impl CandidateTracker {
    /// Start from the full catalog.
    #[must_use]
    pub fn full(catalog: &Catalog) -> Self {
        Self {
            remaining: catalog.ids().collect(),
        }
    }

    /// Retain exactly the characters whose answer to `(property, value)`
    /// equals `answer`. Applying the same filter twice is a no-op; removed
    /// characters are never re-added.
    pub fn apply_answer(
        &mut self,
        catalog: &Catalog,
        property: &str,
        value: &str,
        answer: bool,
    ) -> EngineResult<()> {
        catalog.schema().validate_query(property, value)?;
        self.remaining.retain(|&id| {
            catalog
                .get(id)
                .map_or(false, |c| c.matches(property, value) == answer)
        });
        Ok(())
    }

    /// Remove one specific character, after a wrong guess.
    pub fn eliminate(&mut self, id: CharacterId) {
        self.remaining.retain(|&c| c != id);
    }

    /// Number of candidates left.
    #[must_use]
    pub fn size(&self) -> usize {
        self.remaining.len()
    }

    /// Check whether a character is still a candidate.
    #[must_use]
    pub fn contains(&self, id: CharacterId) -> bool {
        self.remaining.contains(&id)
    }

    /// Check whether no candidates remain.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.remaining.is_empty()
    }

    /// Remaining candidate ids in catalog order.
    #[must_use]
    pub fn ids(&self) -> &[CharacterId] {
        &self.remaining
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CharacterRecord, Schema};
    use rustc_hash::FxHashMap;

    fn catalog() -> Catalog {
        let schema = Schema::new([
            (
                "hair".to_string(),
                vec!["brown".to_string(), "blond".to_string()],
            ),
            (
                "glasses".to_string(),
                vec!["no".to_string(), "yes".to_string()],
            ),
        ])
        .unwrap();

        let record = |id: u32, name: &str, hair: &str, glasses: &str| {
            let mut properties = FxHashMap::default();
            properties.insert("hair".to_string(), hair.to_string());
            properties.insert("glasses".to_string(), glasses.to_string());
            CharacterRecord {
                id,
                name: name.to_string(),
                file: String::new(),
                properties,
            }
        };

        Catalog::new(
            schema,
            vec![
                record(1, "A", "brown", "no"),
                record(2, "B", "brown", "yes"),
                record(3, "C", "blond", "no"),
                record(4, "D", "blond", "yes"),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_filter_on_answer() {
        let catalog = catalog();
        let mut tracker = CandidateTracker::full(&catalog);
        assert_eq!(tracker.size(), 4);

        // "hair is brown" answered no: only blond characters remain.
        tracker.apply_answer(&catalog, "hair", "brown", false).unwrap();
        assert_eq!(tracker.size(), 2);
        assert!(!tracker.contains(CharacterId::new(1)));
        assert!(!tracker.contains(CharacterId::new(2)));
        assert!(tracker.contains(CharacterId::new(3)));
        assert!(tracker.contains(CharacterId::new(4)));
    }

    #[test]
    fn test_filter_is_idempotent() {
        let catalog = catalog();
        let mut tracker = CandidateTracker::full(&catalog);

        tracker.apply_answer(&catalog, "hair", "brown", true).unwrap();
        let after_first = tracker.clone();
        tracker.apply_answer(&catalog, "hair", "brown", true).unwrap();
        assert_eq!(tracker, after_first);
    }

    #[test]
    fn test_eliminate_single_character() {
        let catalog = catalog();
        let mut tracker = CandidateTracker::full(&catalog);

        tracker.eliminate(CharacterId::new(3));
        assert_eq!(tracker.size(), 3);
        assert!(!tracker.contains(CharacterId::new(3)));

        // Eliminating again is a no-op.
        tracker.eliminate(CharacterId::new(3));
        assert_eq!(tracker.size(), 3);
    }

    #[test]
    fn test_invalid_query_leaves_state_untouched() {
        let catalog = catalog();
        let mut tracker = CandidateTracker::full(&catalog);

        assert!(tracker.apply_answer(&catalog, "height", "tall", true).is_err());
        assert_eq!(tracker.size(), 4);
    }

    #[test]
    fn test_catalog_order_is_kept() {
        let catalog = catalog();
        let mut tracker = CandidateTracker::full(&catalog);

        tracker.apply_answer(&catalog, "glasses", "no", true).unwrap();
        let ids: Vec<u32> = tracker.ids().iter().map(|id| id.raw()).collect();
        assert_eq!(ids, vec![1, 3]);
    }
}
