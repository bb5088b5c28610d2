//! Minimax question selection.
//!
//! One-ply search: for every (property, value) pair, partition the candidate
//! set into matching / non-matching halves and score the pair by the larger
//! half, the size the set could still have after the answer. The pair with
//! the smallest worst case wins. This is not full game-tree search; with
//! catalogs of tens of characters the O(properties × values × candidates)
//! scan is already exact enough to play well.

use crate::catalog::{Catalog, CharacterId};
use crate::core::{EngineError, EngineResult};
use crate::tracker::CandidateTracker;

use super::{Move, Strategy};

/// Information-optimal strategy: minimize the worst-case remaining
/// candidate count.
///
/// Deterministic: ties are broken by schema property order, then by value
/// order within the property.
#[derive(Clone, Copy, Debug, Default)]
pub struct OptimalStrategy;

impl Strategy for OptimalStrategy {
    fn decide(
        &mut self,
        catalog: &Catalog,
        candidates: &CandidateTracker,
    ) -> EngineResult<Move> {
        let total = candidates.size();
        if total == 0 {
            return Err(EngineError::NoCandidatesRemaining);
        }
        if total == 1 {
            return Ok(Move::GuessCharacter(candidates.ids()[0]));
        }

        let mut best: Option<(usize, &str, &str)> = None;
        for def in catalog.schema().properties() {
            for value in &def.values {
                let matching = count_matching(catalog, candidates.ids(), &def.name, value);
                let worst = matching.max(total - matching);
                // Strict < while scanning in schema order keeps ties on the
                // earliest property and value.
                if best.map_or(true, |(w, _, _)| worst < w) {
                    best = Some((worst, &def.name, value));
                }
            }
        }

        match best {
            Some((worst, property, value)) if worst < total => {
                log::debug!(
                    "optimal: asking ({property}, {value}), worst case {worst} of {total}"
                );
                Ok(Move::AskQuestion {
                    property: property.to_string(),
                    value: value.to_string(),
                })
            }
            // No question splits the set: every remaining candidate is
            // property-identical. Guessing is the only way forward.
            _ => Ok(Move::GuessCharacter(candidates.ids()[0])),
        }
    }
}

fn count_matching(
    catalog: &Catalog,
    ids: &[CharacterId],
    property: &str,
    value: &str,
) -> usize {
    ids.iter()
        .filter(|&&id| {
            catalog
                .get(id)
                .map_or(false, |c| c.matches(property, value))
        })
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CharacterRecord, Schema};
    use rustc_hash::FxHashMap;

    fn catalog(records: &[(u32, &str, &[(&str, &str)])], schema: Schema) -> Catalog {
        let records = records
            .iter()
            .map(|(id, name, props)| {
                let properties: FxHashMap<String, String> = props
                    .iter()
                    .map(|(k, v)| (k.to_string(), v.to_string()))
                    .collect();
                CharacterRecord {
                    id: *id,
                    name: name.to_string(),
                    file: String::new(),
                    properties,
                }
            })
            .collect();
        Catalog::new(schema, records).unwrap()
    }

    fn hair_glasses() -> Schema {
        Schema::new([
            (
                "hair".to_string(),
                vec!["brown".to_string(), "blond".to_string()],
            ),
            (
                "glasses".to_string(),
                vec!["no".to_string(), "yes".to_string()],
            ),
        ])
        .unwrap()
    }

    #[test]
    fn test_picks_even_split() {
        let catalog = catalog(
            &[
                (1, "A", &[("hair", "brown"), ("glasses", "no")]),
                (2, "B", &[("hair", "brown"), ("glasses", "yes")]),
                (3, "C", &[("hair", "blond"), ("glasses", "no")]),
                (4, "D", &[("hair", "blond"), ("glasses", "yes")]),
            ],
            hair_glasses(),
        );
        let candidates = CandidateTracker::full(&catalog);

        let mv = OptimalStrategy.decide(&catalog, &candidates).unwrap();
        // Every pair splits 2/2; the tie-break lands on the first one.
        assert_eq!(
            mv,
            Move::AskQuestion {
                property: "hair".to_string(),
                value: "brown".to_string(),
            }
        );
    }

    #[test]
    fn test_prefers_the_better_split() {
        // Hair splits 3/1, glasses splits 2/2: glasses is the safer question.
        let catalog = catalog(
            &[
                (1, "A", &[("hair", "brown"), ("glasses", "no")]),
                (2, "B", &[("hair", "brown"), ("glasses", "yes")]),
                (3, "C", &[("hair", "brown"), ("glasses", "no")]),
                (4, "D", &[("hair", "blond"), ("glasses", "yes")]),
            ],
            hair_glasses(),
        );
        let candidates = CandidateTracker::full(&catalog);

        let mv = OptimalStrategy.decide(&catalog, &candidates).unwrap();
        assert_eq!(
            mv,
            Move::AskQuestion {
                property: "glasses".to_string(),
                value: "no".to_string(),
            }
        );
    }

    #[test]
    fn test_sole_candidate_is_guessed() {
        let catalog = catalog(
            &[(1, "A", &[("hair", "brown"), ("glasses", "no")])],
            hair_glasses(),
        );
        let candidates = CandidateTracker::full(&catalog);

        let mv = OptimalStrategy.decide(&catalog, &candidates).unwrap();
        assert_eq!(mv, Move::GuessCharacter(CharacterId::new(1)));
    }

    #[test]
    fn test_indistinguishable_candidates_force_a_guess() {
        // Twins: no question can tell them apart.
        let catalog = catalog(
            &[
                (1, "A", &[("hair", "brown"), ("glasses", "no")]),
                (2, "B", &[("hair", "brown"), ("glasses", "no")]),
            ],
            hair_glasses(),
        );
        let candidates = CandidateTracker::full(&catalog);

        let mv = OptimalStrategy.decide(&catalog, &candidates).unwrap();
        assert_eq!(mv, Move::GuessCharacter(CharacterId::new(1)));
    }

    #[test]
    fn test_empty_candidates_rejected() {
        let catalog = catalog(
            &[(1, "A", &[("hair", "brown"), ("glasses", "no")])],
            hair_glasses(),
        );
        let mut candidates = CandidateTracker::full(&catalog);
        candidates.eliminate(CharacterId::new(1));

        assert_eq!(
            OptimalStrategy.decide(&catalog, &candidates),
            Err(EngineError::NoCandidatesRemaining)
        );
    }
}
