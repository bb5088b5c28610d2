//! Random question selection, the easy opponent.

use crate::catalog::Catalog;
use crate::core::{EngineError, EngineResult, GameRng};
use crate::tracker::CandidateTracker;

use super::{Move, Strategy};

/// Probability of guessing instead of asking while more than one candidate
/// remains. Low enough that the easy opponent stays beatable.
const GUESS_PROBABILITY: f64 = 0.15;

/// Uniformly random strategy.
///
/// Asks a uniformly random (property, value) question each turn. When one
/// candidate remains it guesses it; before that it occasionally gambles on a
/// random remaining candidate. All randomness comes from the injected
/// seeded RNG, so play is reproducible.
#[derive(Clone, Debug)]
pub struct RandomStrategy {
    rng: GameRng,
    guess_probability: f64,
}

impl RandomStrategy {
    /// Create a random strategy with the default exploration probability.
    #[must_use]
    pub fn new(rng: GameRng) -> Self {
        Self {
            rng,
            guess_probability: GUESS_PROBABILITY,
        }
    }

    /// Override the probability of gambling on a guess.
    #[must_use]
    pub fn with_guess_probability(mut self, probability: f64) -> Self {
        self.guess_probability = probability;
        self
    }
}

impl Strategy for RandomStrategy {
    fn decide(
        &mut self,
        catalog: &Catalog,
        candidates: &CandidateTracker,
    ) -> EngineResult<Move> {
        if candidates.is_empty() {
            return Err(EngineError::NoCandidatesRemaining);
        }
        if candidates.size() == 1 {
            return Ok(Move::GuessCharacter(candidates.ids()[0]));
        }

        if catalog.schema().is_empty() || self.rng.gen_bool(self.guess_probability) {
            let id = self
                .rng
                .choose(candidates.ids())
                .copied()
                .ok_or(EngineError::NoCandidatesRemaining)?;
            return Ok(Move::GuessCharacter(id));
        }

        let property_idx = self.rng.gen_range_usize(0..catalog.schema().len());
        let def = catalog
            .schema()
            .properties()
            .nth(property_idx)
            .ok_or(EngineError::NoCandidatesRemaining)?;
        let value_idx = self.rng.gen_range_usize(0..def.values.len());

        Ok(Move::AskQuestion {
            property: def.name.clone(),
            value: def.values[value_idx].clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CharacterId, CharacterRecord, Schema};
    use rustc_hash::FxHashMap;

    fn catalog() -> Catalog {
        let schema = Schema::new([(
            "hair".to_string(),
            vec!["brown".to_string(), "blond".to_string()],
        )])
        .unwrap();
        let record = |id: u32, name: &str, hair: &str| {
            let mut properties = FxHashMap::default();
            properties.insert("hair".to_string(), hair.to_string());
            CharacterRecord {
                id,
                name: name.to_string(),
                file: String::new(),
                properties,
            }
        };
        Catalog::new(
            schema,
            vec![record(1, "A", "brown"), record(2, "B", "blond")],
        )
        .unwrap()
    }

    #[test]
    fn test_same_seed_same_moves() {
        let catalog = catalog();
        let candidates = CandidateTracker::full(&catalog);

        let mut a = RandomStrategy::new(GameRng::new(9));
        let mut b = RandomStrategy::new(GameRng::new(9));

        for _ in 0..20 {
            assert_eq!(
                a.decide(&catalog, &candidates).unwrap(),
                b.decide(&catalog, &candidates).unwrap()
            );
        }
    }

    #[test]
    fn test_moves_stay_inside_schema() {
        let catalog = catalog();
        let candidates = CandidateTracker::full(&catalog);
        let mut strategy = RandomStrategy::new(GameRng::new(3));

        for _ in 0..50 {
            match strategy.decide(&catalog, &candidates).unwrap() {
                Move::AskQuestion { property, value } => {
                    assert!(catalog.schema().validate_query(&property, &value).is_ok());
                }
                Move::GuessCharacter(id) => assert!(candidates.contains(id)),
            }
        }
    }

    #[test]
    fn test_sole_candidate_is_guessed() {
        let catalog = catalog();
        let mut candidates = CandidateTracker::full(&catalog);
        candidates.eliminate(CharacterId::new(2));

        let mut strategy = RandomStrategy::new(GameRng::new(5));
        assert_eq!(
            strategy.decide(&catalog, &candidates).unwrap(),
            Move::GuessCharacter(CharacterId::new(1))
        );
    }

    #[test]
    fn test_empty_candidates_rejected() {
        let catalog = catalog();
        let mut candidates = CandidateTracker::full(&catalog);
        candidates.eliminate(CharacterId::new(1));
        candidates.eliminate(CharacterId::new(2));

        let mut strategy = RandomStrategy::new(GameRng::new(5));
        assert_eq!(
            strategy.decide(&catalog, &candidates),
            Err(EngineError::NoCandidatesRemaining)
        );
    }

    #[test]
    fn test_guess_probability_one_always_guesses() {
        let catalog = catalog();
        let candidates = CandidateTracker::full(&catalog);
        let mut strategy =
            RandomStrategy::new(GameRng::new(1)).with_guess_probability(1.0);

        for _ in 0..10 {
            assert!(matches!(
                strategy.decide(&catalog, &candidates).unwrap(),
                Move::GuessCharacter(_)
            ));
        }
    }
}
