//! Move selection for the computer side.
//!
//! Strategies are trait-based, one struct per variant, selected through the
//! `Difficulty` enum:
//! - `OptimalStrategy`: one-ply minimax over discriminating questions.
//! - `RandomStrategy`: uniform question selection with a seeded RNG.

pub mod optimal;
pub mod random;

pub use optimal::OptimalStrategy;
pub use random::RandomStrategy;

use crate::catalog::{Catalog, CharacterId};
use crate::core::{EngineResult, GameRng};
use crate::tracker::CandidateTracker;

/// A single turn action: ask a property question or name the secret.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Move {
    AskQuestion { property: String, value: String },
    GuessCharacter(CharacterId),
}

/// Computer difficulty, mapping to a strategy variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Difficulty {
    /// Minimax question selection.
    Best,
    /// Uniform random questions with occasional guesses.
    Random,
}

impl Difficulty {
    /// Build the strategy this difficulty selects.
    ///
    /// The RNG is only consumed by the `Random` variant; `Best` is fully
    /// deterministic.
    #[must_use]
    pub fn strategy(self, rng: GameRng) -> Box<dyn Strategy> {
        match self {
            Difficulty::Best => Box::new(OptimalStrategy),
            Difficulty::Random => Box::new(RandomStrategy::new(rng)),
        }
    }
}

/// Policy for choosing the computer's next move.
pub trait Strategy: Send + Sync {
    /// Decide the next move for the given candidate set.
    ///
    /// Fails with `NoCandidatesRemaining` if the set is empty; that is a
    /// tracker/oracle inconsistency, not a gameplay situation.
    fn decide(&mut self, catalog: &Catalog, candidates: &CandidateTracker)
        -> EngineResult<Move>;
}
