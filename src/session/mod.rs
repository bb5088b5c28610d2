//! Game session: the playable composition of catalog, trackers, turn
//! protocol, and strategy.
//!
//! A `GameSession` is an explicit value owned by the caller, typically one
//! per active UI session. It exposes the full move API; the presentation
//! layer only relays its results. Overlapping requests (a double-clicked
//! button) are defended against purely through state checks
//! (`AlreadyActedThisTurn`, `GameAlreadyOver`): the model is single-threaded
//! and synchronous, so there is nothing to lock.

pub mod turn;

pub use turn::{Phase, TurnState};

use crate::catalog::{Catalog, CharacterId};
use crate::core::{EngineError, EngineResult, GameRng, Side};
use crate::oracle;
use crate::strategy::{Difficulty, Move, Strategy};
use crate::tracker::CandidateTracker;

/// Result of an `ask_question` call.
///
/// `ok = false` means the side had already spent its action this turn; the
/// question was not answered and no state changed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Asked {
    pub ok: bool,
    pub answer: bool,
}

/// Result of a `guess_character` call, with the same `ok` contract.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Guessed {
    pub ok: bool,
    pub correct: bool,
}

/// What the computer did on its turn, for the caller to relay.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ComputerMove {
    Asked {
        property: String,
        value: String,
        answer: bool,
    },
    Guessed {
        character: String,
        correct: bool,
    },
}

impl std::fmt::Display for ComputerMove {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ComputerMove::Asked {
                property,
                value,
                answer,
            } => write!(
                f,
                "asked whether {property} is {value}: {}",
                if *answer { "yes" } else { "no" }
            ),
            ComputerMove::Guessed { character, correct } => write!(
                f,
                "guessed {character}: {}",
                if *correct { "correct" } else { "wrong" }
            ),
        }
    }
}

/// Result of `end_turn`: whether the game finished on the computer's move,
/// and what that move was.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TurnReport {
    pub finished: bool,
    pub computer_move: ComputerMove,
}

/// One playable game.
///
/// Owns one catalog, two secrets, two candidate trackers, the turn state,
/// the phase, and the computer's strategy. Constructed at the start of play
/// and rebuilt wholesale by `reset`; no partial state survives.
pub struct GameSession {
    catalog: Catalog,
    difficulty: Difficulty,
    strategy: Box<dyn Strategy>,
    rng: GameRng,
    /// Secret each side protects: the human guesses the computer's, the
    /// computer guesses the human's.
    human_secret: CharacterId,
    computer_secret: CharacterId,
    /// Each side's view of the *opponent's* secret.
    human_candidates: CandidateTracker,
    computer_candidates: CandidateTracker,
    turn: TurnState,
    phase: Phase,
}

impl GameSession {
    /// Start a session over a validated catalog.
    ///
    /// Both secrets are drawn uniformly with the seeded RNG so the oracle
    /// can always answer; `set_computer_secret` overrides the computer's
    /// before play. The human side acts first.
    #[must_use]
    pub fn new(catalog: Catalog, difficulty: Difficulty, seed: u64) -> Self {
        let mut rng = GameRng::new(seed);
        let human_secret = draw_secret(&catalog, &mut rng);
        let computer_secret = draw_secret(&catalog, &mut rng);
        let strategy = difficulty.strategy(rng.fork());

        log::debug!("session start: human protects {human_secret}, computer protects {computer_secret}");

        Self {
            human_candidates: CandidateTracker::full(&catalog),
            computer_candidates: CandidateTracker::full(&catalog),
            catalog,
            difficulty,
            strategy,
            rng,
            human_secret,
            computer_secret,
            turn: TurnState::new(Side::Human),
            phase: Phase::InProgress,
        }
    }

    // === Accessors ===

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn turn(&self) -> &TurnState {
        &self.turn
    }

    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// The secret a side is protecting.
    #[must_use]
    pub fn secret_of(&self, side: Side) -> CharacterId {
        match side {
            Side::Human => self.human_secret,
            Side::Computer => self.computer_secret,
        }
    }

    /// A side's remaining candidates for the opponent's secret.
    #[must_use]
    pub fn candidates(&self, side: Side) -> &CandidateTracker {
        match side {
            Side::Human => &self.human_candidates,
            Side::Computer => &self.computer_candidates,
        }
    }

    // === Setup ===

    /// Select the computer's strategy variant.
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
        self.strategy = difficulty.strategy(self.rng.fork());
        log::info!("computer difficulty set to {difficulty:?}");
    }

    /// Assign the computer's protected identity by character name.
    ///
    /// The original game exposes only this direction: the human picks the
    /// computer's secret; the human's own secret stays engine-assigned.
    pub fn set_computer_secret(&mut self, name: &str) -> EngineResult<()> {
        self.ensure_in_progress()?;
        let id = self
            .catalog
            .get_by_name(name)
            .ok_or_else(|| EngineError::UnknownCharacter(name.to_string()))?
            .id;
        self.computer_secret = id;
        log::info!("computer secret set to '{name}'");
        Ok(())
    }

    // === Moves ===

    /// Ask whether the opponent's secret has `value` for `property`.
    ///
    /// Returns `ok = false` (state untouched) if the acting side already
    /// spent its action this turn. Fails for queries outside the schema or
    /// after a terminal phase.
    pub fn ask_question(&mut self, property: &str, value: &str) -> EngineResult<Asked> {
        self.ensure_in_progress()?;

        let side = self.turn.active();
        let secret = self.opponent_secret(side)?;
        let answer = oracle::answer(self.catalog.schema(), secret, property, value)?;

        if self.turn.begin_action().is_err() {
            return Ok(Asked {
                ok: false,
                answer: false,
            });
        }

        // Matched inline so the tracker borrow stays disjoint from the
        // catalog borrow. The query was validated by the oracle above, so
        // re-validation inside apply_answer cannot fail.
        let tracker = match side {
            Side::Human => &mut self.human_candidates,
            Side::Computer => &mut self.computer_candidates,
        };
        let _ = tracker.apply_answer(&self.catalog, property, value, answer);
        debug_assert!(
            self.candidates(side).contains(self.secret_of(side.opponent())),
            "truthful answer removed the real secret"
        );

        log::info!("{side} asked ({property}, {value}): {answer}");
        Ok(Asked { ok: true, answer })
    }

    /// Guess the opponent's secret by character name.
    ///
    /// A correct guess ends the game immediately with `Won` for the acting
    /// side; a wrong guess eliminates the character from the acting side's
    /// candidates. Same `ok` contract as `ask_question`.
    pub fn guess_character(&mut self, name: &str) -> EngineResult<Guessed> {
        self.ensure_in_progress()?;
        let id = self
            .catalog
            .get_by_name(name)
            .ok_or_else(|| EngineError::UnknownCharacter(name.to_string()))?
            .id;
        self.guess_by_id(id)
    }

    fn guess_by_id(&mut self, id: CharacterId) -> EngineResult<Guessed> {
        self.ensure_in_progress()?;

        if self.turn.begin_action().is_err() {
            return Ok(Guessed {
                ok: false,
                correct: false,
            });
        }

        let side = self.turn.active();
        let correct = id == self.secret_of(side.opponent());
        if correct {
            self.phase = Phase::Won(side);
            log::info!("{side} guessed {id} correctly and wins");
        } else {
            self.tracker_mut(side).eliminate(id);
            debug_assert!(
                self.candidates(side).contains(self.secret_of(side.opponent())),
                "wrong guess removed the real secret"
            );
            log::info!("{side} guessed {id}: wrong");
        }

        Ok(Guessed { ok: true, correct })
    }

    /// End the human's turn and run the computer's full turn.
    ///
    /// The computer's move goes through the same ask/guess handling as the
    /// human's; its turn is then passed back automatically, so control
    /// always returns to the human unless the computer just won.
    pub fn end_turn(&mut self) -> EngineResult<TurnReport> {
        self.ensure_in_progress()?;
        self.turn.pass();

        let mv = self
            .strategy
            .decide(&self.catalog, &self.computer_candidates)?;

        let computer_move = match mv {
            Move::AskQuestion { property, value } => {
                let asked = self.ask_question(&property, &value)?;
                debug_assert!(asked.ok, "computer acted twice in one turn");
                ComputerMove::Asked {
                    property,
                    value,
                    answer: asked.answer,
                }
            }
            Move::GuessCharacter(id) => {
                let character = self
                    .catalog
                    .get(id)
                    .map(|c| c.name.clone())
                    .unwrap_or_else(|| id.to_string());
                let guessed = self.guess_by_id(id)?;
                debug_assert!(guessed.ok, "computer acted twice in one turn");
                ComputerMove::Guessed {
                    character,
                    correct: guessed.correct,
                }
            }
        };

        let finished = self.phase.is_terminal();
        if !finished {
            self.turn.pass();
        }

        log::info!("computer {computer_move}");
        Ok(TurnReport {
            finished,
            computer_move,
        })
    }

    // === Lifecycle ===

    /// Discard all game state and start fresh over the same catalog.
    ///
    /// New secrets are drawn from a forked RNG stream; trackers return to
    /// the full catalog; the turn counter restarts at 0 with the human to
    /// act; the phase returns to `InProgress`.
    pub fn reset(&mut self) {
        self.rng = self.rng.fork();
        self.human_secret = draw_secret(&self.catalog, &mut self.rng);
        self.computer_secret = draw_secret(&self.catalog, &mut self.rng);
        self.human_candidates = CandidateTracker::full(&self.catalog);
        self.computer_candidates = CandidateTracker::full(&self.catalog);
        self.strategy = self.difficulty.strategy(self.rng.fork());
        self.turn = TurnState::new(Side::Human);
        self.phase = Phase::InProgress;
        log::info!("session reset");
    }

    /// Mark the game ended. Further mutating calls get `GameAlreadyOver`.
    pub fn end(&mut self) {
        if !self.phase.is_terminal() {
            self.phase = Phase::Ended;
            log::info!("session ended");
        }
    }

    // === Internals ===

    fn ensure_in_progress(&self) -> EngineResult<()> {
        if self.phase.is_terminal() {
            return Err(EngineError::GameAlreadyOver);
        }
        Ok(())
    }

    /// The secret the acting side is trying to identify.
    fn opponent_secret(&self, side: Side) -> EngineResult<&crate::catalog::Character> {
        let id = self.secret_of(side.opponent());
        // Secrets are always drawn from or validated against the catalog.
        self.catalog
            .get(id)
            .ok_or_else(|| EngineError::UnknownCharacter(id.to_string()))
    }

    fn tracker_mut(&mut self, side: Side) -> &mut CandidateTracker {
        match side {
            Side::Human => &mut self.human_candidates,
            Side::Computer => &mut self.computer_candidates,
        }
    }
}

fn draw_secret(catalog: &Catalog, rng: &mut GameRng) -> CharacterId {
    let pick = rng.gen_range_usize(0..catalog.len());
    catalog.characters()[pick].id
}
