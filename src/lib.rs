//! # guesswho-engine
//!
//! Engine for a two-player "20 questions"-style elimination guessing game.
//! Each side protects a secret identity drawn from a shared catalog of
//! characters described by fixed categorical properties; players alternate
//! asking yes/no property questions or guessing outright.
//!
//! ## Design Principles
//!
//! 1. **Engine only**: no rendering, routing, or asset handling. The
//!    presentation layer holds a `GameSession` and relays its results.
//!
//! 2. **Explicit session value**: no global game singleton. `reset`
//!    rebuilds the session wholesale; nothing partial survives.
//!
//! 3. **Injected randomness**: every random decision flows through a
//!    seeded `GameRng`, so games replay identically under a fixed seed.
//!
//! ## Modules
//!
//! - `core`: sides, errors, RNG
//! - `catalog`: characters, property schema, validation, JSON loading
//! - `oracle`: truthful answers about a secret
//! - `tracker`: per-side candidate sets
//! - `strategy`: computer move selection (minimax and random)
//! - `session`: turn protocol and the playable `GameSession`
//!
//! ## Example
//!
//! ```
//! use guesswho_engine::{Catalog, Difficulty, GameSession};
//!
//! let catalog = Catalog::from_json_str(r#"{
//!     "schema": {"hair": ["brown", "blond"]},
//!     "characters": [
//!         {"id": 1, "name": "Alex", "file": "alex.jpg", "properties": {"hair": "brown"}},
//!         {"id": 2, "name": "Billie", "file": "billie.jpg", "properties": {"hair": "blond"}}
//!     ]
//! }"#).unwrap();
//!
//! let mut game = GameSession::new(catalog, Difficulty::Best, 42);
//! game.set_computer_secret("Alex").unwrap();
//!
//! let asked = game.ask_question("hair", "brown").unwrap();
//! assert!(asked.ok && asked.answer);
//!
//! let report = game.end_turn().unwrap();
//! println!("computer {}", report.computer_move);
//! ```

pub mod catalog;
pub mod core;
pub mod oracle;
pub mod session;
pub mod strategy;
pub mod tracker;

// Re-export commonly used types
pub use crate::catalog::{Catalog, Character, CharacterId, CharacterRecord, PropertyDef, Schema};
pub use crate::core::{EngineError, EngineResult, GameRng, Side};
pub use crate::session::{Asked, ComputerMove, GameSession, Guessed, Phase, TurnReport, TurnState};
pub use crate::strategy::{Difficulty, Move, OptimalStrategy, RandomStrategy, Strategy};
pub use crate::tracker::CandidateTracker;
