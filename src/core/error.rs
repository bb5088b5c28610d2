//! Error taxonomy for the engine.
//!
//! Two tiers:
//!
//! - **Construction errors**: `MalformedCatalog`: the session cannot be
//!   built from bad data.
//! - **Request errors**: everything else: a single call is rejected and
//!   session state is left untouched.
//!
//! Turn-budget violations (`AlreadyActedThisTurn`) are additionally surfaced
//! as an `ok = false` payload at the session API boundary, matching the
//! two-valued contract the presentation layer expects.

use thiserror::Error;

/// All errors the engine can report.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EngineError {
    /// Catalog data failed validation at load time.
    #[error("malformed catalog: {0}")]
    MalformedCatalog(String),

    /// A character name not present in the catalog.
    #[error("unknown character '{0}'")]
    UnknownCharacter(String),

    /// A property name not present in the schema.
    #[error("unknown property '{0}'")]
    UnknownProperty(String),

    /// A value not legal for the named property.
    #[error("unknown value '{value}' for property '{property}'")]
    UnknownValue { property: String, value: String },

    /// The acting side already used its one action this turn.
    #[error("side has already acted this turn")]
    AlreadyActedThisTurn,

    /// A mutating call arrived after the game reached a terminal phase.
    #[error("game is already over")]
    GameAlreadyOver,

    /// A strategy was asked to decide with no candidates left.
    ///
    /// With a truthful oracle this cannot happen; it indicates a tracker
    /// inconsistency and is reported rather than recovered from.
    #[error("no candidates remaining to decide between")]
    NoCandidatesRemaining,
}

/// Convenience alias used throughout the crate.
pub type EngineResult<T> = Result<T, EngineError>;
