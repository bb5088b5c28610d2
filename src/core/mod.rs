//! Core engine types: sides, errors, RNG.
//!
//! Fundamental building blocks shared by every other module.

pub mod error;
pub mod rng;
pub mod side;

pub use error::{EngineError, EngineResult};
pub use rng::GameRng;
pub use side::Side;
