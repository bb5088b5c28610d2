//! The oracle: truthful answers about a secret character.
//!
//! A single pure lookup. Queries outside the schema are a caller error and
//! are rejected for that request only; no session state is involved.

use crate::catalog::{Character, Schema};
use crate::core::EngineResult;

/// Answer whether `secret` has `value` for `property`.
///
/// Fails with `UnknownProperty` / `UnknownValue` if the query references
/// names outside the schema.
pub fn answer(
    schema: &Schema,
    secret: &Character,
    property: &str,
    value: &str,
) -> EngineResult<bool> {
    schema.validate_query(property, value)?;
    Ok(secret.matches(property, value))
}
