//! Engine error type.
//!
//! Use [`EngineError`] to match on failure classes (missing column, bad
//! type, unparseable cell) without string inspection. Every operation in
//! the crate fails fast: the first offending row or cell aborts the call.

use std::fmt;

/// Unified error type for sparklet operations.
#[derive(Debug)]
pub enum EngineError {
    /// Referenced column absent from the schema.
    ColumnNotFound(String),
    /// Value or column not of the type an operation expects.
    TypeMismatch(String),
    /// String cell not parseable as the requested type.
    Parse(String),
    /// Split lengths differ across rows under the reject policy.
    Ragged(String),
    /// Row shape does not match the schema at construction.
    InvalidRow(String),
    /// Expression or operation not valid in this context.
    Unsupported(String),
    /// Invariant breach inside the evaluator.
    Internal(String),
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::ColumnNotFound(s) => write!(f, "column not found: {s}"),
            EngineError::TypeMismatch(s) => write!(f, "type mismatch: {s}"),
            EngineError::Parse(s) => write!(f, "parse error: {s}"),
            EngineError::Ragged(s) => write!(f, "ragged input: {s}"),
            EngineError::InvalidRow(s) => write!(f, "invalid row: {s}"),
            EngineError::Unsupported(s) => write!(f, "unsupported: {s}"),
            EngineError::Internal(s) => write!(f, "internal error: {s}"),
        }
    }
}

impl std::error::Error for EngineError {}

impl From<serde_json::Error> for EngineError {
    fn from(e: serde_json::Error) -> Self {
        EngineError::Internal(e.to_string())
    }
}
