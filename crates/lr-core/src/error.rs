//! Error types for the divination engine.
//!
//! The calculation itself never fails: integer inputs are normalized with a
//! true mathematical modulo, so every value lands on the wheel. Errors only
//! arise at the name-parsing boundary.

use thiserror::Error;

/// Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors from the divination engine.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A string did not name one of the six symbols.
    #[error("unknown symbol: {0}")]
    UnknownSymbol(String),

    /// A string did not name one of the five elements.
    #[error("unknown element: {0}")]
    UnknownElement(String),
}
