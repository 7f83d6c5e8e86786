//! Build errors for engine and key map builders.

use thiserror::Error;

/// Errors that can occur when building engines and key maps.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum BuildError {
    #[error("History placeholder must not be empty")]
    EmptyPlaceholder,

    #[error("Key name must not be empty")]
    EmptyKey,

    #[error("Key '{key}' is already bound. Use .rebind(key, token) to replace it")]
    DuplicateBinding { key: String },

    #[error("No key bindings defined. Call .defaults() or add at least one binding")]
    NoBindings,
}
