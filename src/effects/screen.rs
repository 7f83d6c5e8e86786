//! The presentation boundary.

use crate::engine::DisplaySnapshot;

/// Errors raised while painting a snapshot.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("Display element '{element}' is unavailable")]
    MissingElement { element: String },

    #[error("Snapshot encoding failed: {0}")]
    Encoding(#[from] serde_json::Error),

    #[error("Screen write failed: {0}")]
    Write(String),
}

/// Anything that can draw a [`DisplaySnapshot`].
///
/// Implemented by the presentation layer (a DOM bridge, a terminal, a
/// test double). Painting must not call back into the engine.
pub trait Screen {
    fn paint(&self, frame: &DisplaySnapshot) -> Result<(), RenderError>;
}
