//! Builder API for configuring engines and key maps.
//!
//! Configuration is code: fluent builders validate their settings and
//! return `Result<_, BuildError>` from `build()`.

pub mod engine;
pub mod error;
pub mod keymap;
pub mod macros;

pub use engine::EngineBuilder;
pub use error::BuildError;
pub use keymap::KeyMapBuilder;
