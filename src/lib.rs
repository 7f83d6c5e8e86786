//! Abacus: a pure calculator state machine
//!
//! Abacus follows the "pure core, imperative shell" philosophy. The
//! calculator's state transitions are plain synchronous functions over
//! an owned [`engine::CalculatorEngine`]; rendering lives outside, in a
//! Stillwater effect that paints a read-only [`engine::DisplaySnapshot`].
//!
//! # Core Concepts
//!
//! - **Engine**: digit entry, operators with strict left-to-right
//!   chaining, evaluation, clear, backspace, percent and history recall
//! - **Phases**: `Idle`, `OperandEntered`, `OperatorPending`,
//!   `SecondOperandEntered`, derived from the engine's fields
//! - **History**: a single slot holding the last completed calculation
//! - **Input**: key names map to logical [`input::InputToken`]s
//! - **Effects**: [`effects::Session`] paints each frame on a [`effects::Screen`]
//!
//! # Example
//!
//! ```rust
//! use abacus::engine::CalculatorEngine;
//! use abacus::input::KeyMap;
//!
//! let keys = KeyMap::default();
//! let mut engine = CalculatorEngine::new();
//!
//! for key in ["5", "+", "3", "*", "2", "="] {
//!     if let Some(token) = keys.resolve(key) {
//!         engine.apply(token);
//!     }
//! }
//!
//! let view = engine.snapshot();
//! assert_eq!(view.primary, "16");
//! assert_eq!(view.history, "8 × 2 = 16");
//! ```

pub mod builder;
pub mod core;
pub mod effects;
pub mod engine;
pub mod input;

// Re-export commonly used types
pub use builder::{BuildError, EngineBuilder, KeyMapBuilder};
pub use crate::core::{Calculation, Guard, Phase, State};
pub use effects::{RenderError, Screen, Session};
pub use engine::{CalculatorEngine, DisplaySnapshot, Operator};
pub use input::{InputToken, KeyMap};
