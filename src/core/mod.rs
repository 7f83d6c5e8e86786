//! Core state machine types and logic.
//!
//! This module contains the pure functional core of the calculator:
//! - Phase definitions via the `State` trait
//! - Guard predicates for operation preconditions
//! - The immutable one-slot calculation history
//!
//! All logic in this module is pure (no side effects), following
//! the "pure core, imperative shell" philosophy.

mod guard;
mod history;
mod state;

pub use guard::Guard;
pub use history::{Calculation, CalculationHistory};
pub use state::{Phase, State};
