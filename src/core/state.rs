//! Core State trait and the calculator's interaction phases.
//!
//! All state machine states implement this trait, which provides
//! pure methods for inspecting state properties without side effects.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for state machine states.
///
/// All methods are pure - no side effects. States represent immutable
/// values that describe the current position in a state machine.
///
/// # Required Traits
///
/// - `Clone`: States are copied into snapshots
/// - `PartialEq`: States must be comparable for guard logic
/// - `Debug`: States must be debuggable for diagnostics
/// - `Serialize` + `Deserialize`: States travel inside view-models
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the state's name for display/logging.
    fn name(&self) -> &str;

    /// Check if this is a final (terminal) state.
    ///
    /// Default implementation returns `false`.
    fn is_final(&self) -> bool {
        false
    }
}

crate::state_enum! {
    /// Position of the calculator in its entry cycle.
    ///
    /// The phase is derived from the engine's fields rather than stored,
    /// so it can never disagree with them.
    #[derive(Copy, Eq, Hash)]
    pub enum Phase {
        /// Nothing entered yet, or a result is showing.
        Idle,
        /// First operand is being typed.
        OperandEntered,
        /// Operator chosen, second operand not started.
        OperatorPending,
        /// Second operand is being typed.
        SecondOperandEntered,
    }
}

impl Phase {
    /// Whether an operator is waiting on this phase.
    pub fn has_pending_operator(&self) -> bool {
        matches!(self, Self::OperatorPending | Self::SecondOperandEntered)
    }
}
