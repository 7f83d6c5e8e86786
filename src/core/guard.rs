//! Guard predicates for controlling state transitions.
//!
//! Guards are pure boolean functions that decide whether an operation
//! may run from the current state. Operations whose guard rejects the
//! current state are silent no-ops.

use super::state::{Phase, State};
use std::marker::PhantomData;

/// Pure predicate that determines if a transition can execute.
///
/// # Example
///
/// ```rust
/// use abacus::core::{Guard, Phase};
///
/// let typing = Guard::new(|p: &Phase| {
///     matches!(p, Phase::OperandEntered | Phase::SecondOperandEntered)
/// });
///
/// assert!(typing.check(&Phase::OperandEntered));
/// assert!(!typing.check(&Phase::Idle));
/// ```
pub struct Guard<S: State> {
    predicate: Box<dyn Fn(&S) -> bool + Send + Sync>,
    _phantom: PhantomData<S>,
}

impl<S: State> Guard<S> {
    /// Create a guard from a pure predicate function.
    ///
    /// The predicate must be deterministic and thread-safe (Send + Sync).
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&S) -> bool + Send + Sync + 'static,
    {
        Guard {
            predicate: Box::new(predicate),
            _phantom: PhantomData,
        }
    }

    /// Check if the guard allows transition from this state.
    pub fn check(&self, state: &S) -> bool {
        (self.predicate)(state)
    }
}

impl Guard<Phase> {
    /// Evaluation needs a pending operator and a typed second operand.
    pub fn second_operand_entered() -> Self {
        Guard::new(|phase: &Phase| matches!(phase, Phase::SecondOperandEntered))
    }
}
