//! The calculator engine: operators, number text, state and view-model.
//!
//! Every operation on [`CalculatorEngine`] is a synchronous state
//! transition. Nothing here renders; callers read a
//! [`DisplaySnapshot`] after each transition.

mod machine;
pub(crate) mod number;
mod operator;
mod snapshot;

pub use machine::{CalculatorEngine, EngineConfig, DEFAULT_HISTORY_PLACEHOLDER};
pub use number::{format_number, parse_number};
pub use operator::{calculate, Operator, ParseOperatorError};
pub use snapshot::DisplaySnapshot;
