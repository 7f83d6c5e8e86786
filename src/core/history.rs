//! Calculation history tracking.
//!
//! The calculator remembers exactly one completed calculation. History
//! values are immutable: `record` returns a new history and leaves the
//! receiver untouched.

use crate::engine::number::format_number;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Record of a single completed calculation.
///
/// # Example
///
/// ```rust
/// use abacus::core::Calculation;
///
/// let calculation = Calculation::new("9 ^ 2", 81.0);
/// assert_eq!(calculation.line(), "9 ^ 2 = 81");
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Calculation {
    /// Left operand, operator symbol and right operand, space separated
    pub expression: String,
    /// The computed value
    #[serde(with = "crate::engine::number::as_text")]
    pub result: f64,
    /// When the calculation was committed
    pub computed_at: DateTime<Utc>,
}

impl Calculation {
    /// Create a calculation stamped with the current time.
    pub fn new(expression: impl Into<String>, result: f64) -> Self {
        Self {
            expression: expression.into(),
            result,
            computed_at: Utc::now(),
        }
    }

    /// The history line shown for this calculation.
    pub fn line(&self) -> String {
        format!("{} = {}", self.expression, format_number(self.result))
    }
}

/// One-slot history of completed calculations.
///
/// # Example
///
/// ```rust
/// use abacus::core::{Calculation, CalculationHistory};
///
/// let history = CalculationHistory::new();
/// assert!(history.latest().is_none());
///
/// let history = history.record(Calculation::new("2 + 2", 4.0));
/// let history = history.record(Calculation::new("3 × 3", 9.0));
///
/// assert_eq!(history.latest().map(|c| c.result), Some(9.0));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CalculationHistory {
    latest: Option<Calculation>,
}

impl CalculationHistory {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self { latest: None }
    }

    /// Record a calculation, returning a new history.
    ///
    /// Only one slot exists, so any earlier calculation is replaced.
    pub fn record(&self, calculation: Calculation) -> Self {
        Self {
            latest: Some(calculation),
        }
    }

    /// The most recent calculation, if any.
    pub fn latest(&self) -> Option<&Calculation> {
        self.latest.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.latest.is_none()
    }

    /// History line, or `placeholder` when nothing has been calculated.
    pub fn line(&self, placeholder: &str) -> String {
        match &self.latest {
            Some(calculation) => calculation.line(),
            None => placeholder.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_history_is_empty() {
        let history = CalculationHistory::new();
        assert!(history.is_empty());
        assert!(history.latest().is_none());
        assert_eq!(history.line("No calculations yet"), "No calculations yet");
    }

    #[test]
    fn record_is_immutable() {
        let history = CalculationHistory::new();
        let new_history = history.record(Calculation::new("1 + 1", 2.0));

        assert!(history.is_empty());
        assert!(!new_history.is_empty());
    }

    #[test]
    fn record_overwrites_previous_entry() {
        let history = CalculationHistory::new()
            .record(Calculation::new("1 + 1", 2.0))
            .record(Calculation::new("10 ÷ 4", 2.5));

        let latest = history.latest().unwrap();
        assert_eq!(latest.expression, "10 ÷ 4");
        assert_eq!(history.line("unused"), "10 ÷ 4 = 2.5");
    }

    #[test]
    fn line_formats_special_results() {
        assert_eq!(Calculation::new("10 ÷ 0", 0.0).line(), "10 ÷ 0 = 0");
        assert_eq!(Calculation::new("-8 ^ 0.5", f64::NAN).line(), "-8 ^ 0.5 = NaN");
    }

    #[test]
    fn history_serializes_correctly() {
        let history = CalculationHistory::new().record(Calculation::new("9 ^ 2", 81.0));

        let json = serde_json::to_string(&history).unwrap();
        let deserialized: CalculationHistory = serde_json::from_str(&json).unwrap();

        assert_eq!(history, deserialized);
    }

    #[test]
    fn nan_result_serializes_correctly() {
        let history = CalculationHistory::new().record(Calculation::new("-8 ^ 0.5", f64::NAN));

        let json = serde_json::to_string(&history).unwrap();
        let deserialized: CalculationHistory = serde_json::from_str(&json).unwrap();

        let latest = deserialized.latest().unwrap();
        assert_eq!(latest.expression, "-8 ^ 0.5");
        assert!(latest.result.is_nan());
    }

    #[test]
    fn timestamp_is_recorded() {
        let before = Utc::now();
        let calculation = Calculation::new("2 × 3", 6.0);
        assert!(calculation.computed_at >= before);
    }
}
