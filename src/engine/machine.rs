//! The calculator state machine.

use crate::core::{Calculation, CalculationHistory, Guard, Phase};
use crate::engine::number::{format_number, parse_number};
use crate::engine::operator::{calculate, Operator};
use crate::engine::snapshot::DisplaySnapshot;
use crate::input::InputToken;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// History line shown before the first calculation.
pub const DEFAULT_HISTORY_PLACEHOLDER: &str = "No calculations yet";

const INITIAL_INPUT: &str = "0";

/// Settings fixed at construction time.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// History line shown while no calculation exists
    pub history_placeholder: String,
    /// Keep the last calculation when the engine is cleared
    pub retain_history_on_clear: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            history_placeholder: DEFAULT_HISTORY_PLACEHOLDER.to_string(),
            retain_history_on_clear: false,
        }
    }
}

/// Calculator state and every operation that changes it.
///
/// Operations never fail; ones whose preconditions are unmet do nothing.
/// Read the result of any operation through [`CalculatorEngine::snapshot`].
///
/// # Example
///
/// ```rust
/// use abacus::engine::{CalculatorEngine, Operator};
///
/// let mut engine = CalculatorEngine::new();
/// engine.input_digit('9');
/// engine.set_operator(Operator::Power);
/// engine.input_digit('2');
/// engine.calculate_result();
///
/// let view = engine.snapshot();
/// assert_eq!(view.primary, "81");
/// assert_eq!(view.history, "9 ^ 2 = 81");
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CalculatorEngine {
    current_input: String,
    #[serde(with = "crate::engine::number::option_as_text")]
    previous_input: Option<f64>,
    pending_operator: Option<Operator>,
    awaiting_operand: bool,
    history: CalculationHistory,
    config: EngineConfig,
}

impl Default for CalculatorEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorEngine {
    /// Create an idle engine with default settings.
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    /// Create an idle engine with the given settings.
    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            current_input: INITIAL_INPUT.to_string(),
            previous_input: None,
            pending_operator: None,
            awaiting_operand: false,
            history: CalculationHistory::new(),
            config,
        }
    }

    /// Get the displayed input text (pure)
    pub fn current_input(&self) -> &str {
        &self.current_input
    }

    /// Get the left operand of the pending operation (pure)
    pub fn previous_input(&self) -> Option<f64> {
        self.previous_input
    }

    /// Get the pending operator (pure)
    pub fn pending_operator(&self) -> Option<Operator> {
        self.pending_operator
    }

    /// Check if the next digit starts a fresh number (pure)
    pub fn awaiting_operand(&self) -> bool {
        self.awaiting_operand
    }

    /// Get the most recent calculation (pure)
    pub fn last_calculation(&self) -> Option<&Calculation> {
        self.history.latest()
    }

    /// Get the calculation history (pure)
    pub fn history(&self) -> &CalculationHistory {
        &self.history
    }

    /// Get the construction settings (pure)
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Current phase, derived from the fields (pure).
    pub fn phase(&self) -> Phase {
        match (self.pending_operator, self.awaiting_operand) {
            (Some(_), true) => Phase::OperatorPending,
            (Some(_), false) => Phase::SecondOperandEntered,
            (None, true) => Phase::Idle,
            (None, false) if self.current_input == INITIAL_INPUT => Phase::Idle,
            (None, false) => Phase::OperandEntered,
        }
    }

    /// Dispatch one logical input token.
    pub fn apply(&mut self, token: InputToken) {
        match token {
            InputToken::Digit(digit) => self.input_digit(digit),
            InputToken::Operator(op) => self.set_operator(op),
            InputToken::Evaluate => self.calculate_result(),
            InputToken::Clear => self.clear(),
            InputToken::Backspace => self.delete_last_char(),
            InputToken::Percent => self.input_percent(),
            InputToken::RecallHistory => self.select_history_result(),
        }
    }

    /// Enter a digit or decimal point.
    ///
    /// Starts a fresh number when an operand is awaited, replaces a lone
    /// `"0"`, and appends otherwise. Repeated decimal points are accepted.
    pub fn input_digit(&mut self, digit: char) {
        if !InputToken::is_digit_char(digit) {
            warn!(token = %digit, "ignoring non-digit input");
            return;
        }

        if self.awaiting_operand {
            self.current_input = digit.to_string();
            self.awaiting_operand = false;
        } else if self.current_input == INITIAL_INPUT {
            self.current_input = digit.to_string();
        } else {
            self.current_input.push(digit);
        }

        debug!(token = %digit, input = %self.current_input, "digit entered");
    }

    /// Select the next operator, evaluating a pending one first when a
    /// second operand has been typed (strict left-to-right chaining).
    pub fn set_operator(&mut self, op: Operator) {
        let input_value = parse_number(&self.current_input);

        match (self.previous_input, self.pending_operator) {
            (None, _) => {
                self.previous_input = Some(input_value);
            }
            (Some(previous), Some(pending)) if !self.awaiting_operand => {
                let left = if previous.is_nan() { 0.0 } else { previous };
                let result = calculate(left, input_value, Some(pending));
                debug!(operator = %pending, result, "chained evaluation");
                self.current_input = format_number(result);
                self.previous_input = Some(result);
            }
            _ => {}
        }

        self.awaiting_operand = true;
        self.pending_operator = Some(op);

        debug!(operator = %op, phase = ?self.phase(), "operator selected");
    }

    /// Commit the pending operation and record it as the last calculation.
    pub fn calculate_result(&mut self) {
        if !Guard::<Phase>::second_operand_entered().check(&self.phase()) {
            debug!(phase = ?self.phase(), "nothing to evaluate");
            return;
        }
        let (Some(previous), Some(op)) = (self.previous_input, self.pending_operator) else {
            return;
        };

        let operand = parse_number(&self.current_input);
        let result = calculate(previous, operand, Some(op));
        let expression = format!(
            "{} {} {}",
            format_number(previous),
            op.symbol(),
            format_number(operand)
        );
        debug!(%expression, result, "calculation recorded");

        self.history = self.history.record(Calculation::new(expression, result));
        self.current_input = format_number(result);
        self.previous_input = None;
        self.pending_operator = None;
        self.awaiting_operand = true;
    }

    /// Reset to the initial state.
    ///
    /// History survives only when `retain_history_on_clear` is set.
    pub fn clear(&mut self) {
        let history = if self.config.retain_history_on_clear {
            std::mem::take(&mut self.history)
        } else {
            CalculationHistory::new()
        };
        let config = std::mem::take(&mut self.config);

        *self = Self::with_config(config);
        self.history = history;

        debug!("engine cleared");
    }

    /// Remove the last character, falling back to `"0"`.
    pub fn delete_last_char(&mut self) {
        if self.current_input.chars().count() > 1 {
            self.current_input.pop();
        } else {
            self.current_input = INITIAL_INPUT.to_string();
        }

        debug!(input = %self.current_input, "last character deleted");
    }

    /// Divide the displayed value by one hundred.
    pub fn input_percent(&mut self) {
        self.current_input = format_number(parse_number(&self.current_input) / 100.0);

        debug!(input = %self.current_input, "percent applied");
    }

    /// Load the last result back as a fresh value. No-op without history.
    pub fn select_history_result(&mut self) {
        let Some(result) = self.history.latest().map(|c| c.result) else {
            return;
        };

        self.current_input = format_number(result);
        self.previous_input = None;
        self.pending_operator = None;
        self.awaiting_operand = false;

        debug!(result, "history result recalled");
    }

    /// Expression line for the display.
    pub fn expression(&self) -> String {
        match (self.previous_input, self.pending_operator) {
            (Some(previous), Some(op)) if !self.awaiting_operand => format!(
                "{} {} {}",
                format_number(previous),
                op.symbol(),
                self.current_input
            ),
            (Some(previous), Some(op)) => format!("{} {}", format_number(previous), op.symbol()),
            _ => String::new(),
        }
    }

    /// Read-only projection of the state for the display layer.
    pub fn snapshot(&self) -> DisplaySnapshot {
        DisplaySnapshot {
            primary: self.current_input.clone(),
            expression: self.expression(),
            history: self.history.line(&self.config.history_placeholder),
            history_selectable: !self.history.is_empty(),
            active_operator: self.pending_operator,
            phase: self.phase(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_digits(engine: &mut CalculatorEngine, digits: &str) {
        for digit in digits.chars() {
            engine.input_digit(digit);
        }
    }

    fn evaluate(a: &str, op: Operator, b: &str) -> CalculatorEngine {
        let mut engine = CalculatorEngine::new();
        type_digits(&mut engine, a);
        engine.set_operator(op);
        type_digits(&mut engine, b);
        engine.calculate_result();
        engine
    }

    #[test]
    fn new_engine_is_idle() {
        let engine = CalculatorEngine::new();
        assert_eq!(engine.current_input(), "0");
        assert_eq!(engine.previous_input(), None);
        assert_eq!(engine.pending_operator(), None);
        assert!(!engine.awaiting_operand());
        assert!(engine.last_calculation().is_none());
        assert_eq!(engine.phase(), Phase::Idle);
    }

    #[test]
    fn digits_concatenate_and_leading_zero_collapses() {
        let mut engine = CalculatorEngine::new();
        type_digits(&mut engine, "05");
        assert_eq!(engine.current_input(), "5");

        type_digits(&mut engine, "07");
        assert_eq!(engine.current_input(), "507");
        assert_eq!(engine.phase(), Phase::OperandEntered);
    }

    #[test]
    fn multiple_decimal_points_are_accepted() {
        let mut engine = CalculatorEngine::new();
        type_digits(&mut engine, "1.2.3");
        assert_eq!(engine.current_input(), "1.2.3");
    }

    #[test]
    fn decimal_point_replaces_lone_zero() {
        let mut engine = CalculatorEngine::new();
        engine.input_digit('.');
        assert_eq!(engine.current_input(), ".");
        engine.input_digit('5');
        assert_eq!(engine.current_input(), ".5");
    }

    #[test]
    fn non_digit_input_is_ignored() {
        let mut engine = CalculatorEngine::new();
        engine.input_digit('x');
        assert_eq!(engine, CalculatorEngine::new());
    }

    #[test]
    fn first_operator_captures_operand() {
        let mut engine = CalculatorEngine::new();
        type_digits(&mut engine, "12");
        engine.set_operator(Operator::Add);

        assert_eq!(engine.previous_input(), Some(12.0));
        assert_eq!(engine.pending_operator(), Some(Operator::Add));
        assert!(engine.awaiting_operand());
        assert_eq!(engine.phase(), Phase::OperatorPending);
        assert_eq!(engine.expression(), "12 +");
    }

    #[test]
    fn second_operand_starts_fresh() {
        let mut engine = CalculatorEngine::new();
        type_digits(&mut engine, "12");
        engine.set_operator(Operator::Add);
        type_digits(&mut engine, "34");

        assert_eq!(engine.current_input(), "34");
        assert_eq!(engine.phase(), Phase::SecondOperandEntered);
        assert_eq!(engine.expression(), "12 + 34");
    }

    #[test]
    fn repeated_operator_replaces_pending_one() {
        let mut engine = CalculatorEngine::new();
        type_digits(&mut engine, "8");
        engine.set_operator(Operator::Add);
        engine.set_operator(Operator::Multiply);

        assert_eq!(engine.previous_input(), Some(8.0));
        assert_eq!(engine.pending_operator(), Some(Operator::Multiply));
        assert_eq!(engine.expression(), "8 ×");
    }

    #[test]
    fn chained_operators_evaluate_left_to_right() {
        let mut engine = CalculatorEngine::new();
        type_digits(&mut engine, "5");
        engine.set_operator(Operator::Add);
        type_digits(&mut engine, "3");
        engine.set_operator(Operator::Multiply);

        assert_eq!(engine.current_input(), "8");
        assert_eq!(engine.previous_input(), Some(8.0));

        type_digits(&mut engine, "2");
        engine.calculate_result();

        assert_eq!(engine.current_input(), "16");
        assert_eq!(engine.last_calculation().unwrap().expression, "8 × 2");
    }

    #[test]
    fn chain_without_precedence() {
        let mut engine = CalculatorEngine::new();
        type_digits(&mut engine, "2");
        engine.set_operator(Operator::Add);
        type_digits(&mut engine, "3");
        engine.set_operator(Operator::Multiply);
        type_digits(&mut engine, "4");
        engine.calculate_result();

        assert_eq!(engine.current_input(), "20");
    }

    #[test]
    fn power_scenario() {
        let engine = evaluate("9", Operator::Power, "2");
        let view = engine.snapshot();

        assert_eq!(view.primary, "81");
        assert_eq!(view.history, "9 ^ 2 = 81");
        assert_eq!(view.expression, "");
        assert_eq!(view.phase, Phase::Idle);
    }

    #[test]
    fn division_by_zero_scenario() {
        let engine = evaluate("10", Operator::Divide, "0");

        assert_eq!(engine.current_input(), "0");
        assert_eq!(engine.snapshot().history, "10 ÷ 0 = 0");
    }

    #[test]
    fn invalid_power_displays_nan() {
        let mut engine = evaluate("0", Operator::Subtract, "8");
        engine.set_operator(Operator::Power);
        type_digits(&mut engine, ".5");
        engine.calculate_result();

        assert_eq!(engine.current_input(), "NaN");
        assert_eq!(engine.snapshot().history, "-8 ^ 0.5 = NaN");
    }

    #[test]
    fn calculate_result_commits_and_resets_operation() {
        let engine = evaluate("7", Operator::Subtract, "10");

        assert_eq!(engine.current_input(), "-3");
        assert_eq!(engine.previous_input(), None);
        assert_eq!(engine.pending_operator(), None);
        assert!(engine.awaiting_operand());
    }

    #[test]
    fn calculate_result_without_operator_is_noop() {
        let mut engine = CalculatorEngine::new();
        type_digits(&mut engine, "42");
        let before = engine.clone();

        engine.calculate_result();
        assert_eq!(engine, before);
    }

    #[test]
    fn calculate_result_while_awaiting_operand_is_noop() {
        let mut engine = CalculatorEngine::new();
        type_digits(&mut engine, "42");
        engine.set_operator(Operator::Add);
        let before = engine.clone();

        engine.calculate_result();
        assert_eq!(engine, before);
        assert!(engine.last_calculation().is_none());
    }

    #[test]
    fn repeated_evaluate_does_not_repeat_operation() {
        let mut engine = evaluate("2", Operator::Add, "2");
        let before = engine.clone();

        engine.calculate_result();
        assert_eq!(engine, before);
    }

    #[test]
    fn digit_after_result_starts_new_number() {
        let mut engine = evaluate("2", Operator::Add, "2");
        engine.input_digit('7');

        assert_eq!(engine.current_input(), "7");
        assert_eq!(engine.phase(), Phase::OperandEntered);
    }

    #[test]
    fn operator_after_result_continues_from_it() {
        let mut engine = evaluate("2", Operator::Add, "2");
        engine.set_operator(Operator::Multiply);
        type_digits(&mut engine, "3");
        engine.calculate_result();

        assert_eq!(engine.current_input(), "12");
        assert_eq!(engine.snapshot().history, "4 × 3 = 12");
    }

    #[test]
    fn history_keeps_only_latest() {
        let mut engine = evaluate("2", Operator::Add, "2");
        engine.set_operator(Operator::Multiply);
        type_digits(&mut engine, "5");
        engine.calculate_result();

        assert_eq!(engine.last_calculation().unwrap().result, 20.0);
        assert_eq!(engine.snapshot().history, "4 × 5 = 20");
    }

    #[test]
    fn clear_restores_initial_state() {
        let mut engine = evaluate("9", Operator::Power, "2");
        engine.set_operator(Operator::Add);
        type_digits(&mut engine, "3");

        engine.clear();
        assert_eq!(engine, CalculatorEngine::new());
    }

    #[test]
    fn clear_can_retain_history() {
        let config = EngineConfig {
            retain_history_on_clear: true,
            ..EngineConfig::default()
        };
        let mut engine = CalculatorEngine::with_config(config.clone());
        type_digits(&mut engine, "6");
        engine.set_operator(Operator::Multiply);
        type_digits(&mut engine, "7");
        engine.calculate_result();

        engine.clear();
        assert_eq!(engine.current_input(), "0");
        assert_eq!(engine.phase(), Phase::Idle);
        assert_eq!(engine.config(), &config);
        assert_eq!(engine.snapshot().history, "6 × 7 = 42");
    }

    #[test]
    fn delete_last_char() {
        let mut engine = CalculatorEngine::new();
        type_digits(&mut engine, "42");
        engine.delete_last_char();
        assert_eq!(engine.current_input(), "4");

        engine.delete_last_char();
        assert_eq!(engine.current_input(), "0");

        engine.delete_last_char();
        assert_eq!(engine.current_input(), "0");
    }

    #[test]
    fn delete_last_char_leaves_operation_alone() {
        let mut engine = CalculatorEngine::new();
        type_digits(&mut engine, "3");
        engine.set_operator(Operator::Add);
        type_digits(&mut engine, "45");
        engine.delete_last_char();

        assert_eq!(engine.current_input(), "4");
        assert_eq!(engine.previous_input(), Some(3.0));
        assert_eq!(engine.pending_operator(), Some(Operator::Add));
        assert_eq!(engine.expression(), "3 + 4");
    }

    #[test]
    fn percent_divides_by_hundred() {
        let mut engine = CalculatorEngine::new();
        type_digits(&mut engine, "50");
        engine.input_percent();
        assert_eq!(engine.current_input(), "0.5");

        engine.input_percent();
        assert_eq!(engine.current_input(), "0.005");
    }

    #[test]
    fn percent_keeps_operation_state() {
        let mut engine = CalculatorEngine::new();
        type_digits(&mut engine, "200");
        engine.set_operator(Operator::Multiply);
        engine.input_percent();

        assert_eq!(engine.current_input(), "2");
        assert!(engine.awaiting_operand());
        assert_eq!(engine.previous_input(), Some(200.0));
    }

    #[test]
    fn select_history_result_loads_fresh_value() {
        let mut engine = evaluate("9", Operator::Power, "2");
        type_digits(&mut engine, "5");
        engine.set_operator(Operator::Add);

        engine.select_history_result();
        assert_eq!(engine.current_input(), "81");
        assert_eq!(engine.previous_input(), None);
        assert_eq!(engine.pending_operator(), None);
        assert!(!engine.awaiting_operand());

        engine.input_digit('1');
        assert_eq!(engine.current_input(), "811");
    }

    #[test]
    fn select_history_result_without_history_is_noop() {
        let mut engine = CalculatorEngine::new();
        type_digits(&mut engine, "3");
        let before = engine.clone();

        engine.select_history_result();
        assert_eq!(engine, before);
    }

    #[test]
    fn chaining_from_nan_operand_uses_zero() {
        let mut engine = CalculatorEngine::new();
        engine.input_digit('.');
        engine.set_operator(Operator::Add);
        assert!(engine.previous_input().unwrap().is_nan());

        type_digits(&mut engine, "4");
        engine.set_operator(Operator::Add);
        assert_eq!(engine.current_input(), "4");
    }

    #[test]
    fn apply_dispatches_tokens() {
        let mut engine = CalculatorEngine::new();
        for token in [
            InputToken::Digit('5'),
            InputToken::Operator(Operator::Add),
            InputToken::Digit('3'),
            InputToken::Operator(Operator::Multiply),
            InputToken::Digit('2'),
            InputToken::Evaluate,
        ] {
            engine.apply(token);
        }
        assert_eq!(engine.current_input(), "16");

        engine.apply(InputToken::Backspace);
        assert_eq!(engine.current_input(), "1");
        engine.apply(InputToken::Percent);
        assert_eq!(engine.current_input(), "0.01");
        engine.apply(InputToken::RecallHistory);
        assert_eq!(engine.current_input(), "16");
        engine.apply(InputToken::Clear);
        assert_eq!(engine, CalculatorEngine::new());
    }

    #[test]
    fn engine_serializes_correctly() {
        let engine = evaluate("9", Operator::Power, "2");
        let json = serde_json::to_string(&engine).unwrap();
        let deserialized: CalculatorEngine = serde_json::from_str(&json).unwrap();
        assert_eq!(engine, deserialized);
    }

    #[test]
    fn nan_operand_survives_serialization() {
        let mut engine = CalculatorEngine::new();
        engine.input_digit('.');
        engine.set_operator(Operator::Add);

        let json = serde_json::to_string(&engine).unwrap();
        let deserialized: CalculatorEngine = serde_json::from_str(&json).unwrap();

        assert!(deserialized.previous_input().is_some_and(f64::is_nan));
        assert_eq!(deserialized.pending_operator(), Some(Operator::Add));
        assert_eq!(deserialized.phase(), Phase::OperatorPending);
    }

    #[test]
    fn nan_result_survives_serialization() {
        let mut engine = evaluate("0", Operator::Subtract, "8");
        engine.set_operator(Operator::Power);
        type_digits(&mut engine, ".5");
        engine.calculate_result();

        let json = serde_json::to_string(&engine).unwrap();
        let deserialized: CalculatorEngine = serde_json::from_str(&json).unwrap();

        assert!(deserialized.last_calculation().is_some_and(|c| c.result.is_nan()));
        assert_eq!(deserialized.current_input(), "NaN");
        assert_eq!(deserialized.snapshot(), engine.snapshot());
    }

    #[test]
    fn power_with_missing_exponent_is_nan() {
        let mut engine = CalculatorEngine::new();
        engine.input_digit('1');
        engine.set_operator(Operator::Power);
        engine.input_digit('.');
        engine.calculate_result();

        let view = engine.snapshot();
        assert_eq!(view.primary, "NaN");
        assert_eq!(view.history, "1 ^ NaN = NaN");
    }
}
