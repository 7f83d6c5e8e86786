//! Binary operators and pure arithmetic.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The five binary operators the calculator understands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
}

/// Text did not name a known operator.
#[derive(Debug, Clone, Error, PartialEq)]
#[error("Unknown operator '{0}'")]
pub struct ParseOperatorError(pub String);

impl Operator {
    pub const ALL: [Operator; 5] = [
        Operator::Add,
        Operator::Subtract,
        Operator::Multiply,
        Operator::Divide,
        Operator::Power,
    ];

    /// Glyph used in the expression and history lines.
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "×",
            Self::Divide => "÷",
            Self::Power => "^",
        }
    }

    /// Identifier of the operator's button in the user interface.
    pub fn button_id(&self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Subtract => "subtract",
            Self::Multiply => "multiply",
            Self::Divide => "divide",
            Self::Power => "power",
        }
    }

    /// Keyboard character that selects the operator.
    pub fn key(&self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '*',
            Self::Divide => '/',
            Self::Power => '^',
        }
    }

    /// Look an operator up by its button identifier.
    pub fn from_button_id(id: &str) -> Result<Self, ParseOperatorError> {
        Self::ALL
            .into_iter()
            .find(|op| op.button_id() == id)
            .ok_or_else(|| ParseOperatorError(id.to_string()))
    }

    /// Apply the operator to two operands.
    ///
    /// Division by zero yields `0` rather than infinity or an error.
    ///
    /// ```rust
    /// use abacus::engine::Operator;
    ///
    /// assert_eq!(Operator::Power.apply(9.0, 2.0), 81.0);
    /// assert_eq!(Operator::Divide.apply(10.0, 0.0), 0.0);
    /// ```
    pub fn apply(&self, a: f64, b: f64) -> f64 {
        match self {
            Self::Add => a + b,
            Self::Subtract => a - b,
            Self::Multiply => a * b,
            // TODO: revisit once callers can surface a division error; zero hides it.
            Self::Divide => {
                if b != 0.0 {
                    a / b
                } else {
                    0.0
                }
            }
            // `powf` maps 1^NaN and (±1)^±∞ to 1; the display expects NaN.
            Self::Power if b.is_nan() || (b.is_infinite() && a.abs() == 1.0) => f64::NAN,
            Self::Power => a.powf(b),
        }
    }
}

/// Pure arithmetic on an optional operator.
///
/// Without an operator the second operand is returned unchanged.
pub fn calculate(a: f64, b: f64, op: Option<Operator>) -> f64 {
    match op {
        Some(op) => op.apply(a, b),
        None => b,
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Operator {
    type Err = ParseOperatorError;

    /// Accepts keyboard characters and display glyphs.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "+" => Ok(Self::Add),
            "-" => Ok(Self::Subtract),
            "*" | "×" => Ok(Self::Multiply),
            "/" | "÷" => Ok(Self::Divide),
            "^" => Ok(Self::Power),
            other => Err(ParseOperatorError(other.to_string())),
        }
    }
}
