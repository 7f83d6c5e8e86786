//! Logical input tokens.

use crate::engine::Operator;
use serde::{Deserialize, Serialize};

/// One recognized input event, independent of the key or button that
/// produced it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputToken {
    /// `'0'`–`'9'` or `'.'`
    Digit(char),
    Operator(Operator),
    Evaluate,
    Clear,
    Backspace,
    Percent,
    /// Load the last calculation's result
    RecallHistory,
}

impl InputToken {
    /// Whether `c` may be typed into the display.
    pub fn is_digit_char(c: char) -> bool {
        c.is_ascii_digit() || c == '.'
    }

    /// Build a digit token, rejecting anything but `0`–`9` and `.`.
    ///
    /// ```rust
    /// use abacus::input::InputToken;
    ///
    /// assert_eq!(InputToken::digit('7'), Some(InputToken::Digit('7')));
    /// assert_eq!(InputToken::digit('x'), None);
    /// ```
    pub fn digit(c: char) -> Option<Self> {
        Self::is_digit_char(c).then_some(Self::Digit(c))
    }
}
