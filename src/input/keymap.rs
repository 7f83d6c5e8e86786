//! Mapping from physical key names to logical tokens.

use crate::engine::Operator;
use crate::input::token::InputToken;
use std::collections::HashMap;

/// Key name to token table consulted by the input adapter.
///
/// Key names follow browser `KeyboardEvent.key` values (`"Enter"`,
/// `"Backspace"`, `"7"`, ...).
///
/// # Example
///
/// ```rust
/// use abacus::input::{InputToken, KeyMap};
///
/// let keys = KeyMap::default();
/// assert_eq!(keys.resolve("Enter"), Some(InputToken::Evaluate));
/// assert_eq!(keys.resolve("Tab"), None);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct KeyMap {
    bindings: HashMap<String, InputToken>,
}

impl KeyMap {
    pub(crate) fn from_bindings(bindings: HashMap<String, InputToken>) -> Self {
        Self { bindings }
    }

    /// The standard calculator keyboard layout.
    pub fn default_bindings() -> Vec<(String, InputToken)> {
        let mut bindings: Vec<(String, InputToken)> = "0123456789."
            .chars()
            .map(|c| (c.to_string(), InputToken::Digit(c)))
            .collect();

        bindings.extend(
            Operator::ALL
                .into_iter()
                .map(|op| (op.key().to_string(), InputToken::Operator(op))),
        );

        bindings.extend(
            [
                ("Enter", InputToken::Evaluate),
                ("=", InputToken::Evaluate),
                ("Escape", InputToken::Clear),
                ("c", InputToken::Clear),
                ("C", InputToken::Clear),
                ("Backspace", InputToken::Backspace),
                ("%", InputToken::Percent),
            ]
            .into_iter()
            .map(|(key, token)| (key.to_string(), token)),
        );

        bindings
    }

    /// Token bound to `key`, if any.
    pub fn resolve(&self, key: &str) -> Option<InputToken> {
        self.bindings.get(key).copied()
    }

    /// Whether the presentation layer should suppress the key's default
    /// browser action.
    pub fn captures(&self, key: &str) -> bool {
        self.bindings.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

impl Default for KeyMap {
    fn default() -> Self {
        Self::from_bindings(Self::default_bindings().into_iter().collect())
    }
}
