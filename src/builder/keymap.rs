//! Builder for constructing key maps.

use crate::builder::error::BuildError;
use crate::input::{InputToken, KeyMap};
use std::collections::HashMap;

/// Builder for constructing key maps with a fluent API.
#[derive(Debug, Default)]
pub struct KeyMapBuilder {
    bindings: HashMap<String, InputToken>,
}

impl KeyMapBuilder {
    /// Create a builder with no bindings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the standard calculator keyboard layout, replacing any
    /// existing binding for the same keys.
    pub fn defaults(mut self) -> Self {
        self.bindings.extend(KeyMap::default_bindings());
        self
    }

    /// Bind a key to a token.
    /// Returns an error if the key is empty or already bound.
    pub fn bind(mut self, key: impl Into<String>, token: InputToken) -> Result<Self, BuildError> {
        let key = key.into();
        if key.is_empty() {
            return Err(BuildError::EmptyKey);
        }
        if self.bindings.contains_key(&key) {
            return Err(BuildError::DuplicateBinding { key });
        }

        self.bindings.insert(key, token);
        Ok(self)
    }

    /// Bind a key to a token, replacing any existing binding.
    pub fn rebind(mut self, key: impl Into<String>, token: InputToken) -> Result<Self, BuildError> {
        let key = key.into();
        if key.is_empty() {
            return Err(BuildError::EmptyKey);
        }

        self.bindings.insert(key, token);
        Ok(self)
    }

    /// Remove a key's binding if present.
    pub fn unbind(mut self, key: &str) -> Self {
        self.bindings.remove(key);
        self
    }

    /// Build the key map.
    /// Returns an error if no bindings were added.
    pub fn build(self) -> Result<KeyMap, BuildError> {
        if self.bindings.is_empty() {
            return Err(BuildError::NoBindings);
        }

        Ok(KeyMap::from_bindings(self.bindings))
    }
}
