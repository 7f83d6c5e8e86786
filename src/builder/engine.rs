//! Builder for constructing calculator engines.

use crate::builder::error::BuildError;
use crate::engine::{CalculatorEngine, EngineConfig};

/// Builder for constructing engines with a fluent API.
///
/// # Example
///
/// ```rust
/// use abacus::builder::EngineBuilder;
///
/// let engine = EngineBuilder::new()
///     .history_placeholder("History is empty")
///     .retain_history_on_clear(true)
///     .build()
///     .unwrap();
///
/// assert_eq!(engine.snapshot().history, "History is empty");
/// ```
#[derive(Debug, Default)]
pub struct EngineBuilder {
    config: EngineConfig,
}

impl EngineBuilder {
    /// Create a builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Text of the history line before the first calculation.
    pub fn history_placeholder(mut self, text: impl Into<String>) -> Self {
        self.config.history_placeholder = text.into();
        self
    }

    /// Keep the last calculation across `clear`.
    pub fn retain_history_on_clear(mut self, retain: bool) -> Self {
        self.config.retain_history_on_clear = retain;
        self
    }

    /// Build the engine.
    /// Returns an error if the settings are invalid.
    pub fn build(self) -> Result<CalculatorEngine, BuildError> {
        if self.config.history_placeholder.is_empty() {
            return Err(BuildError::EmptyPlaceholder);
        }

        Ok(CalculatorEngine::with_config(self.config))
    }
}
