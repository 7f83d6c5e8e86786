//! Read-only view-model handed to the display layer.

use crate::core::Phase;
use crate::engine::operator::Operator;
use serde::{Deserialize, Serialize};

/// Everything a renderer needs to draw the calculator.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DisplaySnapshot {
    /// Main display text
    pub primary: String,
    /// Pending operation, empty when none
    pub expression: String,
    /// Last calculation line or the placeholder
    pub history: String,
    /// Whether the history line can be clicked to recall its result
    pub history_selectable: bool,
    /// Operator whose button should be highlighted
    pub active_operator: Option<Operator>,
    pub phase: Phase,
}

impl DisplaySnapshot {
    /// Button identifier to highlight, if any.
    pub fn active_button(&self) -> Option<&'static str> {
        self.active_operator.map(|op| op.button_id())
    }

    /// Encode for a browser-side renderer.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
