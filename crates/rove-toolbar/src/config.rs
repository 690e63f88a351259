//! Toolbar Configuration

use rove_a11y::{Orientation, ToolbarAria};
use rove_dom::Direction;
use serde::{Deserialize, Serialize};

use crate::ToolbarError;

/// Toolbar configuration options
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolbarConfig {
    /// Axis the arrow keys move along
    pub orientation: Orientation,

    /// Fixed text direction. `None` resolves it from the document on attach.
    pub direction: Option<Direction>,

    /// ARIA properties written to the host element
    pub aria: ToolbarAria,
}

impl ToolbarConfig {
    /// Parse a JSON configuration document
    pub fn from_json(source: &str) -> Result<Self, ToolbarError> {
        Ok(serde_json::from_str(source)?)
    }

    pub fn vertical() -> Self {
        Self {
            orientation: Orientation::Vertical,
            ..Self::default()
        }
    }
}
