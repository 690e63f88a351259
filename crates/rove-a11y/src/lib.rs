//! rove Accessibility
//!
//! Accessibility vocabulary for rove components.
//!
//! Features:
//! - ARIA roles, orientation, global states and properties
//! - Attribute bags composed into component hosts
//! - Platform focusability and tab index rules

pub mod aria;
pub mod focus;

pub use aria::{AriaGlobalStates, AriaRole, LiveRegionMode, Orientation, ToolbarAria};
pub use focus::{TabIndex, is_focusable};

/// Accessibility error
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum A11yError {
    #[error("Invalid ARIA role: {0}")]
    InvalidRole(String),

    #[error("Invalid orientation: {0}")]
    InvalidOrientation(String),
}
