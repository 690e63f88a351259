//! rove Toolbar
//!
//! ARIA toolbar component with roving-tabindex keyboard navigation.
//!
//! Features:
//! - Single Tab stop across the toolbar's controls
//! - Arrow key navigation along the configured axis, mirrored in RTL
//! - Flattening of nested non-focusable wrappers into one control list
//! - Pointer and focus-entry tracking of the active control

pub mod candidate;
pub mod config;
pub mod host;
pub mod navigator;
pub mod notify;
pub mod roster;
pub mod toolbar;

pub use candidate::{CandidateCheck, CandidatePredicate};
pub use config::ToolbarConfig;
pub use host::FocusHost;
pub use navigator::{ArrowKey, Decision, DirectionalNavigator, Increment, orientation_key_mapping};
pub use notify::{RosterEvent, SubscriptionId};
pub use roster::{FocusRoster, clamp_index};
pub use toolbar::{END_SLOT, LABEL_SLOT, START_SLOT, Toolbar};

/// Toolbar error
#[derive(Debug, thiserror::Error)]
pub enum ToolbarError {
    #[error("Invalid configuration: {0}")]
    Config(#[from] serde_json::Error),

    #[error(transparent)]
    A11y(#[from] rove_a11y::A11yError),
}
