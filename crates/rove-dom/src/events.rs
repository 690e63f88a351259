//! DOM Events
//!
//! Input events delivered to component handlers.

use crate::NodeId;

/// Keyboard event (`keydown`)
#[derive(Debug, Clone)]
pub struct KeyboardEvent {
    /// Key identifier, e.g. `"ArrowRight"` or `"a"`
    pub key: String,
    pub target: NodeId,
    pub shift_key: bool,
    pub cancelable: bool,
    default_prevented: bool,
}

impl KeyboardEvent {
    /// Create a cancelable `keydown` for `key` targeted at `target`
    pub fn key_down(key: &str, target: NodeId) -> Self {
        Self {
            key: key.to_string(),
            target,
            shift_key: false,
            cancelable: true,
            default_prevented: false,
        }
    }

    /// Same event with shift held
    pub fn with_shift(mut self) -> Self {
        self.shift_key = true;
        self
    }

    /// Suppress the platform's default key behavior
    pub fn prevent_default(&mut self) {
        if self.cancelable {
            self.default_prevented = true;
        }
    }

    /// Check if default was prevented
    pub fn is_default_prevented(&self) -> bool {
        self.default_prevented
    }
}

/// Pointer activation (`click`)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MouseEvent {
    pub target: NodeId,
}

impl MouseEvent {
    pub fn click(target: NodeId) -> Self {
        Self { target }
    }
}

/// Focus event (`focusin`)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FocusEvent {
    pub target: NodeId,
    /// Element that lost focus, if any
    pub related_target: Option<NodeId>,
}

impl FocusEvent {
    pub fn focus_in(target: NodeId, related_target: Option<NodeId>) -> Self {
        Self {
            target,
            related_target,
        }
    }
}
