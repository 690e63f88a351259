//! Directional navigation
//!
//! Maps an arrow key, the toolbar orientation and the text direction to a
//! signed step through the candidate list.

use rove_a11y::Orientation;
use rove_dom::{Direction, KeyboardEvent};

/// The four arrow keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArrowKey {
    Up,
    Down,
    Left,
    Right,
}

impl ArrowKey {
    /// Parse a key identifier such as `"ArrowLeft"`
    pub fn parse(key: &str) -> Option<Self> {
        Some(match key {
            "ArrowUp" => Self::Up,
            "ArrowDown" => Self::Down,
            "ArrowLeft" => Self::Left,
            "ArrowRight" => Self::Right,
            _ => return None,
        })
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Up => "ArrowUp",
            Self::Down => "ArrowDown",
            Self::Left => "ArrowLeft",
            Self::Right => "ArrowRight",
        }
    }
}

/// Step attached to a key for one orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Increment {
    /// Same step in either text direction
    Fixed(i32),
    /// Mirrored by text direction
    Directional { ltr: i32, rtl: i32 },
}

impl Increment {
    pub fn resolve(self, direction: Direction) -> i32 {
        match (self, direction) {
            (Self::Fixed(step), _) => step,
            (Self::Directional { ltr, .. }, Direction::Ltr) => ltr,
            (Self::Directional { rtl, .. }, Direction::Rtl) => rtl,
        }
    }
}

/// Key mapping table: keyed by key, then orientation
pub fn orientation_key_mapping(key: ArrowKey, orientation: Orientation) -> Option<Increment> {
    match (key, orientation) {
        (ArrowKey::Up, Orientation::Vertical) => Some(Increment::Fixed(-1)),
        (ArrowKey::Down, Orientation::Vertical) => Some(Increment::Fixed(1)),
        (ArrowKey::Left, Orientation::Horizontal) => Some(Increment::Directional { ltr: -1, rtl: 1 }),
        (ArrowKey::Right, Orientation::Horizontal) => Some(Increment::Directional { ltr: 1, rtl: -1 }),
        _ => None,
    }
}

/// Outcome of looking at a key event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Arrow key for this widget; `0` means recognized but inert in this orientation
    Delta(i32),
    /// Not an event for this widget
    NotApplicable,
}

/// Orientation and direction state used to interpret arrow keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DirectionalNavigator {
    pub orientation: Orientation,
    pub direction: Direction,
}

impl DirectionalNavigator {
    pub fn new(orientation: Orientation, direction: Direction) -> Self {
        Self {
            orientation,
            direction,
        }
    }

    /// Signed step for an arrow key, 0 when the key does nothing in this orientation
    pub fn increment(&self, key: ArrowKey) -> i32 {
        orientation_key_mapping(key, self.orientation)
            .map(|inc| inc.resolve(self.direction))
            .unwrap_or(0)
    }

    /// Decide from the raw key identifier and modifier state
    pub fn compute_increment(&self, key: &str, shift_key: bool, default_prevented: bool) -> Decision {
        if default_prevented || shift_key {
            return Decision::NotApplicable;
        }
        match ArrowKey::parse(key) {
            Some(arrow) => Decision::Delta(self.increment(arrow)),
            None => Decision::NotApplicable,
        }
    }

    /// Decide for a keyboard event
    pub fn decide(&self, event: &KeyboardEvent) -> Decision {
        self.compute_increment(&event.key, event.shift_key, event.is_default_prevented())
    }
}
