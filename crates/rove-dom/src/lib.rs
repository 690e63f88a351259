//! rove DOM - Document Object Model
//!
//! Arena-based document tree that hosts rove components: elements,
//! attributes, shadow roots, slots, focus and child-list mutation records.

mod error;
mod node;
mod tree;
pub mod events;
pub mod observer;
pub mod shadow;

pub use error::{DomError, DomResult};
pub use node::{Attribute, ElementData, Node, NodeData};
pub use tree::{Direction, DomTree};
pub use events::{FocusEvent, KeyboardEvent, MouseEvent};
pub use observer::{MutationRecord, MutationType};
pub use shadow::{ShadowRootMode, Slot};

/// Node identifier (index into arena)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    /// Document node ID
    pub const ROOT: NodeId = NodeId(0);
    /// Sentinel for "no node" in sibling/parent links
    pub const NONE: NodeId = NodeId(u32::MAX);

    /// Check that this is not the NONE sentinel
    #[inline]
    pub fn is_valid(self) -> bool {
        self != Self::NONE
    }

    /// Arena index
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_valid() {
            write!(f, "#{}", self.0)
        } else {
            f.write_str("#none")
        }
    }
}
