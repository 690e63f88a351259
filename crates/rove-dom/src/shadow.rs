//! Shadow DOM
//!
//! Shadow roots and slot assignment.

use crate::{DomError, DomResult, DomTree, Node, NodeId};

/// Shadow root mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShadowRootMode {
    #[default]
    Open,
    Closed,
}

/// A named slot in a component's shadow template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slot {
    pub name: String,
}

impl Slot {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn default_slot() -> Self {
        Self::new("")
    }

    pub fn is_default(&self) -> bool {
        self.name.is_empty()
    }

    /// Whether a light-DOM child carrying `slot_attr` lands in this slot
    pub fn accepts(&self, slot_attr: Option<&str>) -> bool {
        slot_attr.unwrap_or("") == self.name
    }
}

impl DomTree {
    /// Attach a shadow root to `host`
    pub fn attach_shadow(&mut self, host: NodeId, mode: ShadowRootMode) -> DomResult<NodeId> {
        let existing = self
            .element(host)
            .ok_or(DomError::NotAnElement(host))?
            .shadow_root;
        if existing.is_some() {
            return Err(DomError::ShadowRootExists(host));
        }

        let root = self.push(Node::shadow_root(host, mode));
        if let Some(elem) = self.get_mut(host).and_then(Node::as_element_mut) {
            elem.shadow_root = Some(root);
        }
        tracing::trace!(%host, %root, ?mode, "attached shadow root");
        Ok(root)
    }

    /// Shadow root hosted by `host`
    pub fn shadow_root(&self, host: NodeId) -> Option<NodeId> {
        self.element(host)?.shadow_root
    }

    /// Host element of a shadow root
    pub fn shadow_host(&self, root: NodeId) -> Option<NodeId> {
        self.get(root)?.shadow_host()
    }

    /// Light-DOM element children of `host` assigned to `slot`, in document order
    pub fn assigned_elements(&self, host: NodeId, slot: &Slot) -> Vec<NodeId> {
        self.children(host)
            .filter_map(|(id, node)| node.as_element().map(|e| (id, e)))
            .filter(|(_, elem)| slot.accepts(elem.get_attr("slot")))
            .map(|(id, _)| id)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attach_shadow() {
        let mut tree = DomTree::new();
        let host = tree.create_element("rove-button");
        let root = tree.attach_shadow(host, ShadowRootMode::Open).unwrap();
        let inner = tree.create_element("button");
        tree.append_child(root, inner).unwrap();

        assert_eq!(tree.shadow_root(host), Some(root));
        assert_eq!(tree.shadow_host(root), Some(host));
        assert_eq!(tree.descendant_elements(root), vec![inner]);
        assert_eq!(
            tree.attach_shadow(host, ShadowRootMode::Closed),
            Err(DomError::ShadowRootExists(host))
        );
    }

    #[test]
    fn test_shadow_content_connectivity() {
        let mut tree = DomTree::new();
        let host = tree.create_element("rove-button");
        let root = tree.attach_shadow(host, ShadowRootMode::Open).unwrap();
        let inner = tree.create_element("button");
        tree.append_child(root, inner).unwrap();

        assert!(!tree.is_connected(inner));
        tree.append_child(tree.root(), host).unwrap();
        assert!(tree.is_connected(inner));
        // Light-DOM containment does not cross into the shadow tree
        assert!(!tree.contains(host, inner));
    }

    #[test]
    fn test_slot_assignment() {
        let mut tree = DomTree::new();
        let host = tree.create_element("rove-toolbar");
        let label = tree.create_element("span");
        let first = tree.create_element("button");
        let text = tree.create_text("loose text");
        let second = tree.create_element("button");
        tree.set_attr(label, "slot", "label").unwrap();
        for child in [label, first, text, second] {
            tree.append_child(host, child).unwrap();
        }

        assert_eq!(tree.assigned_elements(host, &Slot::default_slot()), vec![first, second]);
        assert_eq!(tree.assigned_elements(host, &Slot::new("label")), vec![label]);
        assert!(tree.assigned_elements(host, &Slot::new("end")).is_empty());
    }
}
