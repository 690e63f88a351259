//! Host environment
//!
//! Everything the toolbar needs from the live document, behind one trait.
//! Controls are plain [`NodeId`] handles; the host owns the nodes.

use rove_a11y::{AriaRole, is_focusable};
use rove_dom::{Direction, DomTree, NodeId, Slot};

/// Document services consumed by the toolbar
pub trait FocusHost {
    /// Reachable from a live document
    fn is_connected(&self, element: NodeId) -> bool;

    /// Platform focusability
    fn is_focusable(&self, element: NodeId) -> bool;

    /// Parsed `role` attribute
    fn role(&self, element: NodeId) -> Option<AriaRole>;

    /// Element children in document order
    fn child_elements(&self, element: NodeId) -> Vec<NodeId>;

    /// Every element inside `element`'s shadow root (empty without one)
    fn shadow_elements(&self, element: NodeId) -> Vec<NodeId>;

    /// Light-DOM children of `host` assigned to `slot`
    fn slotted_elements(&self, host: NodeId, slot: &Slot) -> Vec<NodeId>;

    /// Inclusive light-DOM containment
    fn contains(&self, container: NodeId, node: NodeId) -> bool;

    /// Nearest inclusive ancestor carrying `role`
    fn closest_role(&self, node: NodeId, role: &AriaRole) -> Option<NodeId>;

    /// Resolved text direction
    fn text_direction(&self, element: NodeId) -> Direction;

    fn attribute(&self, element: NodeId, name: &str) -> Option<String>;

    fn set_attribute(&mut self, element: NodeId, name: &str, value: &str);

    fn set_tab_index(&mut self, element: NodeId, value: i32);

    /// Move input focus
    fn focus(&mut self, element: NodeId);

    /// Start delivering child-list changes of `element`
    fn watch_children(&mut self, element: NodeId);

    fn unwatch_children(&mut self, element: NodeId);
}

impl FocusHost for DomTree {
    fn is_connected(&self, element: NodeId) -> bool {
        DomTree::is_connected(self, element)
    }

    fn is_focusable(&self, element: NodeId) -> bool {
        is_focusable(self, element)
    }

    fn role(&self, element: NodeId) -> Option<AriaRole> {
        self.get_attr(element, "role").and_then(AriaRole::parse)
    }

    fn child_elements(&self, element: NodeId) -> Vec<NodeId> {
        DomTree::child_elements(self, element)
    }

    fn shadow_elements(&self, element: NodeId) -> Vec<NodeId> {
        self.shadow_root(element)
            .map(|root| self.descendant_elements(root))
            .unwrap_or_default()
    }

    fn slotted_elements(&self, host: NodeId, slot: &Slot) -> Vec<NodeId> {
        self.assigned_elements(host, slot)
    }

    fn contains(&self, container: NodeId, node: NodeId) -> bool {
        DomTree::contains(self, container, node)
    }

    fn closest_role(&self, node: NodeId, role: &AriaRole) -> Option<NodeId> {
        self.closest(node, |e| {
            e.get_attr("role").and_then(AriaRole::parse).as_ref() == Some(role)
        })
    }

    fn text_direction(&self, element: NodeId) -> Direction {
        self.direction(element)
    }

    fn attribute(&self, element: NodeId, name: &str) -> Option<String> {
        self.get_attr(element, name).map(str::to_string)
    }

    fn set_attribute(&mut self, element: NodeId, name: &str, value: &str) {
        if let Err(err) = self.set_attr(element, name, value) {
            tracing::warn!(%element, name, %err, "failed to set attribute");
        }
    }

    fn set_tab_index(&mut self, element: NodeId, value: i32) {
        if let Err(err) = DomTree::set_tab_index(self, element, value) {
            tracing::warn!(%element, value, %err, "failed to set tabindex");
        }
    }

    fn focus(&mut self, element: NodeId) {
        if let Err(err) = DomTree::focus(self, element) {
            tracing::warn!(%element, %err, "failed to move focus");
        }
    }

    fn watch_children(&mut self, element: NodeId) {
        self.observe_child_list(element);
    }

    fn unwatch_children(&mut self, element: NodeId) {
        self.unobserve(element);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rove_dom::ShadowRootMode;

    #[test]
    fn test_shadow_elements() {
        let mut tree = DomTree::new();
        let host = tree.create_element("rove-button");
        let plain = tree.create_element("span");
        let root = tree.attach_shadow(host, ShadowRootMode::Open).unwrap();
        let wrapper = tree.create_element("div");
        let inner = tree.create_element("button");
        tree.append_child(root, wrapper).unwrap();
        tree.append_child(wrapper, inner).unwrap();

        assert_eq!(FocusHost::shadow_elements(&tree, host), vec![wrapper, inner]);
        assert!(FocusHost::shadow_elements(&tree, plain).is_empty());
    }

    #[test]
    fn test_closest_role() {
        let mut tree = DomTree::new();
        let group = tree.create_element("div");
        let radio = tree.create_element("div");
        tree.append_child(group, radio).unwrap();
        tree.set_attr(group, "role", "radiogroup").unwrap();
        tree.set_attr(radio, "role", "radio").unwrap();

        assert_eq!(tree.closest_role(radio, &AriaRole::RadioGroup), Some(group));
        assert_eq!(tree.closest_role(radio, &AriaRole::Radio), Some(radio));
        assert_eq!(tree.closest_role(group, &AriaRole::Toolbar), None);
        assert_eq!(FocusHost::role(&tree, radio), Some(AriaRole::Radio));
    }

    #[test]
    fn test_stale_handle_is_swallowed() {
        let mut tree = DomTree::new();
        let text = tree.create_text("not an element");
        FocusHost::set_tab_index(&mut tree, text, 0);
        FocusHost::focus(&mut tree, text);
        assert_eq!(tree.active_element(), None);
    }
}
