//! DOM Tree (arena-based allocation)

use serde::{Deserialize, Serialize};

use crate::observer::MutationRecord;
use crate::{DomError, DomResult, ElementData, Node, NodeData, NodeId};

/// Text direction resolved from the `dir` attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Ltr,
    Rtl,
}

impl Direction {
    /// Parse a `dir` attribute value. Anything but `rtl` reads as left-to-right.
    pub fn parse(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("rtl") {
            Self::Rtl
        } else {
            Self::Ltr
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ltr => "ltr",
            Self::Rtl => "rtl",
        }
    }
}

/// Arena-based DOM tree
///
/// Slot 0 is always the document node. Nodes are never freed; a removed
/// node simply has no parent and stops being connected.
#[derive(Debug)]
pub struct DomTree {
    nodes: Vec<Node>,
    /// Element holding input focus (NONE when the document has focus)
    focused: NodeId,
    /// Hosts whose child list is being watched
    pub(crate) observed: Vec<NodeId>,
    /// Pending child-list records
    pub(crate) records: Vec<MutationRecord>,
}

impl DomTree {
    /// Create a tree containing only the document node
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::document()],
            focused: NodeId::NONE,
            observed: Vec::new(),
            records: Vec::new(),
        }
    }

    /// Document node
    #[inline]
    pub fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    /// Get a node by ID
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    /// Get a mutable node by ID
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.index())
    }

    /// Number of nodes in the tree
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if tree is empty
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub(crate) fn push(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    /// Create a detached element
    pub fn create_element(&mut self, tag: &str) -> NodeId {
        self.push(Node::element(tag))
    }

    /// Create a detached text node
    pub fn create_text(&mut self, content: &str) -> NodeId {
        self.push(Node::text(content.to_string()))
    }

    fn node(&self, id: NodeId) -> DomResult<&Node> {
        self.get(id).ok_or(DomError::NotFound(id))
    }

    /// Element data, if `id` is an element
    pub fn element(&self, id: NodeId) -> Option<&ElementData> {
        self.get(id).and_then(Node::as_element)
    }

    fn element_mut(&mut self, id: NodeId) -> DomResult<&mut ElementData> {
        let node = self.get_mut(id).ok_or(DomError::NotFound(id))?;
        node.as_element_mut().ok_or(DomError::NotAnElement(id))
    }

    /// Check if `id` is an element
    pub fn is_element(&self, id: NodeId) -> bool {
        self.element(id).is_some()
    }

    /// Parent node, if any
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).map(|n| n.parent).filter(|p| p.is_valid())
    }

    // ------------------------------------------------------------------
    // Mutation
    // ------------------------------------------------------------------

    /// Append `child` as the last child of `parent`
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> DomResult<NodeId> {
        self.insert_before(parent, child, None)
    }

    /// Insert `child` before `reference` (or at the end when `None`)
    pub fn insert_before(
        &mut self,
        parent: NodeId,
        child: NodeId,
        reference: Option<NodeId>,
    ) -> DomResult<NodeId> {
        self.node(parent)?;
        let child_node = self.node(child)?;
        if matches!(child_node.data, NodeData::Document | NodeData::ShadowRoot { .. }) {
            return Err(DomError::HierarchyRequest { parent, child });
        }
        if self.is_inclusive_ancestor(child, parent) {
            return Err(DomError::HierarchyRequest { parent, child });
        }
        if let Some(reference) = reference {
            if self.parent(reference) != Some(parent) {
                return Err(DomError::NotAChild { parent, child: reference });
            }
            if reference == child {
                return Ok(child);
            }
        }

        if let Some(old_parent) = self.parent(child) {
            self.unlink(old_parent, child);
            self.record_child_list(old_parent, Vec::new(), vec![child]);
        }

        let next = reference.unwrap_or(NodeId::NONE);
        let prev = if next.is_valid() {
            self.nodes[next.index()].prev_sibling
        } else {
            self.nodes[parent.index()].last_child
        };

        {
            let node = &mut self.nodes[child.index()];
            node.parent = parent;
            node.prev_sibling = prev;
            node.next_sibling = next;
        }
        if prev.is_valid() {
            self.nodes[prev.index()].next_sibling = child;
        } else {
            self.nodes[parent.index()].first_child = child;
        }
        if next.is_valid() {
            self.nodes[next.index()].prev_sibling = child;
        } else {
            self.nodes[parent.index()].last_child = child;
        }

        self.record_child_list(parent, vec![child], Vec::new());
        Ok(child)
    }

    /// Remove `child` from `parent`
    pub fn remove_child(&mut self, parent: NodeId, child: NodeId) -> DomResult<NodeId> {
        self.node(parent)?;
        self.node(child)?;
        if self.parent(child) != Some(parent) {
            return Err(DomError::NotAChild { parent, child });
        }
        self.unlink(parent, child);

        if self.focused.is_valid() && self.is_inclusive_ancestor_composed(child, self.focused) {
            tracing::trace!("focused node {} left the document", self.focused);
            self.focused = NodeId::NONE;
        }

        self.record_child_list(parent, Vec::new(), vec![child]);
        Ok(child)
    }

    fn unlink(&mut self, parent: NodeId, child: NodeId) {
        let (prev, next) = {
            let node = &self.nodes[child.index()];
            (node.prev_sibling, node.next_sibling)
        };
        if prev.is_valid() {
            self.nodes[prev.index()].next_sibling = next;
        } else {
            self.nodes[parent.index()].first_child = next;
        }
        if next.is_valid() {
            self.nodes[next.index()].prev_sibling = prev;
        } else {
            self.nodes[parent.index()].last_child = prev;
        }
        let node = &mut self.nodes[child.index()];
        node.parent = NodeId::NONE;
        node.prev_sibling = NodeId::NONE;
        node.next_sibling = NodeId::NONE;
    }

    // ------------------------------------------------------------------
    // Traversal
    // ------------------------------------------------------------------

    /// Iterate children of `id` in document order
    pub fn children(&self, id: NodeId) -> Children<'_> {
        let next = self.get(id).map_or(NodeId::NONE, |n| n.first_child);
        Children { tree: self, next }
    }

    /// Element children of `id` in document order
    pub fn child_elements(&self, id: NodeId) -> Vec<NodeId> {
        self.children(id)
            .filter(|(_, node)| node.is_element())
            .map(|(child, _)| child)
            .collect()
    }

    /// All descendant elements of `id`, pre-order, without entering shadow trees
    pub fn descendant_elements(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        self.collect_descendants(id, &mut out);
        out
    }

    fn collect_descendants(&self, id: NodeId, out: &mut Vec<NodeId>) {
        for (child, node) in self.children(id) {
            if node.is_element() {
                out.push(child);
            }
            self.collect_descendants(child, out);
        }
    }

    /// Check if `ancestor` is `node` or one of its ancestors (same tree only)
    pub fn contains(&self, ancestor: NodeId, node: NodeId) -> bool {
        self.is_inclusive_ancestor(ancestor, node)
    }

    fn is_inclusive_ancestor(&self, ancestor: NodeId, node: NodeId) -> bool {
        let mut current = node;
        while current.is_valid() {
            if current == ancestor {
                return true;
            }
            current = self.get(current).map_or(NodeId::NONE, |n| n.parent);
        }
        false
    }

    /// Like `contains`, but steps from shadow roots to their hosts
    fn is_inclusive_ancestor_composed(&self, ancestor: NodeId, node: NodeId) -> bool {
        let mut current = node;
        while current.is_valid() {
            if current == ancestor {
                return true;
            }
            current = self.composed_parent(current);
        }
        false
    }

    fn composed_parent(&self, id: NodeId) -> NodeId {
        match self.get(id) {
            Some(node) if node.parent.is_valid() => node.parent,
            Some(node) => node.shadow_host().unwrap_or(NodeId::NONE),
            None => NodeId::NONE,
        }
    }

    /// Nearest inclusive ancestor element matching `pred`, staying in the same tree
    pub fn closest<F>(&self, id: NodeId, pred: F) -> Option<NodeId>
    where
        F: Fn(&ElementData) -> bool,
    {
        let mut current = id;
        while current.is_valid() {
            let node = self.get(current)?;
            if let Some(elem) = node.as_element() {
                if pred(elem) {
                    return Some(current);
                }
            }
            current = node.parent;
        }
        None
    }

    /// Whether `id` is reachable from the document node, crossing shadow hosts
    pub fn is_connected(&self, id: NodeId) -> bool {
        self.get(id).is_some() && self.is_inclusive_ancestor_composed(NodeId::ROOT, id)
    }

    /// Resolve the text direction of `id` from the nearest `[dir]` ancestor
    pub fn direction(&self, id: NodeId) -> Direction {
        self.closest(id, |e| e.has_attr("dir"))
            .and_then(|dir_node| self.get_attr(dir_node, "dir"))
            .map(Direction::parse)
            .unwrap_or_default()
    }

    // ------------------------------------------------------------------
    // Attributes
    // ------------------------------------------------------------------

    /// Get an attribute value
    pub fn get_attr(&self, id: NodeId, name: &str) -> Option<&str> {
        self.element(id)?.get_attr(name)
    }

    /// Check attribute presence
    pub fn has_attr(&self, id: NodeId, name: &str) -> bool {
        self.element(id).is_some_and(|e| e.has_attr(name))
    }

    /// Set an attribute on an element
    pub fn set_attr(&mut self, id: NodeId, name: &str, value: &str) -> DomResult<()> {
        self.element_mut(id)?.set_attr(name, value);
        Ok(())
    }

    /// Parsed `tabindex` attribute
    pub fn tab_index(&self, id: NodeId) -> Option<i32> {
        self.get_attr(id, "tabindex")?.trim().parse().ok()
    }

    /// Set the `tabindex` attribute
    pub fn set_tab_index(&mut self, id: NodeId, value: i32) -> DomResult<()> {
        self.set_attr(id, "tabindex", &value.to_string())
    }

    // ------------------------------------------------------------------
    // Focus
    // ------------------------------------------------------------------

    /// Move input focus to an element
    pub fn focus(&mut self, id: NodeId) -> DomResult<()> {
        self.element(id).ok_or(DomError::NotAnElement(id))?;
        if self.focused != id {
            tracing::trace!(from = %self.focused, to = %id, "focus moved");
            self.focused = id;
        }
        Ok(())
    }

    /// Drop input focus back to the document
    pub fn blur(&mut self) {
        self.focused = NodeId::NONE;
    }

    /// Element currently holding input focus
    pub fn active_element(&self) -> Option<NodeId> {
        Some(self.focused).filter(|id| id.is_valid())
    }
}

impl Default for DomTree {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over a node's children
pub struct Children<'a> {
    tree: &'a DomTree,
    next: NodeId,
}

impl<'a> Iterator for Children<'a> {
    type Item = (NodeId, &'a Node);

    fn next(&mut self) -> Option<Self::Item> {
        if !self.next.is_valid() {
            return None;
        }
        let id = self.next;
        let node = self.tree.get(id)?;
        self.next = node.next_sibling;
        Some((id, node))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list(tree: &DomTree, parent: NodeId) -> Vec<NodeId> {
        tree.children(parent).map(|(id, _)| id).collect()
    }

    #[test]
    fn test_append_and_insert() {
        let mut tree = DomTree::new();
        let ul = tree.create_element("ul");
        let a = tree.create_element("li");
        let b = tree.create_element("li");
        let c = tree.create_element("li");

        tree.append_child(tree.root(), ul).unwrap();
        tree.append_child(ul, a).unwrap();
        tree.append_child(ul, c).unwrap();
        tree.insert_before(ul, b, Some(c)).unwrap();

        assert_eq!(list(&tree, ul), vec![a, b, c]);
        assert_eq!(tree.parent(b), Some(ul));
    }

    #[test]
    fn test_remove_child() {
        let mut tree = DomTree::new();
        let div = tree.create_element("div");
        let a = tree.create_element("span");
        let b = tree.create_element("span");
        tree.append_child(div, a).unwrap();
        tree.append_child(div, b).unwrap();

        tree.remove_child(div, a).unwrap();
        assert_eq!(list(&tree, div), vec![b]);
        assert_eq!(tree.parent(a), None);
        assert_eq!(
            tree.remove_child(div, a),
            Err(DomError::NotAChild { parent: div, child: a })
        );
    }

    #[test]
    fn test_reparent_moves_node() {
        let mut tree = DomTree::new();
        let first = tree.create_element("div");
        let second = tree.create_element("div");
        let item = tree.create_element("p");
        tree.append_child(first, item).unwrap();
        tree.append_child(second, item).unwrap();

        assert!(list(&tree, first).is_empty());
        assert_eq!(list(&tree, second), vec![item]);
    }

    #[test]
    fn test_hierarchy_request() {
        let mut tree = DomTree::new();
        let outer = tree.create_element("div");
        let inner = tree.create_element("div");
        tree.append_child(outer, inner).unwrap();

        assert!(matches!(
            tree.append_child(inner, outer),
            Err(DomError::HierarchyRequest { .. })
        ));
        assert!(matches!(
            tree.append_child(outer, tree.root()),
            Err(DomError::HierarchyRequest { .. })
        ));
    }

    #[test]
    fn test_connected_and_contains() {
        let mut tree = DomTree::new();
        let div = tree.create_element("div");
        let span = tree.create_element("span");
        tree.append_child(div, span).unwrap();

        assert!(!tree.is_connected(span));
        tree.append_child(tree.root(), div).unwrap();
        assert!(tree.is_connected(span));
        assert!(tree.contains(div, span));
        assert!(tree.contains(span, span));
        assert!(!tree.contains(span, div));
    }

    #[test]
    fn test_direction_resolution() {
        let mut tree = DomTree::new();
        let html = tree.create_element("html");
        let body = tree.create_element("body");
        let bar = tree.create_element("rove-toolbar");
        tree.append_child(tree.root(), html).unwrap();
        tree.append_child(html, body).unwrap();
        tree.append_child(body, bar).unwrap();

        assert_eq!(tree.direction(bar), Direction::Ltr);
        tree.set_attr(html, "dir", "rtl").unwrap();
        assert_eq!(tree.direction(bar), Direction::Rtl);
        tree.set_attr(body, "dir", "ltr").unwrap();
        assert_eq!(tree.direction(bar), Direction::Ltr);
    }

    #[test]
    fn test_closest() {
        let mut tree = DomTree::new();
        let group = tree.create_element("div");
        let radio = tree.create_element("div");
        tree.append_child(group, radio).unwrap();
        tree.set_attr(group, "role", "radiogroup").unwrap();

        let found = tree.closest(radio, |e| e.get_attr("role") == Some("radiogroup"));
        assert_eq!(found, Some(group));
        assert_eq!(tree.closest(radio, |e| e.is("table")), None);
    }

    #[test]
    fn test_tab_index_and_focus() {
        let mut tree = DomTree::new();
        let button = tree.create_element("button");
        let text = tree.create_text("label");

        assert_eq!(tree.tab_index(button), None);
        tree.set_tab_index(button, -1).unwrap();
        assert_eq!(tree.tab_index(button), Some(-1));
        assert_eq!(tree.get_attr(button, "tabindex"), Some("-1"));

        tree.focus(button).unwrap();
        assert_eq!(tree.active_element(), Some(button));
        assert_eq!(tree.focus(text), Err(DomError::NotAnElement(text)));

        tree.blur();
        assert_eq!(tree.active_element(), None);
    }

    #[test]
    fn test_removing_focused_subtree_clears_focus() {
        let mut tree = DomTree::new();
        let div = tree.create_element("div");
        let button = tree.create_element("button");
        tree.append_child(tree.root(), div).unwrap();
        tree.append_child(div, button).unwrap();
        tree.focus(button).unwrap();

        tree.remove_child(tree.root(), div).unwrap();
        assert_eq!(tree.active_element(), None);
    }
}
