//! Focusability
//!
//! Platform rules deciding which elements can take input focus, and the
//! `tabindex` values used to make them reachable with Tab.

use rove_dom::{DomTree, ElementData, NodeId};

/// Tab index
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabIndex {
    /// No (valid) tabindex attribute
    Unset,
    /// Negative value: focusable by script or pointer, skipped by Tab
    Programmatic(i32),
    /// Zero or positive: part of the sequential Tab order
    Sequential(i32),
}

impl TabIndex {
    /// Value for the single roving tab stop
    pub const ACTIVE: i32 = 0;
    /// Value for every other roving candidate
    pub const INACTIVE: i32 = -1;

    pub fn parse(value: &str) -> Self {
        match value.trim().parse::<i32>() {
            Ok(n) if n < 0 => Self::Programmatic(n),
            Ok(n) => Self::Sequential(n),
            Err(_) => Self::Unset,
        }
    }
}

/// Whether `id` can receive input focus.
///
/// Follows the usual tabbable rules: the element must be a natively
/// focusable control (or carry a `tabindex`) and must not be inert,
/// hidden, a hidden input or disabled, including through a disabled
/// `fieldset` ancestor.
pub fn is_focusable(tree: &DomTree, id: NodeId) -> bool {
    let Some(elem) = tree.element(id) else {
        return false;
    };
    if !is_focus_candidate(tree, id, elem) {
        return false;
    }
    !(is_inert(tree, id) || is_hidden(tree, id) || is_hidden_input(elem) || is_disabled(tree, id, elem))
}

fn is_focus_candidate(tree: &DomTree, id: NodeId, elem: &ElementData) -> bool {
    match elem.tag.as_str() {
        "input" | "select" | "textarea" | "button" | "iframe" => return true,
        "details" => return !has_summary_child(tree, id),
        "a" | "area" if elem.has_attr("href") => return true,
        "audio" | "video" if elem.has_attr("controls") => return true,
        "summary" if is_first_summary(tree, id) => return true,
        _ => {}
    }
    if elem
        .get_attr("contenteditable")
        .is_some_and(|v| !v.eq_ignore_ascii_case("false"))
    {
        return true;
    }
    !elem.is("slot")
        && elem
            .get_attr("tabindex")
            .is_some_and(|v| TabIndex::parse(v) != TabIndex::Unset)
}

/// A `details` with a `summary` delegates focus to it
fn has_summary_child(tree: &DomTree, id: NodeId) -> bool {
    tree.child_elements(id)
        .into_iter()
        .any(|child| tree.element(child).is_some_and(|e| e.is("summary")))
}

/// `details > summary:first-of-type`
fn is_first_summary(tree: &DomTree, id: NodeId) -> bool {
    let Some(parent) = tree.parent(id) else {
        return false;
    };
    if !tree.element(parent).is_some_and(|p| p.is("details")) {
        return false;
    }
    tree.child_elements(parent)
        .into_iter()
        .find(|&child| tree.element(child).is_some_and(|e| e.is("summary")))
        == Some(id)
}

fn is_inert(tree: &DomTree, id: NodeId) -> bool {
    tree.closest(id, |e| e.has_attr("inert")).is_some()
}

fn is_hidden(tree: &DomTree, id: NodeId) -> bool {
    tree.closest(id, |e| e.has_attr("hidden")).is_some()
}

fn is_hidden_input(elem: &ElementData) -> bool {
    elem.is("input")
        && elem
            .get_attr("type")
            .is_some_and(|t| t.eq_ignore_ascii_case("hidden"))
}

fn is_form_control(elem: &ElementData) -> bool {
    matches!(
        elem.tag.as_str(),
        "button" | "input" | "select" | "textarea" | "fieldset" | "optgroup" | "option"
    )
}

fn is_disabled(tree: &DomTree, id: NodeId, elem: &ElementData) -> bool {
    if !is_form_control(elem) {
        return false;
    }
    if elem.has_attr("disabled") {
        return true;
    }

    // A disabled fieldset disables its descendants, except those inside its first legend
    let mut child = id;
    while let Some(parent) = tree.parent(child) {
        if let Some(p) = tree.element(parent) {
            if p.is("fieldset") && p.has_attr("disabled") {
                let first_legend = tree
                    .child_elements(parent)
                    .into_iter()
                    .find(|&c| tree.element(c).is_some_and(|e| e.is("legend")));
                return first_legend != Some(child);
            }
        }
        child = parent;
    }
    false
}
