//! Candidate selection
//!
//! Decides which slotted elements take part in roving focus and flattens
//! wrapper markup into one ordered list.

use std::collections::HashSet;

use rove_a11y::AriaRole;
use rove_dom::NodeId;

use crate::host::FocusHost;

/// One way an element can qualify as a candidate
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CandidateCheck {
    /// Platform-focusable element
    Focusable,
    /// Element carrying an explicit role
    Role(AriaRole),
    /// Element whose shadow subtree holds a focusable element
    FocusableShadow,
}

impl CandidateCheck {
    fn matches<H: FocusHost + ?Sized>(&self, host: &H, element: NodeId) -> bool {
        match self {
            Self::Focusable => host.is_focusable(element),
            Self::Role(role) => host.role(element).as_ref() == Some(role),
            Self::FocusableShadow => host
                .shadow_elements(element)
                .into_iter()
                .any(|inner| host.is_focusable(inner)),
        }
    }
}

/// Any-of composition of [`CandidateCheck`]s
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidatePredicate {
    checks: Vec<CandidateCheck>,
}

impl CandidatePredicate {
    pub fn new(checks: Vec<CandidateCheck>) -> Self {
        Self { checks }
    }

    /// Focusable elements, `role="radio"` elements and composites with a
    /// focusable shadow subtree
    pub fn toolbar() -> Self {
        Self::new(vec![
            CandidateCheck::Focusable,
            CandidateCheck::Role(AriaRole::Radio),
            CandidateCheck::FocusableShadow,
        ])
    }

    /// Add another accepted check
    pub fn with(mut self, check: CandidateCheck) -> Self {
        if !self.checks.contains(&check) {
            self.checks.push(check);
        }
        self
    }

    pub fn checks(&self) -> &[CandidateCheck] {
        &self.checks
    }

    /// Check a single element
    pub fn is_candidate<H: FocusHost + ?Sized>(&self, host: &H, element: NodeId) -> bool {
        self.checks.iter().any(|check| check.matches(host, element))
    }

    /// Flatten `children` into the ordered candidate list.
    ///
    /// A matching element is taken as-is and its subtree is not searched;
    /// a non-matching element with element children is replaced by the
    /// candidates found among them, depth first.
    pub fn collect<H: FocusHost + ?Sized>(&self, host: &H, children: &[NodeId]) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut seen = HashSet::new();
        for &child in children {
            self.collect_into(host, child, &mut out, &mut seen);
        }
        out
    }

    fn collect_into<H: FocusHost + ?Sized>(
        &self,
        host: &H,
        element: NodeId,
        out: &mut Vec<NodeId>,
        seen: &mut HashSet<NodeId>,
    ) {
        if self.is_candidate(host, element) {
            if seen.insert(element) {
                out.push(element);
            }
            return;
        }
        for child in host.child_elements(element) {
            self.collect_into(host, child, out, seen);
        }
    }
}

impl Default for CandidatePredicate {
    fn default() -> Self {
        Self::toolbar()
    }
}
