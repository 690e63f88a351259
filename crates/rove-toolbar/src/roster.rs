//! Focus roster
//!
//! Owns the ordered candidate list and the single active index of a
//! container, and keeps `tabindex` and input focus in line with it:
//! exactly one candidate is Tab-reachable at a time.
//!
//! Every operation is a no-op while the container is detached or the list
//! is empty; out-of-range requests are clamped, never rejected.

use rove_a11y::TabIndex;
use rove_dom::NodeId;

use crate::candidate::CandidatePredicate;
use crate::host::FocusHost;
use crate::notify::{RosterEvent, Subscribers, SubscriptionId};

/// Clamp `requested` into `[0, len - 1]`; an empty list clamps to 0.
pub fn clamp_index(requested: isize, len: usize) -> usize {
    let last = isize::try_from(len.saturating_sub(1)).unwrap_or(isize::MAX);
    requested.clamp(0, last) as usize
}

/// Roving-tabindex state of one container
#[derive(Debug)]
pub struct FocusRoster {
    container: NodeId,
    predicate: CandidatePredicate,
    candidates: Vec<NodeId>,
    active_index: usize,
    attached: bool,
    subscribers: Subscribers,
}

impl FocusRoster {
    pub fn new(container: NodeId) -> Self {
        Self::with_predicate(container, CandidatePredicate::toolbar())
    }

    pub fn with_predicate(container: NodeId, predicate: CandidatePredicate) -> Self {
        Self {
            container,
            predicate,
            candidates: Vec::new(),
            active_index: 0,
            attached: false,
            subscribers: Subscribers::new(),
        }
    }

    pub fn container(&self) -> NodeId {
        self.container
    }

    pub fn predicate(&self) -> &CandidatePredicate {
        &self.predicate
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Current candidate list
    pub fn candidates(&self) -> &[NodeId] {
        &self.candidates
    }

    pub fn active_index(&self) -> usize {
        self.active_index
    }

    /// Control at the active index
    pub fn active_control(&self) -> Option<NodeId> {
        self.candidates.get(self.active_index).copied()
    }

    /// Whether a control sits at `index`
    pub fn has_candidate_at(&self, index: isize) -> bool {
        usize::try_from(index).is_ok_and(|i| i < self.candidates.len())
    }

    /// Position of `element` in the candidate list
    pub fn position_of(&self, element: NodeId) -> Option<usize> {
        self.candidates.iter().position(|&c| c == element)
    }

    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(&RosterEvent) + 'static,
    {
        self.subscribers.subscribe(callback)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.subscribers.unsubscribe(id)
    }

    /// Mark the container as connected to a live document
    pub fn attach(&mut self) {
        self.attached = true;
    }

    /// Mark the container as detached and release every control handle.
    /// The active index value is kept.
    pub fn detach(&mut self) {
        self.attached = false;
        if !self.candidates.is_empty() {
            self.candidates.clear();
            self.subscribers
                .notify(RosterEvent::CandidatesChanged { len: 0 });
        }
    }

    /// Recompute the candidate list from the container's slotted children.
    ///
    /// Skipped while detached: the previous list stays as it was and no
    /// focus side effects happen.
    pub fn rebuild_candidates<H: FocusHost + ?Sized>(
        &mut self,
        host: &mut H,
        children: &[NodeId],
    ) -> &[NodeId] {
        if !self.attached {
            tracing::trace!(container = %self.container, "rebuild deferred until attached");
            return &self.candidates;
        }

        self.candidates = self.predicate.collect(&*host, children);
        tracing::debug!(
            container = %self.container,
            children = children.len(),
            candidates = self.candidates.len(),
            "rebuilt candidate list"
        );
        self.subscribers.notify(RosterEvent::CandidatesChanged {
            len: self.candidates.len(),
        });

        if self.active_index >= self.candidates.len() && !self.candidates.is_empty() {
            self.set_active_index(self.active_index as isize);
        }
        self.apply_reachability_flags(host);
        &self.candidates
    }

    /// Clamp and store the active index, then notify subscribers.
    /// No-op while detached or when there is nothing to activate.
    pub fn set_active_index(&mut self, requested: isize) {
        if !self.attached || self.candidates.is_empty() {
            return;
        }
        self.active_index = clamp_index(requested, self.candidates.len());
        self.subscribers
            .notify(RosterEvent::ActiveIndexChanged(self.active_index));
    }

    /// Make the control at `requested` (default: the current one) the tab
    /// stop and give it input focus.
    pub fn focus_active<H: FocusHost + ?Sized>(&mut self, host: &mut H, requested: Option<isize>) {
        let requested = requested.unwrap_or(self.active_index as isize);
        self.set_active_index(requested);
        self.apply_reachability_flags(host);

        if let Some(control) = self.active_control() {
            tracing::trace!(
                container = %self.container,
                index = self.active_index,
                %control,
                "focusing active control"
            );
            host.focus(control);
        }
    }

    /// `tabindex=0` on the active control, `-1` on every other one
    pub fn apply_reachability_flags<H: FocusHost + ?Sized>(&self, host: &mut H) {
        if !self.attached || self.candidates.is_empty() {
            return;
        }
        for (index, &control) in self.candidates.iter().enumerate() {
            let value = if index == self.active_index {
                TabIndex::ACTIVE
            } else {
                TabIndex::INACTIVE
            };
            host.set_tab_index(control, value);
        }
    }

    /// Pointer activation inside the container. Always reports the event
    /// as handled, whether or not the target is a candidate.
    pub fn on_pointer_activate<H: FocusHost + ?Sized>(&mut self, host: &mut H, target: NodeId) -> bool {
        if let Some(position) = self.position_of(target) {
            if position != self.active_index {
                self.focus_active(host, Some(position as isize));
            }
        }
        true
    }

    /// Focus entered the container. Re-asserts focus on the active control
    /// when it came from outside (or from nowhere).
    pub fn on_focus_enter<H: FocusHost + ?Sized>(&mut self, host: &mut H, related: Option<NodeId>) {
        let from_inside = related.is_some_and(|origin| host.contains(self.container, origin));
        if !from_inside {
            self.focus_active(host, None);
        }
    }
}
