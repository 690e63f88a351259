//! DOM Observers
//!
//! Child-list mutation records for watched hosts. Components drain the
//! queue with [`DomTree::take_records`] between input events, so a
//! structural change is always processed before later input is handled.

use crate::{DomTree, NodeId};

/// Mutation record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MutationRecord {
    pub mutation_type: MutationType,
    pub target: NodeId,
    pub added_nodes: Vec<NodeId>,
    pub removed_nodes: Vec<NodeId>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationType {
    ChildList,
}

impl DomTree {
    /// Start recording child-list changes of `target`
    pub fn observe_child_list(&mut self, target: NodeId) {
        if !self.observed.contains(&target) {
            self.observed.push(target);
        }
    }

    /// Stop recording changes of `target` and drop its pending records
    pub fn unobserve(&mut self, target: NodeId) {
        self.observed.retain(|&id| id != target);
        self.records.retain(|r| r.target != target);
    }

    /// Drain pending records
    pub fn take_records(&mut self) -> Vec<MutationRecord> {
        std::mem::take(&mut self.records)
    }

    /// Whether any records are pending for `target`
    pub fn has_pending_records(&self, target: NodeId) -> bool {
        self.records.iter().any(|r| r.target == target)
    }

    pub(crate) fn record_child_list(
        &mut self,
        target: NodeId,
        added_nodes: Vec<NodeId>,
        removed_nodes: Vec<NodeId>,
    ) {
        if !self.observed.contains(&target) {
            return;
        }
        self.records.push(MutationRecord {
            mutation_type: MutationType::ChildList,
            target,
            added_nodes,
            removed_nodes,
        });
    }
}
