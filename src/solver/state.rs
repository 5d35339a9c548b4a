use std::collections::{BTreeSet, HashMap};

use crate::solver::{
    model::{Assignment, Csp, VarId},
    trail::Trail,
};

/// The mutable state of one `solve` call.
///
/// Created by snapshotting the model's registered domains, so the model
/// itself stays untouched and every solve starts fresh. The backtracking
/// driver and the active inference strategy are the only writers; every
/// domain removal goes through [`SearchState::remove_value`] so it is logged
/// on the trail and can be rewound when a branch fails.
#[derive(Debug)]
pub struct SearchState {
    domains: HashMap<VarId, BTreeSet<i64>>,
    assignment: Assignment,
    trail: Trail,
}

impl SearchState {
    /// Snapshots `model`'s registered domains into a fresh search state.
    pub fn new(model: &Csp) -> Self {
        let domains = model
            .variables()
            .map(|var| (var, model.domain(var).unwrap().clone()))
            .collect();
        Self {
            domains,
            assignment: Assignment::new(),
            trail: Trail::new(),
        }
    }

    /// The current working domain of `var`.
    pub fn domain(&self, var: VarId) -> &BTreeSet<i64> {
        &self.domains[&var]
    }

    pub fn is_assigned(&self, var: VarId) -> bool {
        self.assignment.contains_key(&var)
    }

    pub fn assigned_value(&self, var: VarId) -> Option<i64> {
        self.assignment.get(&var).copied()
    }

    /// The partial assignment built so far.
    pub fn assignment(&self) -> &Assignment {
        &self.assignment
    }

    /// Removes `value` from `var`'s working domain, logging the removal on
    /// the trail. Does nothing if the value was already absent.
    pub fn remove_value(&mut self, var: VarId, value: i64) {
        if let Some(domain) = self.domains.get_mut(&var) {
            if domain.remove(&value) {
                self.trail.record(var, value);
            }
        }
    }

    /// A trail position to rewind to with [`SearchState::undo_to`].
    pub fn mark(&self) -> usize {
        self.trail.mark()
    }

    /// Restores every domain removal logged since `mark`.
    pub fn undo_to(&mut self, mark: usize) {
        self.trail.undo_to(mark, &mut self.domains);
    }

    pub(crate) fn assign(&mut self, var: VarId, value: i64) {
        self.assignment.insert(var, value);
    }

    pub(crate) fn unassign(&mut self, var: VarId) {
        self.assignment.remove(&var);
    }
}
