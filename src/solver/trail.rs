use std::collections::{BTreeSet, HashMap};

use crate::solver::model::VarId;

/// An append-only log of domain removals, used to rewind search state.
///
/// Every value pruned from a working domain is pushed here as a
/// `(variable, value)` entry. Before a tentative assignment the driver takes
/// a [`mark`], and when the branch fails it truncates back to that mark,
/// reinserting the logged values. This keeps one branch's pruning from ever
/// leaking into a sibling branch.
///
/// [`mark`]: Trail::mark
#[derive(Debug, Default)]
pub struct Trail {
    entries: Vec<(VarId, i64)>,
}

impl Trail {
    pub fn new() -> Self {
        Self::default()
    }

    /// The current length of the log, to be passed to [`Trail::undo_to`].
    pub fn mark(&self) -> usize {
        self.entries.len()
    }

    /// Logs the removal of `value` from `var`'s domain.
    pub fn record(&mut self, var: VarId, value: i64) {
        self.entries.push((var, value));
    }

    /// Rewinds the log to `mark`, restoring every removal made since then.
    ///
    /// Entries are undone newest-first, though for set domains the order is
    /// immaterial.
    pub fn undo_to(&mut self, mark: usize, domains: &mut HashMap<VarId, BTreeSet<i64>>) {
        for (var, value) in self.entries.drain(mark..).rev() {
            if let Some(domain) = domains.get_mut(&var) {
                domain.insert(value);
            }
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
