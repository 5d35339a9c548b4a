use std::collections::{HashSet, VecDeque};

use crate::solver::model::VarId;

/// A directed arc `(x, y)`: "does every value of `x` still have support in
/// `y`'s domain?"
pub type Arc = (VarId, VarId);

/// A FIFO queue of directed arcs with membership de-duplication.
///
/// AC-3 re-enqueues the arcs into a revised variable; without the membership
/// set the same arc could sit in the queue many times and be revised
/// redundantly. Popping an arc removes it from the membership set, so it can
/// be re-enqueued later if its source shrinks again.
#[derive(Debug, Default)]
pub struct WorkList {
    queue: VecDeque<Arc>,
    queue_members: HashSet<Arc>,
}

impl WorkList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_back(&mut self, x: VarId, y: VarId) {
        if self.queue_members.insert((x, y)) {
            self.queue.push_back((x, y));
        }
    }

    pub fn pop_front(&mut self) -> Option<Arc> {
        let arc = self.queue.pop_front()?;
        self.queue_members.remove(&arc);
        Some(arc)
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}
