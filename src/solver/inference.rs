//! Look-ahead inference strategies run after each tentative assignment.
//!
//! Exactly one strategy is active per engine. A strategy may only prune
//! working domains, never touch the assignment, and every removal it makes
//! goes through the trail so the driver can rewind the step when it fails.

use crate::solver::{
    model::{Csp, VarId},
    propagation,
    state::SearchState,
    stats::SearchStats,
    work_list::WorkList,
};

/// A trait for look-ahead pruning strategies.
pub trait InferenceStrategy: std::fmt::Debug {
    /// Prunes neighbouring domains after `var` was tentatively assigned
    /// `value`.
    ///
    /// Returns `false` if the assignment provably leads to a dead end (some
    /// domain was emptied). Removals made before the failure was detected
    /// stay on the trail; undoing them is the driver's job.
    fn prune(
        &self,
        model: &Csp,
        state: &mut SearchState,
        var: VarId,
        value: i64,
        stats: &mut SearchStats,
    ) -> bool;
}

/// No look-ahead at all; the search relies solely on the assignment-time
/// consistency check.
#[derive(Debug, Clone, Copy)]
pub struct NoInference;

impl InferenceStrategy for NoInference {
    fn prune(
        &self,
        _model: &Csp,
        _state: &mut SearchState,
        _var: VarId,
        _value: i64,
        _stats: &mut SearchStats,
    ) -> bool {
        true
    }
}

/// Forward checking: prune the assigned value's direct consequences.
///
/// For every unassigned neighbour of `var`, removes the neighbour values
/// incompatible with `value`. Stops at the first neighbour whose domain is
/// wiped out; later neighbours are left untouched for this step.
#[derive(Debug, Clone, Copy)]
pub struct ForwardChecking;

impl InferenceStrategy for ForwardChecking {
    fn prune(
        &self,
        model: &Csp,
        state: &mut SearchState,
        var: VarId,
        value: i64,
        stats: &mut SearchStats,
    ) -> bool {
        for n in model.neighbours(var) {
            if state.is_assigned(n) {
                continue;
            }
            let candidates: Vec<i64> = state.domain(n).iter().copied().collect();
            for v in candidates {
                stats.constraint_checks += 1;
                if !model.allows(var, n, value, v) {
                    state.remove_value(n, v);
                }
            }
            if state.domain(n).is_empty() {
                return false;
            }
        }
        true
    }
}

/// MAC-3: maintain full arc consistency around the assignment.
///
/// Seeds the work list with the arc `(n, var)` for every unassigned
/// neighbour `n` and runs the same revision loop as preprocessing, so
/// pruning cascades beyond `var`'s direct neighbours. Strictly stronger
/// than forward checking, at a higher cost per node.
#[derive(Debug, Clone, Copy)]
pub struct MaintainingArcConsistency;

impl InferenceStrategy for MaintainingArcConsistency {
    fn prune(
        &self,
        model: &Csp,
        state: &mut SearchState,
        var: VarId,
        _value: i64,
        stats: &mut SearchStats,
    ) -> bool {
        let mut worklist = WorkList::new();
        for n in model.neighbours(var) {
            if !state.is_assigned(n) {
                worklist.push_back(n, var);
            }
        }
        propagation::propagate(model, state, stats, worklist)
    }
}
