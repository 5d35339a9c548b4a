//! The AC-3 arc-revision core.
//!
//! Used in two places: whole-network preprocessing before search starts, and
//! (restricted to a seeded queue) by the `MaintainingArcConsistency`
//! inference strategy after each tentative assignment. Both run the same
//! revision loop; the only difference is how the work list is seeded.

use tracing::trace;

use crate::solver::{
    model::{Csp, VarId},
    state::SearchState,
    stats::SearchStats,
    work_list::WorkList,
};

/// Enforces arc consistency over the whole constraint network.
///
/// Seeds the work list with every stored constraint direction and runs
/// [`propagate`]. Returns `false` if some domain was emptied, in which case
/// the problem has no solution.
pub fn enforce_arc_consistency(
    model: &Csp,
    state: &mut SearchState,
    stats: &mut SearchStats,
) -> bool {
    let mut worklist = WorkList::new();
    for x in model.variables() {
        for y in model.neighbours(x) {
            worklist.push_back(x, y);
        }
    }
    propagate(model, state, stats, worklist)
}

/// Runs the AC-3 loop until the work list empties (fixpoint) or a domain is
/// wiped out.
///
/// When revising `(x, y)` shrinks `x`'s domain, the arcs `(z, x)` for every
/// neighbour `z` of `x` other than `y` are re-enqueued, since a value of `z`
/// may just have lost its last support. Assigned variables are never
/// re-enqueued as revision targets: their value is fixed and their domains
/// are no longer consulted.
pub fn propagate(
    model: &Csp,
    state: &mut SearchState,
    stats: &mut SearchStats,
    mut worklist: WorkList,
) -> bool {
    while let Some((x, y)) = worklist.pop_front() {
        if revise(model, state, stats, x, y) {
            if state.domain(x).is_empty() {
                trace!(var = x, "domain wiped out during propagation");
                return false;
            }
            for z in model.neighbours(x) {
                if z != y && !state.is_assigned(z) {
                    worklist.push_back(z, x);
                }
            }
        }
    }
    true
}

/// Removes from `x`'s domain every value with no support in `y`.
///
/// A value `m` of `x` is supported if some value `n` currently in `y`'s
/// domain satisfies the `(x, y)` relation; when `y` is already assigned, the
/// assigned value is the only candidate support. Returns whether the domain
/// changed. Every removal goes through the trail.
pub fn revise(
    model: &Csp,
    state: &mut SearchState,
    stats: &mut SearchStats,
    x: VarId,
    y: VarId,
) -> bool {
    stats.nodes_explored += 1;

    let candidates: Vec<i64> = state.domain(x).iter().copied().collect();
    let assigned = state.assigned_value(y);
    let mut revised = false;

    for m in candidates {
        let supported = match assigned {
            Some(v) => {
                stats.constraint_checks += 1;
                model.allows(x, y, m, v)
            }
            None => {
                let mut found = false;
                for &n in state.domain(y) {
                    stats.constraint_checks += 1;
                    if model.allows(x, y, m, n) {
                        found = true;
                        break;
                    }
                }
                found
            }
        };
        if !supported {
            state.remove_value(x, m);
            revised = true;
        }
    }

    revised
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use pretty_assertions::assert_eq;

    use super::*;

    fn run_ac3(model: &Csp) -> (SearchState, SearchStats, bool) {
        let mut state = SearchState::new(model);
        let mut stats = SearchStats::default();
        let feasible = enforce_arc_consistency(model, &mut state, &mut stats);
        (state, stats, feasible)
    }

    #[test]
    fn revise_drops_unsupported_values() {
        let mut model = Csp::new();
        model.add_variable(0, [1, 2, 3]).unwrap();
        model.add_variable(1, [1, 2]).unwrap();
        // 0 must be strictly less than 1.
        model
            .add_constraint(0, 1, [(1, 2), (1, 3), (2, 3)])
            .unwrap();

        let mut state = SearchState::new(&model);
        let mut stats = SearchStats::default();
        let revised = revise(&model, &mut state, &mut stats, 0, 1);

        assert!(revised);
        assert_eq!(state.domain(0), &BTreeSet::from([1]));
        assert!(stats.constraint_checks > 0);
    }

    #[test]
    fn detects_infeasibility_without_search() {
        let mut model = Csp::new();
        model.add_variable(0, [1]).unwrap();
        model.add_variable(1, [1]).unwrap();
        // The only joint value (1, 1) is forbidden: the relation is empty.
        model.add_constraint(0, 1, []).unwrap();

        let (_, _, feasible) = run_ac3(&model);
        assert!(!feasible);
    }

    #[test]
    fn is_idempotent_at_fixpoint() {
        let mut model = Csp::new();
        model.add_variable(0, [1, 2, 3]).unwrap();
        model.add_variable(1, [1, 2, 3]).unwrap();
        model.add_variable(2, [1, 2, 3]).unwrap();
        model
            .add_constraint(0, 1, [(1, 2), (2, 3), (1, 3)])
            .unwrap();
        model
            .add_constraint(1, 2, [(2, 3), (3, 1), (2, 1)])
            .unwrap();

        let (mut state, mut stats, feasible) = run_ac3(&model);
        assert!(feasible);
        let after_first: Vec<BTreeSet<i64>> =
            model.variables().map(|v| state.domain(v).clone()).collect();

        let feasible = enforce_arc_consistency(&model, &mut state, &mut stats);
        assert!(feasible);
        let after_second: Vec<BTreeSet<i64>> =
            model.variables().map(|v| state.domain(v).clone()).collect();

        assert_eq!(after_first, after_second);
    }

    #[test]
    fn never_removes_a_supported_value() {
        // 0 != 1 over {1, 2}: every value keeps support, nothing is pruned.
        let mut model = Csp::new();
        model.add_variable(0, [1, 2]).unwrap();
        model.add_variable(1, [1, 2]).unwrap();
        model.add_constraint(0, 1, [(1, 2), (2, 1)]).unwrap();

        let (state, _, feasible) = run_ac3(&model);
        assert!(feasible);
        assert_eq!(state.domain(0), &BTreeSet::from([1, 2]));
        assert_eq!(state.domain(1), &BTreeSet::from([1, 2]));
    }

    #[test]
    fn revision_against_an_assigned_variable_uses_its_value() {
        let mut model = Csp::new();
        model.add_variable(0, [1, 2]).unwrap();
        model.add_variable(1, [1, 2]).unwrap();
        model.add_constraint(0, 1, [(1, 2), (2, 1)]).unwrap();

        let mut state = SearchState::new(&model);
        let mut stats = SearchStats::default();
        state.assign(1, 2);

        let revised = revise(&model, &mut state, &mut stats, 0, 1);
        assert!(revised);
        // Only (1, 2) is allowed against the assigned value 2.
        assert_eq!(state.domain(0), &BTreeSet::from([1]));
    }
}
