use std::time::Instant;

use tracing::debug;

use crate::solver::{
    config::{InferenceMode, SolverConfig, ValueOrder, VariableOrder},
    heuristics::{
        value::{DomainOrderHeuristic, LeastConstrainingValueHeuristic, ValueOrderingHeuristic},
        variable::{
            MinimumRemainingValuesHeuristic, RegistrationOrderHeuristic,
            VariableSelectionHeuristic,
        },
    },
    inference::{ForwardChecking, InferenceStrategy, MaintainingArcConsistency, NoInference},
    model::{Assignment, Csp, VarId},
    propagation,
    state::SearchState,
    stats::SearchStats,
};

/// The main engine for solving binary constraint satisfaction problems.
///
/// A `SolverEngine` takes a populated [`Csp`] model and searches for a
/// complete assignment. Each solve first enforces arc consistency over the
/// whole network (AC-3); if that already wipes out a domain the problem is
/// reported unsolvable without any search. Otherwise a depth-first
/// backtracking search runs, guided by the configured variable- and
/// value-ordering heuristics and pruned by the configured inference
/// strategy. Recursion depth is bounded by the variable count.
///
/// The engine keeps per-solve [`SearchStats`], readable after `solve`
/// returns.
#[derive(Debug)]
pub struct SolverEngine {
    variable_heuristic: Box<dyn VariableSelectionHeuristic>,
    value_heuristic: Box<dyn ValueOrderingHeuristic>,
    inference: Box<dyn InferenceStrategy>,
    stats: SearchStats,
}

impl SolverEngine {
    /// Creates an engine from a [`SolverConfig`].
    pub fn new(config: SolverConfig) -> Self {
        let variable_heuristic: Box<dyn VariableSelectionHeuristic> = match config.variable_order {
            VariableOrder::RegistrationOrder => Box::new(RegistrationOrderHeuristic),
            VariableOrder::MinimumRemainingValues => Box::new(MinimumRemainingValuesHeuristic),
        };
        let value_heuristic: Box<dyn ValueOrderingHeuristic> = match config.value_order {
            ValueOrder::DomainOrder => Box::new(DomainOrderHeuristic),
            ValueOrder::LeastConstrainingValue => Box::new(LeastConstrainingValueHeuristic),
        };
        let inference: Box<dyn InferenceStrategy> = match config.inference {
            InferenceMode::None => Box::new(NoInference),
            InferenceMode::ForwardChecking => Box::new(ForwardChecking),
            InferenceMode::MaintainingArcConsistency => Box::new(MaintainingArcConsistency),
        };
        Self::with_strategies(variable_heuristic, value_heuristic, inference)
    }

    /// Creates an engine from explicit strategy objects, for callers that
    /// bring their own heuristics.
    pub fn with_strategies(
        variable_heuristic: Box<dyn VariableSelectionHeuristic>,
        value_heuristic: Box<dyn ValueOrderingHeuristic>,
        inference: Box<dyn InferenceStrategy>,
    ) -> Self {
        Self {
            variable_heuristic,
            value_heuristic,
            inference,
            stats: SearchStats::default(),
        }
    }

    /// Attempts to solve the given model.
    ///
    /// Returns `Some(assignment)` with one value per variable satisfying
    /// every constraint, or `None` if no such assignment exists. The model
    /// is never mutated: the engine works on a snapshot of the registered
    /// domains, so repeated calls are independent.
    pub fn solve(&mut self, model: &Csp) -> Option<Assignment> {
        self.stats = SearchStats::default();
        let started = Instant::now();

        let mut state = SearchState::new(model);
        let result = if propagation::enforce_arc_consistency(model, &mut state, &mut self.stats) {
            self.backtrack(model, &mut state)
        } else {
            debug!("arc-consistency preprocessing proved the model unsolvable");
            None
        };

        self.stats.duration = started.elapsed();
        debug!(
            nodes = self.stats.nodes_explored,
            checks = self.stats.constraint_checks,
            solved = result.is_some(),
            "search finished in {:?}",
            self.stats.duration
        );
        result
    }

    /// Nodes explored during the last solve: arc revisions plus values tried.
    pub fn nodes_explored(&self) -> u64 {
        self.stats.nodes_explored
    }

    /// Pairwise compatibility tests performed during the last solve.
    pub fn constraint_checks(&self) -> u64 {
        self.stats.constraint_checks
    }

    /// Full statistics of the last solve.
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    fn backtrack(&mut self, model: &Csp, state: &mut SearchState) -> Option<Assignment> {
        if state.assignment().len() == model.len() {
            return Some(state.assignment().clone());
        }

        let Some(var) = self.variable_heuristic.select_variable(model, state) else {
            // Unreachable while the completeness check above holds.
            return Some(state.assignment().clone());
        };

        for value in self.value_heuristic.order_values(model, state, var) {
            self.stats.nodes_explored += 1;

            if !self.consistent_with_assignment(model, state, var, value) {
                continue;
            }

            let mark = state.mark();
            state.assign(var, value);
            if self
                .inference
                .prune(model, state, var, value, &mut self.stats)
            {
                if let Some(solution) = self.backtrack(model, state) {
                    return Some(solution);
                }
            }
            state.unassign(var);
            state.undo_to(mark);
        }

        None
    }

    /// Checks `var = value` against every already-assigned variable sharing
    /// a constraint with `var`. Neighbours are scanned in ascending id order
    /// so the check count is deterministic.
    fn consistent_with_assignment(
        &mut self,
        model: &Csp,
        state: &SearchState,
        var: VarId,
        value: i64,
    ) -> bool {
        for n in model.neighbours(var) {
            if let Some(assigned) = state.assigned_value(n) {
                self.stats.constraint_checks += 1;
                if !model.allows(var, n, value, assigned) {
                    return false;
                }
            }
        }
        true
    }
}

impl Default for SolverEngine {
    fn default() -> Self {
        Self::new(SolverConfig::default())
    }
}
