//! Defines a collection of standard heuristics for selecting which variable
//! to branch on next during the search process.

use crate::solver::{
    model::{Csp, VarId},
    state::SearchState,
};

/// A trait for variable-selection heuristics.
///
/// Implementors of this trait define a strategy for choosing which unassigned
/// variable the solver should branch on next. A good heuristic can
/// dramatically improve solver performance; correctness never depends on the
/// choice.
pub trait VariableSelectionHeuristic: std::fmt::Debug {
    /// Selects the next variable to be assigned, or `None` if every variable
    /// already has a value.
    fn select_variable(&self, model: &Csp, state: &SearchState) -> Option<VarId>;
}

/// Selects the first unassigned variable in registration order.
///
/// This provides a basic, deterministic way to select variables.
#[derive(Debug, Clone, Copy)]
pub struct RegistrationOrderHeuristic;

impl VariableSelectionHeuristic for RegistrationOrderHeuristic {
    fn select_variable(&self, model: &Csp, state: &SearchState) -> Option<VarId> {
        model.variables().find(|&var| !state.is_assigned(var))
    }
}

/// Selects the unassigned variable with the Minimum Remaining Values (MRV)
/// in its working domain.
///
/// This is a "fail-first" strategy that prioritizes the most constrained
/// variable, so dead ends are hit while the search tree is still shallow.
/// Ties are broken by registration order to keep selection deterministic.
#[derive(Debug, Clone, Copy)]
pub struct MinimumRemainingValuesHeuristic;

impl VariableSelectionHeuristic for MinimumRemainingValuesHeuristic {
    fn select_variable(&self, model: &Csp, state: &SearchState) -> Option<VarId> {
        model
            .variables()
            .filter(|&var| !state.is_assigned(var))
            // min_by_key keeps the first of equally small domains, which is
            // the earliest-registered variable.
            .min_by_key(|&var| state.domain(var).len())
    }
}
