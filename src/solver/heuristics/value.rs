use crate::solver::{
    model::{Csp, VarId},
    state::SearchState,
};

/// A trait for strategies that determine the order of values to try for a
/// variable.
///
/// The returned values must be exactly the variable's current working
/// domain; only the order may differ. Scans performed here are ordering
/// work, not consistency checks, so they are not counted in the solver's
/// constraint-check statistic.
pub trait ValueOrderingHeuristic: std::fmt::Debug {
    /// Returns the values of `var`'s current domain in the order they should
    /// be tried.
    fn order_values(&self, model: &Csp, state: &SearchState, var: VarId) -> Vec<i64>;
}

/// Tries values in ascending domain order.
#[derive(Debug, Clone, Copy)]
pub struct DomainOrderHeuristic;

impl ValueOrderingHeuristic for DomainOrderHeuristic {
    fn order_values(&self, _model: &Csp, state: &SearchState, var: VarId) -> Vec<i64> {
        state.domain(var).iter().copied().collect()
    }
}

/// Least-Constraining-Value (LCV) ordering.
///
/// Orders candidates by how many neighbour values each one would rule out,
/// fewest first, so the values that leave neighbours the most freedom are
/// tried before the restrictive ones. The count scans every neighbour's
/// current domain. The sort is stable, so ties keep ascending domain order.
#[derive(Debug, Clone, Copy)]
pub struct LeastConstrainingValueHeuristic;

impl ValueOrderingHeuristic for LeastConstrainingValueHeuristic {
    fn order_values(&self, model: &Csp, state: &SearchState, var: VarId) -> Vec<i64> {
        let mut values: Vec<i64> = state.domain(var).iter().copied().collect();
        let eliminated = |value: i64| -> usize {
            model
                .neighbours(var)
                .map(|n| {
                    state
                        .domain(n)
                        .iter()
                        .filter(|&&v| !model.allows(var, n, value, v))
                        .count()
                })
                .sum()
        };
        values.sort_by_key(|&value| eliminated(value));
        values
    }
}
