use std::collections::{BTreeSet, HashMap, HashSet};

use crate::error::{Error, Result};

/// The identifier of a variable in a [`Csp`].
pub type VarId = u32;

/// A jointly allowed pair of values for a constrained pair of variables.
pub type ValuePair = (i64, i64);

/// A complete assignment of one value to every variable.
pub type Assignment = HashMap<VarId, i64>;

/// The model store for a binary CSP.
///
/// Holds the registered variables with their initial domains, the constraint
/// relations keyed by ordered variable pair, and the derived neighbour map.
/// Constraints are stored in both directions, so `(a, b) ∈ relation(X, Y)`
/// exactly when `(b, a) ∈ relation(Y, X)` and lookups from either endpoint
/// are O(1) on average.
///
/// The model is read-only during search: [`solve`] snapshots the registered
/// domains into its own working state, so repeated solves always start from
/// the domains given at registration time.
///
/// [`solve`]: crate::solver::engine::SolverEngine::solve
#[derive(Debug, Clone, Default)]
pub struct Csp {
    /// Variable ids in registration order. This is the total order used for
    /// heuristic tie-breaking, so it must not depend on hash iteration.
    order: Vec<VarId>,
    domains: HashMap<VarId, BTreeSet<i64>>,
    constraints: HashMap<(VarId, VarId), HashSet<ValuePair>>,
    neighbours: HashMap<VarId, BTreeSet<VarId>>,
}

impl Csp {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a variable with a non-empty candidate set.
    ///
    /// Fails with [`Error::DuplicateVariable`] if `id` is already registered
    /// and [`Error::EmptyDomain`] if the candidate set is empty.
    pub fn add_variable<D>(&mut self, id: VarId, domain: D) -> Result<()>
    where
        D: IntoIterator<Item = i64>,
    {
        if self.domains.contains_key(&id) {
            return Err(Error::DuplicateVariable(id));
        }
        let domain: BTreeSet<i64> = domain.into_iter().collect();
        if domain.is_empty() {
            return Err(Error::EmptyDomain(id));
        }
        self.order.push(id);
        self.domains.insert(id, domain);
        Ok(())
    }

    /// Registers a symmetric binary constraint between `a` and `b`.
    ///
    /// `allowed_pairs` lists every `(value_of_a, value_of_b)` combination the
    /// two variables may jointly take; the mirrored relation is stored for
    /// the `(b, a)` direction automatically, and both variables are recorded
    /// as neighbours of each other. Registering a second relation for the
    /// same pair replaces the first, in both directions.
    ///
    /// Fails with [`Error::UnknownVariable`] if either endpoint has not been
    /// registered, and with [`Error::SelfConstraint`] if `a == b`.
    pub fn add_constraint<P>(&mut self, a: VarId, b: VarId, allowed_pairs: P) -> Result<()>
    where
        P: IntoIterator<Item = ValuePair>,
    {
        if a == b {
            return Err(Error::SelfConstraint(a));
        }
        if !self.domains.contains_key(&a) {
            return Err(Error::UnknownVariable(a));
        }
        if !self.domains.contains_key(&b) {
            return Err(Error::UnknownVariable(b));
        }

        let forward: HashSet<ValuePair> = allowed_pairs.into_iter().collect();
        let reverse: HashSet<ValuePair> = forward.iter().map(|&(x, y)| (y, x)).collect();

        self.constraints.insert((a, b), forward);
        self.constraints.insert((b, a), reverse);
        self.neighbours.entry(a).or_default().insert(b);
        self.neighbours.entry(b).or_default().insert(a);
        Ok(())
    }

    /// The number of registered variables.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Variable ids in registration order.
    pub fn variables(&self) -> impl Iterator<Item = VarId> + '_ {
        self.order.iter().copied()
    }

    /// The domain a variable was registered with.
    pub fn domain(&self, var: VarId) -> Option<&BTreeSet<i64>> {
        self.domains.get(&var)
    }

    /// The variables sharing at least one constraint with `var`, in
    /// ascending id order.
    pub fn neighbours(&self, var: VarId) -> impl Iterator<Item = VarId> + '_ {
        self.neighbours
            .get(&var)
            .into_iter()
            .flat_map(|set| set.iter().copied())
    }

    /// The allowed-pair relation for the directed pair `(a, b)`, if one was
    /// registered.
    pub fn relation(&self, a: VarId, b: VarId) -> Option<&HashSet<ValuePair>> {
        self.constraints.get(&(a, b))
    }

    /// Whether `a = x, b = y` is jointly allowed.
    ///
    /// The absence of a constraint between two variables means no
    /// restriction, so unconstrained pairs are always allowed.
    pub fn allows(&self, a: VarId, b: VarId, x: i64, y: i64) -> bool {
        match self.constraints.get(&(a, b)) {
            Some(relation) => relation.contains(&(x, y)),
            None => true,
        }
    }

    /// Whether `assignment` satisfies every registered constraint. Used by
    /// callers to sanity-check solutions; the engine never needs it.
    pub fn is_satisfied_by(&self, assignment: &Assignment) -> bool {
        self.constraints.iter().all(|((a, b), relation)| {
            match (assignment.get(a), assignment.get(b)) {
                (Some(&x), Some(&y)) => relation.contains(&(x, y)),
                _ => false,
            }
        })
    }
}
