use serde::{Deserialize, Serialize};

/// How the next variable to branch on is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum VariableOrder {
    /// First unassigned variable in registration order.
    RegistrationOrder,
    /// Smallest current domain first; ties broken by registration order.
    #[default]
    MinimumRemainingValues,
}

/// The order in which a variable's candidate values are tried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ValueOrder {
    /// Ascending domain order.
    #[default]
    DomainOrder,
    /// Fewest eliminated neighbour values first.
    LeastConstrainingValue,
}

/// The look-ahead strategy run after each tentative assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum InferenceMode {
    /// No look-ahead pruning.
    None,
    /// Forward checking of the assigned variable's direct neighbours.
    #[default]
    ForwardChecking,
    /// MAC-3: full arc-consistency maintenance around the assignment.
    MaintainingArcConsistency,
}

/// The configuration of one solver instance.
///
/// The three choices are independent, and exactly one inference strategy is
/// active at a time. Configuration only affects how much of the search tree
/// is explored, never whether a solution is found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SolverConfig {
    pub variable_order: VariableOrder,
    pub value_order: ValueOrder,
    pub inference: InferenceMode,
}

impl SolverConfig {
    pub fn with_variable_order(mut self, variable_order: VariableOrder) -> Self {
        self.variable_order = variable_order;
        self
    }

    pub fn with_value_order(mut self, value_order: ValueOrder) -> Self {
        self.value_order = value_order;
        self
    }

    pub fn with_inference(mut self, inference: InferenceMode) -> Self {
        self.inference = inference;
        self
    }
}
