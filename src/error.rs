use crate::solver::model::VarId;

pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Errors raised while building a model.
///
/// These are caller errors, reported synchronously by `add_variable` /
/// `add_constraint`. An unsatisfiable problem is *not* an error: `solve`
/// reports it as `None`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("variable {0} is already registered")]
    DuplicateVariable(VarId),

    #[error("variable {0} is not registered")]
    UnknownVariable(VarId),

    #[error("variable {0} was registered with an empty domain")]
    EmptyDomain(VarId),

    #[error("constraint endpoints must be distinct variables (got {0} twice)")]
    SelfConstraint(VarId),
}
