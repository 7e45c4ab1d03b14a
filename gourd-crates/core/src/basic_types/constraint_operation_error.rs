use thiserror::Error;

#[cfg(doc)]
use crate::Solver;
use crate::variables::DomainId;

/// Errors related to adding constraints or an objective to the [`Solver`].
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum ConstraintOperationError {
    /// The constraint refers to a variable which was not created by this [`Solver`].
    #[error("The constraint refers to the unknown variable {0:?}")]
    UnknownVariable(DomainId),
    /// Adding the constraint made the root of the search infeasible.
    #[error("Adding the constraint failed because it is infeasible at the root")]
    InfeasiblePropagator,
    /// A constraint was added while the [`Solver`] was already in an infeasible state.
    #[error("Adding constraint failed because the solver is in an infeasible state")]
    InfeasibleState,
    /// The model was changed after a search was started on it.
    #[error("The model cannot be changed once a search has been started")]
    ModelSealed,
}
