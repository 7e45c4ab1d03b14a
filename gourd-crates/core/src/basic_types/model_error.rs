use thiserror::Error;

use crate::predicates::Predicate;
use crate::variables::DomainId;

/// Structural misuse of the search API. These errors are fatal and abort the search.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    /// The brancher reported that it had nothing left to decide while some variables were still
    /// unfixed.
    #[error("The brancher returned no decision while {unfixed:?} is not fixed")]
    IncompleteAssignment { unfixed: DomainId },
    /// A decision alternative did not change any domain, so the search would not make progress.
    #[error("The decision {0} does not change any domain")]
    IneffectiveDecision(Predicate),
    /// An operation which requires an objective was invoked on a model without one.
    #[error("The model does not have an objective")]
    MissingObjective,
}
