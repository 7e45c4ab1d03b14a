use thiserror::Error;

use crate::basic_types::ModelError;
use crate::variables::DomainId;

/// Errors which abort a [`LargeNeighbourhoodSearch`](super::LargeNeighbourhoodSearch).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LnsError {
    /// The fragment selector did not produce a fragment, e.g. because there are no variables to
    /// relax.
    #[error("No fragment could be selected from {num_variables} variables")]
    FragmentSelectionFailed { num_variables: usize },
    #[error("The model does not have an objective")]
    MissingObjective,
    /// The incumbent does not record a value for a variable which has to be fixed.
    #[error("The incumbent does not have a value for {0:?}")]
    IncumbentMissingValue(DomainId),
    #[error(transparent)]
    Model(#[from] ModelError),
}
