use super::Constraint;
use crate::variables::DomainId;

/// Creates the [`Constraint`] that enforces that all the given `variables` are distinct.
pub fn all_different(variables: impl IntoIterator<Item = DomainId>) -> Constraint {
    Constraint::AllDifferent {
        variables: variables.into_iter().collect(),
    }
}
