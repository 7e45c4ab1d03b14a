use crate::basic_types::Checkpoint;
use crate::predicates::Predicate;

/// A node of the search tree at which a decision was made.
#[derive(Clone, Copy, Debug)]
pub(crate) struct ChoicePoint {
    /// Restores the domains to the moment before the decision was applied.
    pub(crate) checkpoint: Checkpoint,
    /// The alternative which has not been explored yet, if any.
    pub(crate) next_alternative: Option<Predicate>,
}
