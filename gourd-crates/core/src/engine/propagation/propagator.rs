use std::fmt::Debug;

use super::Priority;
use super::PropagationContextMut;
#[cfg(doc)]
use crate::basic_types::Inconsistency;
#[cfg(doc)]
use crate::basic_types::Narrowing;
use crate::basic_types::PropagationStatusCP;
use crate::variables::DomainId;

/// The contract shared by every constraint: given the current domains, either prove the
/// constraint infeasible, remove values which cannot be part of a solution, or do nothing.
///
/// A propagator does not have to reach a fixpoint in one call; it is enqueued again whenever a
/// variable in its scope is narrowed. It must report [`Narrowing::Narrowed`] when it removed any
/// value, and it must return an [`Inconsistency`] when a narrowing returned an empty domain.
pub trait Propagator: Debug {
    /// Return the name of the propagator, this is a convenience method that is used for printing.
    fn name(&self) -> &str;

    /// The variables the propagator is subscribed to. It is called once, when the propagator is
    /// registered.
    fn scope(&self) -> Vec<DomainId>;

    fn priority(&self) -> Priority {
        Priority::Medium
    }

    fn propagate(&mut self, context: &mut PropagationContextMut<'_>) -> PropagationStatusCP;
}
