use crate::engine::EmptyDomain;

/// The result of invoking a propagator: either it succeeds (and reports whether it removed any
/// values) or it identifies an inconsistency.
pub type PropagationStatusCP = Result<Narrowing, Inconsistency>;

/// Whether a successful propagation removed values from a domain.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Narrowing {
    Unchanged,
    Narrowed,
}

impl Narrowing {
    pub(crate) fn from_changed(changed: bool) -> Self {
        if changed {
            Narrowing::Narrowed
        } else {
            Narrowing::Unchanged
        }
    }

    pub(crate) fn merge(self, other: Narrowing) -> Narrowing {
        if self == Narrowing::Narrowed || other == Narrowing::Narrowed {
            Narrowing::Narrowed
        } else {
            Narrowing::Unchanged
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Inconsistency {
    /// A domain became empty while narrowing it.
    EmptyDomain,
    /// The propagator detected that its relation cannot be satisfied without emptying a domain.
    Conflict,
}

impl From<EmptyDomain> for Inconsistency {
    fn from(_: EmptyDomain) -> Self {
        Inconsistency::EmptyDomain
    }
}
