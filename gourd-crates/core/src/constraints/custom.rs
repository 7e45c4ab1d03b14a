use super::Constraint;
use crate::engine::propagation::Propagator;

/// Wraps a user-defined [`Propagator`] into a [`Constraint`].
pub fn custom(propagator: impl Propagator + 'static) -> Constraint {
    Constraint::Custom(Box::new(propagator))
}
