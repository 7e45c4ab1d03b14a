//! Propagation algorithms for the built-in [`Constraint`](crate::constraints::Constraint)
//! variants.
mod all_different;
mod element;
mod linear;
mod maximum;
mod not_equals;
mod table;

pub(crate) use all_different::propagate_all_different;
pub(crate) use element::propagate_element;
pub(crate) use linear::propagate_linear_equals;
pub(crate) use linear::propagate_linear_less_or_equal;
pub(crate) use maximum::propagate_maximum;
pub(crate) use not_equals::propagate_not_equals;
pub(crate) use table::propagate_table;
