//! Defines the constraints which can be added to the [`Solver`].
//!
//! A constraint is a relation over variables. Every constraint is one variant of [`Constraint`],
//! which implements the [`Propagator`] contract; specialised propagation algorithms can be plugged
//! in through [`Constraint::Custom`].
//!
//! # Example
//! ```
//! # use gourd_core::constraints;
//! # use gourd_core::Solver;
//! let mut solver = Solver::default();
//!
//! let a = solver.new_bounded_integer(0, 3);
//! let b = solver.new_bounded_integer(0, 3);
//!
//! solver
//!     .add_constraint(constraints::equals([(1, a), (1, b)], 4))
//!     .expect("feasible at the root");
//! solver
//!     .add_constraint(constraints::not_equals(a, b, 0))
//!     .expect("feasible at the root");
//! ```

mod all_different;
mod arithmetic;
mod custom;
mod element;
mod table;

pub use all_different::*;
pub use arithmetic::*;
pub use custom::*;
pub use element::*;
pub use table::*;

use crate::basic_types::PropagationStatusCP;
use crate::engine::propagation::Priority;
use crate::engine::propagation::PropagationContextMut;
use crate::engine::propagation::Propagator;
use crate::propagators;
use crate::variables::DomainId;
#[cfg(doc)]
use crate::Solver;

/// A relation over variables, together with the propagation which enforces it.
#[derive(Debug)]
pub enum Constraint {
    /// `sum(weight * x) <= rhs`
    LinearLessOrEqual {
        terms: Box<[(i32, DomainId)]>,
        rhs: i32,
    },
    /// `sum(weight * x) == rhs`
    LinearEquals {
        terms: Box<[(i32, DomainId)]>,
        rhs: i32,
    },
    /// `x != y + offset`
    NotEquals {
        x: DomainId,
        y: DomainId,
        offset: i32,
    },
    AllDifferent { variables: Box<[DomainId]> },
    /// The variables take the values of one of the tuples.
    Table {
        variables: Box<[DomainId]>,
        tuples: Box<[Box<[i32]>]>,
    },
    /// `result == array[index]`, with a zero-based index.
    Element {
        index: DomainId,
        array: Box<[i32]>,
        result: DomainId,
    },
    /// `result == max(variables)`
    Maximum {
        variables: Box<[DomainId]>,
        result: DomainId,
    },
    Custom(Box<dyn Propagator>),
}

impl Propagator for Constraint {
    fn name(&self) -> &str {
        match self {
            Constraint::LinearLessOrEqual { .. } => "LinearLessOrEqual",
            Constraint::LinearEquals { .. } => "LinearEquals",
            Constraint::NotEquals { .. } => "NotEquals",
            Constraint::AllDifferent { .. } => "AllDifferent",
            Constraint::Table { .. } => "Table",
            Constraint::Element { .. } => "Element",
            Constraint::Maximum { .. } => "Maximum",
            Constraint::Custom(propagator) => propagator.name(),
        }
    }

    fn scope(&self) -> Vec<DomainId> {
        match self {
            Constraint::LinearLessOrEqual { terms, .. }
            | Constraint::LinearEquals { terms, .. } => {
                terms.iter().map(|&(_, domain_id)| domain_id).collect()
            }
            Constraint::NotEquals { x, y, .. } => vec![*x, *y],
            Constraint::AllDifferent { variables } | Constraint::Table { variables, .. } => {
                variables.to_vec()
            }
            Constraint::Element { index, result, .. } => vec![*index, *result],
            Constraint::Maximum { variables, result } => {
                variables.iter().copied().chain([*result]).collect()
            }
            Constraint::Custom(propagator) => propagator.scope(),
        }
    }

    fn priority(&self) -> Priority {
        match self {
            Constraint::NotEquals { .. } => Priority::High,
            Constraint::LinearLessOrEqual { terms, .. } | Constraint::LinearEquals { terms, .. }
                if terms.len() <= 2 =>
            {
                Priority::High
            }
            Constraint::LinearLessOrEqual { .. }
            | Constraint::LinearEquals { .. }
            | Constraint::AllDifferent { .. }
            | Constraint::Element { .. }
            | Constraint::Maximum { .. } => Priority::Medium,
            Constraint::Table { .. } => Priority::Low,
            Constraint::Custom(propagator) => propagator.priority(),
        }
    }

    fn propagate(&mut self, context: &mut PropagationContextMut<'_>) -> PropagationStatusCP {
        match self {
            Constraint::LinearLessOrEqual { terms, rhs } => {
                propagators::propagate_linear_less_or_equal(context, terms, *rhs)
            }
            Constraint::LinearEquals { terms, rhs } => {
                propagators::propagate_linear_equals(context, terms, *rhs)
            }
            Constraint::NotEquals { x, y, offset } => {
                propagators::propagate_not_equals(context, *x, *y, *offset)
            }
            Constraint::AllDifferent { variables } => {
                propagators::propagate_all_different(context, variables)
            }
            Constraint::Table { variables, tuples } => {
                propagators::propagate_table(context, variables, tuples)
            }
            Constraint::Element {
                index,
                array,
                result,
            } => propagators::propagate_element(context, *index, array, *result),
            Constraint::Maximum { variables, result } => {
                propagators::propagate_maximum(context, variables, *result)
            }
            Constraint::Custom(propagator) => propagator.propagate(context),
        }
    }
}
