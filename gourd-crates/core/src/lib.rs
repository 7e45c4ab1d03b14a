//! # Gourd
//! A finite-domain constraint programming library: reversible domains, propagation to a fixpoint,
//! and a depth-first search driven by pluggable branching strategies, with branch-and-bound
//! optimisation and a large neighbourhood search on top.
//!
//! A model consists of variables (see [`Solver::new_bounded_integer`]), constraints (see
//! [`constraints`]) and an optional objective (see [`Solver::minimise`]). The search is guided by
//! a [`Brancher`](branching::Brancher) and observed by [`monitors`].
//!
//! # Example
//! ```rust
//! # use gourd_core::constraints;
//! # use gourd_core::monitors::Indefinite;
//! # use gourd_core::Solver;
//! let mut solver = Solver::default();
//! let x = solver.new_bounded_integer(0, 2);
//! let y = solver.new_bounded_integer(0, 2);
//! solver
//!     .add_constraint(constraints::not_equals(x, y, 0))
//!     .expect("feasible at the root");
//!
//! let mut brancher = solver.default_brancher();
//! let solutions = solver
//!     .search(&mut brancher, &mut Indefinite)
//!     .collect::<Result<Vec<_>, _>>()
//!     .expect("the brancher covers every variable");
//!
//! assert_eq!(solutions.len(), 6);
//! assert_eq!(solutions[0].value(x), Some(0));
//! assert_eq!(solutions[0].value(y), Some(1));
//! ```
pub(crate) mod basic_types;
pub mod containers;
pub(crate) mod engine;
pub(crate) mod gourd_asserts;
pub(crate) mod math;
pub(crate) mod propagators;

pub mod branching;
pub mod constraints;
pub mod lns;
pub mod monitors;
pub mod optimisation;
pub mod statistics;

pub use convert_case;
pub use rand;

// A private module with public use, so that everything in the API is exported from the root of
// the crate (`gourd_core::Solver` rather than `gourd_core::api::Solver`).
mod api;

pub use api::*;

pub use crate::api::solver::Solver;
pub use crate::basic_types::Assignment;
pub use crate::basic_types::ConstraintOperationError;
pub use crate::basic_types::ModelError;
pub use crate::basic_types::Random;
pub(crate) use crate::gourd_asserts::gourd_assert_advanced;
pub(crate) use crate::gourd_asserts::gourd_assert_eq_simple;
pub(crate) use crate::gourd_asserts::gourd_assert_moderate;
pub(crate) use crate::gourd_asserts::gourd_assert_simple;
