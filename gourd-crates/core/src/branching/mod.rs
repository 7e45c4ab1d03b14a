//! Contains structures and traits to define the decision making procedure of the search.
//!
//! In general, it provides 3 traits:
//! - The [`Brancher`] which defines how to branch on the current domains; it proposes a
//!   [`Decision`] or reports that everything it is responsible for is fixed.
//! - The [`VariableSelector`](variable_selection::VariableSelector) which defines the method
//!   required of a variable selector (e.g. select the variable with the smallest domain).
//! - The [`ValueSelector`](value_selection::ValueSelector) which turns the selected variable into a
//!   [`Decision`] (e.g. assign the lower bound, or keep the lower half of the domain).
//!
//! A [`Brancher`] is passed to [`Solver::satisfy`], [`Solver::optimise`] and [`Solver::search`].
//!
//! # Example
//! ```rust
//! # use gourd_core::branching::branchers::phase;
//! # use gourd_core::branching::branchers::DynamicBrancher;
//! # use gourd_core::branching::branchers::ValueSelectionStrategy;
//! # use gourd_core::branching::branchers::VariableSelectionStrategy;
//! # use gourd_core::monitors::Indefinite;
//! # use gourd_core::results::SatisfactionResult;
//! # use gourd_core::Solver;
//! let mut solver = Solver::default();
//! let slots = (0..3)
//!     .map(|_| solver.new_bounded_integer(0, 5))
//!     .collect::<Vec<_>>();
//! let cost = solver.new_bounded_integer(0, 10);
//!
//! // First fix the slots with the smallest domain, then split the cost.
//! let mut brancher = DynamicBrancher::new(vec![
//!     Box::new(phase(
//!         &slots,
//!         VariableSelectionStrategy::MinSize,
//!         ValueSelectionStrategy::AssignMin,
//!     )),
//!     Box::new(phase(
//!         &[cost],
//!         VariableSelectionStrategy::FirstUnbound,
//!         ValueSelectionStrategy::SplitLowerHalf,
//!     )),
//! ]);
//!
//! let result = solver.satisfy(&mut brancher, &mut Indefinite);
//! assert!(matches!(result, Ok(SatisfactionResult::Satisfiable(_))));
//! ```
mod brancher;
pub mod branchers;
mod decision;
pub(crate) mod selection_context;
pub mod tie_breaking;
pub mod value_selection;
pub mod variable_selection;

pub use brancher::Brancher;
pub use decision::Decision;
pub use selection_context::SelectionContext;

#[cfg(doc)]
use crate::Solver;
