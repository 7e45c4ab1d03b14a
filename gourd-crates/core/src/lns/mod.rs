//! Large neighbourhood search (LNS) on top of the branch-and-bound search of the [`Solver`].
//!
//! Starting from an incumbent solution, every iteration asks a [`FragmentSelector`] for a
//! [`Fragment`] of variables to relax, fixes every other variable to its incumbent value, and
//! searches for a strictly better solution within a short time limit. Improvements replace the
//! incumbent; failed iterations leave it untouched.
//!
//! # Example
//! ```rust
//! # use std::time::Duration;
//! # use gourd_core::branching::branchers::phase;
//! # use gourd_core::constraints;
//! # use gourd_core::lns::LargeNeighbourhoodSearch;
//! # use gourd_core::lns::RandomFragmentSelector;
//! # use gourd_core::monitors::SolutionLimit;
//! # use gourd_core::options::LnsOptions;
//! # use gourd_core::options::ValueSelectionStrategy;
//! # use gourd_core::options::VariableSelectionStrategy;
//! # use gourd_core::results::SatisfactionResult;
//! # use gourd_core::Solver;
//! let mut solver = Solver::default();
//! let items = (0..4)
//!     .map(|_| solver.new_bounded_integer(0, 5))
//!     .collect::<Vec<_>>();
//! let total = solver.new_bounded_integer(0, 20);
//! let terms = items
//!     .iter()
//!     .map(|&item| (1, item))
//!     .chain([(-1, total)]);
//! solver
//!     .add_constraint(constraints::equals(terms, 0))
//!     .expect("feasible at the root");
//! solver
//!     .add_constraint(constraints::all_different(items.clone()))
//!     .expect("feasible at the root");
//! solver.minimise(total).expect("known variable");
//! solver.track(items.iter().copied()).expect("known variables");
//!
//! // A poor starting point: the largest values first, 5 + 4 + 3 + 2.
//! let mut largest_first = phase(
//!     &items,
//!     VariableSelectionStrategy::FirstUnbound,
//!     ValueSelectionStrategy::AssignMax,
//! );
//! let Ok(SatisfactionResult::Satisfiable(initial)) =
//!     solver.satisfy(&mut largest_first, &mut SolutionLimit::new(1))
//! else {
//!     panic!("the model is satisfiable");
//! };
//!
//! assert_eq!(initial.objective_value(), Some(14));
//!
//! let mut brancher = solver.default_brancher();
//! let mut lns = LargeNeighbourhoodSearch::new(LnsOptions {
//!     neighbourhood_size: 2,
//!     max_iterations: Some(50),
//!     global_time_limit: Duration::from_secs(5),
//!     ..Default::default()
//! });
//! let result = lns
//!     .run(
//!         &mut solver,
//!         initial,
//!         &mut RandomFragmentSelector,
//!         &mut brancher,
//!     )
//!     .expect("the incumbent covers every relaxed variable");
//!
//! assert!(result.best.objective_value() < Some(14));
//! assert!(result.statistics.num_improvements > 0);
//! ```
mod fragment;
mod fragment_selector;
mod large_neighbourhood_search;
mod lns_error;
mod lns_options;
mod lns_statistics;

pub use fragment::Fragment;
pub use fragment_selector::FragmentSelector;
pub use fragment_selector::RandomFragmentSelector;
pub use large_neighbourhood_search::LargeNeighbourhoodSearch;
pub use large_neighbourhood_search::LnsResult;
pub use large_neighbourhood_search::LnsTermination;
pub use lns_error::LnsError;
pub use lns_options::LnsOptions;
pub use lns_statistics::LnsStatistics;

#[cfg(doc)]
use crate::Solver;
