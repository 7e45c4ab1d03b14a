mod outputs;
pub(crate) mod solver;

pub mod results {
    //! Contains the outputs of searching with the [`Solver`].
    //!
    //! - [`SatisfactionResult`] for a search for a single solution ([`Solver::satisfy`]).
    //! - [`OptimisationResult`] for a branch-and-bound search ([`Solver::optimise`]).
    //! - [`SolutionIterator`](solution_iterator::SolutionIterator) for a lazy sequence of
    //!   solutions ([`Solver::search`]), which reports its [`SearchTermination`] once exhausted.
    pub use crate::api::outputs::solution_iterator;
    pub use crate::api::outputs::OptimisationResult;
    pub use crate::api::outputs::SatisfactionResult;
    pub use crate::api::outputs::SearchTermination;
    pub use crate::basic_types::Assignment;
    #[cfg(doc)]
    use crate::Solver;
}

pub mod variables {
    //! Contains the variables which are used by the [`Solver`].
    //!
    //! A variable is identified by a [`DomainId`]. Variables are created with
    //! [`Solver::new_bounded_integer`] for a domain between a lower-bound and an upper-bound, or
    //! with [`Solver::new_sparse_integer`] for a domain with holes.
    pub use crate::engine::variables::DomainId;
    #[cfg(doc)]
    use crate::Solver;
}

pub mod options {
    //! Contains the options which can be passed to the [`Solver`] and to the
    //! [`LargeNeighbourhoodSearch`](crate::lns::LargeNeighbourhoodSearch).
    pub use crate::branching::branchers::ValueSelectionStrategy;
    pub use crate::branching::branchers::VariableSelectionStrategy;
    pub use crate::engine::SolverOptions;
    pub use crate::lns::LnsOptions;
    pub use crate::optimisation::OptimisationDirection;
    #[cfg(doc)]
    use crate::Solver;
}

pub mod predicates {
    //! Contains the atomic constraints `[x >= v]`, `[x <= v]`, `[x == v]` and `[x != v]` over a
    //! single variable, which are used to express decisions.
    //!
    //! Predicates are most easily created with the [`predicate!`](crate::predicate) macro.
    pub use crate::engine::predicates::predicate::Predicate;
    pub use crate::engine::predicates::predicate_constructor::PredicateConstructor;
}

pub mod propagation {
    //! Contains the contract which every constraint implements, which allows plugging specialised
    //! propagation algorithms into the [`Solver`] through
    //! [`constraints::custom`](crate::constraints::custom).
    pub use crate::basic_types::Inconsistency;
    pub use crate::basic_types::Narrowing;
    pub use crate::basic_types::PropagationStatusCP;
    pub use crate::engine::propagation::Priority;
    pub use crate::engine::propagation::PropagationContextMut;
    pub use crate::engine::propagation::Propagator;
    pub use crate::engine::EmptyDomain;
    #[cfg(doc)]
    use crate::Solver;
}
