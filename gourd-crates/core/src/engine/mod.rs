pub(crate) mod domains;
pub(crate) mod predicates;
pub(crate) mod propagation;
pub(crate) mod search;
mod solver_options;
pub(crate) mod variables;

pub(crate) use domains::DomainStore;
pub use domains::EmptyDomain;
pub(crate) use domains::IntegerDomain;
pub use solver_options::SolverOptions;
