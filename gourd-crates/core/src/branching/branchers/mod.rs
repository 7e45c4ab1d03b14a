//! Implementations of [`Brancher`](crate::branching::Brancher).
mod cost_ordered;
mod dynamic_brancher;
mod independent_variable_value_brancher;
mod phase;
mod positions_from_successors;
mod prefer_bound_successors;
mod successor_chain;

pub use cost_ordered::CostOrderedBrancher;
pub use dynamic_brancher::DynamicBrancher;
pub use independent_variable_value_brancher::IndependentVariableValueBrancher;
pub use phase::phase;
pub use phase::PhaseBrancher;
pub use phase::ValueSelectionStrategy;
pub use phase::VariableSelectionStrategy;
pub use positions_from_successors::PositionsFromSuccessorsBrancher;
pub use prefer_bound_successors::PreferBoundSuccessorsBrancher;
pub use successor_chain::SuccessorChainBrancher;
