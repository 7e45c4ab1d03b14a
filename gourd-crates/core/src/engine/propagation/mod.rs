//! Propagation of constraints to a fixpoint.
//!
//! Every posted constraint is a [`Propagator`] watching the variables in its scope. Whenever one
//! of these variables is narrowed the propagator is enqueued again, and propagation stops once
//! the queue is empty or a propagator reports an [`Inconsistency`].
mod context;
mod priority;
mod propagation_engine;
mod propagator;
mod propagator_id;
mod propagator_queue;

pub use context::PropagationContextMut;
pub use priority::Priority;
pub(crate) use propagation_engine::PropagationEngine;
pub use propagator::Propagator;
pub(crate) use propagator_id::PropagatorId;
pub(crate) use propagator_queue::PropagatorQueue;

#[cfg(doc)]
use crate::basic_types::Inconsistency;
