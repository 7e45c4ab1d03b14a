mod assignment;
mod constraint_operation_error;
mod model_error;
mod propagation_status;
mod random;
mod trail;

pub use assignment::Assignment;
pub use constraint_operation_error::ConstraintOperationError;
pub use model_error::ModelError;
pub use propagation_status::Inconsistency;
pub use propagation_status::Narrowing;
pub use propagation_status::PropagationStatusCP;
pub use random::Random;
#[cfg(test)]
pub(crate) use random::tests::TestRandom;
pub(crate) use trail::Checkpoint;
pub(crate) use trail::Trail;
