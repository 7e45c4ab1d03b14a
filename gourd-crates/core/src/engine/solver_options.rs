/// Options which influence the representation of the domains of a [`Solver`](crate::Solver).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolverOptions {
    /// Interval domains with at most this many values become explicit value sets when a hole is
    /// punched into them. Larger intervals keep their bounds and a sorted list of holes instead.
    pub sparse_domain_limit: usize,
}

impl Default for SolverOptions {
    fn default() -> Self {
        SolverOptions {
            sparse_domain_limit: 1024,
        }
    }
}
