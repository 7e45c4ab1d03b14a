use std::time::Duration;

#[cfg(doc)]
use super::LargeNeighbourhoodSearch;

/// The options of a [`LargeNeighbourhoodSearch`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LnsOptions {
    /// The maximum number of variables which are relaxed in one iteration.
    pub neighbourhood_size: usize,
    /// The time limit of the search in a single iteration.
    pub inner_time_limit: Duration,
    /// The time limit of the whole large neighbourhood search.
    pub global_time_limit: Duration,
    /// The maximum number of iterations; unlimited if `None`.
    pub max_iterations: Option<u64>,
    /// The search stops once the incumbent is at least as good as this value.
    pub target_value: Option<i32>,
    /// The seed of the random generator which is passed to the fragment selector.
    pub random_seed: u64,
    /// The number of improving solutions after which an iteration ends; `None` searches the
    /// neighbourhood until it is exhausted or the inner time limit is reached.
    pub inner_solution_limit: Option<u64>,
}

impl Default for LnsOptions {
    fn default() -> Self {
        LnsOptions {
            neighbourhood_size: 100,
            inner_time_limit: Duration::from_secs(3),
            global_time_limit: Duration::from_secs(60),
            max_iterations: None,
            target_value: None,
            random_seed: 100,
            inner_solution_limit: Some(1),
        }
    }
}
