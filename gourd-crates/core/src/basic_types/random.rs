use std::fmt::Debug;
use std::ops::Range;

use rand::Rng;
use rand::SeedableRng;

use crate::gourd_assert_moderate;

/// Abstraction for randomness, in order to swap out different sources of randomness.
///
/// In tests a [`Random`] which replays a fixed list of values is used to make fragment selection
/// deterministic.
pub trait Random: Debug {
    /// Generates a bool which is true with probability `probability`.
    fn generate_bool(&mut self, probability: f64) -> bool;

    /// Generates a random usize in the range `[range.start, range.end)` with equal probability.
    ///
    /// ```rust
    /// # use rand::rngs::SmallRng;
    /// # use rand::SeedableRng;
    /// # use gourd_core::Random;
    /// let mut rng = SmallRng::seed_from_u64(42);
    /// let elements = vec!["tank", "chemical", "slot"];
    /// let selected_index = rng.generate_usize_in_range(0..elements.len());
    /// assert!(selected_index < elements.len());
    /// ```
    fn generate_usize_in_range(&mut self, range: Range<usize>) -> usize;
}

// Any "regular" random generator can be used where a `Random` is expected.
impl<T> Random for T
where
    T: SeedableRng + Rng + Debug,
{
    fn generate_bool(&mut self, probability: f64) -> bool {
        gourd_assert_moderate!(
            (0.0..=1.0).contains(&probability),
            "It should hold that 0.0 <= {probability} <= 1.0"
        );

        self.gen_bool(probability)
    }

    fn generate_usize_in_range(&mut self, range: Range<usize>) -> usize {
        self.gen_range(range)
    }
}
