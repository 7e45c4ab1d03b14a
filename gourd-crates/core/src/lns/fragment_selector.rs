use log::warn;

use super::Fragment;
use crate::basic_types::Random;
use crate::variables::DomainId;

/// Chooses the variables which are relaxed in an iteration of the large neighbourhood search.
///
/// Any closure `FnMut(&[DomainId], usize, &mut dyn Random) -> Option<Fragment>` is a
/// [`FragmentSelector`].
pub trait FragmentSelector {
    /// Selects at most `neighbourhood_size` variables from `universe`. Returns `None` if no
    /// fragment can be selected.
    fn select_fragment(
        &mut self,
        universe: &[DomainId],
        neighbourhood_size: usize,
        rng: &mut dyn Random,
    ) -> Option<Fragment>;
}

impl<F> FragmentSelector for F
where
    F: FnMut(&[DomainId], usize, &mut dyn Random) -> Option<Fragment>,
{
    fn select_fragment(
        &mut self,
        universe: &[DomainId],
        neighbourhood_size: usize,
        rng: &mut dyn Random,
    ) -> Option<Fragment> {
        self(universe, neighbourhood_size, rng)
    }
}

/// Draws the relaxed variables uniformly at random, without replacement.
#[derive(Clone, Copy, Debug, Default)]
pub struct RandomFragmentSelector;

impl FragmentSelector for RandomFragmentSelector {
    fn select_fragment(
        &mut self,
        universe: &[DomainId],
        neighbourhood_size: usize,
        rng: &mut dyn Random,
    ) -> Option<Fragment> {
        if universe.is_empty() {
            warn!("Cannot select a fragment from an empty set of variables");
            return None;
        }

        let mut candidates = universe.to_vec();
        let mut relaxed = Vec::with_capacity(neighbourhood_size.min(candidates.len()));

        while relaxed.len() < neighbourhood_size && !candidates.is_empty() {
            let index = rng.generate_usize_in_range(0..candidates.len());
            relaxed.push(candidates.swap_remove(index));
        }

        Some(Fragment::new(relaxed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::basic_types::TestRandom;

    fn universe(size: u32) -> Vec<DomainId> {
        (0..size).map(DomainId::new).collect()
    }

    #[test]
    fn draws_without_replacement() {
        let universe = universe(5);
        let mut rng = TestRandom {
            usizes: vec![4, 0, 0],
            ..Default::default()
        };

        let fragment = RandomFragmentSelector
            .select_fragment(&universe, 3, &mut rng)
            .expect("non-empty universe");

        // 4 is drawn, 0 is drawn and replaced by 3, then 3 is drawn
        assert_eq!(fragment.len(), 3);
        assert!(fragment.contains(universe[4]));
        assert!(fragment.contains(universe[0]));
        assert!(fragment.contains(universe[3]));
    }

    #[test]
    fn fragment_is_capped_by_the_universe() {
        let universe = universe(2);
        let mut rng = TestRandom {
            usizes: vec![1, 0],
            ..Default::default()
        };

        let fragment = RandomFragmentSelector
            .select_fragment(&universe, 10, &mut rng)
            .expect("non-empty universe");

        assert!(fragment.covers(&universe));
    }

    #[test]
    fn empty_universe_has_no_fragment() {
        let mut rng = TestRandom::default();

        assert_eq!(
            RandomFragmentSelector.select_fragment(&[], 3, &mut rng),
            None
        );
    }

    #[test]
    fn closures_are_selectors() {
        let universe = universe(4);
        let mut first_half = |universe: &[DomainId], _: usize, _: &mut dyn Random| {
            Some(
                universe[..universe.len() / 2]
                    .iter()
                    .copied()
                    .collect::<Fragment>(),
            )
        };
        let mut rng = TestRandom::default();

        let fragment = first_half
            .select_fragment(&universe, 2, &mut rng)
            .expect("always selects");

        assert_eq!(fragment, Fragment::new([universe[0], universe[1]]));
    }
}
