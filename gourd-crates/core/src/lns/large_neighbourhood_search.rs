use std::time::Instant;

use log::debug;
use rand::rngs::SmallRng;
use rand::SeedableRng;

use super::FragmentSelector;
use super::LnsError;
use super::LnsOptions;
use super::LnsStatistics;
use crate::branching::Brancher;
use crate::monitors::SolutionLimit;
use crate::monitors::TimeLimit;
use crate::predicate;
use crate::predicates::Predicate;
use crate::results::SearchTermination;
use crate::variables::DomainId;
use crate::Assignment;
use crate::Solver;

/// Why a [`LargeNeighbourhoodSearch`] ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LnsTermination {
    /// [`LnsOptions::global_time_limit`] was reached.
    TimeLimit,
    /// [`LnsOptions::max_iterations`] iterations were performed.
    IterationLimit,
    /// The incumbent reached [`LnsOptions::target_value`].
    TargetReached,
    /// A neighbourhood covering every variable was exhausted without improving the incumbent.
    ProvenOptimal,
}

/// The outcome of [`LargeNeighbourhoodSearch::run`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LnsResult {
    /// The best solution found, which is the initial solution if nothing better was found.
    pub best: Assignment,
    pub statistics: LnsStatistics,
    pub termination: LnsTermination,
}

/// Repeatedly relaxes a fragment of the incumbent and searches for a strictly better solution in
/// the resulting neighbourhood.
///
/// The variables which are fixed to their incumbent value are the tracked variables of the
/// [`Solver`] (see [`Solver::track`]), except for the objective variable. Iterations run strictly
/// one after the other; the domains are restored to the root after each of them, so a failed
/// iteration never affects the next one.
#[derive(Debug, Clone, Copy, Default)]
pub struct LargeNeighbourhoodSearch {
    options: LnsOptions,
}

impl LargeNeighbourhoodSearch {
    pub fn new(options: LnsOptions) -> Self {
        LargeNeighbourhoodSearch { options }
    }

    pub fn options(&self) -> &LnsOptions {
        &self.options
    }

    /// Improves `initial` until one of the limits of the [`LnsOptions`] is reached.
    ///
    /// The objective value of the incumbent never worsens: an iteration only replaces the
    /// incumbent with a solution which strictly improves on it.
    pub fn run<S, B>(
        &mut self,
        solver: &mut Solver,
        initial: Assignment,
        selector: &mut S,
        brancher: &mut B,
    ) -> Result<LnsResult, LnsError>
    where
        S: FragmentSelector + ?Sized,
        B: Brancher + ?Sized,
    {
        let objective = solver.objective().ok_or(LnsError::MissingObjective)?;
        let universe = solver
            .tracked_variables()
            .into_iter()
            .filter(|&domain_id| domain_id != objective.variable())
            .collect::<Vec<_>>();

        let mut incumbent_value = initial
            .objective_value()
            .ok_or(LnsError::IncumbentMissingValue(objective.variable()))?;
        if let Some(&missing) = universe
            .iter()
            .find(|&&domain_id| initial.value(domain_id).is_none())
        {
            return Err(LnsError::IncumbentMissingValue(missing));
        }
        let mut incumbent = initial;

        let mut rng = SmallRng::seed_from_u64(self.options.random_seed);
        let mut statistics = LnsStatistics::default();
        let started_at = Instant::now();

        debug!(
            "LNS started from objective {incumbent_value} over {} variables",
            universe.len()
        );

        let termination = loop {
            if self
                .options
                .target_value
                .is_some_and(|target| objective.reaches(incumbent_value, target))
            {
                break LnsTermination::TargetReached;
            }

            let elapsed = started_at.elapsed();
            if elapsed >= self.options.global_time_limit {
                break LnsTermination::TimeLimit;
            }
            if self
                .options
                .max_iterations
                .is_some_and(|max_iterations| statistics.num_iterations >= max_iterations)
            {
                break LnsTermination::IterationLimit;
            }

            let fragment = selector
                .select_fragment(&universe, self.options.neighbourhood_size, &mut rng)
                .ok_or(LnsError::FragmentSelectionFailed {
                    num_variables: universe.len(),
                })?;
            statistics.num_iterations += 1;

            let assumptions = fixed_part(&universe, &incumbent, |domain_id| {
                fragment.contains(domain_id)
            });

            let inner_time_limit = self
                .options
                .inner_time_limit
                .min(self.options.global_time_limit - elapsed);
            let mut monitors = (
                TimeLimit::new(inner_time_limit),
                self.options.inner_solution_limit.map(SolutionLimit::new),
            );

            let mut solutions =
                solver.search_from(brancher, &mut monitors, assumptions, Some(incumbent_value));
            let mut improvement = None;
            while let Some(solution) = solutions.next_solution()? {
                improvement = Some(solution);
            }
            let inner_termination = solutions.termination();
            statistics.search.accumulate(solutions.statistics());
            drop(solutions);

            let improvement = improvement.and_then(|solution| {
                let value = solution.objective_value()?;
                Some((solution, value))
            });

            match improvement {
                Some((solution, value)) => {
                    debug!(
                        "LNS iteration {}: objective improved from {incumbent_value} to {value}",
                        statistics.num_iterations
                    );
                    statistics.num_improvements += 1;
                    incumbent_value = value;
                    incumbent = solution;
                }
                None if inner_termination == Some(SearchTermination::Exhausted)
                    && fragment.covers(&universe) =>
                {
                    debug!(
                        "LNS iteration {}: {incumbent_value} is optimal",
                        statistics.num_iterations
                    );
                    break LnsTermination::ProvenOptimal;
                }
                None => debug!(
                    "LNS iteration {}: no improvement ({inner_termination:?})",
                    statistics.num_iterations
                ),
            }
        };

        statistics.elapsed = started_at.elapsed();
        debug!(
            "LNS finished as {termination:?} with objective {incumbent_value} after {} iterations",
            statistics.num_iterations
        );

        Ok(LnsResult {
            best: incumbent,
            statistics,
            termination,
        })
    }
}

/// Fixes every variable of `universe` which is not relaxed to its value in `incumbent`.
fn fixed_part(
    universe: &[DomainId],
    incumbent: &Assignment,
    is_relaxed: impl Fn(DomainId) -> bool,
) -> Vec<Predicate> {
    universe
        .iter()
        .filter(|&&domain_id| !is_relaxed(domain_id))
        .filter_map(|&domain_id| {
            let value = incumbent.value(domain_id)?;
            Some(predicate!(domain_id == value))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constraints;
    use crate::lns::Fragment;
    use crate::lns::RandomFragmentSelector;
    use crate::monitors::Indefinite;
    use crate::results::OptimisationResult;
    use crate::Random;

    /// `total == a + b + c` over `[0, 3]` with `a != b`, `b != c` and `a != c`, minimising the
    /// total (optimum 3).
    fn model() -> (Solver, Vec<DomainId>, DomainId) {
        let mut solver = Solver::default();
        let items = (0..3)
            .map(|_| solver.new_bounded_integer(0, 3))
            .collect::<Vec<_>>();
        let total = solver.new_bounded_integer(0, 9);

        solver
            .add_constraint(constraints::equals(
                items.iter().map(|&item| (1, item)).chain([(-1, total)]),
                0,
            ))
            .expect("feasible");
        solver
            .add_constraint(constraints::all_different(items.clone()))
            .expect("feasible");
        solver.minimise(total).expect("known variable");

        (solver, items, total)
    }

    /// The worst solution of [`model`].
    fn worst_solution(items: &[DomainId], total: DomainId) -> Assignment {
        Assignment::new(
            items.iter().copied().zip([3, 2, 1]).chain([(total, 6)]),
            Some(6),
        )
    }

    #[test]
    fn full_neighbourhood_reaches_the_optimum() {
        let (mut solver, items, total) = model();
        let initial = worst_solution(&items, total);
        let mut brancher = solver.default_brancher();

        let mut lns = LargeNeighbourhoodSearch::new(LnsOptions {
            neighbourhood_size: items.len(),
            ..Default::default()
        });
        let result = lns
            .run(&mut solver, initial, &mut RandomFragmentSelector, &mut brancher)
            .expect("no errors");

        assert_eq!(result.termination, LnsTermination::ProvenOptimal);
        assert_eq!(result.best.objective_value(), Some(3));

        let mut brancher = solver.default_brancher();
        let (optimum, _) = solver
            .optimise(&mut brancher, &mut Indefinite)
            .expect("no model errors");
        assert_eq!(
            optimum.solution().and_then(Assignment::objective_value),
            result.best.objective_value()
        );
        assert!(matches!(optimum, OptimisationResult::Optimal(_)));
    }

    #[test]
    fn empty_fragments_never_improve() {
        let (mut solver, items, total) = model();
        let initial = worst_solution(&items, total);
        let mut brancher = solver.default_brancher();
        let mut nothing = |_: &[DomainId], _: usize, _: &mut dyn Random| Some(Fragment::default());

        let mut lns = LargeNeighbourhoodSearch::new(LnsOptions {
            max_iterations: Some(3),
            ..Default::default()
        });
        let result = lns
            .run(&mut solver, initial.clone(), &mut nothing, &mut brancher)
            .expect("no errors");

        assert_eq!(result.termination, LnsTermination::IterationLimit);
        assert_eq!(result.best, initial);
        assert_eq!(result.statistics.num_iterations, 3);
        assert_eq!(result.statistics.num_improvements, 0);
    }

    #[test]
    fn target_value_stops_the_search() {
        let (mut solver, items, total) = model();
        let initial = worst_solution(&items, total);
        let mut brancher = solver.default_brancher();

        let mut lns = LargeNeighbourhoodSearch::new(LnsOptions {
            target_value: Some(6),
            ..Default::default()
        });
        let result = lns
            .run(&mut solver, initial, &mut RandomFragmentSelector, &mut brancher)
            .expect("no errors");

        assert_eq!(result.termination, LnsTermination::TargetReached);
        assert_eq!(result.statistics.num_iterations, 0);
    }

    #[test]
    fn missing_objective_is_an_error() {
        let mut solver = Solver::default();
        let x = solver.new_bounded_integer(0, 3);
        let mut brancher = solver.default_brancher();

        let result = LargeNeighbourhoodSearch::default().run(
            &mut solver,
            Assignment::new([(x, 0)], None),
            &mut RandomFragmentSelector,
            &mut brancher,
        );

        assert_eq!(result, Err(LnsError::MissingObjective));
    }

    #[test]
    fn incumbent_has_to_cover_the_fixed_variables() {
        let (mut solver, items, total) = model();
        let mut brancher = solver.default_brancher();

        let result = LargeNeighbourhoodSearch::default().run(
            &mut solver,
            Assignment::new([(items[0], 0), (total, 6)], Some(6)),
            &mut RandomFragmentSelector,
            &mut brancher,
        );

        assert_eq!(result, Err(LnsError::IncumbentMissingValue(items[1])));
    }

    #[test]
    fn empty_universe_fails_fragment_selection() {
        let mut solver = Solver::default();
        let total = solver.new_bounded_integer(0, 3);
        solver.minimise(total).expect("known variable");
        let mut brancher = solver.default_brancher();

        let result = LargeNeighbourhoodSearch::default().run(
            &mut solver,
            Assignment::new([(total, 3)], Some(3)),
            &mut RandomFragmentSelector,
            &mut brancher,
        );

        assert_eq!(
            result,
            Err(LnsError::FragmentSelectionFailed { num_variables: 0 })
        );
    }
}
