use std::time::Instant;

use log::debug;
use log::trace;

use super::ChoicePoint;
use super::SearchState;
use crate::basic_types::Checkpoint;
use crate::basic_types::ModelError;
use crate::branching::Brancher;
use crate::branching::SelectionContext;
use crate::engine::propagation::PropagationEngine;
use crate::engine::DomainStore;
use crate::gourd_assert_eq_simple;
use crate::monitors::SearchMonitor;
use crate::optimisation::Objective;
use crate::predicates::Predicate;
use crate::statistics::SearchStatistics;
use crate::variables::DomainId;
use crate::Assignment;

/// Depth-first search over the domains of a [`DomainStore`].
///
/// The search is a state machine which is advanced one transition at a time by
/// [`TreeSearch::step`]:
/// - `Root`: opens the root checkpoint and installs the assumptions.
/// - `Propagating`: installs the objective bound and runs propagation to a fixpoint. Continues
///   with `Backtracking` on failure, with `SolutionFound` once every variable is fixed, and with
///   `Branching` otherwise.
/// - `Branching`: asks the [`Brancher`] for a decision, opens a checkpoint and applies its first
///   alternative.
/// - `Backtracking`: restores the most recent choice point with an unexplored alternative and
///   applies that alternative, or ends the search as `Exhausted` when there is none.
/// - `SolutionFound`: records the solution, tightens the objective bound, and continues with
///   `Backtracking` unless a monitor asks to stop.
///
/// The monitors are consulted before every `Propagating` and `Branching` transition. Once a
/// terminal state is reached, the domains are restored to the root.
#[derive(Debug)]
pub(crate) struct TreeSearch {
    state: SearchState,
    choice_points: Vec<ChoicePoint>,
    /// The checkpoint which restores the domains to the moment the search started.
    root: Option<Checkpoint>,
    /// The variables which are recorded in every solution.
    tracked: Box<[DomainId]>,
    objective: Option<Objective>,
    /// The objective value of the best solution so far; every next solution has to improve on it.
    incumbent: Option<i32>,
    /// Installed at the root of the search, e.g. the fixed part of a neighbourhood.
    assumptions: Vec<Predicate>,
    root_is_infeasible: bool,
    statistics: SearchStatistics,
    started_at: Instant,
    propagations_at_start: u64,
}

impl TreeSearch {
    pub(crate) fn new(tracked: Box<[DomainId]>, objective: Option<Objective>) -> Self {
        TreeSearch {
            state: SearchState::Root,
            choice_points: Vec::default(),
            root: None,
            tracked,
            objective,
            incumbent: None,
            assumptions: Vec::default(),
            root_is_infeasible: false,
            statistics: SearchStatistics::default(),
            started_at: Instant::now(),
            propagations_at_start: 0,
        }
    }

    pub(crate) fn with_assumptions(mut self, assumptions: Vec<Predicate>) -> Self {
        self.assumptions = assumptions;
        self
    }

    /// Only solutions which improve on `incumbent` are searched for.
    pub(crate) fn with_incumbent(mut self, incumbent: Option<i32>) -> Self {
        self.incumbent = incumbent;
        self
    }

    /// The search ends as exhausted without exploring anything.
    pub(crate) fn with_infeasible_root(mut self, root_is_infeasible: bool) -> Self {
        self.root_is_infeasible = root_is_infeasible;
        self
    }

    pub(crate) fn state(&self) -> SearchState {
        self.state
    }

    pub(crate) fn statistics(&self) -> &SearchStatistics {
        &self.statistics
    }

    /// Performs a single transition. Returns the solution if one was recorded by the transition.
    ///
    /// After a [`ModelError`] the search is stopped and the domains are restored to the root.
    pub(crate) fn step<B, M>(
        &mut self,
        store: &mut DomainStore,
        engine: &mut PropagationEngine,
        brancher: &mut B,
        monitors: &mut M,
    ) -> Result<Option<Assignment>, ModelError>
    where
        B: Brancher + ?Sized,
        M: SearchMonitor + ?Sized,
    {
        let result = match self.state {
            SearchState::Root => {
                self.start(store, engine, monitors);
                Ok(None)
            }
            SearchState::Propagating => {
                self.propagate(store, engine, monitors);
                Ok(None)
            }
            SearchState::Branching => self.branch(store, engine, brancher, monitors).map(|_| None),
            SearchState::Backtracking => self
                .backtrack(store, engine, brancher, monitors)
                .map(|_| None),
            SearchState::SolutionFound => {
                Ok(Some(self.record_solution(store, engine, brancher, monitors)))
            }
            SearchState::Exhausted | SearchState::TimedOut | SearchState::Stopped => Ok(None),
        };

        if let Err(error) = &result {
            debug!("Search aborted: {error}");
            self.finish(SearchState::Stopped, store, engine, monitors);
        }

        result
    }

    /// Restores the domains to the moment the search started. Calling it more than once, or
    /// before the search started, has no effect.
    pub(crate) fn restore_root(&mut self, store: &mut DomainStore) {
        if let Some(root) = self.root.take() {
            self.choice_points.clear();
            store.synchronise(root);
        }
    }

    fn start<M: SearchMonitor + ?Sized>(
        &mut self,
        store: &mut DomainStore,
        engine: &mut PropagationEngine,
        monitors: &mut M,
    ) {
        gourd_assert_eq_simple!(
            store.get_checkpoint().level(),
            0,
            "a search has to start at the root"
        );

        monitors.on_search_start();
        self.started_at = Instant::now();
        self.propagations_at_start = engine.num_propagations();
        self.root = Some(store.new_checkpoint());

        debug!(
            "Search started over {} variables and {} propagators",
            store.num_domains(),
            engine.num_propagators()
        );

        if self.root_is_infeasible {
            self.finish(SearchState::Exhausted, store, engine, monitors);
            return;
        }

        let infeasible_assumption = self
            .assumptions
            .iter()
            .copied()
            .find(|&assumption| store.apply(assumption).is_err());
        if let Some(assumption) = infeasible_assumption {
            trace!("Assumption {assumption} is infeasible");
            self.finish(SearchState::Exhausted, store, engine, monitors);
            return;
        }

        self.state = SearchState::Propagating;
    }

    fn propagate<M: SearchMonitor + ?Sized>(
        &mut self,
        store: &mut DomainStore,
        engine: &mut PropagationEngine,
        monitors: &mut M,
    ) {
        if self.should_stop(engine, monitors) {
            self.finish(SearchState::TimedOut, store, engine, monitors);
            return;
        }

        if let (Some(objective), Some(incumbent)) = (self.objective, self.incumbent) {
            let improvable = objective
                .improvement_over(incumbent)
                .is_some_and(|improvement| store.apply(improvement).is_ok());
            if !improvable {
                self.statistics.num_failures += 1;
                self.state = SearchState::Backtracking;
                return;
            }
        }

        self.state = match engine.propagate(store) {
            Err(_) => {
                self.statistics.num_failures += 1;
                SearchState::Backtracking
            }
            Ok(()) if store.all_fixed() => SearchState::SolutionFound,
            Ok(()) => SearchState::Branching,
        };
    }

    fn branch<B, M>(
        &mut self,
        store: &mut DomainStore,
        engine: &mut PropagationEngine,
        brancher: &mut B,
        monitors: &mut M,
    ) -> Result<(), ModelError>
    where
        B: Brancher + ?Sized,
        M: SearchMonitor + ?Sized,
    {
        if self.should_stop(engine, monitors) {
            self.finish(SearchState::TimedOut, store, engine, monitors);
            return Ok(());
        }

        let Some(decision) = brancher.next_decision(&SelectionContext::new(store)) else {
            return match store.first_unfixed() {
                Some(unfixed) => Err(ModelError::IncompleteAssignment { unfixed }),
                None => {
                    self.state = SearchState::SolutionFound;
                    Ok(())
                }
            };
        };

        trace!(
            "Decision {decision} at depth {}",
            self.choice_points.len() + 1
        );

        let checkpoint = store.new_checkpoint();
        self.choice_points.push(ChoicePoint {
            checkpoint,
            next_alternative: decision.second_alternative(),
        });

        self.apply_alternative(store, decision.first_alternative())
    }

    fn backtrack<B, M>(
        &mut self,
        store: &mut DomainStore,
        engine: &mut PropagationEngine,
        brancher: &mut B,
        monitors: &mut M,
    ) -> Result<(), ModelError>
    where
        B: Brancher + ?Sized,
        M: SearchMonitor + ?Sized,
    {
        while let Some(choice_point) = self.choice_points.pop() {
            store.synchronise(choice_point.checkpoint);
            brancher.on_backtrack();

            if let Some(alternative) = choice_point.next_alternative {
                trace!(
                    "Backtracked to depth {}, trying {alternative}",
                    self.choice_points.len() + 1
                );
                // The alternative lives at the level of the restored checkpoint, so backtracking
                // to any earlier choice point undoes it.
                return self.apply_alternative(store, alternative);
            }
        }

        self.finish(SearchState::Exhausted, store, engine, monitors);
        Ok(())
    }

    fn apply_alternative(
        &mut self,
        store: &mut DomainStore,
        alternative: Predicate,
    ) -> Result<(), ModelError> {
        self.statistics.num_branches += 1;

        match store.apply(alternative) {
            Ok(true) => self.state = SearchState::Propagating,
            Ok(false) => return Err(ModelError::IneffectiveDecision(alternative)),
            Err(_) => {
                self.statistics.num_failures += 1;
                self.state = SearchState::Backtracking;
            }
        }

        Ok(())
    }

    fn record_solution<B, M>(
        &mut self,
        store: &mut DomainStore,
        engine: &mut PropagationEngine,
        brancher: &mut B,
        monitors: &mut M,
    ) -> Assignment
    where
        B: Brancher + ?Sized,
        M: SearchMonitor + ?Sized,
    {
        let objective_value = self
            .objective
            .and_then(|objective| store.fixed_value(objective.variable()));
        let solution = Assignment::new(
            self.tracked.iter().filter_map(|&domain_id| {
                store.fixed_value(domain_id).map(|value| (domain_id, value))
            }),
            objective_value,
        );

        self.statistics.num_solutions += 1;
        if let Some(objective_value) = objective_value {
            debug!("New incumbent with objective {objective_value}");
            self.incumbent = Some(objective_value);
        }

        brancher.on_solution(&solution);

        if monitors.on_solution(&solution).is_break() {
            self.finish(SearchState::Stopped, store, engine, monitors);
        } else {
            self.state = SearchState::Backtracking;
        }

        solution
    }

    fn should_stop<M: SearchMonitor + ?Sized>(
        &mut self,
        engine: &PropagationEngine,
        monitors: &mut M,
    ) -> bool {
        self.refresh_statistics(engine);
        monitors.on_checkpoint(&self.statistics).is_break()
    }

    fn refresh_statistics(&mut self, engine: &PropagationEngine) {
        self.statistics.elapsed = self.started_at.elapsed();
        self.statistics.num_propagations = engine.num_propagations() - self.propagations_at_start;
    }

    fn finish<M: SearchMonitor + ?Sized>(
        &mut self,
        state: SearchState,
        store: &mut DomainStore,
        engine: &PropagationEngine,
        monitors: &mut M,
    ) {
        self.refresh_statistics(engine);
        self.state = state;
        self.restore_root(store);
        monitors.on_search_end(&self.statistics);

        debug!(
            "Search finished as {state:?}: {} branches, {} failures, {} solutions",
            self.statistics.num_branches,
            self.statistics.num_failures,
            self.statistics.num_solutions
        );
    }
}
