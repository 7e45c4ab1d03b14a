use log::debug;
use log::warn;

use super::results::OptimisationResult;
use super::results::SatisfactionResult;
use super::results::SearchTermination;
use crate::basic_types::ConstraintOperationError;
use crate::basic_types::ModelError;
use crate::branching::branchers::phase;
use crate::branching::branchers::PhaseBrancher;
use crate::branching::branchers::ValueSelectionStrategy;
use crate::branching::branchers::VariableSelectionStrategy;
use crate::branching::Brancher;
use crate::constraints::Constraint;
use crate::engine::propagation::PropagationEngine;
use crate::engine::search::TreeSearch;
use crate::engine::DomainStore;
use crate::engine::IntegerDomain;
use crate::gourd_assert_simple;
use crate::monitors::SearchMonitor;
use crate::optimisation::Objective;
use crate::options::SolverOptions;
use crate::predicates::Predicate;
use crate::results::solution_iterator::SolutionIterator;
use crate::statistics::log_statistic;
use crate::statistics::log_statistic_postfix;
use crate::statistics::SearchStatistics;
use crate::statistics::Statistic;
use crate::statistics::StatisticLogger;
use crate::variables::DomainId;

/// The main interaction point which allows the creation of variables, the addition of constraints,
/// and searching for solutions.
///
/// # Creating Variables
/// ```rust
/// # use gourd_core::Solver;
/// let mut solver = Solver::default();
///
/// // A variable with a domain in the range [0, 10]
/// let tank = solver.new_bounded_integer(0, 10);
///
/// // Variables can be named, the name shows up in the logs
/// let chemical = solver.new_named_bounded_integer(0, 10, "chemical");
///
/// // A variable with holes in its domain
/// let slot = solver.new_sparse_integer(vec![0, 3, 5]);
/// # assert_eq!(solver.num_variables(), 3);
/// ```
///
/// # Searching
/// The model is sealed once the first search starts: afterwards, constraints and objectives are
/// rejected with [`ConstraintOperationError::ModelSealed`]. Between searches the domains are
/// always back at the root.
///
/// ```rust
/// # use gourd_core::constraints;
/// # use gourd_core::monitors::Indefinite;
/// # use gourd_core::results::OptimisationResult;
/// # use gourd_core::Solver;
/// let mut solver = Solver::default();
/// let x = solver.new_bounded_integer(0, 5);
/// let y = solver.new_bounded_integer(0, 5);
/// let total = solver.new_bounded_integer(0, 10);
///
/// solver
///     .add_constraint(constraints::equals([(1, x), (1, y), (-1, total)], 0))
///     .expect("feasible at the root");
/// solver
///     .add_constraint(constraints::binary_less_than_or_equals(x, y, -2))
///     .expect("feasible at the root");
/// solver.minimise(total).expect("known variable");
///
/// let mut brancher = solver.default_brancher();
/// let (result, _statistics) = solver
///     .optimise(&mut brancher, &mut Indefinite)
///     .expect("the brancher covers every variable");
///
/// let OptimisationResult::Optimal(solution) = result else {
///     panic!("the search space is finite");
/// };
/// assert_eq!(solution.objective_value(), Some(2));
/// ```
#[derive(Debug)]
pub struct Solver {
    pub(crate) store: DomainStore,
    pub(crate) engine: PropagationEngine,
    objective: Option<Objective>,
    /// The variables recorded in solutions; all variables if `None`.
    tracked: Option<Vec<DomainId>>,
    /// Set once propagation at the root has failed.
    is_infeasible: bool,
    /// Set once the first search has started.
    is_sealed: bool,
}

impl Default for Solver {
    fn default() -> Self {
        Solver::with_options(SolverOptions::default())
    }
}

impl Solver {
    pub fn with_options(options: SolverOptions) -> Self {
        Solver {
            store: DomainStore::new(options.sparse_domain_limit),
            engine: PropagationEngine::default(),
            objective: None,
            tracked: None,
            is_infeasible: false,
            is_sealed: false,
        }
    }

    /// Logs the statistics of the model together with the given [`SearchStatistics`], followed
    /// by the configured closing line.
    pub fn log_statistics(&self, statistics: &SearchStatistics) {
        log_statistic("numVariables", self.store.num_domains());
        log_statistic("numPropagators", self.engine.num_propagators());
        statistics.log(StatisticLogger::default());
        log_statistic_postfix();
    }
}

/// Methods to retrieve information about the model.
impl Solver {
    /// The lower bound of `variable` at the root.
    pub fn lower_bound(&self, variable: DomainId) -> i32 {
        self.store.lower_bound(variable)
    }

    /// The upper bound of `variable` at the root.
    pub fn upper_bound(&self, variable: DomainId) -> i32 {
        self.store.upper_bound(variable)
    }

    /// The values of `variable` at the root, in increasing order.
    pub fn values(&self, variable: DomainId) -> impl Iterator<Item = i32> + '_ {
        self.store.iterate_domain(variable)
    }

    pub fn name(&self, variable: DomainId) -> Option<&str> {
        self.store.name(variable)
    }

    pub fn num_variables(&self) -> usize {
        self.store.num_domains()
    }

    /// All variables in the order in which they were created.
    pub fn variables(&self) -> impl Iterator<Item = DomainId> + '_ {
        self.store.domain_ids()
    }

    pub fn num_constraints(&self) -> usize {
        self.engine.num_propagators()
    }

    /// Whether propagation at the root has proven that the model has no solution.
    pub fn is_infeasible(&self) -> bool {
        self.is_infeasible
    }

    pub fn objective(&self) -> Option<Objective> {
        self.objective
    }

    /// The variables which are recorded in every solution.
    pub fn tracked_variables(&self) -> Vec<DomainId> {
        match &self.tracked {
            Some(tracked) => tracked.clone(),
            None => self.store.domain_ids().collect(),
        }
    }
}

/// Functions to create variables.
///
/// Creating a variable with an empty domain makes the model infeasible; the variable is then
/// created with the single value of its lower bound so that it can still be referred to.
impl Solver {
    pub fn new_bounded_integer(&mut self, lower_bound: i32, upper_bound: i32) -> DomainId {
        self.create_variable(
            IntegerDomain::interval(lower_bound, upper_bound),
            lower_bound,
            None,
        )
    }

    pub fn new_named_bounded_integer(
        &mut self,
        lower_bound: i32,
        upper_bound: i32,
        name: impl Into<String>,
    ) -> DomainId {
        self.create_variable(
            IntegerDomain::interval(lower_bound, upper_bound),
            lower_bound,
            Some(name.into()),
        )
    }

    /// Creates a variable which can take exactly the given values; duplicates are ignored.
    pub fn new_sparse_integer(&mut self, values: impl Into<Vec<i32>>) -> DomainId {
        let values = values.into();
        let fallback = values.iter().copied().min().unwrap_or_default();
        self.create_variable(IntegerDomain::sparse(values), fallback, None)
    }

    pub fn new_named_sparse_integer(
        &mut self,
        values: impl Into<Vec<i32>>,
        name: impl Into<String>,
    ) -> DomainId {
        let values = values.into();
        let fallback = values.iter().copied().min().unwrap_or_default();
        self.create_variable(IntegerDomain::sparse(values), fallback, Some(name.into()))
    }

    fn create_variable(
        &mut self,
        domain: Option<IntegerDomain>,
        fallback: i32,
        name: Option<String>,
    ) -> DomainId {
        gourd_assert_simple!(
            !self.is_sealed,
            "variables cannot be created once a search has been started"
        );

        let domain = domain.unwrap_or_else(|| {
            warn!("Variable {name:?} was created with an empty domain; the model is infeasible");
            self.is_infeasible = true;
            IntegerDomain::Interval {
                lower_bound: fallback,
                upper_bound: fallback,
            }
        });

        self.store.grow(domain, name.as_deref())
    }
}

/// Functions for adding constraints and the objective.
impl Solver {
    /// Adds a constraint to the model and propagates it at the root.
    ///
    /// If propagation proves the model infeasible,
    /// [`ConstraintOperationError::InfeasiblePropagator`] is returned; after that, every
    /// further constraint is rejected with [`ConstraintOperationError::InfeasibleState`].
    ///
    /// # Example
    /// ```
    /// # use gourd_core::constraints;
    /// # use gourd_core::ConstraintOperationError;
    /// # use gourd_core::Solver;
    /// let mut solver = Solver::default();
    /// let a = solver.new_bounded_integer(0, 3);
    /// let b = solver.new_bounded_integer(5, 8);
    ///
    /// let result = solver.add_constraint(constraints::binary_less_than_or_equals(b, a, 0));
    ///
    /// assert_eq!(result, Err(ConstraintOperationError::InfeasiblePropagator));
    /// ```
    pub fn add_constraint(
        &mut self,
        constraint: Constraint,
    ) -> Result<(), ConstraintOperationError> {
        if self.is_sealed {
            return Err(ConstraintOperationError::ModelSealed);
        }
        if self.is_infeasible {
            return Err(ConstraintOperationError::InfeasibleState);
        }

        let propagator_id = self.engine.add(constraint, &self.store)?;

        if let Err(inconsistency) = self.engine.propagate(&mut self.store) {
            debug!("Constraint {propagator_id} is infeasible at the root: {inconsistency:?}");
            self.is_infeasible = true;
            return Err(ConstraintOperationError::InfeasiblePropagator);
        }

        Ok(())
    }

    pub fn minimise(&mut self, variable: DomainId) -> Result<(), ConstraintOperationError> {
        self.set_objective(Objective::minimise(variable))
    }

    pub fn maximise(&mut self, variable: DomainId) -> Result<(), ConstraintOperationError> {
        self.set_objective(Objective::maximise(variable))
    }

    /// Replaces the objective of the model.
    pub fn set_objective(&mut self, objective: Objective) -> Result<(), ConstraintOperationError> {
        if self.is_sealed {
            return Err(ConstraintOperationError::ModelSealed);
        }
        if !self.store.contains_domain(objective.variable()) {
            return Err(ConstraintOperationError::UnknownVariable(objective.variable()));
        }

        self.objective = Some(objective);
        Ok(())
    }

    /// Restricts the variables which are recorded in solutions to `variables`. By default every
    /// variable is recorded.
    pub fn track(
        &mut self,
        variables: impl IntoIterator<Item = DomainId>,
    ) -> Result<(), ConstraintOperationError> {
        let variables = variables.into_iter().collect::<Vec<_>>();
        if let Some(&unknown) = variables
            .iter()
            .find(|&&variable| !self.store.contains_domain(variable))
        {
            return Err(ConstraintOperationError::UnknownVariable(unknown));
        }

        self.tracked = Some(variables);
        Ok(())
    }
}

/// Functions for searching.
impl Solver {
    /// Starts a search and returns an iterator over its solutions.
    ///
    /// If an objective is set, the search is a branch-and-bound search in which every next
    /// solution is strictly better than the previous one.
    pub fn search<'this, 'brancher, 'monitors, B, M>(
        &'this mut self,
        brancher: &'brancher mut B,
        monitors: &'monitors mut M,
    ) -> SolutionIterator<'this, 'brancher, 'monitors, B, M>
    where
        B: Brancher + ?Sized,
        M: SearchMonitor + ?Sized,
    {
        self.search_from(brancher, monitors, Vec::default(), None)
    }

    /// Starts a search in which `assumptions` hold at the root and in which only solutions
    /// improving on `incumbent` are accepted.
    pub(crate) fn search_from<'this, 'brancher, 'monitors, B, M>(
        &'this mut self,
        brancher: &'brancher mut B,
        monitors: &'monitors mut M,
        assumptions: Vec<Predicate>,
        incumbent: Option<i32>,
    ) -> SolutionIterator<'this, 'brancher, 'monitors, B, M>
    where
        B: Brancher + ?Sized,
        M: SearchMonitor + ?Sized,
    {
        self.is_sealed = true;

        let search = TreeSearch::new(self.tracked_variables().into(), self.objective)
            .with_assumptions(assumptions)
            .with_incumbent(incumbent)
            .with_infeasible_root(self.is_infeasible);

        SolutionIterator::new(self, brancher, monitors, search)
    }

    /// Searches for a single solution.
    pub fn satisfy<B, M>(
        &mut self,
        brancher: &mut B,
        monitors: &mut M,
    ) -> Result<SatisfactionResult, ModelError>
    where
        B: Brancher + ?Sized,
        M: SearchMonitor + ?Sized,
    {
        let mut solutions = self.search(brancher, monitors);

        let result = match solutions.next_solution()? {
            Some(solution) => SatisfactionResult::Satisfiable(solution),
            None if solutions.termination() == Some(SearchTermination::Exhausted) => {
                SatisfactionResult::Unsatisfiable
            }
            None => SatisfactionResult::Unknown,
        };

        Ok(result)
    }

    /// Runs branch-and-bound on the objective until the search space is exhausted or a monitor
    /// stops the search.
    ///
    /// Returns [`ModelError::MissingObjective`] if no objective was set.
    pub fn optimise<B, M>(
        &mut self,
        brancher: &mut B,
        monitors: &mut M,
    ) -> Result<(OptimisationResult, SearchStatistics), ModelError>
    where
        B: Brancher + ?Sized,
        M: SearchMonitor + ?Sized,
    {
        if self.objective.is_none() {
            return Err(ModelError::MissingObjective);
        }

        let mut solutions = self.search(brancher, monitors);

        let mut best = None;
        while let Some(solution) = solutions.next_solution()? {
            best = Some(solution);
        }

        let proven = solutions.termination() == Some(SearchTermination::Exhausted);
        let result = match best {
            Some(best) if proven => OptimisationResult::Optimal(best),
            Some(best) => OptimisationResult::Satisfiable(best),
            None if proven => OptimisationResult::Unsatisfiable,
            None => OptimisationResult::Unknown,
        };

        Ok((result, *solutions.statistics()))
    }
}

/// Default brancher implementation
impl Solver {
    /// Creates a brancher which fixes the variables in the order in which they were created,
    /// trying the smallest value first and excluding it on backtrack.
    pub fn default_brancher(&self) -> PhaseBrancher {
        let variables = self.store.domain_ids().collect::<Vec<_>>();
        phase(
            &variables,
            VariableSelectionStrategy::FirstUnbound,
            ValueSelectionStrategy::AssignMin,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constraints;
    use crate::monitors::Indefinite;
    use crate::monitors::SolutionLimit;
    use crate::Assignment;

    #[test]
    fn model_is_sealed_after_the_first_search() {
        let mut solver = Solver::default();
        let x = solver.new_bounded_integer(0, 2);
        let y = solver.new_bounded_integer(0, 2);

        let mut brancher = solver.default_brancher();
        let _ = solver
            .satisfy(&mut brancher, &mut Indefinite)
            .expect("no model errors");

        assert_eq!(
            solver.add_constraint(constraints::not_equals(x, y, 0)),
            Err(ConstraintOperationError::ModelSealed)
        );
        assert_eq!(
            solver.minimise(x),
            Err(ConstraintOperationError::ModelSealed)
        );
    }

    #[test]
    fn infeasible_root_rejects_further_constraints() {
        let mut solver = Solver::default();
        let x = solver.new_bounded_integer(0, 0);
        let y = solver.new_bounded_integer(0, 0);

        assert_eq!(
            solver.add_constraint(constraints::not_equals(x, y, 0)),
            Err(ConstraintOperationError::InfeasiblePropagator)
        );
        assert_eq!(
            solver.add_constraint(constraints::not_equals(x, y, 1)),
            Err(ConstraintOperationError::InfeasibleState)
        );

        let mut brancher = solver.default_brancher();
        assert_eq!(
            solver.satisfy(&mut brancher, &mut Indefinite),
            Ok(SatisfactionResult::Unsatisfiable)
        );
    }

    #[test]
    fn empty_domain_makes_the_model_infeasible() {
        let mut solver = Solver::default();
        let _ = solver.new_bounded_integer(3, 1);

        assert!(solver.is_infeasible());
    }

    #[test]
    fn optimise_without_objective_is_an_error() {
        let mut solver = Solver::default();
        let _ = solver.new_bounded_integer(0, 3);
        let mut brancher = solver.default_brancher();

        assert_eq!(
            solver
                .optimise(&mut brancher, &mut Indefinite)
                .map(|(result, _)| result),
            Err(ModelError::MissingObjective)
        );
    }

    #[test]
    fn stopped_optimisation_is_not_proven_optimal() {
        let mut solver = Solver::default();
        let x = solver.new_bounded_integer(0, 5);
        solver.maximise(x).expect("known variable");

        let mut brancher = solver.default_brancher();
        let (result, statistics) = solver
            .optimise(&mut brancher, &mut SolutionLimit::new(1))
            .expect("no model errors");

        assert_eq!(
            result,
            OptimisationResult::Satisfiable(Assignment::new([(x, 0)], Some(0)))
        );
        assert_eq!(statistics.num_solutions, 1);
    }

    #[test]
    fn tracking_restricts_the_recorded_variables() {
        let mut solver = Solver::default();
        let x = solver.new_bounded_integer(1, 1);
        let y = solver.new_bounded_integer(2, 2);
        solver.track([y]).expect("known variable");

        let mut brancher = solver.default_brancher();
        let result = solver
            .satisfy(&mut brancher, &mut Indefinite)
            .expect("no model errors");

        let SatisfactionResult::Satisfiable(solution) = result else {
            panic!("the model is satisfiable");
        };
        assert_eq!(solution.value(x), None);
        assert_eq!(solution.value(y), Some(2));
    }

    #[test]
    fn domains_are_restored_after_a_search() {
        let mut solver = Solver::default();
        let x = solver.new_bounded_integer(0, 4);
        let mut brancher = solver.default_brancher();

        {
            let mut indefinite = Indefinite;
            let mut solutions = solver.search(&mut brancher, &mut indefinite);
            let _ = solutions.next_solution().expect("no model errors");
        }

        assert_eq!(solver.lower_bound(x), 0);
        assert_eq!(solver.upper_bound(x), 4);
    }
}
