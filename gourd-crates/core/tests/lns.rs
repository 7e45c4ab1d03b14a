#![cfg(test)]

use std::time::Duration;

use gourd_core::constraints;
use gourd_core::lns::Fragment;
use gourd_core::lns::LargeNeighbourhoodSearch;
use gourd_core::lns::LnsError;
use gourd_core::lns::LnsOptions;
use gourd_core::lns::LnsTermination;
use gourd_core::lns::RandomFragmentSelector;
use gourd_core::monitors::Indefinite;
use gourd_core::results::OptimisationResult;
use gourd_core::results::SatisfactionResult;
use gourd_core::variables::DomainId;
use gourd_core::Assignment;
use gourd_core::Random;
use gourd_core::Solver;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

const COSTS: [[i32; 5]; 5] = [
    [7, 3, 9, 4, 8],
    [2, 6, 5, 9, 3],
    [8, 4, 1, 7, 6],
    [5, 9, 6, 2, 4],
    [3, 7, 8, 5, 1],
];

/// Assigns every task to a distinct machine, minimising the total cost. Only the tasks are
/// tracked, so they form the variables which are fixed or relaxed.
fn model() -> (Solver, Vec<DomainId>, DomainId) {
    let mut solver = Solver::default();
    let tasks = (0..COSTS.len())
        .map(|index| solver.new_named_bounded_integer(0, 4, format!("task{index}")))
        .collect::<Vec<_>>();
    let task_costs = (0..COSTS.len())
        .map(|_| solver.new_bounded_integer(1, 9))
        .collect::<Vec<_>>();
    let total = solver.new_named_bounded_integer(0, 45, "total");

    for ((&task, &task_cost), row) in tasks.iter().zip(&task_costs).zip(COSTS) {
        solver
            .add_constraint(constraints::element(task, row, task_cost))
            .expect("feasible at the root");
    }
    solver
        .add_constraint(constraints::all_different(tasks.clone()))
        .expect("feasible at the root");
    solver
        .add_constraint(constraints::equals(
            task_costs
                .iter()
                .map(|&task_cost| (1, task_cost))
                .chain([(-1, total)]),
            0,
        ))
        .expect("feasible at the root");

    solver.minimise(total).expect("known variable");
    solver.track(tasks.clone()).expect("known variables");

    (solver, tasks, total)
}

fn initial_solution(solver: &mut Solver) -> Assignment {
    let mut brancher = solver.default_brancher();
    match solver.satisfy(&mut brancher, &mut Indefinite) {
        Ok(SatisfactionResult::Satisfiable(solution)) => solution,
        other => panic!("expected a solution, got {other:?}"),
    }
}

fn optimum() -> i32 {
    let (mut solver, _, _) = model();
    let mut brancher = solver.default_brancher();
    let (result, _) = solver
        .optimise(&mut brancher, &mut Indefinite)
        .expect("no model errors");

    match result {
        OptimisationResult::Optimal(best) => best.objective_value().expect("objective is set"),
        other => panic!("expected an optimal result, got {other:?}"),
    }
}

#[test]
fn full_neighbourhood_matches_a_complete_solve() {
    init_logging();

    let (mut solver, tasks, _) = model();
    let initial = initial_solution(&mut solver);
    let mut brancher = solver.default_brancher();

    let mut lns = LargeNeighbourhoodSearch::new(LnsOptions {
        neighbourhood_size: tasks.len(),
        global_time_limit: Duration::from_secs(30),
        ..Default::default()
    });
    let result = lns
        .run(&mut solver, initial, &mut RandomFragmentSelector, &mut brancher)
        .expect("no errors");

    assert_eq!(result.termination, LnsTermination::ProvenOptimal);
    assert_eq!(result.best.objective_value(), Some(optimum()));
}

#[test]
fn incumbent_never_worsens() {
    init_logging();

    for seed in [1, 7, 42] {
        let (mut solver, tasks, _) = model();
        let initial = initial_solution(&mut solver);
        let initial_value = initial.objective_value().expect("objective is set");
        let mut brancher = solver.default_brancher();

        let mut lns = LargeNeighbourhoodSearch::new(LnsOptions {
            neighbourhood_size: 2,
            max_iterations: Some(20),
            random_seed: seed,
            ..Default::default()
        });
        let result = lns
            .run(&mut solver, initial, &mut RandomFragmentSelector, &mut brancher)
            .expect("no errors");

        let best_value = result.best.objective_value().expect("objective is set");
        assert!(best_value <= initial_value);
        assert!(best_value >= optimum());
        assert!(result.statistics.num_improvements <= result.statistics.num_iterations);

        // The best solution is a permutation with a matching cost.
        let machines = tasks
            .iter()
            .map(|&task| result.best.value(task).expect("tasks are tracked"))
            .collect::<Vec<_>>();
        let mut sorted = machines.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, vec![0, 1, 2, 3, 4]);
        let cost = machines
            .iter()
            .enumerate()
            .map(|(task, &machine)| COSTS[task][machine as usize])
            .sum::<i32>();
        assert_eq!(cost, best_value);
    }
}

#[test]
fn relaxing_a_fixed_pair_swaps_it() {
    let (mut solver, tasks, _) = model();
    let initial = initial_solution(&mut solver);
    let mut brancher = solver.default_brancher();

    // The default brancher assigns task i to machine i, costing 7 + 6 + 1 + 2 + 1 = 17. Relaxing
    // the first two tasks allows swapping them for 3 + 2.
    assert_eq!(initial.objective_value(), Some(17));
    let (first, second) = (tasks[0], tasks[1]);
    let mut first_two =
        |_: &[DomainId], _: usize, _: &mut dyn Random| Some(Fragment::new([first, second]));

    let mut lns = LargeNeighbourhoodSearch::new(LnsOptions {
        max_iterations: Some(2),
        ..Default::default()
    });
    let result = lns
        .run(&mut solver, initial, &mut first_two, &mut brancher)
        .expect("no errors");

    assert_eq!(result.termination, LnsTermination::IterationLimit);
    assert_eq!(result.best.objective_value(), Some(9));
    assert_eq!(result.best.value(first), Some(1));
    assert_eq!(result.best.value(second), Some(0));
    assert_eq!(result.statistics.num_improvements, 1);
}

#[test]
fn fragment_selection_failure_is_surfaced() {
    let (mut solver, _, _) = model();
    let initial = initial_solution(&mut solver);
    let mut brancher = solver.default_brancher();
    let mut nothing = |_: &[DomainId], _: usize, _: &mut dyn Random| -> Option<Fragment> { None };

    let result = LargeNeighbourhoodSearch::default().run(
        &mut solver,
        initial,
        &mut nothing,
        &mut brancher,
    );

    assert_eq!(
        result,
        Err(LnsError::FragmentSelectionFailed { num_variables: 5 })
    );
}
