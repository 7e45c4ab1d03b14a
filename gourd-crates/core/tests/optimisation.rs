#![cfg(test)]

use gourd_core::constraints;
use gourd_core::monitors::BranchLimit;
use gourd_core::monitors::Indefinite;
use gourd_core::optimisation::Objective;
use gourd_core::optimisation::OptimisationDirection;
use gourd_core::results::OptimisationResult;
use gourd_core::results::SearchTermination;
use gourd_core::variables::DomainId;
use gourd_core::Solver;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Three binary variables and their sum.
fn sum_of_binaries() -> (Solver, Vec<DomainId>, DomainId) {
    let mut solver = Solver::default();
    let binaries = (0..3)
        .map(|index| solver.new_named_bounded_integer(0, 1, format!("b{index}")))
        .collect::<Vec<_>>();
    let total = solver.new_named_bounded_integer(0, 3, "total");
    solver
        .add_constraint(constraints::equals(
            binaries
                .iter()
                .map(|&binary| (1, binary))
                .chain([(-1, total)]),
            0,
        ))
        .expect("feasible at the root");

    (solver, binaries, total)
}

/// A small assignment problem: `cost == sum(costs[i][x_i])` with all `x_i` different.
fn assignment_problem() -> (Solver, DomainId) {
    let costs = [[4, 1, 3, 7], [2, 0, 5, 2], [3, 2, 2, 6], [5, 8, 1, 4]];

    let mut solver = Solver::default();
    let workers = (0..costs.len())
        .map(|_| solver.new_bounded_integer(0, 3))
        .collect::<Vec<_>>();
    let worker_costs = costs
        .iter()
        .map(|row| {
            let (lower, upper) = row
                .iter()
                .fold((i32::MAX, i32::MIN), |(lo, hi), &c| (lo.min(c), hi.max(c)));
            solver.new_bounded_integer(lower, upper)
        })
        .collect::<Vec<_>>();
    let cost = solver.new_bounded_integer(0, 100);

    for ((&worker, &worker_cost), row) in workers.iter().zip(&worker_costs).zip(&costs) {
        solver
            .add_constraint(constraints::element(worker, row.to_vec(), worker_cost))
            .expect("feasible at the root");
    }
    solver
        .add_constraint(constraints::all_different(workers.clone()))
        .expect("feasible at the root");
    solver
        .add_constraint(constraints::equals(
            worker_costs
                .iter()
                .map(|&worker_cost| (1, worker_cost))
                .chain([(-1, cost)]),
            0,
        ))
        .expect("feasible at the root");

    (solver, cost)
}

#[test]
fn minimising_the_sum_of_binaries_reaches_zero() {
    init_logging();

    let (mut solver, binaries, total) = sum_of_binaries();
    solver.minimise(total).expect("known variable");

    let mut brancher = solver.default_brancher();
    let (result, statistics) = solver
        .optimise(&mut brancher, &mut Indefinite)
        .expect("no model errors");

    let OptimisationResult::Optimal(best) = result else {
        panic!("expected an optimal result, got {result:?}");
    };
    assert_eq!(best.objective_value(), Some(0));
    assert!(binaries.iter().all(|&binary| best.value(binary) == Some(0)));
    assert!(statistics.num_solutions >= 1);
}

#[test]
fn branch_and_bound_strictly_improves() {
    let (mut solver, cost) = assignment_problem();
    solver.minimise(cost).expect("known variable");

    let mut brancher = solver.default_brancher();
    let mut indefinite = Indefinite;
    let mut solutions = solver.search(&mut brancher, &mut indefinite);

    let mut objectives = Vec::new();
    while let Some(solution) = solutions.next_solution().expect("no model errors") {
        objectives.push(solution.objective_value().expect("the objective is set"));
    }

    assert_eq!(solutions.termination(), Some(SearchTermination::Exhausted));
    assert!(!objectives.is_empty());
    assert!(objectives.windows(2).all(|pair| pair[1] < pair[0]));
}

#[test]
fn optimum_is_at_most_every_feasible_objective() {
    let (mut enumerating, cost) = assignment_problem();
    let mut brancher = enumerating.default_brancher();
    let all_costs = enumerating
        .search(&mut brancher, &mut Indefinite)
        .map(|solution| {
            solution
                .expect("no model errors")
                .value(cost)
                .expect("every variable is tracked")
        })
        .collect::<Vec<_>>();

    let (mut optimising, cost) = assignment_problem();
    optimising.minimise(cost).expect("known variable");
    let mut brancher = optimising.default_brancher();
    let (result, _) = optimising
        .optimise(&mut brancher, &mut Indefinite)
        .expect("no model errors");

    let OptimisationResult::Optimal(best) = result else {
        panic!("expected an optimal result, got {result:?}");
    };
    let optimum = best.objective_value().expect("the objective is set");

    // 4! permutations of the workers.
    assert_eq!(all_costs.len(), 24);
    assert_eq!(Some(&optimum), all_costs.iter().min());
}

#[test]
fn maximising_with_a_step() {
    let (mut solver, _, total) = sum_of_binaries();
    solver
        .set_objective(Objective::new(total, OptimisationDirection::Maximise, 2))
        .expect("known variable");

    let mut brancher = solver.default_brancher();
    let mut indefinite = Indefinite;
    let mut solutions = solver.search(&mut brancher, &mut indefinite);

    let mut objectives = Vec::new();
    while let Some(solution) = solutions.next_solution().expect("no model errors") {
        objectives.push(solution.objective_value().expect("the objective is set"));
    }

    // Every new solution has to improve by at least two.
    assert!(objectives.windows(2).all(|pair| pair[1] >= pair[0] + 2));
    assert_eq!(objectives.first(), Some(&0));
}

#[test]
fn interrupted_optimisation_is_not_proven() {
    let (mut solver, cost) = assignment_problem();
    solver.minimise(cost).expect("known variable");

    let mut brancher = solver.default_brancher();
    let mut limit = BranchLimit::new(5);
    let (result, statistics) = solver
        .optimise(&mut brancher, &mut limit)
        .expect("no model errors");

    assert!(matches!(
        result,
        OptimisationResult::Satisfiable(_) | OptimisationResult::Unknown
    ));
    assert!(statistics.num_branches <= 5);
}
