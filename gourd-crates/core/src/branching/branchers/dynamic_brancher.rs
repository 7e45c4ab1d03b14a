//! A [`Brancher`] which sequentially applies a list of [`Brancher`]s until none of them can find
//! another decision.
use std::fmt::Debug;

use crate::branching::Brancher;
use crate::branching::Decision;
use crate::branching::SelectionContext;
use crate::statistics::StatisticLogger;
use crate::Assignment;

/// Asks the provided branchers for a decision in order, moving on to the next brancher when the
/// current one returns [`None`].
///
/// The position is reset to the first brancher on backtrack and after a solution, since any of the
/// branchers may have something to decide again at that point.
pub struct DynamicBrancher {
    branchers: Vec<Box<dyn Brancher>>,
    brancher_index: usize,
}

impl Debug for DynamicBrancher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DynamicBrancher")
            .field("num_branchers", &self.branchers.len())
            .field("brancher_index", &self.brancher_index)
            .finish()
    }
}

impl DynamicBrancher {
    /// Creates a new [`DynamicBrancher`] which uses the `branchers` in the order in which they
    /// were provided.
    pub fn new(branchers: Vec<Box<dyn Brancher>>) -> Self {
        Self {
            branchers,
            brancher_index: 0,
        }
    }

    pub fn add_brancher(&mut self, brancher: Box<dyn Brancher>) {
        self.branchers.push(brancher)
    }
}

impl Brancher for DynamicBrancher {
    fn next_decision(&mut self, context: &SelectionContext<'_>) -> Option<Decision> {
        while self.brancher_index < self.branchers.len() {
            if let Some(decision) = self.branchers[self.brancher_index].next_decision(context) {
                return Some(decision);
            }
            self.brancher_index += 1;
        }

        None
    }

    fn on_backtrack(&mut self) {
        self.brancher_index = 0;
        self.branchers
            .iter_mut()
            .for_each(|brancher| brancher.on_backtrack());
    }

    fn on_solution(&mut self, solution: &Assignment) {
        self.brancher_index = 0;
        self.branchers
            .iter_mut()
            .for_each(|brancher| brancher.on_solution(solution));
    }

    fn log_statistics(&self, statistic_logger: StatisticLogger) {
        self.branchers
            .iter()
            .enumerate()
            .for_each(move |(index, brancher)| {
                brancher.log_statistics(statistic_logger.attach_to_prefix(index))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::branching::branchers::IndependentVariableValueBrancher;
    use crate::branching::selection_context::tests::store_for_testing;
    use crate::branching::value_selection::InDomainMax;
    use crate::branching::value_selection::InDomainMin;
    use crate::branching::variable_selection::InputOrder;
    use crate::predicate;

    #[test]
    fn branchers_are_consulted_in_order() {
        let (mut store, ids) = store_for_testing(&[(0, 3), (0, 3)]);
        let mut brancher = DynamicBrancher::new(vec![
            Box::new(IndependentVariableValueBrancher::new(
                InputOrder::new(&ids[..1]),
                InDomainMin,
            )),
            Box::new(IndependentVariableValueBrancher::new(
                InputOrder::new(&ids[1..]),
                InDomainMax,
            )),
        ]);

        assert_eq!(
            brancher.next_decision(&SelectionContext::new(&store)),
            Some(Decision::binary(predicate!(ids[0] == 0)))
        );

        let _ = store.assign(ids[0], 0).expect("in domain");
        assert_eq!(
            brancher.next_decision(&SelectionContext::new(&store)),
            Some(Decision::binary(predicate!(ids[1] == 3)))
        );

        let _ = store.assign(ids[1], 3).expect("in domain");
        assert_eq!(brancher.next_decision(&SelectionContext::new(&store)), None);
    }

    #[test]
    fn backtracking_restarts_from_the_first_brancher() {
        let (mut store, ids) = store_for_testing(&[(0, 3), (0, 3)]);
        let mut brancher = DynamicBrancher::new(vec![
            Box::new(IndependentVariableValueBrancher::new(
                InputOrder::new(&ids[..1]),
                InDomainMin,
            )),
            Box::new(IndependentVariableValueBrancher::new(
                InputOrder::new(&ids[1..]),
                InDomainMin,
            )),
        ]);

        let checkpoint = store.new_checkpoint();
        let _ = store.assign(ids[0], 1).expect("in domain");
        let _ = brancher.next_decision(&SelectionContext::new(&store));

        store.synchronise(checkpoint);
        brancher.on_backtrack();

        assert_eq!(
            brancher.next_decision(&SelectionContext::new(&store)),
            Some(Decision::binary(predicate!(ids[0] == 0)))
        );
    }
}
