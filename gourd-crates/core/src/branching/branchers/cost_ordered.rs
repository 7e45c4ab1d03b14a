use crate::branching::tie_breaking::Direction;
use crate::branching::tie_breaking::InOrderTieBreaker;
use crate::branching::tie_breaking::TieBreaker;
use crate::branching::Brancher;
use crate::branching::Decision;
use crate::branching::SelectionContext;
use crate::predicate;
use crate::variables::DomainId;

/// Selects the unfixed variable with the smallest domain (ties by position) and tries the value
/// with the lowest cost first; on backtrack that value is excluded.
///
/// `costs[v]` is the cost of assigning value `v`; values outside the table cost [`i64::MAX`]. Ties
/// in cost go to the smaller value.
#[derive(Debug)]
pub struct CostOrderedBrancher {
    variables: Vec<DomainId>,
    costs: Vec<i64>,
    tie_breaker: InOrderTieBreaker<DomainId, usize>,
}

impl CostOrderedBrancher {
    pub fn new(variables: &[DomainId], costs: Vec<i64>) -> Self {
        CostOrderedBrancher {
            variables: variables.to_vec(),
            costs,
            tie_breaker: InOrderTieBreaker::new(Direction::Minimum),
        }
    }

    fn cost(&self, value: i32) -> i64 {
        usize::try_from(value)
            .ok()
            .and_then(|index| self.costs.get(index))
            .copied()
            .unwrap_or(i64::MAX)
    }
}

impl Brancher for CostOrderedBrancher {
    fn next_decision(&mut self, context: &SelectionContext<'_>) -> Option<Decision> {
        for &variable in &self.variables {
            if !context.is_integer_fixed(variable) {
                self.tie_breaker
                    .consider(variable, context.get_size_of_domain(variable));
            }
        }
        let target = self.tie_breaker.select()?;

        let value = context
            .iterate_domain(target)
            .min_by_key(|&value| self.cost(value))?;

        Some(Decision::binary(predicate!(target == value)))
    }
}
