use itertools::Itertools;
use log::warn;

use crate::branching::Brancher;
use crate::branching::Decision;
use crate::branching::SelectionContext;
use crate::gourd_assert_simple;
use crate::predicate;
use crate::variables::DomainId;

/// Derives a successor (circuit) representation from a position representation.
///
/// Element `i` has a successor variable `successors[i]`, holding the index of the element which
/// follows it in the cycle, and a position variable `positions[i]`. The elements are ordered by
/// the lower bound of their position (ties by index), and the first element in that order whose
/// successor is unbound gets the next element in the order as its successor; the last element
/// closes the cycle onto the first one.
///
/// The decisions are unary: if the successor is refuted, the positions were inconsistent with the
/// constraints and the node fails.
#[derive(Debug)]
pub struct SuccessorChainBrancher {
    successors: Vec<DomainId>,
    positions: Vec<DomainId>,
}

impl SuccessorChainBrancher {
    pub fn new(successors: &[DomainId], positions: &[DomainId]) -> Self {
        gourd_assert_simple!(
            successors.len() == positions.len(),
            "every element needs both a successor and a position"
        );
        if successors.is_empty() {
            warn!("The SuccessorChainBrancher was not provided with any elements");
        }

        SuccessorChainBrancher {
            successors: successors.to_vec(),
            positions: positions.to_vec(),
        }
    }
}

impl Brancher for SuccessorChainBrancher {
    fn next_decision(&mut self, context: &SelectionContext<'_>) -> Option<Decision> {
        let order = (0..self.positions.len())
            .sorted_by_key(|&element| (context.lower_bound(self.positions[element]), element))
            .collect::<Vec<_>>();

        let (rank, &target) = order
            .iter()
            .find_position(|&&element| !context.is_integer_fixed(self.successors[element]))?;
        let next = order[(rank + 1) % order.len()];

        Some(Decision::unary(predicate!(
            self.successors[target] == next as i32
        )))
    }
}
