use crate::branching::tie_breaking::Direction;
use crate::branching::tie_breaking::InOrderTieBreaker;
use crate::branching::tie_breaking::TieBreaker;
use crate::branching::Brancher;
use crate::branching::Decision;
use crate::branching::SelectionContext;
use crate::predicate;
use crate::variables::DomainId;

/// Extends partial successor chains before starting new ones.
///
/// The candidates are the elements which are the bound successor of another element but have no
/// bound successor themselves; when there are none, every element with an unbound successor is a
/// candidate. Among the candidates the successor with the smallest domain is assigned its
/// smallest value.
#[derive(Debug)]
pub struct PreferBoundSuccessorsBrancher {
    successors: Vec<DomainId>,
    tie_breaker: InOrderTieBreaker<usize, usize>,
}

impl PreferBoundSuccessorsBrancher {
    pub fn new(successors: &[DomainId]) -> Self {
        PreferBoundSuccessorsBrancher {
            successors: successors.to_vec(),
            tie_breaker: InOrderTieBreaker::new(Direction::Minimum),
        }
    }
}

impl Brancher for PreferBoundSuccessorsBrancher {
    fn next_decision(&mut self, context: &SelectionContext<'_>) -> Option<Decision> {
        let mut chain_ends = Vec::new();
        let mut unbound = Vec::new();

        for (element, &successor) in self.successors.iter().enumerate() {
            match context.fixed_value(successor) {
                Some(next) => {
                    if let Some(&next_successor) = usize::try_from(next)
                        .ok()
                        .and_then(|next| self.successors.get(next))
                    {
                        if !context.is_integer_fixed(next_successor) {
                            chain_ends.push(next as usize);
                        }
                    }
                }
                None => unbound.push(element),
            }
        }

        let candidates = if chain_ends.is_empty() {
            unbound
        } else {
            chain_ends
        };
        for element in candidates {
            self.tie_breaker.consider(
                element,
                context.get_size_of_domain(self.successors[element]),
            );
        }

        let target = self.successors[self.tie_breaker.select()?];
        Some(Decision::binary(predicate!(
            target == context.lower_bound(target)
        )))
    }
}
