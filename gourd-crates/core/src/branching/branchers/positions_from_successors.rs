use crate::branching::Brancher;
use crate::branching::Decision;
use crate::branching::SelectionContext;
use crate::gourd_assert_simple;
use crate::predicate;
use crate::variables::DomainId;

/// Derives positions from a successor (circuit) representation.
///
/// The last element is a sentinel which starts and ends the cycle. The brancher follows the bound
/// successors from the sentinel and, walking that chain backwards, fixes the first unbound
/// position to its largest value (a unary decision). This schedules every element as late as its
/// successors allow.
#[derive(Debug)]
pub struct PositionsFromSuccessorsBrancher {
    successors: Vec<DomainId>,
    positions: Vec<DomainId>,
}

impl PositionsFromSuccessorsBrancher {
    pub fn new(successors: &[DomainId], positions: &[DomainId]) -> Self {
        gourd_assert_simple!(
            successors.len() == positions.len(),
            "every element needs both a successor and a position"
        );

        PositionsFromSuccessorsBrancher {
            successors: successors.to_vec(),
            positions: positions.to_vec(),
        }
    }

    /// The elements after the sentinel, as far as the successors are bound.
    fn chain(&self, context: &SelectionContext<'_>) -> Vec<usize> {
        let Some(sentinel) = self.successors.len().checked_sub(1) else {
            return Vec::new();
        };

        let mut chain = Vec::new();
        let mut current = sentinel;
        while chain.len() < sentinel {
            let Some(next) = context
                .fixed_value(self.successors[current])
                .and_then(|next| usize::try_from(next).ok())
                .filter(|&next| next < sentinel)
            else {
                break;
            };
            chain.push(next);
            current = next;
        }

        chain
    }
}

impl Brancher for PositionsFromSuccessorsBrancher {
    fn next_decision(&mut self, context: &SelectionContext<'_>) -> Option<Decision> {
        self.chain(context)
            .into_iter()
            .rev()
            .map(|element| self.positions[element])
            .find(|&position| !context.is_integer_fixed(position))
            .map(|position| {
                Decision::unary(predicate!(position == context.upper_bound(position)))
            })
    }
}
