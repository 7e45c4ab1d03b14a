use log::warn;

use super::VariableSelector;
use crate::branching::tie_breaking::Direction;
use crate::branching::tie_breaking::InOrderTieBreaker;
use crate::branching::tie_breaking::TieBreaker;
use crate::branching::SelectionContext;
use crate::variables::DomainId;

/// Selects the unfixed variable with the fewest values left in its domain; ties are broken in
/// favour of the variable which comes first in the list.
#[derive(Debug)]
pub struct FirstFail {
    variables: Vec<DomainId>,
    tie_breaker: InOrderTieBreaker<DomainId, usize>,
}

impl FirstFail {
    pub fn new(variables: &[DomainId]) -> Self {
        if variables.is_empty() {
            warn!("The FirstFail variable selector was not provided with any variables");
        }
        FirstFail {
            variables: variables.to_vec(),
            tie_breaker: InOrderTieBreaker::new(Direction::Minimum),
        }
    }
}

impl VariableSelector for FirstFail {
    fn select_variable(&mut self, context: &SelectionContext<'_>) -> Option<DomainId> {
        self.variables
            .iter()
            .filter(|&&variable| !context.is_integer_fixed(variable))
            .for_each(|&variable| {
                self.tie_breaker
                    .consider(variable, context.get_size_of_domain(variable))
            });
        self.tie_breaker.select()
    }
}
