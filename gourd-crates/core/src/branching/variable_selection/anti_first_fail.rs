use log::warn;

use super::VariableSelector;
use crate::branching::tie_breaking::Direction;
use crate::branching::tie_breaking::InOrderTieBreaker;
use crate::branching::tie_breaking::TieBreaker;
use crate::branching::SelectionContext;
use crate::variables::DomainId;

/// Selects the unfixed variable with the most values left in its domain.
#[derive(Debug)]
pub struct AntiFirstFail {
    variables: Vec<DomainId>,
    tie_breaker: InOrderTieBreaker<DomainId, usize>,
}

impl AntiFirstFail {
    pub fn new(variables: &[DomainId]) -> Self {
        if variables.is_empty() {
            warn!("The AntiFirstFail variable selector was not provided with any variables");
        }
        AntiFirstFail {
            variables: variables.to_vec(),
            tie_breaker: InOrderTieBreaker::new(Direction::Maximum),
        }
    }
}

impl VariableSelector for AntiFirstFail {
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
