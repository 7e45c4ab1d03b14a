use log::warn;

use super::VariableSelector;
use crate::branching::SelectionContext;
use crate::variables::DomainId;

/// Selects the first variable which is not fixed given the order in the provided list.
#[derive(Debug)]
pub struct InputOrder {
    variables: Vec<DomainId>,
}

impl InputOrder {
    pub fn new(variables: &[DomainId]) -> Self {
        if variables.is_empty() {
            warn!("The InputOrder variable selector was not provided with any variables");
        }
        InputOrder {
            variables: variables.to_vec(),
        }
    }
}

impl VariableSelector for InputOrder {
    fn select_variable(&mut self, context: &SelectionContext<'_>) -> Option<DomainId> {
        self.variables
            .iter()
            .find(|&&variable| !context.is_integer_fixed(variable))
            .copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::branching::selection_context::tests::store_for_testing;

    #[test]
    fn the_first_unfixed_variable_is_selected() {
        let (mut store, ids) = store_for_testing(&[(0, 10), (5, 20), (1, 2)]);
        let mut strategy = InputOrder::new(&ids);

        let selected = strategy.select_variable(&SelectionContext::new(&store));
        assert_eq!(selected, Some(ids[0]));

        let _ = store.assign(ids[0], 3).expect("in domain");
        let selected = strategy.select_variable(&SelectionContext::new(&store));
        assert_eq!(selected, Some(ids[1]));
    }

    #[test]
    fn fixed_variables_are_never_selected() {
        let (store, ids) = store_for_testing(&[(1, 1), (2, 2)]);
        let mut strategy = InputOrder::new(&ids);

        assert_eq!(strategy.select_variable(&SelectionContext::new(&store)), None);
    }
}
