//! A [`Brancher`] which simply uses a single [`VariableSelector`] and a single [`ValueSelector`].

use crate::branching::value_selection::ValueSelector;
use crate::branching::variable_selection::VariableSelector;
use crate::branching::Brancher;
use crate::branching::Decision;
use crate::branching::SelectionContext;

/// An implementation of a [`Brancher`] which uses a single [`VariableSelector`] and a single
/// [`ValueSelector`] independently of one another.
#[derive(Debug)]
pub struct IndependentVariableValueBrancher<VariableSelect, ValueSelect> {
    /// Determines which (unfixed) variable to branch on next.
    pub(crate) variable_selector: VariableSelect,
    /// Determines the decision for the selected variable.
    pub(crate) value_selector: ValueSelect,
}

impl<VariableSelect, ValueSelect> IndependentVariableValueBrancher<VariableSelect, ValueSelect>
where
    VariableSelect: VariableSelector,
    ValueSelect: ValueSelector,
{
    pub fn new(variable_selector: VariableSelect, value_selector: ValueSelect) -> Self {
        IndependentVariableValueBrancher {
            variable_selector,
            value_selector,
        }
    }
}

impl<VariableSelect, ValueSelect> Brancher
    for IndependentVariableValueBrancher<VariableSelect, ValueSelect>
where
    VariableSelect: VariableSelector,
    ValueSelect: ValueSelector,
{
    fn next_decision(&mut self, context: &SelectionContext<'_>) -> Option<Decision> {
        self.variable_selector
            .select_variable(context)
            .map(|selected_variable| self.value_selector.select_value(context, selected_variable))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::branching::selection_context::tests::store_for_testing;
    use crate::branching::value_selection::InDomainMax;
    use crate::branching::variable_selection::FirstFail;
    use crate::predicate;

    #[test]
    fn the_selected_variable_is_given_the_selected_value() {
        let (store, ids) = store_for_testing(&[(0, 9), (2, 4)]);
        let mut brancher = IndependentVariableValueBrancher::new(FirstFail::new(&ids), InDomainMax);

        let decision = brancher.next_decision(&SelectionContext::new(&store));

        assert_eq!(decision, Some(Decision::binary(predicate!(ids[1] == 4))));
    }
}
