use crate::branching::branchers::IndependentVariableValueBrancher;
use crate::branching::value_selection::InDomainMax;
use crate::branching::value_selection::InDomainMin;
use crate::branching::value_selection::InDomainSplit;
use crate::branching::value_selection::ValueSelector;
use crate::branching::variable_selection::AntiFirstFail;
use crate::branching::variable_selection::FirstFail;
use crate::branching::variable_selection::InputOrder;
use crate::branching::variable_selection::VariableSelector;
use crate::variables::DomainId;

/// The variable order of a [`phase`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum VariableSelectionStrategy {
    /// The first unfixed variable in the provided order.
    #[default]
    FirstUnbound,
    /// The unfixed variable with the smallest domain.
    MinSize,
    /// The unfixed variable with the largest domain.
    MaxSize,
}

/// The value order of a [`phase`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum ValueSelectionStrategy {
    /// Assign the smallest value, or exclude it.
    #[default]
    AssignMin,
    /// Assign the largest value, or exclude it.
    AssignMax,
    /// Keep the lower half of the domain, or the upper half.
    SplitLowerHalf,
}

/// A brancher built by [`phase`].
pub type PhaseBrancher =
    IndependentVariableValueBrancher<Box<dyn VariableSelector>, Box<dyn ValueSelector>>;

/// Creates a brancher over `variables` from a variable and a value selection strategy.
pub fn phase(
    variables: &[DomainId],
    variable_strategy: VariableSelectionStrategy,
    value_strategy: ValueSelectionStrategy,
) -> PhaseBrancher {
    let variable_selector: Box<dyn VariableSelector> = match variable_strategy {
        VariableSelectionStrategy::FirstUnbound => Box::new(InputOrder::new(variables)),
        VariableSelectionStrategy::MinSize => Box::new(FirstFail::new(variables)),
        VariableSelectionStrategy::MaxSize => Box::new(AntiFirstFail::new(variables)),
    };

    let value_selector: Box<dyn ValueSelector> = match value_strategy {
        ValueSelectionStrategy::AssignMin => Box::new(InDomainMin),
        ValueSelectionStrategy::AssignMax => Box::new(InDomainMax),
        ValueSelectionStrategy::SplitLowerHalf => Box::new(InDomainSplit),
    };

    IndependentVariableValueBrancher::new(variable_selector, value_selector)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::branching::selection_context::tests::store_for_testing;
    use crate::branching::Brancher;
    use crate::branching::Decision;
    use crate::branching::SelectionContext;
    use crate::predicate;

    #[test]
    fn strategies_are_combined() {
        let (store, ids) = store_for_testing(&[(0, 9), (0, 1), (0, 20)]);
        let context = SelectionContext::new(&store);

        let mut smallest_split = phase(
            &ids,
            VariableSelectionStrategy::MinSize,
            ValueSelectionStrategy::SplitLowerHalf,
        );
        let mut largest_max = phase(
            &ids,
            VariableSelectionStrategy::MaxSize,
            ValueSelectionStrategy::AssignMax,
        );

        assert_eq!(
            smallest_split.next_decision(&context),
            Some(Decision::binary(predicate!(ids[1] <= 0)))
        );
        assert_eq!(
            largest_max.next_decision(&context),
            Some(Decision::binary(predicate!(ids[2] == 20)))
        );
    }
}
