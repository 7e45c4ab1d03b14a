use super::ValueSelector;
use crate::branching::Decision;
use crate::branching::SelectionContext;
use crate::predicate;
use crate::variables::DomainId;

/// Assigns the lower bound of the domain first, and excludes it on backtrack.
#[derive(Debug, Copy, Clone, Default)]
pub struct InDomainMin;

impl ValueSelector for InDomainMin {
    fn select_value(
        &mut self,
        context: &SelectionContext<'_>,
        decision_variable: DomainId,
    ) -> Decision {
        Decision::binary(predicate!(
            decision_variable == context.lower_bound(decision_variable)
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::branching::selection_context::tests::store_for_testing;

    #[test]
    fn the_lower_bound_is_tried_first() {
        let (store, ids) = store_for_testing(&[(3, 9)]);

        let decision = InDomainMin.select_value(&SelectionContext::new(&store), ids[0]);

        assert_eq!(decision, Decision::binary(predicate!(ids[0] == 3)));
    }
}
