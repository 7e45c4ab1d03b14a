use super::ValueSelector;
use crate::branching::Decision;
use crate::branching::SelectionContext;
use crate::predicate;
use crate::variables::DomainId;

/// Assigns the upper bound of the domain first, and excludes it on backtrack.
#[derive(Debug, Copy, Clone, Default)]
pub struct InDomainMax;

impl ValueSelector for InDomainMax {
    fn select_value(
        &mut self,
        context: &SelectionContext<'_>,
        decision_variable: DomainId,
    ) -> Decision {
        Decision::binary(predicate!(
            decision_variable == context.upper_bound(decision_variable)
        ))
    }
}
