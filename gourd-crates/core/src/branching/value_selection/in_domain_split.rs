use super::ValueSelector;
use crate::branching::Decision;
use crate::branching::SelectionContext;
use crate::gourd_assert_advanced;
use crate::predicate;
use crate::variables::DomainId;

/// Splits the domain in half based on its bounds (disregarding holes) and explores the lower half
/// first.
///
/// Note that this strategy will not necessarily result in an equal split if there are holes in the
/// domain.
#[derive(Debug, Copy, Clone, Default)]
pub struct InDomainSplit;

impl ValueSelector for InDomainSplit {
    fn select_value(
        &mut self,
        context: &SelectionContext<'_>,
        decision_variable: DomainId,
    ) -> Decision {
        let lower_bound = context.lower_bound(decision_variable);
        let upper_bound = context.upper_bound(decision_variable);

        // The variable is not fixed, so the bound is strictly below the upper bound.
        let bound = (lower_bound as i64 + (upper_bound as i64 - lower_bound as i64) / 2) as i32;
        gourd_assert_advanced!(
            bound >= lower_bound && bound < upper_bound,
            "It should hold that {lower_bound} <= {bound} < {upper_bound}"
        );

        Decision::binary(predicate!(decision_variable <= bound))
    }
}
