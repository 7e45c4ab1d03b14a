//! Provides the [`ValueSelector`] trait which is required for value selectors to implement; the
//! main method in this trait is [`ValueSelector::select_value`] which turns a selected variable
//! into a [`Decision`].
mod in_domain_max;
mod in_domain_min;
mod in_domain_split;

pub use in_domain_max::InDomainMax;
pub use in_domain_min::InDomainMin;
pub use in_domain_split::InDomainSplit;

use crate::branching::Decision;
use crate::branching::SelectionContext;
use crate::variables::DomainId;

/// Creates the [`Decision`] for a variable which is not fixed.
pub trait ValueSelector {
    fn select_value(&mut self, context: &SelectionContext<'_>, decision_variable: DomainId)
        -> Decision;
}

impl<S: ValueSelector + ?Sized> ValueSelector for Box<S> {
    fn select_value(
        &mut self,
        context: &SelectionContext<'_>,
        decision_variable: DomainId,
    ) -> Decision {
        (**self).select_value(context, decision_variable)
    }
}
