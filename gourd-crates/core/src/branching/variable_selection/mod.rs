//! Provides the [`VariableSelector`] trait which is required for variable selectors to implement;
//! the main method in this trait is [`VariableSelector::select_variable`] which selects the
//! variable to branch on next.
mod anti_first_fail;
mod first_fail;
mod input_order;

pub use anti_first_fail::AntiFirstFail;
pub use first_fail::FirstFail;
pub use input_order::InputOrder;

use crate::branching::SelectionContext;
use crate::variables::DomainId;

/// Selects the next variable to branch on, or [`None`] if all variables it considers are fixed.
pub trait VariableSelector {
    fn select_variable(&mut self, context: &SelectionContext<'_>) -> Option<DomainId>;
}

impl<S: VariableSelector + ?Sized> VariableSelector for Box<S> {
    fn select_variable(&mut self, context: &SelectionContext<'_>) -> Option<DomainId> {
        (**self).select_variable(context)
    }
}
