//! Tie-breakers decide which variable to select when several variables are equally good
//! according to a [`VariableSelector`](crate::branching::variable_selection::VariableSelector).
mod in_order_tie_breaker;

pub use in_order_tie_breaker::InOrderTieBreaker;

/// Whether the tie-breaker looks for the variable with the largest or the smallest value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Maximum,
    Minimum,
}

/// Considers `(variable, value)` pairs one at a time and selects a single variable among them.
pub trait TieBreaker<Var, Value> {
    fn consider(&mut self, variable: Var, value: Value);

    /// Returns the selected variable and resets the tie-breaker.
    fn select(&mut self) -> Option<Var>;

    fn get_direction(&self) -> Direction;
}
