//! The depth-first search over the domains, driven as an explicit state machine.
mod choice_point;
mod search_state;
mod tree_search;

pub(crate) use choice_point::ChoicePoint;
pub(crate) use search_state::SearchState;
pub(crate) use tree_search::TreeSearch;
