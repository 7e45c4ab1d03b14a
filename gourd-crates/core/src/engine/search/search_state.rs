use crate::results::SearchTermination;

/// The states of the search; see [`TreeSearch`](super::TreeSearch) for the transitions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum SearchState {
    Root,
    Propagating,
    Branching,
    Backtracking,
    SolutionFound,
    Exhausted,
    TimedOut,
    Stopped,
}

impl SearchState {
    pub(crate) fn termination(self) -> Option<SearchTermination> {
        match self {
            SearchState::Exhausted => Some(SearchTermination::Exhausted),
            SearchState::TimedOut => Some(SearchTermination::TimedOut),
            SearchState::Stopped => Some(SearchTermination::Stopped),
            SearchState::Root
            | SearchState::Propagating
            | SearchState::Branching
            | SearchState::Backtracking
            | SearchState::SolutionFound => None,
        }
    }

    pub(crate) fn is_terminal(self) -> bool {
        self.termination().is_some()
    }
}
