use super::SearchMonitor;

/// A [`SearchMonitor`] which never stops the search.
#[derive(Clone, Copy, Debug, Default)]
pub struct Indefinite;

impl SearchMonitor for Indefinite {}
