use crate::containers::HashSet;
use crate::variables::DomainId;

/// The variables which are relaxed in one iteration of the large neighbourhood search. Every
/// other variable is fixed to its value in the incumbent.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Fragment {
    relaxed: HashSet<DomainId>,
}

impl Fragment {
    pub fn new(relaxed: impl IntoIterator<Item = DomainId>) -> Self {
        Fragment {
            relaxed: relaxed.into_iter().collect(),
        }
    }

    pub fn contains(&self, domain_id: DomainId) -> bool {
        self.relaxed.contains(&domain_id)
    }

    pub fn len(&self) -> usize {
        self.relaxed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.relaxed.is_empty()
    }

    /// Whether every variable of `universe` is relaxed.
    pub fn covers(&self, universe: &[DomainId]) -> bool {
        universe.iter().all(|&domain_id| self.contains(domain_id))
    }
}

impl FromIterator<DomainId> for Fragment {
    fn from_iter<T: IntoIterator<Item = DomainId>>(iter: T) -> Self {
        Fragment::new(iter)
    }
}
