#[cfg(doc)]
use crate::branching::Brancher;
use crate::engine::DomainStore;
use crate::variables::DomainId;

/// The read-only view on the domains which is provided to a [`Brancher`].
#[derive(Clone, Copy, Debug)]
pub struct SelectionContext<'a> {
    store: &'a DomainStore,
}

impl<'a> SelectionContext<'a> {
    pub(crate) fn new(store: &'a DomainStore) -> Self {
        SelectionContext { store }
    }

    pub fn lower_bound(&self, domain_id: DomainId) -> i32 {
        self.store.lower_bound(domain_id)
    }

    pub fn upper_bound(&self, domain_id: DomainId) -> i32 {
        self.store.upper_bound(domain_id)
    }

    pub fn contains(&self, domain_id: DomainId, value: i32) -> bool {
        self.store.contains(domain_id, value)
    }

    /// The number of values in the domain of `domain_id`.
    pub fn get_size_of_domain(&self, domain_id: DomainId) -> usize {
        self.store.size(domain_id)
    }

    pub fn is_integer_fixed(&self, domain_id: DomainId) -> bool {
        self.store.is_fixed(domain_id)
    }

    pub fn fixed_value(&self, domain_id: DomainId) -> Option<i32> {
        self.store.fixed_value(domain_id)
    }

    /// The values in the domain of `domain_id` in increasing order.
    pub fn iterate_domain(&self, domain_id: DomainId) -> impl Iterator<Item = i32> + 'a {
        self.store.iterate_domain(domain_id)
    }

    /// All variables of the model, in declaration order.
    pub fn domain_ids(&self) -> impl Iterator<Item = DomainId> + 'a {
        self.store.domain_ids()
    }
}
