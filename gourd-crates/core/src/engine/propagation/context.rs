use crate::engine::DomainStore;
use crate::engine::EmptyDomain;
use crate::predicates::Predicate;
use crate::variables::DomainId;

/// The only point of communication between a propagator and the [`DomainStore`] during
/// propagation.
///
/// It exposes the read-only domain queries and the narrowing operations, and keeps track of
/// whether the propagator narrowed any domain or ran into an empty one.
#[derive(Debug)]
pub struct PropagationContextMut<'a> {
    store: &'a mut DomainStore,
    narrowed: bool,
    failed: bool,
}

impl<'a> PropagationContextMut<'a> {
    pub(crate) fn new(store: &'a mut DomainStore) -> Self {
        PropagationContextMut {
            store,
            narrowed: false,
            failed: false,
        }
    }

    pub(crate) fn has_narrowed(&self) -> bool {
        self.narrowed
    }

    pub(crate) fn has_failed(&self) -> bool {
        self.failed
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

    pub fn size(&self, domain_id: DomainId) -> usize {
        self.store.size(domain_id)
    }

    pub fn is_fixed(&self, domain_id: DomainId) -> bool {
        self.store.is_fixed(domain_id)
    }

    pub fn fixed_value(&self, domain_id: DomainId) -> Option<i32> {
        self.store.fixed_value(domain_id)
    }

    pub fn iterate_domain(&self, domain_id: DomainId) -> impl Iterator<Item = i32> + '_ {
        self.store.iterate_domain(domain_id)
    }

    pub fn assign(&mut self, domain_id: DomainId, value: i32) -> Result<bool, EmptyDomain> {
        let result = self.store.assign(domain_id, value);
        self.record(result)
    }

    pub fn remove_value(&mut self, domain_id: DomainId, value: i32) -> Result<bool, EmptyDomain> {
        let result = self.store.remove_value(domain_id, value);
        self.record(result)
    }

    pub fn restrict_min(&mut self, domain_id: DomainId, bound: i32) -> Result<bool, EmptyDomain> {
        let result = self.store.restrict_min(domain_id, bound);
        self.record(result)
    }

    pub fn restrict_max(&mut self, domain_id: DomainId, bound: i32) -> Result<bool, EmptyDomain> {
        let result = self.store.restrict_max(domain_id, bound);
        self.record(result)
    }

    /// Removes every value of the domain which is not in `values`. The work is proportional to
    /// the number of `values` rather than to the size of the domain.
    pub fn retain_values(
        &mut self,
        domain_id: DomainId,
        values: impl IntoIterator<Item = i32>,
    ) -> Result<bool, EmptyDomain> {
        let result = self.store.retain_values(domain_id, values);
        self.record(result)
    }

    pub fn post(&mut self, predicate: Predicate) -> Result<bool, EmptyDomain> {
        let result = self.store.apply(predicate);
        self.record(result)
    }

    fn record(&mut self, result: Result<bool, EmptyDomain>) -> Result<bool, EmptyDomain> {
        match result {
            Ok(changed) => self.narrowed |= changed,
            Err(EmptyDomain) => self.failed = true,
        }
        result
    }
}
