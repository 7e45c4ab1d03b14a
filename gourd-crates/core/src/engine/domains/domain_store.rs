use std::vec::Drain;

use log::trace;

use super::EmptyDomain;
use super::IntegerDomain;
use crate::basic_types::Checkpoint;
use crate::basic_types::Trail;
use crate::containers::KeyedVec;
use crate::engine::variables::DomainId;
use crate::gourd_assert_simple;
use crate::predicates::Predicate;

/// Owns the current domain of every variable together with the trail which allows restoring
/// earlier domain states.
///
/// Domains are only narrowed through the operations of this store, and each narrowing records the
/// previous domain on the trail before the domain is overwritten.
#[derive(Clone, Debug)]
pub(crate) struct DomainStore {
    domains: KeyedVec<DomainId, IntegerDomain>,
    names: KeyedVec<DomainId, Option<Box<str>>>,
    trail: Trail<DomainChange>,
    /// Variables narrowed since the events were last drained.
    events: Vec<DomainId>,
    sparse_domain_limit: usize,
}

#[derive(Clone, Debug)]
struct DomainChange {
    domain_id: DomainId,
    previous: IntegerDomain,
}

impl DomainStore {
    pub(crate) fn new(sparse_domain_limit: usize) -> Self {
        DomainStore {
            domains: KeyedVec::default(),
            names: KeyedVec::default(),
            trail: Trail::default(),
            events: Vec::default(),
            sparse_domain_limit,
        }
    }

    pub(crate) fn grow(&mut self, domain: IntegerDomain, name: Option<&str>) -> DomainId {
        gourd_assert_simple!(
            self.trail.get_checkpoint().level() == 0,
            "variables can only be created at the root"
        );

        let _ = self.names.push(name.map(Into::into));
        self.domains.push(domain)
    }

    pub(crate) fn num_domains(&self) -> usize {
        self.domains.len()
    }

    pub(crate) fn domain_ids(&self) -> impl Iterator<Item = DomainId> {
        self.domains.keys()
    }

    pub(crate) fn contains_domain(&self, domain_id: DomainId) -> bool {
        self.domains.contains_key(domain_id)
    }

    pub(crate) fn name(&self, domain_id: DomainId) -> Option<&str> {
        self.names.get(domain_id).and_then(|name| name.as_deref())
    }

    pub(crate) fn lower_bound(&self, domain_id: DomainId) -> i32 {
        self.domains[domain_id].lower_bound()
    }

    pub(crate) fn upper_bound(&self, domain_id: DomainId) -> i32 {
        self.domains[domain_id].upper_bound()
    }

    pub(crate) fn contains(&self, domain_id: DomainId, value: i32) -> bool {
        self.domains[domain_id].contains(value)
    }

    pub(crate) fn size(&self, domain_id: DomainId) -> usize {
        self.domains[domain_id].size()
    }

    pub(crate) fn is_fixed(&self, domain_id: DomainId) -> bool {
        self.domains[domain_id].is_fixed()
    }

    /// The value of `domain_id` if its domain is a singleton.
    pub(crate) fn fixed_value(&self, domain_id: DomainId) -> Option<i32> {
        let domain = &self.domains[domain_id];
        domain.is_fixed().then(|| domain.lower_bound())
    }

    /// The values in the domain of `domain_id` in increasing order.
    pub(crate) fn iterate_domain(&self, domain_id: DomainId) -> impl Iterator<Item = i32> + '_ {
        self.domains[domain_id].iter()
    }

    pub(crate) fn is_predicate_satisfied(&self, predicate: Predicate) -> bool {
        let domain = &self.domains[predicate.get_domain()];
        match predicate {
            Predicate::LowerBound { lower_bound, .. } => domain.lower_bound() >= lower_bound,
            Predicate::UpperBound { upper_bound, .. } => domain.upper_bound() <= upper_bound,
            Predicate::NotEqual {
                not_equal_constant, ..
            } => !domain.contains(not_equal_constant),
            Predicate::Equal {
                equality_constant, ..
            } => domain.is_fixed() && domain.lower_bound() == equality_constant,
        }
    }

    pub(crate) fn all_fixed(&self) -> bool {
        self.domains.iter().all(IntegerDomain::is_fixed)
    }

    /// Returns the variable with the lowest id which is not yet fixed.
    pub(crate) fn first_unfixed(&self) -> Option<DomainId> {
        self.domain_ids().find(|&domain_id| !self.is_fixed(domain_id))
    }

    /// Narrows the domain of `domain_id` to `value`; returns whether the domain changed.
    pub(crate) fn assign(&mut self, domain_id: DomainId, value: i32) -> Result<bool, EmptyDomain> {
        let narrowed = self.domains[domain_id].assign(value)?;
        Ok(self.update(domain_id, narrowed))
    }

    pub(crate) fn remove_value(
        &mut self,
        domain_id: DomainId,
        value: i32,
    ) -> Result<bool, EmptyDomain> {
        let narrowed = self.domains[domain_id].remove_value(value, self.sparse_domain_limit)?;
        Ok(self.update(domain_id, narrowed))
    }

    pub(crate) fn restrict_min(
        &mut self,
        domain_id: DomainId,
        bound: i32,
    ) -> Result<bool, EmptyDomain> {
        let narrowed = self.domains[domain_id].restrict_min(bound)?;
        Ok(self.update(domain_id, narrowed))
    }

    pub(crate) fn restrict_max(
        &mut self,
        domain_id: DomainId,
        bound: i32,
    ) -> Result<bool, EmptyDomain> {
        let narrowed = self.domains[domain_id].restrict_max(bound)?;
        Ok(self.update(domain_id, narrowed))
    }

    /// Makes `predicate` true by narrowing the domain of its variable.
    pub(crate) fn apply(&mut self, predicate: Predicate) -> Result<bool, EmptyDomain> {
        match predicate {
            Predicate::LowerBound {
                domain_id,
                lower_bound,
            } => self.restrict_min(domain_id, lower_bound),
            Predicate::UpperBound {
                domain_id,
                upper_bound,
            } => self.restrict_max(domain_id, upper_bound),
            Predicate::NotEqual {
                domain_id,
                not_equal_constant,
            } => self.remove_value(domain_id, not_equal_constant),
            Predicate::Equal {
                domain_id,
                equality_constant,
            } => self.assign(domain_id, equality_constant),
        }
    }

    fn update(&mut self, domain_id: DomainId, narrowed: Option<IntegerDomain>) -> bool {
        let Some(narrowed) = narrowed else {
            return false;
        };

        let previous = std::mem::replace(&mut self.domains[domain_id], narrowed);
        self.trail.push(DomainChange {
            domain_id,
            previous,
        });
        self.events.push(domain_id);

        true
    }

    /// Opens a new checkpoint and returns the token which restores the current state.
    pub(crate) fn new_checkpoint(&mut self) -> Checkpoint {
        self.trail.new_checkpoint()
    }

    pub(crate) fn get_checkpoint(&self) -> Checkpoint {
        self.trail.get_checkpoint()
    }

    /// Restores every domain to its state at the moment `checkpoint` was taken; pending events
    /// are discarded.
    pub(crate) fn synchronise(&mut self, checkpoint: Checkpoint) {
        let mut num_undone = 0_usize;
        for DomainChange {
            domain_id,
            previous,
        } in self.trail.synchronise(checkpoint)
        {
            self.domains[domain_id] = previous;
            num_undone += 1;
        }
        self.events.clear();

        trace!(
            "restored checkpoint {} ({num_undone} changes undone)",
            checkpoint.level()
        );
    }

    /// Narrows the domain of `domain_id` to the given values; returns whether the domain changed.
    pub(crate) fn retain_values(
        &mut self,
        domain_id: DomainId,
        values: impl IntoIterator<Item = i32>,
    ) -> Result<bool, EmptyDomain> {
        let mut values = values.into_iter().collect::<Vec<_>>();
        values.sort_unstable();
        values.dedup();

        let narrowed = self.domains[domain_id].retain_values(&values)?;
        Ok(self.update(domain_id, narrowed))
    }

    pub(crate) fn drain_events(&mut self) -> Drain<'_, DomainId> {
        self.events.drain(..)
    }

    #[cfg(test)]
    pub(crate) fn num_trail_entries(&self) -> usize {
        self.trail.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predicate;

    fn store_with_two_variables() -> (DomainStore, DomainId, DomainId) {
        let mut store = DomainStore::new(64);
        let x = store.grow(IntegerDomain::interval(0, 5).expect("non-empty"), Some("x"));
        let y = store.grow(IntegerDomain::sparse([1, 3, 7]).expect("non-empty"), None);
        (store, x, y)
    }

    fn snapshot(store: &DomainStore) -> Vec<Vec<i32>> {
        store
            .domain_ids()
            .map(|domain_id| store.iterate_domain(domain_id).collect())
            .collect()
    }

    #[test]
    fn narrowing_is_observed_through_queries() {
        let (mut store, x, y) = store_with_two_variables();

        assert_eq!(store.restrict_min(x, 2), Ok(true));
        assert_eq!(store.remove_value(x, 4), Ok(true));
        assert_eq!(store.restrict_max(y, 5), Ok(true));

        assert_eq!(store.iterate_domain(x).collect::<Vec<_>>(), vec![2, 3, 5]);
        assert_eq!(store.size(y), 2);
        assert_eq!(store.upper_bound(y), 3);
        assert!(!store.is_fixed(y));
        assert_eq!(store.name(x), Some("x"));
        assert_eq!(store.name(y), None);
    }

    #[test]
    fn narrowing_without_effect_is_not_recorded() {
        let (mut store, x, _) = store_with_two_variables();

        assert_eq!(store.restrict_min(x, -3), Ok(false));
        assert_eq!(store.remove_value(x, 9), Ok(false));
        assert_eq!(store.num_trail_entries(), 0);
        assert_eq!(store.drain_events().count(), 0);
    }

    #[test]
    fn failed_narrowing_leaves_the_domain_unchanged() {
        let (mut store, x, y) = store_with_two_variables();

        assert_eq!(store.assign(y, 2), Err(EmptyDomain));
        assert_eq!(store.restrict_min(x, 6), Err(EmptyDomain));

        assert_eq!(store.iterate_domain(y).collect::<Vec<_>>(), vec![1, 3, 7]);
        assert_eq!(store.lower_bound(x), 0);
    }

    #[test]
    fn synchronising_restores_the_domains_at_the_checkpoint() {
        let (mut store, x, y) = store_with_two_variables();
        let _ = store.restrict_max(x, 4).expect("non-empty");
        let before = snapshot(&store);

        let checkpoint = store.new_checkpoint();
        let _ = store.assign(x, 3).expect("non-empty");
        let _ = store.new_checkpoint();
        let _ = store.remove_value(y, 3).expect("non-empty");
        let _ = store.apply(predicate!(y >= 5)).expect("non-empty");
        assert_eq!(store.fixed_value(y), Some(7));

        store.synchronise(checkpoint);

        assert_eq!(snapshot(&store), before);
        assert_eq!(store.get_checkpoint(), checkpoint);
        assert_eq!(store.num_trail_entries(), 1);
        assert_eq!(store.drain_events().count(), 0);
    }

    #[test]
    fn predicates_are_evaluated_against_the_current_domains() {
        let (mut store, x, y) = store_with_two_variables();
        let _ = store.apply(predicate!(x == 2)).expect("non-empty");

        assert!(store.is_predicate_satisfied(predicate!(x == 2)));
        assert!(store.is_predicate_satisfied(predicate!(x <= 3)));
        assert!(store.is_predicate_satisfied(predicate!(y != 2)));
        assert!(!store.is_predicate_satisfied(predicate!(y >= 3)));
        assert_eq!(store.first_unfixed(), Some(y));
    }

    #[test]
    fn holes_in_wide_intervals_are_undone_on_backtrack() {
        let mut store = DomainStore::new(64);
        let x = store.grow(IntegerDomain::interval(0, 1000).expect("non-empty"), None);

        let checkpoint = store.new_checkpoint();
        assert_eq!(store.remove_value(x, 500), Ok(true));
        assert_eq!(store.remove_value(x, 501), Ok(true));
        assert!(!store.contains(x, 500));
        assert_eq!(store.size(x), 999);
        assert!(store.is_predicate_satisfied(predicate!(x != 501)));

        store.synchronise(checkpoint);

        assert!(store.contains(x, 500) && store.contains(x, 501));
        assert_eq!(store.size(x), 1001);
        assert_eq!(store.iterate_domain(x).count(), 1001);
    }
}
