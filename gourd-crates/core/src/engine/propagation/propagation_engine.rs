use log::trace;
use log::warn;

use super::Priority;
use super::PropagationContextMut;
use super::Propagator;
use super::PropagatorId;
use super::PropagatorQueue;
use crate::basic_types::ConstraintOperationError;
use crate::basic_types::Inconsistency;
use crate::basic_types::Narrowing;
use crate::constraints::Constraint;
use crate::containers::KeyedVec;
use crate::engine::DomainStore;
use crate::variables::DomainId;

/// Owns the posted constraints and drives them to a fixpoint against the [`DomainStore`].
#[derive(Debug, Default)]
pub(crate) struct PropagationEngine {
    propagators: KeyedVec<PropagatorId, Constraint>,
    priorities: KeyedVec<PropagatorId, Priority>,
    /// For every variable, the propagators which have it in their scope.
    watch_lists: KeyedVec<DomainId, Vec<PropagatorId>>,
    queue: PropagatorQueue,
    num_propagations: u64,
}

impl PropagationEngine {
    /// Registers `constraint` and enqueues it. The constraint is rejected when its scope refers
    /// to a variable which is not in `store`.
    pub(crate) fn add(
        &mut self,
        constraint: Constraint,
        store: &DomainStore,
    ) -> Result<PropagatorId, ConstraintOperationError> {
        let mut scope = constraint.scope();
        if let Some(&unknown) = scope
            .iter()
            .find(|&&domain_id| !store.contains_domain(domain_id))
        {
            return Err(ConstraintOperationError::UnknownVariable(unknown));
        }
        scope.sort_unstable();
        scope.dedup();

        let priority = constraint.priority();
        let propagator_id = self.propagators.push(constraint);
        let _ = self.priorities.push(priority);

        for domain_id in scope {
            self.watch_lists.accomodate(domain_id, Vec::new());
            self.watch_lists[domain_id].push(propagator_id);
        }

        self.queue.enqueue_propagator(propagator_id, priority);

        Ok(propagator_id)
    }

    pub(crate) fn num_propagators(&self) -> usize {
        self.propagators.len()
    }

    pub(crate) fn num_propagations(&self) -> u64 {
        self.num_propagations
    }

    #[cfg(test)]
    pub(crate) fn enqueue_all(&mut self) {
        for propagator_id in self.propagators.keys() {
            self.queue
                .enqueue_propagator(propagator_id, self.priorities[propagator_id]);
        }
    }

    /// Runs the enqueued propagators, and the propagators watching any variable they narrow,
    /// until nothing is left to run or a propagator fails.
    ///
    /// On failure the queue and the pending events of the store are discarded.
    pub(crate) fn propagate(&mut self, store: &mut DomainStore) -> Result<(), Inconsistency> {
        loop {
            for domain_id in store.drain_events() {
                if let Some(watchers) = self.watch_lists.get(domain_id) {
                    for &propagator_id in watchers {
                        self.queue
                            .enqueue_propagator(propagator_id, self.priorities[propagator_id]);
                    }
                }
            }

            let Some(propagator_id) = self.queue.pop() else {
                return Ok(());
            };

            self.num_propagations += 1;

            let propagator = &mut self.propagators[propagator_id];
            let mut context = PropagationContextMut::new(store);
            let status = propagator.propagate(&mut context);

            let status = match status {
                Ok(_) if context.has_failed() => {
                    warn!(
                        "{} ignored an empty domain; treating it as a failure",
                        propagator.name()
                    );
                    Err(Inconsistency::EmptyDomain)
                }
                Ok(Narrowing::Unchanged) if context.has_narrowed() => {
                    warn!(
                        "{} narrowed a domain but reported no change",
                        propagator.name()
                    );
                    Ok(())
                }
                Ok(_) => Ok(()),
                Err(inconsistency) => Err(inconsistency),
            };

            if let Err(inconsistency) = status {
                trace!("{} failed with {inconsistency:?}", propagator.name());
                self.queue.clear();
                let _ = store.drain_events().count();
                return Err(inconsistency);
            }
        }
    }
}
