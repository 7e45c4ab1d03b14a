use std::collections::VecDeque;

use super::Priority;
use super::PropagatorId;
use crate::containers::HashSet;
use crate::gourd_assert_moderate;

/// A FIFO queue per [`Priority`]; a propagator is present at most once.
#[derive(Debug)]
pub(crate) struct PropagatorQueue {
    queues: [VecDeque<PropagatorId>; Priority::NUM_LEVELS],
    present_propagators: HashSet<PropagatorId>,
}

impl Default for PropagatorQueue {
    fn default() -> Self {
        PropagatorQueue {
            queues: std::array::from_fn(|_| VecDeque::new()),
            present_propagators: HashSet::default(),
        }
    }
}

impl PropagatorQueue {
    pub(crate) fn is_empty(&self) -> bool {
        self.present_propagators.is_empty()
    }

    pub(crate) fn enqueue_propagator(&mut self, propagator_id: PropagatorId, priority: Priority) {
        if self.present_propagators.insert(propagator_id) {
            self.queues[priority.level()].push_back(propagator_id);
        }
    }

    pub(crate) fn pop(&mut self) -> Option<PropagatorId> {
        let next_propagator_id = self
            .queues
            .iter_mut()
            .find_map(|queue| queue.pop_front())?;

        let was_present = self.present_propagators.remove(&next_propagator_id);
        gourd_assert_moderate!(was_present);

        Some(next_propagator_id)
    }

    pub(crate) fn clear(&mut self) {
        self.queues.iter_mut().for_each(VecDeque::clear);
        self.present_propagators.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn higher_priorities_are_popped_first() {
        let mut queue = PropagatorQueue::default();

        queue.enqueue_propagator(PropagatorId(0), Priority::Low);
        queue.enqueue_propagator(PropagatorId(1), Priority::Medium);
        queue.enqueue_propagator(PropagatorId(2), Priority::High);
        queue.enqueue_propagator(PropagatorId(3), Priority::Medium);

        let order = std::iter::from_fn(|| queue.pop()).collect::<Vec<_>>();
        assert_eq!(
            order,
            vec![
                PropagatorId(2),
                PropagatorId(1),
                PropagatorId(3),
                PropagatorId(0)
            ]
        );
    }

    #[test]
    fn a_propagator_is_enqueued_at_most_once() {
        let mut queue = PropagatorQueue::default();

        queue.enqueue_propagator(PropagatorId(5), Priority::Medium);
        queue.enqueue_propagator(PropagatorId(5), Priority::Medium);

        assert_eq!(queue.pop(), Some(PropagatorId(5)));
        assert!(queue.is_empty());
        assert_eq!(queue.pop(), None);
    }

    #[test]
    fn clearing_empties_every_level() {
        let mut queue = PropagatorQueue::default();
        queue.enqueue_propagator(PropagatorId(0), Priority::High);
        queue.enqueue_propagator(PropagatorId(1), Priority::Low);

        queue.clear();

        assert!(queue.is_empty());
        assert_eq!(queue.pop(), None);
        queue.enqueue_propagator(PropagatorId(0), Priority::Low);
        assert_eq!(queue.pop(), Some(PropagatorId(0)));
    }
}
