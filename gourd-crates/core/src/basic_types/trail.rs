use std::iter::Rev;
use std::ops::Deref;
use std::vec::Drain;

use crate::gourd_assert_simple;

/// A token identifying a point on the [`Trail`] which can be restored to.
///
/// A checkpoint is the number of checkpoints which were open at the moment it was taken.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub(crate) struct Checkpoint(usize);

impl Checkpoint {
    pub(crate) fn level(self) -> usize {
        self.0
    }
}

/// Append-only log of entries grouped by checkpoint.
#[derive(Clone, Debug)]
pub(crate) struct Trail<T> {
    current_checkpoint: usize,
    /// At index i is the position where the i-th checkpoint starts on the trail.
    trail_delimiter: Vec<usize>,
    trail: Vec<T>,
}

// Implemented by hand to avoid requiring `T: Default`.
impl<T> Default for Trail<T> {
    fn default() -> Self {
        Trail {
            current_checkpoint: 0,
            trail_delimiter: Vec::default(),
            trail: Vec::default(),
        }
    }
}

impl<T> Trail<T> {
    /// Opens a new checkpoint and returns the token which restores the trail to the state before
    /// it was opened.
    pub(crate) fn new_checkpoint(&mut self) -> Checkpoint {
        let checkpoint = Checkpoint(self.current_checkpoint);

        self.current_checkpoint += 1;
        self.trail_delimiter.push(self.trail.len());

        checkpoint
    }

    pub(crate) fn get_checkpoint(&self) -> Checkpoint {
        Checkpoint(self.current_checkpoint)
    }

    /// Removes all entries pushed after `checkpoint` was taken and returns them, the most recent
    /// entry first.
    pub(crate) fn synchronise(&mut self, checkpoint: Checkpoint) -> Rev<Drain<'_, T>> {
        gourd_assert_simple!(
            checkpoint.0 <= self.current_checkpoint,
            "cannot synchronise to checkpoint {} from checkpoint {}",
            checkpoint.0,
            self.current_checkpoint
        );

        let new_trail_len = if checkpoint.0 == self.current_checkpoint {
            self.trail.len()
        } else {
            self.trail_delimiter[checkpoint.0]
        };

        self.current_checkpoint = checkpoint.0;
        self.trail_delimiter.truncate(checkpoint.0);
        self.trail.drain(new_trail_len..).rev()
    }

    pub(crate) fn push(&mut self, elem: T) {
        self.trail.push(elem)
    }
}

impl<T> Deref for Trail<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        &self.trail
    }
}
