/// The order in which enqueued propagators are run; propagators with a higher priority are run
/// first, propagators with the same priority in the order in which they were enqueued.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Priority {
    High = 0,
    #[default]
    Medium = 1,
    Low = 2,
}

impl Priority {
    pub(crate) const NUM_LEVELS: usize = 3;

    pub(crate) fn level(self) -> usize {
        self as usize
    }
}
