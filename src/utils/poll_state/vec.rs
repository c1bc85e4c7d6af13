use std::ops::{Deref, DerefMut};

use super::PollState;

/// Poll states for a dynamically-sized set of futures, one entry per future.
pub(crate) struct PollVec {
    states: Box<[PollState]>,
}

impl PollVec {
    /// Create a new `PollVec` with all entries marked as `Pending`.
    pub(crate) fn new(len: usize) -> Self {
        Self {
            states: std::vec![PollState::Pending; len].into_boxed_slice(),
        }
    }
}

impl Deref for PollVec {
    type Target = [PollState];

    fn deref(&self) -> &Self::Target {
        &self.states
    }
}

impl DerefMut for PollVec {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.states
    }
}
