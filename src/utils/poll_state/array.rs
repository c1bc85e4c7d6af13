use std::ops::{Deref, DerefMut};

use super::PollState;

/// Poll states for a fixed-size set of futures, one entry per future.
pub(crate) struct PollArray<const N: usize> {
    states: [PollState; N],
}

impl<const N: usize> PollArray<N> {
    /// Create a new `PollArray` with all entries marked as `Pending`.
    pub(crate) fn new_pending() -> Self {
        Self {
            states: [PollState::Pending; N],
        }
    }
}

impl<const N: usize> Deref for PollArray<N> {
    type Target = [PollState];

    fn deref(&self) -> &Self::Target {
        &self.states
    }
}

impl<const N: usize> DerefMut for PollArray<N> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.states
    }
}
