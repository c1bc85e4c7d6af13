/// Enumerate the current poll state of a single tracked future.
#[derive(Debug, Clone, Copy, Default)]
#[repr(u8)]
pub(crate) enum PollState {
    /// Polling the associated future.
    #[default]
    Pending,
    /// The associated future has settled; its slot holds the outcome.
    Settled,
    /// The underlying future has settled and its outcome has been read.
    Consumed,
}

impl PollState {
    /// Returns `true` if the poll state is [`Pending`][Self::Pending].
    #[must_use]
    #[inline]
    pub(crate) fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    /// Returns `true` if the poll state is [`Settled`][Self::Settled].
    #[must_use]
    #[inline]
    pub(crate) fn is_settled(&self) -> bool {
        matches!(self, Self::Settled)
    }

    /// Returns `true` if the poll state is [`Consumed`][Self::Consumed].
    #[must_use]
    #[inline]
    #[allow(unused)]
    pub(crate) fn is_consumed(&self) -> bool {
        matches!(self, Self::Consumed)
    }

    /// Sets the poll state to [`Settled`][Self::Settled].
    #[inline]
    pub(crate) fn set_settled(&mut self) {
        *self = PollState::Settled;
    }

    /// Sets the poll state to [`Consumed`][Self::Consumed].
    #[inline]
    pub(crate) fn set_consumed(&mut self) {
        *self = PollState::Consumed;
    }
}
