use std::sync::Arc;
use std::task::Wake;

/// A waker which does nothing, for tests which poll futures by hand.
pub(crate) struct DummyWaker();

impl Wake for DummyWaker {
    fn wake(self: Arc<Self>) {}
}
