mod dummy;

pub(crate) use dummy::DummyWaker;
