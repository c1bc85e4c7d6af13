//! Utilities to implement the different futures of this crate.

mod pin;
mod poll_state;

pub(crate) use pin::{iter_pin_mut, iter_pin_mut_vec};
pub(crate) use poll_state::{PollArray, PollVec};

#[cfg(test)]
mod wakers;

#[cfg(test)]
pub(crate) use wakers::DummyWaker;
