#![allow(clippy::module_inception)]

mod array;
mod poll_state;
mod vec;

pub(crate) use array::PollArray;
pub(crate) use poll_state::PollState;
pub(crate) use vec::PollVec;
