//! Raw element storage.
//!
//! Storage is split into two concerns: acquiring and releasing blocks of
//! uninitialized slots through a memory provider, and constructing or
//! destroying values within those slots.

mod block;
pub(crate) mod guard;
mod lifecycle;
pub(crate) mod utils;

pub use self::block::{acquire, release, RawBlock};

pub(crate) use self::guard::{Constructor, TailShift};
