//! A growable contiguous vector, generic over its memory provider and its
//! growth policy.
//!
//! Storage is acquired from an [`Allocator`] in blocks of element slots.
//! Values are constructed and destroyed within those slots separately from
//! the acquisition and release of the blocks themselves.
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(test)]
#[macro_use]
extern crate std;

#[cfg(feature = "alloc")]
extern crate alloc as alloc_crate;

pub mod alloc;

pub(crate) mod error;

pub mod grow;

pub mod storage;

pub mod vec;

pub use self::{
    alloc::{AllocError, Allocator, Global},
    error::{StorageError, UpdateError},
    grow::{Grow, GrowDoubling, GrowExact},
    vec::Vector,
};
