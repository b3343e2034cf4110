//! Moving the contents of a vector into a block of a different capacity.

use core::mem::ManuallyDrop;
use core::ops::{Deref, DerefMut};
use core::ptr::{self, NonNull};

use crate::alloc::Allocator;
use crate::error::StorageError;
use crate::grow::Grow;
use crate::storage::{acquire, release, Constructor};

use super::Vector;

impl<T, A: Allocator, G: Grow> Vector<T, A, G> {
    /// Determine the capacity to grow to when `additional` values must be
    /// added beyond the current length.
    pub(super) fn grown_capacity(&self, additional: usize) -> Result<usize, StorageError> {
        let needed = self
            .len
            .checked_add(additional)
            .ok_or(StorageError::CapacityLimit)?;
        Ok(G::next_capacity(self.block.capacity(), needed).max(needed))
    }

    /// Move every live value into a new block of exactly `capacity` slots,
    /// then release the previous block.
    ///
    /// On failure the vector is left unchanged.
    pub(super) fn try_reallocate(&mut self, capacity: usize) -> Result<(), StorageError> {
        let len = self.len;
        if capacity < len {
            return Err(StorageError::LengthError {
                requested: capacity,
                length: len,
            });
        }
        if capacity == self.block.capacity() {
            return Ok(());
        }
        let data = acquire::<T, A>(self.block.allocator(), capacity)?;
        unsafe {
            ptr::copy_nonoverlapping(self.block.as_ptr(), data.as_ptr(), len);
            self.block.adopt(data, capacity);
        }
        Ok(())
    }

    /// Acquire a new block of `capacity` slots in which `count` new values
    /// will be constructed starting from `index`.
    ///
    /// Nothing in the vector changes until the returned staging area is
    /// committed. If it is dropped instead, any values constructed so far are
    /// destroyed and the new block is released.
    pub(super) fn try_stage(
        &mut self,
        capacity: usize,
        index: usize,
        count: usize,
    ) -> Result<Staging<'_, T, A, G>, StorageError> {
        debug_assert!(index <= self.len);
        let needed = self
            .len
            .checked_add(count)
            .ok_or(StorageError::CapacityLimit)?;
        if capacity < needed {
            return Err(StorageError::LengthError {
                requested: capacity,
                length: needed,
            });
        }
        let data = acquire::<T, A>(self.block.allocator(), capacity)?;
        let ctor = unsafe { Constructor::new(data.as_ptr(), index, count, 0) };
        Ok(Staging {
            vec: self,
            data,
            capacity,
            index,
            count,
            ctor: ManuallyDrop::new(ctor),
        })
    }
}

/// New values under construction in a replacement block.
pub(super) struct Staging<'a, T, A: Allocator, G: Grow> {
    vec: &'a mut Vector<T, A, G>,
    data: NonNull<T>,
    capacity: usize,
    index: usize,
    count: usize,
    ctor: ManuallyDrop<Constructor<'a, T>>,
}

impl<T, A: Allocator, G: Grow> Staging<'_, T, A, G> {
    /// Relocate the existing values around the newly constructed ones and
    /// replace the vector's block.
    pub fn commit(self) {
        assert!(self.ctor.full(), "staged values were not fully constructed");
        let mut this = ManuallyDrop::new(self);
        let ctor = unsafe { ManuallyDrop::take(&mut this.ctor) };
        ctor.complete();
        let (data, capacity, index, count) = (this.data, this.capacity, this.index, this.count);
        let vec = &mut *this.vec;
        let len = vec.len;
        unsafe {
            let src = vec.block.as_ptr();
            let dest = data.as_ptr();
            ptr::copy_nonoverlapping(src, dest, index);
            ptr::copy_nonoverlapping(src.add(index), dest.add(index + count), len - index);
            vec.block.adopt(data, capacity);
        }
        vec.len = len + count;
    }
}

impl<'a, T, A: Allocator, G: Grow> Deref for Staging<'a, T, A, G> {
    type Target = Constructor<'a, T>;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.ctor
    }
}

impl<T, A: Allocator, G: Grow> DerefMut for Staging<'_, T, A, G> {
    #[inline]
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.ctor
    }
}

impl<T, A: Allocator, G: Grow> Drop for Staging<'_, T, A, G> {
    fn drop(&mut self) {
        unsafe {
            ManuallyDrop::drop(&mut self.ctor);
            release::<T, A>(self.vec.block.allocator(), self.data, self.capacity);
        }
    }
}
