use core::alloc::Layout;
use core::fmt;
use core::marker::PhantomData;
use core::mem::{align_of, size_of, MaybeUninit};
use core::ptr::NonNull;

use crate::alloc::Allocator;
use crate::error::StorageError;

use super::utils::array_layout;

/// Acquire an uninitialized block from `alloc`, able to hold `capacity`
/// values of type `T`.
///
/// Requests which occupy no memory (an empty block, or any number of
/// zero-sized values) are not forwarded to the provider.
pub fn acquire<T, A: Allocator + ?Sized>(
    alloc: &A,
    capacity: usize,
) -> Result<NonNull<T>, StorageError> {
    let layout = array_layout::<T>(capacity)?;
    if layout.size() == 0 {
        return Ok(NonNull::dangling());
    }
    match alloc.allocate(layout) {
        Ok(ptr) => Ok(ptr.cast()),
        Err(_) => Err(StorageError::AllocError(layout)),
    }
}

/// Release a block produced by [`acquire`].
///
/// # Safety
/// `ptr` must have been returned by `acquire` on the same provider with the
/// same `capacity`, and must not be used after this call. Any values left in
/// the block are not dropped.
pub unsafe fn release<T, A: Allocator + ?Sized>(alloc: &A, ptr: NonNull<T>, capacity: usize) {
    // SAFETY: the same layout was validated when the block was acquired.
    let layout = Layout::from_size_align_unchecked(size_of::<T>() * capacity, align_of::<T>());
    if layout.size() > 0 {
        alloc.deallocate(ptr.cast(), layout);
    }
}

/// A block of `capacity` element slots, exclusively owned together with the
/// provider which produced it.
///
/// The block tracks no initialization state: which slots hold live values is
/// up to the owner. Dropping the block releases it without dropping any
/// values, so the owner must destroy them first.
pub struct RawBlock<T, A: Allocator> {
    ptr: NonNull<T>,
    capacity: usize,
    alloc: A,
    _marker: PhantomData<T>,
}

impl<T, A: Allocator> RawBlock<T, A> {
    /// Create an empty block which has not acquired any memory.
    #[inline]
    pub const fn new_in(alloc: A) -> Self {
        Self {
            ptr: NonNull::dangling(),
            capacity: 0,
            alloc,
            _marker: PhantomData,
        }
    }

    /// Acquire a block of `capacity` slots from `alloc`.
    pub fn try_with_capacity_in(capacity: usize, alloc: A) -> Result<Self, StorageError> {
        let ptr = acquire::<T, A>(&alloc, capacity)?;
        Ok(Self {
            ptr,
            capacity,
            alloc,
            _marker: PhantomData,
        })
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    pub fn allocator(&self) -> &A {
        &self.alloc
    }

    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.ptr.as_ptr()
    }

    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.ptr.as_ptr()
    }

    /// # Safety
    /// The index must be within the capacity of the block.
    #[inline]
    pub unsafe fn slot(&mut self, index: usize) -> &mut MaybeUninit<T> {
        debug_assert!(index < self.capacity);
        &mut *self.ptr.as_ptr().add(index).cast()
    }

    /// Replace the current block with `ptr`, holding `capacity` slots, and
    /// release the previous block.
    ///
    /// # Safety
    /// `ptr` must have been acquired from this block's provider with the
    /// given capacity. Live values in the previous block must have been
    /// relocated or destroyed.
    pub unsafe fn adopt(&mut self, ptr: NonNull<T>, capacity: usize) {
        let prev = core::mem::replace(&mut self.ptr, ptr);
        let prev_cap = core::mem::replace(&mut self.capacity, capacity);
        if prev_cap > 0 {
            release::<T, A>(&self.alloc, prev, prev_cap);
        }
    }
}

impl<T, A: Allocator> Drop for RawBlock<T, A> {
    fn drop(&mut self) {
        if self.capacity > 0 {
            unsafe { release::<T, A>(&self.alloc, self.ptr, self.capacity) };
        }
    }
}

impl<T, A: Allocator> fmt::Debug for RawBlock<T, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RawBlock")
            .field("ptr", &self.ptr)
            .field("capacity", &self.capacity)
            .finish_non_exhaustive()
    }
}

// The block uniquely owns its slots, as a `Box<[T]>` would.
unsafe impl<T: Send, A: Allocator + Send> Send for RawBlock<T, A> {}

unsafe impl<T: Sync, A: Allocator + Sync> Sync for RawBlock<T, A> {}

#[cfg(all(test, feature = "alloc"))]
mod tests {
    use super::*;
    use crate::alloc::Global;

    #[test]
    fn empty_block_has_no_capacity() {
        let block = RawBlock::<u32, _>::new_in(Global);
        assert_eq!(block.capacity(), 0);
        assert_eq!(block.as_ptr(), NonNull::<u32>::dangling().as_ptr());
    }

    #[test]
    fn zero_sized_block_skips_provider() {
        let block = RawBlock::<(), _>::try_with_capacity_in(10, Global).expect("block");
        assert_eq!(block.capacity(), 10);
    }

    #[test]
    fn adopt_releases_previous() {
        let mut block = RawBlock::<u64, _>::try_with_capacity_in(2, Global).expect("block");
        let next = acquire::<u64, _>(block.allocator(), 8).expect("acquire");
        unsafe { block.adopt(next, 8) };
        assert_eq!(block.capacity(), 8);
    }

    #[test]
    fn oversized_request_fails() {
        let err = RawBlock::<u64, _>::try_with_capacity_in(usize::MAX, Global)
            .expect_err("expected layout error");
        assert!(matches!(err, StorageError::LayoutError(_)));
    }
}
