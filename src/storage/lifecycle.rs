//! Construction and destruction of values within the slots of a block.
//!
//! None of these helpers track which slots are live; callers update their
//! own length after the fact.

use core::mem::needs_drop;
use core::ptr;

use crate::alloc::Allocator;

use super::RawBlock;

impl<T, A: Allocator> RawBlock<T, A> {
    /// Construct `value` in the slot at `index`.
    ///
    /// # Safety
    /// The index must be within capacity and the slot must not hold a live
    /// value, otherwise that value is leaked.
    #[inline]
    pub unsafe fn construct_at(&mut self, index: usize, value: T) -> &mut T {
        self.slot(index).write(value)
    }

    /// Construct a value produced by `f` directly in the slot at `index`.
    ///
    /// # Safety
    /// As for [`construct_at`](Self::construct_at).
    #[inline]
    pub unsafe fn construct_with<F: FnOnce() -> T>(&mut self, index: usize, f: F) -> &mut T {
        self.slot(index).write(f())
    }

    /// Bulk-construct copies of `values` starting at the slot `index`, with a
    /// single byte copy.
    ///
    /// # Safety
    /// The range `index..index + values.len()` must be within capacity and
    /// hold no live values.
    #[inline]
    pub unsafe fn construct_copied(&mut self, index: usize, values: &[T])
    where
        T: Copy,
    {
        debug_assert!(index + values.len() <= self.capacity());
        ptr::copy_nonoverlapping(values.as_ptr(), self.as_mut_ptr().add(index), values.len());
    }

    /// Move the value out of the slot at `index`, leaving the slot vacant.
    ///
    /// # Safety
    /// The slot must hold a live value.
    #[inline]
    pub unsafe fn read_at(&self, index: usize) -> T {
        ptr::read(self.as_ptr().add(index))
    }

    /// Drop the value in the slot at `index` without releasing any memory.
    ///
    /// # Safety
    /// The slot must hold a live value, and is vacant afterward.
    #[inline]
    pub unsafe fn destroy_at(&mut self, index: usize) {
        ptr::drop_in_place(self.as_mut_ptr().add(index));
    }

    /// Drop each value in `from..to`, in ascending order.
    ///
    /// # Safety
    /// Every slot in the range must hold a live value, and is vacant afterward.
    #[inline]
    pub unsafe fn destroy_range(&mut self, from: usize, to: usize) {
        if needs_drop::<T>() && from < to {
            let head = self.as_mut_ptr().add(from);
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(head, to - from));
        }
    }

    /// Move `count` values starting at slot `from` so they start at slot `to`.
    /// The ranges may overlap.
    ///
    /// # Safety
    /// Both ranges must be within capacity. Slots of the source range which
    /// are not covered by the destination are left vacant.
    #[inline]
    pub unsafe fn shift(&mut self, from: usize, to: usize, count: usize) {
        if count > 0 && from != to {
            let data = self.as_mut_ptr();
            ptr::copy(data.add(from), data.add(to), count);
        }
    }
}
