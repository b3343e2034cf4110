use core::fmt;
use core::iter::FusedIterator;
use core::ops::Range;
use core::slice;

use crate::alloc::Allocator;
use crate::storage::RawBlock;

/// An iterator which moves the values out of a vector, releasing its block
/// once dropped.
pub struct IntoIter<T, A: Allocator> {
    remain: Range<usize>,
    block: RawBlock<T, A>,
}

impl<T, A: Allocator> IntoIter<T, A> {
    pub(super) fn new(block: RawBlock<T, A>, len: usize) -> Self {
        Self {
            remain: Range { start: 0, end: len },
            block,
        }
    }

    /// Access the remaining values as a slice.
    pub fn as_slice(&self) -> &[T] {
        unsafe {
            slice::from_raw_parts(self.block.as_ptr().add(self.remain.start), self.remain.len())
        }
    }

    /// Access the remaining values as a mutable slice.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        unsafe {
            slice::from_raw_parts_mut(
                self.block.as_mut_ptr().add(self.remain.start),
                self.remain.len(),
            )
        }
    }

    /// Access the memory provider.
    pub fn allocator(&self) -> &A {
        self.block.allocator()
    }

    fn clear(&mut self) {
        let Range { start, end } = self.remain;
        self.remain.start = end;
        unsafe { self.block.destroy_range(start, end) };
    }
}

impl<T, A: Allocator> AsRef<[T]> for IntoIter<T, A> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T, A: Allocator> AsMut<[T]> for IntoIter<T, A> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T: fmt::Debug, A: Allocator> fmt::Debug for IntoIter<T, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.as_slice()).finish()
    }
}

impl<T, A: Allocator> Iterator for IntoIter<T, A> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.remain.start;
        if index != self.remain.end {
            self.remain.start = index + 1;
            Some(unsafe { self.block.read_at(index) })
        } else {
            None
        }
    }

    #[inline]
    fn count(self) -> usize
    where
        Self: Sized,
    {
        self.len()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.remain.len();
        (len, Some(len))
    }
}

impl<T, A: Allocator> DoubleEndedIterator for IntoIter<T, A> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        let mut index = self.remain.end;
        if index != self.remain.start {
            index -= 1;
            self.remain.end = index;
            Some(unsafe { self.block.read_at(index) })
        } else {
            None
        }
    }
}

impl<T, A: Allocator> ExactSizeIterator for IntoIter<T, A> {}

impl<T, A: Allocator> FusedIterator for IntoIter<T, A> {}

impl<T, A: Allocator> Drop for IntoIter<T, A> {
    fn drop(&mut self) {
        self.clear();
    }
}
