//! Support for the `Vector` type.

use core::borrow::{Borrow, BorrowMut};
use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::iter::repeat;
use core::marker::PhantomData;
use core::mem::{self, ManuallyDrop};
use core::ops::{Bound, Deref, DerefMut, Range, RangeBounds};
use core::ptr;
use core::slice;

use const_default::ConstDefault;

use crate::alloc::{Allocator, Global};
use crate::error::{StorageError, UpdateError};
use crate::grow::{Grow, GrowDoubling};
use crate::storage::{Constructor, RawBlock, TailShift};

pub use self::into_iter::IntoIter;

#[macro_use]
mod macros;

mod into_iter;
mod realloc;

#[cfg(feature = "zeroize")]
/// A `Vector` which zeroizes every block it releases, including on drop.
pub type ZeroizingVector<T> = Vector<T, crate::alloc::ZeroizingAlloc<Global>>;

#[cfg(feature = "log")]
/// A `Vector` which logs each block acquisition and release.
pub type LoggingVector<T> = Vector<T, crate::alloc::LoggingAlloc<Global>>;

#[cold]
#[inline(never)]
pub(super) fn index_panic() -> ! {
    panic!("Invalid element index");
}

#[inline]
fn bounds_to_range(range: impl RangeBounds<usize>, length: usize) -> Range<usize> {
    let start = match range.start_bound() {
        Bound::Unbounded => 0,
        Bound::Included(i) => *i,
        Bound::Excluded(i) => i.saturating_add(1),
    };
    let end = match range.end_bound() {
        Bound::Unbounded => length,
        Bound::Included(i) => i.saturating_add(1),
        Bound::Excluded(i) => *i,
    };
    Range { start, end }
}

#[cfg(feature = "alloc")]
#[inline]
/// Create a `Vector<T>` from an array `[T; N]`.
pub fn from_array<T, const N: usize>(data: [T; N]) -> Vector<T> {
    from_array_in(data, Global)
}

#[inline]
/// Create a `Vector<T, A>` from an array `[T; N]` and a memory provider.
pub fn from_array_in<T, A: Allocator, const N: usize>(data: [T; N], alloc: A) -> Vector<T, A> {
    let mut v = Vector::with_capacity_in(N, alloc);
    v.extend(data);
    v
}

#[cfg(feature = "alloc")]
#[inline]
/// Create a `Vector<T>` from a cloneable element T and a count of the number of elements.
pub fn from_elem<T: Clone>(elem: T, count: usize) -> Vector<T> {
    from_elem_in(elem, count, Global)
}

#[inline]
/// Create a `Vector<T, A>` from a cloneable element T, a count of the number of elements,
/// and a memory provider.
pub fn from_elem_in<T: Clone, A: Allocator>(elem: T, count: usize, alloc: A) -> Vector<T, A> {
    let mut v = Vector::with_capacity_in(count, alloc);
    v.extend(repeat(elem).take(count));
    v
}

/// A contiguous growable array, storing its values in blocks acquired from
/// the memory provider `A` and growing according to the policy `G`.
///
/// The values `0..len()` are always live, while the slots
/// `len()..capacity()` are vacant. Positions are plain indices: an index is
/// valid for exactly as long as the value it refers to has not been moved
/// by an insertion or erasure before it.
pub struct Vector<T, A: Allocator = Global, G: Grow = GrowDoubling> {
    block: RawBlock<T, A>,
    len: usize,
    _grow: PhantomData<G>,
}

impl<T, A: Allocator + ConstDefault, G: Grow> Vector<T, A, G> {
    /// Constructs a new, empty `Vector<T, A>`.
    ///
    /// The vector will not acquire any memory until values are added to it.
    ///
    /// # Examples
    ///
    /// ```
    /// # #![allow(unused_mut)]
    /// # #[cfg(feature = "alloc")]
    /// # {
    /// let mut vec: growvec::Vector<i32> = growvec::Vector::new();
    /// assert_eq!(vec.capacity(), 0);
    /// # }
    /// ```
    pub const fn new() -> Self {
        Self::new_in(A::DEFAULT)
    }

    pub fn try_with_capacity(capacity: usize) -> Result<Self, StorageError> {
        Self::try_with_capacity_in(capacity, A::DEFAULT)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        match Self::try_with_capacity(capacity) {
            Ok(res) => res,
            Err(error) => error.panic(),
        }
    }

    pub fn from_slice(data: &[T]) -> Self
    where
        T: Clone,
    {
        Self::from_slice_in(data, A::DEFAULT)
    }

    pub fn try_from_slice(data: &[T]) -> Result<Self, StorageError>
    where
        T: Clone,
    {
        Self::try_from_slice_in(data, A::DEFAULT)
    }
}

impl<T, A: Allocator, G: Grow> Vector<T, A, G> {
    /// Constructs a new, empty vector using the memory provider `alloc`.
    #[inline]
    pub const fn new_in(alloc: A) -> Self {
        Self {
            block: RawBlock::new_in(alloc),
            len: 0,
            _grow: PhantomData,
        }
    }

    pub fn with_capacity_in(capacity: usize, alloc: A) -> Self {
        match Self::try_with_capacity_in(capacity, alloc) {
            Ok(res) => res,
            Err(error) => error.panic(),
        }
    }

    /// Constructs an empty vector with exactly `capacity` vacant slots.
    pub fn try_with_capacity_in(capacity: usize, alloc: A) -> Result<Self, StorageError> {
        Ok(Self {
            block: RawBlock::try_with_capacity_in(capacity, alloc)?,
            len: 0,
            _grow: PhantomData,
        })
    }

    pub fn from_slice_in(data: &[T], alloc: A) -> Self
    where
        T: Clone,
    {
        match Self::try_from_slice_in(data, alloc) {
            Ok(res) => res,
            Err(error) => error.panic(),
        }
    }

    pub fn try_from_slice_in(data: &[T], alloc: A) -> Result<Self, StorageError>
    where
        T: Clone,
    {
        let mut vec = Self::try_with_capacity_in(data.len(), alloc)?;
        vec.try_extend_from_slice(data)?;
        Ok(vec)
    }

    fn from_iter_in<I>(iter: I, alloc: A) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let iter = iter.into_iter();
        let (min_cap, _) = iter.size_hint();
        let mut vec = Self::with_capacity_in(min_cap, alloc);
        vec.extend(iter);
        vec
    }
}

impl<T, A: Allocator, G: Grow> Vector<T, A, G> {
    /// Access the memory provider of this vector.
    #[inline]
    pub fn allocator(&self) -> &A {
        self.block.allocator()
    }

    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.block.as_ptr()
    }

    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.block.as_mut_ptr()
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        unsafe { slice::from_raw_parts(self.block.as_ptr(), self.len) }
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        unsafe { slice::from_raw_parts_mut(self.block.as_mut_ptr(), self.len) }
    }

    /// The number of slots in the current block, live or vacant.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.block.capacity()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The position of the first value.
    #[inline]
    pub fn begin(&self) -> usize {
        0
    }

    /// The position one past the last value.
    #[inline]
    pub fn end(&self) -> usize {
        self.len
    }

    /// Checked access to the value at `index`.
    pub fn at(&self, index: usize) -> Result<&T, StorageError> {
        self.as_slice().get(index).ok_or(StorageError::OutOfRange {
            index,
            length: self.len,
        })
    }

    /// Checked mutable access to the value at `index`.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, StorageError> {
        let length = self.len;
        self.as_mut_slice()
            .get_mut(index)
            .ok_or(StorageError::OutOfRange { index, length })
    }

    /// Access the first value.
    ///
    /// # Panics
    /// Panics if the vector is empty.
    #[inline]
    pub fn front(&self) -> &T {
        match self.as_slice().first() {
            Some(item) => item,
            None => index_panic(),
        }
    }

    /// Mutable access to the first value.
    ///
    /// # Panics
    /// Panics if the vector is empty.
    #[inline]
    pub fn front_mut(&mut self) -> &mut T {
        match self.as_mut_slice().first_mut() {
            Some(item) => item,
            None => index_panic(),
        }
    }

    /// Access the last value.
    ///
    /// # Panics
    /// Panics if the vector is empty.
    #[inline]
    pub fn back(&self) -> &T {
        match self.as_slice().last() {
            Some(item) => item,
            None => index_panic(),
        }
    }

    /// Mutable access to the last value.
    ///
    /// # Panics
    /// Panics if the vector is empty.
    #[inline]
    pub fn back_mut(&mut self) -> &mut T {
        match self.as_mut_slice().last_mut() {
            Some(item) => item,
            None => index_panic(),
        }
    }

    /// Ensure the vector has room for at least `capacity` values in total.
    ///
    /// When the current capacity is smaller, exactly `capacity` slots are
    /// acquired and the values are moved over. Otherwise this does nothing.
    pub fn reserve(&mut self, capacity: usize) {
        match self.try_reserve(capacity) {
            Ok(_) => (),
            Err(error) => error.panic(),
        }
    }

    pub fn try_reserve(&mut self, capacity: usize) -> Result<(), StorageError> {
        if capacity > self.block.capacity() {
            self.try_reallocate(capacity)
        } else {
            Ok(())
        }
    }

    /// Reduce the capacity to match the length. An empty vector releases its
    /// block entirely.
    pub fn shrink_to_fit(&mut self) {
        match self.try_shrink_to_fit() {
            Ok(_) => (),
            Err(error) => error.panic(),
        }
    }

    pub fn try_shrink_to_fit(&mut self) -> Result<(), StorageError> {
        if self.block.capacity() > self.len {
            self.try_reallocate(self.len)
        } else {
            Ok(())
        }
    }

    /// Drop every value, keeping the current capacity.
    #[inline]
    pub fn clear(&mut self) {
        self.truncate(0);
    }

    /// Drop the values from `length` onward, keeping the current capacity.
    pub fn truncate(&mut self, length: usize) {
        let prev_len = self.len;
        if length < prev_len {
            self.len = length;
            unsafe { self.block.destroy_range(length, prev_len) };
        }
    }

    /// Append a value to the end of the vector.
    pub fn push(&mut self, item: T) {
        match self.try_push(item) {
            Ok(_) => (),
            Err(error) => error.panic(),
        }
    }

    /// Append a value to the end of the vector, returning it along with the
    /// error if more storage could not be acquired.
    pub fn try_push(&mut self, item: T) -> Result<(), UpdateError<T>> {
        let len = self.len;
        if len < self.block.capacity() {
            unsafe { self.block.construct_at(len, item) };
            self.len = len + 1;
            return Ok(());
        }
        let capacity = match self.grown_capacity(1) {
            Ok(cap) => cap,
            Err(error) => return Err(UpdateError::new(error, item)),
        };
        match self.try_stage(capacity, len, 1) {
            Ok(mut staging) => {
                staging.push(item);
                staging.commit();
                Ok(())
            }
            Err(error) => Err(UpdateError::new(error, item)),
        }
    }

    /// Construct a value at the end of the vector with `f`, returning a
    /// reference to it.
    ///
    /// If more storage is needed, the value is built in the new block before
    /// the existing values are moved, so a panic in `f` leaves the vector
    /// untouched.
    pub fn emplace_back<F: FnOnce() -> T>(&mut self, f: F) -> &mut T {
        match self.try_emplace_back(f) {
            Ok(item) => item,
            Err(error) => error.panic(),
        }
    }

    pub fn try_emplace_back<F: FnOnce() -> T>(&mut self, f: F) -> Result<&mut T, StorageError> {
        let len = self.len;
        if len < self.block.capacity() {
            unsafe { self.block.construct_with(len, f) };
            self.len = len + 1;
        } else {
            let capacity = self.grown_capacity(1)?;
            let mut staging = self.try_stage(capacity, len, 1)?;
            staging.push_with(f);
            staging.commit();
        }
        Ok(unsafe { &mut *self.block.as_mut_ptr().add(len) })
    }

    /// Remove the last value and return it, or `None` if the vector is empty.
    pub fn pop(&mut self) -> Option<T> {
        if self.len > 0 {
            self.len -= 1;
            Some(unsafe { self.block.read_at(self.len) })
        } else {
            None
        }
    }

    /// Drop the last value. Does nothing if the vector is empty.
    pub fn pop_back(&mut self) {
        if self.len > 0 {
            self.len -= 1;
            unsafe { self.block.destroy_at(self.len) };
        }
    }

    pub fn resize(&mut self, new_len: usize, value: T)
    where
        T: Clone,
    {
        match self.try_resize(new_len, value) {
            Ok(_) => (),
            Err(error) => error.panic(),
        }
    }

    /// Change the length of the vector, filling any new slots with clones of
    /// `value`. Shrinking drops the values past `new_len` and keeps the
    /// capacity.
    pub fn try_resize(&mut self, new_len: usize, value: T) -> Result<(), StorageError>
    where
        T: Clone,
    {
        self.try_resize_with(new_len, || value.clone())
    }

    pub fn resize_default(&mut self, new_len: usize)
    where
        T: Default,
    {
        match self.try_resize_default(new_len) {
            Ok(_) => (),
            Err(error) => error.panic(),
        }
    }

    /// Change the length of the vector, filling any new slots with
    /// default values.
    pub fn try_resize_default(&mut self, new_len: usize) -> Result<(), StorageError>
    where
        T: Default,
    {
        self.try_resize_filled(new_len, |ctor| ctor.push_default())
    }

    pub fn resize_with<F>(&mut self, new_len: usize, f: F)
    where
        F: FnMut() -> T,
    {
        match self.try_resize_with(new_len, f) {
            Ok(_) => (),
            Err(error) => error.panic(),
        }
    }

    pub fn try_resize_with<F>(&mut self, new_len: usize, mut f: F) -> Result<(), StorageError>
    where
        F: FnMut() -> T,
    {
        self.try_resize_filled(new_len, |ctor| ctor.push_with(&mut f))
    }

    /// Resize to `new_len`, calling `fill` once for each new slot.
    fn try_resize_filled<F>(&mut self, new_len: usize, mut fill: F) -> Result<(), StorageError>
    where
        F: FnMut(&mut Constructor<'_, T>),
    {
        let len = self.len;
        match new_len.cmp(&len) {
            Ordering::Greater => {
                let count = new_len - len;
                if new_len <= self.block.capacity() {
                    let mut ctor = Constructor::for_range(&mut self.block, len, count, 0);
                    for _ in 0..count {
                        fill(&mut ctor);
                    }
                    self.len = len + ctor.complete();
                } else {
                    let capacity = self.grown_capacity(count)?;
                    let mut staging = self.try_stage(capacity, len, count)?;
                    for _ in 0..count {
                        fill(&mut *staging);
                    }
                    staging.commit();
                }
            }
            Ordering::Less => self.truncate(new_len),
            Ordering::Equal => (),
        }
        Ok(())
    }

    /// Insert `value` at `index`, shifting the following values up by one,
    /// and return the position of the inserted value.
    ///
    /// # Panics
    /// Panics if `index > len()`.
    pub fn insert(&mut self, index: usize, value: T) -> usize {
        match self.try_insert(index, value) {
            Ok(pos) => pos,
            Err(error) => error.panic(),
        }
    }

    pub fn try_insert(&mut self, index: usize, value: T) -> Result<usize, UpdateError<T>> {
        let len = self.len;
        if index > len {
            return Err(UpdateError::new(
                StorageError::OutOfRange { index, length: len },
                value,
            ));
        }
        if len < self.block.capacity() {
            unsafe {
                self.block.shift(index, index + 1, len - index);
                self.block.construct_at(index, value);
            }
            self.len = len + 1;
            return Ok(index);
        }
        let capacity = match self.grown_capacity(1) {
            Ok(cap) => cap,
            Err(error) => return Err(UpdateError::new(error, value)),
        };
        match self.try_stage(capacity, index, 1) {
            Ok(mut staging) => {
                staging.push(value);
                staging.commit();
                Ok(index)
            }
            Err(error) => Err(UpdateError::new(error, value)),
        }
    }

    /// Insert clones of `values` starting at `index`, returning `index`.
    pub fn insert_slice(&mut self, index: usize, values: &[T]) -> usize
    where
        T: Clone,
    {
        match self.try_insert_slice(index, values) {
            Ok(pos) => pos,
            Err(error) => error.panic(),
        }
    }

    pub fn try_insert_slice(&mut self, index: usize, values: &[T]) -> Result<usize, StorageError>
    where
        T: Clone,
    {
        let len = self.len;
        if index > len {
            return Err(StorageError::OutOfRange { index, length: len });
        }
        let count = values.len();
        if count == 0 {
            return Ok(index);
        }
        if count <= self.block.capacity() - len {
            let tail = len - index;
            unsafe { self.block.shift(index, index + count, tail) };
            let mut ctor = Constructor::for_range(&mut self.block, index, count, tail);
            for item in values {
                ctor.push_clone(item);
            }
            ctor.complete();
            self.len = len + count;
        } else {
            let capacity = self.grown_capacity(count)?;
            let mut staging = self.try_stage(capacity, index, count)?;
            for item in values {
                staging.push_clone(item);
            }
            staging.commit();
        }
        Ok(index)
    }

    /// Drop the value at `index`, shifting the following values down by one.
    /// Returns the position now occupied by the value which followed it.
    ///
    /// # Panics
    /// Panics if `index >= len()`.
    pub fn erase(&mut self, index: usize) -> usize {
        match self.try_erase(index) {
            Ok(pos) => pos,
            Err(error) => error.panic(),
        }
    }

    pub fn try_erase(&mut self, index: usize) -> Result<usize, StorageError> {
        self.try_remove(index).map(|_| index)
    }

    /// Drop the values within `range`, shifting the following values down.
    /// Returns the start of the range, now occupied by the first value which
    /// followed it. An empty range changes nothing.
    ///
    /// # Panics
    /// Panics if the range is inverted or extends past `len()`.
    pub fn erase_range<R: RangeBounds<usize>>(&mut self, range: R) -> usize {
        match self.try_erase_range(range) {
            Ok(pos) => pos,
            Err(error) => error.panic(),
        }
    }

    pub fn try_erase_range<R: RangeBounds<usize>>(&mut self, range: R) -> Result<usize, StorageError> {
        let len = self.len;
        let Range { start, end } = bounds_to_range(range, len);
        if end > len {
            return Err(StorageError::OutOfRange {
                index: end,
                length: len,
            });
        }
        if start > end {
            return Err(StorageError::OutOfRange {
                index: start,
                length: len,
            });
        }
        if start == end {
            return Ok(start);
        }
        let data = self.block.as_mut_ptr();
        let shift = unsafe { TailShift::new(data, start, end, len - end, &mut self.len) };
        unsafe { self.block.destroy_range(start, end) };
        drop(shift);
        Ok(start)
    }

    /// Remove and return the value at `index`, shifting the following values
    /// down by one.
    ///
    /// # Panics
    /// Panics if `index >= len()`.
    pub fn remove(&mut self, index: usize) -> T {
        match self.try_remove(index) {
            Ok(item) => item,
            Err(error) => error.panic(),
        }
    }

    pub fn try_remove(&mut self, index: usize) -> Result<T, StorageError> {
        let len = self.len;
        if index >= len {
            return Err(StorageError::OutOfRange { index, length: len });
        }
        let item = unsafe { self.block.read_at(index) };
        unsafe { self.block.shift(index + 1, index, len - index - 1) };
        self.len = len - 1;
        Ok(item)
    }

    /// Exchange the contents, capacities and memory providers of two vectors.
    /// No values are moved.
    #[inline]
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(self, other);
    }

    pub fn extend_from_slice(&mut self, items: &[T])
    where
        T: Clone,
    {
        match self.try_extend_from_slice(items) {
            Ok(_) => (),
            Err(error) => error.panic(),
        }
    }

    /// Append clones of `items`. If a clone panics, the vector is left as it
    /// was before the call.
    pub fn try_extend_from_slice(&mut self, items: &[T]) -> Result<(), StorageError>
    where
        T: Clone,
    {
        self.try_insert_slice(self.len, items).map(|_| ())
    }

    /// Append copies of `items` with a single bulk copy.
    pub fn extend_from_copy_slice(&mut self, items: &[T])
    where
        T: Copy,
    {
        match self.try_extend_from_copy_slice(items) {
            Ok(_) => (),
            Err(error) => error.panic(),
        }
    }

    pub fn try_extend_from_copy_slice(&mut self, items: &[T]) -> Result<(), StorageError>
    where
        T: Copy,
    {
        let len = self.len;
        let count = items.len();
        if count > self.block.capacity() - len {
            let capacity = self.grown_capacity(count)?;
            self.try_reallocate(capacity)?;
        }
        unsafe { self.block.construct_copied(len, items) };
        self.len = len + count;
        Ok(())
    }

    fn try_extend(&mut self, iter: &mut impl Iterator<Item = T>) -> Result<(), UpdateError<T>> {
        loop {
            let len = self.len;
            let spare = self.block.capacity() - len;
            let mut ctor = Constructor::for_range(&mut self.block, len, spare, 0);
            let mut full;
            loop {
                full = ctor.full();
                if full {
                    break;
                }
                let Some(item) = iter.next() else { break };
                ctor.push(item);
            }
            self.len = len + ctor.complete();
            if !full {
                // ran out of items to insert
                break;
            }
            if let Some(item) = iter.next() {
                let min_reserve = iter.size_hint().0.saturating_add(1);
                let capacity = match self.grown_capacity(min_reserve) {
                    Ok(cap) => cap,
                    Err(error) => return Err(UpdateError::new(error, item)),
                };
                if let Err(error) = self.try_reallocate(capacity) {
                    return Err(UpdateError::new(error, item));
                }
                unsafe { self.block.construct_at(self.len, item) };
                self.len += 1;
            } else {
                break;
            }
        }
        Ok(())
    }
}

impl<T, A: Allocator, G: Grow> AsRef<[T]> for Vector<T, A, G> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T, A: Allocator, G: Grow> AsMut<[T]> for Vector<T, A, G> {
    #[inline]
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T, A: Allocator, G: Grow> Borrow<[T]> for Vector<T, A, G> {
    #[inline]
    fn borrow(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T, A: Allocator, G: Grow> BorrowMut<[T]> for Vector<T, A, G> {
    #[inline]
    fn borrow_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T: Clone, A: Allocator + Clone, G: Grow> Clone for Vector<T, A, G> {
    /// Copy the vector into a block of exactly `len()` slots, acquired from a
    /// clone of the memory provider.
    fn clone(&self) -> Self {
        let mut inst = Self::with_capacity_in(self.len, self.allocator().clone());
        inst.extend_from_slice(self);
        inst
    }

    /// Replace the contents with clones of `source`, reusing the current
    /// block when it is large enough. If a clone panics, the vector is left
    /// empty.
    fn clone_from(&mut self, source: &Self) {
        self.clear();
        if source.len > self.block.capacity() {
            if let Err(error) = self.try_reallocate(source.len) {
                error.panic();
            }
        }
        self.extend_from_slice(source);
    }
}

impl<T: fmt::Debug, A: Allocator, G: Grow> fmt::Debug for Vector<T, A, G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.as_slice().fmt(f)
    }
}

impl<T, A: Allocator + ConstDefault, G: Grow> Default for Vector<T, A, G> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T, A: Allocator, G: Grow> Deref for Vector<T, A, G> {
    type Target = [T];

    #[inline]
    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}

impl<T, A: Allocator, G: Grow> DerefMut for Vector<T, A, G> {
    #[inline]
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.as_mut_slice()
    }
}

impl<T, A: Allocator, G: Grow> Drop for Vector<T, A, G> {
    fn drop(&mut self) {
        let len = mem::replace(&mut self.len, 0);
        unsafe { self.block.destroy_range(0, len) };
        // the block itself is released when the field is dropped
    }
}

impl<T, A: Allocator, G: Grow> Extend<T> for Vector<T, A, G> {
    #[inline]
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        match self.try_extend(&mut iter.into_iter()) {
            Ok(_) => (),
            Err(error) => error.panic(),
        }
    }
}

impl<'a, T: Clone + 'a, A: Allocator, G: Grow> Extend<&'a T> for Vector<T, A, G> {
    #[inline]
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        match self.try_extend(&mut iter.into_iter().cloned()) {
            Ok(_) => (),
            Err(error) => error.panic(),
        }
    }
}

impl<T, A: Allocator + ConstDefault, G: Grow> FromIterator<T> for Vector<T, A, G> {
    #[inline]
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_iter_in(iter, A::DEFAULT)
    }
}

impl<T: Clone, A: Allocator + ConstDefault, G: Grow> From<&[T]> for Vector<T, A, G> {
    #[inline]
    fn from(data: &[T]) -> Self {
        Self::from_slice(data)
    }
}

impl<T: Clone, A: Allocator + ConstDefault, G: Grow> From<&mut [T]> for Vector<T, A, G> {
    #[inline]
    fn from(data: &mut [T]) -> Self {
        Self::from_slice(data)
    }
}

impl<T: Clone, A: Allocator + ConstDefault, G: Grow, const N: usize> From<&[T; N]>
    for Vector<T, A, G>
{
    #[inline]
    fn from(data: &[T; N]) -> Self {
        Self::from_slice(data)
    }
}

impl<T, A: Allocator + ConstDefault, G: Grow, const N: usize> From<[T; N]> for Vector<T, A, G> {
    #[inline]
    fn from(data: [T; N]) -> Self {
        Self::from_iter(data)
    }
}

impl<A: Allocator + ConstDefault, G: Grow> From<&str> for Vector<u8, A, G> {
    #[inline]
    fn from(data: &str) -> Self {
        Self::from_slice(data.as_bytes())
    }
}

#[cfg(feature = "alloc")]
impl<T, A: Allocator + ConstDefault, G: Grow> From<alloc_crate::vec::Vec<T>> for Vector<T, A, G> {
    fn from(vec: alloc_crate::vec::Vec<T>) -> Self {
        Self::from_iter(vec)
    }
}

#[cfg(feature = "alloc")]
impl<T, A: Allocator, G: Grow> From<Vector<T, A, G>> for alloc_crate::vec::Vec<T> {
    fn from(vec: Vector<T, A, G>) -> Self {
        vec.into_iter().collect()
    }
}

impl<T: Hash, A: Allocator, G: Grow> Hash for Vector<T, A, G> {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state)
    }
}

impl<T, A: Allocator, G: Grow> IntoIterator for Vector<T, A, G> {
    type Item = T;
    type IntoIter = IntoIter<T, A>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        let mut me = ManuallyDrop::new(self);
        let len = mem::replace(&mut me.len, 0);
        let block = unsafe { ptr::read(&me.block) };
        IntoIter::new(block, len)
    }
}

impl<'a, T, A: Allocator, G: Grow> IntoIterator for &'a Vector<T, A, G> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

impl<'a, T, A: Allocator, G: Grow> IntoIterator for &'a mut Vector<T, A, G> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.as_mut_slice().iter_mut()
    }
}

impl<T1, A1, G1, T2, A2, G2> PartialEq<Vector<T2, A2, G2>> for Vector<T1, A1, G1>
where
    T1: PartialEq<T2>,
    A1: Allocator,
    A2: Allocator,
    G1: Grow,
    G2: Grow,
{
    #[inline]
    fn eq(&self, other: &Vector<T2, A2, G2>) -> bool {
        self.as_slice().eq(other.as_slice())
    }
}

impl<T: Eq, A: Allocator, G: Grow> Eq for Vector<T, A, G> {}

impl<T1, A1, G1, T2> PartialEq<&[T2]> for Vector<T1, A1, G1>
where
    T1: PartialEq<T2>,
    A1: Allocator,
    G1: Grow,
{
    #[inline]
    fn eq(&self, other: &&[T2]) -> bool {
        self.as_slice().eq(*other)
    }
}

impl<T1, A1, G1, T2> PartialEq<[T2]> for Vector<T1, A1, G1>
where
    T1: PartialEq<T2>,
    A1: Allocator,
    G1: Grow,
{
    #[inline]
    fn eq(&self, other: &[T2]) -> bool {
        self.as_slice().eq(other)
    }
}

impl<T1, A1, G1, T2, const N: usize> PartialEq<&[T2; N]> for Vector<T1, A1, G1>
where
    T1: PartialEq<T2>,
    A1: Allocator,
    G1: Grow,
{
    #[inline]
    fn eq(&self, other: &&[T2; N]) -> bool {
        self.as_slice().eq(&other[..])
    }
}

impl<T1, A1, G1, T2, const N: usize> PartialEq<[T2; N]> for Vector<T1, A1, G1>
where
    T1: PartialEq<T2>,
    A1: Allocator,
    G1: Grow,
{
    #[inline]
    fn eq(&self, other: &[T2; N]) -> bool {
        self.as_slice().eq(&other[..])
    }
}

impl<T1, T2, A2, G2> PartialEq<Vector<T2, A2, G2>> for [T1]
where
    T1: PartialEq<T2>,
    A2: Allocator,
    G2: Grow,
{
    #[inline]
    fn eq(&self, other: &Vector<T2, A2, G2>) -> bool {
        self.eq(other.as_slice())
    }
}

impl<T1, T2, A2, G2, const N: usize> PartialEq<Vector<T2, A2, G2>> for [T1; N]
where
    T1: PartialEq<T2>,
    A2: Allocator,
    G2: Grow,
{
    #[inline]
    fn eq(&self, other: &Vector<T2, A2, G2>) -> bool {
        self[..].eq(other.as_slice())
    }
}

#[cfg(feature = "alloc")]
impl<T1, A1, G1, T2> PartialEq<alloc_crate::vec::Vec<T2>> for Vector<T1, A1, G1>
where
    T1: PartialEq<T2>,
    A1: Allocator,
    G1: Grow,
{
    #[inline]
    fn eq(&self, other: &alloc_crate::vec::Vec<T2>) -> bool {
        self.as_slice().eq(other.as_slice())
    }
}

impl<T: PartialOrd, A: Allocator, G: Grow> PartialOrd for Vector<T, A, G> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.as_slice().partial_cmp(other.as_slice())
    }
}

impl<T: Ord, A: Allocator, G: Grow> Ord for Vector<T, A, G> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}

#[cfg(feature = "zeroize")]
impl<T, A: Allocator, G: Grow> zeroize::Zeroize for Vector<T, crate::alloc::ZeroizingAlloc<A>, G> {
    /// Drop every value and release the block, which wipes its contents.
    #[inline]
    fn zeroize(&mut self) {
        self.clear();
        self.shrink_to_fit();
    }
}

#[cfg(feature = "zeroize")]
impl<T, A: Allocator, G: Grow> zeroize::ZeroizeOnDrop
    for Vector<T, crate::alloc::ZeroizingAlloc<A>, G>
{
}

/// ```compile_fail,E0502
/// let mut v: growvec::Vector<i32> = growvec::vector![1, 2, 3];
/// let first = &v[0];
/// v.push(4);
/// assert_eq!(*first, 1);
/// ```
#[cfg(doctest)]
fn _invalidation_check() {}
