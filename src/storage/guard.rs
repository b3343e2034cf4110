use core::marker::PhantomData;
use core::mem::ManuallyDrop;
use core::ptr;

use crate::alloc::Allocator;

use super::RawBlock;

/// Writes values into a run of vacant slots.
///
/// Until [`complete`](Constructor::complete) is called, dropping the
/// constructor (including during a panic) destroys every value it wrote and
/// moves any displaced tail back to the start of the run.
pub(crate) struct Constructor<'a, T> {
    data: *mut T,
    start: usize,
    pos: usize,
    end: usize,
    tail: usize,
    _marker: PhantomData<&'a mut [T]>,
}

impl<'a, T> Constructor<'a, T> {
    /// # Safety
    /// `data` must be valid for writes over `start..start + count`, and the
    /// `tail` slots after that range must hold live values.
    #[inline]
    pub unsafe fn new(data: *mut T, start: usize, count: usize, tail: usize) -> Self {
        Self {
            data,
            start,
            pos: start,
            end: start + count,
            tail,
            _marker: PhantomData,
        }
    }

    /// Fill `count` vacant slots of `block` starting from `start`, followed by
    /// `tail` slots which have been shifted out of the way.
    #[inline]
    pub fn for_range<A: Allocator>(
        block: &'a mut RawBlock<T, A>,
        start: usize,
        count: usize,
        tail: usize,
    ) -> Self {
        assert!(start + count + tail <= block.capacity());
        unsafe { Self::new(block.as_mut_ptr(), start, count, tail) }
    }

    #[inline]
    pub fn push(&mut self, value: T) {
        assert!(self.pos < self.end, "constructor is full");
        unsafe { self.data.add(self.pos).write(value) };
        self.pos += 1;
    }

    #[inline]
    pub fn push_clone(&mut self, value: &T)
    where
        T: Clone,
    {
        self.push(value.clone());
    }

    #[inline]
    pub fn push_with<F: FnOnce() -> T>(&mut self, f: F) {
        self.push(f());
    }

    #[inline]
    pub fn push_default(&mut self)
    where
        T: Default,
    {
        self.push(T::default());
    }

    #[inline]
    pub fn full(&self) -> bool {
        self.pos == self.end
    }

    /// Keep the written values, returning their count.
    #[inline]
    pub fn complete(self) -> usize {
        let this = ManuallyDrop::new(self);
        this.pos - this.start
    }
}

impl<T> Drop for Constructor<'_, T> {
    fn drop(&mut self) {
        unsafe {
            if self.pos != self.start {
                ptr::drop_in_place(ptr::slice_from_raw_parts_mut(
                    self.data.add(self.start),
                    self.pos - self.start,
                ));
            }
            if self.tail > 0 {
                ptr::copy(self.data.add(self.end), self.data.add(self.start), self.tail);
            }
        }
    }
}

/// Closes a gap of vacated slots by moving the following `tail` values down,
/// then records the new length. Runs on scope exit, including during a panic
/// raised by a destructor within the gap.
pub(crate) struct TailShift<'a, T> {
    data: *mut T,
    dest: usize,
    src: usize,
    tail: usize,
    len: &'a mut usize,
}

impl<'a, T> TailShift<'a, T> {
    /// # Safety
    /// `data` must be valid for `src + tail` slots, with live values in
    /// `src..src + tail`, and `dest <= src`.
    #[inline]
    pub unsafe fn new(data: *mut T, dest: usize, src: usize, tail: usize, len: &'a mut usize) -> Self {
        debug_assert!(dest <= src);
        Self {
            data,
            dest,
            src,
            tail,
            len,
        }
    }
}

impl<T> Drop for TailShift<'_, T> {
    fn drop(&mut self) {
        if self.tail > 0 && self.src != self.dest {
            unsafe { ptr::copy(self.data.add(self.src), self.data.add(self.dest), self.tail) };
        }
        *self.len = self.dest + self.tail;
    }
}

#[cfg(all(test, feature = "alloc"))]
mod tests {
    use std::cell::Cell;
    use std::panic::{catch_unwind, AssertUnwindSafe};
    use std::rc::Rc;

    use super::*;
    use crate::alloc::Global;

    #[derive(Debug)]
    struct Tracked(Rc<Cell<usize>>);

    impl Drop for Tracked {
        fn drop(&mut self) {
            self.0.set(self.0.get() + 1);
        }
    }

    #[test]
    fn constructor_rolls_back() {
        let drops = Rc::new(Cell::new(0));
        let mut block = RawBlock::<Tracked, _>::try_with_capacity_in(4, Global).unwrap();
        let res = catch_unwind(AssertUnwindSafe(|| {
            let mut ctor = Constructor::for_range(&mut block, 0, 4, 0);
            ctor.push(Tracked(drops.clone()));
            ctor.push(Tracked(drops.clone()));
            ctor.push_with(|| panic!("construction failed"));
        }));
        assert!(res.is_err());
        assert_eq!(drops.get(), 2);
    }

    #[test]
    fn constructor_restores_tail() {
        let mut block = RawBlock::<u32, _>::try_with_capacity_in(6, Global).unwrap();
        unsafe {
            block.construct_copied(0, &[1, 2, 3, 4]);
            block.shift(2, 4, 2);
        }
        {
            let mut ctor = Constructor::for_range(&mut block, 2, 2, 2);
            ctor.push(7);
            assert!(!ctor.full());
        }
        let values: [u32; 4] = core::array::from_fn(|idx| unsafe { block.read_at(idx) });
        assert_eq!(values, [1, 2, 3, 4]);
    }

    #[test]
    fn constructor_complete() {
        let mut block = RawBlock::<u32, _>::try_with_capacity_in(2, Global).unwrap();
        let mut ctor = Constructor::for_range(&mut block, 0, 2, 0);
        ctor.push(5);
        ctor.push_default();
        assert!(ctor.full());
        assert_eq!(ctor.complete(), 2);
        assert_eq!(unsafe { block.read_at(1) }, 0);
    }

    #[test]
    fn tail_shift_closes_gap() {
        let mut block = RawBlock::<u32, _>::try_with_capacity_in(5, Global).unwrap();
        let mut len = 5;
        unsafe {
            block.construct_copied(0, &[1, 2, 3, 4, 5]);
            let _shift = TailShift::new(block.as_mut_ptr(), 1, 3, 2, &mut len);
        }
        assert_eq!(len, 3);
        let values: [u32; 3] = core::array::from_fn(|idx| unsafe { block.read_at(idx) });
        assert_eq!(values, [1, 4, 5]);
    }
}
