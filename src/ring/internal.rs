use core::ptr;

use super::RingBuffer;
use crate::array::Array;
use crate::utils::*;

impl<A: Array> RingBuffer<A> {
    #[inline]
    pub(super) fn ptr(&self) -> *const A::Item {
        self.xs.as_ptr() as *const A::Item
    }

    #[inline]
    pub(super) fn ptr_mut(&mut self) -> *mut A::Item {
        self.xs.as_mut_ptr() as *mut A::Item
    }

    /// Physical slot of logical `index`.
    #[inline]
    pub(super) fn physical(&self, index: usize) -> usize {
        position(self.head, index, A::capacity())
    }

    /// Caller guarantees `offset` holds a live element.
    #[inline]
    pub(super) unsafe fn slot(&self, offset: usize) -> &A::Item {
        debug_assert!(offset < A::capacity());
        &*self.ptr().add(offset)
    }

    /// Caller guarantees `offset` holds a live element.
    #[inline]
    pub(super) unsafe fn slot_mut(&mut self, offset: usize) -> &mut A::Item {
        debug_assert!(offset < A::capacity());
        &mut *self.ptr_mut().add(offset)
    }

    /// Moves the element out of `offset`, leaving the slot logically empty.
    #[inline]
    pub(super) unsafe fn buffer_read(&mut self, offset: usize) -> A::Item {
        debug_assert!(offset < A::capacity());
        ptr::read(self.ptr().add(offset))
    }

    /// Writes into `offset` without dropping whatever stale bits were there.
    #[inline]
    pub(super) unsafe fn buffer_write(&mut self, offset: usize, element: A::Item) {
        debug_assert!(offset < A::capacity());
        ptr::write(self.ptr_mut().add(offset), element);
    }

    /// Moves `len` elements starting at physical slot `src` forward by
    /// `distance` slots (toward the back), wrapping.
    ///
    /// Walks from the last element so overlapping ranges are safe.
    pub(super) unsafe fn shift_back(&mut self, src: usize, len: usize, distance: usize) {
        // shift by 2, len 3:
        //
        //        S   D
        // 1 [. . A B C . . . .]
        // 2 [. . A B C . C . .]
        // 3 [. . A B C B C . .]
        // 4 [. . A B A B C . .]
        //
        let cap = A::capacity();
        if len == 0 || distance == 0 {
            return;
        }
        debug_assert!(len + distance <= cap,
                      "shb src={} len={} dist={} cap={}",
                      src,
                      len,
                      distance,
                      cap);
        let p = self.ptr_mut();
        for i in (0..len).rev() {
            let from = wrap_add(src, i, cap);
            let to = wrap_add(from, distance, cap);
            ptr::copy(p.add(from), p.add(to), 1);
        }
    }

    /// Moves `len` elements starting at physical slot `src` backward by
    /// `distance` slots (toward the front), wrapping.
    ///
    /// Walks from the first element so overlapping ranges are safe.
    pub(super) unsafe fn shift_front(&mut self, src: usize, len: usize, distance: usize) {
        let cap = A::capacity();
        if len == 0 || distance == 0 {
            return;
        }
        debug_assert!(len + distance <= cap,
                      "shf src={} len={} dist={} cap={}",
                      src,
                      len,
                      distance,
                      cap);
        let p = self.ptr_mut();
        for i in 0..len {
            let from = wrap_add(src, i, cap);
            let to = wrap_sub(from, distance, cap);
            ptr::copy(p.add(from), p.add(to), 1);
        }
    }
}
