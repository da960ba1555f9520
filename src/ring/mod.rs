use core::cmp;
use core::mem::MaybeUninit;
use core::ptr;
use core::slice;

use crate::array::Array;
use crate::error::CapacityError;
use crate::utils::*;
use crate::RangeArgument;

mod internal;
mod iterator_impls;
mod trait_impls;

/// `RingBuffer` is a fixed capacity ring buffer.
///
/// It can be stored directly on the stack if needed.
///
/// The backing array type `A` fixes the capacity: a `RingBuffer<[T; 5]>`
/// holds at most five elements, all five slots usable. Elements can be
/// pushed and popped at both ends and indexed by their position relative to
/// the front.
///
/// Operations whose precondition does not hold (popping or peeking an empty
/// buffer, pushing into a full one, indexing past the end) panic before any
/// state is touched. `try_push_back`, `try_push_front`, `try_pop_back`,
/// `try_pop_front` and `get` are the non-panicking counterparts.
pub struct RingBuffer<A: Array> {
    xs: MaybeUninit<A>,
    head: usize,
    tail: usize,
    len: usize,
}

/// `RingBuffer` iterator
#[must_use = "iterator adaptors are lazy and do nothing unless consumed"]
pub struct Iter<'a, T: 'a> {
    first: slice::Iter<'a, T>,
    second: slice::Iter<'a, T>,
}

/// `RingBuffer` mutable iterator
#[must_use = "iterator adaptors are lazy and do nothing unless consumed"]
pub struct IterMut<'a, T: 'a> {
    first: slice::IterMut<'a, T>,
    second: slice::IterMut<'a, T>,
}

/// A by-value `RingBuffer` iterator
#[must_use = "iterator adaptors are lazy and do nothing unless consumed"]
pub struct IntoIter<A: Array> {
    inner: RingBuffer<A>,
}

/// A draining `RingBuffer` iterator
pub struct Drain<'a, A>
    where A: Array,
          A::Item: 'a
{
    deque: &'a mut RingBuffer<A>,
    // logical index range still to be yielded
    next: usize,
    end: usize,
    // logical end of the drained range, fixed at creation
    after: usize,
    // elements kept before and after the drained range
    front_len: usize,
    back_len: usize,
}

impl<A: Array> RingBuffer<A> {
    /// Creates an empty `RingBuffer`.
    ///
    /// # Panics
    ///
    /// Panics if the backing array has zero length.
    ///
    /// # Examples
    ///
    /// ```
    /// use fixedring::RingBuffer;
    ///
    /// let buf: RingBuffer<[usize; 3]> = RingBuffer::new();
    /// assert!(buf.is_empty());
    /// ```
    #[inline]
    pub fn new() -> RingBuffer<A> {
        assert!(A::capacity() > 0, "RingBuffer needs a capacity of at least 1");
        RingBuffer {
            xs: MaybeUninit::uninit(),
            head: 0,
            tail: 0,
            len: 0,
        }
    }

    /// Return the capacity of the `RingBuffer`.
    ///
    /// # Examples
    ///
    /// ```
    /// use fixedring::RingBuffer;
    ///
    /// let buf: RingBuffer<[usize; 4]> = RingBuffer::new();
    /// assert_eq!(buf.capacity(), 4);
    /// ```
    #[inline]
    pub fn capacity(&self) -> usize {
        A::capacity()
    }

    /// Returns the number of elements in the `RingBuffer`.
    ///
    /// # Examples
    ///
    /// ```
    /// use fixedring::RingBuffer;
    ///
    /// let mut v: RingBuffer<[_; 4]> = RingBuffer::new();
    /// assert_eq!(v.len(), 0);
    /// v.push_back(1);
    /// assert_eq!(v.len(), 1);
    /// ```
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the buffer contains no elements
    ///
    /// # Examples
    ///
    /// ```
    /// use fixedring::RingBuffer;
    ///
    /// let mut v: RingBuffer<[_; 4]> = RingBuffer::new();
    /// assert!(v.is_empty());
    /// v.push_front(1);
    /// assert!(!v.is_empty());
    /// ```
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns true if the buffer is full.
    ///
    /// # Examples
    ///
    /// ```
    /// use fixedring::RingBuffer;
    ///
    /// let mut buf: RingBuffer<[_; 1]> = RingBuffer::new();
    /// assert!(!buf.is_full());
    /// buf.push_back(1);
    /// assert!(buf.is_full());
    /// ```
    #[inline]
    pub fn is_full(&self) -> bool {
        self.len == A::capacity()
    }

    /// Retrieves an element in the `RingBuffer` by index.
    ///
    /// Element at index 0 is the front of the queue.
    ///
    /// # Examples
    ///
    /// ```
    /// use fixedring::RingBuffer;
    ///
    /// let mut buf: RingBuffer<[_; 4]> = RingBuffer::new();
    /// buf.push_back(3);
    /// buf.push_back(4);
    /// buf.push_back(5);
    /// assert_eq!(buf.get(1), Some(&4));
    /// assert_eq!(buf.get(3), None);
    /// ```
    #[inline]
    pub fn get(&self, index: usize) -> Option<&A::Item> {
        if index < self.len {
            let idx = self.physical(index);
            unsafe { Some(self.slot(idx)) }
        } else {
            None
        }
    }

    /// Retrieves an element in the `RingBuffer` mutably by index.
    ///
    /// Element at index 0 is the front of the queue.
    ///
    /// # Examples
    ///
    /// ```
    /// use fixedring::RingBuffer;
    ///
    /// let mut buf: RingBuffer<[_; 4]> = RingBuffer::new();
    /// buf.push_back(3);
    /// buf.push_back(4);
    /// if let Some(elem) = buf.get_mut(1) {
    ///     *elem = 7;
    /// }
    /// assert_eq!(buf[1], 7);
    /// ```
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut A::Item> {
        if index < self.len {
            let idx = self.physical(index);
            unsafe { Some(self.slot_mut(idx)) }
        } else {
            None
        }
    }

    /// Provides a reference to the front element.
    ///
    /// # Panics
    ///
    /// Panics if the buffer is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use fixedring::RingBuffer;
    ///
    /// let mut buf: RingBuffer<[_; 3]> = RingBuffer::new();
    /// buf.push_back(1);
    /// buf.push_back(2);
    /// assert_eq!(*buf.front(), 1);
    /// ```
    #[inline]
    pub fn front(&self) -> &A::Item {
        assert!(!self.is_empty(), "front() called on an empty RingBuffer");
        unsafe { self.slot(self.head) }
    }

    /// Provides a mutable reference to the front element.
    ///
    /// # Panics
    ///
    /// Panics if the buffer is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use fixedring::RingBuffer;
    ///
    /// let mut buf: RingBuffer<[_; 3]> = RingBuffer::new();
    /// buf.push_back(1);
    /// buf.push_back(2);
    /// *buf.front_mut() = 9;
    /// assert_eq!(buf[0], 9);
    /// ```
    #[inline]
    pub fn front_mut(&mut self) -> &mut A::Item {
        assert!(!self.is_empty(), "front_mut() called on an empty RingBuffer");
        let head = self.head;
        unsafe { self.slot_mut(head) }
    }

    /// Provides a reference to the back element.
    ///
    /// # Panics
    ///
    /// Panics if the buffer is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use fixedring::RingBuffer;
    ///
    /// let mut buf: RingBuffer<[_; 3]> = RingBuffer::new();
    /// buf.push_back(1);
    /// buf.push_back(2);
    /// assert_eq!(*buf.back(), 2);
    /// ```
    #[inline]
    pub fn back(&self) -> &A::Item {
        assert!(!self.is_empty(), "back() called on an empty RingBuffer");
        let last = wrap_dec(self.tail, A::capacity());
        unsafe { self.slot(last) }
    }

    /// Provides a mutable reference to the back element.
    ///
    /// # Panics
    ///
    /// Panics if the buffer is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use fixedring::RingBuffer;
    ///
    /// let mut buf: RingBuffer<[_; 3]> = RingBuffer::new();
    /// buf.push_back(1);
    /// buf.push_back(2);
    /// *buf.back_mut() = 9;
    /// assert_eq!(buf[1], 9);
    /// ```
    #[inline]
    pub fn back_mut(&mut self) -> &mut A::Item {
        assert!(!self.is_empty(), "back_mut() called on an empty RingBuffer");
        let last = wrap_dec(self.tail, A::capacity());
        unsafe { self.slot_mut(last) }
    }

    /// Appends an element to the back of the buffer.
    ///
    /// # Panics
    ///
    /// Panics if the buffer is full. The buffer never overwrites or grows.
    ///
    /// # Examples
    ///
    /// ```
    /// use fixedring::RingBuffer;
    ///
    /// let mut buf: RingBuffer<[_; 3]> = RingBuffer::new();
    /// buf.push_back(1);
    /// buf.push_back(3);
    /// assert_eq!(3, *buf.back());
    /// ```
    #[inline]
    pub fn push_back(&mut self, element: A::Item) {
        assert!(!self.is_full(), "push_back() called on a full RingBuffer");
        let tail = self.tail;
        unsafe { self.buffer_write(tail, element) }
        self.tail = wrap_inc(tail, A::capacity());
        self.len += 1;
    }

    /// Prepends an element to the front of the buffer.
    ///
    /// # Panics
    ///
    /// Panics if the buffer is full. The buffer never overwrites or grows.
    ///
    /// # Examples
    ///
    /// ```
    /// use fixedring::RingBuffer;
    ///
    /// let mut buf: RingBuffer<[_; 3]> = RingBuffer::new();
    /// buf.push_front(1);
    /// buf.push_front(2);
    /// assert_eq!(*buf.front(), 2);
    /// ```
    #[inline]
    pub fn push_front(&mut self, element: A::Item) {
        assert!(!self.is_full(), "push_front() called on a full RingBuffer");
        let head = wrap_dec(self.head, A::capacity());
        unsafe { self.buffer_write(head, element) }
        self.head = head;
        self.len += 1;
    }

    /// Appends an element to the back of the buffer, or hands it back inside
    /// a `CapacityError` if the buffer is full.
    ///
    /// # Examples
    ///
    /// ```
    /// use fixedring::RingBuffer;
    ///
    /// let mut buf: RingBuffer<[_; 1]> = RingBuffer::new();
    /// assert!(buf.try_push_back(1).is_ok());
    /// assert_eq!(buf.try_push_back(2).unwrap_err().element, 2);
    /// assert_eq!(buf.len(), 1);
    /// ```
    pub fn try_push_back(&mut self, element: A::Item) -> Result<(), CapacityError<A::Item>> {
        if self.is_full() {
            return Err(CapacityError::new(element));
        }
        self.push_back(element);
        Ok(())
    }

    /// Prepends an element to the front of the buffer, or hands it back
    /// inside a `CapacityError` if the buffer is full.
    ///
    /// # Examples
    ///
    /// ```
    /// use fixedring::RingBuffer;
    ///
    /// let mut buf: RingBuffer<[_; 1]> = RingBuffer::new();
    /// assert!(buf.try_push_front(1).is_ok());
    /// assert!(buf.try_push_front(2).is_err());
    /// assert_eq!(*buf.front(), 1);
    /// ```
    pub fn try_push_front(&mut self, element: A::Item) -> Result<(), CapacityError<A::Item>> {
        if self.is_full() {
            return Err(CapacityError::new(element));
        }
        self.push_front(element);
        Ok(())
    }

    /// Removes the last element and returns it.
    ///
    /// Callers that only want the removal can ignore the result; the element
    /// is dropped right away.
    ///
    /// # Panics
    ///
    /// Panics if the buffer is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use fixedring::RingBuffer;
    ///
    /// let mut buf: RingBuffer<[_; 3]> = RingBuffer::new();
    /// buf.push_back(1);
    /// buf.push_back(3);
    /// assert_eq!(buf.pop_back(), 3);
    /// assert_eq!(buf.len(), 1);
    /// ```
    #[inline]
    pub fn pop_back(&mut self) -> A::Item {
        assert!(!self.is_empty(), "pop_back() called on an empty RingBuffer");
        let tail = wrap_dec(self.tail, A::capacity());
        self.tail = tail;
        self.len -= 1;
        unsafe { self.buffer_read(tail) }
    }

    /// Removes the first element and returns it.
    ///
    /// # Panics
    ///
    /// Panics if the buffer is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use fixedring::RingBuffer;
    ///
    /// let mut buf: RingBuffer<[_; 3]> = RingBuffer::new();
    /// buf.push_back(1);
    /// buf.push_back(2);
    /// assert_eq!(buf.pop_front(), 1);
    /// assert_eq!(buf.pop_front(), 2);
    /// assert!(buf.is_empty());
    /// ```
    #[inline]
    pub fn pop_front(&mut self) -> A::Item {
        assert!(!self.is_empty(), "pop_front() called on an empty RingBuffer");
        let head = self.head;
        self.head = wrap_inc(head, A::capacity());
        self.len -= 1;
        unsafe { self.buffer_read(head) }
    }

    /// Removes the last element and returns it, or `None` if the buffer is
    /// empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use fixedring::RingBuffer;
    ///
    /// let mut buf: RingBuffer<[_; 3]> = RingBuffer::new();
    /// assert_eq!(buf.try_pop_back(), None);
    /// buf.push_back(1);
    /// assert_eq!(buf.try_pop_back(), Some(1));
    /// ```
    #[inline]
    pub fn try_pop_back(&mut self) -> Option<A::Item> {
        if self.is_empty() {
            None
        } else {
            Some(self.pop_back())
        }
    }

    /// Removes the first element and returns it, or `None` if the buffer is
    /// empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use fixedring::RingBuffer;
    ///
    /// let mut buf: RingBuffer<[_; 3]> = RingBuffer::new();
    /// assert_eq!(buf.try_pop_front(), None);
    /// buf.push_back(1);
    /// buf.push_back(2);
    /// assert_eq!(buf.try_pop_front(), Some(1));
    /// ```
    #[inline]
    pub fn try_pop_front(&mut self) -> Option<A::Item> {
        if self.is_empty() {
            None
        } else {
            Some(self.pop_front())
        }
    }

    /// Swaps elements at indices `i` and `j`.
    ///
    /// `i` and `j` may be equal.
    ///
    /// # Panics
    ///
    /// Panics if there is no element with either index.
    ///
    /// # Examples
    ///
    /// ```
    /// use fixedring::RingBuffer;
    ///
    /// let mut buf: RingBuffer<[_; 4]> = RingBuffer::new();
    /// buf.push_back(3);
    /// buf.push_back(4);
    /// buf.push_back(5);
    /// buf.swap(0, 2);
    /// assert_eq!(buf[0], 5);
    /// assert_eq!(buf[2], 3);
    /// ```
    #[inline]
    pub fn swap(&mut self, i: usize, j: usize) {
        assert!(i < self.len, "swap index {} out of bounds for len {}", i, self.len);
        assert!(j < self.len, "swap index {} out of bounds for len {}", j, self.len);
        let ri = self.physical(i);
        let rj = self.physical(j);
        let p = self.ptr_mut();
        unsafe { ptr::swap(p.add(ri), p.add(rj)) }
    }

    /// Returns `true` if the `RingBuffer` contains an element equal to the
    /// given value.
    ///
    /// # Examples
    ///
    /// ```
    /// use fixedring::RingBuffer;
    ///
    /// let mut buf: RingBuffer<[_; 3]> = RingBuffer::new();
    /// buf.push_back(0);
    /// buf.push_back(1);
    /// assert!(buf.contains(&1));
    /// assert!(!buf.contains(&10));
    /// ```
    pub fn contains(&self, x: &A::Item) -> bool
        where A::Item: PartialEq
    {
        let (a, b) = self.as_slices();
        a.contains(x) || b.contains(x)
    }

    /// Returns a front-to-back iterator.
    ///
    /// # Examples
    ///
    /// ```
    /// use fixedring::RingBuffer;
    ///
    /// let mut buf: RingBuffer<[_; 4]> = RingBuffer::new();
    /// buf.push_back(5);
    /// buf.push_back(3);
    /// buf.push_front(4);
    /// let c: Vec<&i32> = buf.iter().collect();
    /// assert_eq!(c, [&4, &5, &3]);
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<'_, A::Item> {
        let (first, second) = self.as_slices();
        Iter {
            first: first.iter(),
            second: second.iter(),
        }
    }

    /// Returns a front-to-back iterator that returns mutable references.
    ///
    /// # Examples
    ///
    /// ```
    /// use fixedring::RingBuffer;
    ///
    /// let mut buf: RingBuffer<[_; 4]> = RingBuffer::new();
    /// buf.push_back(5);
    /// buf.push_back(3);
    /// for num in buf.iter_mut() {
    ///     *num -= 2;
    /// }
    /// assert_eq!(buf.iter().collect::<Vec<_>>(), [&3, &1]);
    /// ```
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, A::Item> {
        let (first, second) = self.as_mut_slices();
        IterMut {
            first: first.iter_mut(),
            second: second.iter_mut(),
        }
    }

    /// Returns a pair of slices which contain, in order, the contents of the
    /// `RingBuffer`.
    ///
    /// The second slice is non-empty only when the contents wrap past the end
    /// of the backing array.
    ///
    /// # Examples
    ///
    /// ```
    /// use fixedring::RingBuffer;
    ///
    /// let mut buf: RingBuffer<[_; 6]> = RingBuffer::new();
    /// buf.push_back(0);
    /// buf.push_back(1);
    /// buf.push_back(2);
    /// assert_eq!(buf.as_slices(), (&[0, 1, 2][..], &[][..]));
    ///
    /// buf.push_front(10);
    /// buf.push_front(9);
    /// assert_eq!(buf.as_slices(), (&[9, 10][..], &[0, 1, 2][..]));
    /// ```
    #[inline]
    pub fn as_slices(&self) -> (&[A::Item], &[A::Item]) {
        let first_len = cmp::min(self.len, A::capacity() - self.head);
        let p = self.ptr();
        unsafe {
            (slice::from_raw_parts(p.add(self.head), first_len),
             slice::from_raw_parts(p, self.len - first_len))
        }
    }

    /// Returns a pair of mutable slices which contain, in order, the contents
    /// of the `RingBuffer`.
    ///
    /// # Examples
    ///
    /// ```
    /// use fixedring::RingBuffer;
    ///
    /// let mut buf: RingBuffer<[_; 5]> = RingBuffer::new();
    /// buf.push_back(0);
    /// buf.push_back(1);
    /// buf.push_front(10);
    /// buf.push_front(9);
    ///
    /// buf.as_mut_slices().0[0] = 42;
    /// buf.as_mut_slices().1[0] = 24;
    /// assert_eq!(buf.as_slices(), (&[42, 10][..], &[24, 1][..]));
    /// ```
    #[inline]
    pub fn as_mut_slices(&mut self) -> (&mut [A::Item], &mut [A::Item]) {
        let first_len = cmp::min(self.len, A::capacity() - self.head);
        let head = self.head;
        let len = self.len;
        let p = self.ptr_mut();
        // [0, len - first_len) never reaches head, so the halves are disjoint
        unsafe {
            (slice::from_raw_parts_mut(p.add(head), first_len),
             slice::from_raw_parts_mut(p, len - first_len))
        }
    }

    /// Create a draining iterator that removes the specified range in the
    /// `RingBuffer` and yields the removed items.
    ///
    /// Note 1: The element range is removed even if the iterator is not
    /// consumed until the end.
    ///
    /// Note 2: If the `Drain` value is leaked (eg. with `mem::forget`) the
    /// buffer keeps only the elements before the range; the rest are leaked,
    /// never dropped twice.
    ///
    /// # Panics
    ///
    /// Panics if the starting point is greater than the end point or if
    /// the end point is greater than the length of the buffer.
    ///
    /// # Examples
    ///
    /// ```
    /// use fixedring::RingBuffer;
    ///
    /// let mut buf: RingBuffer<[_; 4]> = vec![1, 2, 3].into_iter().collect();
    /// let drain1: Vec<_> = buf.drain(2..).collect();
    /// assert_eq!(drain1, vec![3]);
    ///
    /// // A full range clears all contents
    /// let drain2: Vec<_> = buf.drain(..).collect();
    /// assert_eq!(drain2, vec![1, 2]);
    /// assert!(buf.is_empty());
    /// ```
    pub fn drain<R>(&mut self, range: R) -> Drain<'_, A>
        where R: RangeArgument<usize>
    {
        let len = self.len;
        let start = range.start().unwrap_or(0);
        let end = range.end().unwrap_or(len);
        assert!(start <= end, "drain lower bound was too large");
        assert!(end <= len, "drain upper bound was too large");

        // Until the drain is dropped the buffer owns only the front part.
        self.len = start;
        self.tail = wrap_add(self.head, start, A::capacity());

        Drain {
            deque: self,
            next: start,
            end,
            after: end,
            front_len: start,
            back_len: len - end,
        }
    }

    /// Clears the buffer, removing all values.
    ///
    /// # Examples
    ///
    /// ```
    /// use fixedring::RingBuffer;
    ///
    /// let mut buf: RingBuffer<[_; 4]> = RingBuffer::new();
    /// buf.push_back(1);
    /// buf.clear();
    /// assert!(buf.is_empty());
    /// ```
    #[inline]
    pub fn clear(&mut self) {
        self.drain(..);
    }
}
