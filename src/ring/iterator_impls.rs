use core::iter::FusedIterator;

use super::*;

impl<'a, T> Clone for Iter<'a, T> {
    fn clone(&self) -> Self {
        Iter {
            first: self.first.clone(),
            second: self.second.clone(),
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<&'a T> {
        self.first.next().or_else(|| self.second.next())
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.first.len() + self.second.len();
        (len, Some(len))
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    #[inline]
    fn next_back(&mut self) -> Option<&'a T> {
        self.second.next_back().or_else(|| self.first.next_back())
    }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}

impl<'a, T> FusedIterator for Iter<'a, T> {}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    #[inline]
    fn next(&mut self) -> Option<&'a mut T> {
        match self.first.next() {
            Some(elt) => Some(elt),
            None => self.second.next(),
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.first.len() + self.second.len();
        (len, Some(len))
    }
}

impl<'a, T> DoubleEndedIterator for IterMut<'a, T> {
    #[inline]
    fn next_back(&mut self) -> Option<&'a mut T> {
        match self.second.next_back() {
            Some(elt) => Some(elt),
            None => self.first.next_back(),
        }
    }
}

impl<'a, T> ExactSizeIterator for IterMut<'a, T> {}

impl<'a, T> FusedIterator for IterMut<'a, T> {}

impl<A: Array> Iterator for IntoIter<A> {
    type Item = A::Item;

    #[inline]
    fn next(&mut self) -> Option<A::Item> {
        self.inner.try_pop_front()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.inner.len();
        (len, Some(len))
    }
}

impl<A: Array> DoubleEndedIterator for IntoIter<A> {
    #[inline]
    fn next_back(&mut self) -> Option<A::Item> {
        self.inner.try_pop_back()
    }
}

impl<A: Array> ExactSizeIterator for IntoIter<A> {}

impl<A: Array> FusedIterator for IntoIter<A> {}

impl<'a, A> Iterator for Drain<'a, A>
    where A: Array,
          A::Item: 'a
{
    type Item = A::Item;

    #[inline]
    fn next(&mut self) -> Option<A::Item> {
        if self.next == self.end {
            return None;
        }
        let idx = self.deque.physical(self.next);
        self.next += 1;
        unsafe { Some(self.deque.buffer_read(idx)) }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.end - self.next;
        (len, Some(len))
    }
}

impl<'a, A> DoubleEndedIterator for Drain<'a, A>
    where A: Array,
          A::Item: 'a
{
    #[inline]
    fn next_back(&mut self) -> Option<A::Item> {
        if self.next == self.end {
            return None;
        }
        self.end -= 1;
        let idx = self.deque.physical(self.end);
        unsafe { Some(self.deque.buffer_read(idx)) }
    }
}

impl<'a, A> ExactSizeIterator for Drain<'a, A>
    where A: Array,
          A::Item: 'a
{
}

impl<'a, A> FusedIterator for Drain<'a, A>
    where A: Array,
          A::Item: 'a
{
}

impl<'a, A> Drop for Drain<'a, A>
    where A: Array,
          A::Item: 'a
{
    fn drop(&mut self) {
        for _ in self.by_ref() {}

        // h = head; s = drained start; e = drained end (after)
        //
        //        h   s   e
        // [. . . o o x x o o . . .]
        //
        // The shorter of the two kept runs is moved over the gap.
        let cap = A::capacity();
        let after = self.after;
        let front_len = self.front_len;
        let back_len = self.back_len;
        let drained = after - front_len;
        let deque = &mut *self.deque;

        if back_len == 0 {
            // front run already in place; drain() set len and tail for it
            return;
        }

        // empty range: both runs are still adjacent
        if drained != 0 {
            unsafe {
                if front_len <= back_len {
                    deque.shift_back(deque.head, front_len, drained);
                    deque.head = wrap_add(deque.head, drained, cap);
                } else {
                    let src = deque.physical(after);
                    deque.shift_front(src, back_len, drained);
                }
            }
        }
        deque.len = front_len + back_len;
        deque.tail = wrap_add(deque.head, deque.len, cap);
    }
}
