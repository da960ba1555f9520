use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::iter::FromIterator;
use core::ops::{Index, IndexMut};

use super::*;

impl<A: Array> Clone for RingBuffer<A>
    where A::Item: Clone
{
    fn clone(&self) -> RingBuffer<A> {
        let mut copy = RingBuffer::new();
        // same capacity on both sides, so this never hits a full buffer
        for elt in self.iter() {
            copy.push_back(elt.clone());
        }
        copy
    }
}

impl<A: Array> Drop for RingBuffer<A> {
    fn drop(&mut self) {
        // Only the live run is dropped; stale slots were moved out already.
        let (front, back) = self.as_mut_slices();
        unsafe {
            ptr::drop_in_place(front);
            ptr::drop_in_place(back);
        }
    }
}

impl<A: Array> Default for RingBuffer<A> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

/// Buffers compare equal when they hold equal elements in the same logical
/// order. The capacities of the two sides need not match.
impl<A, B> PartialEq<RingBuffer<B>> for RingBuffer<A>
    where A: Array,
          B: Array<Item = A::Item>,
          A::Item: PartialEq
{
    fn eq(&self, other: &RingBuffer<B>) -> bool {
        if self.len() != other.len() {
            return false;
        }
        let (sa, sb) = self.as_slices();
        let (oa, ob) = other.as_slices();
        // Split both sides at the two wrap points so every piece is a plain
        // slice comparison:
        //
        // self:  [a b c|d e f]
        // other: [0 1 2 3|4 5]
        //
        // [a b c] == [0 1 2], [d] == [3], [e f] == [4 5]
        if sa.len() <= oa.len() {
            let (oa_head, oa_rest) = oa.split_at(sa.len());
            let (sb_head, sb_rest) = sb.split_at(oa_rest.len());
            sa == oa_head && sb_head == oa_rest && sb_rest == ob
        } else {
            let (sa_head, sa_rest) = sa.split_at(oa.len());
            let (ob_head, ob_rest) = ob.split_at(sa_rest.len());
            sa_head == oa && sa_rest == ob_head && sb == ob_rest
        }
    }
}

#[cfg(test)]
impl<'a, A: Array> PartialEq<&'a [A::Item]> for RingBuffer<A>
    where A::Item: PartialEq
{
    fn eq(&self, other: &&'a [A::Item]) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

#[cfg(test)]
impl<A: Array> PartialEq<Vec<A::Item>> for RingBuffer<A>
    where A::Item: PartialEq
{
    fn eq(&self, other: &Vec<A::Item>) -> bool {
        *self == other.as_slice()
    }
}

impl<A: Array> Eq for RingBuffer<A> where A::Item: Eq {}

/// Lexicographic over the logical contents; a shorter buffer that is a prefix
/// of the other orders first.
impl<A: Array> PartialOrd for RingBuffer<A>
    where A::Item: PartialOrd
{
    fn partial_cmp(&self, other: &RingBuffer<A>) -> Option<Ordering> {
        for (l, r) in self.iter().zip(other.iter()) {
            match l.partial_cmp(r) {
                Some(Ordering::Equal) => {}
                unequal => return unequal,
            }
        }
        self.len().partial_cmp(&other.len())
    }
}

impl<A: Array> Ord for RingBuffer<A>
    where A::Item: Ord
{
    fn cmp(&self, other: &RingBuffer<A>) -> Ordering {
        self.iter()
            .zip(other.iter())
            .map(|(l, r)| l.cmp(r))
            .find(|ord| *ord != Ordering::Equal)
            .unwrap_or_else(|| self.len().cmp(&other.len()))
    }
}

/// Hashes the length and then each element in logical order, so where the
/// contents wrap in storage never reaches the hasher.
impl<A: Array> Hash for RingBuffer<A>
    where A::Item: Hash
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.len());
        for elt in self.iter() {
            elt.hash(state);
        }
    }
}

impl<A: Array> Index<usize> for RingBuffer<A> {
    type Output = A::Item;

    #[inline]
    fn index(&self, index: usize) -> &A::Item {
        assert!(index < self.len,
                "index out of bounds: the len is {} but the index is {}",
                self.len,
                index);
        let idx = position(self.head, index, A::capacity());
        unsafe { self.slot(idx) }
    }
}

impl<A: Array> IndexMut<usize> for RingBuffer<A> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut A::Item {
        assert!(index < self.len,
                "index out of bounds: the len is {} but the index is {}",
                self.len,
                index);
        let idx = position(self.head, index, A::capacity());
        unsafe { self.slot_mut(idx) }
    }
}

/// Collects into a `RingBuffer`.
///
/// # Panics
///
/// Panics if the iterator yields more elements than the capacity.
impl<A: Array> FromIterator<A::Item> for RingBuffer<A> {
    fn from_iter<I: IntoIterator<Item = A::Item>>(iter: I) -> RingBuffer<A> {
        let mut buf = RingBuffer::new();
        for elt in iter {
            buf.push_back(elt);
        }
        buf
    }
}

impl<A: Array> IntoIterator for RingBuffer<A> {
    type Item = A::Item;
    type IntoIter = IntoIter<A>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { inner: self }
    }
}

impl<'a, A: Array> IntoIterator for &'a RingBuffer<A> {
    type Item = &'a A::Item;
    type IntoIter = Iter<'a, A::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, A: Array> IntoIterator for &'a mut RingBuffer<A> {
    type Item = &'a mut A::Item;
    type IntoIter = IterMut<'a, A::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

/// Extend the `RingBuffer` with an iterator, pushing to the back.
///
/// # Panics
///
/// Panics when an element arrives while the buffer is full. Elements pushed
/// before that point stay in the buffer.
impl<A: Array> Extend<A::Item> for RingBuffer<A> {
    fn extend<I: IntoIterator<Item = A::Item>>(&mut self, iter: I) {
        for elt in iter {
            self.push_back(elt);
        }
    }
}

impl<A: Array> fmt::Debug for RingBuffer<A>
    where A::Item: fmt::Debug
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (front, back) = self.as_slices();
        f.debug_list().entries(front).entries(back).finish()
    }
}
