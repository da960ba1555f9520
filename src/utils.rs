//! Index arithmetic on a ring of `capacity` slots.
//!
//! All functions expect `capacity >= 1` and indices already inside
//! `[0, capacity)`.

/// Advances `index` by one slot, wrapping to 0 at `capacity`.
#[inline]
pub fn wrap_inc(index: usize, capacity: usize) -> usize {
    debug_assert!(index < capacity);
    let next = index + 1;
    if next == capacity { 0 } else { next }
}

/// Moves `index` back by one slot, wrapping to `capacity - 1` from 0.
#[inline]
pub fn wrap_dec(index: usize, capacity: usize) -> usize {
    debug_assert!(index < capacity);
    if index == 0 { capacity - 1 } else { index - 1 }
}

/// `(index + addend) mod capacity`.
#[inline]
pub fn wrap_add(index: usize, addend: usize, capacity: usize) -> usize {
    debug_assert!(addend <= capacity);
    (index + addend) % capacity
}

/// `(index - subtrahend) mod capacity`.
#[inline]
pub fn wrap_sub(index: usize, subtrahend: usize, capacity: usize) -> usize {
    debug_assert!(subtrahend <= capacity);
    (index + capacity - subtrahend) % capacity
}

/// Maps logical index `index` of a ring starting at `head` to its physical slot.
///
/// Agrees with `wrap_add(head, index, capacity)` for every `index < capacity`
/// but needs no division.
#[inline]
pub fn position(head: usize, index: usize, capacity: usize) -> usize {
    debug_assert!(head < capacity);
    debug_assert!(index < capacity);
    let until_end = capacity - head;
    if index >= until_end {
        index - until_end
    } else {
        head + index
    }
}
