//! Fixed-size backing storage.

/// Trait for fixed size arrays that can back a `RingBuffer`.
///
/// The implementor must be laid out as `capacity()` contiguous `Item`s with
/// no header, so that a pointer to the array is a pointer to its first slot.
pub unsafe trait Array {
    /// The array’s element type
    type Item;

    /// Returns number of elements the array can hold
    fn capacity() -> usize;
}

unsafe impl<T, const N: usize> Array for [T; N] {
    type Item = T;

    #[inline(always)]
    fn capacity() -> usize {
        N
    }
}

#[cfg(feature = "use_generic_array")]
mod generic_impl {
    use super::Array;
    use generic_array::{ArrayLength, GenericArray};

    unsafe impl<T, N> Array for GenericArray<T, N>
    where
        N: ArrayLength<T>,
    {
        type Item = T;

        #[inline(always)]
        fn capacity() -> usize {
            N::to_usize()
        }
    }
}
