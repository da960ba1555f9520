//! A ring buffer with fixed capacity.
//!
//! It can be stored directly on the stack if needed.
//!
//! `RingBuffer` has `O(1)` inserts and removals at both ends of the
//! container and `O(1)` indexing like a vector. The capacity is the length of
//! the backing array and never changes: pushing into a full buffer is a
//! programmer error and panics, it neither overwrites nor grows. Use
//! `try_push_back`/`try_push_front` when a full buffer is an expected
//! condition.
//!
//! # Feature Flags
//! The **fixedring** crate has the following cargo feature flags:
//!
//! - `std`
//!   - Optional, enabled by default
//!   - Use libstd; implements `std::error::Error` for `CapacityError`
//!
//!
//! - `use_generic_array`
//!   - Optional
//!   - Depend on generic-array and allow using it just like a fixed
//!     size array for `RingBuffer` storage.
//!
//!
//! # Usage
//!
//! First, add the following to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! fixedring = "0.1"
//! ```
//!
//! To use fixedring in a `#![no_std]` crate:
//!
//! ```toml
//! [dependencies]
//! fixedring = { version = "0.1", default-features = false }
//! ```
//!
//! # Capacity
//!
//! Every slot of the backing array is usable: `RingBuffer<[T; 5]>` holds five
//! elements. Buffers of different capacities compare equal when their
//! contents are equal.
//!
//! # Examples
//! ```
//! use fixedring::RingBuffer;
//!
//! let mut buf: RingBuffer<[_; 3]> = RingBuffer::new();
//!
//! buf.push_back(1);
//! buf.push_back(2);
//! buf.push_front(0);
//! assert!(buf.is_full());
//!
//! assert_eq!(buf[0], 0);
//! assert_eq!(*buf.back(), 2);
//!
//! assert_eq!(buf.pop_front(), 0);
//! buf.push_back(3);
//! assert_eq!(buf.iter().collect::<Vec<_>>(), [&1, &2, &3]);
//!
//! let mut other: RingBuffer<[_; 8]> = RingBuffer::new();
//! other.extend(vec![1, 2, 3]);
//! assert_eq!(buf, other);
//! ```

#![cfg_attr(not(any(feature = "std", test)), no_std)]

#![deny(missing_docs)]

pub use odds::IndexRange as RangeArgument;

mod array;
mod ring;
mod utils;
pub mod error;

pub use array::Array;
pub use error::CapacityError;
pub use ring::{Drain, IntoIter, Iter, IterMut, RingBuffer};

#[cfg(test)]
mod proptests;

#[cfg(test)]
#[cfg(feature = "use_generic_array")]
mod test_generic_array {
    use generic_array::GenericArray;
    use generic_array::typenum::U41;

    use super::RingBuffer;

    #[test]
    fn test_simple() {
        let mut vec: RingBuffer<GenericArray<i32, U41>> = RingBuffer::new();

        assert_eq!(vec.len(), 0);
        assert_eq!(vec.capacity(), 41);
        vec.extend(0..20);
        assert_eq!(vec.len(), 20);
        assert_eq!(vec.into_iter().take(5).collect::<Vec<_>>(), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_wraps_like_plain_array() {
        let mut generic: RingBuffer<GenericArray<i32, U41>> = RingBuffer::new();
        let mut plain: RingBuffer<[i32; 41]> = RingBuffer::new();
        for i in 0..100 {
            if generic.is_full() {
                generic.pop_front();
                plain.pop_front();
            }
            generic.push_back(i);
            plain.push_back(i);
        }
        assert!(generic == plain);
    }
}
