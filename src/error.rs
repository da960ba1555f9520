//! Error types.

#[cfg(feature = "std")]
use std::error::Error;
use core::fmt;

/// Error value indicating insufficient capacity
///
/// Returned by `try_push_back` and `try_push_front` when the buffer is full.
/// The buffer is left untouched and the rejected element is handed back.
#[derive(Clone, Copy, Eq, Ord, PartialEq, PartialOrd)]
pub struct CapacityError<T = ()> {
    /// The element that caused the error.
    pub element: T,
}

const CAPERROR: &str = "insufficient capacity";

impl<T> CapacityError<T> {
    /// Creates a new `CapacityError` holding `element`.
    pub const fn new(element: T) -> CapacityError<T> {
        CapacityError { element }
    }

    /// Extracts the element that caused the error.
    pub fn into_element(self) -> T {
        self.element
    }

    /// Converts the error into a `CapacityError` with no element.
    pub fn simplify(self) -> CapacityError {
        CapacityError { element: () }
    }
}

#[cfg(feature = "std")]
impl<T> Error for CapacityError<T> {}

impl<T> fmt::Display for CapacityError<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", CAPERROR)
    }
}

impl<T> fmt::Debug for CapacityError<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "CapacityError: {}", CAPERROR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_and_debug() {
        let err = CapacityError::new(7);
        assert_eq!(format!("{}", err), "insufficient capacity");
        assert_eq!(format!("{:?}", err), "CapacityError: insufficient capacity");
    }

    #[test]
    fn element_round_trip() {
        let err = CapacityError::new("x");
        assert_eq!(err.element, "x");
        assert_eq!(err.simplify(), CapacityError::new(()));
        assert_eq!(err.into_element(), "x");
    }

    #[cfg(feature = "std")]
    #[test]
    fn boxes_as_std_error() {
        let err: Box<dyn Error> = Box::new(CapacityError::new(1u8));
        assert_eq!(err.to_string(), "insufficient capacity");
    }
}
