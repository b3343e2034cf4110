//! Error handling.

use core::alloc::{Layout, LayoutError};
use core::fmt;

/// An enumeration of error types raised by vector storage and its operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StorageError {
    /// The memory provider could not satisfy an acquisition.
    AllocError(Layout),
    /// An element count overflowed the addressable range.
    CapacityLimit,
    /// The block layout for the requested element count was not representable.
    LayoutError(LayoutError),
    /// A reallocation was requested below the number of live elements.
    LengthError {
        /// The requested capacity.
        requested: usize,
        /// The number of live elements at the time of the request.
        length: usize,
    },
    /// A checked position was outside of the live range.
    OutOfRange {
        /// The offending position.
        index: usize,
        /// The number of live elements at the time of the request.
        length: usize,
    },
}

impl StorageError {
    /// Generic description of this error.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AllocError(_) => "Allocation error",
            Self::CapacityLimit => "Exceeded storage capacity limit",
            Self::LayoutError(_) => "Layout error",
            Self::LengthError { .. } => "Requested capacity is below the current length",
            Self::OutOfRange { .. } => "Index out of range",
        }
    }

    /// Generate a panic with this error as the reason.
    ///
    /// Allocation failures are routed to the out-of-memory handler.
    #[cold]
    #[inline(never)]
    pub fn panic(self) -> ! {
        if let Self::AllocError(layout) = self {
            crate::alloc::handle_alloc_error(layout);
        } else {
            panic!("{}", self)
        }
    }
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LengthError { requested, length } => write!(
                f,
                "{}: requested {requested}, length {length}",
                self.as_str()
            ),
            Self::OutOfRange { index, length } => {
                write!(f, "{}: index {index}, length {length}", self.as_str())
            }
            _ => f.write_str(self.as_str()),
        }
    }
}

impl From<LayoutError> for StorageError {
    fn from(err: LayoutError) -> Self {
        Self::LayoutError(err)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for StorageError {}

/// An error raised by vector update operations when the value could not be
/// stored. Includes the value that was to be inserted, so it is never
/// dropped on the caller's behalf.
#[derive(Clone)]
pub struct UpdateError<T> {
    pub(crate) error: StorageError,
    pub(crate) value: T,
}

impl<T> UpdateError<T> {
    pub(crate) fn new(error: StorageError, value: T) -> Self {
        Self { error, value }
    }

    /// Generic description of this error
    pub fn as_str(&self) -> &'static str {
        "Update error"
    }

    /// Get a reference to the contained `StorageError`
    pub fn error(&self) -> &StorageError {
        &self.error
    }

    /// Unwrap the inner value of this error
    pub fn into_value(self) -> T {
        self.value
    }

    /// Split this error into the `StorageError` and the rejected value
    pub fn into_parts(self) -> (StorageError, T) {
        (self.error, self.value)
    }

    /// Generate a panic with this error as the reason
    #[cold]
    #[inline(never)]
    pub fn panic(self) -> ! {
        self.error.panic()
    }
}

impl<T> fmt::Debug for UpdateError<T> {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UpdateError")
            .field("error", &self.error)
            .finish_non_exhaustive()
    }
}

impl<T> fmt::Display for UpdateError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.as_str(), self.error)
    }
}

#[cfg(feature = "std")]
impl<T> std::error::Error for UpdateError<T> {}
