//! Error types for tfm operations.
//!
//! The math kernel has no recoverable runtime errors: every failure is a
//! caller precondition. The fallible constructors and accessors report
//! those violations through [`Error`] so they fail at the call site
//! instead of silently truncating, padding or wrapping an index.
//!
//! # Overview
//!
//! - **Shape errors**: building a vector or matrix from a slice of the wrong
//!   length ([`ElementCount`](Error::ElementCount)).
//! - **Bounds errors**: component or element access outside the fixed size
//!   ([`IndexOutOfRange`](Error::IndexOutOfRange),
//!   [`ElementOutOfRange`](Error::ElementOutOfRange)).
//!
//! Degenerate numeric inputs (zero-length normalization, zero inverse scale)
//! are not errors and never produce one.
//!
//! # Usage
//!
//! ```rust
//! use tfm_core::{Error, Result};
//!
//! fn component(values: &[f32], i: usize) -> Result<f32> {
//!     values
//!         .get(i)
//!         .copied()
//!         .ok_or(Error::index_out_of_range(i, values.len()))
//! }
//!
//! assert!(component(&[1.0, 2.0], 2).is_err());
//! ```

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Contract violations reported by vector, matrix and quaternion APIs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A fixed-size value was built from the wrong number of elements.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tfm_core::Error;
    ///
    /// let err = Error::element_count(16, 9);
    /// assert!(err.to_string().contains("16"));
    /// ```
    #[error("expected {expected} elements, got {got}")]
    ElementCount {
        /// Element count required by the type
        expected: usize,
        /// Element count supplied
        got: usize,
    },

    /// A vector component index is outside `[0, len)`.
    #[error("component index {index} out of range for vector of length {len}")]
    IndexOutOfRange {
        /// Index that was requested
        index: usize,
        /// Vector dimension
        len: usize,
    },

    /// A matrix element `(col, row)` is outside the `size x size` grid.
    #[error("element ({col}, {row}) out of range for {size}x{size} matrix")]
    ElementOutOfRange {
        /// Column index that was requested
        col: usize,
        /// Row index that was requested
        row: usize,
        /// Matrix size
        size: usize,
    },
}

impl Error {
    /// Creates an [`Error::ElementCount`] error.
    #[inline]
    pub fn element_count(expected: usize, got: usize) -> Self {
        Self::ElementCount { expected, got }
    }

    /// Creates an [`Error::IndexOutOfRange`] error.
    #[inline]
    pub fn index_out_of_range(index: usize, len: usize) -> Self {
        Self::IndexOutOfRange { index, len }
    }

    /// Creates an [`Error::ElementOutOfRange`] error.
    ///
    /// # Arguments
    ///
    /// * `col` - Column index that was accessed
    /// * `row` - Row index that was accessed
    /// * `size` - Matrix size (2 or 4)
    #[inline]
    pub fn element_out_of_range(col: usize, row: usize, size: usize) -> Self {
        Self::ElementOutOfRange { col, row, size }
    }

    /// Returns `true` if this is a shape (element count) error.
    #[inline]
    pub fn is_shape_error(&self) -> bool {
        matches!(self, Self::ElementCount { .. })
    }

    /// Returns `true` if this is a bounds-related error.
    #[inline]
    pub fn is_bounds_error(&self) -> bool {
        matches!(
            self,
            Self::IndexOutOfRange { .. } | Self::ElementOutOfRange { .. }
        )
    }
}

/// Checks that `got` matches the element count a type requires.
///
/// # Example
///
/// ```rust
/// use tfm_core::check_element_count;
///
/// assert!(check_element_count(4, 4).is_ok());
/// assert!(check_element_count(4, 3).is_err());
/// ```
#[inline]
pub fn check_element_count(expected: usize, got: usize) -> Result<()> {
    if expected == got {
        Ok(())
    } else {
        Err(Error::element_count(expected, got))
    }
}
