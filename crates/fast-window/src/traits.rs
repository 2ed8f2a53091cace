//! Core traits and validation helpers.
//!
//! [`SeriesElement`] abstracts over the floating-point types a sequence can
//! hold. NaN is part of the value domain: it is the sentinel every window
//! generator and apply function uses for "undefined".
//!
//! The `validate_*` functions are the fail-fast checks shared by the
//! generators and the apply engine.
//!
//! # Example
//!
//! ```
//! use fast_window::traits::{validate_window, SeriesElement};
//!
//! fn first_window_sum<T: SeriesElement>(data: &[T], window: usize) -> fast_window::Result<T> {
//!     validate_window(window, "window")?;
//!     Ok(data.iter().take(window).fold(T::zero(), |acc, &x| acc + x))
//! }
//!
//! let sum = first_window_sum(&[1.0_f64, 2.0, 3.0], 2).unwrap();
//! assert!((sum - 3.0).abs() < 1e-10);
//! ```

use num_traits::Float;

use crate::error::{Error, Result};

/// A trait for types that can be used as elements of a sequence.
///
/// Implemented for every `Float` that can be shared across worker threads,
/// which in practice means `f32` and `f64`.
///
/// # Example
///
/// ```
/// use fast_window::traits::SeriesElement;
///
/// fn nan_aware_max<T: SeriesElement>(data: &[T]) -> T {
///     data.iter().fold(T::nan(), |acc, &x| acc.max(x))
/// }
///
/// assert_eq!(nan_aware_max(&[1.0_f64, f64::NAN, 4.0]), 4.0);
/// ```
pub trait SeriesElement: Float + Copy + Default + Send + Sync + 'static {}

// Blanket implementation for all types that satisfy the bounds
impl<T: Float + Copy + Default + Send + Sync + 'static> SeriesElement for T {}

/// Validates a window size or minimum period count.
///
/// `parameter` names the argument in the error (`"window"` or
/// `"min_periods"`).
///
/// # Errors
///
/// Returns `Error::InvalidWindow` if `size` is zero.
#[inline]
pub const fn validate_window(size: usize, parameter: &'static str) -> Result<()> {
    if size == 0 {
        Err(Error::InvalidWindow {
            parameter,
            value: size,
            reason: "must be at least 1",
        })
    } else {
        Ok(())
    }
}

/// Validates that a sequence of `len` elements can hold a window of `size`.
///
/// # Errors
///
/// Returns `Error::InsufficientData` if `len < size`.
#[inline]
pub const fn validate_min_length(len: usize, size: usize, operation: &'static str) -> Result<()> {
    if len < size {
        Err(Error::InsufficientData {
            operation,
            required: size,
            actual: len,
        })
    } else {
        Ok(())
    }
}
