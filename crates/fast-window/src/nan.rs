//! NaN buffers, padding and cleanup.
//!
//! NaN marks positions where a window is not yet defined. The apply engine
//! uses [`prepend_na`] to left-align its results to the input length; the
//! other helpers are the stateless transforms callers usually want around
//! such output.
//!
//! None of these functions mutate their input.
//!
//! # Example
//!
//! ```
//! use fast_window::nan::{count_nan_prefix, drop_na, prepend_na};
//!
//! let padded = prepend_na(&[1.0_f64, 2.0], 2);
//! assert_eq!(padded.len(), 4);
//! assert_eq!(count_nan_prefix(&padded), 2);
//! assert_eq!(drop_na(&padded), vec![1.0, 2.0]);
//! ```

use crate::error::{Error, Result};
use crate::traits::SeriesElement;

/// Returns a vector of `len` NaN values.
///
/// ```
/// use fast_window::nan::nans;
///
/// let buf: Vec<f64> = nans(3);
/// assert!(buf.iter().all(|x| x.is_nan()));
/// ```
#[inline]
#[must_use]
pub fn nans<T: SeriesElement>(len: usize) -> Vec<T> {
    vec![T::nan(); len]
}

/// Returns a new vector of `data.len() + count` elements: `count` NaNs
/// followed by `data` in order.
///
/// ```
/// use fast_window::nan::prepend_na;
///
/// let out = prepend_na(&[1.0_f64, 2.0], 2);
/// assert!(out[0].is_nan() && out[1].is_nan());
/// assert_eq!(&out[2..], &[1.0, 2.0]);
/// ```
#[must_use]
pub fn prepend_na<T: SeriesElement>(data: &[T], count: usize) -> Vec<T> {
    let mut output = Vec::with_capacity(data.len() + count);
    output.resize(count, T::nan());
    output.extend_from_slice(data);
    output
}

/// Writes `data` right-aligned into `output`, filling the leading slots
/// with NaN.
///
/// The number of NaNs written is `output.len() - data.len()`.
///
/// # Errors
///
/// Returns `Error::InsufficientData` if `output` is shorter than `data`.
pub fn prepend_na_into<T: SeriesElement>(data: &[T], output: &mut [T]) -> Result<()> {
    if output.len() < data.len() {
        return Err(Error::InsufficientData {
            operation: "prepend_na_into",
            required: data.len(),
            actual: output.len(),
        });
    }

    let count = output.len() - data.len();
    let (head, tail) = output.split_at_mut(count);
    head.fill(T::nan());
    tail.copy_from_slice(data);
    Ok(())
}

/// Returns the non-NaN elements of `data`, in order.
#[must_use]
pub fn drop_na<T: SeriesElement>(data: &[T]) -> Vec<T> {
    data.iter().copied().filter(|x| !x.is_nan()).collect()
}

/// Returns a copy of `data` with every NaN replaced by `value`.
///
/// ```
/// use fast_window::nan::fill_na;
///
/// assert_eq!(fill_na(&[f64::NAN, 1.0, 2.0], -1.0), vec![-1.0, 1.0, 2.0]);
/// ```
#[must_use]
pub fn fill_na<T: SeriesElement>(data: &[T], value: T) -> Vec<T> {
    data.iter()
        .map(|&x| if x.is_nan() { value } else { x })
        .collect()
}

/// Returns a copy of `data` with every NaN and infinity replaced by `value`.
///
/// ```
/// use fast_window::nan::fill_not_finite;
///
/// let out = fill_not_finite(&[f64::NAN, f64::INFINITY, 1.0, 2.0], 99.0);
/// assert_eq!(out, vec![99.0, 99.0, 1.0, 2.0]);
/// ```
#[must_use]
pub fn fill_not_finite<T: SeriesElement>(data: &[T], value: T) -> Vec<T> {
    data.iter()
        .map(|&x| if x.is_finite() { x } else { value })
        .collect()
}

/// Counts the NaN values at the beginning of a slice.
///
/// For apply output this is the lookback: `window - 1` or
/// `min_periods - 1`, unless the function itself returned NaN.
#[inline]
#[must_use]
pub fn count_nan_prefix<T: SeriesElement>(data: &[T]) -> usize {
    data.iter().take_while(|x| x.is_nan()).count()
}
