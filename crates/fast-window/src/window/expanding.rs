//! Expanding (start-anchored, growing) windows.
//!
//! # Lookback
//!
//! The first `min_periods - 1` positions have fewer elements than required.
//! They are emitted as pure NaN placeholders of size `1..min_periods`, not as
//! padded data, unless skipped.

use super::index::WindowKind;
use super::stream::{WindowStream, Windows};
use crate::error::Result;
use crate::traits::SeriesElement;

/// Returns the lookback for an expanding window: `min_periods - 1`.
#[inline]
#[must_use]
pub const fn expanding_lookback(min_periods: usize) -> usize {
    min_periods.saturating_sub(1)
}

/// Produces the expanding windows of `data`.
///
/// Full windows are `data[0..min_periods]`, `data[0..min_periods + 1]`, ...,
/// `data[0..len]`.
///
/// # Arguments
///
/// * `data` - Input sequence
/// * `min_periods` - Size of the first full window (must be >= 1)
/// * `skip_placeholders` - Omit the `min_periods - 1` leading NaN placeholders
/// * `materialize` - Build every window now instead of on demand
///
/// # Errors
///
/// - `Error::InvalidWindow` if `min_periods` is zero
/// - `Error::InsufficientData` if `data.len() < min_periods`
///
/// # Example
///
/// ```
/// use fast_window::window::expanding;
///
/// let data = [1.0_f64, 2.0, 3.0, 4.0, 5.0];
/// let windows = expanding(&data, 3, true, false).unwrap().into_vec();
///
/// assert_eq!(windows.len(), 3);
/// assert_eq!(windows[0].as_ref(), &[1.0, 2.0, 3.0]);
/// assert_eq!(windows[2].as_ref(), &data[..]);
/// ```
pub fn expanding<T: SeriesElement>(
    data: &[T],
    min_periods: usize,
    skip_placeholders: bool,
    materialize: bool,
) -> Result<WindowStream<'_, T>> {
    let windows = Windows::new(data, WindowKind::Expanding(min_periods), skip_placeholders)?;
    Ok(WindowStream::new(windows, materialize))
}
