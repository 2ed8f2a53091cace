//! Rolling (fixed-width sliding) windows.
//!
//! # Lookback
//!
//! The first `window - 1` positions have no full window. They are emitted as
//! placeholders (the real prefix left-padded with NaN) unless skipped.

use super::index::WindowKind;
use super::stream::{WindowStream, Windows};
use crate::error::Result;
use crate::traits::SeriesElement;

/// Returns the lookback for a rolling window: `window - 1`.
#[inline]
#[must_use]
pub const fn rolling_lookback(window: usize) -> usize {
    window.saturating_sub(1)
}

/// Returns the minimum input length for a rolling window.
#[inline]
#[must_use]
pub const fn rolling_min_len(window: usize) -> usize {
    if window == 0 {
        1
    } else {
        window
    }
}

/// Produces the rolling windows of `data`.
///
/// # Arguments
///
/// * `data` - Input sequence
/// * `window` - Window width (must be >= 1)
/// * `skip_placeholders` - Omit the `window - 1` leading placeholder windows
/// * `materialize` - Build every window now instead of on demand
///
/// # Returns
///
/// `data.len()` windows with placeholders, `data.len() - window + 1`
/// without. Every window has exactly `window` elements.
///
/// # Errors
///
/// - `Error::InvalidWindow` if `window` is zero
/// - `Error::InsufficientData` if `data.len() < window`
///
/// # Example
///
/// ```
/// use fast_window::window::rolling;
///
/// let data = [1.0_f64, 2.0, 3.0, 4.0, 5.0];
/// let windows = rolling(&data, 2, false, true).unwrap().into_vec();
///
/// assert_eq!(windows.len(), 5);
/// assert!(windows[0][0].is_nan());
/// assert_eq!(windows[0][1], 1.0);
/// assert_eq!(windows[4].as_ref(), &[4.0, 5.0]);
/// ```
pub fn rolling<T: SeriesElement>(
    data: &[T],
    window: usize,
    skip_placeholders: bool,
    materialize: bool,
) -> Result<WindowStream<'_, T>> {
    let windows = Windows::new(data, WindowKind::Rolling(window), skip_placeholders)?;
    Ok(WindowStream::new(windows, materialize))
}

/// Builds the full rolling window matrix of `data`, placeholders included,
/// as a flat row-major buffer of `data.len()` rows by `window` columns.
///
/// # Errors
///
/// - `Error::InvalidWindow` if `window` is zero
/// - `Error::InsufficientData` if `data.len() < window`
///
/// # Example
///
/// ```
/// use fast_window::window::rolling_matrix;
///
/// let m = rolling_matrix(&[1.0_f64, 2.0, 3.0], 2).unwrap();
/// assert_eq!(m.len(), 6);
/// assert!(m[0].is_nan());
/// assert_eq!(&m[1..], &[1.0, 1.0, 2.0, 2.0, 3.0]);
/// ```
pub fn rolling_matrix<T: SeriesElement>(data: &[T], window: usize) -> Result<Vec<T>> {
    let windows = Windows::new(data, WindowKind::Rolling(window), false)?;
    let mut output = Vec::with_capacity(data.len() * window);
    for row in windows {
        output.extend_from_slice(&row);
    }
    Ok(output)
}
