//! Exponentially spaced ranges and element-wise mapping.
//!
//! [`expstep_range`] is handy for picking window sizes to scan: dense at the
//! small end, sparse at the large end.
//!
//! ```
//! use fast_window::range::expstep_range_rounded;
//!
//! let windows = expstep_range_rounded(2.0_f64, 200.0, 1.0, 1.5, f64::ceil).unwrap();
//! assert_eq!(&windows[..4], &[2.0, 3.0, 5.0, 7.0]);
//! ```

use crate::error::{Error, Result};
use crate::traits::SeriesElement;

#[allow(clippy::neg_cmp_op_on_partial_ord)]
fn validate_step<T: SeriesElement>(start: T, end: T, min_step: T, step_mult: T) -> Result<()> {
    // written as negations so NaN fails too
    if !(step_mult > T::zero()) {
        return Err(Error::InvalidParameter {
            name: "step_mult",
            reason: "must be greater than 0",
        });
    }
    if !(min_step > T::zero()) {
        return Err(Error::InvalidParameter {
            name: "min_step",
            reason: "must be greater than 0",
        });
    }
    if !start.is_finite() || !end.is_finite() {
        return Err(Error::InvalidParameter {
            name: "start/end",
            reason: "bounds must be finite",
        });
    }
    Ok(())
}

/// Returns values from `start` towards `end` with a growing step.
///
/// The first step is `min_step`; each following step is the previous one
/// times `step_mult`, but never less than `min_step`. `start` is included,
/// `end` is not. When `start > end` the values decrease; when they are equal
/// the result is empty.
///
/// # Errors
///
/// Returns `Error::InvalidParameter` if `min_step` or `step_mult` is not
/// greater than zero, if `start` or `end` is not finite, or if a step is
/// lost to rounding so the range would never advance.
///
/// # Example
///
/// ```
/// use fast_window::range::expstep_range;
///
/// let values = expstep_range(1.0_f64, 100.0, 1.0, 1.5).unwrap();
/// assert_eq!(&values[..5], &[1.0, 2.0, 3.5, 5.75, 9.125]);
/// assert_eq!(values.len(), 10);
///
/// let down = expstep_range(-1.0_f64, -100.0, 1.0, 1.5).unwrap();
/// assert_eq!(&down[..3], &[-1.0, -2.0, -3.5]);
/// ```
pub fn expstep_range<T: SeriesElement>(start: T, end: T, min_step: T, step_mult: T) -> Result<Vec<T>> {
    validate_step(start, end, min_step, step_mult)?;

    let ascending = start < end;
    let sign = if ascending { T::one() } else { -T::one() };
    let in_range = |v: T| if ascending { v < end } else { v > end };

    let mut values = Vec::new();
    if start == end {
        return Ok(values);
    }

    let mut last = start;
    let mut step = min_step;
    while in_range(last) {
        values.push(last);
        let next = last + step.max(min_step) * sign;
        if next == last {
            return Err(Error::InvalidParameter {
                name: "min_step",
                reason: "too small to advance at this magnitude",
            });
        }
        last = next;
        step = (step * step_mult).abs();
    }
    Ok(values)
}

/// Like [`expstep_range`], with every value passed through `round`.
///
/// Rounded duplicates are removed, keeping the first occurrence, so the
/// output stays in generation order.
///
/// # Errors
///
/// Same as [`expstep_range`].
///
/// # Example
///
/// ```
/// use fast_window::range::expstep_range_rounded;
///
/// let values = expstep_range_rounded(1.0_f64, 100.0, 1.0, 1.5, f64::ceil).unwrap();
/// assert_eq!(values, vec![1.0, 2.0, 4.0, 6.0, 10.0, 15.0, 22.0, 34.0, 51.0, 76.0]);
/// ```
pub fn expstep_range_rounded<T, F>(
    start: T,
    end: T,
    min_step: T,
    step_mult: T,
    round: F,
) -> Result<Vec<T>>
where
    T: SeriesElement,
    F: Fn(T) -> T,
{
    let values = expstep_range(start, end, min_step, step_mult)?;
    let mut output: Vec<T> = Vec::with_capacity(values.len());
    for v in values.into_iter().map(round) {
        if !output.contains(&v) {
            output.push(v);
        }
    }
    Ok(output)
}

/// Applies `func` to every element of `data` and returns the results.
///
/// ```
/// use fast_window::range::apply_map;
///
/// let flags = apply_map(&[2.0_f64, 2.0, 3.0, 3.0], |x| if x < 3.0 { 0.0 } else { 1.0 });
/// assert_eq!(flags, vec![0.0, 0.0, 1.0, 1.0]);
/// ```
#[must_use]
pub fn apply_map<T, R, F>(data: &[T], func: F) -> Vec<R>
where
    T: Copy,
    F: FnMut(T) -> R,
{
    data.iter().copied().map(func).collect()
}
