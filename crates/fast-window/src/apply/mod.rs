//! Apply a reduction function across rolling or expanding windows.
//!
//! Every apply call follows the same steps:
//!
//! 1. Check the window size, the inputs' shapes and lengths, and the worker
//!    count. Nothing runs if any check fails.
//! 2. Enumerate the index windows over `[0, len)` with placeholders skipped.
//! 3. Slice every input by each index window and call the function once per
//!    window with one slice per input.
//! 4. Gather the results in window order and left-pad them with NaN so the
//!    output has the length of the inputs.
//!
//! Extra arguments for the function are captured by the closure.
//!
//! # Example
//!
//! ```
//! use fast_window::apply::{expanding_apply, rolling_apply};
//! use fast_window::dispatch::Parallelism;
//!
//! let data = vec![1.0_f64, 2.0, 3.0, 4.0, 5.0];
//! let sum = |w: &[&[f64]]| w[0].iter().sum::<f64>();
//!
//! let rolled = rolling_apply(&[&data], 2, Parallelism::Sequential, sum).unwrap();
//! assert!(rolled[0].is_nan());
//! assert_eq!(&rolled[1..], &[3.0, 5.0, 7.0, 9.0]);
//!
//! let expanded = expanding_apply(&[&data], 2, Parallelism::Workers(2), sum).unwrap();
//! assert!(expanded[0].is_nan());
//! assert_eq!(&expanded[1..], &[3.0, 6.0, 10.0, 15.0]);
//! ```
//!
//! # Multiple inputs
//!
//! ```
//! use fast_window::apply::rolling_apply;
//! use fast_window::dispatch::Parallelism;
//!
//! let a = vec![1.0_f64, 2.0, 3.0, 4.0, 5.0];
//! let b = vec![1.5_f64, 2.5, 3.5, 4.5, 5.5];
//! let k = -1.0;
//!
//! let out = rolling_apply(&[&a, &b], 2, Parallelism::Sequential, |w: &[&[f64]]| {
//!     let sum: f64 = w[0].iter().sum();
//!     let max = w[1].iter().copied().fold(f64::NEG_INFINITY, f64::max);
//!     (sum + max) * k
//! })
//! .unwrap();
//! assert_eq!(&out[1..], &[-5.5, -8.5, -11.5, -14.5]);
//! ```
//!
//! # Mixed input types
//!
//! The inputs of one call share a Rust type. To mix vectors, slices and
//! arrays, pass them as `&dyn SeriesInput<T>`:
//!
//! ```
//! use fast_window::apply::rolling_apply;
//! use fast_window::dispatch::Parallelism;
//! use fast_window::input::SeriesInput;
//!
//! let a = vec![1.0_f64, 2.0, 3.0];
//! let b: &[f64] = &[10.0, 20.0, 30.0];
//! let inputs: [&dyn SeriesInput<f64>; 2] = [&a, &b];
//!
//! let out = rolling_apply(&inputs, 2, Parallelism::Sequential, |w: &[&[f64]]| w[0][1] + w[1][1])
//!     .unwrap();
//! assert_eq!(&out[1..], &[22.0, 33.0]);
//! ```

pub mod config;
mod engine;

use std::convert::Infallible;
use std::fmt::Display;

use crate::dispatch::{ParallelMap, Parallelism};
use crate::error::Result;
use crate::input::SeriesInput;
use crate::traits::SeriesElement;
use crate::window::WindowKind;

pub use config::{ExpandingApply, RollingApply};

fn apply_with<T, R, I, P, F, E>(kind: WindowKind, inputs: &[I], map: &P, func: F) -> Result<Vec<R>>
where
    T: SeriesElement,
    R: SeriesElement,
    I: SeriesInput<T>,
    P: ParallelMap,
    F: Fn(&[&[T]]) -> std::result::Result<R, E> + Send + Sync,
    E: Display,
{
    engine::prepare(kind, inputs)?.run(map, func)
}

fn apply<T, R, I, F, E>(
    kind: WindowKind,
    inputs: &[I],
    parallelism: Parallelism,
    func: F,
) -> Result<Vec<R>>
where
    T: SeriesElement,
    R: SeriesElement,
    I: SeriesInput<T>,
    F: Fn(&[&[T]]) -> std::result::Result<R, E> + Send + Sync,
    E: Display,
{
    let prepared = engine::prepare(kind, inputs)?;
    parallelism.validate()?;
    // The dispatcher (and any pool it owns) is dropped before returning.
    let map = parallelism.build()?;
    prepared.run(&map, func)
}

/// Applies `func` to every rolling window of the co-indexed `inputs`.
///
/// # Arguments
///
/// * `inputs` - One or more 1-D sequences of equal length
/// * `window` - Window width (must be >= 1)
/// * `parallelism` - Worker setting for the per-window calls
/// * `func` - Receives one slice of `window` elements per input
///
/// # Returns
///
/// A vector of the inputs' length. The first `window - 1` entries are NaN;
/// entry `i` is `func` applied to positions `i + 1 - window ..= i`.
///
/// # Errors
///
/// - `Error::InvalidWindow` if `window` is zero
/// - `Error::NoSequences` if `inputs` is empty
/// - `Error::InvalidShape` if an input is not 1-D
/// - `Error::LengthMismatch` if the inputs differ in length
/// - `Error::InsufficientData` if the inputs are shorter than `window`
/// - `Error::InvalidParallelism` for `Parallelism::Workers(0)`
/// - `Error::WorkerPool` if a worker pool cannot be built
pub fn rolling_apply<T, R, I, F>(
    inputs: &[I],
    window: usize,
    parallelism: Parallelism,
    func: F,
) -> Result<Vec<R>>
where
    T: SeriesElement,
    R: SeriesElement,
    I: SeriesInput<T>,
    F: Fn(&[&[T]]) -> R + Send + Sync,
{
    apply(WindowKind::Rolling(window), inputs, parallelism, |w| {
        Ok::<R, Infallible>(func(w))
    })
}

/// Like [`rolling_apply`], for a function that can fail.
///
/// # Errors
///
/// Everything [`rolling_apply`] returns, plus `Error::UserFunction` for the
/// first window on which `func` returned an error.
///
/// # Example
///
/// ```
/// use fast_window::apply::try_rolling_apply;
/// use fast_window::dispatch::Parallelism;
/// use fast_window::Error;
///
/// let data = vec![1.0_f64, 2.0, 0.0, 4.0];
/// let result = try_rolling_apply(&[&data], 2, Parallelism::Sequential, |w: &[&[f64]]| {
///     if w[0][1] == 0.0 {
///         Err("zero divisor")
///     } else {
///         Ok(w[0][0] / w[0][1])
///     }
/// });
/// assert!(matches!(result, Err(Error::UserFunction { position: 2, .. })));
/// ```
pub fn try_rolling_apply<T, R, I, F, E>(
    inputs: &[I],
    window: usize,
    parallelism: Parallelism,
    func: F,
) -> Result<Vec<R>>
where
    T: SeriesElement,
    R: SeriesElement,
    I: SeriesInput<T>,
    F: Fn(&[&[T]]) -> std::result::Result<R, E> + Send + Sync,
    E: Display,
{
    apply(WindowKind::Rolling(window), inputs, parallelism, func)
}

/// Like [`rolling_apply`], running the per-window calls through a caller
/// supplied [`ParallelMap`].
///
/// # Errors
///
/// Same as [`rolling_apply`], except for the worker-setting errors.
pub fn rolling_apply_with<T, R, I, P, F>(
    inputs: &[I],
    window: usize,
    map: &P,
    func: F,
) -> Result<Vec<R>>
where
    T: SeriesElement,
    R: SeriesElement,
    I: SeriesInput<T>,
    P: ParallelMap,
    F: Fn(&[&[T]]) -> R + Send + Sync,
{
    apply_with(WindowKind::Rolling(window), inputs, map, |w| {
        Ok::<R, Infallible>(func(w))
    })
}

/// Fallible form of [`rolling_apply_with`].
///
/// # Errors
///
/// Same as [`try_rolling_apply`], except for the worker-setting errors.
pub fn try_rolling_apply_with<T, R, I, P, F, E>(
    inputs: &[I],
    window: usize,
    map: &P,
    func: F,
) -> Result<Vec<R>>
where
    T: SeriesElement,
    R: SeriesElement,
    I: SeriesInput<T>,
    P: ParallelMap,
    F: Fn(&[&[T]]) -> std::result::Result<R, E> + Send + Sync,
    E: Display,
{
    apply_with(WindowKind::Rolling(window), inputs, map, func)
}

/// Applies `func` to every expanding window of the co-indexed `inputs`.
///
/// # Arguments
///
/// * `inputs` - One or more 1-D sequences of equal length
/// * `min_periods` - Size of the first full window (must be >= 1)
/// * `parallelism` - Worker setting for the per-window calls
/// * `func` - Receives one slice per input, all starting at index 0
///
/// # Returns
///
/// A vector of the inputs' length. The first `min_periods - 1` entries are
/// NaN; entry `i` is `func` applied to positions `0 ..= i`.
///
/// # Errors
///
/// - `Error::InvalidWindow` if `min_periods` is zero
/// - `Error::NoSequences` if `inputs` is empty
/// - `Error::InvalidShape` if an input is not 1-D
/// - `Error::LengthMismatch` if the inputs differ in length
/// - `Error::InsufficientData` if the inputs are shorter than `min_periods`
/// - `Error::InvalidParallelism` for `Parallelism::Workers(0)`
/// - `Error::WorkerPool` if a worker pool cannot be built
pub fn expanding_apply<T, R, I, F>(
    inputs: &[I],
    min_periods: usize,
    parallelism: Parallelism,
    func: F,
) -> Result<Vec<R>>
where
    T: SeriesElement,
    R: SeriesElement,
    I: SeriesInput<T>,
    F: Fn(&[&[T]]) -> R + Send + Sync,
{
    apply(WindowKind::Expanding(min_periods), inputs, parallelism, |w| {
        Ok::<R, Infallible>(func(w))
    })
}

/// Like [`expanding_apply`], for a function that can fail.
///
/// # Errors
///
/// Everything [`expanding_apply`] returns, plus `Error::UserFunction` for
/// the first window on which `func` returned an error.
pub fn try_expanding_apply<T, R, I, F, E>(
    inputs: &[I],
    min_periods: usize,
    parallelism: Parallelism,
    func: F,
) -> Result<Vec<R>>
where
    T: SeriesElement,
    R: SeriesElement,
    I: SeriesInput<T>,
    F: Fn(&[&[T]]) -> std::result::Result<R, E> + Send + Sync,
    E: Display,
{
    apply(WindowKind::Expanding(min_periods), inputs, parallelism, func)
}

/// Like [`expanding_apply`], running the per-window calls through a caller
/// supplied [`ParallelMap`].
///
/// # Errors
///
/// Same as [`expanding_apply`], except for the worker-setting errors.
pub fn expanding_apply_with<T, R, I, P, F>(
    inputs: &[I],
    min_periods: usize,
    map: &P,
    func: F,
) -> Result<Vec<R>>
where
    T: SeriesElement,
    R: SeriesElement,
    I: SeriesInput<T>,
    P: ParallelMap,
    F: Fn(&[&[T]]) -> R + Send + Sync,
{
    apply_with(WindowKind::Expanding(min_periods), inputs, map, |w| {
        Ok::<R, Infallible>(func(w))
    })
}

/// Fallible form of [`expanding_apply_with`].
///
/// # Errors
///
/// Same as [`try_expanding_apply`], except for the worker-setting errors.
pub fn try_expanding_apply_with<T, R, I, P, F, E>(
    inputs: &[I],
    min_periods: usize,
    map: &P,
    func: F,
) -> Result<Vec<R>>
where
    T: SeriesElement,
    R: SeriesElement,
    I: SeriesInput<T>,
    P: ParallelMap,
    F: Fn(&[&[T]]) -> std::result::Result<R, E> + Send + Sync,
    E: Display,
{
    apply_with(WindowKind::Expanding(min_periods), inputs, map, func)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::all, clippy::pedantic, clippy::nursery)]
    use super::*;
    use crate::dispatch::Sequential;
    use crate::error::Error;
    use crate::nan::count_nan_prefix;

    fn sum(w: &[&[f64]]) -> f64 {
        w[0].iter().sum()
    }

    fn assert_same(a: &[f64], b: &[f64]) {
        assert_eq!(a.len(), b.len());
        for (x, y) in a.iter().zip(b) {
            assert!(x.to_bits() == y.to_bits(), "{x} != {y}");
        }
    }

    #[test]
    fn test_rolling_apply_sum() {
        let data = vec![1.0_f64, 2.0, 3.0, 4.0, 5.0];
        let out = rolling_apply(&[&data], 2, Parallelism::Sequential, sum).unwrap();
        assert_same(&out, &[f64::NAN, 3.0, 5.0, 7.0, 9.0]);
    }

    #[test]
    fn test_expanding_apply_sum() {
        let data = vec![1.0_f64, 2.0, 3.0, 4.0, 5.0];
        let out = expanding_apply(&[&data], 2, Parallelism::Sequential, sum).unwrap();
        assert_same(&out, &[f64::NAN, 3.0, 6.0, 10.0, 15.0]);
    }

    #[test]
    fn test_two_inputs_with_captured_parameter() {
        let a = vec![1.0_f64, 2.0, 3.0, 4.0, 5.0];
        let b = vec![1.5_f64, 2.5, 3.5, 4.5, 5.5];
        let k = -1.0;
        let func = |w: &[&[f64]]| {
            let s: f64 = w[0].iter().sum();
            let m = w[1].iter().copied().fold(f64::NEG_INFINITY, f64::max);
            (s + m) * k
        };

        let rolled = rolling_apply(&[&a, &b], 2, Parallelism::Sequential, func).unwrap();
        assert_same(&rolled, &[f64::NAN, -5.5, -8.5, -11.5, -14.5]);

        let expanded = expanding_apply(&[&a, &b], 2, Parallelism::Sequential, func).unwrap();
        assert_same(&expanded, &[f64::NAN, -5.5, -9.5, -14.5, -20.5]);
    }

    #[test]
    fn test_window_equal_to_len() {
        let data = vec![1.0_f64, 2.0, 3.0];
        let out = rolling_apply(&[&data], 3, Parallelism::Sequential, sum).unwrap();
        assert_eq!(count_nan_prefix(&out), 2);
        assert_eq!(out[2], 6.0);
    }

    #[test]
    fn test_f32_input_f64_output() {
        let data = vec![1.0_f32, 2.0, 3.0, 4.0];
        let out: Vec<f64> = rolling_apply(&[&data], 2, Parallelism::Sequential, |w: &[&[f32]]| {
            f64::from(w[0][0] * w[0][1])
        })
        .unwrap();
        assert_same(&out, &[f64::NAN, 2.0, 6.0, 12.0]);
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let data: Vec<f64> = (0..500).map(|i| (f64::from(i) * 0.37).sin()).collect();
        let func = |w: &[&[f64]]| w[0].iter().map(|x| x * x).sum::<f64>().sqrt();

        let seq = rolling_apply(&[&data], 17, Parallelism::Sequential, func).unwrap();
        let par = rolling_apply(&[&data], 17, Parallelism::Workers(4), func).unwrap();
        let all = rolling_apply(&[&data], 17, Parallelism::Available, func).unwrap();
        assert_same(&seq, &par);
        assert_same(&seq, &all);

        let seq = expanding_apply(&[&data], 5, Parallelism::Sequential, func).unwrap();
        let par = expanding_apply(&[&data], 5, Parallelism::Workers(3), func).unwrap();
        assert_same(&seq, &par);
    }

    #[test]
    fn test_validation_errors() {
        let a = vec![1.0_f64, 2.0, 3.0];
        let b = vec![1.0_f64, 2.0];

        assert!(matches!(
            rolling_apply(&[&a], 0, Parallelism::Sequential, sum),
            Err(Error::InvalidWindow { .. })
        ));
        assert_eq!(
            rolling_apply(&[&a, &b], 2, Parallelism::Sequential, sum),
            Err(Error::LengthMismatch {
                index: 1,
                expected: 3,
                actual: 2,
            })
        );
        assert!(matches!(
            expanding_apply(&[&a], 4, Parallelism::Sequential, sum),
            Err(Error::InsufficientData {
                operation: "expanding",
                required: 4,
                actual: 3,
            })
        ));
        let none: [&Vec<f64>; 0] = [];
        assert_eq!(
            rolling_apply(&none, 1, Parallelism::Sequential, sum),
            Err(Error::NoSequences)
        );
        assert_eq!(
            rolling_apply(&[&a], 2, Parallelism::Workers(0), sum),
            Err(Error::InvalidParallelism)
        );
    }

    #[test]
    fn test_window_error_reported_before_shape_errors() {
        let a = vec![1.0_f64, 2.0, 3.0];
        let b = vec![1.0_f64];
        assert!(matches!(
            rolling_apply(&[&a, &b], 0, Parallelism::Sequential, sum),
            Err(Error::InvalidWindow { .. })
        ));
    }

    #[test]
    fn test_user_function_error_sequential_and_parallel() {
        let data: Vec<f64> = (0..100).map(f64::from).collect();
        let func = |w: &[&[f64]]| {
            let last = w[0][w[0].len() - 1];
            if last == 60.0 {
                Err(format!("bad value {last}"))
            } else {
                Ok(last)
            }
        };

        for parallelism in [Parallelism::Sequential, Parallelism::Workers(4)] {
            let result = try_rolling_apply(&[&data], 3, parallelism, func);
            assert_eq!(
                result,
                Err(Error::UserFunction {
                    position: 60,
                    message: "bad value 60".to_string(),
                })
            );
        }

        let result = try_expanding_apply(&[&data], 1, Parallelism::Sequential, func);
        assert!(matches!(result, Err(Error::UserFunction { position: 60, .. })));
    }

    #[test]
    fn test_try_apply_success() {
        let data = vec![1.0_f64, 2.0, 3.0];
        let out = try_expanding_apply(&[&data], 1, Parallelism::Sequential, |w: &[&[f64]]| {
            Ok::<f64, String>(w[0].len() as f64)
        })
        .unwrap();
        assert_same(&out, &[1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_apply_with_injected_map() {
        let data = vec![1.0_f64, 2.0, 3.0, 4.0, 5.0];
        let out = rolling_apply_with(&[&data], 2, &Sequential, sum).unwrap();
        assert_same(&out, &[f64::NAN, 3.0, 5.0, 7.0, 9.0]);
        let out = expanding_apply_with(&[&data], 2, &Sequential, sum).unwrap();
        assert_same(&out, &[f64::NAN, 3.0, 6.0, 10.0, 15.0]);

        let result = try_rolling_apply_with(&[&data], 2, &Sequential, |_: &[&[f64]]| {
            Err::<f64, _>("nope")
        });
        assert!(matches!(result, Err(Error::UserFunction { position: 1, .. })));
        let result = try_expanding_apply_with(&[&data], 3, &Sequential, |_: &[&[f64]]| {
            Err::<f64, _>("nope")
        });
        assert!(matches!(result, Err(Error::UserFunction { position: 2, .. })));
    }
}
