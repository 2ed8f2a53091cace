//! Shared apply loop for rolling and expanding windows.

use std::borrow::Cow;
use std::fmt::Display;
use std::ops::Range;

use crate::dispatch::ParallelMap;
use crate::error::{Error, Result};
use crate::input::{resolve_inputs, SeriesInput};
use crate::nan::prepend_na;
use crate::traits::{validate_window, SeriesElement};
use crate::window::{IndexWindows, WindowKind};

/// Validated inputs of an apply call, ready to run.
pub(crate) struct Prepared<'a, T: SeriesElement> {
    kind: WindowKind,
    series: Vec<Cow<'a, [T]>>,
    windows: IndexWindows,
}

/// Runs every precondition check of an apply call.
///
/// Order: window size, at least one input, 1-D inputs, equal lengths,
/// length at least the window size.
pub(crate) fn prepare<T, I>(kind: WindowKind, inputs: &[I]) -> Result<Prepared<'_, T>>
where
    T: SeriesElement,
    I: SeriesInput<T>,
{
    validate_window(kind.size(), kind.parameter())?;
    let series = resolve_inputs(inputs)?;
    let windows = IndexWindows::new(kind, series[0].len())?;
    Ok(Prepared {
        kind,
        series,
        windows,
    })
}

impl<T: SeriesElement> Prepared<'_, T> {
    /// Applies `func` to every window through `map` and left-pads the
    /// results to the input length.
    pub(crate) fn run<R, P, F, E>(self, map: &P, func: F) -> Result<Vec<R>>
    where
        R: SeriesElement,
        P: ParallelMap,
        F: Fn(&[&[T]]) -> std::result::Result<R, E> + Send + Sync,
        E: Display,
    {
        let Self {
            kind,
            series,
            windows,
        } = self;
        let series: Vec<&[T]> = series.iter().map(|s| &**s).collect();
        let tasks: Vec<Range<usize>> = windows.collect();

        log::debug!(
            "{} apply: {} windows of size {} over {} input(s), {} worker(s)",
            kind.operation(),
            tasks.len(),
            kind.size(),
            series.len(),
            map.workers()
        );

        let results = map.map_ordered(tasks, |range| {
            let position = range.end - 1;
            let slices: Vec<&[T]> = series.iter().map(|s| &s[range.clone()]).collect();
            func(&slices).map_err(|e| Error::UserFunction {
                position,
                message: e.to_string(),
            })
        })?;

        Ok(prepend_na(&results, kind.lookback()))
    }
}
