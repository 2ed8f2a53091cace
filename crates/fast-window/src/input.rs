//! Input abstraction for apply calls.
//!
//! [`SeriesInput`] lets the apply functions accept slices, vectors and (with
//! the `ndarray` feature) `ndarray` arrays interchangeably. Arrays report
//! their dimensionality so that the engine can reject anything that is not
//! one-dimensional before doing any work.

use std::borrow::Cow;

use crate::error::{Error, Result};
use crate::traits::SeriesElement;

/// Trait for types that can be used as a sequence in an apply call.
pub trait SeriesInput<T: SeriesElement> {
    /// Number of dimensions of the input. Plain slices are always 1-D.
    fn ndim(&self) -> usize {
        1
    }

    /// The input as a contiguous slice.
    ///
    /// Contiguous inputs are borrowed; strided arrays are copied once.
    fn as_series(&self) -> Cow<'_, [T]>;
}

impl<T: SeriesElement> SeriesInput<T> for [T] {
    fn as_series(&self) -> Cow<'_, [T]> {
        Cow::Borrowed(self)
    }
}

impl<T: SeriesElement> SeriesInput<T> for Vec<T> {
    fn as_series(&self) -> Cow<'_, [T]> {
        Cow::Borrowed(self.as_slice())
    }
}

impl<T: SeriesElement, I: SeriesInput<T> + ?Sized> SeriesInput<T> for &I {
    fn ndim(&self) -> usize {
        (**self).ndim()
    }

    fn as_series(&self) -> Cow<'_, [T]> {
        (**self).as_series()
    }
}

#[cfg(feature = "ndarray")]
impl<T, S, D> SeriesInput<T> for ndarray::ArrayBase<S, D>
where
    T: SeriesElement,
    S: ndarray::Data<Elem = T>,
    D: ndarray::Dimension,
{
    fn ndim(&self) -> usize {
        ndarray::ArrayBase::ndim(self)
    }

    fn as_series(&self) -> Cow<'_, [T]> {
        match self.as_slice() {
            Some(slice) => Cow::Borrowed(slice),
            None => Cow::Owned(self.iter().copied().collect()),
        }
    }
}

/// Checks the co-indexed inputs of an apply call and returns them as slices.
///
/// Checks, in order: at least one input, every input 1-D, every input the
/// length of the first.
pub(crate) fn resolve_inputs<T, I>(inputs: &[I]) -> Result<Vec<Cow<'_, [T]>>>
where
    T: SeriesElement,
    I: SeriesInput<T>,
{
    if inputs.is_empty() {
        return Err(Error::NoSequences);
    }

    for (index, input) in inputs.iter().enumerate() {
        let ndim = input.ndim();
        if ndim != 1 {
            return Err(Error::InvalidShape { index, ndim });
        }
    }

    let series: Vec<Cow<'_, [T]>> = inputs.iter().map(SeriesInput::as_series).collect();
    let expected = series[0].len();
    for (index, s) in series.iter().enumerate().skip(1) {
        if s.len() != expected {
            return Err(Error::LengthMismatch {
                index,
                expected,
                actual: s.len(),
            });
        }
    }

    Ok(series)
}
