//! Window views over a sequence.
//!
//! [`Windows`] is the lazy generator behind [`rolling`](super::rolling) and
//! [`expanding`](super::expanding). It first emits the placeholder windows
//! (unless they are skipped), then one borrowed view per index range produced
//! by [`IndexWindows`].
//!
//! Placeholders differ by kind:
//!
//! - rolling: the real prefix left-padded with NaN to the full width
//! - expanding: pure NaN buffers of size `1..min_periods`

use std::borrow::Cow;
use std::iter::FusedIterator;
use std::ops::Range;

use super::index::{IndexWindows, WindowKind};
use crate::error::Result;
use crate::nan::{nans, prepend_na};
use crate::traits::SeriesElement;

/// A single window: borrowed for real windows, owned for placeholders.
pub type Window<'a, T> = Cow<'a, [T]>;

/// Lazy, single-pass generator of windows over a sequence.
#[derive(Debug, Clone)]
pub struct Windows<'a, T> {
    data: &'a [T],
    placeholders: Range<usize>,
    full: IndexWindows,
}

impl<'a, T: SeriesElement> Windows<'a, T> {
    /// Creates a generator over `data`.
    ///
    /// # Errors
    ///
    /// - `Error::InvalidWindow` if the window size is zero
    /// - `Error::InsufficientData` if `data` is shorter than the window size
    pub fn new(data: &'a [T], kind: WindowKind, skip_placeholders: bool) -> Result<Self> {
        let full = IndexWindows::new(kind, data.len())?;
        let placeholders = if skip_placeholders {
            0..0
        } else {
            0..kind.lookback()
        };
        Ok(Self {
            data,
            placeholders,
            full,
        })
    }

    /// The sizing policy of this generator.
    #[must_use]
    pub const fn kind(&self) -> WindowKind {
        self.full.kind()
    }

    fn placeholder(&self, i: usize) -> Window<'a, T> {
        match self.kind() {
            WindowKind::Rolling(width) => {
                Cow::Owned(prepend_na(&self.data[..=i], width - (i + 1)))
            }
            WindowKind::Expanding(_) => Cow::Owned(nans(i + 1)),
        }
    }
}

impl<'a, T: SeriesElement> Iterator for Windows<'a, T> {
    type Item = Window<'a, T>;

    fn next(&mut self) -> Option<Window<'a, T>> {
        if let Some(i) = self.placeholders.next() {
            return Some(self.placeholder(i));
        }
        let data = self.data;
        self.full.next().map(|range| Cow::Borrowed(&data[range]))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.placeholders.len() + self.full.len();
        (remaining, Some(remaining))
    }
}

impl<T: SeriesElement> ExactSizeIterator for Windows<'_, T> {}

impl<T: SeriesElement> FusedIterator for Windows<'_, T> {}

#[derive(Debug, Clone)]
enum Inner<'a, T: SeriesElement> {
    Lazy(Windows<'a, T>),
    Eager(std::vec::IntoIter<Window<'a, T>>),
}

/// The windows of a sequence, either generated on demand or already
/// collected.
///
/// Both forms iterate in increasing end position and are single-pass.
#[derive(Debug, Clone)]
pub struct WindowStream<'a, T: SeriesElement> {
    inner: Inner<'a, T>,
}

impl<'a, T: SeriesElement> WindowStream<'a, T> {
    pub(crate) fn new(windows: Windows<'a, T>, materialize: bool) -> Self {
        let inner = if materialize {
            Inner::Eager(windows.collect::<Vec<_>>().into_iter())
        } else {
            Inner::Lazy(windows)
        };
        Self { inner }
    }

    /// Returns true if every window was built up front.
    #[must_use]
    pub const fn is_materialized(&self) -> bool {
        matches!(self.inner, Inner::Eager(_))
    }

    /// Collects the remaining windows.
    #[must_use]
    pub fn into_vec(self) -> Vec<Window<'a, T>> {
        match self.inner {
            Inner::Lazy(windows) => windows.collect(),
            Inner::Eager(windows) => windows.collect(),
        }
    }
}

impl<'a, T: SeriesElement> Iterator for WindowStream<'a, T> {
    type Item = Window<'a, T>;

    #[inline]
    fn next(&mut self) -> Option<Window<'a, T>> {
        match &mut self.inner {
            Inner::Lazy(windows) => windows.next(),
            Inner::Eager(windows) => windows.next(),
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.inner {
            Inner::Lazy(windows) => windows.size_hint(),
            Inner::Eager(windows) => windows.size_hint(),
        }
    }
}

impl<T: SeriesElement> ExactSizeIterator for WindowStream<'_, T> {}

impl<T: SeriesElement> FusedIterator for WindowStream<'_, T> {}
