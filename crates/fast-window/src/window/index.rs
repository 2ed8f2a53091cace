//! Index window stream.
//!
//! [`IndexWindows`] enumerates the positions of every full window over
//! `[0, len)` without touching any data. The view generators and the apply
//! engine are both driven by it, which keeps window enumeration independent
//! of how many co-indexed sequences get sliced.

use std::iter::FusedIterator;
use std::ops::Range;

use crate::error::Result;
use crate::traits::{validate_min_length, validate_window};

/// Window sizing policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum WindowKind {
    /// Fixed-width window sliding one position at a time.
    Rolling(usize),
    /// Window anchored at index 0, growing by one element per step,
    /// starting at the given minimum period count.
    Expanding(usize),
}

impl WindowKind {
    /// Width of a rolling window or minimum length of an expanding one.
    #[inline]
    #[must_use]
    pub const fn size(self) -> usize {
        match self {
            Self::Rolling(size) | Self::Expanding(size) => size,
        }
    }

    /// Number of leading positions with no full window (`size - 1`).
    #[inline]
    #[must_use]
    pub const fn lookback(self) -> usize {
        self.size().saturating_sub(1)
    }

    /// Name of the size parameter, used in error messages.
    #[must_use]
    pub const fn parameter(self) -> &'static str {
        match self {
            Self::Rolling(_) => "window",
            Self::Expanding(_) => "min_periods",
        }
    }

    /// Name of the operation, used in error messages and logs.
    #[must_use]
    pub const fn operation(self) -> &'static str {
        match self {
            Self::Rolling(_) => "rolling",
            Self::Expanding(_) => "expanding",
        }
    }

    /// Checks the size itself and that `len` elements can hold one window.
    ///
    /// # Errors
    ///
    /// - `Error::InvalidWindow` if the size is zero
    /// - `Error::InsufficientData` if `len` is smaller than the size
    pub fn validate(self, len: usize) -> Result<()> {
        validate_window(self.size(), self.parameter())?;
        validate_min_length(len, self.size(), self.operation())
    }

    /// Range of the full window whose last element is at `end - 1`.
    #[inline]
    const fn range(self, end: usize) -> Range<usize> {
        match self {
            Self::Rolling(width) => (end - width)..end,
            Self::Expanding(_) => 0..end,
        }
    }
}

/// Forward-only iterator over the index ranges of every full window.
///
/// Yields `len - size + 1` ranges in increasing end position. Not
/// restartable: build a new one to iterate again.
///
/// # Example
///
/// ```
/// use fast_window::window::{IndexWindows, WindowKind};
///
/// let ranges: Vec<_> = IndexWindows::new(WindowKind::Rolling(2), 4).unwrap().collect();
/// assert_eq!(ranges, vec![0..2, 1..3, 2..4]);
///
/// let ranges: Vec<_> = IndexWindows::new(WindowKind::Expanding(3), 4).unwrap().collect();
/// assert_eq!(ranges, vec![0..3, 0..4]);
/// ```
#[derive(Debug, Clone)]
pub struct IndexWindows {
    kind: WindowKind,
    /// Exclusive end of the next window.
    next_end: usize,
    len: usize,
}

impl IndexWindows {
    /// Creates the index stream for `len` positions.
    ///
    /// # Errors
    ///
    /// - `Error::InvalidWindow` if the window size is zero
    /// - `Error::InsufficientData` if `len` is smaller than the window size
    pub fn new(kind: WindowKind, len: usize) -> Result<Self> {
        kind.validate(len)?;
        Ok(Self {
            kind,
            next_end: kind.size(),
            len,
        })
    }

    /// The sizing policy of this stream.
    #[must_use]
    pub const fn kind(&self) -> WindowKind {
        self.kind
    }
}

impl Iterator for IndexWindows {
    type Item = Range<usize>;

    #[inline]
    fn next(&mut self) -> Option<Range<usize>> {
        if self.next_end > self.len {
            return None;
        }
        let range = self.kind.range(self.next_end);
        self.next_end += 1;
        Some(range)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.len + 1).saturating_sub(self.next_end);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for IndexWindows {}

impl FusedIterator for IndexWindows {}
