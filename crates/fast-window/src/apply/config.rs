//! Builder-style configuration for apply calls.
//!
//! [`RollingApply`] and [`ExpandingApply`] bundle the window size and the
//! worker setting so they can be built once and reused across calls.
//!
//! # Example
//!
//! ```
//! use fast_window::apply::RollingApply;
//! use fast_window::dispatch::Parallelism;
//!
//! let mean = RollingApply::new(3).parallelism(Parallelism::Workers(2));
//! let data = vec![1.0_f64, 2.0, 3.0, 4.0];
//! let out = mean
//!     .run(&[&data], |w: &[&[f64]]| w[0].iter().sum::<f64>() / 3.0)
//!     .unwrap();
//!
//! assert_eq!(mean.lookback(), 2);
//! assert!((out[3] - 3.0).abs() < 1e-10);
//! ```

use std::fmt::Display;

use super::{expanding_apply, rolling_apply, try_expanding_apply, try_rolling_apply};
use crate::dispatch::Parallelism;
use crate::error::Result;
use crate::input::SeriesInput;
use crate::traits::SeriesElement;
use crate::window::{expanding_lookback, rolling_lookback, rolling_min_len};

/// Configuration for a rolling apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RollingApply {
    window: usize,
    parallelism: Parallelism,
}

impl Default for RollingApply {
    /// Window of 1, sequential.
    fn default() -> Self {
        Self {
            window: 1,
            parallelism: Parallelism::Sequential,
        }
    }
}

impl RollingApply {
    /// Creates a sequential rolling configuration with the given width.
    #[must_use]
    pub const fn new(window: usize) -> Self {
        Self {
            window,
            parallelism: Parallelism::Sequential,
        }
    }

    /// Sets the window width.
    #[must_use]
    pub const fn window(mut self, window: usize) -> Self {
        self.window = window;
        self
    }

    /// Sets the worker setting.
    ///
    /// Default: `Parallelism::Sequential`
    #[must_use]
    pub const fn parallelism(mut self, parallelism: Parallelism) -> Self {
        self.parallelism = parallelism;
        self
    }

    /// Returns the window width.
    #[must_use]
    pub const fn get_window(&self) -> usize {
        self.window
    }

    /// Returns the worker setting.
    #[must_use]
    pub const fn get_parallelism(&self) -> Parallelism {
        self.parallelism
    }

    /// Number of leading NaN entries in the output.
    #[must_use]
    pub const fn lookback(&self) -> usize {
        rolling_lookback(self.window)
    }

    /// Minimum input length accepted by this configuration.
    #[must_use]
    pub const fn min_len(&self) -> usize {
        rolling_min_len(self.window)
    }

    /// Runs [`rolling_apply`] with this configuration.
    ///
    /// # Errors
    ///
    /// See [`rolling_apply`].
    pub fn run<T, R, I, F>(&self, inputs: &[I], func: F) -> Result<Vec<R>>
    where
        T: SeriesElement,
        R: SeriesElement,
        I: SeriesInput<T>,
        F: Fn(&[&[T]]) -> R + Send + Sync,
    {
        rolling_apply(inputs, self.window, self.parallelism, func)
    }

    /// Runs [`try_rolling_apply`] with this configuration.
    ///
    /// # Errors
    ///
    /// See [`try_rolling_apply`].
    pub fn try_run<T, R, I, F, E>(&self, inputs: &[I], func: F) -> Result<Vec<R>>
    where
        T: SeriesElement,
        R: SeriesElement,
        I: SeriesInput<T>,
        F: Fn(&[&[T]]) -> std::result::Result<R, E> + Send + Sync,
        E: Display,
    {
        try_rolling_apply(inputs, self.window, self.parallelism, func)
    }
}

/// Configuration for an expanding apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ExpandingApply {
    min_periods: usize,
    parallelism: Parallelism,
}

impl Default for ExpandingApply {
    /// `min_periods` of 1, sequential.
    fn default() -> Self {
        Self {
            min_periods: 1,
            parallelism: Parallelism::Sequential,
        }
    }
}

impl ExpandingApply {
    /// Creates a sequential expanding configuration.
    #[must_use]
    pub const fn new(min_periods: usize) -> Self {
        Self {
            min_periods,
            parallelism: Parallelism::Sequential,
        }
    }

    /// Sets the size of the first full window.
    #[must_use]
    pub const fn min_periods(mut self, min_periods: usize) -> Self {
        self.min_periods = min_periods;
        self
    }

    /// Sets the worker setting.
    #[must_use]
    pub const fn parallelism(mut self, parallelism: Parallelism) -> Self {
        self.parallelism = parallelism;
        self
    }

    /// Returns the size of the first full window.
    #[must_use]
    pub const fn get_min_periods(&self) -> usize {
        self.min_periods
    }

    /// Returns the worker setting.
    #[must_use]
    pub const fn get_parallelism(&self) -> Parallelism {
        self.parallelism
    }

    /// Number of leading NaN entries in the output.
    #[must_use]
    pub const fn lookback(&self) -> usize {
        expanding_lookback(self.min_periods)
    }

    /// Minimum input length accepted by this configuration.
    #[must_use]
    pub const fn min_len(&self) -> usize {
        if self.min_periods == 0 {
            1
        } else {
            self.min_periods
        }
    }

    /// Runs [`expanding_apply`] with this configuration.
    ///
    /// # Errors
    ///
    /// See [`expanding_apply`].
    pub fn run<T, R, I, F>(&self, inputs: &[I], func: F) -> Result<Vec<R>>
    where
        T: SeriesElement,
        R: SeriesElement,
        I: SeriesInput<T>,
        F: Fn(&[&[T]]) -> R + Send + Sync,
    {
        expanding_apply(inputs, self.min_periods, self.parallelism, func)
    }

    /// Runs [`try_expanding_apply`] with this configuration.
    ///
    /// # Errors
    ///
    /// See [`try_expanding_apply`].
    pub fn try_run<T, R, I, F, E>(&self, inputs: &[I], func: F) -> Result<Vec<R>>
    where
        T: SeriesElement,
        R: SeriesElement,
        I: SeriesInput<T>,
        F: Fn(&[&[T]]) -> std::result::Result<R, E> + Send + Sync,
        E: Display,
    {
        try_expanding_apply(inputs, self.min_periods, self.parallelism, func)
    }
}
