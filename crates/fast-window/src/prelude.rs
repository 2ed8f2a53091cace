//! Commonly used types and functions for convenient importing.
//!
//! ```
//! use fast_window::prelude::*;
//!
//! let data = vec![1.0_f64, 2.0, 3.0, 4.0];
//! let out = ExpandingApply::new(2)
//!     .run(&[&data], |w: &[&[f64]]| w[0].len() as f64)
//!     .unwrap();
//! assert_eq!(count_nan_prefix(&out), 1);
//! ```

// Error types
pub use crate::error::{Error, Result};

// Traits
pub use crate::input::SeriesInput;
pub use crate::traits::SeriesElement;

// Views
pub use crate::window::{
    expanding, expanding_lookback, rolling, rolling_lookback, rolling_matrix, rolling_min_len,
    Window, WindowKind, WindowStream,
};

// Apply
pub use crate::apply::{
    expanding_apply, expanding_apply_with, rolling_apply, rolling_apply_with, try_expanding_apply,
    try_expanding_apply_with, try_rolling_apply, try_rolling_apply_with, ExpandingApply,
    RollingApply,
};

// Dispatch
pub use crate::dispatch::{ParallelMap, Parallelism};

// Helpers
pub use crate::nan::{count_nan_prefix, drop_na, fill_na, fill_not_finite, nans, prepend_na};
pub use crate::range::{apply_map, expstep_range, expstep_range_rounded};
