//! fast-window: rolling and expanding window views and parallel window apply
//!
//! This crate turns a numeric series into a sequence of windows and applies
//! a reduction over every window, optionally across worker threads.
//!
//! # Features
//!
//! - **Views**: rolling and expanding windows borrowed from the input, with
//!   NaN placeholders for the leading partial windows
//! - **Apply**: one result per position, NaN-padded to the input length,
//!   over one or several aligned inputs
//! - **Parallel**: ordered, all-or-nothing dispatch on a rayon pool
//!   (`parallel` feature, on by default)
//! - **Generics**: works with both `f32` and `f64`
//!
//! # Quick Start
//!
//! ```
//! use fast_window::prelude::*;
//!
//! let data = vec![1.0_f64, 2.0, 3.0, 4.0, 5.0];
//!
//! let windows: Vec<_> = rolling(&data, 3, true, false).unwrap().collect();
//! assert_eq!(&*windows[0], &[1.0, 2.0, 3.0]);
//!
//! let sums = rolling_apply(&[&data], 3, Parallelism::Sequential, |w: &[&[f64]]| {
//!     w[0].iter().sum::<f64>()
//! })
//! .unwrap();
//! assert!(sums[1].is_nan());
//! assert!((sums[2] - 6.0).abs() < 1e-10);
//! ```
//!
//! # Modules
//!
//! - [`window`]: rolling and expanding views, index windows
//! - [`apply`]: rolling and expanding apply, builder configurations
//! - [`dispatch`]: worker settings and ordered parallel maps
//! - [`nan`]: NaN padding and cleaning helpers
//! - [`range`]: exponentially stepped ranges, element-wise map
//! - [`input`]: the [`input::SeriesInput`] trait for apply inputs
//!
//! # Error Handling
//!
//! Every fallible function returns [`Result<T, Error>`]:
//!
//! ```
//! use fast_window::prelude::*;
//!
//! let short = vec![1.0_f64, 2.0];
//! assert!(matches!(
//!     rolling(&short, 5, true, false),
//!     Err(Error::InsufficientData { .. })
//! ));
//! assert!(matches!(
//!     rolling(&short, 0, true, false),
//!     Err(Error::InvalidWindow { .. })
//! ));
//! ```

#![deny(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::perf)]
#![warn(clippy::nursery)]
#![warn(clippy::needless_collect)]
#![warn(clippy::or_fun_call)]
#![warn(clippy::inefficient_to_string)]
#![warn(clippy::useless_conversion)]
#![allow(clippy::module_name_repetitions)]

pub mod apply;
pub mod dispatch;
pub mod error;
pub mod input;
pub mod nan;
pub mod prelude;
pub mod range;
pub mod traits;
pub mod window;

// Re-export commonly used items at crate root
pub use apply::{expanding_apply, rolling_apply, try_expanding_apply, try_rolling_apply};
pub use dispatch::Parallelism;
pub use error::{Error, Result};
pub use traits::SeriesElement;
pub use window::{expanding, rolling, rolling_matrix};
