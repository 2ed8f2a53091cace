//! Window generators.
//!
//! All generators are driven by [`IndexWindows`], which enumerates the index
//! range of every full window in increasing end position. On top of it:
//!
//! - [`rolling`]: fixed-width windows, placeholders are NaN-padded prefixes
//! - [`expanding`]: start-anchored growing windows, placeholders are NaN buffers
//! - [`rolling_matrix`]: the eager rolling form as a flat `len × window` buffer
//!
//! Lazy streams are single-pass and not restartable. Materialized streams
//! hold every window up front; real windows stay borrowed in both forms.

pub mod expanding;
pub mod index;
pub mod rolling;
pub mod stream;

pub use expanding::{expanding, expanding_lookback};
pub use index::{IndexWindows, WindowKind};
pub use rolling::{rolling, rolling_lookback, rolling_matrix, rolling_min_len};
pub use stream::{Window, WindowStream, Windows};
