//! Error types for fast-window.
//!
//! Every fallible operation in the crate returns [`Result<T>`], and every
//! failure is one of the [`Error`] variants below. Checks on window sizes,
//! input shapes and lengths run before any window is generated or any worker
//! is started, so an error never comes with partial output.

use thiserror::Error;

/// The main error type for fast-window operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The window size (or minimum period count) is invalid.
    ///
    /// Windows must hold at least one element.
    #[error("invalid {parameter} {value}: {reason}")]
    InvalidWindow {
        /// Name of the parameter, `"window"` or `"min_periods"`.
        parameter: &'static str,
        /// The value that was provided.
        value: usize,
        /// Description of why the value is invalid.
        reason: &'static str,
    },

    /// A numeric parameter outside of the window size is invalid.
    ///
    /// Raised by the step-range helpers for non-positive steps or
    /// non-finite bounds.
    #[error("invalid parameter {name}: {reason}")]
    InvalidParameter {
        /// Name of the parameter.
        name: &'static str,
        /// Description of why the value is invalid.
        reason: &'static str,
    },

    /// A worker count of zero was requested.
    #[error("invalid parallelism: worker count must be at least 1")]
    InvalidParallelism,

    /// An apply call was given no input sequences.
    #[error("no input sequences: at least one sequence is required")]
    NoSequences,

    /// The input sequence is shorter than the window requires.
    #[error("insufficient data for {operation}: required {required} elements, got {actual}")]
    InsufficientData {
        /// The operation that rejected the input.
        operation: &'static str,
        /// The number of elements required.
        required: usize,
        /// The number of elements provided.
        actual: usize,
    },

    /// An input is not one-dimensional.
    #[error("input {index} has {ndim} dimensions, only 1-D sequences are supported")]
    InvalidShape {
        /// Position of the offending input in the argument list.
        index: usize,
        /// Number of dimensions the input has.
        ndim: usize,
    },

    /// Co-indexed inputs have different lengths.
    #[error("input {index} has length {actual}, expected {expected} (all inputs must be the same length)")]
    LengthMismatch {
        /// Position of the offending input in the argument list.
        index: usize,
        /// Length of the first input.
        expected: usize,
        /// Length of the offending input.
        actual: usize,
    },

    /// The caller-supplied function failed for one window.
    ///
    /// The whole apply call fails with the first such error; no partial
    /// result is returned.
    #[error("apply function failed for window ending at position {position}: {message}")]
    UserFunction {
        /// Output position of the failed window (its end index in the input).
        position: usize,
        /// Rendered error returned by the function.
        message: String,
    },

    /// The worker pool for a parallel call could not be built.
    #[error("failed to build worker pool: {reason}")]
    WorkerPool {
        /// Rendered error from the pool builder.
        reason: String,
    },
}

/// Convenience type alias for Results using the fast-window Error type.
pub type Result<T> = std::result::Result<T, Error>;
