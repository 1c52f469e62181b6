//! Error types for interpolation and line-search operations.
//!
//! ## Purpose
//!
//! This module defines the crate-wide error enum returned by every fallible
//! operation. Errors fall into three groups: precondition violations
//! (malformed input or out-of-order API calls), numerical-conditioning
//! failures (a singular interpolation system), and line-search divergence
//! (the iteration budget ran out before the Wolfe conditions held).
//!
//! ## Design notes
//!
//! * **Hand-written `Display`**: messages are exact and stable so callers
//!   (and tests) can rely on them.
//! * **no_std compatible**: `std::error::Error` is only implemented when the
//!   `std` feature is enabled.
//! * **Recoverability**: `SingularSystem` and `LineSearchDivergence` are
//!   expected runtime outcomes the caller may react to; the remaining
//!   variants indicate caller bugs and are reported fail-fast.
//!
//! ## Non-goals
//!
//! * This module does not capture backtraces or wrap foreign error types.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::string::String;

// External dependencies
use core::fmt;

// ============================================================================
// Error Enum
// ============================================================================

/// Errors produced by the interpolator and the line search.
#[derive(Debug, Clone, PartialEq)]
pub enum MathKitError {
    /// Input arrays were empty.
    EmptyInput,

    /// Flattened point array length does not match `values.len() * dimensions`.
    MismatchedInputs {
        /// Length of the flattened point array.
        x_len: usize,
        /// Number of target values.
        y_len: usize,
    },

    /// The number of dimensions is zero.
    InvalidDimensions(usize),

    /// An input contained a non-finite (NaN or infinite) value.
    InvalidNumericValue(String),

    /// A query point's dimension does not match the stored dataset's.
    DimensionMismatch {
        /// Dimension of the stored dataset.
        expected: usize,
        /// Dimension of the query point.
        got: usize,
    },

    /// `calc_weights` was called before `set_data`.
    NoData,

    /// `calc_value` was called before `calc_weights`.
    WeightsNotComputed,

    /// A kernel shape parameter was non-positive or non-finite.
    InvalidKernelParameter(f64),

    /// A ridge regularization strength was non-positive or non-finite.
    InvalidRegularization(f64),

    /// The interpolation system is singular and regularization was disabled.
    SingularSystem {
        /// Number of data points (the system is `size` x `size`).
        size: usize,
    },

    /// Line-search step bounds were invalid.
    InvalidStepBounds {
        /// Initial trial step length.
        alpha_init: f64,
        /// Maximum step length.
        alpha_max: f64,
    },

    /// The Wolfe threshold constants were out of order or out of range.
    InvalidWolfeConstants {
        /// Sufficient-decrease constant.
        c1: f64,
        /// Curvature constant.
        c2: f64,
    },

    /// The supplied search direction is not a descent direction.
    NotDescentDirection(f64),

    /// The line search exhausted its iteration budget without converging.
    LineSearchDivergence {
        /// Number of iterations performed before giving up.
        iterations: usize,
    },
}

// ============================================================================
// Display Implementation
// ============================================================================

impl fmt::Display for MathKitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyInput => write!(f, "Input arrays are empty"),
            Self::MismatchedInputs { x_len, y_len } => write!(
                f,
                "Length mismatch: x has {} coordinates, y has {} values",
                x_len, y_len
            ),
            Self::InvalidDimensions(d) => {
                write!(f, "Invalid dimensions: {} (must be at least 1)", d)
            }
            Self::InvalidNumericValue(detail) => {
                write!(f, "Invalid numeric value: {}", detail)
            }
            Self::DimensionMismatch { expected, got } => write!(
                f,
                "Dimension mismatch: query point has {} coordinates, dataset has {}",
                got, expected
            ),
            Self::NoData => write!(f, "No dataset present: call set_data before calc_weights"),
            Self::WeightsNotComputed => write!(
                f,
                "Weights have not been computed: call calc_weights before calc_value"
            ),
            Self::InvalidKernelParameter(theta) => write!(
                f,
                "Invalid kernel shape parameter: {} (must be > 0 and finite)",
                theta
            ),
            Self::InvalidRegularization(lambda) => write!(
                f,
                "Invalid regularization strength: {} (must be > 0 and finite)",
                lambda
            ),
            Self::SingularSystem { size } => write!(
                f,
                "Interpolation system of size {} is singular (enable ridge regularization or remove duplicate points)",
                size
            ),
            Self::InvalidStepBounds {
                alpha_init,
                alpha_max,
            } => write!(
                f,
                "Invalid step bounds: alpha_init={}, alpha_max={} (require 0 < alpha_init <= alpha_max, both finite)",
                alpha_init, alpha_max
            ),
            Self::InvalidWolfeConstants { c1, c2 } => write!(
                f,
                "Invalid Wolfe constants: c1={}, c2={} (require 0 < c1 < c2 < 1)",
                c1, c2
            ),
            Self::NotDescentDirection(slope) => write!(
                f,
                "Not a descent direction: initial slope {} (must be negative)",
                slope
            ),
            Self::LineSearchDivergence { iterations } => write!(
                f,
                "Line search failed to satisfy the strong Wolfe conditions within {} iterations",
                iterations
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for MathKitError {}
