//! Radial kernel functions for scattered-data interpolation.
//!
//! ## Purpose
//!
//! This module provides the closed family of radial basis kernels used by the
//! interpolator. A radial kernel maps a nonnegative distance `r` to a scalar
//! value; the interpolant is a weighted sum of kernel evaluations centered at
//! the data points.
//!
//! ## Design notes
//!
//! * **Sum-type dispatch**: the kernel set is closed, so variants live in one
//!   enum and dispatch through a `match` rather than a trait object.
//! * **Value semantics**: kernels are small `Copy` values, immutable after
//!   construction, and freely shared across interpolator instances.
//! * **Shape parameters**: Gaussian and inverse-quadratic carry one scalar θ;
//!   θ is validated (> 0, finite) before weights are computed.
//!
//! ## Key concepts
//!
//! * **Localization**: for Gaussian and inverse-quadratic kernels, larger θ
//!   sharpens the kernel (faster decay with distance).
//! * **Origin behavior**: every kernel accepts `r = 0` and returns a finite
//!   value there.
//!
//! ## Invariants
//!
//! * `evaluate(0)` is finite for every variant; thin-plate spline returns
//!   exactly 0 (the `r² ln r → 0` limit, overriding the NaN that IEEE
//!   evaluation would produce).
//!
//! ## Non-goals
//!
//! * This module does not compute distances (see [`crate::math::distance`]).
//! * This module does not tune shape parameters automatically.

// External dependencies
use num_traits::Float;

// ============================================================================
// Kernel Enum
// ============================================================================

/// Radial basis kernel for scattered-data interpolation.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum RbfKernel<T> {
    /// Gaussian kernel: `exp(-θ·r²)`, θ > 0.
    Gaussian(T),

    /// Thin-plate spline kernel: `r²·ln(r)`, with the convention `k(0) = 0`.
    #[default]
    ThinPlateSpline,

    /// Linear kernel: `|r|`.
    Linear,

    /// Inverse quadratic kernel: `1 / sqrt(r² + θ²)`, θ > 0.
    InverseQuadratic(T),
}

// ============================================================================
// Kernel Evaluation
// ============================================================================

impl<T: Float> RbfKernel<T> {
    /// Evaluate the kernel at distance `r`.
    ///
    /// The caller guarantees `r >= 0` (interpolation distances are Euclidean
    /// norms, hence nonnegative).
    #[inline]
    pub fn evaluate(&self, r: T) -> T {
        debug_assert!(r >= T::zero(), "Kernel distance must be nonnegative");
        match self {
            Self::Gaussian(theta) => (-*theta * r * r).exp(),
            Self::ThinPlateSpline => {
                // r² ln r → 0 as r → 0; guard the undefined logarithm at the origin.
                if r < T::epsilon() {
                    T::zero()
                } else {
                    r * r * r.ln()
                }
            }
            Self::Linear => r.abs(),
            Self::InverseQuadratic(theta) => T::one() / (r * r + *theta * *theta).sqrt(),
        }
    }

    /// Return the shape parameter θ, if this variant carries one.
    #[inline]
    pub fn shape_parameter(&self) -> Option<T> {
        match self {
            Self::Gaussian(theta) | Self::InverseQuadratic(theta) => Some(*theta),
            Self::ThinPlateSpline | Self::Linear => None,
        }
    }
}
