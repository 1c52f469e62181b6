//! # mathkit — Numerical Building Blocks for Rust
//!
//! Two independent, production-oriented numerical primitives used across
//! scientific and engineering computation:
//!
//! - **RBF scattered-data interpolation**: fit a smooth surrogate through
//!   arbitrary N-dimensional scattered data and evaluate it anywhere.
//! - **Strong-Wolfe line search**: the step-length subroutine at the heart of
//!   quasi-Newton and other gradient-based optimizers.
//!
//! ## What is RBF interpolation?
//!
//! A radial basis function (RBF) interpolant is a weighted sum of kernel
//! evaluations centered at the data points:
//!
//! ```text
//! s(x) = Σᵢ wᵢ · k(‖xᵢ − x‖)
//! ```
//!
//! The kernel `k` depends only on the distance to each data point, which
//! makes the method meshfree: it needs no grid, works in any dimension, and
//! reproduces the data exactly (the weights come from solving the N×N Gram
//! system `G·w = y`). With ridge regularization it instead trades a little
//! exactness for a better-conditioned solve, which tolerates near-duplicate
//! points.
//!
//! **Common applications:**
//! - Surrogate models over expensive simulations or measurements
//! - Response-surface reconstruction from scattered samples
//! - Smooth interpolation of geospatial or experimental data
//!
//! ## Quick Start: Interpolation
//!
//! ```rust
//! use mathkit_rs::prelude::*;
//!
//! // Scattered 1-D samples.
//! let points: Vec<f64> = vec![0.0, 1.0, 2.0, 3.0];
//! let values = vec![0.0, 0.8, 0.9, 0.1];
//!
//! // Fit an exact Gaussian-kernel interpolant.
//! let mut interpolator = RbfInterpolator::new(RbfKernel::Gaussian(1.0));
//! interpolator.set_data(&points, &values, 1)?;
//! interpolator.calc_weights(Regularization::Exact)?;
//!
//! // The interpolant passes through every sample.
//! let fitted = interpolator.calc_value(&[2.0])?;
//! assert!((fitted - 0.9).abs() < 1e-6);
//!
//! // And evaluates anywhere in between.
//! let between = interpolator.calc_value(&[1.5])?;
//! assert!(between.is_finite());
//! # Result::<(), MathKitError>::Ok(())
//! ```
//!
//! Multivariate data uses flattened row-major storage with an explicit
//! dimension count:
//!
//! ```rust
//! use mathkit_rs::prelude::*;
//!
//! // Four corners of the unit square, z = x + y.
//! let points: Vec<f64> = vec![
//!     0.0, 0.0, //
//!     1.0, 0.0, //
//!     0.0, 1.0, //
//!     1.0, 1.0, //
//! ];
//! let values = vec![0.0, 1.0, 1.0, 2.0];
//!
//! let mut interpolator = RbfInterpolator::new(RbfKernel::Linear);
//! interpolator.set_data(&points, &values, 2)?;
//! interpolator.calc_weights(Regularization::Exact)?;
//!
//! // Exact recovery at the data points.
//! let corner = interpolator.calc_value(&[1.0, 0.0])?;
//! assert!((corner - 1.0).abs() < 1e-6);
//! # Result::<(), MathKitError>::Ok(())
//! ```
//!
//! ### Kernels
//!
//! | Kernel                        | Formula                  | Shape parameter |
//! |-------------------------------|--------------------------|-----------------|
//! | `RbfKernel::Gaussian(θ)`      | `exp(−θ·r²)`             | θ > 0           |
//! | `RbfKernel::ThinPlateSpline`  | `r²·ln(r)`, `k(0) = 0`   | —               |
//! | `RbfKernel::Linear`           | `\|r\|`                  | —               |
//! | `RbfKernel::InverseQuadratic(θ)` | `1/√(r² + θ²)`        | θ > 0           |
//!
//! **Choosing a kernel:**
//!
//! * **Thin-plate spline** (default): a solid general-purpose choice for
//!   smooth surfaces; no parameter to tune.
//! * **Gaussian**: infinitely smooth and strongly localized; larger θ
//!   sharpens the kernel so distant data stops influencing the fit.
//! * **Linear**: simplest and cheapest; piecewise-conic surfaces.
//! * **Inverse quadratic**: smooth with heavier tails than Gaussian; larger
//!   θ flattens the response.
//!
//! ### Regularization
//!
//! The exact system is singular when two data points coincide, and badly
//! conditioned when they nearly do. Ridge regularization adds `λ·I` to the
//! Gram matrix:
//!
//! ```rust
//! use mathkit_rs::prelude::*;
//!
//! // Conflicting duplicate samples make the exact system unsolvable, but a
//! // ridge solve shrinks through the conflict.
//! let points: Vec<f64> = vec![0.0, 0.0, 1.0];
//! let values = vec![0.0, 1.0, 0.5];
//!
//! let mut interpolator = RbfInterpolator::new(RbfKernel::Gaussian(1.0));
//! interpolator.set_data(&points, &values, 1)?;
//!
//! assert!(matches!(
//!     interpolator.calc_weights(Regularization::Exact),
//!     Err(MathKitError::SingularSystem { .. })
//! ));
//!
//! interpolator.calc_weights(Regularization::ridge())?; // λ = 0.001
//! assert!(interpolator.calc_value(&[0.0])?.is_finite());
//! # Result::<(), MathKitError>::Ok(())
//! ```
//!
//! Larger `λ` improves conditioning and increases the deviation from the
//! data values; `Regularization::Ridge(lambda)` sets it explicitly.
//!
//! ## Quick Start: Line Search
//!
//! The line search finds a step length `α` along a descent direction
//! satisfying the **strong Wolfe conditions**:
//!
//! ```text
//! φ(α) ≤ φ(0) + c1·α·φ'(0)      (sufficient decrease)
//! |φ'(α)| ≤ −c2·φ'(0)           (curvature)
//! ```
//!
//! where `φ(α) = f(x + α·p)` is the objective restricted to the search ray.
//!
//! ```rust
//! use mathkit_rs::prelude::*;
//!
//! // f(x) = ‖x‖², ∇f(x) = 2x.
//! let f = |x: &[f64]| x.iter().map(|xi| xi * xi).sum::<f64>();
//! let gradient = |x: &[f64]| x.iter().map(|xi| 2.0 * xi).collect::<Vec<_>>();
//!
//! let x = [4.0, 3.0];
//! let direction = [-8.0, -6.0]; // steepest descent
//!
//! let step = strong_wolfe_line_search(
//!     f,
//!     gradient,
//!     &x,
//!     &direction,
//!     1.0,  // initial trial step
//!     10.0, // maximum step
//!     &LineSearchParams::default(),
//! )?;
//!
//! // The exact minimizer along this ray is α = 0.5.
//! assert!((step - 0.5).abs() < 1e-9);
//! # Result::<(), MathKitError>::Ok(())
//! ```
//!
//! The caller guarantees the direction is a descent direction; anything else
//! is rejected fail-fast:
//!
//! ```rust
//! use mathkit_rs::prelude::*;
//!
//! let f = |x: &[f64]| x[0] * x[0];
//! let gradient = |x: &[f64]| vec![2.0 * x[0]];
//!
//! // Uphill direction at x = 1.
//! let result = strong_wolfe_line_search(
//!     f,
//!     gradient,
//!     &[1.0],
//!     &[1.0],
//!     1.0,
//!     10.0,
//!     &LineSearchParams::default(),
//! );
//! assert!(matches!(result, Err(MathKitError::NotDescentDirection(_))));
//! # Result::<(), MathKitError>::Ok(())
//! ```
//!
//! ### Parameters
//!
//! | Parameter                  | Default | Meaning                                |
//! |----------------------------|---------|----------------------------------------|
//! | `c1`                       | 1e-4    | Sufficient-decrease threshold          |
//! | `c2`                       | 0.9     | Curvature threshold (`0 < c1 < c2 < 1`)|
//! | `max_bracket_iterations`   | 100     | Budget for the bracketing phase        |
//! | `max_zoom_iterations`      | 50      | Budget for the zoom refinement         |
//!
//! Exhausting either budget yields `MathKitError::LineSearchDivergence`:
//! an expected, recoverable outcome the outer optimizer should treat as
//! "no acceptable step found".
//!
//! ## Result and Error Handling
//!
//! Every fallible operation returns `Result<_, MathKitError>`; the `?`
//! operator is idiomatic:
//!
//! ```rust
//! use mathkit_rs::prelude::*;
//!
//! let interpolator = RbfInterpolator::<f64>::default();
//!
//! // Out-of-order calls are rejected with a descriptive error.
//! match interpolator.calc_value(&[0.0]) {
//!     Err(MathKitError::WeightsNotComputed) => {}
//!     other => panic!("unexpected: {:?}", other),
//! }
//! ```
//!
//! Precondition violations (mismatched lengths, non-finite inputs,
//! out-of-order calls) indicate caller bugs; `SingularSystem` and
//! `LineSearchDivergence` are runtime outcomes the caller may recover from
//! (e.g. by retrying with regularization, or restarting the outer optimizer
//! with a smaller initial step).
//!
//! ## Concurrency
//!
//! Both components are synchronous and lock-free. An interpolator may be
//! read (`calc_value`) concurrently from many threads once weights are
//! computed; writes (`set_data`, `calc_weights`) require external
//! synchronization. The line search is pure and reentrant.
//!
//! ## Minimal Usage (no_std / Embedded)
//!
//! The crate supports `no_std` environments. Disable default features and
//! enable `libm` for the math intrinsics:
//!
//! ```toml
//! [dependencies]
//! mathkit-rs = { version = "0.1", default-features = false, features = ["libm"] }
//! ```
//!
//! **Tips for embedded/no_std usage:**
//! - Use `f32` instead of `f64` to reduce memory footprint
//! - Keep datasets small: the weight solve is O(N³) time and O(N²) memory
//!
//! ## References
//!
//! - Nocedal, J. & Wright, S. J. (2006). "Numerical Optimization", 2nd ed.
//!   (line search: Algorithms 3.5 and 3.6)
//! - Fasshauer, G. (2007). "Meshfree Approximation Methods with MATLAB"
//!
//! ## License
//!
//! See the repository for license information and contribution guidelines.

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// ============================================================================
// Internal Modules
// ============================================================================

// Layer 1: Primitives - the crate-wide error type.
mod primitives;

// Layer 2: Math - pure mathematical functions.
//
// Contains the radial kernel family, Euclidean distance over flattened nD
// storage, and the dense linear-algebra backend.
mod math;

// Layer 3: Engine - fail-fast input validation shared by the algorithm
// entry points.
mod engine;

// Layer 4: Algorithms - the two core algorithms.
//
// Contains the RBF interpolator and the strong-Wolfe line search.
mod algorithms;

// ============================================================================
// Prelude
// ============================================================================

/// Standard prelude.
///
/// This module is intended to be wildcard-imported for convenient access to
/// the most commonly used types:
///
/// ```
/// use mathkit_rs::prelude::*;
/// ```
pub mod prelude {
    pub use crate::algorithms::interpolation::{RbfInterpolator, Regularization};
    pub use crate::algorithms::line_search::{strong_wolfe_line_search, LineSearchParams};
    pub use crate::math::kernel::RbfKernel;
    pub use crate::math::linalg::FloatLinalg;
    pub use crate::primitives::errors::MathKitError;
}

// ============================================================================
// Testing re-exports
// ============================================================================

/// Internal modules for development and testing.
///
/// This module re-exports internal modules for development and testing
/// purposes. It is only available with the `dev` feature enabled.
///
/// **Warning**: These are internal implementation details and may change
/// without notice. Do not use in production code.
#[cfg(feature = "dev")]
pub mod internals {
    /// Internal primitive types.
    pub mod primitives {
        pub use crate::primitives::*;
    }
    /// Internal math functions.
    pub mod math {
        pub use crate::math::*;
    }
    /// Internal validation engine.
    pub mod engine {
        pub use crate::engine::*;
    }
    /// Internal core algorithms.
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
}
