//! Radial-basis-function scattered-data interpolation.
//!
//! ## Purpose
//!
//! This module provides the [`RbfInterpolator`], a surrogate-model tool that
//! fits an exact (or ridge-regularized) radial-basis-function interpolant
//! through N scattered data points and evaluates it at arbitrary query
//! points.
//!
//! ## Design notes
//!
//! * **Deep-copy semantics**: `set_data` copies the dataset into owned
//!   storage; later caller-side mutation cannot affect the interpolator.
//! * **Symmetric assembly**: the Gram matrix is symmetric by construction
//!   (the kernel depends on distance only), so only the upper triangle is
//!   computed and mirrored.
//! * **Solver selection**: the solve goes through [`FloatLinalg`], which
//!   tries Cholesky (positive-definite kernels) and falls back to QR for
//!   symmetric indefinite Gram matrices.
//! * **Explicit lifecycle**: `set_data` → `calc_weights` → `calc_value`;
//!   out-of-order calls are rejected with descriptive errors.
//!
//! ## Key concepts
//!
//! * **Gram matrix**: `G[i][j] = kernel(||x_j - x_i||)` over the dataset.
//! * **Ridge regularization**: adding `λ·I` to the Gram matrix trades exact
//!   interpolation for conditioning, allowing near-duplicate points.
//!
//! ## Invariants
//!
//! * Stored weights are either empty or exactly one per data point.
//! * `set_data` invalidates previously computed weights.
//!
//! ## Non-goals
//!
//! * No incremental updates: adding a point requires a full `set_data` +
//!   `calc_weights` cycle.
//! * No automatic kernel-parameter tuning.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::engine::validator::Validator;
use crate::math::distance;
use crate::math::kernel::RbfKernel;
use crate::math::linalg::FloatLinalg;
use crate::primitives::errors::MathKitError;

// ============================================================================
// Regularization
// ============================================================================

/// Regularization mode for the interpolation solve.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Regularization<T> {
    /// Solve the exact interpolation system `G·w = y`.
    #[default]
    Exact,

    /// Solve the ridge-regularized system `(G + λ·I)·w = y`, λ > 0.
    Ridge(T),
}

impl<T: Float> Regularization<T> {
    /// Ridge regularization with the conventional default strength λ = 0.001.
    #[inline]
    pub fn ridge() -> Self {
        Self::Ridge(T::from(0.001).unwrap())
    }
}

// ============================================================================
// RBF Interpolator
// ============================================================================

/// Scattered-data interpolator based on radial basis functions.
///
/// The interpolant has the form `s(x) = Σ_i w_i · kernel(||x_i - x||)` over
/// the stored data points `x_i`, with weights `w` obtained from a dense
/// symmetric solve of the Gram system.
///
/// # Example
///
/// ```
/// use mathkit_rs::prelude::*;
///
/// let points: Vec<f64> = vec![0.0, 1.0, 2.0, 3.0];
/// let values = vec![0.0, 0.8, 0.9, 0.1];
///
/// let mut interpolator = RbfInterpolator::new(RbfKernel::Gaussian(1.0));
/// interpolator.set_data(&points, &values, 1)?;
/// interpolator.calc_weights(Regularization::Exact)?;
///
/// let fitted = interpolator.calc_value(&[1.0])?;
/// assert!((fitted - 0.8).abs() < 1e-6);
/// # Result::<(), MathKitError>::Ok(())
/// ```
#[derive(Debug, Clone)]
pub struct RbfInterpolator<T: FloatLinalg> {
    /// Radial kernel; immutable after construction.
    kernel: RbfKernel<T>,

    /// Flattened row-major data points (`n * dimensions` coordinates).
    points: Vec<T>,

    /// Target values, one per data point.
    values: Vec<T>,

    /// Number of coordinates per point.
    dimensions: usize,

    /// Interpolation weights; empty until `calc_weights` succeeds.
    weights: Vec<T>,
}

impl<T: FloatLinalg> Default for RbfInterpolator<T> {
    /// An interpolator with the thin-plate spline kernel and no data.
    fn default() -> Self {
        Self::new(RbfKernel::ThinPlateSpline)
    }
}

impl<T: FloatLinalg> RbfInterpolator<T> {
    /// Create an interpolator with the given kernel.
    pub fn new(kernel: RbfKernel<T>) -> Self {
        Self {
            kernel,
            points: Vec::new(),
            values: Vec::new(),
            dimensions: 0,
            weights: Vec::new(),
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// The kernel this interpolator was constructed with.
    #[inline]
    pub fn kernel(&self) -> &RbfKernel<T> {
        &self.kernel
    }

    /// Number of stored data points.
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether a dataset has been set.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Dimension of the stored data points (0 before `set_data`).
    #[inline]
    pub fn dimensions(&self) -> usize {
        self.dimensions
    }

    /// Computed interpolation weights (empty before `calc_weights`).
    #[inline]
    pub fn weights(&self) -> &[T] {
        &self.weights
    }

    // ========================================================================
    // Lifecycle
    // ========================================================================

    /// Set the data points and their target values.
    ///
    /// `points` is a flattened row-major array of `values.len() * dimensions`
    /// coordinates. The data is copied into owned storage, and any previously
    /// computed weights are invalidated.
    pub fn set_data(
        &mut self,
        points: &[T],
        values: &[T],
        dimensions: usize,
    ) -> Result<(), MathKitError> {
        Validator::validate_dataset(points, values, dimensions)?;

        self.points = points.to_vec();
        self.values = values.to_vec();
        self.dimensions = dimensions;
        self.weights.clear();

        Ok(())
    }

    /// Calculate the interpolation weights.
    ///
    /// Builds the symmetric Gram matrix over the stored dataset, optionally
    /// adds `λ·I` ([`Regularization::Ridge`]), and solves for the weights.
    /// Must be called after [`set_data`](Self::set_data); a singular system
    /// without regularization yields [`MathKitError::SingularSystem`].
    pub fn calc_weights(&mut self, regularization: Regularization<T>) -> Result<(), MathKitError> {
        if self.values.is_empty() {
            return Err(MathKitError::NoData);
        }
        Validator::validate_kernel(&self.kernel)?;
        if let Regularization::Ridge(lambda) = regularization {
            Validator::validate_regularization_strength(lambda)?;
        }

        let n = self.values.len();
        let mut gram = vec![T::zero(); n * n];

        // Upper triangle plus mirror: G is symmetric because the kernel is a
        // function of distance only.
        for i in 0..n {
            for j in i..n {
                let r = distance::euclidean(self.point(i), self.point(j));
                let value = self.kernel.evaluate(r);
                gram[i * n + j] = value;
                gram[j * n + i] = value;
            }
        }

        if let Regularization::Ridge(lambda) = regularization {
            for i in 0..n {
                gram[i * n + i] = gram[i * n + i] + lambda;
            }
        }

        self.weights = T::solve_symmetric(&gram, &self.values, n)
            .ok_or(MathKitError::SingularSystem { size: n })?;

        Ok(())
    }

    /// Calculate the interpolated value at the given query point.
    ///
    /// Must be called after [`calc_weights`](Self::calc_weights). This is a
    /// pure read: it can be called any number of times and concurrently from
    /// multiple readers as long as no write is in flight.
    pub fn calc_value(&self, query: &[T]) -> Result<T, MathKitError> {
        if self.weights.is_empty() {
            return Err(MathKitError::WeightsNotComputed);
        }
        Validator::validate_query(query, self.dimensions)?;

        let mut acc = T::zero();
        for (i, &weight) in self.weights.iter().enumerate() {
            let r = distance::euclidean(self.point(i), query);
            acc = acc + weight * self.kernel.evaluate(r);
        }

        Ok(acc)
    }

    // ========================================================================
    // Internal Helpers
    // ========================================================================

    /// Slice out the `index`-th stored point.
    #[inline]
    fn point(&self, index: usize) -> &[T] {
        distance::point_row(&self.points, self.dimensions, index)
    }
}
