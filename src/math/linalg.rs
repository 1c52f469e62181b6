//! Linear algebra backend abstraction for the interpolation solve.
//!
//! ## Purpose
//!
//! This module provides a trait-based abstraction over the dense symmetric
//! solve used to compute interpolation weights, standardizing on the
//! optimized nalgebra backend.
//!
//! ## Design notes
//!
//! * Uses Cholesky factorization as the fast path: the Gram matrix of a
//!   positive-definite kernel (Gaussian, inverse quadratic) is symmetric
//!   positive-definite.
//! * Falls back to QR decomposition (Householder reflections) for symmetric
//!   indefinite Gram matrices (thin-plate spline, linear kernels have a zero
//!   diagonal).
//! * The QR solution is residual-checked: an exactly singular system can slip
//!   through a floating-point triangular solve, so a solution whose residual
//!   is far above roundoff is rejected rather than returned.
//! * Generic over `FloatLinalg` types (f32 and f64) which delegate to
//!   nalgebra.
//!
//! ## Non-goals
//!
//! * No sparse or iterative solvers: datasets are dense and small enough for
//!   an O(n³) direct solve.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// ============================================================================
// FloatLinalg Trait
// ============================================================================

/// Helper trait to bridge generic Float types to the optimized nalgebra
/// backend.
pub trait FloatLinalg: Float + 'static {
    /// Solve the symmetric system `A * w = b`, where `A` is `n` x `n` in
    /// flattened storage. Returns `None` if the system is singular.
    fn solve_symmetric(matrix: &[Self], rhs: &[Self], n: usize) -> Option<Vec<Self>>;
}

impl FloatLinalg for f64 {
    #[inline]
    fn solve_symmetric(matrix: &[Self], rhs: &[Self], n: usize) -> Option<Vec<Self>> {
        nalgebra_backend::solve_symmetric_f64(matrix, rhs, n)
    }
}

impl FloatLinalg for f32 {
    #[inline]
    fn solve_symmetric(matrix: &[Self], rhs: &[Self], n: usize) -> Option<Vec<Self>> {
        nalgebra_backend::solve_symmetric_f32(matrix, rhs, n)
    }
}

// ============================================================================
// Nalgebra Backend Implementation
// ============================================================================

/// Nalgebra-based linear algebra operations.
pub mod nalgebra_backend {
    use super::*;
    use nalgebra::{DMatrix, DVector};

    /// Solve a symmetric system using f64 precision.
    pub fn solve_symmetric_f64(matrix: &[f64], rhs: &[f64], n: usize) -> Option<Vec<f64>> {
        let a = DMatrix::from_column_slice(n, n, matrix);
        let b = DVector::from_column_slice(rhs);

        // Fast path: positive-definite systems factor by Cholesky.
        if let Some(cholesky) = a.clone().cholesky() {
            return Some(cholesky.solve(&b).as_slice().to_vec());
        }

        // Symmetric indefinite fallback.
        let solution = a.clone().qr().solve(&b)?;

        // A triangular solve over a rank-deficient factor can succeed with a
        // meaningless result; the residual exposes it.
        let residual = (&a * &solution - &b).amax();
        let scale = b.amax().max(1.0);
        if residual <= f64::EPSILON.sqrt() * scale {
            Some(solution.as_slice().to_vec())
        } else {
            None
        }
    }

    /// Solve a symmetric system using f32 precision.
    pub fn solve_symmetric_f32(matrix: &[f32], rhs: &[f32], n: usize) -> Option<Vec<f32>> {
        let a = DMatrix::from_column_slice(n, n, matrix);
        let b = DVector::from_column_slice(rhs);

        if let Some(cholesky) = a.clone().cholesky() {
            return Some(cholesky.solve(&b).as_slice().to_vec());
        }

        let solution = a.clone().qr().solve(&b)?;

        let residual = (&a * &solution - &b).amax();
        let scale = b.amax().max(1.0);
        if residual <= f32::EPSILON.sqrt() * scale {
            Some(solution.as_slice().to_vec())
        } else {
            None
        }
    }
}
