//! Euclidean distance for nD scattered-data interpolation.
//!
//! ## Purpose
//!
//! This module provides distance computation between nD points stored as
//! slices. Interpolation is radial: every kernel evaluation is a function of
//! the Euclidean distance between a data point and a query point.
//!
//! ## Design notes
//!
//! * **Decoupling**: distance calculation is separated from kernel
//!   evaluation.
//! * **Flattened storage**: datasets store points as one flat slice of
//!   length `n * dimensions`; [`point_row`] slices out a single point.
//!
//! ## Invariants
//!
//! * Distance is always non-negative.
//! * Distance is zero if and only if the points are identical.
//!
//! ## Non-goals
//!
//! * This module does not handle kernel weighting.
//! * No alternative metrics: radial kernels are defined over the Euclidean
//!   norm only.

// External dependencies
use num_traits::Float;

// ============================================================================
// Distance Computation
// ============================================================================

/// Compute the Euclidean distance between two nD points.
#[inline]
pub fn euclidean<T: Float>(a: &[T], b: &[T]) -> T {
    debug_assert_eq!(a.len(), b.len(), "Points must have same dimension");
    a.iter()
        .zip(b.iter())
        .map(|(&ai, &bi)| {
            let diff = ai - bi;
            diff * diff
        })
        .fold(T::zero(), |acc, x| acc + x)
        .sqrt()
}

/// Slice the `index`-th point out of a flattened point array.
#[inline]
pub fn point_row<T>(points: &[T], dimensions: usize, index: usize) -> &[T] {
    debug_assert!(
        (index + 1) * dimensions <= points.len(),
        "Point index out of bounds"
    );
    &points[index * dimensions..(index + 1) * dimensions]
}
