//! Strong-Wolfe line search for gradient-based optimization.
//!
//! ## Purpose
//!
//! This module provides a line search that, given an objective, its
//! gradient, a current point, and a descent direction, finds a step length
//! satisfying the strong Wolfe conditions (sufficient decrease plus
//! curvature). It is the inner primitive used by quasi-Newton and other
//! gradient-based optimizers; the outer loop is the caller's.
//!
//! ## Design notes
//!
//! * **Bracket then zoom**: a bracketing phase expands the trial step toward
//!   `alpha_max` until an interval containing an acceptable step is found,
//!   then a bisection-style zoom refines that interval.
//! * **Bounded termination**: both phases carry an iteration budget.
//!   Exhausting either yields a typed [`MathKitError::LineSearchDivergence`]
//!   instead of looping forever or unwinding.
//! * **Reused trial buffer**: the 1-D restriction `φ(α) = f(x + α·p)` writes
//!   the trial point into one owned buffer instead of allocating per
//!   evaluation.
//!
//! ## Key concepts
//!
//! * **Sufficient decrease**: `φ(α) ≤ φ(0) + c1·α·φ'(0)`.
//! * **Curvature**: `|φ'(α)| ≤ -c2·φ'(0)`.
//! * **Bracket**: in the zoom interval `[α_lo, α_hi]`, `α_lo` is the
//!   endpoint known to satisfy sufficient decrease with the lower objective
//!   value; the endpoints are not ordered by magnitude.
//!
//! ## Invariants
//!
//! * The returned step satisfies both strong Wolfe conditions.
//! * The search direction must be a descent direction (`φ'(0) < 0`);
//!   violations are rejected fail-fast.
//!
//! ## Non-goals
//!
//! * No outer optimizer loop, step-size warm starting, or retry policy.
//! * No interpolation-based trial selection; the zoom bisects.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::engine::validator::Validator;
use crate::primitives::errors::MathKitError;

// ============================================================================
// Parameters
// ============================================================================

/// Threshold constants and iteration budgets for the line search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSearchParams<T> {
    /// Sufficient-decrease constant (default 1e-4); `0 < c1 < c2`.
    pub c1: T,

    /// Curvature constant (default 0.9); `c1 < c2 < 1`.
    pub c2: T,

    /// Iteration budget for the bracketing phase (default 100).
    pub max_bracket_iterations: usize,

    /// Iteration budget for the zoom phase (default 50).
    pub max_zoom_iterations: usize,
}

impl<T: Float> Default for LineSearchParams<T> {
    fn default() -> Self {
        Self {
            c1: T::from(1e-4).unwrap(),
            c2: T::from(0.9).unwrap(),
            max_bracket_iterations: 100,
            max_zoom_iterations: 50,
        }
    }
}

// ============================================================================
// 1-D Restriction
// ============================================================================

/// The restriction of the objective to the search ray, `φ(α) = f(x + α·p)`.
struct Restriction<'a, T, F, G> {
    f: &'a F,
    gradient: &'a G,
    x: &'a [T],
    direction: &'a [T],
    trial: Vec<T>,
}

impl<T, F, G> Restriction<'_, T, F, G>
where
    T: Float,
    F: Fn(&[T]) -> T,
    G: Fn(&[T]) -> Vec<T>,
{
    /// Write `x + alpha * direction` into the trial buffer.
    #[inline]
    fn advance(&mut self, alpha: T) {
        for ((t, &xi), &pi) in self
            .trial
            .iter_mut()
            .zip(self.x.iter())
            .zip(self.direction.iter())
        {
            *t = xi + alpha * pi;
        }
    }

    /// Evaluate `φ(α)`.
    #[inline]
    fn value(&mut self, alpha: T) -> T {
        self.advance(alpha);
        (self.f)(&self.trial)
    }

    /// Evaluate `φ'(α) = ∇f(x + α·p)·p`.
    #[inline]
    fn slope(&mut self, alpha: T) -> T {
        self.advance(alpha);
        let grad = (self.gradient)(&self.trial);
        grad.iter()
            .zip(self.direction.iter())
            .map(|(&gi, &pi)| gi * pi)
            .fold(T::zero(), |acc, term| acc + term)
    }
}

// ============================================================================
// Line Search
// ============================================================================

/// Find a step length along `direction` satisfying the strong Wolfe
/// conditions.
///
/// Starts from the trial step `alpha_init` and never exceeds `alpha_max`.
/// The caller guarantees that `direction` is a descent direction at `x`
/// (`∇f(x)·direction < 0`); a non-descent direction is rejected with
/// [`MathKitError::NotDescentDirection`]. If either iteration budget runs
/// out, the search reports [`MathKitError::LineSearchDivergence`], which the
/// caller's optimizer should treat as "no acceptable step found".
///
/// # Example
///
/// ```
/// use mathkit_rs::prelude::*;
///
/// let f = |x: &[f64]| x.iter().map(|xi| xi * xi).sum::<f64>();
/// let gradient = |x: &[f64]| x.iter().map(|xi| 2.0 * xi).collect::<Vec<_>>();
///
/// let x = [4.0, 3.0];
/// let direction = [-8.0, -6.0];
///
/// let step = strong_wolfe_line_search(
///     f,
///     gradient,
///     &x,
///     &direction,
///     1.0,
///     10.0,
///     &LineSearchParams::default(),
/// )?;
/// assert!((step - 0.5).abs() < 1e-9);
/// # Result::<(), MathKitError>::Ok(())
/// ```
pub fn strong_wolfe_line_search<T, F, G>(
    f: F,
    gradient: G,
    x: &[T],
    direction: &[T],
    alpha_init: T,
    alpha_max: T,
    params: &LineSearchParams<T>,
) -> Result<T, MathKitError>
where
    T: Float,
    F: Fn(&[T]) -> T,
    G: Fn(&[T]) -> Vec<T>,
{
    Validator::validate_direction(x, direction)?;
    Validator::validate_wolfe_constants(params.c1, params.c2)?;
    Validator::validate_step_bounds(alpha_init, alpha_max)?;

    let mut phi = Restriction {
        f: &f,
        gradient: &gradient,
        x,
        direction,
        trial: x.to_vec(),
    };

    let phi_zero = phi.value(T::zero());
    let slope_zero = phi.slope(T::zero());

    if slope_zero >= T::zero() {
        return Err(MathKitError::NotDescentDirection(
            slope_zero.to_f64().unwrap_or(f64::NAN),
        ));
    }

    let half = T::from(0.5).unwrap();
    let mut alpha_prev = T::zero();
    let mut phi_alpha_prev = phi_zero;
    let mut alpha = alpha_init;

    for iteration in 0..params.max_bracket_iterations {
        let phi_alpha = phi.value(alpha);

        // Sufficient decrease violated, or no improvement over the previous
        // trial: the minimizer lies between alpha_prev and alpha.
        if phi_alpha > phi_zero + params.c1 * alpha * slope_zero
            || (iteration > 0 && phi_alpha >= phi_alpha_prev)
        {
            return zoom(&mut phi, alpha_prev, alpha, phi_zero, slope_zero, params);
        }

        let slope_alpha = phi.slope(alpha);

        // Both strong Wolfe conditions hold.
        if slope_alpha.abs() <= -params.c2 * slope_zero {
            return Ok(alpha);
        }

        // Past the minimum: the slope turned non-negative.
        if slope_alpha >= T::zero() {
            return zoom(&mut phi, alpha, alpha_prev, phi_zero, slope_zero, params);
        }

        alpha_prev = alpha;
        phi_alpha_prev = phi_alpha;
        alpha = half * (alpha + alpha_max);
    }

    Err(MathKitError::LineSearchDivergence {
        iterations: params.max_bracket_iterations,
    })
}

// ============================================================================
// Zoom
// ============================================================================

/// Refine a bracket known to contain an acceptable step length.
///
/// `alpha_lo` is the endpoint satisfying sufficient decrease with the lower
/// objective value; `alpha_hi` need not be the larger numeric value.
fn zoom<T, F, G>(
    phi: &mut Restriction<'_, T, F, G>,
    mut alpha_lo: T,
    mut alpha_hi: T,
    phi_zero: T,
    slope_zero: T,
    params: &LineSearchParams<T>,
) -> Result<T, MathKitError>
where
    T: Float,
    F: Fn(&[T]) -> T,
    G: Fn(&[T]) -> Vec<T>,
{
    let half = T::from(0.5).unwrap();
    let mut phi_lo = phi.value(alpha_lo);

    for _ in 0..params.max_zoom_iterations {
        let alpha_j = half * (alpha_lo + alpha_hi);
        let phi_j = phi.value(alpha_j);

        // The trial violates sufficient decrease or fails to improve on the
        // low endpoint: shrink from the high end.
        if phi_j > phi_zero + params.c1 * alpha_j * slope_zero || phi_j >= phi_lo {
            alpha_hi = alpha_j;
            continue;
        }

        let slope_j = phi.slope(alpha_j);

        if slope_j.abs() <= -params.c2 * slope_zero {
            return Ok(alpha_j);
        }

        // The bracket direction flipped.
        if slope_j * (alpha_hi - alpha_lo) >= T::zero() {
            alpha_hi = alpha_lo;
        }

        alpha_lo = alpha_j;
        phi_lo = phi_j;
    }

    Err(MathKitError::LineSearchDivergence {
        iterations: params.max_zoom_iterations,
    })
}
