//! Tests for the strong-Wolfe line search.
//!
//! ## Test Organization
//!
//! 1. **Convergence** - known step lengths on convex test functions
//! 2. **Wolfe Conditions** - returned steps satisfy both inequalities
//! 3. **Failure Modes** - divergence and precondition rejection
//! 4. **Input Validation** - malformed parameters and inputs

use approx::assert_relative_eq;
use mathkit_rs::prelude::*;

// ============================================================================
// Helper Functions
// ============================================================================

fn sphere(x: &[f64]) -> f64 {
    x.iter().map(|xi| xi * xi).sum()
}

fn sphere_gradient(x: &[f64]) -> Vec<f64> {
    x.iter().map(|xi| 2.0 * xi).collect()
}

fn rosenbrock(x: &[f64]) -> f64 {
    (1.0 - x[0]).powi(2) + 100.0 * (x[1] - x[0] * x[0]).powi(2)
}

fn rosenbrock_gradient(x: &[f64]) -> Vec<f64> {
    vec![
        -2.0 * (1.0 - x[0]) - 400.0 * x[0] * (x[1] - x[0] * x[0]),
        200.0 * (x[1] - x[0] * x[0]),
    ]
}

/// Assert that `alpha` satisfies both strong Wolfe conditions for `f` along
/// `direction` from `x`.
fn assert_strong_wolfe(
    f: &dyn Fn(&[f64]) -> f64,
    gradient: &dyn Fn(&[f64]) -> Vec<f64>,
    x: &[f64],
    direction: &[f64],
    alpha: f64,
    c1: f64,
    c2: f64,
) {
    let at = |a: f64| -> Vec<f64> {
        x.iter()
            .zip(direction.iter())
            .map(|(&xi, &pi)| xi + a * pi)
            .collect()
    };
    let phi = |a: f64| f(&at(a));
    let slope = |a: f64| -> f64 {
        gradient(&at(a))
            .iter()
            .zip(direction.iter())
            .map(|(&gi, &pi)| gi * pi)
            .sum()
    };

    let phi_zero = phi(0.0);
    let slope_zero = slope(0.0);

    assert!(
        phi(alpha) <= phi_zero + c1 * alpha * slope_zero + 1e-12,
        "sufficient decrease violated at alpha={}",
        alpha
    );
    assert!(
        slope(alpha).abs() <= -c2 * slope_zero + 1e-12,
        "curvature condition violated at alpha={}",
        alpha
    );
}

// ============================================================================
// Convergence Tests
// ============================================================================

/// The exact ray minimizer of the sphere function from (4, 3) along the
/// steepest-descent direction is alpha = 0.5, found by the zoom phase.
#[test]
fn test_sphere_exact_minimizer_via_zoom() {
    let x = [4.0, 3.0];
    let direction = [-8.0, -6.0];

    let step = strong_wolfe_line_search(
        sphere,
        sphere_gradient,
        &x,
        &direction,
        1.0,
        10.0,
        &LineSearchParams::default(),
    )
    .unwrap();

    assert_relative_eq!(step, 0.5, epsilon = 1e-9);
}

/// A trial step already satisfying both conditions is returned without
/// entering the zoom phase.
#[test]
fn test_immediate_acceptance() {
    let x = [1.0, 0.0];
    let direction = [-1.0, 0.0];

    let step = strong_wolfe_line_search(
        sphere,
        sphere_gradient,
        &x,
        &direction,
        0.5,
        10.0,
        &LineSearchParams::default(),
    )
    .unwrap();

    assert_relative_eq!(step, 0.5);
}

/// With a tight curvature constant the bracketing phase must expand the
/// trial step toward alpha_max before an acceptable step appears.
///
/// Along this ray phi(a) = 25(1-2a)^2, so phi'(a) = -100(1-2a) and the
/// curvature condition |phi'(a)| <= 10 holds only near the ray minimizer
/// a = 0.5. Starting from 0.2 the search expands to 0.6, brackets, and the
/// zoom bisects onto 0.5.
#[test]
fn test_bracketing_expansion() {
    let x = [4.0, 3.0];
    let direction = [-8.0, -6.0];

    let params = LineSearchParams {
        c2: 0.1,
        ..LineSearchParams::default()
    };
    let step =
        strong_wolfe_line_search(sphere, sphere_gradient, &x, &direction, 0.2, 1.0, &params)
            .unwrap();

    assert_relative_eq!(step, 0.5, epsilon = 1e-9);
    assert_strong_wolfe(
        &sphere,
        &sphere_gradient,
        &x,
        &direction,
        step,
        params.c1,
        0.1,
    );
}

/// A trial step past the ray minimizer (positive slope) enters zoom with the
/// bracket reversed and still converges.
///
/// phi(a) = 25(1-2a)^2: at a = 0.7 the slope is +40, so zoom runs on
/// (0.7, 0) and bisects to 0.525, where |phi'| = 5 <= 10.
#[test]
fn test_zoom_with_reversed_bracket() {
    let x = [4.0, 3.0];
    let direction = [-8.0, -6.0];

    let params = LineSearchParams {
        c2: 0.1,
        ..LineSearchParams::default()
    };
    let step =
        strong_wolfe_line_search(sphere, sphere_gradient, &x, &direction, 0.7, 1.0, &params)
            .unwrap();

    assert_relative_eq!(step, 0.525, epsilon = 1e-12);
}

// ============================================================================
// Wolfe Condition Tests
// ============================================================================

/// On a smooth convex quartic the returned step satisfies both conditions.
#[test]
fn test_wolfe_conditions_hold_on_quartic() {
    let f = |x: &[f64]| x[0].powi(4) + x[0] * x[0];
    let gradient = |x: &[f64]| vec![4.0 * x[0].powi(3) + 2.0 * x[0]];

    let x = [1.0];
    let direction = [-1.0];
    let params = LineSearchParams::default();

    let step =
        strong_wolfe_line_search(f, gradient, &x, &direction, 1.0, 2.0, &params).unwrap();

    assert!(step > 0.0 && step <= 2.0);
    assert_strong_wolfe(&f, &gradient, &x, &direction, step, params.c1, params.c2);
}

/// Steepest descent on the Rosenbrock function from the classic starting
/// point: the step is tiny but must satisfy both conditions.
#[test]
fn test_wolfe_conditions_hold_on_rosenbrock() {
    let x = [-1.2, 1.0];
    let gradient_at_x = rosenbrock_gradient(&x);
    let direction: Vec<f64> = gradient_at_x.iter().map(|gi| -gi).collect();
    let params = LineSearchParams::default();

    let step = strong_wolfe_line_search(
        rosenbrock,
        rosenbrock_gradient,
        &x,
        &direction,
        1.0,
        1.0,
        &params,
    )
    .unwrap();

    assert!(step > 0.0 && step <= 1.0);
    assert_strong_wolfe(
        &rosenbrock,
        &rosenbrock_gradient,
        &x,
        &direction,
        step,
        params.c1,
        params.c2,
    );
}

#[test]
fn test_line_search_f32() {
    let f = |x: &[f32]| x.iter().map(|xi| xi * xi).sum::<f32>();
    let gradient = |x: &[f32]| x.iter().map(|xi| 2.0 * xi).collect::<Vec<_>>();

    let step = strong_wolfe_line_search(
        f,
        gradient,
        &[4.0f32, 3.0],
        &[-8.0f32, -6.0],
        1.0,
        10.0,
        &LineSearchParams::default(),
    )
    .unwrap();

    assert_relative_eq!(step, 0.5f32, epsilon = 1e-5);
}

// ============================================================================
// Failure Mode Tests
// ============================================================================

/// An exhausted zoom budget is reported as divergence, not a crash.
#[test]
fn test_zoom_budget_exhaustion_reports_divergence() {
    // phi(a) = (a - 1)^2 from x = -1 along p = +1; alpha_init = 10 forces an
    // immediate zoom, and a single bisection step cannot satisfy curvature.
    let f = |x: &[f64]| x[0] * x[0];
    let gradient = |x: &[f64]| vec![2.0 * x[0]];

    let params = LineSearchParams {
        max_zoom_iterations: 1,
        ..LineSearchParams::default()
    };
    let result =
        strong_wolfe_line_search(f, gradient, &[-1.0], &[1.0], 10.0, 10.0, &params);

    assert_eq!(
        result,
        Err(MathKitError::LineSearchDivergence { iterations: 1 })
    );
}

/// An ascent direction is rejected fail-fast.
#[test]
fn test_ascent_direction_is_rejected() {
    let result = strong_wolfe_line_search(
        sphere,
        sphere_gradient,
        &[1.0, 1.0],
        &[1.0, 1.0],
        1.0,
        10.0,
        &LineSearchParams::default(),
    );

    assert!(matches!(
        result,
        Err(MathKitError::NotDescentDirection(_))
    ));
}

/// A zero-slope direction (already at the ray minimum) is also not a descent
/// direction.
#[test]
fn test_zero_slope_direction_is_rejected() {
    let result = strong_wolfe_line_search(
        sphere,
        sphere_gradient,
        &[0.0, 0.0],
        &[1.0, 0.0],
        1.0,
        10.0,
        &LineSearchParams::default(),
    );

    assert!(matches!(
        result,
        Err(MathKitError::NotDescentDirection(_))
    ));
}

// ============================================================================
// Input Validation Tests
// ============================================================================

#[test]
fn test_invalid_wolfe_constants_are_rejected() {
    let params = LineSearchParams {
        c1: 0.9,
        c2: 0.1,
        ..LineSearchParams::default()
    };
    let result = strong_wolfe_line_search(
        sphere,
        sphere_gradient,
        &[1.0],
        &[-1.0],
        1.0,
        10.0,
        &params,
    );

    assert_eq!(
        result,
        Err(MathKitError::InvalidWolfeConstants { c1: 0.9, c2: 0.1 })
    );
}

#[test]
fn test_invalid_step_bounds_are_rejected() {
    let result = strong_wolfe_line_search(
        sphere,
        sphere_gradient,
        &[1.0],
        &[-1.0],
        0.0,
        10.0,
        &LineSearchParams::default(),
    );
    assert!(matches!(result, Err(MathKitError::InvalidStepBounds { .. })));

    let result = strong_wolfe_line_search(
        sphere,
        sphere_gradient,
        &[1.0],
        &[-1.0],
        2.0,
        1.0,
        &LineSearchParams::default(),
    );
    assert!(matches!(result, Err(MathKitError::InvalidStepBounds { .. })));
}

#[test]
fn test_malformed_inputs_are_rejected() {
    let empty: [f64; 0] = [];
    let result = strong_wolfe_line_search(
        sphere,
        sphere_gradient,
        &empty,
        &empty,
        1.0,
        10.0,
        &LineSearchParams::default(),
    );
    assert_eq!(result, Err(MathKitError::EmptyInput));

    let result = strong_wolfe_line_search(
        sphere,
        sphere_gradient,
        &[1.0, 2.0],
        &[-1.0],
        1.0,
        10.0,
        &LineSearchParams::default(),
    );
    assert_eq!(
        result,
        Err(MathKitError::MismatchedInputs { x_len: 2, y_len: 1 })
    );

    let result = strong_wolfe_line_search(
        sphere,
        sphere_gradient,
        &[f64::NAN],
        &[-1.0],
        1.0,
        10.0,
        &LineSearchParams::default(),
    );
    assert!(matches!(
        result,
        Err(MathKitError::InvalidNumericValue(_))
    ));
}
