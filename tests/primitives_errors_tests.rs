//! Tests for the crate-wide error type.
//!
//! Verifies the exact `Display` output of every variant, value semantics
//! (`Clone`/`PartialEq`), and the `std::error::Error` implementation.

use mathkit_rs::prelude::MathKitError;

#[test]
fn test_error_display() {
    // EmptyInput
    let err = MathKitError::EmptyInput;
    assert_eq!(format!("{}", err), "Input arrays are empty");

    // MismatchedInputs
    let err = MathKitError::MismatchedInputs {
        x_len: 10,
        y_len: 5,
    };
    assert_eq!(
        format!("{}", err),
        "Length mismatch: x has 10 coordinates, y has 5 values"
    );

    // InvalidDimensions
    let err = MathKitError::InvalidDimensions(0);
    assert_eq!(
        format!("{}", err),
        "Invalid dimensions: 0 (must be at least 1)"
    );

    // InvalidNumericValue
    let err = MathKitError::InvalidNumericValue("points[2]=NaN".to_string());
    assert_eq!(format!("{}", err), "Invalid numeric value: points[2]=NaN");

    // DimensionMismatch
    let err = MathKitError::DimensionMismatch {
        expected: 2,
        got: 3,
    };
    assert_eq!(
        format!("{}", err),
        "Dimension mismatch: query point has 3 coordinates, dataset has 2"
    );

    // NoData
    let err = MathKitError::NoData;
    assert_eq!(
        format!("{}", err),
        "No dataset present: call set_data before calc_weights"
    );

    // WeightsNotComputed
    let err = MathKitError::WeightsNotComputed;
    assert_eq!(
        format!("{}", err),
        "Weights have not been computed: call calc_weights before calc_value"
    );

    // InvalidKernelParameter
    let err = MathKitError::InvalidKernelParameter(-1.0);
    assert_eq!(
        format!("{}", err),
        "Invalid kernel shape parameter: -1 (must be > 0 and finite)"
    );

    // InvalidRegularization
    let err = MathKitError::InvalidRegularization(0.0);
    assert_eq!(
        format!("{}", err),
        "Invalid regularization strength: 0 (must be > 0 and finite)"
    );

    // SingularSystem
    let err = MathKitError::SingularSystem { size: 4 };
    assert_eq!(
        format!("{}", err),
        "Interpolation system of size 4 is singular (enable ridge regularization or remove duplicate points)"
    );

    // InvalidStepBounds
    let err = MathKitError::InvalidStepBounds {
        alpha_init: 0.0,
        alpha_max: 1.0,
    };
    assert_eq!(
        format!("{}", err),
        "Invalid step bounds: alpha_init=0, alpha_max=1 (require 0 < alpha_init <= alpha_max, both finite)"
    );

    // InvalidWolfeConstants
    let err = MathKitError::InvalidWolfeConstants { c1: 0.9, c2: 0.1 };
    assert_eq!(
        format!("{}", err),
        "Invalid Wolfe constants: c1=0.9, c2=0.1 (require 0 < c1 < c2 < 1)"
    );

    // NotDescentDirection
    let err = MathKitError::NotDescentDirection(0.5);
    assert_eq!(
        format!("{}", err),
        "Not a descent direction: initial slope 0.5 (must be negative)"
    );

    // LineSearchDivergence
    let err = MathKitError::LineSearchDivergence { iterations: 50 };
    assert_eq!(
        format!("{}", err),
        "Line search failed to satisfy the strong Wolfe conditions within 50 iterations"
    );
}

#[test]
fn test_error_properties() {
    let err1 = MathKitError::EmptyInput;
    let err2 = err1.clone();
    assert_eq!(err1, err2);
    assert_ne!(err1, MathKitError::NoData);

    let err1 = MathKitError::SingularSystem { size: 3 };
    let err2 = MathKitError::SingularSystem { size: 4 };
    assert_ne!(err1, err2);
}

#[test]
fn test_error_is_std_error() {
    fn assert_error<T: std::error::Error>() {}
    assert_error::<MathKitError>();
}
