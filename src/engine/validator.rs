//! Input validation for interpolation and line-search entry points.
//!
//! ## Purpose
//!
//! This module provides comprehensive validation functions for datasets,
//! query points, kernel parameters, and line-search inputs. It checks
//! requirements such as input lengths, finite values, and parameter bounds.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: validation stops at the first error encountered.
//! * **Efficiency**: checks are ordered from cheap to expensive.
//! * **Generics**: validation is generic over `Float` types.
//!
//! ## Key concepts
//!
//! * **Parameter Bounds**: enforces constraints like `0 < c1 < c2 < 1`.
//! * **Finite Checks**: ensures all inputs are finite (no NaN/Inf).
//! * **Shape Checks**: flattened point arrays must factor as
//!   `n_points * dimensions`.
//!
//! ## Invariants
//!
//! * All validated inputs satisfy their respective mathematical constraints.
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not transform or correct invalid inputs.
//! * This module does not perform the interpolation or the search itself.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::kernel::RbfKernel;
use crate::primitives::errors::MathKitError;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for interpolation and line-search inputs.
///
/// Provides static methods for validating datasets and parameters. All
/// methods return `Result<(), MathKitError>` and fail fast upon identifying
/// the first violation.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Dataset Validation
    // ========================================================================

    /// Validate a flattened dataset for interpolation.
    pub fn validate_dataset<T: Float>(
        points: &[T],
        values: &[T],
        dimensions: usize,
    ) -> Result<(), MathKitError> {
        // Check 1: Dimensions must be at least 1
        if dimensions == 0 {
            return Err(MathKitError::InvalidDimensions(dimensions));
        }

        // Check 2: Non-empty arrays
        if points.is_empty() || values.is_empty() {
            return Err(MathKitError::EmptyInput);
        }

        // Check 3: Matching lengths (points.len() should be values.len() * dimensions)
        let n = values.len();
        if points.len() != n * dimensions {
            return Err(MathKitError::MismatchedInputs {
                x_len: points.len(),
                y_len: n,
            });
        }

        // Check 4: All values finite
        for (i, &val) in points.iter().enumerate() {
            if !val.is_finite() {
                return Err(MathKitError::InvalidNumericValue(format!(
                    "points[{}]={}",
                    i,
                    val.to_f64().unwrap_or(f64::NAN)
                )));
            }
        }
        for (i, &val) in values.iter().enumerate() {
            if !val.is_finite() {
                return Err(MathKitError::InvalidNumericValue(format!(
                    "values[{}]={}",
                    i,
                    val.to_f64().unwrap_or(f64::NAN)
                )));
            }
        }

        Ok(())
    }

    /// Validate a query point against the stored dataset's dimension.
    pub fn validate_query<T: Float>(query: &[T], dimensions: usize) -> Result<(), MathKitError> {
        if query.len() != dimensions {
            return Err(MathKitError::DimensionMismatch {
                expected: dimensions,
                got: query.len(),
            });
        }

        for (i, &val) in query.iter().enumerate() {
            if !val.is_finite() {
                return Err(MathKitError::InvalidNumericValue(format!(
                    "query[{}]={}",
                    i,
                    val.to_f64().unwrap_or(f64::NAN)
                )));
            }
        }

        Ok(())
    }

    // ========================================================================
    // Parameter Validation
    // ========================================================================

    /// Validate a kernel's shape parameter, if it carries one.
    pub fn validate_kernel<T: Float>(kernel: &RbfKernel<T>) -> Result<(), MathKitError> {
        if let Some(theta) = kernel.shape_parameter() {
            if !theta.is_finite() || theta <= T::zero() {
                return Err(MathKitError::InvalidKernelParameter(
                    theta.to_f64().unwrap_or(f64::NAN),
                ));
            }
        }
        Ok(())
    }

    /// Validate a ridge regularization strength.
    pub fn validate_regularization_strength<T: Float>(lambda: T) -> Result<(), MathKitError> {
        if !lambda.is_finite() || lambda <= T::zero() {
            return Err(MathKitError::InvalidRegularization(
                lambda.to_f64().unwrap_or(f64::NAN),
            ));
        }
        Ok(())
    }

    // ========================================================================
    // Line-Search Validation
    // ========================================================================

    /// Validate the Wolfe threshold constants (`0 < c1 < c2 < 1`).
    pub fn validate_wolfe_constants<T: Float>(c1: T, c2: T) -> Result<(), MathKitError> {
        let valid = c1.is_finite()
            && c2.is_finite()
            && c1 > T::zero()
            && c1 < c2
            && c2 < T::one();
        if !valid {
            return Err(MathKitError::InvalidWolfeConstants {
                c1: c1.to_f64().unwrap_or(f64::NAN),
                c2: c2.to_f64().unwrap_or(f64::NAN),
            });
        }
        Ok(())
    }

    /// Validate the step bounds (`0 < alpha_init <= alpha_max`, both finite).
    pub fn validate_step_bounds<T: Float>(alpha_init: T, alpha_max: T) -> Result<(), MathKitError> {
        let valid = alpha_init.is_finite()
            && alpha_max.is_finite()
            && alpha_init > T::zero()
            && alpha_init <= alpha_max;
        if !valid {
            return Err(MathKitError::InvalidStepBounds {
                alpha_init: alpha_init.to_f64().unwrap_or(f64::NAN),
                alpha_max: alpha_max.to_f64().unwrap_or(f64::NAN),
            });
        }
        Ok(())
    }

    /// Validate the current point and search direction.
    pub fn validate_direction<T: Float>(x: &[T], direction: &[T]) -> Result<(), MathKitError> {
        // Check 1: Non-empty arrays
        if x.is_empty() || direction.is_empty() {
            return Err(MathKitError::EmptyInput);
        }

        // Check 2: Matching lengths
        if x.len() != direction.len() {
            return Err(MathKitError::MismatchedInputs {
                x_len: x.len(),
                y_len: direction.len(),
            });
        }

        // Check 3: All values finite
        for (i, &val) in x.iter().enumerate() {
            if !val.is_finite() {
                return Err(MathKitError::InvalidNumericValue(format!(
                    "x[{}]={}",
                    i,
                    val.to_f64().unwrap_or(f64::NAN)
                )));
            }
        }
        for (i, &val) in direction.iter().enumerate() {
            if !val.is_finite() {
                return Err(MathKitError::InvalidNumericValue(format!(
                    "direction[{}]={}",
                    i,
                    val.to_f64().unwrap_or(f64::NAN)
                )));
            }
        }

        Ok(())
    }
}
