//! Layer 3: Engine
//!
//! # Purpose
//!
//! This layer provides the validation machinery shared by the algorithm
//! entry points: fail-fast checks on datasets, query points, kernel and
//! regularization parameters, and line-search inputs.

/// Input validation for datasets, kernels, and line-search parameters.
pub mod validator;
