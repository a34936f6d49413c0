//! # fibmemo-core
//!
//! Core library for the FibMemo Fibonacci calculator.
//! Raises the 2x2 Fibonacci matrix by binary exponentiation and memoizes
//! every power it produces, so repeated and neighboring queries get cheaper.

pub mod constants;
pub mod engine;
pub mod error;
pub mod matrix_ops;
pub mod matrix_types;
pub mod options;
pub mod selection;
pub mod shared;

// Re-exports
pub use constants::{exit_codes, BASE_VALUES};
pub use engine::{CacheSnapshot, FibEngine, MultiplicationCounters};
pub use error::FibError;
pub use matrix_ops::multiply;
pub use matrix_types::{Cell, FibMatrix};
pub use options::EngineOptions;
pub use selection::{exponent_cost, find_cheapest_exponent, Selection};
pub use shared::SharedFibEngine;

use num_bigint::BigUint;

/// Compute F(n) with a fresh engine.
///
/// For repeated queries keep a [`FibEngine`] around instead; its caches
/// are what make later calls cheap.
///
/// # Example
/// ```
/// assert_eq!(fibmemo_core::fibonacci(10).unwrap().to_string(), "55");
/// assert_eq!(fibmemo_core::fibonacci(0).unwrap().to_string(), "0");
/// ```
pub fn fibonacci(n: u64) -> Result<BigUint, FibError> {
    FibEngine::new().compute(n)
}
