//! Error type for the memoized engine.

use num_bigint::BigUint;

/// Error type for Fibonacci computations.
///
/// `NegativeIndex` is a caller error and is raised before any cache is
/// touched. Every other variant means the engine's own bookkeeping or
/// arithmetic went wrong; see [`FibError::is_internal`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FibError {
    /// Index below zero.
    #[error("index must be non-negative, got {0}")]
    NegativeIndex(i64),

    /// A freshly computed power of Q broke `a == b + d`.
    #[error(
        "invariant violation at exponent {exponent}: {next} != {current} + {previous}"
    )]
    InvariantViolation {
        exponent: u64,
        next: BigUint,
        current: BigUint,
        previous: BigUint,
    },

    /// The exponentiation loop ended without accumulating a product.
    #[error("no product accumulated for exponent {exponent}")]
    EmptyProduct { exponent: u64 },

    /// An exponent is marked completed but its triplet is not cached.
    #[error("exponent {exponent} is marked completed but its triplet is missing")]
    MissingTriplet { exponent: u64 },
}

impl FibError {
    /// Whether this error signals an engine bug rather than bad input.
    #[must_use]
    pub fn is_internal(&self) -> bool {
        !matches!(self, Self::NegativeIndex(_))
    }
}
