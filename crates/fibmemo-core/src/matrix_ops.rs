//! 2x2 matrix multiplication.

use crate::matrix_types::FibMatrix;

/// Standard 2x2 matrix product `lhs * rhs`.
///
/// Uses all eight products so that arbitrary matrices (not only powers of
/// the symmetric Q matrix) multiply correctly.
#[must_use]
pub fn multiply(lhs: &FibMatrix, rhs: &FibMatrix) -> FibMatrix {
    FibMatrix {
        a: &lhs.a * &rhs.a + &lhs.b * &rhs.c,
        b: &lhs.a * &rhs.b + &lhs.b * &rhs.d,
        c: &lhs.c * &rhs.a + &lhs.d * &rhs.c,
        d: &lhs.c * &rhs.b + &lhs.d * &rhs.d,
    }
}

/// Square a 2x2 matrix.
#[must_use]
pub fn square(m: &FibMatrix) -> FibMatrix {
    multiply(m, m)
}
