//! 2x2 matrix type used by the exponentiation engine.

use num_bigint::BigUint;
use num_traits::One;

/// A cell of a [`FibMatrix`], laid out as
///
/// ```text
/// | a  b |
/// | c  d |
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    /// Top-left.
    A,
    /// Top-right.
    B,
    /// Bottom-left.
    C,
    /// Bottom-right.
    D,
}

/// 2x2 matrix of `BigUint` values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FibMatrix {
    pub a: BigUint, // [0][0]
    pub b: BigUint, // [0][1]
    pub c: BigUint, // [1][0]
    pub d: BigUint, // [1][1]
}

impl FibMatrix {
    /// Build a matrix from its four cells in row-major order.
    #[must_use]
    pub fn new(
        a: impl Into<BigUint>,
        b: impl Into<BigUint>,
        c: impl Into<BigUint>,
        d: impl Into<BigUint>,
    ) -> Self {
        Self {
            a: a.into(),
            b: b.into(),
            c: c.into(),
            d: d.into(),
        }
    }

    /// Create the identity matrix.
    #[cfg(test)]
    #[must_use]
    pub fn identity() -> Self {
        Self {
            a: BigUint::one(),
            b: BigUint::ZERO,
            c: BigUint::ZERO,
            d: BigUint::one(),
        }
    }

    /// Create the Fibonacci Q matrix [[1,1],[1,0]].
    #[must_use]
    pub fn fibonacci_q() -> Self {
        Self {
            a: BigUint::one(),
            b: BigUint::one(),
            c: BigUint::one(),
            d: BigUint::ZERO,
        }
    }

    /// Rebuild `Q^e` from its triplet `(F(e+1), F(e), F(e-1))`.
    #[must_use]
    pub fn from_triplet(next: BigUint, current: BigUint, previous: BigUint) -> Self {
        Self {
            a: next,
            b: current.clone(),
            c: current,
            d: previous,
        }
    }

    /// Consume the matrix and keep one cell.
    #[must_use]
    pub fn into_cell(self, cell: Cell) -> BigUint {
        match cell {
            Cell::A => self.a,
            Cell::B => self.b,
            Cell::C => self.c,
            Cell::D => self.d,
        }
    }

    /// Every power of Q satisfies `a == b + d`.
    #[must_use]
    pub fn is_fibonacci_consistent(&self) -> bool {
        self.a == &self.b + &self.d
    }

    /// Check if this is the identity matrix.
    #[cfg(test)]
    #[must_use]
    pub fn is_identity(&self) -> bool {
        *self == Self::identity()
    }
}
