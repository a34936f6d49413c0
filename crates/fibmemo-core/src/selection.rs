//! Cheapest-exponent selection.
//!
//! `F(n)` can be read from `Q^(n-1)`, `Q^n` or `Q^(n+1)`, since
//! `Q^e = [[F(e+1), F(e)], [F(e), F(e-1)]]`. Binary exponentiation of `e`
//! costs roughly one squaring per bit plus one multiply per extra set bit,
//! so shifting the target by one can save work (e.g. 16 is cheaper than 15).

use crate::matrix_types::Cell;

/// Exponent to raise Q to and the cell of the result that holds `F(n)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub exponent: u64,
    pub cell: Cell,
}

/// Number of matrix multiplications binary exponentiation needs for `x`:
/// `popcount(x) + bitlength(x) - 2`.
#[must_use]
pub fn exponent_cost(x: u64) -> u32 {
    let bit_length = u64::BITS - x.leading_zeros();
    (x.count_ones() + bit_length).saturating_sub(2)
}

/// Pick the cheapest of `n-1`, `n`, `n+1`.
///
/// Ties go to the first candidate in that order. Candidates equal to zero or
/// past `u64::MAX` are skipped, so every `n` has a valid answer.
#[must_use]
pub fn find_cheapest_exponent(n: u64) -> Selection {
    let candidates = [
        (n.checked_sub(1), Cell::A),
        (Some(n), Cell::B),
        (n.checked_add(1), Cell::D),
    ];

    let mut best: Option<(Selection, u32)> = None;
    for (exponent, cell) in candidates {
        let Some(exponent) = exponent.filter(|&e| e > 0) else {
            continue;
        };
        let cost = exponent_cost(exponent);
        let improves = match best {
            Some((_, best_cost)) => cost < best_cost,
            None => true,
        };
        if improves {
            best = Some((Selection { exponent, cell }, cost));
        }
    }

    match best {
        Some((selection, _)) => selection,
        // Unreachable: n or n+1 is always a positive candidate.
        None => Selection {
            exponent: 1,
            cell: Cell::D,
        },
    }
}
