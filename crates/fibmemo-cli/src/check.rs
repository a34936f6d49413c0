//! End-of-run recurrence check over a computed run of consecutive values.

use num_bigint::BigUint;

/// Result of a check that found no broken triplet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckOutcome {
    /// Every triplet satisfied `next == current + previous`.
    Passed,
    /// Fewer than three values; nothing to check.
    TooShort,
}

/// A triplet of consecutive values that breaks the recurrence.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("test failure at offset {offset}, triplet is ({next} = {current} + {previous})")]
pub struct SequenceCheckError {
    /// Position of `next` within the checked slice.
    pub offset: usize,
    pub next: BigUint,
    pub current: BigUint,
    pub previous: BigUint,
}

/// Check that `values` (consecutive Fibonacci numbers, ascending index)
/// satisfy the recurrence, walking from the last triplet backward.
pub fn verify_sequence(values: &[BigUint]) -> Result<CheckOutcome, SequenceCheckError> {
    if values.len() < 3 {
        return Ok(CheckOutcome::TooShort);
    }
    for (i, window) in values.windows(3).enumerate().rev() {
        let [previous, current, next] = window else {
            continue;
        };
        if *next != current + previous {
            return Err(SequenceCheckError {
                offset: i + 2,
                next: next.clone(),
                current: current.clone(),
                previous: previous.clone(),
            });
        }
    }
    Ok(CheckOutcome::Passed)
}
