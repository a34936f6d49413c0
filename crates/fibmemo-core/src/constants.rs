//! Base cache contents and exit codes.

/// Entries every value cache starts with: `F(0)`, `F(1)`, `F(2)`.
pub const BASE_VALUES: [(u64, u64); 3] = [(0, 0), (1, 1), (2, 1)];

/// Exponents every engine starts with marked as completed. `Q^1` is known.
pub const BASE_COMPLETED: [u64; 1] = [1];

/// Maximum Fibonacci index that fits in a u64.
/// F(93) = 12200160415121876738
#[cfg(test)]
pub const MAX_FIB_U64: u64 = 93;

/// Fibonacci values for n = 0..=93, computed at compile time.
///
/// Used as an independent reference by tests.
#[cfg(test)]
pub const FIB_TABLE: [u64; 94] = {
    let mut table = [0u64; 94];
    table[0] = 0;
    table[1] = 1;
    let mut i = 2;
    while i < 94 {
        table[i] = table[i - 1] + table[i - 2];
        i += 1;
    }
    table
};

/// Process exit codes for the `fibmemo` binary.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error.
    pub const ERROR_GENERIC: i32 = 1;
    /// Engine invariant violated, or the computed sequence failed its check.
    pub const ERROR_INVARIANT: i32 = 3;
    /// Invalid configuration or input.
    pub const ERROR_CONFIG: i32 = 4;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_values_match_table() {
        for (index, value) in BASE_VALUES {
            assert_eq!(FIB_TABLE[usize::try_from(index).unwrap()], value);
        }
    }

    #[test]
    fn fib_table_last_value() {
        assert_eq!(FIB_TABLE[MAX_FIB_U64 as usize], 12_200_160_415_121_876_738);
    }

    #[test]
    fn fib_table_consistency() {
        for i in 2..94 {
            assert_eq!(FIB_TABLE[i], FIB_TABLE[i - 1] + FIB_TABLE[i - 2]);
        }
    }
}
