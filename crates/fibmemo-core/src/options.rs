//! Engine options.

/// Options for a [`FibEngine`](crate::engine::FibEngine).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EngineOptions {
    /// Verify `a == b + d` on every freshly computed matrix before caching
    /// its triplet. A failure is returned as
    /// [`FibError::InvariantViolation`](crate::error::FibError::InvariantViolation).
    pub self_check: bool,
}

impl EngineOptions {
    /// Options with self-check mode switched on.
    #[must_use]
    pub fn checked() -> Self {
        Self { self_check: true }
    }
}
