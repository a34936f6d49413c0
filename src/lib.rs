//! Cross-crate integration tests for FibMemo live under `tests/`.
