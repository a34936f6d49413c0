//! Verbosity levels shared by the binary and the presenter.

use clap::ValueEnum;
use tracing::Level;

/// How much the CLI reports besides the computed values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum Verbosity {
    /// Values only.
    #[default]
    Low,
    /// Values, then multiplication counters and elapsed time.
    Medium,
    /// Everything from `medium`, per-step engine logs, and a cache dump.
    High,
}

impl Verbosity {
    /// Base log level installed by the binary for this verbosity.
    #[must_use]
    pub fn tracing_level(self) -> Level {
        match self {
            Self::Low => Level::WARN,
            Self::Medium => Level::INFO,
            Self::High => Level::DEBUG,
        }
    }

    #[must_use]
    pub fn shows_counters(self) -> bool {
        self >= Self::Medium
    }

    #[must_use]
    pub fn shows_caches(self) -> bool {
        self == Self::High
    }
}
