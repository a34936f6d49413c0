//! Error handling and exit codes.

use fibmemo_cli::SequenceCheckError;
use fibmemo_core::constants::exit_codes;
use fibmemo_core::FibError;

/// Errors surfaced by the application layer.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Invalid flag combination.
    #[error("configuration error: {0}")]
    Config(String),

    /// The engine rejected an index or broke an invariant.
    #[error(transparent)]
    Engine(#[from] FibError),

    /// The computed sequence failed the recurrence check.
    #[error("sequence check failed at f({index}): {source}")]
    SequenceCheck {
        index: u64,
        source: SequenceCheckError,
    },
}

/// Map an application error to its process exit code.
pub fn handle_error(err: &AppError) -> i32 {
    match err {
        AppError::Config(_) => exit_codes::ERROR_CONFIG,
        AppError::Engine(e) if e.is_internal() => exit_codes::ERROR_INVARIANT,
        AppError::Engine(_) => exit_codes::ERROR_CONFIG,
        AppError::SequenceCheck { .. } => exit_codes::ERROR_INVARIANT,
    }
}

/// Exit code for any error escaping `app::run`.
pub fn exit_code(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<AppError>()
        .map_or(exit_codes::ERROR_GENERIC, handle_error)
}
