//! # fibmemo-cli
//!
//! CLI output, sequence checking, and shell completion.

pub mod check;
pub mod completion;
pub mod output;
pub mod presenter;
pub mod ui;
pub mod verbosity;

pub use check::{verify_sequence, CheckOutcome, SequenceCheckError};
pub use presenter::SequencePresenter;
pub use verbosity::Verbosity;
