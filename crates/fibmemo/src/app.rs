//! Application entry point and dispatch.

use std::time::Instant;

use anyhow::Result;
use tracing::info;

use fibmemo_cli::presenter::SequencePresenter;
use fibmemo_cli::verify_sequence;
use fibmemo_core::{EngineOptions, FibEngine};

use crate::config::AppConfig;
use crate::errors::AppError;
use crate::version::full_version;

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    // Handle shell completion
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        fibmemo_cli::completion::generate_completion(&mut cmd, shell, &mut std::io::stdout());
        return Ok(());
    }

    run_sequence(config)
}

fn run_sequence(config: &AppConfig) -> Result<()> {
    let range = config.index_range()?;
    let (min, max) = (*range.start(), *range.end());
    let options = EngineOptions {
        self_check: config.test,
    };
    info!(version = %full_version(), min, max, self_check = options.self_check, "starting run");

    let presenter = SequencePresenter::new(config.verbosity, config.quiet);
    let mut engine = FibEngine::with_options(options);
    let mut computed = Vec::new();

    presenter.present_range(min, max);
    let start = Instant::now();
    for n in range {
        let value = engine.compute(n).map_err(AppError::from)?;
        presenter.present_value(n, &value);
        if config.test {
            computed.push(value);
        }
    }
    let elapsed = start.elapsed();

    presenter.present_counters(engine.counters(), elapsed);
    presenter.present_caches(&engine.snapshot())?;

    if config.test {
        let outcome = verify_sequence(&computed).map_err(|source| AppError::SequenceCheck {
            index: min + source.offset as u64,
            source,
        })?;
        presenter.present_check(outcome);
    }

    info!(?elapsed, multiplications = engine.counters().total(), "run complete");
    Ok(())
}
