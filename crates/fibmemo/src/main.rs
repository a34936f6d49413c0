//! FibMemo — Fibonacci numbers by memoized matrix exponentiation.

use fibmemo_cli::ui::print_error;
use fibmemo_lib::{app, config, errors};

fn main() {
    // Parse CLI args first: verbosity picks the base log level
    let config = config::AppConfig::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(config.verbosity.tracing_level().into()),
        )
        .init();

    if let Err(err) = app::run(&config) {
        print_error(&err.to_string());
        std::process::exit(errors::exit_code(&err));
    }
}
