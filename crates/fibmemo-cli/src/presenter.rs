//! CLI presenter for a run of Fibonacci values.

use std::time::Duration;

use num_bigint::BigUint;

use fibmemo_core::{CacheSnapshot, MultiplicationCounters};

use crate::check::CheckOutcome;
use crate::output::{format_duration, format_number, format_result};
use crate::ui;
use crate::verbosity::Verbosity;

/// Prints values, counters, caches and check results to stdout.
pub struct SequencePresenter {
    verbosity: Verbosity,
    quiet: bool,
}

impl SequencePresenter {
    #[must_use]
    pub fn new(verbosity: Verbosity, quiet: bool) -> Self {
        Self { verbosity, quiet }
    }

    /// Header line for the requested range.
    pub fn present_range(&self, min: u64, max: u64) {
        if self.quiet || !self.verbosity.shows_counters() {
            return;
        }
        ui::print_header(&format!("f({})..=f({})", format_number(min), format_number(max)));
    }

    pub fn present_value(&self, n: u64, value: &BigUint) {
        if self.quiet {
            println!("{value}");
            return;
        }
        println!(
            "f({}) = {}",
            format_number(n),
            format_result(value, self.verbosity == Verbosity::High)
        );
    }

    pub fn present_counters(&self, counters: MultiplicationCounters, elapsed: Duration) {
        if self.quiet || !self.verbosity.shows_counters() {
            return;
        }
        println!("matmul ops for prod: {}", counters.product);
        println!("matmul ops for pow: {}", counters.power);
        println!("Duration: {}", format_duration(elapsed));
    }

    /// Dump both caches as pretty JSON.
    pub fn present_caches(&self, snapshot: &CacheSnapshot) -> Result<(), serde_json::Error> {
        if self.quiet || !self.verbosity.shows_caches() {
            return Ok(());
        }
        println!("{}", serde_json::to_string_pretty(snapshot)?);
        Ok(())
    }

    pub fn present_check(&self, outcome: CheckOutcome) {
        if self.quiet {
            return;
        }
        match outcome {
            CheckOutcome::Passed => ui::print_success("All tests passed"),
            CheckOutcome::TooShort => println!("Too short for triplet test"),
        }
    }

    pub fn present_error(&self, error: &str) {
        ui::print_error(error);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fibmemo_core::FibEngine;

    #[test]
    fn presenter_flags() {
        let presenter = SequencePresenter::new(Verbosity::High, true);
        assert!(presenter.quiet);
        assert_eq!(presenter.verbosity, Verbosity::High);
    }

    #[test]
    fn presenter_present_value_all_modes() {
        let value = BigUint::from(55u64);
        for verbosity in [Verbosity::Low, Verbosity::Medium, Verbosity::High] {
            for quiet in [false, true] {
                SequencePresenter::new(verbosity, quiet).present_value(10, &value);
            }
        }
    }

    #[test]
    fn presenter_present_counters() {
        let presenter = SequencePresenter::new(Verbosity::Medium, false);
        presenter.present_range(1, 10);
        presenter.present_counters(
            MultiplicationCounters {
                product: 4,
                power: 3,
            },
            Duration::from_millis(2),
        );
    }

    #[test]
    fn presenter_present_caches() {
        let mut engine = FibEngine::new();
        engine.compute(20).unwrap();
        let snapshot = engine.snapshot();
        SequencePresenter::new(Verbosity::High, false)
            .present_caches(&snapshot)
            .unwrap();
        SequencePresenter::new(Verbosity::Low, false)
            .present_caches(&snapshot)
            .unwrap();
    }

    #[test]
    fn presenter_present_check_and_error() {
        let presenter = SequencePresenter::new(Verbosity::Low, false);
        presenter.present_check(CheckOutcome::Passed);
        presenter.present_check(CheckOutcome::TooShort);
        presenter.present_error("test error message");
    }
}
