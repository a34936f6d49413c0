//! Application configuration from CLI flags and environment.

use std::ops::RangeInclusive;

use clap::Parser;
use fibmemo_cli::Verbosity;

use crate::errors::AppError;

/// FibMemo — Fibonacci numbers by memoized matrix exponentiation.
#[derive(Parser, Debug)]
#[command(name = "fibmemo", version, about)]
pub struct AppConfig {
    /// Max index of Fibonacci number to calculate.
    #[arg(
        short = 'n',
        long,
        env = "FIBMEMO_MAX",
        value_parser = parse_positive_index,
        allow_negative_numbers = true,
        required_unless_present = "completion"
    )]
    pub max_fib: Option<u64>,

    /// Min index of Fibonacci number to calculate (defaults to max).
    #[arg(
        short = 'm',
        long,
        value_parser = parse_positive_index,
        allow_negative_numbers = true
    )]
    pub min_fib: Option<u64>,

    /// Verbosity level.
    #[arg(short, long, value_enum, default_value_t = Verbosity::Low, ignore_case = true)]
    pub verbosity: Verbosity,

    /// Run self-checks: verify every new matrix power, then the whole sequence.
    #[arg(short, long)]
    pub test: bool,

    /// Quiet mode (only output the numbers).
    #[arg(short, long)]
    pub quiet: bool,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Indices to compute, ascending.
    pub fn index_range(&self) -> Result<RangeInclusive<u64>, AppError> {
        let max = self
            .max_fib
            .ok_or_else(|| AppError::Config("--max-fib is required".into()))?;
        let min = self.min_fib.unwrap_or(max);
        if min > max {
            return Err(AppError::Config(format!(
                "min-fib ({min}) must not exceed max-fib ({max})"
            )));
        }
        Ok(min..=max)
    }
}

/// Accept strictly positive integers only.
pub fn parse_positive_index(s: &str) -> Result<u64, String> {
    match s.trim().parse::<u64>() {
        Ok(value) if value > 0 => Ok(value),
        _ => Err(format!("{s} is an invalid positive int value")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_args(args: &[&str]) -> Result<AppConfig, clap::Error> {
        AppConfig::try_parse_from(std::iter::once("fibmemo").chain(args.iter().copied()))
    }

    #[test]
    fn positive_index_parsing() {
        assert_eq!(parse_positive_index("10"), Ok(10));
        assert!(parse_positive_index("0").is_err());
        assert_eq!(
            parse_positive_index("-5"),
            Err("-5 is an invalid positive int value".to_string())
        );
        assert!(parse_positive_index("ten").is_err());
    }

    #[test]
    fn min_defaults_to_max() {
        let config = parse_args(&["-n", "8"]).unwrap();
        assert_eq!(config.index_range().unwrap(), 8..=8);
        assert_eq!(config.verbosity, Verbosity::Low);
        assert!(!config.test);
    }

    #[test]
    fn explicit_range() {
        let config = parse_args(&["-n", "10", "-m", "1", "-v", "MEDIUM", "-t"]).unwrap();
        assert_eq!(config.index_range().unwrap(), 1..=10);
        assert_eq!(config.verbosity, Verbosity::Medium);
        assert!(config.test);
    }

    #[test]
    fn inverted_range_is_a_config_error() {
        let config = parse_args(&["-n", "3", "-m", "5"]).unwrap();
        assert!(matches!(config.index_range(), Err(AppError::Config(_))));
    }

    #[test]
    fn rejects_non_positive_indices() {
        assert!(parse_args(&["-n", "0"]).is_err());
        assert!(parse_args(&["-n", "-4"]).is_err());
        assert!(parse_args(&["-n", "5", "-m", "-1"]).is_err());
    }

    #[test]
    fn completion_does_not_need_max() {
        let config = parse_args(&["--completion", "bash"]).unwrap();
        assert!(config.max_fib.is_none());
        assert!(config.completion.is_some());
    }
}
