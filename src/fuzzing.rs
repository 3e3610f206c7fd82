use std::time::Duration;

use crate::args::RunMode;
use crate::args::parsers::parse_duration_arg;
use crate::config::Target;
use crate::error::{AppError, AppResult};
use crate::http::StatusMatcher;
use crate::metrics::{min_max, positional_median};

/// Parses the status code out of arbitrary response bytes.
///
/// # Errors
///
/// Returns an error when no status line is present.
pub fn parse_status_input(input: &[u8]) -> AppResult<u16> {
    let matcher = StatusMatcher::new()?;
    matcher.parse(input).map_err(AppError::from)
}

/// Parses a duration argument (e.g. `10s`, `500ms`).
///
/// # Errors
///
/// Returns an error when the duration is invalid.
pub fn parse_duration_arg_input(input: &str) -> AppResult<Duration> {
    parse_duration_arg(input)
}

/// Resolves a raw `--profile` value.
#[must_use]
pub fn run_mode_input(input: &str) -> RunMode {
    RunMode::from_profile_value(input)
}

/// Parses a probe target URL.
///
/// # Errors
///
/// Returns an error when the URL is malformed or has no host.
pub fn target_input(input: &str) -> AppResult<Target> {
    Target::parse(input).map_err(AppError::from)
}

/// Runs the duration statistics over arbitrary values.
#[must_use]
pub fn duration_stats_input(values: &[u64]) -> Option<((u64, u64), u64)> {
    Some((min_max(values)?, positional_median(values)?))
}
