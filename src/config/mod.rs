//! Run configuration built once from CLI arguments.
mod target;


use std::time::Duration;

use crate::args::ProbeArgs;
use crate::error::{AppError, AppResult, ValidationError};
use crate::http::StatusMatcher;

pub use target::{DEFAULT_HTTPS_PORT, Target};

/// Immutable settings shared by every fetch task.
#[derive(Debug, Clone)]
pub struct ProbeConfig {
    pub target: Target,
    pub connect_timeout: Duration,
    pub status: StatusMatcher,
}

impl ProbeConfig {
    /// Builds the configuration for a run.
    ///
    /// # Errors
    ///
    /// Returns a validation error when `--url` is missing or cannot be turned
    /// into a host and path.
    pub fn from_args(args: &ProbeArgs) -> AppResult<Self> {
        let url = args
            .url
            .as_deref()
            .ok_or_else(|| AppError::validation(ValidationError::MissingUrl))?;
        Self::new(url, args.connect_timeout)
    }

    /// # Errors
    ///
    /// Returns a validation error when `url` is malformed or has no host, or a
    /// regex error if the status matcher fails to compile.
    pub fn new(url: &str, connect_timeout: Duration) -> AppResult<Self> {
        let target = Target::parse(url)?;
        Ok(Self {
            target,
            connect_timeout,
            status: StatusMatcher::new()?,
        })
    }
}
