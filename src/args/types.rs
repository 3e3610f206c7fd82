use clap::ValueEnum;
use std::num::NonZeroUsize;

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

/// What the CLI will do with the target URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    /// `--profile=0`: no requests, no output.
    Skip,
    /// One fetch, raw response printed.
    Single,
    /// N concurrent fetches, summary printed.
    Profile(NonZeroUsize),
}

impl RunMode {
    #[must_use]
    pub fn from_profile_value(value: &str) -> Self {
        match value.parse::<usize>() {
            Ok(count) => NonZeroUsize::new(count).map_or(RunMode::Skip, RunMode::Profile),
            Err(err) => {
                tracing::warn!(
                    "Ignoring --profile value '{}' ({}); running a single fetch.",
                    value,
                    err
                );
                RunMode::Single
            }
        }
    }

    /// Number of fetches this mode performs.
    #[must_use]
    pub const fn iterations(self) -> usize {
        match self {
            RunMode::Skip => 0,
            RunMode::Single => 1,
            RunMode::Profile(count) => count.get(),
        }
    }
}
