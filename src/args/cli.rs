use clap::Parser;
use std::time::Duration;

use super::parsers::{DEFAULT_CONNECT_TIMEOUT, parse_bool_env, parse_duration_arg};
use super::types::{OutputFormat, RunMode};

#[derive(Debug, Parser, Clone)]
#[clap(
    version,
    about = "Minimal HTTPS probe - fetch a URL once, or profile it with N concurrent requests."
)]
pub struct ProbeArgs {
    /// URL to visit
    #[arg(long, value_name = "URL")]
    pub url: Option<String>,

    /// Number of times to REPEAT profiling (0 performs no requests)
    #[arg(long, value_name = "REPEAT", allow_hyphen_values = true)]
    pub profile: Option<String>,

    /// Connection establishment timeout, TCP connect plus TLS handshake (supports ms/s/m/h)
    #[arg(
        long = "connect-timeout",
        value_parser = parse_duration_arg,
        default_value = DEFAULT_CONNECT_TIMEOUT
    )]
    pub connect_timeout: Duration,

    /// Output format for profiling summaries
    #[arg(long = "output-format", value_enum, default_value_t = OutputFormat::Text)]
    pub output_format: OutputFormat,

    /// Enable verbose logging (sets log level to debug unless overridden by REQPROBE_LOG/RUST_LOG)
    #[arg(long, short = 'v')]
    pub verbose: bool,

    /// Disable color output
    #[arg(long = "no-color", env = "NO_COLOR", value_parser = parse_bool_env)]
    pub no_color: bool,
}

impl ProbeArgs {
    /// Resolves `--profile` leniently: a non-negative integer selects
    /// profiling (or skipping, for zero); anything else falls back to a single
    /// fetch.
    #[must_use]
    pub fn run_mode(&self) -> RunMode {
        self.profile
            .as_deref()
            .map_or(RunMode::Single, RunMode::from_profile_value)
    }
}
