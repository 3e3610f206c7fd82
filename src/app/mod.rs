//! Run orchestration and result reporting.
mod raw;
mod summary;


use std::io::Write;
use std::sync::Arc;

use crate::args::{OutputFormat, RunMode};
use crate::config::ProbeConfig;
use crate::error::AppResult;
use crate::http::Fetcher;
use crate::metrics::summarize;
use crate::probe;

pub use raw::write_raw_response;
pub use summary::{render_summary, write_summary};

/// Runs the probes for `mode` and writes the report to `out`.
///
/// # Errors
///
/// Returns an error if a probe task panicked or the report cannot be written.
pub async fn execute<W>(
    fetcher: &Arc<dyn Fetcher>,
    config: &Arc<ProbeConfig>,
    mode: RunMode,
    format: OutputFormat,
    out: &mut W,
) -> AppResult<()>
where
    W: Write,
{
    let iterations = mode.iterations();
    if iterations == 0 {
        return Ok(());
    }

    let run = probe::run(fetcher, config, iterations).await?;
    tracing::debug!(
        "Probe run finished: {} results, {} failures",
        run.results.len(),
        run.failures
    );

    match mode {
        RunMode::Profile(_) => summarize(&run.results, run.failures)
            .map_or(Ok(()), |summary| write_summary(out, &summary, format)),
        RunMode::Single => run
            .results
            .get(0)
            .map_or(Ok(()), |result| write_raw_response(out, &result.raw_response)),
        RunMode::Skip => Ok(()),
    }
}
