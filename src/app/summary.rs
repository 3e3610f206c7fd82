use std::io::Write;

use crate::args::OutputFormat;
use crate::error::AppResult;
use crate::metrics::Summary;

#[must_use]
pub fn render_summary(summary: &Summary) -> String {
    let codes = summary
        .non_success_status_codes
        .iter()
        .map(u16::to_string)
        .collect::<Vec<_>>()
        .join(" ");

    let lines = [
        format!("Number of requests: {}", summary.count),
        format!("Fastest time (ms): {}", summary.min_duration_ms),
        format!("Slowest time (ms): {}", summary.max_duration_ms),
        format!("Mean time (ms): {}", summary.mean_duration_ms),
        format!("Median time (ms): {}", summary.median_duration_ms),
        format!(
            "Percentage of requests that succeeded: {}",
            summary.success_rate_percent
        ),
        format!("Error codes returned that weren't a success [{}]", codes),
        format!(
            "Size in bytes of the smallest response: {}",
            summary.min_response_bytes
        ),
        format!(
            "Size in bytes of the biggest response: {}",
            summary.max_response_bytes
        ),
    ];
    let mut text = lines.join("\n");
    text.push_str("\n\n");
    text
}

/// # Errors
///
/// Returns an error if JSON serialization or writing to `out` fails.
pub fn write_summary<W>(out: &mut W, summary: &Summary, format: OutputFormat) -> AppResult<()>
where
    W: Write,
{
    match format {
        OutputFormat::Text => out.write_all(render_summary(summary).as_bytes())?,
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, summary)?;
            out.write_all(b"\n")?;
        }
    }
    out.flush()?;
    Ok(())
}
