use serde::Serialize;

use crate::probe::ProbeResultSet;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub count: usize,
    pub min_duration_ms: u64,
    pub max_duration_ms: u64,
    pub mean_duration_ms: u64,
    pub median_duration_ms: u64,
    pub success_rate_percent: f64,
    pub non_success_status_codes: Vec<u16>,
    pub min_response_bytes: usize,
    pub max_response_bytes: usize,
}

/// Reduces a finished run. Returns `None` for an empty set.
#[must_use]
pub fn summarize(results: &ProbeResultSet, failures: u64) -> Option<Summary> {
    let durations = results.durations_ms();
    let sizes = results.response_sizes();
    let (min_duration_ms, max_duration_ms) = min_max(&durations)?;
    let (min_response_bytes, max_response_bytes) = min_max(&sizes)?;

    Some(Summary {
        count: results.len(),
        min_duration_ms,
        max_duration_ms,
        mean_duration_ms: mean(&durations)?,
        median_duration_ms: positional_median(&durations)?,
        success_rate_percent: success_rate_percent(results.len(), failures)?,
        non_success_status_codes: results.non_success_codes().to_vec(),
        min_response_bytes,
        max_response_bytes,
    })
}

/// Single pass where the first value seeds both bounds and each later value
/// is tested against the maximum only when it is not a new minimum.
#[must_use]
pub fn min_max<T>(values: &[T]) -> Option<(T, T)>
where
    T: Copy + PartialOrd,
{
    let (first, rest) = values.split_first()?;
    let mut min = *first;
    let mut max = *first;
    for &current in rest {
        if current < min {
            min = current;
        } else if current > max {
            max = current;
        }
    }
    Some((min, max))
}

/// Truncating integer mean.
#[must_use]
pub fn mean(values: &[u64]) -> Option<u64> {
    let sum: u128 = values.iter().map(|&value| u128::from(value)).sum();
    let count = u128::try_from(values.len()).ok()?;
    let mean = sum.checked_div(count)?;
    u64::try_from(mean).ok()
}

/// Median by position in the iteration-ordered durations, without sorting:
/// `d[n/2]` for odd `n`, `(d[n/2] + d[n/2 - 1]) / 2` for even `n`. This is
/// not the statistical median; it reproduces the reference tool's output.
#[must_use]
pub fn positional_median(values: &[u64]) -> Option<u64> {
    let half = values.len().checked_div(2)?;
    let upper = *values.get(half)?;
    if values.len().checked_rem(2) == Some(0) {
        let lower = *values.get(half.checked_sub(1)?)?;
        let sum = u128::from(upper).checked_add(u128::from(lower))?;
        u64::try_from(sum.checked_div(2)?).ok()
    } else {
        Some(upper)
    }
}

/// `(count - failures) / count * 100`.
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "The success rate is reported as a floating point percentage."
)]
pub fn success_rate_percent(count: usize, failures: u64) -> Option<f64> {
    if count == 0 {
        return None;
    }
    let total = count as f64;
    let failed = failures as f64;
    Some((total - failed) / total * 100.0)
}
