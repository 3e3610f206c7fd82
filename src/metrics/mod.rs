//! Statistics over a finished probe run.
mod summary;


pub use summary::{Summary, mean, min_max, positional_median, success_rate_percent, summarize};
