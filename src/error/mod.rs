mod app;
mod fetch;
mod status;
mod validation;

#[cfg(test)]
mod test_support;

pub use app::{AppError, AppResult};
pub use fetch::FetchError;
pub use status::{ProbeError, StatusError};
pub use validation::ValidationError;
