use crate::config::Target;

/// The single request a probe sends. HTTP/1.0 implies the server closes the
/// connection after responding, which is what delimits the response.
#[must_use]
pub fn request_head(target: &Target) -> String {
    format!(
        "GET {} HTTP/1.0\r\nHost: {}\r\n\r\n",
        target.path, target.host_header
    )
}
