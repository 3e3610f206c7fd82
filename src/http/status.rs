use regex::bytes::Regex;

use crate::error::StatusError;

const STATUS_LINE_PATTERN: &str = r"(?-u)HTTP/1\.[0-9] [0-9]{3} .*\n";

/// Locates the status line of a raw HTTP/1.x response.
#[derive(Debug, Clone)]
pub struct StatusMatcher {
    pattern: Regex,
}

impl StatusMatcher {
    /// Compiles the status line pattern once per run.
    ///
    /// # Errors
    ///
    /// Returns the regex compilation error.
    pub fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            pattern: Regex::new(STATUS_LINE_PATTERN)?,
        })
    }

    /// Returns the status code from the first `HTTP/1.x NNN reason` line.
    ///
    /// # Errors
    ///
    /// Returns `StatusError::Missing` when no status line is present and
    /// `StatusError::Code` when the code token is not a number.
    pub fn parse(&self, raw: &[u8]) -> Result<u16, StatusError> {
        let line = self.pattern.find(raw).ok_or(StatusError::Missing)?;
        let token = line
            .as_bytes()
            .split(u8::is_ascii_whitespace)
            .filter(|part| !part.is_empty())
            .nth(1)
            .ok_or(StatusError::Missing)?;
        let token = String::from_utf8_lossy(token);
        token.parse::<u16>().map_err(|err| StatusError::Code {
            value: token.into_owned(),
            source: err,
        })
    }
}

/// `[200, 400)` counts as success; nothing else is interpreted.
#[must_use]
pub const fn is_success(code: u16) -> bool {
    code >= 200 && code < 400
}
