use url::Url;

use crate::error::ValidationError;

pub const DEFAULT_HTTPS_PORT: u16 = 443;

/// Where a probe connects and what it asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    pub host: String,
    pub port: u16,
    /// Request target sent on the request line: path plus optional query.
    pub path: String,
    /// Value of the `Host` header; carries the port only when the URL names one.
    pub host_header: String,
}

impl Target {
    /// Parses `raw` into a connectable target. The scheme is not used to pick
    /// the transport: every probe is TLS, on the URL's port or 443.
    ///
    /// # Errors
    ///
    /// Returns `InvalidUrl` when the URL does not parse and `UrlMissingHost`
    /// when it has no host component.
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let url = Url::parse(raw.trim()).map_err(|err| ValidationError::InvalidUrl {
            url: raw.to_owned(),
            source: err,
        })?;
        let host = url
            .host_str()
            .filter(|host| !host.is_empty())
            .ok_or_else(|| ValidationError::UrlMissingHost {
                url: raw.to_owned(),
            })?
            .to_owned();

        if url.scheme() != "https" {
            tracing::debug!(
                "Scheme '{}' ignored; probing {} over TLS.",
                url.scheme(),
                host
            );
        }

        let port = url.port().unwrap_or(DEFAULT_HTTPS_PORT);
        let host_header = url
            .port()
            .map_or_else(|| host.clone(), |port| format!("{host}:{port}"));
        let path = url.query().map_or_else(
            || url.path().to_owned(),
            |query| format!("{}?{}", url.path(), query),
        );
        let path = if path.is_empty() { "/".to_owned() } else { path };

        Ok(Self {
            host,
            port,
            path,
            host_header,
        })
    }

    /// Socket address string for the TCP connect.
    #[must_use]
    pub fn authority(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
