use std::time::Duration;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Failed to build TLS connector: {source}")]
    Tls {
        #[source]
        source: native_tls::Error,
    },
    #[error("Cannot connect to {addr}: {source}")]
    Connect {
        addr: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Connecting to {addr} timed out after {timeout:?}.")]
    ConnectTimeout { addr: String, timeout: Duration },
    #[error("TLS handshake with {host} failed: {source}")]
    Handshake {
        host: String,
        #[source]
        source: native_tls::Error,
    },
    #[error("Failed to send request: {source}")]
    Write {
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to read response: {source}")]
    Read {
        #[source]
        source: std::io::Error,
    },
}
