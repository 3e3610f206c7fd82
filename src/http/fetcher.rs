use std::io::ErrorKind;
use std::time::Duration;

use async_trait::async_trait;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tokio::net::TcpStream;
use tokio::time::timeout;
use tokio_native_tls::{TlsConnector, TlsStream};

use super::request::request_head;
use crate::config::Target;
use crate::error::FetchError;

/// One request, one response, no retries.
#[async_trait]
pub trait Fetcher: Send + Sync {
    /// Fetches the full raw response for `target`.
    ///
    /// # Errors
    ///
    /// Returns a `FetchError` describing the first transport step that failed.
    async fn fetch(&self, target: &Target) -> Result<Vec<u8>, FetchError>;
}

/// Production fetcher: TLS over TCP with the platform trust store.
#[derive(Clone)]
pub struct TlsFetcher {
    connector: TlsConnector,
    connect_timeout: Duration,
}

impl TlsFetcher {
    /// # Errors
    ///
    /// Returns `FetchError::Tls` when the platform TLS backend cannot be
    /// initialized.
    pub fn new(connect_timeout: Duration) -> Result<Self, FetchError> {
        let connector =
            native_tls::TlsConnector::new().map_err(|err| FetchError::Tls { source: err })?;
        Ok(Self {
            connector: TlsConnector::from(connector),
            connect_timeout,
        })
    }

    async fn connect(&self, target: &Target) -> Result<TlsStream<TcpStream>, FetchError> {
        let addr = target.authority();
        let tcp = TcpStream::connect(addr.as_str())
            .await
            .map_err(|err| FetchError::Connect {
                addr: addr.clone(),
                source: err,
            })?;
        self.connector
            .connect(&target.host, tcp)
            .await
            .map_err(|err| FetchError::Handshake {
                host: target.host.clone(),
                source: err,
            })
    }
}

#[async_trait]
impl Fetcher for TlsFetcher {
    async fn fetch(&self, target: &Target) -> Result<Vec<u8>, FetchError> {
        let stream = timeout(self.connect_timeout, self.connect(target))
            .await
            .map_err(|_elapsed| FetchError::ConnectTimeout {
                addr: target.authority(),
                timeout: self.connect_timeout,
            })??;
        tracing::debug!("Connected to {}", target.authority());
        exchange(stream, &request_head(target)).await
    }
}

/// Writes `request` and reads until the peer closes the stream. The stream is
/// dropped, and the connection closed, on every return path.
///
/// # Errors
///
/// Returns `FetchError::Write` or `FetchError::Read` with the underlying I/O
/// error.
pub async fn exchange<S>(mut stream: S, request: &str) -> Result<Vec<u8>, FetchError>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    stream
        .write_all(request.as_bytes())
        .await
        .map_err(|err| FetchError::Write { source: err })?;
    stream
        .flush()
        .await
        .map_err(|err| FetchError::Write { source: err })?;

    let mut response = Vec::new();
    match stream.read_to_end(&mut response).await {
        Ok(_) => Ok(response),
        // Servers commonly close without a TLS close_notify once the body is sent.
        Err(err) if err.kind() == ErrorKind::UnexpectedEof && !response.is_empty() => {
            tracing::debug!("Peer closed without close_notify after {} bytes", response.len());
            Ok(response)
        }
        Err(err) => Err(FetchError::Read { source: err }),
    }
}
