//! Raw HTTP/1.0 over TLS: request framing, transport and status parsing.
mod fetcher;
mod request;
mod status;


pub use fetcher::{Fetcher, TlsFetcher, exchange};
pub use request::request_head;
pub use status::{StatusMatcher, is_success};
