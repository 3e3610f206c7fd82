//! Core library for the `reqprobe` CLI.
//!
//! The binary fetches one URL over raw HTTP/1.0-on-TLS, either once (printing
//! the response verbatim) or N times concurrently (printing latency, size and
//! status statistics). This crate holds the pieces it is built from: argument
//! types, run configuration, the transport and status parser, the concurrent
//! probe runner, the statistics, and the reporters.
pub mod app;
pub mod args;
pub mod config;
pub mod error;
pub mod http;
pub mod metrics;
pub mod probe;

#[cfg(feature = "fuzzing")]
pub mod fuzzing;
