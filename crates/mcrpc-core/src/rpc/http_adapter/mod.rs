//! HTTP(S) transport for JSON-RPC endpoints.
//!
//! Implements [`Transport`](super::Transport) using `reqwest` with rustls,
//! supporting basic auth, extra root certificates, client certificates for
//! mutual TLS, and an SNI server-name override.

mod connection;
mod transport;

pub use transport::HttpTransport;
