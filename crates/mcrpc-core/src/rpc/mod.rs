//! JSON-RPC transport layer.
//!
//! Defines the [`Transport`] trait that moves one request body to the node
//! and returns the raw [`HttpReply`], the reqwest-backed implementation
//! ([`HttpTransport`]), and the protocol decoding shared by every transport.
//! Tests use `mock::MockTransport`.

mod http_adapter;
#[cfg(test)]
pub mod mock;
pub(crate) mod protocol;

pub use http_adapter::HttpTransport;

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::RpcError;

/// Status, content type and body of one HTTP response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpReply {
    pub status: u16,
    pub content_type: Option<String>,
    pub body: String,
}

/// Carries a serialized JSON-RPC request to the node.
///
/// Implementations only move bytes: status interpretation and JSON-RPC
/// decoding happen in the dispatcher so every transport behaves the same.
#[async_trait]
pub trait Transport: Send + Sync {
    /// POST `body` (a JSON-RPC request) and return the reply as received.
    async fn post(&self, body: Vec<u8>) -> Result<HttpReply, RpcError>;
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for Arc<T> {
    async fn post(&self, body: Vec<u8>) -> Result<HttpReply, RpcError> {
        (**self).post(body).await
    }
}
