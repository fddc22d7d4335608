use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, trace};

use crate::config::ConnectionConfig;
use crate::error::{CoreError, RpcError};
use crate::rpc::protocol::{decode_reply, JsonRpcRequest};
use crate::rpc::{HttpTransport, Transport};

/// JSON-RPC client for one node endpoint.
///
/// Every call, typed wrapper or not, goes through [`Client::call`], which
/// serializes the request, hands it to the transport, and maps the reply.
/// Cloning is cheap; clones share the transport.
#[derive(Clone)]
pub struct Client {
    transport: Arc<dyn Transport>,
}

impl Client {
    /// Connect over HTTP(S) as described by `config`.
    pub fn new(config: &ConnectionConfig) -> Result<Self, CoreError> {
        Ok(Self::with_transport(HttpTransport::new(config)?))
    }

    /// Connect over HTTP(S) through an existing `reqwest` client, e.g. one
    /// with a custom proxy or connection pool.
    pub fn with_http_client(
        config: &ConnectionConfig,
        client: reqwest::Client,
    ) -> Result<Self, CoreError> {
        Ok(Self::with_transport(HttpTransport::with_client(
            config, client,
        )?))
    }

    pub fn with_transport(transport: impl Transport + 'static) -> Self {
        Self {
            transport: Arc::new(transport),
        }
    }

    /// Invoke `method` with positional `params` and return the raw result.
    ///
    /// Resolves with `result` on success, or with the raw response text when
    /// the node answers with a non-JSON body. Rejects with the server's error
    /// object, with `Unauthorized` on HTTP 401, or with the transport error.
    pub async fn call(&self, method: &str, params: Vec<Value>) -> Result<Value, CoreError> {
        let request = JsonRpcRequest::new(method, &params);
        let body = serde_json::to_vec(&request)
            .map_err(|e| RpcError::InvalidResponse(format!("encode request: {e}")))?;
        debug!(rpc.method = method, rpc.params = params.len(), "rpc call");
        trace!(rpc.method = method, body = %String::from_utf8_lossy(&body), "rpc request body");

        let reply = self.transport.post(body).await?;
        debug!(rpc.method = method, status = reply.status, "rpc response");

        decode_reply(reply).map_err(|err| {
            debug!(rpc.method = method, error = %err, "rpc call failed");
            CoreError::from(err)
        })
    }

    /// Like [`Client::call`], deserializing the result into `T`.
    pub async fn call_as<T: DeserializeOwned>(
        &self,
        method: &str,
        params: Vec<Value>,
    ) -> Result<T, CoreError> {
        let raw = self.call(method, params).await?;
        serde_json::from_value(raw).map_err(|source| CoreError::Decode {
            method: method.to_owned(),
            source,
        })
    }
}
