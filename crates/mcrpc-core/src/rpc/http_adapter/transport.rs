use async_trait::async_trait;
use reqwest::header;
use tracing::{debug, trace};

use crate::config::ConnectionConfig;
use crate::error::{CoreError, RpcError};

use super::super::{HttpReply, Transport};
use super::connection::build_http_client;

/// JSON-RPC transport over HTTP(S).
///
/// Posts every request to the configured endpoint root. Basic auth is
/// attached when the config carries both user and pass.
pub struct HttpTransport {
    client: reqwest::Client,
    url: String,
    auth: Option<(String, String)>,
}

impl HttpTransport {
    /// Create a transport for `config`, building a dedicated `reqwest`
    /// client from its timeouts and TLS options.
    pub fn new(config: &ConnectionConfig) -> Result<Self, CoreError> {
        let client = build_http_client(config)?;
        Self::with_client(config, client)
    }

    /// Create a transport that sends through a caller-supplied client.
    ///
    /// The config still decides the URL and credentials; its TLS options and
    /// timeouts are ignored since they live on the client.
    pub fn with_client(config: &ConnectionConfig, client: reqwest::Client) -> Result<Self, CoreError> {
        let auth = config
            .credentials()?
            .map(|(user, pass)| (user.to_owned(), pass.to_owned()));
        Ok(Self {
            client,
            url: config.url(),
            auth,
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn post(&self, body: Vec<u8>) -> Result<HttpReply, RpcError> {
        let mut builder = self
            .client
            .post(&self.url)
            .header(header::CONTENT_TYPE, "application/json")
            .body(body);
        if let Some((ref user, ref pass)) = self.auth {
            builder = builder.basic_auth(user, Some(pass));
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned);

        let body = response.text().await?;
        debug!(url = %self.url, status, body_len = body.len(), "http response");
        trace!(body = %body, "http response body");

        Ok(HttpReply {
            status,
            content_type,
            body,
        })
    }
}
