#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("RPC failure: {0}")]
    Rpc(#[from] RpcError),

    #[error("invalid connection config: {0}")]
    InvalidConfig(String),

    #[error("failed to decode `{method}` result: {source}")]
    Decode {
        method: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Failures of a single JSON-RPC round trip.
#[derive(Debug, thiserror::Error)]
pub enum RpcError {
    /// Connection, TLS or I/O failure below the HTTP layer.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server replied with a JSON-RPC error object.
    #[error("server error {code}: {message}")]
    Server {
        code: i64,
        message: String,
        data: Option<serde_json::Value>,
    },

    /// The server replied with an `error` member that is not a
    /// `{code, message}` object. Carried verbatim.
    #[error("server error: {0}")]
    NonStandardServerError(serde_json::Value),

    /// HTTP 401.
    #[error("Unauthorized")]
    Unauthorized,

    /// Non-200 JSON reply without an `error` member.
    #[error("HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

impl RpcError {
    /// JSON-RPC error code, when the server supplied a standard error object.
    pub fn code(&self) -> Option<i64> {
        match self {
            Self::Server { code, .. } => Some(*code),
            _ => None,
        }
    }
}

impl CoreError {
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Rpc(RpcError::Unauthorized))
    }
}
