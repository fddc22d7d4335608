//! JSON-RPC 2.0 envelopes and HTTP reply interpretation.

use serde_json::{Map, Value};

use crate::error::RpcError;

use super::HttpReply;

/// Every call is an independent request/response pair, so the id is fixed.
pub(crate) const REQUEST_ID: u64 = 1;

#[derive(Debug, serde::Serialize)]
pub(crate) struct JsonRpcRequest<'a> {
    pub(crate) method: &'a str,
    pub(crate) params: &'a [Value],
    pub(crate) id: u64,
    pub(crate) jsonrpc: &'static str,
}

impl<'a> JsonRpcRequest<'a> {
    pub(crate) fn new(method: &'a str, params: &'a [Value]) -> Self {
        Self {
            method,
            params,
            id: REQUEST_ID,
            jsonrpc: "2.0",
        }
    }
}

/// Map an HTTP reply onto the call outcome.
///
/// - 401 is `Unauthorized` whatever the body says.
/// - 200 yields `result`, or the `error` member when it is non-null. A 200
///   body that is not a JSON object is handed back as a raw string.
/// - Other statuses with a JSON content type reject with the body's `error`.
/// - Anything else resolves with the raw body text.
pub(crate) fn decode_reply(reply: HttpReply) -> Result<Value, RpcError> {
    let HttpReply {
        status,
        content_type,
        body,
    } = reply;

    if status == 401 {
        return Err(RpcError::Unauthorized);
    }

    if status == 200 {
        return match serde_json::from_str::<Value>(&body) {
            Ok(Value::Object(mut envelope)) => match take_non_null(&mut envelope, "error") {
                Some(err) => Err(parse_jsonrpc_error(err)),
                None => Ok(take_non_null(&mut envelope, "result").unwrap_or(Value::Null)),
            },
            _ => Ok(Value::String(body)),
        };
    }

    if is_json_content_type(content_type.as_deref()) {
        let decoded: Value = serde_json::from_str(&body).map_err(|e| {
            RpcError::InvalidResponse(format!(
                "decode JSON-RPC error body (HTTP {status}): {e}; body={body}"
            ))
        })?;
        let error = match decoded {
            Value::Object(mut envelope) => take_non_null(&mut envelope, "error"),
            _ => None,
        };
        return match error {
            Some(err) => Err(parse_jsonrpc_error(err)),
            None => Err(RpcError::HttpStatus { status, body }),
        };
    }

    Ok(Value::String(body))
}

fn take_non_null(envelope: &mut Map<String, Value>, key: &str) -> Option<Value> {
    envelope.remove(key).filter(|v| !v.is_null())
}

fn is_json_content_type(content_type: Option<&str>) -> bool {
    content_type
        .and_then(|ct| ct.split(';').next())
        .map(|mime| mime.trim().eq_ignore_ascii_case("application/json"))
        .unwrap_or(false)
}

/// Parse a JSON-RPC error value into a structured `RpcError`.
///
/// JSON-RPC 2.0 defines errors as `{"code": <int>, "message": <string>}`
/// with optional `data`. Anything else is carried verbatim.
pub(crate) fn parse_jsonrpc_error(err: Value) -> RpcError {
    #[derive(serde::Deserialize)]
    struct JsonRpcError {
        code: i64,
        message: String,
        #[serde(default)]
        data: Option<Value>,
    }

    match serde_json::from_value::<JsonRpcError>(err.clone()) {
        Ok(parsed) => RpcError::Server {
            code: parsed.code,
            message: parsed.message,
            data: parsed.data,
        },
        Err(_) => RpcError::NonStandardServerError(err),
    }
}
