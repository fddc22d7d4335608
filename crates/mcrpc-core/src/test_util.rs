//! Shared test helpers for `mcrpc-core` unit tests.

use crate::rpc::HttpReply;

/// An HTTP reply with an arbitrary status and optional content type.
pub fn reply(status: u16, content_type: Option<&str>, body: &str) -> HttpReply {
    HttpReply {
        status,
        content_type: content_type.map(str::to_owned),
        body: body.to_owned(),
    }
}

/// An HTTP reply declared as `application/json`.
pub fn json_reply(status: u16, body: &str) -> HttpReply {
    reply(status, Some("application/json"), body)
}
