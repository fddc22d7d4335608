use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::RpcError;

use super::{HttpReply, Transport};

/// A canned-reply transport for testing. Replies are served in the order
/// they were queued; every request body is recorded for inspection.
pub struct MockTransport {
    replies: Mutex<VecDeque<HttpReply>>,
    requests: Mutex<Vec<Value>>,
}

impl MockTransport {
    pub fn builder() -> MockTransportBuilder {
        MockTransportBuilder {
            replies: VecDeque::new(),
        }
    }

    /// Shortcut for a transport answering every queued call with `result`.
    pub fn with_results(results: impl IntoIterator<Item = Value>) -> Self {
        results
            .into_iter()
            .fold(Self::builder(), |b, result| b.with_result(result))
            .build()
    }

    /// Decoded JSON bodies of every request sent so far.
    pub fn requests(&self) -> Vec<Value> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> Value {
        self.requests
            .lock()
            .unwrap()
            .last()
            .cloned()
            .expect("no request was sent")
    }
}

pub struct MockTransportBuilder {
    replies: VecDeque<HttpReply>,
}

impl MockTransportBuilder {
    pub fn with_reply(mut self, reply: HttpReply) -> Self {
        self.replies.push_back(reply);
        self
    }

    pub fn with_result(self, result: Value) -> Self {
        let body = serde_json::json!({"result": result, "error": null, "id": 1}).to_string();
        self.with_reply(crate::test_util::json_reply(200, &body))
    }

    pub fn build(self) -> MockTransport {
        MockTransport {
            replies: Mutex::new(self.replies),
            requests: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn post(&self, body: Vec<u8>) -> Result<HttpReply, RpcError> {
        let request: Value = serde_json::from_slice(&body)
            .map_err(|e| RpcError::InvalidResponse(format!("mock received non-JSON body: {e}")))?;
        self.requests.lock().unwrap().push(request);
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| RpcError::InvalidResponse("mock has no reply queued".into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn replies_are_served_in_order_and_requests_recorded() {
        let mock = MockTransport::with_results([json!(1), json!(2)]);

        let first = mock.post(br#"{"method":"a"}"#.to_vec()).await.unwrap();
        let second = mock.post(br#"{"method":"b"}"#.to_vec()).await.unwrap();
        assert!(first.body.contains("\"result\":1"));
        assert!(second.body.contains("\"result\":2"));
        assert_eq!(mock.requests().len(), 2);
        assert_eq!(mock.last_request()["method"], json!("b"));

        let exhausted = mock.post(b"{}".to_vec()).await;
        assert!(matches!(exhausted, Err(RpcError::InvalidResponse(_))));
    }
}
