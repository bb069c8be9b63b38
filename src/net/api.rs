//! HTTP transport for the chat endpoint.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Native builds: [`HttpTransport`] reports [`TransportError::Unavailable`];
//! tests drive the controller through their own [`Transport`] impls.
//!
//! ERROR HANDLING
//! ==============
//! Network failures, non-2xx statuses, non-JSON bodies, and bodies without a
//! string `reply` are distinct [`TransportError`] variants for logging, but
//! callers treat them all as one connection error. No retry, no timeout.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use futures::FutureExt;
use futures::future::LocalBoxFuture;
use serde_json::Value;

use super::types::{ChatReply, ChatRequest};
use crate::util::config::ClientId;
use crate::util::identity::VisitorId;

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("request could not be encoded: {0}")]
    Encode(String),
    #[error("network error: {0}")]
    Network(String),
    #[error("chat endpoint returned HTTP {0}")]
    Status(u16),
    #[error("response is not JSON: {0}")]
    Decode(String),
    #[error("response has no string `reply` field")]
    MissingReply,
    #[error("HTTP transport requires a browser")]
    Unavailable,
}

/// Sends one chat request and resolves to the validated reply.
pub trait Transport {
    fn send<'a>(&'a self, request: &'a ChatRequest) -> LocalBoxFuture<'a, Result<ChatReply, TransportError>>;
}

/// `POST` to the configured endpoint with tenant and visitor in the query.
#[derive(Clone, Debug)]
pub struct HttpTransport {
    endpoint: String,
    client_id: ClientId,
    visitor_id: VisitorId,
}

impl HttpTransport {
    pub fn new(endpoint: impl Into<String>, client_id: ClientId, visitor_id: VisitorId) -> Self {
        Self { endpoint: endpoint.into(), client_id, visitor_id }
    }

    /// Query parameters expected by the backend.
    #[must_use]
    pub fn query_pairs(&self) -> [(&'static str, &str); 2] {
        [("clientID", self.client_id.as_str()), ("requestID", self.visitor_id.as_str())]
    }

    async fn post(&self, request: &ChatRequest) -> Result<ChatReply, TransportError> {
        #[cfg(feature = "csr")]
        {
            let resp = gloo_net::http::Request::post(&self.endpoint)
                .query(self.query_pairs())
                .json(request)
                .map_err(|e| TransportError::Encode(e.to_string()))?
                .send()
                .await
                .map_err(|e| TransportError::Network(e.to_string()))?;
            if !resp.ok() {
                return Err(TransportError::Status(resp.status()));
            }
            let body = resp
                .text()
                .await
                .map_err(|e| TransportError::Network(e.to_string()))?;
            parse_reply(&body)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (&self.endpoint, request);
            Err(TransportError::Unavailable)
        }
    }
}

impl Transport for HttpTransport {
    fn send<'a>(&'a self, request: &'a ChatRequest) -> LocalBoxFuture<'a, Result<ChatReply, TransportError>> {
        self.post(request).boxed_local()
    }
}

/// Validate a response body: JSON object with a string `reply`.
///
/// # Errors
///
/// [`TransportError::Decode`] for non-JSON bodies and
/// [`TransportError::MissingReply`] when `reply` is absent or not a string.
pub fn parse_reply(body: &str) -> Result<ChatReply, TransportError> {
    let value: Value = serde_json::from_str(body).map_err(|e| TransportError::Decode(e.to_string()))?;
    if !value.get("reply").is_some_and(Value::is_string) {
        return Err(TransportError::MissingReply);
    }
    serde_json::from_value::<ChatReply>(value).map_err(|e| TransportError::Decode(e.to_string()))
}
