//! Transport port
//!
//! Request/response capability used by abstraction proxies to reach a
//! server. The repository never talks to a transport itself; a transport is
//! a component injected through a definition's fixed arguments.

use serde::{Deserialize, Serialize};

use crate::constants::{HTTP_STATUS_LOCAL, HTTP_STATUS_OK};

/// Default request method
pub const DEFAULT_METHOD: &str = "GET";

/// An outgoing request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransportRequest {
    /// Target URL
    pub url: String,
    /// Optional request body
    pub body: Option<String>,
    /// Request method (GET, POST, HEAD, ...)
    pub method: String,
}

impl TransportRequest {
    /// Create a GET request for the URL
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            body: None,
            method: DEFAULT_METHOD.to_string(),
        }
    }

    /// Set the request body
    #[must_use]
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Set the request method
    #[must_use]
    pub fn with_method(mut self, method: impl Into<String>) -> Self {
        self.method = method.into();
        self
    }
}

/// A completed response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransportResponse {
    /// Status code (0 for transports without a real server)
    pub status: u16,
    /// Response body
    pub body: String,
}

/// Completion callback invoked once the response is available
pub type CompletionHandler = Box<dyn FnOnce(TransportResponse) + Send>;

/// Request/response capability
pub trait Transport: Send + Sync {
    /// Send a request, invoking `on_complete` with the response
    fn send(&self, request: TransportRequest, on_complete: CompletionHandler);

    /// Whether the response counts as a success
    fn is_success(&self, response: &TransportResponse) -> bool {
        matches!(response.status, HTTP_STATUS_LOCAL | HTTP_STATUS_OK)
    }
}
