//! HTTP transport error types.
//!
//! These surface through the gateway as
//! [`GatewayError::Transport`](element_express::GatewayError::Transport) and
//! can be recovered with `downcast_ref::<HttpError>()`.

use reqwest::StatusCode;

/// Errors produced by [`HttpTransport`](crate::transport::HttpTransport).
#[derive(Debug, thiserror::Error)]
pub enum HttpError {
    /// The HTTP client could not be built.
    #[error("Failed to build HTTP client: {0}")]
    Build(#[source] reqwest::Error),

    /// The request could not be sent or its body could not be read.
    #[error("{context}: {source}")]
    Request {
        /// What was being attempted.
        context: &'static str,
        /// Underlying `reqwest` error.
        #[source]
        source: reqwest::Error,
    },

    /// The provider answered with a non-success status.
    #[error("Unexpected HTTP status {status}: {body}")]
    Status {
        /// Response status.
        status: StatusCode,
        /// Response body, as received.
        body: String,
    },
}

impl HttpError {
    /// The HTTP status, for [`HttpError::Status`].
    #[must_use]
    pub const fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Build(_) | Self::Request { .. } => None,
        }
    }
}
