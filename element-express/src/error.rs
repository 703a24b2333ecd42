//! Error types for Element Express gateway operations.
//!
//! A provider decline is not an error: it is reported as a
//! [`Response`](crate::response::Response) whose `success()` is `false`.
//! Everything in [`GatewayError`] means the call did not produce a
//! provider verdict at all.

use crate::transport::TransportError;

/// Errors that can occur while running a gateway operation.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum GatewayError {
    /// A required credential is missing or blank.
    ///
    /// Raised when the gateway is constructed, never during a call.
    #[error("Missing required credential: {0}")]
    MissingCredential(&'static str),

    /// The authorization passed to a follow-up operation cannot be used.
    ///
    /// Raised before any network call is made.
    #[error("Invalid authorization: {0}")]
    InvalidAuthorization(String),

    /// The request document could not be serialized.
    #[error("Failed to encode request: {0}")]
    Encode(String),

    /// The transport failed to deliver the request or read the reply.
    ///
    /// The transport's own error is kept as the source, unmodified.
    #[error("Transport error: {0}")]
    Transport(#[source] TransportError),

    /// The provider reply could not be parsed as XML.
    #[error("Malformed reply: {0}")]
    MalformedReply(String),
}

impl GatewayError {
    /// Returns `true` for errors raised before any request was sent.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::MissingCredential(_) | Self::InvalidAuthorization(_)
        )
    }
}
