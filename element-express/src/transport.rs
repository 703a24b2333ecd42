//! The transport seam.
//!
//! The gateway builds a [`WireRequest`] and hands it to a [`Transport`],
//! which returns the raw reply body. Status handling, timeouts and connection
//! management belong to the transport; the gateway only interprets the body.

use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use crate::action::Action;
use crate::scrub::scrub;

/// Boxed future returned by [`Transport::post`].
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Error produced by a transport implementation.
///
/// Kept opaque so any transport can report its own error type; callers can
/// downcast it back.
pub type TransportError = Box<dyn std::error::Error + Send + Sync>;

/// A fully built outbound request.
#[derive(Clone, PartialEq, Eq)]
pub struct WireRequest {
    /// The action being requested.
    pub action: Action,
    /// Target URL.
    pub url: String,
    /// Request headers.
    pub headers: Vec<(&'static str, String)>,
    /// Serialized SOAP envelope.
    pub body: String,
}

impl WireRequest {
    /// Creates a request for `action` with its standard headers.
    #[must_use]
    pub fn new(action: Action, url: impl Into<String>, body: String) -> Self {
        Self {
            action,
            url: url.into(),
            headers: action.headers(),
            body,
        }
    }

    /// Returns the value of a header, matched case-insensitively.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

impl fmt::Debug for WireRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WireRequest")
            .field("action", &self.action)
            .field("url", &self.url)
            .field("headers", &self.headers)
            .field("body", &scrub(&self.body))
            .finish()
    }
}

/// Delivers a request and returns the raw reply body.
///
/// Implementations make exactly one attempt per call.
pub trait Transport: Send + Sync {
    /// Posts the request.
    fn post<'a>(&'a self, request: &'a WireRequest) -> BoxFuture<'a, Result<String, TransportError>>;
}

impl<T: Transport + ?Sized> Transport for Arc<T> {
    fn post<'a>(&'a self, request: &'a WireRequest) -> BoxFuture<'a, Result<String, TransportError>> {
        (**self).post(request)
    }
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn post<'a>(&'a self, request: &'a WireRequest) -> BoxFuture<'a, Result<String, TransportError>> {
        (**self).post(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_request_headers() {
        let request = WireRequest::new(
            Action::CreditCardSale,
            "https://example.test/express.asmx",
            String::new(),
        );
        assert_eq!(request.header("content-type"), Some("text/xml; charset=utf-8"));
        assert_eq!(
            request.header("SOAPAction"),
            Some("https://transaction.elementexpress.com/CreditCardSale")
        );
        assert_eq!(request.header("Authorization"), None);
    }

    #[test]
    fn test_wire_request_debug_is_scrubbed() {
        let request = WireRequest::new(
            Action::CreditCardSale,
            "https://example.test/express.asmx",
            "<card><CardNumber>4000100011112224</CardNumber></card>".to_owned(),
        );
        let debug = format!("{request:?}");
        assert!(!debug.contains("4000100011112224"));
        assert!(debug.contains("[FILTERED]"));
    }
}
