//! A [`Transport`] backed by `reqwest`.
//!
//! Posts the envelope with the request's headers, applies a per-request
//! timeout and returns the body of any 2xx reply. Other statuses become
//! [`HttpError::Status`], carrying the body for diagnostics. Nothing is
//! retried.

use std::time::Duration;

use element_express::{BoxFuture, Transport, TransportError, WireRequest};
use reqwest::Client;

#[cfg(feature = "telemetry")]
use tracing::{debug, instrument};

use crate::constants::{DEFAULT_TIMEOUT, USER_AGENT};
use crate::error::HttpError;

/// Settings for [`HttpTransport`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpTransportConfig {
    /// Per-request timeout (default: 30 seconds).
    pub timeout: Duration,
}

impl Default for HttpTransportConfig {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl HttpTransportConfig {
    /// Sets the per-request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// HTTP transport for [`ElementGateway`](element_express::ElementGateway).
#[derive(Debug, Clone)]
pub struct HttpTransport {
    /// Shared Reqwest HTTP client
    client: Client,
    timeout: Duration,
}

impl HttpTransport {
    /// Creates a transport with default settings.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Build`] if the HTTP client cannot be initialized.
    pub fn new() -> Result<Self, HttpError> {
        Self::with_config(HttpTransportConfig::default())
    }

    /// Creates a transport with the given settings.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Build`] if the HTTP client cannot be initialized.
    pub fn with_config(config: HttpTransportConfig) -> Result<Self, HttpError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(HttpError::Build)?;
        Ok(Self::with_client(client, config))
    }

    /// Wraps an existing client, e.g. one with custom TLS or proxy settings.
    #[must_use]
    pub const fn with_client(client: Client, config: HttpTransportConfig) -> Self {
        Self {
            client,
            timeout: config.timeout,
        }
    }

    /// The per-request timeout.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    #[cfg_attr(
        feature = "telemetry",
        instrument(name = "element.http.post", skip_all, fields(url = %request.url), err)
    )]
    async fn send(&self, request: &WireRequest) -> Result<String, HttpError> {
        let mut req = self
            .client
            .post(&request.url)
            .timeout(self.timeout)
            .body(request.body.clone());
        for (name, value) in &request.headers {
            req = req.header(*name, value);
        }

        let response = req.send().await.map_err(|source| HttpError::Request {
            context: "Failed to send request",
            source,
        })?;
        let status = response.status();
        let body = response.text().await.map_err(|source| HttpError::Request {
            context: "Failed to read response body",
            source,
        })?;

        #[cfg(feature = "telemetry")]
        debug!(%status, bytes = body.len(), "received response");

        if status.is_success() {
            Ok(body)
        } else {
            Err(HttpError::Status { status, body })
        }
    }
}

impl Transport for HttpTransport {
    fn post<'a>(&'a self, request: &'a WireRequest) -> BoxFuture<'a, Result<String, TransportError>> {
        Box::pin(async move { self.send(request).await.map_err(Into::into) })
    }
}
