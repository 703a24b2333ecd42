//! Credentials and gateway configuration.
//!
//! Both types deserialize with `serde`, so they can be embedded in whatever
//! configuration format the host application uses:
//!
//! ```rust
//! use element_express::{Environment, GatewayConfig};
//!
//! let config: GatewayConfig = serde_json::from_str(r#"{
//!     "account_id": "1013963",
//!     "account_token": "683EED8A1A83F5F5",
//!     "acceptor_id": "3928907",
//!     "application_id": "5211",
//!     "application_name": "Checkout",
//!     "application_version": "1",
//!     "environment": "test"
//! }"#).unwrap();
//! assert_eq!(config.environment, Environment::Test);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::action::{Endpoints, Environment};
use crate::error::GatewayError;

/// Merchant identity sent in the `credentials` and `application` blocks.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Credentials {
    /// `AccountID`.
    pub account_id: String,
    /// `AccountToken`. Never printed by `Debug`.
    pub account_token: String,
    /// `AcceptorID`.
    pub acceptor_id: String,
    /// `ApplicationID`.
    pub application_id: String,
    /// `ApplicationName`.
    pub application_name: String,
    /// `ApplicationVersion`.
    pub application_version: String,
}

impl Credentials {
    /// Checks that every field is populated.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::MissingCredential`] naming the first blank
    /// field.
    pub fn validate(&self) -> Result<(), GatewayError> {
        let fields = [
            ("account_id", &self.account_id),
            ("account_token", &self.account_token),
            ("application_id", &self.application_id),
            ("acceptor_id", &self.acceptor_id),
            ("application_name", &self.application_name),
            ("application_version", &self.application_version),
        ];
        match fields.iter().find(|(_, value)| value.trim().is_empty()) {
            Some(&(name, _)) => Err(GatewayError::MissingCredential(name)),
            None => Ok(()),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("account_id", &self.account_id)
            .field("account_token", &"[FILTERED]")
            .field("acceptor_id", &self.acceptor_id)
            .field("application_id", &self.application_id)
            .field("application_name", &self.application_name)
            .field("application_version", &self.application_version)
            .finish()
    }
}

/// Everything needed to construct an [`ElementGateway`](crate::gateway::ElementGateway).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GatewayConfig {
    /// Merchant identity.
    #[serde(flatten)]
    pub credentials: Credentials,

    /// Target environment (default: `live`).
    #[serde(default)]
    pub environment: Environment,

    /// Explicit endpoint URLs, replacing the environment's.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoints: Option<Endpoints>,
}

impl GatewayConfig {
    /// Creates a live configuration for `credentials`.
    #[must_use]
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            environment: Environment::default(),
            endpoints: None,
        }
    }

    /// Sets the environment.
    #[must_use]
    pub const fn with_environment(mut self, environment: Environment) -> Self {
        self.environment = environment;
        self
    }

    /// Overrides the endpoint URLs.
    #[must_use]
    pub fn with_endpoints(mut self, endpoints: Endpoints) -> Self {
        self.endpoints = Some(endpoints);
        self
    }

    /// The URLs requests are posted to.
    #[must_use]
    pub fn endpoints(&self) -> Endpoints {
        self.endpoints
            .clone()
            .unwrap_or_else(|| Endpoints::for_environment(self.environment))
    }
}
