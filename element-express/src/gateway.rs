//! The Element Express gateway operations.
//!
//! [`ElementGateway`] validates its credentials once at construction and then
//! runs each operation as a single request/reply exchange through its
//! [`Transport`]. Amounts are in minor units (cents).
//!
//! ```rust,no_run
//! use element_express::{
//!     Card, Credentials, ElementGateway, Environment, GatewayConfig, Transport,
//!     TransactionOptions,
//! };
//!
//! async fn charge<T: Transport>(transport: T, credentials: Credentials) -> Result<(), Box<dyn std::error::Error>> {
//!     let config = GatewayConfig::new(credentials).with_environment(Environment::Test);
//!     let gateway = ElementGateway::new(config, transport)?;
//!
//!     let card = Card::new("4000100011112224", 9, 2029, "123").with_name("Longbob", "Longsen");
//!     let response = gateway
//!         .authorize(100, &card.into(), &TransactionOptions::default())
//!         .await?;
//!
//!     if let Some(authorization) = response.authorization() {
//!         gateway
//!             .capture(100, &authorization.to_string(), &TransactionOptions::default())
//!             .await?;
//!     }
//!     Ok(())
//! }
//! ```

#[cfg(feature = "telemetry")]
use tracing::{debug, info, instrument};

use crate::action::{Action, Endpoints, Environment};
use crate::authorization::{TransactionReference, decode};
use crate::config::{Credentials, GatewayConfig};
use crate::error::GatewayError;
use crate::options::TransactionOptions;
use crate::payment::PaymentMethod;
use crate::reply::CanonicalReply;
use crate::request::{RequestParts, TransactionFields, build};
use crate::response::Response;
use crate::scrub::scrub;
use crate::transport::{Transport, WireRequest};

/// Human-readable gateway name.
pub const DISPLAY_NAME: &str = "Element";
/// Provider home page.
pub const HOMEPAGE_URL: &str = "http://www.elementps.com";
/// ISO 3166 country codes the provider accepts merchants from.
pub const SUPPORTED_COUNTRIES: &[&str] = &["US"];
/// Currency of every amount.
pub const DEFAULT_CURRENCY: &str = "USD";
/// Card brands the provider processes.
pub const SUPPORTED_CARD_TYPES: &[&str] = &[
    "visa",
    "master",
    "american_express",
    "discover",
    "diners_club",
    "jcb",
];

/// Element Express payment gateway.
#[derive(Debug, Clone)]
pub struct ElementGateway<T> {
    credentials: Credentials,
    environment: Environment,
    endpoints: Endpoints,
    transport: T,
}

impl<T: Transport> ElementGateway<T> {
    /// Creates a gateway.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::MissingCredential`] if any credential is blank.
    pub fn new(config: GatewayConfig, transport: T) -> Result<Self, GatewayError> {
        config.credentials.validate()?;
        let endpoints = config.endpoints();
        Ok(Self {
            credentials: config.credentials,
            environment: config.environment,
            endpoints,
            transport,
        })
    }

    /// Charges `money` to `payment`.
    ///
    /// Bank accounts are charged with a check sale, everything else with a
    /// card sale.
    ///
    /// # Errors
    ///
    /// See [`GatewayError`]. A decline is an `Ok` response.
    #[cfg_attr(
        feature = "telemetry",
        instrument(name = "element.purchase", skip_all, fields(money = money), err)
    )]
    pub async fn purchase(
        &self,
        money: u64,
        payment: &PaymentMethod,
        options: &TransactionOptions,
    ) -> Result<Response, GatewayError> {
        let action = if payment.is_bank_account() {
            Action::CheckSale
        } else {
            Action::CreditCardSale
        };
        let parts = RequestParts {
            payment: Some(payment),
            transaction: TransactionFields::amount(money),
            options,
        };
        self.commit_transaction(action, &parts, &money.to_string())
            .await
    }

    /// Reserves `money` on `payment`.
    ///
    /// # Errors
    ///
    /// See [`GatewayError`]. A decline is an `Ok` response.
    #[cfg_attr(
        feature = "telemetry",
        instrument(name = "element.authorize", skip_all, fields(money = money), err)
    )]
    pub async fn authorize(
        &self,
        money: u64,
        payment: &PaymentMethod,
        options: &TransactionOptions,
    ) -> Result<Response, GatewayError> {
        let parts = RequestParts {
            payment: Some(payment),
            transaction: TransactionFields::amount(money),
            options,
        };
        self.commit_transaction(Action::CreditCardAuthorization, &parts, &money.to_string())
            .await
    }

    /// Captures `money` of a prior authorization.
    ///
    /// # Errors
    ///
    /// See [`GatewayError`]. A decline is an `Ok` response.
    #[cfg_attr(
        feature = "telemetry",
        instrument(name = "element.capture", skip_all, fields(money = money), err)
    )]
    pub async fn capture(
        &self,
        money: u64,
        authorization: &str,
        options: &TransactionOptions,
    ) -> Result<Response, GatewayError> {
        let (transaction_id, _) = decode(authorization);
        let parts = RequestParts {
            payment: None,
            transaction: TransactionFields::follow_up(money, transaction_id),
            options,
        };
        self.commit_transaction(
            Action::CreditCardAuthorizationCompletion,
            &parts,
            &money.to_string(),
        )
        .await
    }

    /// Refunds `money` of a prior transaction.
    ///
    /// # Errors
    ///
    /// See [`GatewayError`]. A decline is an `Ok` response.
    #[cfg_attr(
        feature = "telemetry",
        instrument(name = "element.refund", skip_all, fields(money = money), err)
    )]
    pub async fn refund(
        &self,
        money: u64,
        authorization: &str,
        options: &TransactionOptions,
    ) -> Result<Response, GatewayError> {
        let (transaction_id, _) = decode(authorization);
        let parts = RequestParts {
            payment: None,
            transaction: TransactionFields::follow_up(money, transaction_id),
            options,
        };
        self.commit_transaction(Action::CreditCardReturn, &parts, &money.to_string())
            .await
    }

    /// Credits `money` to `payment` without a prior transaction.
    ///
    /// # Errors
    ///
    /// See [`GatewayError`]. A decline is an `Ok` response.
    #[cfg_attr(
        feature = "telemetry",
        instrument(name = "element.credit", skip_all, fields(money = money), err)
    )]
    pub async fn credit(
        &self,
        money: u64,
        payment: &PaymentMethod,
        options: &TransactionOptions,
    ) -> Result<Response, GatewayError> {
        let parts = RequestParts {
            payment: Some(payment),
            transaction: TransactionFields::amount(money),
            options,
        };
        self.commit_transaction(Action::CreditCardCredit, &parts, &money.to_string())
            .await
    }

    /// Fully reverses a prior transaction.
    ///
    /// The original amount is read back from the authorization token and
    /// restated in the request.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::InvalidAuthorization`] before any request is
    /// made if the token's amount segment is not an integer. Otherwise see
    /// [`GatewayError`].
    #[cfg_attr(
        feature = "telemetry",
        instrument(name = "element.void", skip_all, err)
    )]
    pub async fn void(
        &self,
        authorization: &str,
        options: &TransactionOptions,
    ) -> Result<Response, GatewayError> {
        let reference = TransactionReference::parse(authorization);
        let amount = reference.amount_minor()?;
        let parts = RequestParts {
            payment: None,
            transaction: TransactionFields::reversal(amount, &reference.transaction_id),
            options,
        };
        self.commit_transaction(Action::CreditCardReversal, &parts, &reference.amount)
            .await
    }

    /// Creates a stored payment account for `payment`.
    ///
    /// The response's authorization is the payment account id, usable later
    /// as [`PaymentMethod::StoredAccount`].
    ///
    /// # Errors
    ///
    /// See [`GatewayError`]. A decline is an `Ok` response.
    #[cfg_attr(
        feature = "telemetry",
        instrument(name = "element.store", skip_all, err)
    )]
    pub async fn store(
        &self,
        payment: &PaymentMethod,
        options: &TransactionOptions,
    ) -> Result<Response, GatewayError> {
        let parts = RequestParts {
            payment: Some(payment),
            transaction: TransactionFields::default(),
            options,
        };
        let (reply, raw) = self.commit(Action::PaymentAccountCreate, &parts).await?;
        Ok(Response::from_payment_account(reply, self.is_test(), raw))
    }

    /// Verifies `payment` with a zero-amount address check.
    ///
    /// # Errors
    ///
    /// See [`GatewayError`]. A decline is an `Ok` response.
    #[cfg_attr(
        feature = "telemetry",
        instrument(name = "element.verify", skip_all, err)
    )]
    pub async fn verify(
        &self,
        payment: &PaymentMethod,
        options: &TransactionOptions,
    ) -> Result<Response, GatewayError> {
        let parts = RequestParts {
            payment: Some(payment),
            transaction: TransactionFields::amount(0),
            options,
        };
        self.commit_transaction(Action::CreditCardAvsOnly, &parts, "0")
            .await
    }

    async fn commit_transaction(
        &self,
        action: Action,
        parts: &RequestParts<'_>,
        amount: &str,
    ) -> Result<Response, GatewayError> {
        let (reply, raw) = self.commit(action, parts).await?;
        Ok(Response::from_transaction(reply, amount, self.is_test(), raw))
    }

    /// Builds, sends and normalizes one request.
    async fn commit(
        &self,
        action: Action,
        parts: &RequestParts<'_>,
    ) -> Result<(CanonicalReply, String), GatewayError> {
        let body = build(action, &self.credentials, parts)?;
        let request = WireRequest::new(action, self.endpoints.url(action.interface()), body);

        #[cfg(feature = "telemetry")]
        debug!(%action, url = %request.url, body = %scrub(&request.body), "sending request");

        let raw = self
            .transport
            .post(&request)
            .await
            .map_err(GatewayError::Transport)?;

        #[cfg(feature = "telemetry")]
        debug!(%action, body = %scrub(&raw), "received reply");

        let reply = CanonicalReply::parse(&raw)?;

        #[cfg(feature = "telemetry")]
        {
            let code = reply.scalar("expressresponsecode").unwrap_or_default();
            info!(
                %action,
                url = %request.url,
                success = code == crate::response::SUCCESS_CODE,
                code,
                "element reply"
            );
        }

        Ok((reply, raw))
    }
}

impl<T> ElementGateway<T> {
    /// Redacts sensitive values in a request/reply transcript.
    #[must_use]
    pub fn scrub(&self, transcript: &str) -> String {
        scrub(transcript)
    }

    /// Transcripts of this gateway can be scrubbed.
    #[must_use]
    pub const fn supports_scrubbing(&self) -> bool {
        true
    }

    /// Whether requests go to the certification environment.
    #[must_use]
    pub const fn is_test(&self) -> bool {
        self.environment.is_test()
    }

    /// The configured environment.
    #[must_use]
    pub const fn environment(&self) -> Environment {
        self.environment
    }

    /// The URLs requests are posted to.
    #[must_use]
    pub const fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    /// The underlying transport.
    #[must_use]
    pub const fn transport(&self) -> &T {
        &self.transport
    }
}
