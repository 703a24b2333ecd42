#![cfg_attr(docsrs, feature(doc_auto_cfg))]

//! Core request/response pipeline for the Element Express payment gateway.
//!
//! This crate turns a canonical transaction (amount, payment method and
//! options) into an Element Express SOAP envelope, hands it to a
//! [`Transport`](transport::Transport), and interprets the provider reply
//! into a [`Response`](response::Response). It does not perform any I/O on its
//! own: the HTTP implementation lives in `element-express-http`.
//!
//! # Overview
//!
//! ```text
//! operation + options ──► request ──► Transport::post ──► reply ──► response
//!                                                         (canonical mapping)
//! ```
//!
//! Every public operation on [`ElementGateway`](gateway::ElementGateway) makes
//! exactly one transport call. Nothing is retried and no state is kept between
//! calls.
//!
//! # Modules
//!
//! - [`action`] - Wire actions, interfaces, environments and endpoint tables
//! - [`authorization`] - Follow-up authorization tokens (`id|amount`)
//! - [`config`] - Credentials and gateway configuration
//! - [`error`] - Error taxonomy shared by every operation
//! - [`format`] - Field formatting helpers (amounts, dates, references)
//! - [`gateway`] - The gateway operations (purchase, authorize, capture, ...)
//! - [`options`] - Per-call transaction options with explicit defaults
//! - [`payment`] - Payment method variants
//! - [`reply`] - Reply normalization into a canonical mapping
//! - [`request`] - SOAP request construction
//! - [`response`] - Outcome interpretation
//! - [`scrub`] - Transcript redaction for safe logging
//! - [`transport`] - The transport seam consumed by the gateway
//!
//! # Feature Flags
//!
//! - `cli` - Derives `clap::ValueEnum` for [`Environment`](action::Environment)
//! - `telemetry` - Enables tracing instrumentation of gateway operations

pub mod action;
pub mod authorization;
pub mod config;
pub mod error;
pub mod format;
pub mod gateway;
pub mod options;
pub mod payment;
pub mod reply;
pub mod request;
pub mod response;
pub mod scrub;
pub mod transport;

#[cfg(test)]
mod fixtures;

pub use action::{Action, Endpoints, Environment, Interface};
pub use authorization::{Authorization, TransactionReference};
pub use config::{Credentials, GatewayConfig};
pub use error::GatewayError;
pub use gateway::ElementGateway;
pub use options::{Address, Lodging, TerminalOptions, TransactionOptions};
pub use payment::{BankAccount, Card, NetworkTokenCard, PaymentMethod, WalletSource};
pub use reply::{CanonicalReply, Field};
pub use response::Response;
pub use transport::{BoxFuture, Transport, TransportError, WireRequest};
