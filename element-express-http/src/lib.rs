#![cfg_attr(docsrs, feature(doc_auto_cfg))]

//! HTTP transport for the Element Express payment gateway.
//!
//! Implements [`element_express::Transport`] on top of `reqwest`:
//!
//! ```rust,no_run
//! use element_express::{Credentials, ElementGateway, GatewayConfig};
//! use element_express_http::HttpTransport;
//!
//! # fn build(credentials: Credentials) -> Result<(), Box<dyn std::error::Error>> {
//! let transport = HttpTransport::new()?;
//! let gateway = ElementGateway::new(GatewayConfig::new(credentials), transport)?;
//! # let _ = gateway;
//! # Ok(())
//! # }
//! ```
//!
//! # Modules
//!
//! - [`constants`] - Transport defaults
//! - [`error`] - HTTP transport error types
//! - [`transport`] - The `reqwest` transport

pub mod constants;
pub mod error;
pub mod transport;

pub use error::HttpError;
pub use transport::{HttpTransport, HttpTransportConfig};
