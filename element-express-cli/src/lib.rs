//! Operator command line for the Element Express payment gateway.
//!
//! The binary wires an [`element_express::ElementGateway`] to the `reqwest`
//! transport from `element-express-http`, configured from a TOML file.
//!
//! # Modules
//!
//! - [`config`] - TOML configuration with environment variable expansion
//! - [`error`] - CLI error types

pub mod config;
pub mod error;

pub use config::CliConfig;
pub use error::{CliError, ConfigError};
