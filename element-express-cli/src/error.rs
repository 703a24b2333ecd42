//! Error types for the command line.

use std::path::PathBuf;

use element_express::GatewayError;
use element_express_http::HttpError;

/// Errors raised while loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read {path}: {source}")]
    Read {
        /// File that was being read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is not valid TOML for [`CliConfig`](crate::CliConfig).
    #[error("invalid configuration: {0}")]
    Parse(#[from] toml::de::Error),

    /// `ELEMENT_ENV` holds something other than `test` or `live`.
    #[error("invalid environment {0:?}, expected \"test\" or \"live\"")]
    InvalidEnvironment(String),
}

/// Errors raised by a command.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Configuration could not be loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The HTTP transport could not be created.
    #[error(transparent)]
    Http(#[from] HttpError),

    /// The gateway rejected the call or could not complete it.
    #[error(transparent)]
    Gateway(#[from] GatewayError),

    /// Input could not be read.
    #[error("failed to read input: {0}")]
    Input(#[from] std::io::Error),

    /// Output could not be rendered.
    #[error("failed to render output: {0}")]
    Output(#[from] serde_json::Error),
}
