//! Command line configuration.
//!
//! Loads gateway configuration from a TOML file with support for environment
//! variable expansion in string values. Variables use `$VAR` or `${VAR}`
//! syntax.
//!
//! # Example Configuration
//!
//! ```toml
//! account_id = "1013963"
//! account_token = "$ELEMENT_ACCOUNT_TOKEN"
//! acceptor_id = "3928907"
//! application_id = "5211"
//! application_name = "Checkout"
//! application_version = "1.0"
//! environment = "test"
//! timeout_secs = 30
//!
//! # Optional, replaces the environment's URLs
//! [endpoints]
//! transaction = "http://127.0.0.1:9000/express.asmx"
//! services = "http://127.0.0.1:9000/express.asmx"
//! ```
//!
//! # Environment Variables
//!
//! - `ELEMENT_CONFIG` - Path to configuration file (default: `element.toml`)
//! - `ELEMENT_ENV` - Override the environment (`test` or `live`)
//! - Secrets referenced by `$VAR` in the config file

use std::path::{Path, PathBuf};
use std::time::Duration;

use element_express::{Environment, GatewayConfig};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Config file used when neither `--config` nor `ELEMENT_CONFIG` is set.
pub const DEFAULT_CONFIG_PATH: &str = "element.toml";

/// Environment variable naming the config file.
pub const CONFIG_ENV: &str = "ELEMENT_CONFIG";

/// Environment variable overriding the environment.
pub const ENVIRONMENT_ENV: &str = "ELEMENT_ENV";

/// Top-level command line configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CliConfig {
    /// Credentials, environment and optional endpoint override.
    #[serde(flatten)]
    pub gateway: GatewayConfig,

    /// HTTP request timeout in seconds (default: `30`).
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

const fn default_timeout_secs() -> u64 {
    30
}

impl CliConfig {
    /// Loads configuration from `path`, else from `ELEMENT_CONFIG`, else from
    /// `element.toml` in the current directory.
    ///
    /// A missing default file yields an empty configuration, so credentials
    /// are reported missing when the gateway is built. `ELEMENT_ENV`
    /// overrides the file's environment.
    ///
    /// # Errors
    ///
    /// Returns an error if an explicitly named file cannot be read, the file
    /// cannot be parsed, or `ELEMENT_ENV` is invalid.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let explicit = path
            .map(Path::to_path_buf)
            .or_else(|| std::env::var_os(CONFIG_ENV).map(PathBuf::from));

        let content = match &explicit {
            Some(path) => read(path)?,
            None if Path::new(DEFAULT_CONFIG_PATH).exists() => read(Path::new(DEFAULT_CONFIG_PATH))?,
            None => String::new(),
        };

        let mut config = Self::parse(&expand_env_vars(&content))?;
        if let Ok(environment) = std::env::var(ENVIRONMENT_ENV) {
            config.gateway.environment = parse_environment(&environment)?;
        }
        Ok(config)
    }

    /// Parses already-expanded TOML.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] if the document is invalid.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// The HTTP request timeout.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

fn read(path: &Path) -> Result<String, ConfigError> {
    std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Parses `test` or `live`, case-insensitively.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidEnvironment`] for anything else.
pub fn parse_environment(value: &str) -> Result<Environment, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "test" => Ok(Environment::Test),
        "live" => Ok(Environment::Live),
        _ => Err(ConfigError::InvalidEnvironment(value.to_owned())),
    }
}

/// Expands `$VAR` and `${VAR}` patterns from the process environment.
#[must_use]
pub fn expand_env_vars(input: &str) -> String {
    expand_vars(input, |name| std::env::var(name).ok())
}

/// Expands `$VAR` and `${VAR}` patterns using `lookup`.
///
/// Unresolved variables are left as-is.
pub fn expand_vars(input: &str, lookup: impl Fn(&str) -> Option<String>) -> String {
    let mut result = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch != '$' {
            result.push(ch);
            continue;
        }

        let braced = chars.next_if_eq(&'{').is_some();
        let mut name = String::new();
        let mut closed = false;
        while let Some(&c) = chars.peek() {
            if braced {
                chars.next();
                if c == '}' {
                    closed = true;
                    break;
                }
            } else if c.is_ascii_alphanumeric() || c == '_' {
                chars.next();
            } else {
                break;
            }
            name.push(c);
        }

        match lookup(&name).filter(|_| !name.is_empty()) {
            Some(value) => result.push_str(&value),
            None => {
                result.push('$');
                if braced {
                    result.push('{');
                }
                result.push_str(&name);
                if closed {
                    result.push('}');
                }
            }
        }
    }

    result
}
