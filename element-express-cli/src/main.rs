//! Element Express operator command line.
//!
//! # Usage
//!
//! ```bash
//! # Redact a captured transcript
//! element-express scrub transcript.log
//!
//! # Verify a card in the certification environment
//! element-express --environment test verify --number 4000100011112224 \
//!     --month 9 --year 2029 --cvv 123 --zip 30329
//!
//! # Follow up on a prior transaction
//! element-express capture "2005831886|100" 100
//! element-express void "2005831886|100"
//!
//! # Configure logging level
//! RUST_LOG=debug element-express void "2005831886|100"
//! ```
//!
//! # Environment Variables
//!
//! - `ELEMENT_CONFIG` - Path to TOML configuration file (default: `element.toml`)
//! - `ELEMENT_ENV` - Override the configured environment
//! - `RUST_LOG` - Log level filter (default: `info`)

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use element_express::{
    Address, Card, ElementGateway, Environment, PaymentMethod, Response, TransactionOptions,
};
use element_express_http::{HttpTransport, HttpTransportConfig};
use tracing_subscriber::EnvFilter;

use element_express_cli::{CliConfig, CliError};

/// Element Express payment gateway operator tool.
#[derive(Debug, Parser)]
#[command(name = "element-express", version, about)]
struct Cli {
    /// Path to the TOML configuration file.
    #[arg(long, short, global = true)]
    config: Option<PathBuf>,

    /// Override the configured environment.
    #[arg(long, global = true, value_enum)]
    environment: Option<Environment>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Redact sensitive values from a transcript (stdin when FILE is omitted).
    Scrub {
        /// Transcript file.
        file: Option<PathBuf>,
    },
    /// Run a zero-amount address verification on a card.
    Verify(CardArgs),
    /// Capture an authorization.
    Capture {
        /// Authorization token (`id|amount`).
        authorization: String,
        /// Amount in cents.
        amount: u64,
        #[command(flatten)]
        options: OptionArgs,
    },
    /// Refund a transaction.
    Refund {
        /// Authorization token (`id|amount`).
        authorization: String,
        /// Amount in cents.
        amount: u64,
        #[command(flatten)]
        options: OptionArgs,
    },
    /// Void a transaction for its original amount.
    Void {
        /// Authorization token (`id|amount`).
        authorization: String,
        #[command(flatten)]
        options: OptionArgs,
    },
}

#[derive(Debug, Args)]
struct CardArgs {
    /// Card number.
    #[arg(long, env = "ELEMENT_CARD_NUMBER", hide_env_values = true)]
    number: String,
    /// Expiration month.
    #[arg(long)]
    month: u32,
    /// Expiration year.
    #[arg(long)]
    year: u32,
    /// Card verification value.
    #[arg(long, env = "ELEMENT_CARD_CVV", hide_env_values = true)]
    cvv: String,
    /// Cardholder first name.
    #[arg(long, default_value = "")]
    first_name: String,
    /// Cardholder last name.
    #[arg(long, default_value = "")]
    last_name: String,
    /// Billing postal code.
    #[arg(long)]
    zip: Option<String>,
    #[command(flatten)]
    options: OptionArgs,
}

#[derive(Debug, Args)]
struct OptionArgs {
    /// Order id, sent as the reference number.
    #[arg(long)]
    order_id: Option<String>,
}

impl OptionArgs {
    fn into_options(self) -> TransactionOptions {
        TransactionOptions {
            order_id: self.order_id,
            ..TransactionOptions::default()
        }
    }
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(cli).await {
        tracing::error!("element-express failed: {e}");
        std::process::exit(1);
    }
}

#[allow(clippy::print_stdout)]
async fn run(cli: Cli) -> Result<(), CliError> {
    if let Command::Scrub { file } = &cli.command {
        let transcript = match file {
            Some(path) => std::fs::read_to_string(path)?,
            None => std::io::read_to_string(std::io::stdin())?,
        };
        print!("{}", element_express::scrub::scrub(&transcript));
        return Ok(());
    }

    let mut config = CliConfig::load(cli.config.as_deref())?;
    if let Some(environment) = cli.environment {
        config.gateway.environment = environment;
    }
    tracing::info!(
        environment = ?config.gateway.environment,
        timeout_secs = config.timeout_secs,
        "Loaded configuration"
    );

    let transport =
        HttpTransport::with_config(HttpTransportConfig::default().with_timeout(config.timeout()))?;
    let gateway = ElementGateway::new(config.gateway, transport)?;

    let response = match cli.command {
        Command::Scrub { .. } => return Ok(()),
        Command::Verify(card) => {
            let mut options = card.options.into_options();
            options.billing_address = card.zip.map(|zip| Address {
                zip: Some(zip),
                ..Address::default()
            });
            let payment = PaymentMethod::from(
                Card::new(card.number, card.month, card.year, card.cvv)
                    .with_name(card.first_name, card.last_name),
            );
            gateway.verify(&payment, &options).await?
        }
        Command::Capture {
            authorization,
            amount,
            options,
        } => {
            gateway
                .capture(amount, &authorization, &options.into_options())
                .await?
        }
        Command::Refund {
            authorization,
            amount,
            options,
        } => {
            gateway
                .refund(amount, &authorization, &options.into_options())
                .await?
        }
        Command::Void {
            authorization,
            options,
        } => gateway.void(&authorization, &options.into_options()).await?,
    };

    print_response(&response)
}

#[allow(clippy::print_stdout)]
fn print_response(response: &Response) -> Result<(), CliError> {
    println!("{}", serde_json::to_string_pretty(response)?);
    if !response.success() {
        tracing::warn!(reason = response.message().unwrap_or_default(), "Declined");
    }
    Ok(())
}
