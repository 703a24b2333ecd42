//! Follow-up authorization tokens.
//!
//! A transaction token joins the provider transaction id and the amount the
//! transaction was created with, `"{transaction_id}|{amount}"`, so a later
//! void can restate the original amount without querying the provider. A
//! stored payment account is identified by the provider's bare account id and
//! never goes through this codec.

use std::fmt;

use serde::{Serialize, Serializer};

use crate::error::GatewayError;

/// Separator between the transaction id and the amount.
pub const DELIMITER: char = '|';

/// Joins a transaction id and an amount into a token.
#[must_use]
pub fn encode(transaction_id: &str, amount: impl fmt::Display) -> String {
    format!("{transaction_id}{DELIMITER}{amount}")
}

/// Splits a token on its first delimiter.
///
/// Everything after the first delimiter is returned as the amount segment,
/// unvalidated. A token without a delimiter has an empty amount segment.
#[must_use]
pub fn decode(token: &str) -> (&str, &str) {
    token.split_once(DELIMITER).unwrap_or((token, ""))
}

/// A decoded transaction token.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TransactionReference {
    /// Provider transaction id.
    pub transaction_id: String,
    /// Amount segment, exactly as it was encoded.
    pub amount: String,
}

impl TransactionReference {
    /// Creates a reference from its parts.
    #[must_use]
    pub fn new(transaction_id: impl Into<String>, amount: impl fmt::Display) -> Self {
        Self {
            transaction_id: transaction_id.into(),
            amount: amount.to_string(),
        }
    }

    /// Decodes a token.
    #[must_use]
    pub fn parse(token: &str) -> Self {
        let (transaction_id, amount) = decode(token);
        Self::new(transaction_id, amount)
    }

    /// Parses the amount segment as minor units.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::InvalidAuthorization`] if the segment is not a
    /// non-negative integer.
    pub fn amount_minor(&self) -> Result<u64, GatewayError> {
        self.amount.trim().parse().map_err(|_| {
            GatewayError::InvalidAuthorization(format!(
                "amount segment {:?} is not an integer amount in minor units",
                self.amount
            ))
        })
    }
}

impl fmt::Display for TransactionReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&encode(&self.transaction_id, &self.amount))
    }
}

/// The follow-up reference returned with a [`Response`](crate::response::Response).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Authorization {
    /// A single transaction and the amount it was created with.
    Transaction(TransactionReference),
    /// A durable stored payment account.
    PaymentAccount(String),
}

impl Authorization {
    /// The transaction reference, if this is a transaction token.
    #[must_use]
    pub const fn transaction(&self) -> Option<&TransactionReference> {
        match self {
            Self::Transaction(reference) => Some(reference),
            Self::PaymentAccount(_) => None,
        }
    }

    /// The payment account id, if this is a stored account.
    #[must_use]
    pub fn payment_account_id(&self) -> Option<&str> {
        match self {
            Self::PaymentAccount(id) => Some(id),
            Self::Transaction(_) => None,
        }
    }
}

impl fmt::Display for Authorization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Transaction(reference) => fmt::Display::fmt(reference, f),
            Self::PaymentAccount(id) => f.write_str(id),
        }
    }
}

impl Serialize for Authorization {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
