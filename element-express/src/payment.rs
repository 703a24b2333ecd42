//! Payment method variants.
//!
//! Exactly one [`PaymentMethod`] is attached to an operation that carries
//! payment data. The request builder dispatches on the variant in a single
//! place to emit the matching sub-document.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::format::mask;

/// Payment account type sent for every non bank-account method.
pub const CREDIT_CARD_ACCOUNT_TYPE: &str = "CreditCard";

/// The payment instrument used by an operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaymentMethod {
    /// A payment account previously created with `store`.
    StoredAccount(String),
    /// A plain card.
    Card(Card),
    /// A bank account (eCheck).
    BankAccount(BankAccount),
    /// A network-tokenized card, typically from a wallet.
    NetworkToken(NetworkTokenCard),
}

impl PaymentMethod {
    /// Returns `true` for the bank account variant.
    #[must_use]
    pub const fn is_bank_account(&self) -> bool {
        matches!(self, Self::BankAccount(_))
    }

    /// The `PaymentAccountType` reported when storing this method.
    #[must_use]
    pub fn payment_account_type(&self) -> &str {
        match self {
            Self::BankAccount(account) => &account.account_type,
            _ => CREDIT_CARD_ACCOUNT_TYPE,
        }
    }
}

impl From<Card> for PaymentMethod {
    fn from(card: Card) -> Self {
        Self::Card(card)
    }
}

impl From<BankAccount> for PaymentMethod {
    fn from(account: BankAccount) -> Self {
        Self::BankAccount(account)
    }
}

impl From<NetworkTokenCard> for PaymentMethod {
    fn from(card: NetworkTokenCard) -> Self {
        Self::NetworkToken(card)
    }
}

/// Card details.
#[derive(Clone, PartialEq, Eq)]
pub struct Card {
    /// Primary account number.
    pub number: String,
    /// Expiration month (1-12).
    pub month: u32,
    /// Expiration year, two or four digits.
    pub year: u32,
    /// Cardholder first name.
    pub first_name: String,
    /// Cardholder last name.
    pub last_name: String,
    /// Card verification value.
    pub verification_value: String,
}

impl Card {
    /// Creates a card without cardholder names.
    #[must_use]
    pub fn new(
        number: impl Into<String>,
        month: u32,
        year: u32,
        verification_value: impl Into<String>,
    ) -> Self {
        Self {
            number: number.into(),
            month,
            year,
            first_name: String::new(),
            last_name: String::new(),
            verification_value: verification_value.into(),
        }
    }

    /// Sets the cardholder names.
    #[must_use]
    pub fn with_name(mut self, first: impl Into<String>, last: impl Into<String>) -> Self {
        self.first_name = first.into();
        self.last_name = last.into();
        self
    }

    /// The cardholder name as sent on the wire.
    #[must_use]
    pub fn name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Card")
            .field("number", &mask(&self.number))
            .field("month", &self.month)
            .field("year", &self.year)
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .finish_non_exhaustive()
    }
}

/// Bank account details for eCheck payments.
#[derive(Clone, PartialEq, Eq)]
pub struct BankAccount {
    /// Account number.
    pub account_number: String,
    /// Routing number.
    pub routing_number: String,
    /// Account type, e.g. `checking` or `savings`.
    pub account_type: String,
}

impl BankAccount {
    /// Creates a bank account.
    #[must_use]
    pub fn new(
        account_number: impl Into<String>,
        routing_number: impl Into<String>,
        account_type: impl Into<String>,
    ) -> Self {
        Self {
            account_number: account_number.into(),
            routing_number: routing_number.into(),
            account_type: account_type.into(),
        }
    }
}

impl fmt::Debug for BankAccount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BankAccount")
            .field("account_number", &mask(&self.account_number))
            .field("account_type", &self.account_type)
            .finish_non_exhaustive()
    }
}

/// Wallet that produced a network token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WalletSource {
    /// Apple Pay.
    ApplePay,
    /// Google Pay.
    GooglePay,
    /// Android Pay.
    AndroidPay,
    /// A network token not tied to a wallet.
    Network,
}

/// `WalletType` codes understood by the provider.
static WALLET_TYPES: &[(WalletSource, &str)] = &[
    (WalletSource::ApplePay, "2"),
    (WalletSource::GooglePay, "1"),
];

/// `WalletType` sent for sources missing from the table.
pub const DEFAULT_WALLET_TYPE: &str = "0";

impl WalletSource {
    /// The provider's `WalletType` code for this source.
    #[must_use]
    pub fn wallet_type(self) -> &'static str {
        WALLET_TYPES
            .iter()
            .find(|(source, _)| *source == self)
            .map_or(DEFAULT_WALLET_TYPE, |&(_, code)| code)
    }
}

/// Network-tokenized card details.
#[derive(Clone, PartialEq, Eq)]
pub struct NetworkTokenCard {
    /// Token PAN.
    pub number: String,
    /// Expiration month (1-12).
    pub month: u32,
    /// Expiration year, two or four digits.
    pub year: u32,
    /// Cardholder first name.
    pub first_name: String,
    /// Cardholder last name.
    pub last_name: String,
    /// Payment cryptogram.
    pub cryptogram: String,
    /// Electronic commerce indicator, when provided by the wallet.
    pub eci: Option<String>,
    /// Wallet that produced the token.
    pub source: WalletSource,
}

impl NetworkTokenCard {
    /// The cardholder name as sent on the wire.
    #[must_use]
    pub fn name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

impl fmt::Debug for NetworkTokenCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NetworkTokenCard")
            .field("number", &mask(&self.number))
            .field("month", &self.month)
            .field("year", &self.year)
            .field("eci", &self.eci)
            .field("source", &self.source)
            .finish_non_exhaustive()
    }
}
