//! Per-call transaction options.
//!
//! Every option the request builder understands is enumerated here with an
//! explicit default, so the builder never has to invent fallbacks of its own.
//! Options deserialize from any `serde` format with missing fields taking
//! their defaults.

use serde::{Deserialize, Serialize};

/// Sentinel asking the provider to apply its configured default.
pub const USE_DEFAULT: &str = "UseDefault";

/// Terminal identifier sent when the caller does not supply one.
pub const DEFAULT_TERMINAL_ID: &str = "01";

/// Market code sent with an amount when the caller does not supply one.
pub const DEFAULT_MARKET_CODE: &str = "Default";

/// Options shared by every transaction operation.
///
/// # Example
///
/// ```rust
/// use element_express::options::{Address, TransactionOptions};
///
/// let options = TransactionOptions::default()
///     .with_order_id("order-1001")
///     .with_billing_address(Address {
///         zip: Some("30329".into()),
///         ..Address::default()
///     });
/// assert_eq!(options.terminal.terminal_id, "01");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransactionOptions {
    /// Caller reference, sent as `ReferenceNumber` (truncated to 50 characters).
    pub order_id: Option<String>,
    /// `TicketNumber`.
    pub ticket_number: Option<String>,
    /// `MerchantSuppliedTransactionId`.
    pub merchant_supplied_transaction_id: Option<String>,
    /// `PaymentType`, e.g. `Recurring`.
    pub payment_type: Option<String>,
    /// `SubmissionType`.
    pub submission_type: Option<String>,
    /// `DuplicateCheckDisableFlag`.
    pub duplicate_check_disable_flag: Option<bool>,
    /// `DuplicateOverrideFlag`.
    pub duplicate_override_flag: Option<bool>,
    /// `MerchantDescriptor`.
    pub merchant_descriptor: Option<String>,
    /// `MarketCode`; [`DEFAULT_MARKET_CODE`] is used whenever an amount is sent.
    pub market_code: Option<String>,
    /// Fallback for the billing email.
    pub email: Option<String>,
    /// Billing address.
    pub billing_address: Option<Address>,
    /// Generic address, used as billing when `billing_address` is absent.
    pub address: Option<Address>,
    /// Shipping address.
    pub shipping_address: Option<Address>,
    /// Lodging extension data.
    pub lodging: Option<Lodging>,
    /// `PaymentAccountReferenceNumber` for `store`; random when absent.
    pub payment_account_reference_number: Option<String>,
    /// Terminal block settings.
    pub terminal: TerminalOptions,
}

impl TransactionOptions {
    /// Sets the caller reference.
    #[must_use]
    pub fn with_order_id(mut self, order_id: impl Into<String>) -> Self {
        self.order_id = Some(order_id.into());
        self
    }

    /// Sets the billing address.
    #[must_use]
    pub fn with_billing_address(mut self, address: Address) -> Self {
        self.billing_address = Some(address);
        self
    }

    /// Sets the shipping address.
    #[must_use]
    pub fn with_shipping_address(mut self, address: Address) -> Self {
        self.shipping_address = Some(address);
        self
    }

    /// Sets the fallback email.
    #[must_use]
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Sets the lodging extension.
    #[must_use]
    pub fn with_lodging(mut self, lodging: Lodging) -> Self {
        self.lodging = Some(lodging);
        self
    }

    /// Replaces the terminal settings.
    #[must_use]
    pub fn with_terminal(mut self, terminal: TerminalOptions) -> Self {
        self.terminal = terminal;
        self
    }

    /// The address used for the billing block.
    #[must_use]
    pub fn billing(&self) -> Option<&Address> {
        self.billing_address.as_ref().or(self.address.as_ref())
    }
}

/// Terminal block settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerminalOptions {
    /// `TerminalID`.
    pub terminal_id: String,
    /// `TerminalType`, omitted when absent.
    pub terminal_type: Option<String>,
    /// `CardPresentCode`.
    pub card_present_code: String,
    /// `CardholderPresentCode`.
    pub cardholder_present_code: String,
    /// `CardInputCode`.
    pub card_input_code: String,
    /// `CVVPresenceCode`.
    pub cvv_presence_code: String,
    /// `TerminalCapabilityCode`.
    pub terminal_capability_code: String,
    /// `TerminalEnvironmentCode`.
    pub terminal_environment_code: String,
    /// `PartialApprovedFlag`, omitted when absent.
    pub partial_approved_flag: Option<String>,
}

impl Default for TerminalOptions {
    fn default() -> Self {
        Self {
            terminal_id: DEFAULT_TERMINAL_ID.to_owned(),
            terminal_type: None,
            card_present_code: USE_DEFAULT.to_owned(),
            cardholder_present_code: USE_DEFAULT.to_owned(),
            card_input_code: USE_DEFAULT.to_owned(),
            cvv_presence_code: USE_DEFAULT.to_owned(),
            terminal_capability_code: USE_DEFAULT.to_owned(),
            terminal_environment_code: USE_DEFAULT.to_owned(),
            partial_approved_flag: None,
        }
    }
}

/// A postal address. Every field is optional; absent fields are not sent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Address {
    /// First address line.
    pub address1: Option<String>,
    /// Second address line.
    pub address2: Option<String>,
    /// City.
    pub city: Option<String>,
    /// State or province.
    pub state: Option<String>,
    /// Postal code.
    pub zip: Option<String>,
    /// Email address.
    pub email: Option<String>,
    /// Phone number.
    pub phone_number: Option<String>,
}

impl Address {
    /// Returns `true` when no field is populated.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.address1.is_none()
            && self.address2.is_none()
            && self.city.is_none()
            && self.state.is_none()
            && self.zip.is_none()
            && self.email.is_none()
            && self.phone_number.is_none()
    }
}

/// Lodging extension data.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Lodging {
    /// `LodgingAgreementNumber`.
    pub agreement_number: Option<String>,
    /// `LodgingCheckInDate`.
    pub check_in_date: Option<String>,
    /// `LodgingCheckOutDate`.
    pub check_out_date: Option<String>,
    /// `LodgingRoomAmount`.
    pub room_amount: Option<String>,
    /// `LodgingRoomTax`.
    pub room_tax: Option<String>,
    /// `LodgingNoShowIndicator`.
    pub no_show_indicator: Option<String>,
    /// `LodgingDuration`.
    pub duration: Option<String>,
    /// `LodgingCustomerName`.
    pub customer_name: Option<String>,
    /// `LodgingClientCode`.
    pub client_code: Option<String>,
    /// `LodgingExtraChargesDetail`.
    pub extra_charges_detail: Option<String>,
    /// `LodgingExtraChargesAmounts`.
    pub extra_charges_amounts: Option<String>,
    /// `LodgingPrestigiousPropertyCode`.
    pub prestigious_property_code: Option<String>,
    /// `LodgingSpecialProgramCode`.
    pub special_program_code: Option<String>,
    /// `LodgingChargeType`.
    pub charge_type: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_defaults() {
        let terminal = TerminalOptions::default();
        assert_eq!(terminal.terminal_id, DEFAULT_TERMINAL_ID);
        assert_eq!(terminal.card_input_code, USE_DEFAULT);
        assert_eq!(terminal.terminal_environment_code, USE_DEFAULT);
        assert!(terminal.terminal_type.is_none());
    }

    #[test]
    fn test_options_deserialize_with_defaults() {
        let options: TransactionOptions = serde_json::from_str(
            r#"{"order_id":"1","terminal":{"card_input_code":"ManualKeyed"}}"#,
        )
        .unwrap();
        assert_eq!(options.order_id.as_deref(), Some("1"));
        assert_eq!(options.terminal.card_input_code, "ManualKeyed");
        assert_eq!(options.terminal.cvv_presence_code, USE_DEFAULT);
        assert_eq!(options.terminal.terminal_id, DEFAULT_TERMINAL_ID);
    }

    #[test]
    fn test_billing_falls_back_to_generic_address() {
        let generic = Address {
            city: Some("Atlanta".into()),
            ..Address::default()
        };
        let options = TransactionOptions {
            address: Some(generic.clone()),
            ..TransactionOptions::default()
        };
        assert_eq!(options.billing(), Some(&generic));
    }

    #[test]
    fn test_address_is_empty() {
        assert!(Address::default().is_empty());
        let address = Address {
            zip: Some("30329".into()),
            ..Address::default()
        };
        assert!(!address.is_empty());
    }
}
