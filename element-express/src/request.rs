//! SOAP request construction.
//!
//! [`build`] renders one envelope per [`Action`]. Which blocks an action
//! carries is decided by [`Blocks::for_action`]. The payment method is
//! rendered in a single place that dispatches on [`PaymentMethod`].

use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};

use crate::action::Action;
use crate::config::Credentials;
use crate::error::GatewayError;
use crate::format::{amount, random_reference, reference_number, title_case, two_digits};
use crate::options::{Address, DEFAULT_MARKET_CODE, Lodging, TerminalOptions, TransactionOptions};
use crate::payment::{BankAccount, Card, NetworkTokenCard, PaymentMethod};

/// `xmlns:xsi` of the envelope.
pub const XSI_NAMESPACE: &str = "http://www.w3.org/2001/XMLSchema-instance";
/// `xmlns:xsd` of the envelope.
pub const XSD_NAMESPACE: &str = "http://www.w3.org/2001/XMLSchema";
/// `xmlns:soap` of the envelope.
pub const SOAP_NAMESPACE: &str = "http://schemas.xmlsoap.org/soap/envelope/";

/// Moto ECI code sent with every terminal block.
pub const MOTO_ECI_CODE: &str = "NonAuthenticatedSecureECommerceTransaction";

/// Reversal type sent with a void.
pub const FULL_REVERSAL: &str = "Full";

/// Operation-specific values of the `transaction` block.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TransactionFields<'a> {
    /// Amount in minor units, rendered as `TransactionAmount`.
    pub amount: Option<u64>,
    /// Prior transaction being followed up.
    pub transaction_id: Option<&'a str>,
    /// `ReversalType`, voids only.
    pub reversal_type: Option<&'static str>,
}

impl<'a> TransactionFields<'a> {
    /// Fields of an operation that carries only an amount.
    #[must_use]
    pub const fn amount(minor: u64) -> Self {
        Self {
            amount: Some(minor),
            transaction_id: None,
            reversal_type: None,
        }
    }

    /// Fields of a follow-up on `transaction_id`.
    #[must_use]
    pub const fn follow_up(minor: u64, transaction_id: &'a str) -> Self {
        Self {
            amount: Some(minor),
            transaction_id: Some(transaction_id),
            reversal_type: None,
        }
    }

    /// Fields of a full reversal of `transaction_id`.
    #[must_use]
    pub const fn reversal(minor: u64, transaction_id: &'a str) -> Self {
        Self {
            amount: Some(minor),
            transaction_id: Some(transaction_id),
            reversal_type: Some(FULL_REVERSAL),
        }
    }
}

/// Everything a request is built from besides the credentials.
#[derive(Debug, Clone, Copy)]
pub struct RequestParts<'a> {
    /// Payment method, for actions that carry one.
    pub payment: Option<&'a PaymentMethod>,
    /// Operation-specific transaction values.
    pub transaction: TransactionFields<'a>,
    /// Caller options.
    pub options: &'a TransactionOptions,
}

/// The blocks emitted for an action, in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Blocks {
    /// Payment-method sub-document.
    pub payment: bool,
    /// `paymentAccount`.
    pub payment_account: bool,
    /// `transaction`.
    pub transaction: bool,
    /// `terminal`.
    pub terminal: bool,
    /// Billing and shipping `address`.
    pub address: bool,
    /// Lodging extended parameter.
    pub lodging: bool,
}

impl Blocks {
    /// Block layout of `action`.
    #[must_use]
    pub const fn for_action(action: Action) -> Self {
        let (payment, payment_account, transaction, terminal, address, lodging) = match action {
            Action::CreditCardSale | Action::CheckSale | Action::CreditCardAuthorization => {
                (true, false, true, true, true, true)
            }
            Action::CreditCardAuthorizationCompletion
            | Action::CreditCardReturn
            | Action::CreditCardReversal => (false, false, true, true, false, false),
            Action::CreditCardCredit => (true, false, true, true, false, false),
            Action::CreditCardAvsOnly => (true, false, true, true, true, false),
            Action::PaymentAccountCreate => (true, true, false, false, true, false),
        };
        Self {
            payment,
            payment_account,
            transaction,
            terminal,
            address,
            lodging,
        }
    }
}

/// Renders the SOAP envelope for `action`.
///
/// # Errors
///
/// Returns [`GatewayError::Encode`] if the XML writer fails.
pub fn build(
    action: Action,
    credentials: &Credentials,
    parts: &RequestParts<'_>,
) -> Result<String, GatewayError> {
    let blocks = Blocks::for_action(action);
    let options = parts.options;
    let mut xml = SoapWriter::new();

    xml.declaration()?;
    xml.open_with(
        "soap:Envelope",
        &[
            ("xmlns:xsi", XSI_NAMESPACE),
            ("xmlns:xsd", XSD_NAMESPACE),
            ("xmlns:soap", SOAP_NAMESPACE),
        ],
    )?;
    xml.open("soap:Body")?;
    xml.open_with(action.name(), &[("xmlns", action.interface().namespace())])?;

    write_credentials(&mut xml, credentials)?;
    if blocks.payment
        && let Some(payment) = parts.payment
    {
        write_payment_method(&mut xml, payment)?;
        if blocks.payment_account {
            write_payment_account(&mut xml, payment, options)?;
        }
    }
    if blocks.transaction {
        write_transaction(&mut xml, &parts.transaction, options)?;
    }
    if blocks.terminal {
        write_terminal(&mut xml, &options.terminal)?;
    }
    if blocks.address {
        write_addresses(&mut xml, options)?;
    }
    if blocks.lodging
        && let Some(lodging) = &options.lodging
    {
        write_lodging(&mut xml, lodging)?;
    }

    xml.close(action.name())?;
    xml.close("soap:Body")?;
    xml.close("soap:Envelope")?;
    xml.finish()
}

fn write_credentials(xml: &mut SoapWriter, credentials: &Credentials) -> Result<(), GatewayError> {
    xml.open("credentials")?;
    xml.leaf("AccountID", &credentials.account_id)?;
    xml.leaf("AccountToken", &credentials.account_token)?;
    xml.leaf("AcceptorID", &credentials.acceptor_id)?;
    xml.close("credentials")?;

    xml.open("application")?;
    xml.leaf("ApplicationID", &credentials.application_id)?;
    xml.leaf("ApplicationName", &credentials.application_name)?;
    xml.leaf("ApplicationVersion", &credentials.application_version)?;
    xml.close("application")
}

/// Writes the sub-document for `payment`.
fn write_payment_method(xml: &mut SoapWriter, payment: &PaymentMethod) -> Result<(), GatewayError> {
    match payment {
        PaymentMethod::StoredAccount(id) => write_payment_account_id(xml, id),
        PaymentMethod::BankAccount(account) => write_bank_account(xml, account),
        PaymentMethod::Card(card) => write_card(xml, card),
        PaymentMethod::NetworkToken(card) => write_network_token(xml, card),
    }
}

fn write_payment_account_id(xml: &mut SoapWriter, id: &str) -> Result<(), GatewayError> {
    xml.extended_parameter("PaymentAccount", |xml| xml.leaf("PaymentAccountID", id))
}

fn write_bank_account(xml: &mut SoapWriter, account: &BankAccount) -> Result<(), GatewayError> {
    xml.open("demandDepositAccount")?;
    xml.leaf("AccountNumber", &account.account_number)?;
    xml.leaf("RoutingNumber", &account.routing_number)?;
    xml.leaf("DDAAccountType", &title_case(&account.account_type))?;
    xml.close("demandDepositAccount")
}

fn write_card(xml: &mut SoapWriter, card: &Card) -> Result<(), GatewayError> {
    xml.open("card")?;
    xml.leaf("CardNumber", &card.number)?;
    xml.leaf("ExpirationMonth", &two_digits(card.month))?;
    xml.leaf("ExpirationYear", &two_digits(card.year))?;
    xml.leaf("CardholderName", &card.name())?;
    xml.leaf("CVV", &card.verification_value)?;
    xml.close("card")
}

fn write_network_token(xml: &mut SoapWriter, card: &NetworkTokenCard) -> Result<(), GatewayError> {
    xml.open("card")?;
    xml.leaf("CardNumber", &card.number)?;
    xml.leaf("ExpirationMonth", &two_digits(card.month))?;
    xml.leaf("ExpirationYear", &two_digits(card.year))?;
    xml.leaf("CardholderName", &card.name())?;
    xml.leaf("Cryptogram", &card.cryptogram)?;
    xml.optional(
        "ElectronicCommerceIndicator",
        card.eci.as_deref().filter(|eci| !eci.is_empty()),
    )?;
    xml.leaf("WalletType", card.source.wallet_type())?;
    xml.close("card")
}

fn write_payment_account(
    xml: &mut SoapWriter,
    payment: &PaymentMethod,
    options: &TransactionOptions,
) -> Result<(), GatewayError> {
    let reference = options
        .payment_account_reference_number
        .clone()
        .filter(|value| !value.is_empty())
        .unwrap_or_else(random_reference);

    xml.open("paymentAccount")?;
    xml.leaf("PaymentAccountType", payment.payment_account_type())?;
    xml.leaf("PaymentAccountReferenceNumber", &reference)?;
    xml.close("paymentAccount")
}

fn write_transaction(
    xml: &mut SoapWriter,
    fields: &TransactionFields<'_>,
    options: &TransactionOptions,
) -> Result<(), GatewayError> {
    xml.open("transaction")?;
    xml.optional("ReversalType", fields.reversal_type)?;
    xml.optional("TransactionID", fields.transaction_id)?;
    xml.optional("TransactionAmount", fields.amount.map(amount).as_deref())?;
    if fields.amount.is_some() || options.market_code.is_some() {
        xml.leaf(
            "MarketCode",
            options.market_code.as_deref().unwrap_or(DEFAULT_MARKET_CODE),
        )?;
    }
    xml.leaf(
        "ReferenceNumber",
        &reference_number(options.order_id.as_deref()),
    )?;
    xml.optional("TicketNumber", options.ticket_number.as_deref())?;
    xml.optional(
        "MerchantSuppliedTransactionId",
        options.merchant_supplied_transaction_id.as_deref(),
    )?;
    xml.optional("PaymentType", options.payment_type.as_deref())?;
    xml.optional("SubmissionType", options.submission_type.as_deref())?;
    xml.optional(
        "DuplicateCheckDisableFlag",
        options.duplicate_check_disable_flag.map(flag),
    )?;
    xml.optional(
        "DuplicateOverrideFlag",
        options.duplicate_override_flag.map(flag),
    )?;
    xml.optional("MerchantDescriptor", options.merchant_descriptor.as_deref())?;
    xml.close("transaction")
}

const fn flag(value: bool) -> &'static str {
    if value { "True" } else { "False" }
}

fn write_terminal(xml: &mut SoapWriter, terminal: &TerminalOptions) -> Result<(), GatewayError> {
    xml.open("terminal")?;
    xml.leaf("TerminalID", &terminal.terminal_id)?;
    xml.optional("TerminalType", terminal.terminal_type.as_deref())?;
    xml.leaf("CardPresentCode", &terminal.card_present_code)?;
    xml.leaf("CardholderPresentCode", &terminal.cardholder_present_code)?;
    xml.leaf("CardInputCode", &terminal.card_input_code)?;
    xml.leaf("CVVPresenceCode", &terminal.cvv_presence_code)?;
    xml.leaf("TerminalCapabilityCode", &terminal.terminal_capability_code)?;
    xml.leaf("TerminalEnvironmentCode", &terminal.terminal_environment_code)?;
    xml.leaf("MotoECICode", MOTO_ECI_CODE)?;
    xml.optional("PartialApprovedFlag", terminal.partial_approved_flag.as_deref())?;
    xml.close("terminal")
}

fn write_addresses(xml: &mut SoapWriter, options: &TransactionOptions) -> Result<(), GatewayError> {
    if let Some(billing) = options.billing() {
        let billing = Address {
            email: billing.email.clone().or_else(|| options.email.clone()),
            ..billing.clone()
        };
        write_address(xml, "Billing", &billing)?;
    }
    if let Some(shipping) = &options.shipping_address {
        write_address(xml, "Shipping", shipping)?;
    }
    Ok(())
}

/// Writes an `address` block with `prefix`ed field names. Nothing is written
/// for an address without any populated field.
fn write_address(xml: &mut SoapWriter, prefix: &str, address: &Address) -> Result<(), GatewayError> {
    if address.is_empty() {
        return Ok(());
    }
    let fields = [
        ("Address1", &address.address1),
        ("Address2", &address.address2),
        ("City", &address.city),
        ("State", &address.state),
        ("Zipcode", &address.zip),
        ("Email", &address.email),
        ("Phone", &address.phone_number),
    ];

    xml.open("address")?;
    for (name, value) in fields {
        xml.optional(&format!("{prefix}{name}"), value.as_deref())?;
    }
    xml.close("address")
}

fn write_lodging(xml: &mut SoapWriter, lodging: &Lodging) -> Result<(), GatewayError> {
    let fields = [
        ("LodgingAgreementNumber", &lodging.agreement_number),
        ("LodgingCheckInDate", &lodging.check_in_date),
        ("LodgingCheckOutDate", &lodging.check_out_date),
        ("LodgingRoomAmount", &lodging.room_amount),
        ("LodgingRoomTax", &lodging.room_tax),
        ("LodgingNoShowIndicator", &lodging.no_show_indicator),
        ("LodgingDuration", &lodging.duration),
        ("LodgingCustomerName", &lodging.customer_name),
        ("LodgingClientCode", &lodging.client_code),
        ("LodgingExtraChargesDetail", &lodging.extra_charges_detail),
        ("LodgingExtraChargesAmounts", &lodging.extra_charges_amounts),
        ("LodgingPrestigiousPropertyCode", &lodging.prestigious_property_code),
        ("LodgingSpecialProgramCode", &lodging.special_program_code),
        ("LodgingChargeType", &lodging.charge_type),
    ];

    xml.extended_parameter("Lodging", |xml| {
        for (name, value) in fields {
            xml.optional(name, value.as_deref())?;
        }
        Ok(())
    })
}

/// Thin wrapper over [`quick_xml::Writer`] with element-level helpers.
struct SoapWriter {
    writer: Writer<Vec<u8>>,
}

impl SoapWriter {
    fn new() -> Self {
        Self {
            writer: Writer::new(Vec::new()),
        }
    }

    fn write(&mut self, event: Event<'_>) -> Result<(), GatewayError> {
        self.writer
            .write_event(event)
            .map_err(|e| GatewayError::Encode(e.to_string()))
    }

    fn declaration(&mut self) -> Result<(), GatewayError> {
        self.write(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
    }

    fn open(&mut self, name: &str) -> Result<(), GatewayError> {
        self.write(Event::Start(BytesStart::new(name)))
    }

    fn open_with(&mut self, name: &str, attributes: &[(&str, &str)]) -> Result<(), GatewayError> {
        let start = BytesStart::new(name).with_attributes(attributes.iter().copied());
        self.write(Event::Start(start))
    }

    fn close(&mut self, name: &str) -> Result<(), GatewayError> {
        self.write(Event::End(BytesEnd::new(name)))
    }

    /// Writes `<name>value</name>`, escaping `value`.
    fn leaf(&mut self, name: &str, value: &str) -> Result<(), GatewayError> {
        self.open(name)?;
        self.write(Event::Text(BytesText::new(value)))?;
        self.close(name)
    }

    /// Writes a leaf only when `value` is present.
    fn optional(&mut self, name: &str, value: Option<&str>) -> Result<(), GatewayError> {
        match value {
            Some(value) => self.leaf(name, value),
            None => Ok(()),
        }
    }

    /// Writes an `extendedParameters` block whose typed `Value` is filled by
    /// `body`.
    fn extended_parameter<F>(&mut self, key: &str, body: F) -> Result<(), GatewayError>
    where
        F: FnOnce(&mut Self) -> Result<(), GatewayError>,
    {
        self.open("extendedParameters")?;
        self.open("ExtendedParameters")?;
        self.leaf("Key", key)?;
        self.open_with("Value", &[("xsi:type", key)])?;
        body(self)?;
        self.close("Value")?;
        self.close("ExtendedParameters")?;
        self.close("extendedParameters")
    }

    fn finish(self) -> Result<String, GatewayError> {
        String::from_utf8(self.writer.into_inner()).map_err(|e| GatewayError::Encode(e.to_string()))
    }
}
