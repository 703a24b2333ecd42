//! Wire actions, provider interfaces and endpoint tables.
//!
//! Element Express exposes two logical interfaces: `transaction` for card and
//! check processing and `services` for payment-account management. Each has a
//! certification (test) and a production (live) endpoint.

use std::fmt;

use serde::{Deserialize, Serialize};

/// `Content-Type` of every request.
pub const CONTENT_TYPE: &str = "text/xml; charset=utf-8";

/// Name of the routing header.
pub const SOAP_ACTION_HEADER: &str = "SOAPAction";

/// A provider operation, named as it appears on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Card sale.
    CreditCardSale,
    /// Bank account (eCheck) sale.
    CheckSale,
    /// Card authorization.
    CreditCardAuthorization,
    /// Capture of a prior authorization.
    CreditCardAuthorizationCompletion,
    /// Refund of a prior transaction.
    CreditCardReturn,
    /// Stand-alone credit to a payment method.
    CreditCardCredit,
    /// Void (full reversal) of a prior transaction.
    CreditCardReversal,
    /// Zero-amount address verification.
    CreditCardAvsOnly,
    /// Creation of a stored payment account.
    PaymentAccountCreate,
}

impl Action {
    /// The element name used in the request body and `SOAPAction` header.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::CreditCardSale => "CreditCardSale",
            Self::CheckSale => "CheckSale",
            Self::CreditCardAuthorization => "CreditCardAuthorization",
            Self::CreditCardAuthorizationCompletion => "CreditCardAuthorizationCompletion",
            Self::CreditCardReturn => "CreditCardReturn",
            Self::CreditCardCredit => "CreditCardCredit",
            Self::CreditCardReversal => "CreditCardReversal",
            Self::CreditCardAvsOnly => "CreditCardAVSOnly",
            Self::PaymentAccountCreate => "PaymentAccountCreate",
        }
    }

    /// The interface that serves this action.
    #[must_use]
    pub const fn interface(self) -> Interface {
        match self {
            Self::PaymentAccountCreate => Interface::Services,
            _ => Interface::Transaction,
        }
    }

    /// Value of the `SOAPAction` header for this action.
    #[must_use]
    pub fn soap_action(self) -> String {
        format!("{}/{}", self.interface().namespace(), self.name())
    }

    /// Headers sent with a request for this action.
    #[must_use]
    pub fn headers(self) -> Vec<(&'static str, String)> {
        vec![
            ("Content-Type", CONTENT_TYPE.to_owned()),
            (SOAP_ACTION_HEADER, self.soap_action()),
        ]
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Logical provider endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Interface {
    /// Card and check processing.
    Transaction,
    /// Payment-account services.
    Services,
}

impl Interface {
    /// Interface name as used in host names.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Transaction => "transaction",
            Self::Services => "services",
        }
    }

    /// XML namespace of request elements served by this interface.
    #[must_use]
    pub const fn namespace(self) -> &'static str {
        match self {
            Self::Transaction => "https://transaction.elementexpress.com",
            Self::Services => "https://services.elementexpress.com",
        }
    }
}

/// Provider environment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Certification endpoints; results are flagged as test results.
    Test,
    /// Production endpoints.
    #[default]
    Live,
}

impl Environment {
    /// Returns `true` for [`Environment::Test`].
    #[must_use]
    pub const fn is_test(self) -> bool {
        matches!(self, Self::Test)
    }
}

/// Provider endpoint URLs keyed by interface and environment.
static ENDPOINTS: &[(Interface, Environment, &str)] = &[
    (
        Interface::Transaction,
        Environment::Test,
        "https://certtransaction.elementexpress.com/express.asmx",
    ),
    (
        Interface::Transaction,
        Environment::Live,
        "https://transaction.elementexpress.com/express.asmx",
    ),
    (
        Interface::Services,
        Environment::Test,
        "https://certservices.elementexpress.com/express.asmx",
    ),
    (
        Interface::Services,
        Environment::Live,
        "https://services.elementexpress.com/express.asmx",
    ),
];

/// Looks up the provider URL for an interface in an environment.
#[must_use]
pub fn endpoint(interface: Interface, environment: Environment) -> &'static str {
    ENDPOINTS
        .iter()
        .find(|(i, e, _)| *i == interface && *e == environment)
        .map_or("", |&(_, _, url)| url)
}

/// The pair of URLs a gateway posts to.
///
/// Normally derived from the [`Environment`]; can be configured explicitly to
/// point at a sandbox or a local mock.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Endpoints {
    /// URL of the `transaction` interface.
    pub transaction: String,
    /// URL of the `services` interface.
    pub services: String,
}

impl Endpoints {
    /// The provider URLs for an environment.
    #[must_use]
    pub fn for_environment(environment: Environment) -> Self {
        Self {
            transaction: endpoint(Interface::Transaction, environment).to_owned(),
            services: endpoint(Interface::Services, environment).to_owned(),
        }
    }

    /// Points both interfaces at the same base URL.
    #[must_use]
    pub fn uniform(url: impl Into<String>) -> Self {
        let url = url.into();
        Self {
            transaction: url.clone(),
            services: url,
        }
    }

    /// URL serving the given interface.
    #[must_use]
    pub fn url(&self, interface: Interface) -> &str {
        match interface {
            Interface::Transaction => &self.transaction,
            Interface::Services => &self.services,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_uses_services_interface() {
        assert_eq!(Action::PaymentAccountCreate.interface(), Interface::Services);
        assert_eq!(Action::CreditCardSale.interface(), Interface::Transaction);
        assert_eq!(Action::CreditCardReversal.interface(), Interface::Transaction);
    }

    #[test]
    fn test_soap_action_header() {
        assert_eq!(
            Action::CreditCardAvsOnly.soap_action(),
            "https://transaction.elementexpress.com/CreditCardAVSOnly"
        );
        assert_eq!(
            Action::PaymentAccountCreate.soap_action(),
            "https://services.elementexpress.com/PaymentAccountCreate"
        );
    }

    #[test]
    fn test_headers() {
        let headers = Action::CheckSale.headers();
        assert_eq!(headers[0], ("Content-Type", CONTENT_TYPE.to_owned()));
        assert_eq!(
            headers[1],
            (
                SOAP_ACTION_HEADER,
                "https://transaction.elementexpress.com/CheckSale".to_owned()
            )
        );
    }

    #[test]
    fn test_endpoint_table() {
        let test = Endpoints::for_environment(Environment::Test);
        assert_eq!(
            test.url(Interface::Transaction),
            "https://certtransaction.elementexpress.com/express.asmx"
        );
        assert_eq!(
            test.url(Interface::Services),
            "https://certservices.elementexpress.com/express.asmx"
        );

        let live = Endpoints::for_environment(Environment::Live);
        assert_eq!(
            live.url(Interface::Transaction),
            "https://transaction.elementexpress.com/express.asmx"
        );
        assert_eq!(
            live.url(Interface::Services),
            "https://services.elementexpress.com/express.asmx"
        );
    }

    #[test]
    fn test_environment_deserialize() {
        let env: Environment = serde_json::from_str("\"test\"").unwrap();
        assert!(env.is_test());
        assert_eq!(Environment::default(), Environment::Live);
    }
}
