//! Outcome interpretation.
//!
//! A [`Response`] is the verdict for one operation. A provider decline is a
//! `Response` with `success() == false`, not an error.

use serde::Serialize;

use crate::authorization::{Authorization, TransactionReference};
use crate::reply::CanonicalReply;

/// `ExpressResponseCode` of an approved request.
pub const SUCCESS_CODE: &str = "0";

/// Interpreted result of a gateway operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Response {
    success: bool,
    message: Option<String>,
    params: CanonicalReply,
    authorization: Option<Authorization>,
    avs_result: Option<String>,
    cvv_result: Option<String>,
    test: bool,
    #[serde(skip)]
    raw_reply: String,
}

impl Response {
    /// Interprets the reply to a transaction action.
    ///
    /// `amount` is the amount the call was made with, carried into the
    /// authorization token.
    #[must_use]
    pub fn from_transaction(reply: CanonicalReply, amount: &str, test: bool, raw_reply: String) -> Self {
        let authorization = reply.branch("transaction").map(|transaction| {
            let id = transaction.get("transactionid").map_or("", String::as_str);
            Authorization::Transaction(TransactionReference::new(id, amount))
        });
        Self::interpret(reply, authorization, test, raw_reply)
    }

    /// Interprets the reply to a payment-account creation.
    #[must_use]
    pub fn from_payment_account(reply: CanonicalReply, test: bool, raw_reply: String) -> Self {
        let authorization = reply
            .branch_value("paymentaccount", "paymentaccountid")
            .map(|id| Authorization::PaymentAccount(id.to_owned()));
        Self::interpret(reply, authorization, test, raw_reply)
    }

    fn interpret(
        params: CanonicalReply,
        authorization: Option<Authorization>,
        test: bool,
        raw_reply: String,
    ) -> Self {
        let success = params.scalar("expressresponsecode") == Some(SUCCESS_CODE);
        let message = params.scalar("expressresponsemessage").map(str::to_owned);
        let (avs_result, cvv_result) = if success {
            (
                params.branch_value("card", "avsresponsecode").map(str::to_owned),
                params.branch_value("card", "cvvresponsecode").map(str::to_owned),
            )
        } else {
            (None, None)
        };

        Self {
            success,
            message,
            params,
            authorization,
            avs_result,
            cvv_result,
            test,
            raw_reply,
        }
    }

    /// Whether the provider approved the request.
    #[must_use]
    pub const fn success(&self) -> bool {
        self.success
    }

    /// Provider message, if any.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// The canonical reply mapping.
    #[must_use]
    pub const fn params(&self) -> &CanonicalReply {
        &self.params
    }

    /// Token for follow-up operations.
    #[must_use]
    pub const fn authorization(&self) -> Option<&Authorization> {
        self.authorization.as_ref()
    }

    /// Address verification code, on success only.
    #[must_use]
    pub fn avs_result(&self) -> Option<&str> {
        self.avs_result.as_deref()
    }

    /// Card verification code, on success only.
    #[must_use]
    pub fn cvv_result(&self) -> Option<&str> {
        self.cvv_result.as_deref()
    }

    /// Whether the result came from the certification environment.
    #[must_use]
    pub const fn test(&self) -> bool {
        self.test
    }

    /// The reply body exactly as received.
    #[must_use]
    pub fn raw_reply(&self) -> &str {
        &self.raw_reply
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{
        CAPITALIZED_ROOT_REPLY, FAILED_PURCHASE_REPLY, SUCCESSFUL_AUTHORIZE_REPLY,
        SUCCESSFUL_STORE_REPLY,
    };

    fn transaction(xml: &str, amount: &str) -> Response {
        Response::from_transaction(CanonicalReply::parse(xml).unwrap(), amount, true, xml.to_owned())
    }

    #[test]
    fn test_successful_reply() {
        let response = transaction(
            "<response><ExpressResponseCode>0</ExpressResponseCode>\
             <Card><AVSResponseCode>M</AVSResponseCode></Card></response>",
            "100",
        );
        assert!(response.success());
        assert_eq!(response.avs_result(), Some("M"));
        assert_eq!(response.cvv_result(), None);
        assert_eq!(response.message(), None);
        assert!(response.authorization().is_none());
    }

    #[test]
    fn test_authorize_reply() {
        let response = transaction(SUCCESSFUL_AUTHORIZE_REPLY, "100");
        assert!(response.success());
        assert!(response.test());
        assert_eq!(response.message(), Some("Approved"));
        assert_eq!(response.avs_result(), Some("N"));
        assert_eq!(response.cvv_result(), Some("M"));
        assert_eq!(
            response.authorization().map(ToString::to_string).as_deref(),
            Some("2005831886|100")
        );
        assert_eq!(response.raw_reply(), SUCCESSFUL_AUTHORIZE_REPLY);
    }

    #[test]
    fn test_failed_reply_skips_verification_results() {
        let response = transaction(FAILED_PURCHASE_REPLY, "100");
        assert!(!response.success());
        assert_eq!(response.message(), Some("Declined"));
        assert_eq!(response.avs_result(), None);
        assert_eq!(response.cvv_result(), None);
        assert_eq!(
            response.authorization().map(ToString::to_string).as_deref(),
            Some("2005831909|100")
        );
    }

    #[test]
    fn test_padded_response_code_is_not_success() {
        let response = transaction(
            "<response><ExpressResponseCode> 0 </ExpressResponseCode>\
             <ExpressResponseMessage>  Approved  </ExpressResponseMessage>\
             <Card><AVSResponseCode>M</AVSResponseCode></Card></response>",
            "100",
        );
        assert!(!response.success());
        assert_eq!(response.message(), Some("  Approved  "));
        assert_eq!(response.avs_result(), None);
    }

    #[test]
    fn test_capitalized_root() {
        let response = transaction(CAPITALIZED_ROOT_REPLY, "250");
        assert!(response.success());
        assert_eq!(
            response.authorization().map(ToString::to_string).as_deref(),
            Some("2005838412|250")
        );
    }

    #[test]
    fn test_transaction_branch_without_id() {
        let response = transaction(
            "<response><ExpressResponseCode>0</ExpressResponseCode>\
             <Transaction><TransactionStatus>Approved</TransactionStatus></Transaction></response>",
            "5",
        );
        assert_eq!(
            response.authorization().map(ToString::to_string).as_deref(),
            Some("|5")
        );
    }

    #[test]
    fn test_payment_account_reply() {
        let reply = CanonicalReply::parse(SUCCESSFUL_STORE_REPLY).unwrap();
        let response = Response::from_payment_account(reply, false, String::new());
        assert!(response.success());
        assert!(!response.test());
        assert_eq!(
            response.authorization(),
            Some(&Authorization::PaymentAccount(
                "C875D86C-5913-487D-822E-76B27E2C2A4E".to_owned()
            ))
        );
    }

    #[test]
    fn test_payment_account_missing() {
        let reply = CanonicalReply::parse(
            "<response><ExpressResponseCode>103</ExpressResponseCode></response>",
        )
        .unwrap();
        let response = Response::from_payment_account(reply, false, String::new());
        assert!(!response.success());
        assert!(response.authorization().is_none());
    }

    #[test]
    fn test_serialize() {
        let response = transaction(SUCCESSFUL_AUTHORIZE_REPLY, "100");
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["authorization"], "2005831886|100");
        assert_eq!(json["params"]["card"]["cvvresponsecode"], "M");
        assert!(json.get("raw_reply").is_none());
    }
}
