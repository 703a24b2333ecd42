//! Shared test data: provider replies and request transcripts.

use crate::config::Credentials;

pub fn credentials() -> Credentials {
    Credentials {
        account_id: "1013963".to_owned(),
        account_token: "683EED8A1A83F5F5C1CFF07A40A6E0C6CB3C26D8D4DB5734D1E6BB6B6C7B6E1B9DAE8F01".to_owned(),
        acceptor_id: "3928907".to_owned(),
        application_id: "5211".to_owned(),
        application_name: "Spreedly".to_owned(),
        application_version: "1".to_owned(),
    }
}

pub const SUCCESSFUL_AUTHORIZE_REPLY: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<soap:Envelope xmlns:soap="http://schemas.xmlsoap.org/soap/envelope/" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance" xmlns:xsd="http://www.w3.org/2001/XMLSchema">
  <soap:Body>
    <CreditCardAuthorizationResponse xmlns="https://transaction.elementexpress.com">
      <response>
        <ExpressResponseCode>0</ExpressResponseCode>
        <ExpressResponseMessage>Approved</ExpressResponseMessage>
        <HostResponseCode>000</HostResponseCode>
        <HostResponseMessage>AP</HostResponseMessage>
        <ExpressTransactionDate>20151202</ExpressTransactionDate>
        <ExpressTransactionTime>090320</ExpressTransactionTime>
        <ExpressTransactionTimezone>UTC-06:00:00</ExpressTransactionTimezone>
        <Batch>
          <HostBatchID>1</HostBatchID>
        </Batch>
        <Card>
          <AVSResponseCode>N</AVSResponseCode>
          <CVVResponseCode>M</CVVResponseCode>
          <ExpirationMonth>09</ExpirationMonth>
          <ExpirationYear>16</ExpirationYear>
          <CardLogo>Visa</CardLogo>
          <CardNumberMasked>xxxx-xxxx-xxxx-4000</CardNumberMasked>
        </Card>
        <Transaction>
          <TransactionID>2005831886</TransactionID>
          <ApprovalNumber>000045</ApprovalNumber>
          <ReferenceNumber>7f0c2a1f9d4e6b3a8c5d</ReferenceNumber>
          <AcquirerData>aVb001234567810425c0425d5e00</AcquirerData>
          <ProcessorName>NULL_PROCESSOR_TEST</ProcessorName>
          <TransactionStatus>Authorized</TransactionStatus>
          <TransactionStatusCode>5</TransactionStatusCode>
          <ApprovedAmount>1.00</ApprovedAmount>
        </Transaction>
        <PaymentAccount>
          <PaymentAccountReferenceNumber>1</PaymentAccountReferenceNumber>
        </PaymentAccount>
        <Address>
          <BillingAddress1>456 My Street</BillingAddress1>
          <BillingZipcode>K1C2N6</BillingZipcode>
        </Address>
      </response>
    </CreditCardAuthorizationResponse>
  </soap:Body>
</soap:Envelope>"#;

pub const FAILED_PURCHASE_REPLY: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<soap:Envelope xmlns:soap="http://schemas.xmlsoap.org/soap/envelope/">
  <soap:Body>
    <CreditCardSaleResponse xmlns="https://transaction.elementexpress.com">
      <response>
        <ExpressResponseCode>20</ExpressResponseCode>
        <ExpressResponseMessage>Declined</ExpressResponseMessage>
        <HostResponseCode>007</HostResponseCode>
        <HostResponseMessage>DECLINED</HostResponseMessage>
        <Card>
          <AVSResponseCode>N</AVSResponseCode>
          <CVVResponseCode>M</CVVResponseCode>
          <CardLogo>Visa</CardLogo>
        </Card>
        <Transaction>
          <TransactionID>2005831909</TransactionID>
          <TransactionStatus>Declined</TransactionStatus>
          <TransactionStatusCode>2</TransactionStatusCode>
        </Transaction>
      </response>
    </CreditCardSaleResponse>
  </soap:Body>
</soap:Envelope>"#;

pub const SUCCESSFUL_VOID_REPLY: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<soap:Envelope xmlns:soap="http://schemas.xmlsoap.org/soap/envelope/">
  <soap:Body>
    <CreditCardReversalResponse xmlns="https://transaction.elementexpress.com">
      <response>
        <ExpressResponseCode>0</ExpressResponseCode>
        <ExpressResponseMessage>Success</ExpressResponseMessage>
        <HostResponseCode>006</HostResponseCode>
        <HostResponseMessage>REVERSED</HostResponseMessage>
        <Transaction>
          <TransactionID>2005832533</TransactionID>
          <TransactionStatus>Success</TransactionStatus>
          <TransactionStatusCode>8</TransactionStatusCode>
        </Transaction>
      </response>
    </CreditCardReversalResponse>
  </soap:Body>
</soap:Envelope>"#;

pub const SUCCESSFUL_STORE_REPLY: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<soap:Envelope xmlns:soap="http://schemas.xmlsoap.org/soap/envelope/">
  <soap:Body>
    <PaymentAccountCreateResponse xmlns="https://services.elementexpress.com">
      <response>
        <ExpressResponseCode>0</ExpressResponseCode>
        <ExpressResponseMessage>PaymentAccount created</ExpressResponseMessage>
        <ServicesID>C875D86C-5913-487D-822E-76B27E2C2A4E</ServicesID>
        <PaymentAccount>
          <PaymentAccountID>C875D86C-5913-487D-822E-76B27E2C2A4E</PaymentAccountID>
          <PaymentAccountReferenceNumber>1</PaymentAccountReferenceNumber>
        </PaymentAccount>
      </response>
    </PaymentAccountCreateResponse>
  </soap:Body>
</soap:Envelope>"#;

pub const CAPITALIZED_ROOT_REPLY: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<soap:Envelope xmlns:soap="http://schemas.xmlsoap.org/soap/envelope/">
  <soap:Body>
    <CheckSaleResponse xmlns="https://transaction.elementexpress.com">
      <Response>
        <ExpressResponseCode>0</ExpressResponseCode>
        <ExpressResponseMessage>Success</ExpressResponseMessage>
        <Transaction>
          <TransactionID>2005838412</TransactionID>
        </Transaction>
      </Response>
    </CheckSaleResponse>
  </soap:Body>
</soap:Envelope>"#;

pub const PRE_SCRUBBED_TRANSCRIPT: &str = r#"opening connection to certtransaction.elementexpress.com:443...
opened
starting SSL for certtransaction.elementexpress.com:443...
SSL established
<- "POST /express.asmx HTTP/1.1\r\nContent-Type: text/xml; charset=utf-8\r\nSoapaction: https://transaction.elementexpress.com/CreditCardSale\r\nHost: certtransaction.elementexpress.com\r\n\r\n"
<- "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<soap:Envelope xmlns:xsi=\"http://www.w3.org/2001/XMLSchema-instance\" xmlns:xsd=\"http://www.w3.org/2001/XMLSchema\" xmlns:soap=\"http://schemas.xmlsoap.org/soap/envelope/\"><soap:Body><CreditCardSale xmlns=\"https://transaction.elementexpress.com\"><credentials><AccountID>1013963</AccountID><AccountToken>683EED8A1A83F5F5C1CFF07A40A6E0C6CB3C26D8D4DB5734D1E6BB6B6C7B6E1B9DAE8F01</AccountToken><AcceptorID>3928907</AcceptorID></credentials><application><ApplicationID>5211</ApplicationID><ApplicationName>Spreedly</ApplicationName><ApplicationVersion>1</ApplicationVersion></application><card><CardNumber>4000100011112224</CardNumber><ExpirationMonth>09</ExpirationMonth><ExpirationYear>16</ExpirationYear><CardholderName>Longbob Longsen</CardholderName><CVV>123</CVV></card><transaction><TransactionAmount>1.00</TransactionAmount><MarketCode>Default</MarketCode><ReferenceNumber>1</ReferenceNumber></transaction><terminal><TerminalID>01</TerminalID><CVVPresenceCode>UseDefault</CVVPresenceCode></terminal></CreditCardSale></soap:Body></soap:Envelope>"
-> "HTTP/1.1 200 OK\r\n"
-> "Content-Type: text/xml; charset=utf-8\r\n"
-> "\r\n"
reading all...
-> "<?xml version=\"1.0\" encoding=\"utf-8\"?><soap:Envelope xmlns:soap=\"http://schemas.xmlsoap.org/soap/envelope/\"><soap:Body><CreditCardSaleResponse xmlns=\"https://transaction.elementexpress.com\"><response><ExpressResponseCode>0</ExpressResponseCode><ExpressResponseMessage>Approved</ExpressResponseMessage><Card><AVSResponseCode>N</AVSResponseCode><CVVResponseCode>M</CVVResponseCode><CardNumberMasked>xxxx-xxxx-xxxx-2224</CardNumberMasked></Card><Transaction><TransactionID>2005831886</TransactionID></Transaction><DemandDepositAccount><AccountNumber>1234567890</AccountNumber><RoutingNumber>490000018</RoutingNumber></DemandDepositAccount></response></CreditCardSaleResponse></soap:Body></soap:Envelope>"
read 1017 bytes
Conn close
"#;

pub const SCRUBBED_TRANSCRIPT: &str = r#"opening connection to certtransaction.elementexpress.com:443...
opened
starting SSL for certtransaction.elementexpress.com:443...
SSL established
<- "POST /express.asmx HTTP/1.1\r\nContent-Type: text/xml; charset=utf-8\r\nSoapaction: https://transaction.elementexpress.com/CreditCardSale\r\nHost: certtransaction.elementexpress.com\r\n\r\n"
<- "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<soap:Envelope xmlns:xsi=\"http://www.w3.org/2001/XMLSchema-instance\" xmlns:xsd=\"http://www.w3.org/2001/XMLSchema\" xmlns:soap=\"http://schemas.xmlsoap.org/soap/envelope/\"><soap:Body><CreditCardSale xmlns=\"https://transaction.elementexpress.com\"><credentials><AccountID>1013963</AccountID><AccountToken>[FILTERED]</AccountToken><AcceptorID>3928907</AcceptorID></credentials><application><ApplicationID>5211</ApplicationID><ApplicationName>Spreedly</ApplicationName><ApplicationVersion>1</ApplicationVersion></application><card><CardNumber>[FILTERED]</CardNumber><ExpirationMonth>09</ExpirationMonth><ExpirationYear>16</ExpirationYear><CardholderName>Longbob Longsen</CardholderName><CVV>[FILTERED]</CVV></card><transaction><TransactionAmount>1.00</TransactionAmount><MarketCode>Default</MarketCode><ReferenceNumber>1</ReferenceNumber></transaction><terminal><TerminalID>01</TerminalID><CVVPresenceCode>UseDefault</CVVPresenceCode></terminal></CreditCardSale></soap:Body></soap:Envelope>"
-> "HTTP/1.1 200 OK\r\n"
-> "Content-Type: text/xml; charset=utf-8\r\n"
-> "\r\n"
reading all...
-> "<?xml version=\"1.0\" encoding=\"utf-8\"?><soap:Envelope xmlns:soap=\"http://schemas.xmlsoap.org/soap/envelope/\"><soap:Body><CreditCardSaleResponse xmlns=\"https://transaction.elementexpress.com\"><response><ExpressResponseCode>0</ExpressResponseCode><ExpressResponseMessage>Approved</ExpressResponseMessage><Card><AVSResponseCode>N</AVSResponseCode><CVVResponseCode>M</CVVResponseCode><CardNumberMasked>xxxx-xxxx-xxxx-2224</CardNumberMasked></Card><Transaction><TransactionID>2005831886</TransactionID></Transaction><DemandDepositAccount><AccountNumber>[FILTERED]</AccountNumber><RoutingNumber>[FILTERED]</RoutingNumber></DemandDepositAccount></response></CreditCardSaleResponse></soap:Body></soap:Envelope>"
read 1017 bytes
Conn close
"#;
