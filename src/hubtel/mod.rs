//! Hubtel API client.
//!
//! Thin client over the three Hubtel surfaces this application uses: checkout
//! initiation, transaction status lookup, and SMS delivery. Base URLs are
//! configurable so tests can point the client at a mock server.

pub mod model;

use thiserror::Error;

use crate::hubtel::model::{
    Checkout, CheckoutRequest, CheckoutResponse, SmsResponse, StatusResponse, TransactionStatus,
};

#[derive(Error, Debug)]
pub enum HubtelError {
    #[error(transparent)]
    ReqwestError(#[from] reqwest::Error),
    #[error("Unexpected response from Hubtel: {0}")]
    UnexpectedResponse(String),
    #[error("SMS gateway rejected message with status {0}")]
    SmsRejected(i64),
    #[error("Missing required Hubtel client configuration: {0}")]
    MissingConfig(&'static str),
}

/// Client for Hubtel checkout, transaction status, and SMS endpoints.
#[derive(Clone)]
pub struct Client {
    http: reqwest::Client,
    checkout_url: String,
    status_url: String,
    sms_url: String,
    api_id: String,
    api_key: String,
    merchant_account: String,
    callback_url: String,
    return_url: String,
    cancellation_url: String,
    sms_client_id: String,
    sms_client_secret: String,
    sms_sender: String,
}

impl Client {
    pub fn builder() -> ClientBuilder {
        ClientBuilder::default()
    }

    /// Initiates a checkout for one payment attempt.
    ///
    /// Returns the checkout URL the applicant is redirected to and the
    /// provider's checkout handle for later correlation.
    pub async fn initiate_checkout(
        &self,
        amount: f64,
        description: &str,
        client_reference: &str,
    ) -> Result<Checkout, HubtelError> {
        let request = CheckoutRequest {
            total_amount: amount,
            description: description.to_string(),
            callback_url: self.callback_url.clone(),
            return_url: self.return_url.clone(),
            cancellation_url: self.cancellation_url.clone(),
            merchant_account_number: self.merchant_account.clone(),
            client_reference: client_reference.to_string(),
        };

        let response = self
            .http
            .post(&self.checkout_url)
            .basic_auth(&self.api_id, Some(&self.api_key))
            .json(&request)
            .send()
            .await?
            .error_for_status()?;

        let body: CheckoutResponse = response.json().await?;
        let data = body.data.ok_or_else(|| {
            HubtelError::UnexpectedResponse("checkout response carried no data".to_string())
        })?;

        Ok(Checkout {
            checkout_url: data.checkout_direct_url,
            checkout_id: data.checkout_id,
        })
    }

    /// Looks up the provider-side status of a payment attempt.
    pub async fn transaction_status(
        &self,
        client_reference: &str,
    ) -> Result<TransactionStatus, HubtelError> {
        let response = self
            .http
            .get(&self.status_url)
            .basic_auth(&self.api_id, Some(&self.api_key))
            .query(&[("clientReference", client_reference)])
            .send()
            .await?
            .error_for_status()?;

        let body: StatusResponse = response.json().await?;
        let data = body.data.ok_or_else(|| {
            HubtelError::UnexpectedResponse("status response carried no data".to_string())
        })?;

        Ok(match data.transaction_status.as_deref() {
            Some("Success") => TransactionStatus::Success,
            Some("Failed") => TransactionStatus::Failed,
            Some(other) => TransactionStatus::Other(other.to_string()),
            None => {
                return Err(HubtelError::UnexpectedResponse(
                    "status response carried no TransactionStatus".to_string(),
                ))
            }
        })
    }

    /// Sends one SMS message. The gateway reports delivery acceptance with a
    /// numeric status where 0 means success.
    pub async fn send_sms(&self, to: &str, content: &str) -> Result<(), HubtelError> {
        let response = self
            .http
            .get(&self.sms_url)
            .query(&[
                ("clientid", self.sms_client_id.as_str()),
                ("clientsecret", self.sms_client_secret.as_str()),
                ("from", self.sms_sender.as_str()),
                ("to", to),
                ("content", content),
            ])
            .send()
            .await?
            .error_for_status()?;

        let body: SmsResponse = response.json().await?;

        if body.status != 0 {
            return Err(HubtelError::SmsRejected(body.status));
        }

        Ok(())
    }
}

/// Builder for [`Client`]. Credentials and callback URLs are required; the
/// endpoint URLs default to the production Hubtel hosts.
#[derive(Default)]
pub struct ClientBuilder {
    checkout_url: Option<String>,
    status_url: Option<String>,
    sms_url: Option<String>,
    api_id: Option<String>,
    api_key: Option<String>,
    merchant_account: Option<String>,
    callback_url: Option<String>,
    return_url: Option<String>,
    cancellation_url: Option<String>,
    sms_client_id: Option<String>,
    sms_client_secret: Option<String>,
    sms_sender: Option<String>,
}

impl ClientBuilder {
    const DEFAULT_CHECKOUT_URL: &'static str = "https://payproxyapi.hubtel.com/items/initiate";
    const DEFAULT_STATUS_URL: &'static str =
        "https://api-txnstatus.hubtel.com/transactions/status";
    const DEFAULT_SMS_URL: &'static str = "https://smsc.hubtel.com/v1/messages/send";

    pub fn checkout_url(mut self, url: &str) -> Self {
        self.checkout_url = Some(url.to_string());
        self
    }

    pub fn status_url(mut self, url: &str) -> Self {
        self.status_url = Some(url.to_string());
        self
    }

    pub fn sms_url(mut self, url: &str) -> Self {
        self.sms_url = Some(url.to_string());
        self
    }

    pub fn api_id(mut self, api_id: &str) -> Self {
        self.api_id = Some(api_id.to_string());
        self
    }

    pub fn api_key(mut self, api_key: &str) -> Self {
        self.api_key = Some(api_key.to_string());
        self
    }

    pub fn merchant_account(mut self, merchant_account: &str) -> Self {
        self.merchant_account = Some(merchant_account.to_string());
        self
    }

    pub fn callback_url(mut self, url: &str) -> Self {
        self.callback_url = Some(url.to_string());
        self
    }

    pub fn return_url(mut self, url: &str) -> Self {
        self.return_url = Some(url.to_string());
        self
    }

    pub fn cancellation_url(mut self, url: &str) -> Self {
        self.cancellation_url = Some(url.to_string());
        self
    }

    pub fn sms_client_id(mut self, id: &str) -> Self {
        self.sms_client_id = Some(id.to_string());
        self
    }

    pub fn sms_client_secret(mut self, secret: &str) -> Self {
        self.sms_client_secret = Some(secret.to_string());
        self
    }

    pub fn sms_sender(mut self, sender: &str) -> Self {
        self.sms_sender = Some(sender.to_string());
        self
    }

    pub fn build(self) -> Result<Client, HubtelError> {
        Ok(Client {
            http: reqwest::Client::new(),
            checkout_url: self
                .checkout_url
                .unwrap_or_else(|| Self::DEFAULT_CHECKOUT_URL.to_string()),
            status_url: self
                .status_url
                .unwrap_or_else(|| Self::DEFAULT_STATUS_URL.to_string()),
            sms_url: self
                .sms_url
                .unwrap_or_else(|| Self::DEFAULT_SMS_URL.to_string()),
            api_id: self.api_id.ok_or(HubtelError::MissingConfig("api_id"))?,
            api_key: self.api_key.ok_or(HubtelError::MissingConfig("api_key"))?,
            merchant_account: self
                .merchant_account
                .ok_or(HubtelError::MissingConfig("merchant_account"))?,
            callback_url: self
                .callback_url
                .ok_or(HubtelError::MissingConfig("callback_url"))?,
            return_url: self
                .return_url
                .ok_or(HubtelError::MissingConfig("return_url"))?,
            cancellation_url: self
                .cancellation_url
                .ok_or(HubtelError::MissingConfig("cancellation_url"))?,
            sms_client_id: self
                .sms_client_id
                .ok_or(HubtelError::MissingConfig("sms_client_id"))?,
            sms_client_secret: self
                .sms_client_secret
                .ok_or(HubtelError::MissingConfig("sms_client_secret"))?,
            sms_sender: self
                .sms_sender
                .ok_or(HubtelError::MissingConfig("sms_sender"))?,
        })
    }
}
