use crate::error::config::ConfigError;

pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub application_fee: f64,
    pub hubtel_api_id: String,
    pub hubtel_api_key: String,
    pub hubtel_merchant_account: String,
    pub hubtel_callback_url: String,
    pub hubtel_return_url: String,
    pub hubtel_cancellation_url: String,
    pub sms_client_id: String,
    pub sms_client_secret: String,
    pub sms_sender: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            database_url: require("DATABASE_URL")?,
            port: parse(require("PORT")?, "PORT")?,
            application_fee: parse(require("APPLICATION_FEE")?, "APPLICATION_FEE")?,
            hubtel_api_id: require("HUBTEL_API_ID")?,
            hubtel_api_key: require("HUBTEL_API_KEY")?,
            hubtel_merchant_account: require("HUBTEL_MERCHANT_ACCOUNT")?,
            hubtel_callback_url: require("HUBTEL_CALLBACK_URL")?,
            hubtel_return_url: require("HUBTEL_RETURN_URL")?,
            hubtel_cancellation_url: require("HUBTEL_CANCELLATION_URL")?,
            sms_client_id: require("SMS_CLIENT_ID")?,
            sms_client_secret: require("SMS_CLIENT_SECRET")?,
            sms_sender: require("SMS_SENDER")?,
        })
    }
}

fn require(key: &str) -> Result<String, ConfigError> {
    std::env::var(key).map_err(|_| ConfigError::MissingEnvVar(key.to_string()))
}

fn parse<T: std::str::FromStr>(value: String, var: &str) -> Result<T, ConfigError> {
    value.parse().map_err(|_| ConfigError::InvalidEnvValue {
        var: var.to_string(),
        reason: format!("could not parse {:?}", value),
    })
}
