use tower_sessions::{cookie::SameSite, Expiry, MemoryStore, SessionManagerLayer};

use crate::{config::Config, error::Error, hubtel};

/// Build and configure the Hubtel client with the provided credentials
pub fn build_hubtel_client(config: &Config) -> Result<hubtel::Client, Error> {
    let hubtel_client = hubtel::Client::builder()
        .api_id(&config.hubtel_api_id)
        .api_key(&config.hubtel_api_key)
        .merchant_account(&config.hubtel_merchant_account)
        .callback_url(&config.hubtel_callback_url)
        .return_url(&config.hubtel_return_url)
        .cancellation_url(&config.hubtel_cancellation_url)
        .sms_client_id(&config.sms_client_id)
        .sms_client_secret(&config.sms_client_secret)
        .sms_sender(&config.sms_sender)
        .build()?;

    Ok(hubtel_client)
}

/// Connect to the database and run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, Error> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Configure in-process session management
pub fn session_layer() -> SessionManagerLayer<MemoryStore> {
    let session_store = MemoryStore::default();

    // Set secure based on build mode: in development (debug) use false, otherwise true.
    let development_mode = cfg!(debug_assertions);
    let secure_cookies = !development_mode;

    SessionManagerLayer::new(session_store)
        .with_secure(secure_cookies)
        .with_same_site(SameSite::Lax)
        .with_http_only(true)
        .with_expiry(Expiry::OnInactivity(tower_sessions::cookie::time::Duration::days(1)))
}
