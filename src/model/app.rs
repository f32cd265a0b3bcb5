use sea_orm::DatabaseConnection;

use crate::{hubtel, model::rate_limit::StatusCheckLimiter};

/// Application fee in GHS used when no explicit amount is configured.
pub const DEFAULT_APPLICATION_FEE: f64 = 150.0;

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub hubtel: hubtel::Client,
    /// Process-scoped guard for payment status polling; created once at
    /// startup, never persisted.
    pub status_checks: StatusCheckLimiter,
    pub application_fee: f64,
}

impl From<(DatabaseConnection, hubtel::Client)> for AppState {
    fn from((db, hubtel): (DatabaseConnection, hubtel::Client)) -> Self {
        Self {
            db,
            hubtel,
            status_checks: StatusCheckLimiter::default(),
            application_fee: DEFAULT_APPLICATION_FEE,
        }
    }
}
