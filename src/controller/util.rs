use tower_sessions::Session;

use crate::{
    data::admin::AdminUserRepository,
    error::{auth::AuthError, Error},
    model::{app::AppState, session::admin::SessionAdminId},
};

/// Resolves the admin user behind the current session, failing with a 401
/// when no admin is logged in.
pub async fn require_admin(
    state: &AppState,
    session: &Session,
) -> Result<entity::admin_user::Model, Error> {
    let Some(admin_id) = SessionAdminId::get(session).await? else {
        return Err(AuthError::AdminNotInSession.into());
    };

    let Some(admin) = AdminUserRepository::new(&state.db).get_by_id(admin_id).await? else {
        // Clear session for admin not found in database
        session.clear().await;

        tracing::warn!(
            "Failed to find admin ID {} in database despite having an active session;
            cleared session for admin, they will need to relog to fix",
            admin_id
        );

        return Err(AuthError::AdminNotInDatabase(admin_id).into());
    };

    Ok(admin)
}
