//! Tests for admin login and session-gated management endpoints.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use matric::{
    controller::{admin::admin_login, candidate::get_candidates},
    data::admin::AdminUserRepository,
    error::{auth::AuthError, Error},
    model::{api::AdminLoginDto, app::AppState, session::admin::SessionAdminId},
};
use matric_test_utils::prelude::*;

/// Expect login with valid credentials to establish an admin session
#[tokio::test]
async fn login_succeeds_with_valid_credentials() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::AdminUser, entity::prelude::AdminLog)?;

    let password_hash = bcrypt::hash("hunter2", 4).unwrap();
    let admin = AdminUserRepository::new(&test.state.db)
        .create("headmaster", &password_hash, "admin")
        .await?;

    let result = admin_login(
        State(test.state::<AppState>()),
        test.session.clone(),
        Json(AdminLoginDto {
            username: "headmaster".to_string(),
            password: "hunter2".to_string(),
        }),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let in_session = SessionAdminId::get(&test.session).await?;
    assert_eq!(in_session, Some(admin.id));

    Ok(())
}

/// Expect login with a wrong password to be rejected
#[tokio::test]
async fn login_fails_with_wrong_password() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::AdminUser, entity::prelude::AdminLog)?;

    let password_hash = bcrypt::hash("hunter2", 4).unwrap();
    AdminUserRepository::new(&test.state.db)
        .create("headmaster", &password_hash, "admin")
        .await?;

    let result = admin_login(
        State(test.state::<AppState>()),
        test.session.clone(),
        Json(AdminLoginDto {
            username: "headmaster".to_string(),
            password: "wrong".to_string(),
        }),
    )
    .await;

    assert!(matches!(
        result,
        Err(Error::AuthError(AuthError::InvalidAdminCredentials))
    ));

    Ok(())
}

/// Expect management endpoints to reject requests without an admin session
#[tokio::test]
async fn management_requires_admin_session() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::AdminUser, entity::prelude::Candidate)?;

    let result = get_candidates(State(test.state::<AppState>()), test.session.clone()).await;

    assert!(matches!(
        result,
        Err(Error::AuthError(AuthError::AdminNotInSession))
    ));

    Ok(())
}

/// Expect management endpoints to answer once an admin session exists
#[tokio::test]
async fn management_succeeds_with_admin_session() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::AdminUser, entity::prelude::Candidate)?;

    let password_hash = bcrypt::hash("hunter2", 4).unwrap();
    let admin = AdminUserRepository::new(&test.state.db)
        .create("headmaster", &password_hash, "admin")
        .await?;
    SessionAdminId::insert(&test.session, admin.id).await?;

    let result = get_candidates(State(test.state::<AppState>()), test.session.clone()).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Expect a stale session pointing at a deleted admin to be rejected and
/// cleared
#[tokio::test]
async fn management_rejects_stale_admin_session() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::AdminUser, entity::prelude::Candidate)?;

    SessionAdminId::insert(&test.session, 42).await?;

    let result = get_candidates(State(test.state::<AppState>()), test.session.clone()).await;

    assert!(matches!(
        result,
        Err(Error::AuthError(AuthError::AdminNotInDatabase(42)))
    ));

    let in_session = SessionAdminId::get(&test.session).await?;
    assert!(in_session.is_none());

    Ok(())
}
