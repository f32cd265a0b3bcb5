use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    controller::util::require_admin,
    data::{admin::AdminUserRepository, log::AdminLogRepository},
    error::{auth::AuthError, Error},
    model::{
        api::{AdminLoginDto, AdminUserDto, CreateAdminUserDto, ErrorDto, MessageDto},
        app::AppState,
        session::admin::SessionAdminId,
    },
};

pub static ADMIN_TAG: &str = "admin";

const BCRYPT_COST: u32 = 10;

/// Log an admin in with username and password
#[utoipa::path(
    post,
    path = "/api/admin/login",
    tag = ADMIN_TAG,
    responses(
        (status = 200, description = "Success when username and password are valid", body = AdminUserDto),
        (status = 401, description = "Invalid username or password", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn admin_login(
    State(state): State<AppState>,
    session: Session,
    Json(dto): Json<AdminLoginDto>,
) -> Result<impl IntoResponse, Error> {
    let admin_repository = AdminUserRepository::new(&state.db);

    let Some(admin) = admin_repository.find_by_username(&dto.username).await? else {
        return Err(AuthError::InvalidAdminCredentials.into());
    };

    if !bcrypt::verify(&dto.password, &admin.password)? {
        return Err(AuthError::InvalidAdminCredentials.into());
    }

    SessionAdminId::insert(&session, admin.id).await?;

    AdminLogRepository::new(&state.db)
        .create(&admin.username, "Logged in")
        .await?;

    tracing::info!("Admin {} logged in", admin.username);

    Ok((StatusCode::OK, Json(AdminUserDto::from(admin))).into_response())
}

/// Log the current admin out
#[utoipa::path(
    get,
    path = "/api/admin/logout",
    tag = ADMIN_TAG,
    responses(
        (status = 200, description = "Success when session is cleared", body = MessageDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn admin_logout(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    if let Some(admin_id) = SessionAdminId::get(&session).await? {
        if let Some(admin) = AdminUserRepository::new(&state.db).get_by_id(admin_id).await? {
            AdminLogRepository::new(&state.db)
                .create(&admin.username, "Logged out")
                .await?;
        }
    }

    session.clear().await;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Logged out".to_string(),
        }),
    )
        .into_response())
}

/// Create a new admin user
#[utoipa::path(
    post,
    path = "/api/admin/users",
    tag = ADMIN_TAG,
    responses(
        (status = 200, description = "Success when admin user was created", body = AdminUserDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_admin_user(
    State(state): State<AppState>,
    session: Session,
    Json(dto): Json<CreateAdminUserDto>,
) -> Result<impl IntoResponse, Error> {
    let acting_admin = require_admin(&state, &session).await?;

    let password_hash = bcrypt::hash(&dto.password, BCRYPT_COST)?;

    let admin = AdminUserRepository::new(&state.db)
        .create(&dto.username, &password_hash, &dto.role)
        .await?;

    AdminLogRepository::new(&state.db)
        .create(
            &acting_admin.username,
            &format!("Created admin user {}", admin.username),
        )
        .await?;

    Ok((StatusCode::OK, Json(AdminUserDto::from(admin))).into_response())
}

/// List all admin users
#[utoipa::path(
    get,
    path = "/api/admin/users",
    tag = ADMIN_TAG,
    responses(
        (status = 200, description = "Success when retrieving admin users", body = Vec<AdminUserDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_admin_users(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    require_admin(&state, &session).await?;

    let admins = AdminUserRepository::new(&state.db).list().await?;

    let admin_dtos: Vec<AdminUserDto> = admins.into_iter().map(AdminUserDto::from).collect();

    Ok((StatusCode::OK, Json(admin_dtos)).into_response())
}
