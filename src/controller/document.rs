use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    controller::util::require_admin,
    data::document::DocumentRepository,
    error::Error,
    model::{
        api::{CreateDocumentDto, DocumentDto, ErrorDto, MessageDto},
        app::AppState,
    },
};

pub static DOCUMENT_TAG: &str = "document";

/// List all downloadable documents
#[utoipa::path(
    get,
    path = "/api/admin/documents",
    tag = DOCUMENT_TAG,
    responses(
        (status = 200, description = "Success when retrieving documents", body = Vec<DocumentDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_documents(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    require_admin(&state, &session).await?;

    let documents = DocumentRepository::new(&state.db).list().await?;

    let document_dtos: Vec<DocumentDto> =
        documents.into_iter().map(DocumentDto::from).collect();

    Ok((StatusCode::OK, Json(document_dtos)).into_response())
}

/// Register a new downloadable document
#[utoipa::path(
    post,
    path = "/api/admin/documents",
    tag = DOCUMENT_TAG,
    responses(
        (status = 200, description = "Success when document was registered", body = DocumentDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_document(
    State(state): State<AppState>,
    session: Session,
    Json(dto): Json<CreateDocumentDto>,
) -> Result<impl IntoResponse, Error> {
    require_admin(&state, &session).await?;

    let document = DocumentRepository::new(&state.db)
        .create(&dto.name, &dto.url)
        .await?;

    Ok((StatusCode::OK, Json(DocumentDto::from(document))).into_response())
}

/// Delete a document
#[utoipa::path(
    delete,
    path = "/api/admin/documents/{id}",
    tag = DOCUMENT_TAG,
    params(
        ("id" = i32, Path, description = "Document ID")
    ),
    responses(
        (status = 200, description = "Success when document was deleted", body = MessageDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_document(
    State(state): State<AppState>,
    session: Session,
    Path(document_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    require_admin(&state, &session).await?;

    DocumentRepository::new(&state.db).delete(document_id).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Document deleted".to_string(),
        }),
    )
        .into_response())
}
