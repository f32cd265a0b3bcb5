//! HTTP routing and OpenAPI documentation configuration.
//!
//! All API endpoints are registered here with their OpenAPI specifications,
//! and Swagger UI is configured to provide interactive API documentation at
//! `/api/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI
/// documentation.
///
/// Handlers are annotated with OpenAPI specifications via utoipa, which are
/// collected into a unified OpenAPI document served at
/// `/api/docs/openapi.json`.
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Matric", description = "School admission API"), tags(
        (name = controller::auth::AUTH_TAG, description = "Index verification and candidate login routes"),
        (name = controller::payment::PAYMENT_TAG, description = "Application fee payment routes"),
        (name = controller::voucher::VOUCHER_TAG, description = "Credential issuance and recovery routes"),
        (name = controller::admin::ADMIN_TAG, description = "Admin authentication and user management routes"),
        (name = controller::candidate::CANDIDATE_TAG, description = "Candidate management routes"),
        (name = controller::house::HOUSE_TAG, description = "House management routes"),
        (name = controller::programme::PROGRAMME_TAG, description = "Programme management routes"),
        (name = controller::school_class::SCHOOL_CLASS_TAG, description = "Class management routes"),
        (name = controller::document::DOCUMENT_TAG, description = "Document management routes"),
        (name = controller::log::LOG_TAG, description = "Activity log routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::auth::verify_index_number))
        .routes(routes!(controller::auth::candidate_login))
        .routes(routes!(controller::auth::candidate_logout))
        .routes(routes!(controller::payment::initiate_payment))
        .routes(routes!(controller::payment::payment_status))
        .routes(routes!(controller::voucher::issue_voucher))
        .routes(routes!(controller::voucher::recover_pin))
        .routes(routes!(controller::admin::admin_login))
        .routes(routes!(controller::admin::admin_logout))
        .routes(routes!(
            controller::admin::create_admin_user,
            controller::admin::get_admin_users
        ))
        .routes(routes!(
            controller::candidate::get_candidates,
            controller::candidate::create_candidate
        ))
        .routes(routes!(
            controller::candidate::get_candidate,
            controller::candidate::update_candidate,
            controller::candidate::delete_candidate
        ))
        .routes(routes!(controller::candidate::allocate_house))
        .routes(routes!(controller::candidate::reassign_house))
        .routes(routes!(controller::candidate::finalize_application))
        .routes(routes!(
            controller::house::get_houses,
            controller::house::create_house
        ))
        .routes(routes!(
            controller::house::update_house,
            controller::house::delete_house
        ))
        .routes(routes!(
            controller::programme::get_programmes,
            controller::programme::create_programme
        ))
        .routes(routes!(controller::programme::delete_programme))
        .routes(routes!(
            controller::school_class::get_classes,
            controller::school_class::create_class
        ))
        .routes(routes!(controller::school_class::delete_class))
        .routes(routes!(
            controller::document::get_documents,
            controller::document::create_document
        ))
        .routes(routes!(controller::document::delete_document))
        .routes(routes!(controller::log::get_admin_logs))
        .routes(routes!(controller::log::get_candidate_logs))
        .split_for_parts();

    routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
