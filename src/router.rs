//! HTTP routing and OpenAPI documentation configuration.
//!
//! All API endpoints are registered here with their utoipa specifications,
//! which are collected into a unified OpenAPI document. Swagger UI serves the
//! interactive documentation at `/api/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI.
///
/// # Registered Endpoints
/// - `GET  /mess/hostels/` - List hostels
/// - `GET  /mess/` - List messes
/// - `GET  /mess/{mess_id}/` - Get one mess with its menu
/// - `GET  /mess/{mess_id}/bill/` - Billing record for the caller (subscription required)
/// - `POST /mess/{mess_id}/cancel/` - Cancel the caller's subscription
/// - `/parliamentContact/`, `/parliamentUpdates/`, `/parliamentSuggestions/` -
///   list/create/detail/upvote/downvote for each parliament resource
///
/// The OpenAPI specification is available at `/api/docs/openapi.json`.
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Campus", description = "Campus management API"), tags(
        (name = controller::mess::MESS_TAG, description = "Mess subscription and billing routes"),
        (name = controller::parliament::PARLIAMENT_TAG, description = "Student parliament resources"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::mess::list_hostels))
        .routes(routes!(controller::mess::list_messes))
        .routes(routes!(controller::mess::get_mess))
        .routes(routes!(controller::mess::get_bill))
        .routes(routes!(controller::mess::cancel_subscription))
        .routes(routes!(controller::parliament::contact::list_contacts))
        .routes(routes!(controller::parliament::contact::create_contact))
        .routes(routes!(controller::parliament::contact::get_contact))
        .routes(routes!(controller::parliament::contact::upvote_contact))
        .routes(routes!(controller::parliament::contact::downvote_contact))
        .routes(routes!(controller::parliament::update::list_updates))
        .routes(routes!(controller::parliament::update::create_update))
        .routes(routes!(controller::parliament::update::get_update))
        .routes(routes!(controller::parliament::update::upvote_update))
        .routes(routes!(controller::parliament::update::downvote_update))
        .routes(routes!(controller::parliament::suggestion::list_suggestions))
        .routes(routes!(controller::parliament::suggestion::create_suggestion))
        .routes(routes!(controller::parliament::suggestion::get_suggestion))
        .routes(routes!(controller::parliament::suggestion::upvote_suggestion))
        .routes(routes!(controller::parliament::suggestion::downvote_suggestion))
        .split_for_parts();

    let routes = routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api));

    routes
}
