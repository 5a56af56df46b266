use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    controller::util::identity::RequestIdentity,
    data::mess::{hostel::HostelRepository, mess::MessRepository},
    error::{mess::MessError, Error},
    model::{
        api::ErrorDto,
        app::AppState,
        mess::{BillDto, HostelDto, MessDto},
    },
    service::mess::MessService,
};

pub static MESS_TAG: &str = "mess";

/// List all hostels
#[utoipa::path(
    get,
    path = "/mess/hostels/",
    tag = MESS_TAG,
    responses(
        (status = 200, description = "Success when listing hostels", body = Vec<HostelDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_hostels(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let hostels = HostelRepository::new(&state.db).list().await?;

    let hostel_dtos: Vec<HostelDto> = hostels.into_iter().map(HostelDto::from).collect();

    Ok((StatusCode::OK, Json(hostel_dtos)))
}

/// List all messes
#[utoipa::path(
    get,
    path = "/mess/",
    tag = MESS_TAG,
    responses(
        (status = 200, description = "Success when listing messes", body = Vec<MessDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_messes(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let messes = MessRepository::new(&state.db).list().await?;

    let mess_dtos: Vec<MessDto> = messes.into_iter().map(MessDto::from).collect();

    Ok((StatusCode::OK, Json(mess_dtos)))
}

/// Get a single mess with its menu
#[utoipa::path(
    get,
    path = "/mess/{mess_id}/",
    tag = MESS_TAG,
    params(
        ("mess_id" = i32, Path, description = "ID of the mess")
    ),
    responses(
        (status = 200, description = "Success when retrieving a mess", body = MessDto),
        (status = 404, description = "Mess not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_mess(
    State(state): State<AppState>,
    Path(mess_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let mess = MessRepository::new(&state.db)
        .get_by_id(mess_id)
        .await?
        .ok_or(MessError::MessNotFound(mess_id))?;

    Ok((StatusCode::OK, Json(MessDto::from(mess))))
}

/// Get the billing record of the requesting identity for a mess
///
/// Requires the caller to be subscribed to the mess; the ownership guard
/// rejects any other (profile, mess) combination.
#[utoipa::path(
    get,
    path = "/mess/{mess_id}/bill/",
    tag = MESS_TAG,
    params(
        ("mess_id" = i32, Path, description = "ID of the mess the caller is subscribed to")
    ),
    responses(
        (status = 200, description = "Billing record for the caller", body = BillDto),
        (status = 400, description = "Caller is not subscribed to this mess", body = ErrorDto),
        (status = 401, description = "Missing or invalid identity header", body = ErrorDto),
        (status = 404, description = "Profile, mess, or bill not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_bill(
    State(state): State<AppState>,
    Path(mess_id): Path<i32>,
    identity: RequestIdentity,
) -> Result<impl IntoResponse, Error> {
    let bill = MessService::new(&state.db)
        .get_bill(identity.user_id, mess_id)
        .await?;

    Ok((StatusCode::OK, Json(bill)))
}

/// Cancel the requesting identity's subscription to a mess
///
/// Deletes the caller's bill for the mess and clears the subscription in one
/// transaction. Repeating the call errors; cancellation is deliberately not
/// idempotent.
#[utoipa::path(
    post,
    path = "/mess/{mess_id}/cancel/",
    tag = MESS_TAG,
    params(
        ("mess_id" = i32, Path, description = "ID of the mess the caller is subscribed to")
    ),
    responses(
        (status = 204, description = "Subscription cancelled"),
        (status = 400, description = "Caller is not subscribed to this mess", body = ErrorDto),
        (status = 401, description = "Missing or invalid identity header", body = ErrorDto),
        (status = 404, description = "Profile or bill not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn cancel_subscription(
    State(state): State<AppState>,
    Path(mess_id): Path<i32>,
    identity: RequestIdentity,
) -> Result<impl IntoResponse, Error> {
    MessService::new(&state.db)
        .cancel_subscription(identity.user_id, mess_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
