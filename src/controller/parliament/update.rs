use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    controller::parliament::PARLIAMENT_TAG,
    data::parliament::update::UpdateRepository,
    error::{parliament::ParliamentError, Error},
    model::{
        api::ErrorDto,
        app::AppState,
        parliament::{CreateUpdateDto, UpdateDto},
    },
};

static RESOURCE: &str = "Update";

fn update_not_found(update_id: i32) -> ParliamentError {
    ParliamentError::ResourceNotFound {
        resource: RESOURCE,
        id: update_id,
    }
}

/// List all parliament updates
#[utoipa::path(
    get,
    path = "/parliamentUpdates/",
    tag = PARLIAMENT_TAG,
    responses(
        (status = 200, description = "Success when listing updates", body = Vec<UpdateDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_updates(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let updates = UpdateRepository::new(&state.db).list().await?;

    let update_dtos: Vec<UpdateDto> = updates.into_iter().map(UpdateDto::from).collect();

    Ok((StatusCode::OK, Json(update_dtos)))
}

/// Create a parliament update
#[utoipa::path(
    post,
    path = "/parliamentUpdates/create/",
    tag = PARLIAMENT_TAG,
    request_body = CreateUpdateDto,
    responses(
        (status = 201, description = "Update created", body = UpdateDto),
        (status = 422, description = "Missing required fields", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_update(
    State(state): State<AppState>,
    Json(body): Json<CreateUpdateDto>,
) -> Result<impl IntoResponse, Error> {
    let update = UpdateRepository::new(&state.db)
        .create(body.title, body.description)
        .await?;

    Ok((StatusCode::CREATED, Json(UpdateDto::from(update))))
}

/// Get a parliament update by ID
#[utoipa::path(
    get,
    path = "/parliamentUpdates/{id}/",
    tag = PARLIAMENT_TAG,
    params(
        ("id" = i32, Path, description = "ID of the update")
    ),
    responses(
        (status = 200, description = "Success when retrieving an update", body = UpdateDto),
        (status = 404, description = "Update not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_update(
    State(state): State<AppState>,
    Path(update_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let update = UpdateRepository::new(&state.db)
        .get_by_id(update_id)
        .await?
        .ok_or_else(|| update_not_found(update_id))?;

    Ok((StatusCode::OK, Json(UpdateDto::from(update))))
}

/// Upvote a parliament update
#[utoipa::path(
    post,
    path = "/parliamentUpdates/{id}/upvote/",
    tag = PARLIAMENT_TAG,
    params(
        ("id" = i32, Path, description = "ID of the update")
    ),
    responses(
        (status = 200, description = "Update upvoted", body = UpdateDto),
        (status = 404, description = "Update not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn upvote_update(
    State(state): State<AppState>,
    Path(update_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let update_repo = UpdateRepository::new(&state.db);

    let rows_affected = update_repo.increment_upvotes(update_id).await?;
    if rows_affected == 0 {
        return Err(update_not_found(update_id).into());
    }

    let update = update_repo
        .get_by_id(update_id)
        .await?
        .ok_or_else(|| update_not_found(update_id))?;

    Ok((StatusCode::OK, Json(UpdateDto::from(update))))
}

/// Downvote a parliament update
#[utoipa::path(
    post,
    path = "/parliamentUpdates/{id}/downvote/",
    tag = PARLIAMENT_TAG,
    params(
        ("id" = i32, Path, description = "ID of the update")
    ),
    responses(
        (status = 200, description = "Update downvoted", body = UpdateDto),
        (status = 404, description = "Update not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn downvote_update(
    State(state): State<AppState>,
    Path(update_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let update_repo = UpdateRepository::new(&state.db);

    let rows_affected = update_repo.increment_downvotes(update_id).await?;
    if rows_affected == 0 {
        return Err(update_not_found(update_id).into());
    }

    let update = update_repo
        .get_by_id(update_id)
        .await?
        .ok_or_else(|| update_not_found(update_id))?;

    Ok((StatusCode::OK, Json(UpdateDto::from(update))))
}
