use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    controller::parliament::PARLIAMENT_TAG,
    data::parliament::suggestion::SuggestionRepository,
    error::{parliament::ParliamentError, Error},
    model::{
        api::ErrorDto,
        app::AppState,
        parliament::{CreateSuggestionDto, SuggestionDto},
    },
};

static RESOURCE: &str = "Suggestion";

fn suggestion_not_found(suggestion_id: i32) -> ParliamentError {
    ParliamentError::ResourceNotFound {
        resource: RESOURCE,
        id: suggestion_id,
    }
}

/// List all parliament suggestions
#[utoipa::path(
    get,
    path = "/parliamentSuggestions/",
    tag = PARLIAMENT_TAG,
    responses(
        (status = 200, description = "Success when listing suggestions", body = Vec<SuggestionDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_suggestions(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let suggestions = SuggestionRepository::new(&state.db).list().await?;

    let suggestion_dtos: Vec<SuggestionDto> =
        suggestions.into_iter().map(SuggestionDto::from).collect();

    Ok((StatusCode::OK, Json(suggestion_dtos)))
}

/// Create a parliament suggestion
#[utoipa::path(
    post,
    path = "/parliamentSuggestions/create/",
    tag = PARLIAMENT_TAG,
    request_body = CreateSuggestionDto,
    responses(
        (status = 201, description = "Suggestion created", body = SuggestionDto),
        (status = 422, description = "Missing required fields", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_suggestion(
    State(state): State<AppState>,
    Json(body): Json<CreateSuggestionDto>,
) -> Result<impl IntoResponse, Error> {
    let suggestion = SuggestionRepository::new(&state.db)
        .create(body.title, body.description)
        .await?;

    Ok((StatusCode::CREATED, Json(SuggestionDto::from(suggestion))))
}

/// Get a parliament suggestion by ID
#[utoipa::path(
    get,
    path = "/parliamentSuggestions/{id}/",
    tag = PARLIAMENT_TAG,
    params(
        ("id" = i32, Path, description = "ID of the suggestion")
    ),
    responses(
        (status = 200, description = "Success when retrieving a suggestion", body = SuggestionDto),
        (status = 404, description = "Suggestion not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_suggestion(
    State(state): State<AppState>,
    Path(suggestion_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let suggestion = SuggestionRepository::new(&state.db)
        .get_by_id(suggestion_id)
        .await?
        .ok_or_else(|| suggestion_not_found(suggestion_id))?;

    Ok((StatusCode::OK, Json(SuggestionDto::from(suggestion))))
}

/// Upvote a parliament suggestion
#[utoipa::path(
    post,
    path = "/parliamentSuggestions/{id}/upvote/",
    tag = PARLIAMENT_TAG,
    params(
        ("id" = i32, Path, description = "ID of the suggestion")
    ),
    responses(
        (status = 200, description = "Suggestion upvoted", body = SuggestionDto),
        (status = 404, description = "Suggestion not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn upvote_suggestion(
    State(state): State<AppState>,
    Path(suggestion_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let suggestion_repo = SuggestionRepository::new(&state.db);

    let rows_affected = suggestion_repo.increment_upvotes(suggestion_id).await?;
    if rows_affected == 0 {
        return Err(suggestion_not_found(suggestion_id).into());
    }

    let suggestion = suggestion_repo
        .get_by_id(suggestion_id)
        .await?
        .ok_or_else(|| suggestion_not_found(suggestion_id))?;

    Ok((StatusCode::OK, Json(SuggestionDto::from(suggestion))))
}

/// Downvote a parliament suggestion
#[utoipa::path(
    post,
    path = "/parliamentSuggestions/{id}/downvote/",
    tag = PARLIAMENT_TAG,
    params(
        ("id" = i32, Path, description = "ID of the suggestion")
    ),
    responses(
        (status = 200, description = "Suggestion downvoted", body = SuggestionDto),
        (status = 404, description = "Suggestion not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn downvote_suggestion(
    State(state): State<AppState>,
    Path(suggestion_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let suggestion_repo = SuggestionRepository::new(&state.db);

    let rows_affected = suggestion_repo.increment_downvotes(suggestion_id).await?;
    if rows_affected == 0 {
        return Err(suggestion_not_found(suggestion_id).into());
    }

    let suggestion = suggestion_repo
        .get_by_id(suggestion_id)
        .await?
        .ok_or_else(|| suggestion_not_found(suggestion_id))?;

    Ok((StatusCode::OK, Json(SuggestionDto::from(suggestion))))
}
