use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    controller::parliament::PARLIAMENT_TAG,
    data::parliament::contact::ContactRepository,
    error::{parliament::ParliamentError, Error},
    model::{
        api::ErrorDto,
        app::AppState,
        parliament::{ContactDto, CreateContactDto},
    },
};

static RESOURCE: &str = "Contact";

fn contact_not_found(contact_id: i32) -> ParliamentError {
    ParliamentError::ResourceNotFound {
        resource: RESOURCE,
        id: contact_id,
    }
}

/// List all parliament contacts
#[utoipa::path(
    get,
    path = "/parliamentContact/",
    tag = PARLIAMENT_TAG,
    responses(
        (status = 200, description = "Success when listing contacts", body = Vec<ContactDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_contacts(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let contacts = ContactRepository::new(&state.db).list().await?;

    let contact_dtos: Vec<ContactDto> = contacts.into_iter().map(ContactDto::from).collect();

    Ok((StatusCode::OK, Json(contact_dtos)))
}

/// Create a parliament contact
#[utoipa::path(
    post,
    path = "/parliamentContact/create/",
    tag = PARLIAMENT_TAG,
    request_body = CreateContactDto,
    responses(
        (status = 201, description = "Contact created", body = ContactDto),
        (status = 422, description = "Missing required fields", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_contact(
    State(state): State<AppState>,
    Json(body): Json<CreateContactDto>,
) -> Result<impl IntoResponse, Error> {
    let contact = ContactRepository::new(&state.db)
        .create(body.name, body.position, body.email)
        .await?;

    Ok((StatusCode::CREATED, Json(ContactDto::from(contact))))
}

/// Get a parliament contact by ID
#[utoipa::path(
    get,
    path = "/parliamentContact/{id}/",
    tag = PARLIAMENT_TAG,
    params(
        ("id" = i32, Path, description = "ID of the contact")
    ),
    responses(
        (status = 200, description = "Success when retrieving a contact", body = ContactDto),
        (status = 404, description = "Contact not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_contact(
    State(state): State<AppState>,
    Path(contact_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let contact = ContactRepository::new(&state.db)
        .get_by_id(contact_id)
        .await?
        .ok_or_else(|| contact_not_found(contact_id))?;

    Ok((StatusCode::OK, Json(ContactDto::from(contact))))
}

/// Upvote a parliament contact
#[utoipa::path(
    post,
    path = "/parliamentContact/{id}/upvote/",
    tag = PARLIAMENT_TAG,
    params(
        ("id" = i32, Path, description = "ID of the contact")
    ),
    responses(
        (status = 200, description = "Contact upvoted", body = ContactDto),
        (status = 404, description = "Contact not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn upvote_contact(
    State(state): State<AppState>,
    Path(contact_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let contact_repo = ContactRepository::new(&state.db);

    let rows_affected = contact_repo.increment_upvotes(contact_id).await?;
    if rows_affected == 0 {
        return Err(contact_not_found(contact_id).into());
    }

    let contact = contact_repo
        .get_by_id(contact_id)
        .await?
        .ok_or_else(|| contact_not_found(contact_id))?;

    Ok((StatusCode::OK, Json(ContactDto::from(contact))))
}

/// Downvote a parliament contact
#[utoipa::path(
    post,
    path = "/parliamentContact/{id}/downvote/",
    tag = PARLIAMENT_TAG,
    params(
        ("id" = i32, Path, description = "ID of the contact")
    ),
    responses(
        (status = 200, description = "Contact downvoted", body = ContactDto),
        (status = 404, description = "Contact not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn downvote_contact(
    State(state): State<AppState>,
    Path(contact_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let contact_repo = ContactRepository::new(&state.db);

    let rows_affected = contact_repo.increment_downvotes(contact_id).await?;
    if rows_affected == 0 {
        return Err(contact_not_found(contact_id).into());
    }

    let contact = contact_repo
        .get_by_id(contact_id)
        .await?
        .ok_or_else(|| contact_not_found(contact_id))?;

    Ok((StatusCode::OK, Json(ContactDto::from(contact))))
}
