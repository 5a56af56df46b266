use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Errors raised by the parliament contact/update/suggestion resources.
#[derive(Error, Debug)]
pub enum ParliamentError {
    #[error("{resource} ID {id} not found")]
    ResourceNotFound { resource: &'static str, id: i32 },
}

impl IntoResponse for ParliamentError {
    fn into_response(self) -> Response {
        tracing::debug!("Parliament error: {}", self);

        match self {
            Self::ResourceNotFound { resource, .. } => (
                StatusCode::NOT_FOUND,
                Json(ErrorDto {
                    error: format!("{} not found", resource),
                }),
            )
                .into_response(),
        }
    }
}
