use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Errors resolving the caller identity forwarded by the upstream auth layer.
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Request is missing the identity header set by the authentication layer")]
    MissingIdentity,
    #[error("Identity header does not contain a valid user ID")]
    InvalidIdentity,
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("Identity error: {}", self);

        (
            StatusCode::UNAUTHORIZED,
            Json(ErrorDto {
                error: "Authentication required".to_string(),
            }),
        )
            .into_response()
    }
}
