use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Errors raised by the mess subscription and billing flow.
#[derive(Error, Debug)]
pub enum MessError {
    /// Ownership guard failure: the caller's profile is not subscribed to the
    /// targeted mess. No mutation happens after this error.
    #[error("You are not subscribed to this mess")]
    NotSubscribed,
    #[error("No user profile found for user ID {0}")]
    ProfileNotFound(i32),
    #[error("Mess ID {0} not found")]
    MessNotFound(i32),
    /// No bill row exists for the (user profile, mess) pair. Raised explicitly
    /// in both the billing read and the cancellation flow.
    #[error("No bill found for user profile ID {user_profile_id} and mess ID {mess_id}")]
    BillNotFound { user_profile_id: i32, mess_id: i32 },
}

impl MessError {
    fn not_found(message: &str) -> Response {
        (
            StatusCode::NOT_FOUND,
            Json(ErrorDto {
                error: message.to_string(),
            }),
        )
            .into_response()
    }
}

impl IntoResponse for MessError {
    fn into_response(self) -> Response {
        tracing::debug!("Mess error: {}", self);

        match self {
            Self::NotSubscribed => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto {
                    error: Self::NotSubscribed.to_string(),
                }),
            )
                .into_response(),
            Self::ProfileNotFound(_) => Self::not_found("User profile not found"),
            Self::MessNotFound(_) => Self::not_found("Mess not found"),
            Self::BillNotFound { .. } => Self::not_found("No bill found for this mess"),
        }
    }
}
