//! Error types for the campus backend.
//!
//! Domain-specific error enums (`auth`, `config`, `mess`, `parliament`) each map
//! themselves to an HTTP response, while the top-level [`Error`] aggregates them
//! together with database errors. Anything without a specific mapping falls back
//! to a logged, generic 500 via [`InternalServerError`].

pub mod auth;
pub mod config;
pub mod mess;
pub mod parliament;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    error::{
        auth::AuthError, config::ConfigError, mess::MessError, parliament::ParliamentError,
    },
    model::api::ErrorDto,
};

/// Main error type for the campus backend.
///
/// Aggregates the domain-specific error types and external library errors into
/// a single unified type so handlers can return `Result<_, Error>` and rely on
/// `?` conversions via `#[from]`.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Caller identity error (missing or malformed identity header).
    #[error(transparent)]
    AuthError(#[from] AuthError),
    /// Mess domain error (subscription guard, bill/mess/profile lookup).
    #[error(transparent)]
    MessError(#[from] MessError),
    /// Parliament domain error (contact/update/suggestion lookup).
    #[error(transparent)]
    ParliamentError(#[from] ParliamentError),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::AuthError(err) => err.into_response(),
            Self::MessError(err) => err.into_response(),
            Self::ParliamentError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 response.
///
/// Logs the full error for debugging but returns a generic message to the
/// client so internal detail is not leaked.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
