use axum::{extract::FromRequestParts, http::request::Parts};

use crate::error::auth::AuthError;

/// Header carrying the authenticated user ID, set by the upstream auth layer.
pub static IDENTITY_HEADER: &str = "x-user-id";

/// Caller identity for mess-domain operations.
///
/// Authentication itself is owned by the gateway in front of this service;
/// every authenticated request arrives with the user ID in
/// [`IDENTITY_HEADER`]. Requests without a parseable ID are rejected with 401
/// before the handler runs.
pub struct RequestIdentity {
    pub user_id: i32,
}

impl<S> FromRequestParts<S> for RequestIdentity
where
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(IDENTITY_HEADER)
            .ok_or(AuthError::MissingIdentity)?;

        let user_id = header
            .to_str()
            .ok()
            .and_then(|value| value.parse::<i32>().ok())
            .ok_or(AuthError::InvalidIdentity)?;

        Ok(RequestIdentity { user_id })
    }
}
