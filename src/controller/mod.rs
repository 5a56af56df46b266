//! HTTP controller endpoints for the campus web API.
//!
//! Axum handlers for the mess billing flow and the parliament resources.
//! Controllers resolve the caller identity, validate inputs, call into
//! services/repositories, and shape HTTP responses. Endpoints are annotated
//! with utoipa for OpenAPI documentation.

pub mod mess;
pub mod parliament;
pub mod util;
