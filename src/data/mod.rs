//! Data access layer repositories.
//!
//! Repositories provide an abstraction over database operations, organized by
//! domain (mess billing and parliament resources). They are generic over
//! [`sea_orm::ConnectionTrait`] so callers can pass either the shared
//! connection or an open transaction.

pub mod mess;
pub mod parliament;
