//! Application models and type definitions.
//!
//! Contains the shared application state, API data transfer objects for both
//! domains, and type aliases for the database entity models.

pub mod api;
pub mod app;
pub mod db;
pub mod mess;
pub mod parliament;
