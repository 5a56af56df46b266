//! Campus management backend.
//!
//! This crate contains the backend for the campus web application: HTTP routing,
//! the mess (dining hall) subscription and billing flow, the student parliament
//! contact/update/suggestion resources, and the database access layer behind them.
//! Authentication is owned by an upstream gateway; handlers receive the caller
//! identity as a trusted request header.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
