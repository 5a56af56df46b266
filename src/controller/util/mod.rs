//! Reusable helpers for controller request handling.

pub mod identity;
