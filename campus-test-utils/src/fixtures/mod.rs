//! Fixture insert helpers for seeding the test database.

pub mod mess;
pub mod parliament;
