//! Business logic services.
//!
//! The mess domain carries the only nontrivial flow (ownership-guarded billing
//! and transactional cancellation) and gets a service layer; the parliament
//! resources are thin enough that controllers use their repositories directly.

pub mod mess;
