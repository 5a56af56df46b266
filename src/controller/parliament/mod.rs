//! Controllers for the parliament resources.
//!
//! Contacts, updates, and suggestions are independent CRUD resources with the
//! same endpoint set: list, create, retrieve-by-id, upvote, downvote. These
//! handlers call the repositories directly; there is no business logic beyond
//! field presence (enforced by deserialization) and row existence.

pub mod contact;
pub mod suggestion;
pub mod update;

pub static PARLIAMENT_TAG: &str = "parliament";
