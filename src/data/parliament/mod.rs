//! Repositories for the parliament resources: contacts, updates, and
//! suggestions.
//!
//! Vote counters are incremented with a single `UPDATE ... SET c = c + 1`
//! statement so concurrent votes never lose updates.

pub mod contact;
pub mod suggestion;
pub mod update;
