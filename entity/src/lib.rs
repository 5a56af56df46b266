//! SeaORM entity definitions for the campus database.

pub mod bill;
pub mod hostel;
pub mod mess;
pub mod parliament_contact;
pub mod parliament_suggestion;
pub mod parliament_update;
pub mod prelude;
pub mod user_profile;
