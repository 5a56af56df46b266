//! Type aliases for the SeaORM entity models.
//!
//! A single point of reference for database model types so the rest of the
//! crate does not import from the generated `entity` crate directly.

/// Hostel reference row: `{id, name}`.
pub type HostelModel = entity::hostel::Model;

/// Mess row: `{id, name, menu}`.
pub type MessModel = entity::mess::Model;

/// User profile row. `user_id` is the external authentication identity;
/// `mess_id` is NULL while the profile has no active subscription.
pub type UserProfileModel = entity::user_profile::Model;

/// Bill row tying one subscribed profile to one mess. At most one bill exists
/// per (user profile, mess) pair while the subscription is active.
pub type BillModel = entity::bill::Model;

/// Parliament contact row with vote counters.
pub type ContactModel = entity::parliament_contact::Model;

/// Parliament update row with vote counters.
pub type UpdateModel = entity::parliament_update::Model;

/// Parliament suggestion row with vote counters.
pub type SuggestionModel = entity::parliament_suggestion::Model;
