pub use super::bill::Entity as Bill;
pub use super::hostel::Entity as Hostel;
pub use super::mess::Entity as Mess;
pub use super::parliament_contact::Entity as ParliamentContact;
pub use super::parliament_suggestion::Entity as ParliamentSuggestion;
pub use super::parliament_update::Entity as ParliamentUpdate;
pub use super::user_profile::Entity as UserProfile;
