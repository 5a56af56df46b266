//! Repositories for the mess domain tables: hostels, messes, user profiles,
//! and bills.

pub mod bill;
pub mod hostel;
pub mod mess;
pub mod profile;
