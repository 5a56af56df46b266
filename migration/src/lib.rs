pub use sea_orm_migration::prelude::*;

mod m20260109_000001_create_hostel_table;
mod m20260109_000002_create_mess_table;
mod m20260109_000003_create_user_profile_table;
mod m20260109_000004_create_bill_table;
mod m20260109_000005_create_parliament_contact_table;
mod m20260109_000006_create_parliament_update_table;
mod m20260109_000007_create_parliament_suggestion_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260109_000001_create_hostel_table::Migration),
            Box::new(m20260109_000002_create_mess_table::Migration),
            Box::new(m20260109_000003_create_user_profile_table::Migration),
            Box::new(m20260109_000004_create_bill_table::Migration),
            Box::new(m20260109_000005_create_parliament_contact_table::Migration),
            Box::new(m20260109_000006_create_parliament_update_table::Migration),
            Box::new(m20260109_000007_create_parliament_suggestion_table::Migration),
        ]
    }
}
