use sea_orm::{
    sea_query::TableCreateStatement, ConnectOptions, ConnectionTrait, Database, DatabaseConnection,
};

use crate::{
    error::TestError,
    fixtures::{mess::MessFixtures, parliament::ParliamentFixtures},
};

pub struct TestAppState {
    pub db: DatabaseConnection,
}

pub struct TestSetup {
    pub state: TestAppState,
}

impl TestSetup {
    pub async fn new() -> Result<Self, TestError> {
        // Single connection keeps every test task on the same in-memory
        // SQLite database.
        let mut opt = ConnectOptions::new("sqlite::memory:");
        opt.max_connections(1).min_connections(1).sqlx_logging(false);

        let db = Database::connect(opt).await?;

        Ok(TestSetup {
            state: TestAppState { db },
        })
    }

    /// Convert the test database handle into any state type constructed from a
    /// [`DatabaseConnection`]. This allows conversion to the application's
    /// `AppState` without creating a circular dependency.
    pub fn app_state<T>(&self) -> T
    where
        T: From<DatabaseConnection>,
    {
        T::from(self.state.db.clone())
    }

    pub async fn with_tables(&self, stmts: Vec<TableCreateStatement>) -> Result<(), TestError> {
        for stmt in stmts {
            self.state.db.execute(&stmt).await?;
        }

        Ok(())
    }

    /// Fixture helpers for the mess domain tables.
    pub fn mess(&self) -> MessFixtures<'_> {
        MessFixtures::new(&self.state.db)
    }

    /// Fixture helpers for the parliament resource tables.
    pub fn parliament(&self) -> ParliamentFixtures<'_> {
        ParliamentFixtures::new(&self.state.db)
    }
}

#[macro_export]
macro_rules! test_setup_with_tables {
    // Pattern 1: No entities provided
    () => {{
        TestSetup::new().await
    }};

    // Pattern 2: Entities provided
    ($($entity:expr),+ $(,)?) => {{
        async {
            let setup = TestSetup::new().await?;

            let schema = sea_orm::Schema::new(sea_orm::DbBackend::Sqlite);
            let stmts = vec![
                $(schema.create_table_from_entity($entity),)+
            ];
            setup.with_tables(stmts).await?;

            Ok::<_, $crate::error::TestError>(setup)
        }.await
    }};
}

#[macro_export]
macro_rules! test_setup_with_campus_tables {
    // Pattern 1: No entities provided
    () => {{
        async {
            let setup = TestSetup::new().await?;

            let schema = sea_orm::Schema::new(sea_orm::DbBackend::Sqlite);
            let stmts = vec![
                schema.create_table_from_entity(entity::prelude::Hostel),
                schema.create_table_from_entity(entity::prelude::Mess),
                schema.create_table_from_entity(entity::prelude::UserProfile),
                schema.create_table_from_entity(entity::prelude::Bill),
                schema.create_table_from_entity(entity::prelude::ParliamentContact),
                schema.create_table_from_entity(entity::prelude::ParliamentUpdate),
                schema.create_table_from_entity(entity::prelude::ParliamentSuggestion)
            ];
            setup.with_tables(stmts).await?;

            Ok::<_, $crate::error::TestError>(setup)
        }.await
    }};

    // Pattern 2: Entities provided
    ($($entity:expr),+ $(,)?) => {{
        async {
            let setup = TestSetup::new().await?;

            let schema = sea_orm::Schema::new(sea_orm::DbBackend::Sqlite);
            let stmts = vec![
                schema.create_table_from_entity(entity::prelude::Hostel),
                schema.create_table_from_entity(entity::prelude::Mess),
                schema.create_table_from_entity(entity::prelude::UserProfile),
                schema.create_table_from_entity(entity::prelude::Bill),
                schema.create_table_from_entity(entity::prelude::ParliamentContact),
                schema.create_table_from_entity(entity::prelude::ParliamentUpdate),
                schema.create_table_from_entity(entity::prelude::ParliamentSuggestion),
                $(schema.create_table_from_entity($entity),)+
            ];
            setup.with_tables(stmts).await?;

            Ok::<_, $crate::error::TestError>(setup)
        }.await
    }};
}
