use sea_orm::{ConnectionTrait, DbErr, EntityTrait};

pub struct HostelRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> HostelRepository<'a, C> {
    /// Creates a new instance of [`HostelRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn list(&self) -> Result<Vec<entity::hostel::Model>, DbErr> {
        entity::prelude::Hostel::find().all(self.db).await
    }
}
