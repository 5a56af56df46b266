use sea_orm::{ConnectionTrait, DbErr, EntityTrait};

pub struct MessRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> MessRepository<'a, C> {
    /// Creates a new instance of [`MessRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn list(&self) -> Result<Vec<entity::mess::Model>, DbErr> {
        entity::prelude::Mess::find().all(self.db).await
    }

    pub async fn get_by_id(&self, mess_id: i32) -> Result<Option<entity::mess::Model>, DbErr> {
        entity::prelude::Mess::find_by_id(mess_id).one(self.db).await
    }
}
