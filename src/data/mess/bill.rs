use sea_orm::{
    ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait, QueryFilter,
};

pub struct BillRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> BillRepository<'a, C> {
    /// Creates a new instance of [`BillRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Finds the bill for a (user profile, mess) pair.
    ///
    /// At most one bill exists per pair while the subscription is active.
    pub async fn find_by_profile_and_mess(
        &self,
        user_profile_id: i32,
        mess_id: i32,
    ) -> Result<Option<entity::bill::Model>, DbErr> {
        entity::prelude::Bill::find()
            .filter(entity::bill::Column::UserProfileId.eq(user_profile_id))
            .filter(entity::bill::Column::MessId.eq(mess_id))
            .one(self.db)
            .await
    }

    /// Deletes the bill for a (user profile, mess) pair.
    ///
    /// Returns OK regardless of a bill existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete_by_profile_and_mess(
        &self,
        user_profile_id: i32,
        mess_id: i32,
    ) -> Result<DeleteResult, DbErr> {
        entity::prelude::Bill::delete_many()
            .filter(entity::bill::Column::UserProfileId.eq(user_profile_id))
            .filter(entity::bill::Column::MessId.eq(mess_id))
            .exec(self.db)
            .await
    }
}
