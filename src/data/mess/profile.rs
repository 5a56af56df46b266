use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter,
};

pub struct ProfileRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ProfileRepository<'a, C> {
    /// Creates a new instance of [`ProfileRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Finds the profile belonging to an external authentication identity.
    pub async fn find_by_user_id(
        &self,
        user_id: i32,
    ) -> Result<Option<entity::user_profile::Model>, DbErr> {
        entity::prelude::UserProfile::find()
            .filter(entity::user_profile::Column::UserId.eq(user_id))
            .one(self.db)
            .await
    }

    /// Sets the profile's `mess_id` back to the unsubscribed state.
    ///
    /// Returns `Ok(None)` when no profile with the given ID exists.
    pub async fn clear_subscription(
        &self,
        user_profile_id: i32,
    ) -> Result<Option<entity::user_profile::Model>, DbErr> {
        let profile = match entity::prelude::UserProfile::find_by_id(user_profile_id)
            .one(self.db)
            .await?
        {
            Some(profile) => profile,
            None => return Ok(None),
        };

        let mut profile_am = profile.into_active_model();
        profile_am.mess_id = ActiveValue::Set(None);

        let profile = profile_am.update(self.db).await?;

        Ok(Some(profile))
    }
}
