//! Insert helpers for hostel, mess, user profile, and bill rows.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection};

use crate::error::TestError;

pub struct MessFixtures<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MessFixtures<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn insert_hostel(&self, name: &str) -> Result<entity::hostel::Model, TestError> {
        let hostel = entity::hostel::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            ..Default::default()
        };

        Ok(hostel.insert(self.db).await?)
    }

    pub async fn insert_mess(
        &self,
        name: &str,
        menu: &str,
    ) -> Result<entity::mess::Model, TestError> {
        let mess = entity::mess::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            menu: ActiveValue::Set(menu.to_string()),
            ..Default::default()
        };

        Ok(mess.insert(self.db).await?)
    }

    /// Inserts a user profile, subscribed to `mess_id` when one is given.
    pub async fn insert_profile(
        &self,
        user_id: i32,
        name: &str,
        mess_id: Option<i32>,
    ) -> Result<entity::user_profile::Model, TestError> {
        let profile = entity::user_profile::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            name: ActiveValue::Set(name.to_string()),
            mess_id: ActiveValue::Set(mess_id),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        Ok(profile.insert(self.db).await?)
    }

    pub async fn insert_bill(
        &self,
        user_profile_id: i32,
        mess_id: i32,
        monthly_bill: i32,
        extra_charges: i32,
    ) -> Result<entity::bill::Model, TestError> {
        let bill = entity::bill::ActiveModel {
            user_profile_id: ActiveValue::Set(user_profile_id),
            mess_id: ActiveValue::Set(mess_id),
            monthly_bill: ActiveValue::Set(monthly_bill),
            extra_charges: ActiveValue::Set(extra_charges),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        Ok(bill.insert(self.db).await?)
    }

    /// Inserts a mess, a profile subscribed to it, and a bill for the pair.
    ///
    /// Covers the common starting state for billing and cancellation tests.
    pub async fn insert_subscribed_profile_with_bill(
        &self,
        user_id: i32,
        monthly_bill: i32,
        extra_charges: i32,
    ) -> Result<
        (
            entity::mess::Model,
            entity::user_profile::Model,
            entity::bill::Model,
        ),
        TestError,
    > {
        let mess = self.insert_mess("Central", "Rice, dal, seasonal curry").await?;
        let profile = self
            .insert_profile(user_id, "Test Student", Some(mess.id))
            .await?;
        let bill = self
            .insert_bill(profile.id, mess.id, monthly_bill, extra_charges)
            .await?;

        Ok((mess, profile, bill))
    }
}
