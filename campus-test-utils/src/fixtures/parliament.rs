//! Insert helpers for parliament contact, update, and suggestion rows.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection};

use crate::error::TestError;

pub struct ParliamentFixtures<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ParliamentFixtures<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn insert_contact(
        &self,
        name: &str,
    ) -> Result<entity::parliament_contact::Model, TestError> {
        let contact = entity::parliament_contact::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            position: ActiveValue::Set("General Secretary".to_string()),
            email: ActiveValue::Set("parliament@campus.example".to_string()),
            upvotes: ActiveValue::Set(0),
            downvotes: ActiveValue::Set(0),
            ..Default::default()
        };

        Ok(contact.insert(self.db).await?)
    }

    pub async fn insert_update(
        &self,
        title: &str,
    ) -> Result<entity::parliament_update::Model, TestError> {
        let update = entity::parliament_update::ActiveModel {
            title: ActiveValue::Set(title.to_string()),
            description: ActiveValue::Set("Posted by the student parliament.".to_string()),
            upvotes: ActiveValue::Set(0),
            downvotes: ActiveValue::Set(0),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        Ok(update.insert(self.db).await?)
    }

    pub async fn insert_suggestion(
        &self,
        title: &str,
    ) -> Result<entity::parliament_suggestion::Model, TestError> {
        let suggestion = entity::parliament_suggestion::ActiveModel {
            title: ActiveValue::Set(title.to_string()),
            description: ActiveValue::Set("Raised by a student.".to_string()),
            upvotes: ActiveValue::Set(0),
            downvotes: ActiveValue::Set(0),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        Ok(suggestion.insert(self.db).await?)
    }
}
