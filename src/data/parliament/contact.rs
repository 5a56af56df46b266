use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, ExprTrait, QueryFilter, QueryOrder,
};

pub struct ContactRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ContactRepository<'a, C> {
    /// Creates a new instance of [`ContactRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn list(&self) -> Result<Vec<entity::parliament_contact::Model>, DbErr> {
        entity::prelude::ParliamentContact::find()
            .order_by_asc(entity::parliament_contact::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn create(
        &self,
        name: String,
        position: String,
        email: String,
    ) -> Result<entity::parliament_contact::Model, DbErr> {
        let contact = entity::parliament_contact::ActiveModel {
            name: ActiveValue::Set(name),
            position: ActiveValue::Set(position),
            email: ActiveValue::Set(email),
            upvotes: ActiveValue::Set(0),
            downvotes: ActiveValue::Set(0),
            ..Default::default()
        };

        contact.insert(self.db).await
    }

    pub async fn get_by_id(
        &self,
        contact_id: i32,
    ) -> Result<Option<entity::parliament_contact::Model>, DbErr> {
        entity::prelude::ParliamentContact::find_by_id(contact_id)
            .one(self.db)
            .await
    }

    /// Atomically increments the upvote counter.
    ///
    /// Returns the number of rows affected; zero means the contact does not
    /// exist.
    pub async fn increment_upvotes(&self, contact_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::ParliamentContact::update_many()
            .col_expr(
                entity::parliament_contact::Column::Upvotes,
                Expr::col(entity::parliament_contact::Column::Upvotes).add(1),
            )
            .filter(entity::parliament_contact::Column::Id.eq(contact_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Atomically increments the downvote counter.
    pub async fn increment_downvotes(&self, contact_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::ParliamentContact::update_many()
            .col_expr(
                entity::parliament_contact::Column::Downvotes,
                Expr::col(entity::parliament_contact::Column::Downvotes).add(1),
            )
            .filter(entity::parliament_contact::Column::Id.eq(contact_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
