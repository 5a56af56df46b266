use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, ExprTrait, QueryFilter, QueryOrder,
};

pub struct UpdateRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UpdateRepository<'a, C> {
    /// Creates a new instance of [`UpdateRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn list(&self) -> Result<Vec<entity::parliament_update::Model>, DbErr> {
        entity::prelude::ParliamentUpdate::find()
            .order_by_asc(entity::parliament_update::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn create(
        &self,
        title: String,
        description: String,
    ) -> Result<entity::parliament_update::Model, DbErr> {
        let update = entity::parliament_update::ActiveModel {
            title: ActiveValue::Set(title),
            description: ActiveValue::Set(description),
            upvotes: ActiveValue::Set(0),
            downvotes: ActiveValue::Set(0),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        update.insert(self.db).await
    }

    pub async fn get_by_id(
        &self,
        update_id: i32,
    ) -> Result<Option<entity::parliament_update::Model>, DbErr> {
        entity::prelude::ParliamentUpdate::find_by_id(update_id)
            .one(self.db)
            .await
    }

    /// Atomically increments the upvote counter; zero rows affected means the
    /// update does not exist.
    pub async fn increment_upvotes(&self, update_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::ParliamentUpdate::update_many()
            .col_expr(
                entity::parliament_update::Column::Upvotes,
                Expr::col(entity::parliament_update::Column::Upvotes).add(1),
            )
            .filter(entity::parliament_update::Column::Id.eq(update_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Atomically increments the downvote counter.
    pub async fn increment_downvotes(&self, update_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::ParliamentUpdate::update_many()
            .col_expr(
                entity::parliament_update::Column::Downvotes,
                Expr::col(entity::parliament_update::Column::Downvotes).add(1),
            )
            .filter(entity::parliament_update::Column::Id.eq(update_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
