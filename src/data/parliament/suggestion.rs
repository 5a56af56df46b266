use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, ExprTrait, QueryFilter, QueryOrder,
};

pub struct SuggestionRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> SuggestionRepository<'a, C> {
    /// Creates a new instance of [`SuggestionRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn list(&self) -> Result<Vec<entity::parliament_suggestion::Model>, DbErr> {
        entity::prelude::ParliamentSuggestion::find()
            .order_by_asc(entity::parliament_suggestion::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn create(
        &self,
        title: String,
        description: String,
    ) -> Result<entity::parliament_suggestion::Model, DbErr> {
        let suggestion = entity::parliament_suggestion::ActiveModel {
            title: ActiveValue::Set(title),
            description: ActiveValue::Set(description),
            upvotes: ActiveValue::Set(0),
            downvotes: ActiveValue::Set(0),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        suggestion.insert(self.db).await
    }

    pub async fn get_by_id(
        &self,
        suggestion_id: i32,
    ) -> Result<Option<entity::parliament_suggestion::Model>, DbErr> {
        entity::prelude::ParliamentSuggestion::find_by_id(suggestion_id)
            .one(self.db)
            .await
    }

    /// Atomically increments the upvote counter; zero rows affected means the
    /// suggestion does not exist.
    pub async fn increment_upvotes(&self, suggestion_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::ParliamentSuggestion::update_many()
            .col_expr(
                entity::parliament_suggestion::Column::Upvotes,
                Expr::col(entity::parliament_suggestion::Column::Upvotes).add(1),
            )
            .filter(entity::parliament_suggestion::Column::Id.eq(suggestion_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Atomically increments the downvote counter.
    pub async fn increment_downvotes(&self, suggestion_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::ParliamentSuggestion::update_many()
            .col_expr(
                entity::parliament_suggestion::Column::Downvotes,
                Expr::col(entity::parliament_suggestion::Column::Downvotes).add(1),
            )
            .filter(entity::parliament_suggestion::Column::Id.eq(suggestion_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
