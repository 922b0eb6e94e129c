//! PostgreSQL adapter for StoryRepository

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, Set,
};
use uuid::Uuid;

use crate::domain::entities::{NewStory, Story, StoryId, StoryStatus};
use crate::domain::ports::StoryRepository;
use crate::entity::stories;
use crate::error::DomainError;

/// PostgreSQL implementation of StoryRepository
pub struct PostgresStoryRepository {
    db: DatabaseConnection,
}

impl PostgresStoryRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

/// Map a database error, keeping connection failures distinct so callers
/// can tell "store unreachable" apart from a bad query
fn map_db_err(e: DbErr) -> DomainError {
    match e {
        DbErr::Conn(err) => DomainError::Unavailable(err.to_string()),
        DbErr::ConnectionAcquire(err) => DomainError::Unavailable(err.to_string()),
        other => DomainError::Database(other.to_string()),
    }
}

#[async_trait]
impl StoryRepository for PostgresStoryRepository {
    async fn find_by_id(&self, id: &StoryId) -> Result<Option<Story>, DomainError> {
        let result = stories::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.map(|m| m.into()))
    }

    async fn create(&self, story: &NewStory) -> Result<Story, DomainError> {
        let id = Uuid::new_v4();
        let now = Utc::now().fixed_offset();

        let model = stories::ActiveModel {
            id: Set(id),
            status: Set(StoryStatus::Pending.to_string()),
            author: Set(story.author.clone()),
            title: Set(story.title.clone()),
            body: Set(story.body.clone()),
            category: Set(story.category.clone()),
            ai_tool: Set(story.ai_tool.clone()),
            outcome_type: Set(story.outcome_type.clone()),
            created_at: Set(now),
        };

        let result = model.insert(&self.db).await.map_err(map_db_err)?;

        Ok(result.into())
    }

    async fn update_status_from(
        &self,
        id: &StoryId,
        expected: StoryStatus,
        next: StoryStatus,
    ) -> Result<bool, DomainError> {
        // Single conditional UPDATE: the status the store ends up with is
        // always computed from the status it actually held
        let result = stories::Entity::update_many()
            .col_expr(stories::Column::Status, Expr::value(next.to_string()))
            .filter(stories::Column::Id.eq(id.0))
            .filter(stories::Column::Status.eq(expected.to_string()))
            .exec(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.rows_affected > 0)
    }

    async fn list_by_status(
        &self,
        status: StoryStatus,
        limit: u64,
        offset: u64,
    ) -> Result<Vec<Story>, DomainError> {
        let results = stories::Entity::find()
            .filter(stories::Column::Status.eq(status.to_string()))
            .order_by_desc(stories::Column::CreatedAt)
            .limit(limit)
            .offset(offset)
            .all(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }

    async fn count_by_status(&self, status: StoryStatus) -> Result<u64, DomainError> {
        let count = stories::Entity::find()
            .filter(stories::Column::Status.eq(status.to_string()))
            .count(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(count)
    }
}

/// Convert SeaORM model to domain entity
impl From<stories::Model> for Story {
    fn from(model: stories::Model) -> Self {
        Story {
            id: StoryId(model.id),
            status: model.status.parse().unwrap_or(StoryStatus::Pending),
            author: model.author,
            title: model.title,
            body: model.body,
            category: model.category,
            ai_tool: model.ai_tool,
            outcome_type: model.outcome_type,
            created_at: model.created_at.with_timezone(&Utc),
        }
    }
}
