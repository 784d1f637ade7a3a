//! Entity contract

use serde::Serialize;
use sqlx::postgres::PgRow;
use sqlx::query_builder::Separated;
use sqlx::{FromRow, Postgres};
use uuid::Uuid;

use crate::events::{topics_for, TopicAction, TopicScope};

/// A persisted row managed by [`crate::repository::Repository`].
///
/// `COLUMNS` lists every column written on insert and update, in the order
/// `bind_columns` pushes values. It always starts with `id` and never
/// contains `created_at`, `updated_at`, `deleted_at` or `deleted_by_id`;
/// those are owned by the database and the repository.
pub trait Entity: for<'r> FromRow<'r, PgRow> + Send + Unpin + 'static {
    const TABLE: &'static str;
    /// Prefix for event topics, e.g. `payment_type`
    const TOPIC: &'static str;
    const COLUMNS: &'static [&'static str];

    type Response: Serialize + Send;

    fn id(&self) -> Uuid;

    fn bind_columns(&self, row: &mut Separated<'_, '_, Postgres, &'static str>);

    fn to_response(&self) -> Self::Response;

    /// Partitions the entity's topics fan out to. Global entities keep the
    /// default empty scope.
    fn topic_scope(&self) -> TopicScope {
        TopicScope::default()
    }

    fn topics(&self, action: TopicAction) -> Vec<String> {
        topics_for(Self::TOPIC, action, self.id(), &self.topic_scope())
    }
}

/// Map an optional entity to its response DTO
pub fn to_model<E: Entity>(entity: Option<&E>) -> Option<E::Response> {
    entity.map(Entity::to_response)
}

/// Map a list of entities to response DTOs
pub fn to_models<'a, E, I>(entities: I) -> Vec<E::Response>
where
    E: Entity,
    I: IntoIterator<Item = &'a E>,
{
    entities.into_iter().map(Entity::to_response).collect()
}
