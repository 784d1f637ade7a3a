//! Repository service

use std::marker::PhantomData;
use std::sync::Arc;

use sqlx::postgres::PgExecutor;
use sqlx::{PgPool, Postgres, QueryBuilder, Transaction};
use uuid::Uuid;

use crate::events::{Broker, TopicAction};

use super::{Entity, Filter, RepositoryError, Sort};

/// CRUD access to one entity table.
///
/// Every read skips soft-deleted rows. Every mutation publishes the
/// entity's topics with its response DTO as payload.
///
/// The `_with_tx` writes publish as soon as the statement succeeds, before
/// the caller commits. A rolled-back write has still been announced.
pub struct Repository<E: Entity> {
    pool: PgPool,
    broker: Arc<dyn Broker>,
    _entity: PhantomData<fn() -> E>,
}

impl<E: Entity> Clone for Repository<E> {
    fn clone(&self) -> Self {
        Self {
            pool: self.pool.clone(),
            broker: Arc::clone(&self.broker),
            _entity: PhantomData,
        }
    }
}

impl<E: Entity> std::fmt::Debug for Repository<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Repository").field("table", &E::TABLE).finish()
    }
}

impl<E: Entity> Repository<E> {
    pub fn new(pool: PgPool, broker: Arc<dyn Broker>) -> Self {
        Self {
            pool,
            broker,
            _entity: PhantomData,
        }
    }

    /// Underlying connection pool
    pub fn client(&self) -> &PgPool {
        &self.pool
    }

    // =========================================================================
    // Reads
    // =========================================================================

    /// All rows matching `filters`, most recently updated first
    pub async fn find(&self, filters: &[Filter]) -> Result<Vec<E>, RepositoryError> {
        self.find_with_filters(filters, &[]).await
    }

    /// All rows matching `filters` in the given order (defaults to
    /// `updated_at DESC` when `sorts` is empty)
    pub async fn find_with_filters(
        &self,
        filters: &[Filter],
        sorts: &[Sort],
    ) -> Result<Vec<E>, RepositoryError> {
        let mut qb = select::<E>(filters, sorts, None);
        let rows = qb.build_query_as::<E>().fetch_all(&self.pool).await?;
        Ok(rows)
    }

    /// First row matching `filters`, most recently updated first
    pub async fn find_one(&self, filters: &[Filter]) -> Result<Option<E>, RepositoryError> {
        self.find_one_sorted(filters, &[]).await
    }

    pub async fn find_one_sorted(
        &self,
        filters: &[Filter],
        sorts: &[Sort],
    ) -> Result<Option<E>, RepositoryError> {
        let mut qb = select::<E>(filters, sorts, Some(1));
        let row = qb.build_query_as::<E>().fetch_optional(&self.pool).await?;
        Ok(row)
    }

    pub async fn find_with_tx(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        filters: &[Filter],
    ) -> Result<Vec<E>, RepositoryError> {
        let mut qb = select::<E>(filters, &[], None);
        let rows = qb.build_query_as::<E>().fetch_all(&mut **tx).await?;
        Ok(rows)
    }

    pub async fn find_one_with_tx(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        filters: &[Filter],
    ) -> Result<Option<E>, RepositoryError> {
        let mut qb = select::<E>(filters, &[], Some(1));
        let row = qb.build_query_as::<E>().fetch_optional(&mut **tx).await?;
        Ok(row)
    }

    /// First row in `sorts` order, locked with `FOR UPDATE` until `tx` ends.
    /// `None` when nothing matches.
    pub async fn find_lock_with_tx(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        filters: &[Filter],
        sorts: &[Sort],
    ) -> Result<Option<E>, RepositoryError> {
        let mut qb = select::<E>(filters, sorts, Some(1));
        qb.push(" FOR UPDATE");
        let row = qb.build_query_as::<E>().fetch_optional(&mut **tx).await?;
        Ok(row)
    }

    pub async fn count(&self, filters: &[Filter]) -> Result<i64, RepositoryError> {
        count_rows::<E, _>(&self.pool, filters).await
    }

    pub async fn count_with_tx(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        filters: &[Filter],
    ) -> Result<i64, RepositoryError> {
        count_rows::<E, _>(&mut **tx, filters).await
    }

    /// Row by id, `NotFound` if missing or soft-deleted
    pub async fn get_by_id(&self, id: Uuid) -> Result<E, RepositoryError> {
        self.find_one(&[Filter::eq("id", id)])
            .await?
            .ok_or(RepositoryError::NotFound { table: E::TABLE, id })
    }

    pub async fn get_by_id_with_tx(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        id: Uuid,
    ) -> Result<E, RepositoryError> {
        self.find_one_with_tx(tx, &[Filter::eq("id", id)])
            .await?
            .ok_or(RepositoryError::NotFound { table: E::TABLE, id })
    }

    // =========================================================================
    // Writes
    // =========================================================================

    /// Insert and return the stored row
    pub async fn create(&self, entity: &E) -> Result<E, RepositoryError> {
        let created = insert_row(&self.pool, entity).await?;
        self.dispatch(&created, TopicAction::Create);
        Ok(created)
    }

    pub async fn create_with_tx(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        entity: &E,
    ) -> Result<E, RepositoryError> {
        let created = insert_row(&mut **tx, entity).await?;
        self.dispatch(&created, TopicAction::Create);
        Ok(created)
    }

    /// Write every column of `entity` except `id` and return the stored row
    pub async fn update_fields(&self, entity: &E) -> Result<E, RepositoryError> {
        let updated = update_row(&self.pool, entity).await?;
        self.dispatch(&updated, TopicAction::Update);
        Ok(updated)
    }

    pub async fn update_fields_with_tx(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        entity: &E,
    ) -> Result<E, RepositoryError> {
        let updated = update_row(&mut **tx, entity).await?;
        self.dispatch(&updated, TopicAction::Update);
        Ok(updated)
    }

    /// Soft-delete by id
    pub async fn delete_by_id(&self, id: Uuid, deleted_by: Option<Uuid>) -> Result<(), RepositoryError> {
        let mut tx = self.pool.begin().await?;
        self.delete_by_id_with_tx(&mut tx, id, deleted_by).await?;
        tx.commit().await?;
        Ok(())
    }

    pub async fn delete_by_id_with_tx(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        id: Uuid,
        deleted_by: Option<Uuid>,
    ) -> Result<(), RepositoryError> {
        let entity = self.get_by_id_with_tx(tx, id).await?;

        let sql = format!(
            "UPDATE {} SET deleted_at = NOW(), deleted_by_id = $1 WHERE id = $2",
            E::TABLE
        );
        sqlx::query(&sql)
            .bind(deleted_by)
            .bind(id)
            .execute(&mut **tx)
            .await?;

        tracing::debug!(table = E::TABLE, id = %id, "Soft deleted row");
        self.dispatch(&entity, TopicAction::Delete);
        Ok(())
    }

    /// Publish the entity's topics. Serialization failures are logged and
    /// never fail the write.
    fn dispatch(&self, entity: &E, action: TopicAction) {
        let topics = entity.topics(action);
        match serde_json::to_value(entity.to_response()) {
            Ok(payload) => self.broker.publish(topics, payload),
            Err(e) => {
                tracing::error!(table = E::TABLE, id = %entity.id(), "Failed to serialize event payload: {}", e);
            }
        }
    }
}

// =========================================================================
// SQL builders
// =========================================================================

pub(crate) fn select<E: Entity>(
    filters: &[Filter],
    sorts: &[Sort],
    limit: Option<i64>,
) -> QueryBuilder<'static, Postgres> {
    let mut qb = QueryBuilder::new(format!("SELECT * FROM {} WHERE deleted_at IS NULL", E::TABLE));
    for filter in filters {
        filter.push_to(&mut qb);
    }
    Sort::push_all(sorts, &mut qb);
    if let Some(limit) = limit {
        qb.push(" LIMIT ");
        qb.push_bind(limit);
    }
    qb
}

async fn count_rows<'e, E, X>(executor: X, filters: &[Filter]) -> Result<i64, RepositoryError>
where
    E: Entity,
    X: PgExecutor<'e>,
{
    let mut qb = QueryBuilder::new(format!(
        "SELECT COUNT(*) FROM {} WHERE deleted_at IS NULL",
        E::TABLE
    ));
    for filter in filters {
        filter.push_to(&mut qb);
    }
    let count: i64 = qb.build_query_scalar().fetch_one(executor).await?;
    Ok(count)
}

async fn insert_row<'e, E, X>(executor: X, entity: &E) -> Result<E, RepositoryError>
where
    E: Entity,
    X: PgExecutor<'e>,
{
    let mut qb: QueryBuilder<'static, Postgres> = QueryBuilder::new(format!(
        "INSERT INTO {} ({}) VALUES (",
        E::TABLE,
        E::COLUMNS.join(", ")
    ));
    {
        let mut values = qb.separated(", ");
        entity.bind_columns(&mut values);
    }
    qb.push(") RETURNING *");

    let row = qb.build_query_as::<E>().fetch_one(executor).await?;
    tracing::debug!(table = E::TABLE, id = %row.id(), "Inserted row");
    Ok(row)
}

async fn update_row<'e, E, X>(executor: X, entity: &E) -> Result<E, RepositoryError>
where
    E: Entity,
    X: PgExecutor<'e>,
{
    let mut qb: QueryBuilder<'static, Postgres> = QueryBuilder::new(format!(
        "UPDATE {} SET ({}) = ROW(",
        E::TABLE,
        E::COLUMNS.join(", ")
    ));
    {
        let mut values = qb.separated(", ");
        entity.bind_columns(&mut values);
    }
    qb.push("), updated_at = NOW() WHERE deleted_at IS NULL AND id = ");
    qb.push_bind(entity.id());
    qb.push(" RETURNING *");

    let row = qb
        .build_query_as::<E>()
        .fetch_optional(executor)
        .await?
        .ok_or(RepositoryError::NotFound {
            table: E::TABLE,
            id: entity.id(),
        })?;
    tracing::debug!(table = E::TABLE, id = %row.id(), "Updated row");
    Ok(row)
}
