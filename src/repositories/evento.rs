//! Evento repository for database operations.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, EntityTrait, ModelTrait, QueryOrder, TransactionTrait,
};

use super::{overwrite, PostagemRepository, RepositoryError};
use crate::entities::{evento, postagem};

const ENTITY: &str = "Evento";

/// Repository for event-type database operations.
pub struct EventoRepository;

impl EventoRepository {
    /// Get all event types in insertion order.
    pub async fn get_all<C>(conn: &C) -> Result<Vec<evento::Model>, RepositoryError>
    where
        C: ConnectionTrait,
    {
        Ok(evento::Entity::find().order_by_asc(evento::Column::Id).all(conn).await?)
    }

    /// Get a single event type by id.
    pub async fn get_by_id<C>(conn: &C, id: i32) -> Result<Option<evento::Model>, RepositoryError>
    where
        C: ConnectionTrait,
    {
        Ok(evento::Entity::find_by_id(id).one(conn).await?)
    }

    pub async fn create<C>(conn: &C, mut record: evento::ActiveModel) -> Result<evento::Model, RepositoryError>
    where
        C: ConnectionTrait,
    {
        record.id = ActiveValue::NotSet;
        Ok(record.insert(conn).await?)
    }

    /// Overwrite type and description; a missing value clears the column.
    pub async fn update<C>(conn: &C, id: i32, changes: evento::ActiveModel) -> Result<evento::Model, RepositoryError>
    where
        C: ConnectionTrait + TransactionTrait,
    {
        let txn = conn.begin().await?;

        let existing = Self::get_by_id(&txn, id)
            .await?
            .ok_or_else(|| RepositoryError::not_found(ENTITY, id))?;

        let mut active: evento::ActiveModel = existing.into();
        overwrite(&mut active.tipo, changes.tipo);
        overwrite(&mut active.descricao, changes.descricao);

        let updated = active.update(&txn).await?;
        txn.commit().await?;
        Ok(updated)
    }

    /// Delete event type `id` and every post classified under it.
    pub async fn delete<C>(conn: &C, id: i32) -> Result<(), RepositoryError>
    where
        C: ConnectionTrait + TransactionTrait,
    {
        let txn = conn.begin().await?;

        let existing = Self::get_by_id(&txn, id)
            .await?
            .ok_or_else(|| RepositoryError::not_found(ENTITY, id))?;

        let postagens = PostagemRepository::ids_referencing(&txn, postagem::Column::EventoId, id).await?;
        PostagemRepository::delete_with_dependents(&txn, postagens).await?;
        existing.delete(&txn).await?;

        txn.commit().await?;
        Ok(())
    }
}
