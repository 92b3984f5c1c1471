//! Ocorrencia repository for database operations.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, EntityTrait, ModelTrait, QueryOrder, TransactionTrait,
};

use super::{ensure_exists, overwrite, RepositoryError};
use crate::entities::{ocorrencia, postagem};
use crate::utils::datetime;

const ENTITY: &str = "Ocorrencia";

/// Repository for occurrence-related database operations.
pub struct OcorrenciaRepository;

impl OcorrenciaRepository {
    /// Get all occurrences in insertion order.
    pub async fn get_all<C>(conn: &C) -> Result<Vec<ocorrencia::Model>, RepositoryError>
    where
        C: ConnectionTrait,
    {
        Ok(ocorrencia::Entity::find()
            .order_by_asc(ocorrencia::Column::Id)
            .all(conn)
            .await?)
    }

    /// Get a single occurrence by id.
    pub async fn get_by_id<C>(conn: &C, id: i32) -> Result<Option<ocorrencia::Model>, RepositoryError>
    where
        C: ConnectionTrait,
    {
        Ok(ocorrencia::Entity::find_by_id(id).one(conn).await?)
    }

    /// Insert a new occurrence after checking that its post exists.
    pub async fn create<C>(
        conn: &C,
        mut record: ocorrencia::ActiveModel,
    ) -> Result<ocorrencia::Model, RepositoryError>
    where
        C: ConnectionTrait + TransactionTrait,
    {
        record.id = ActiveValue::NotSet;

        let txn = conn.begin().await?;
        if let ActiveValue::Set(postagem_id) = record.postagem_id {
            ensure_exists::<postagem::Entity, _>(&txn, postagem_id).await?;
        }
        let created = record.insert(&txn).await?;
        txn.commit().await?;

        Ok(created)
    }

    /// Replace post reference, status and occurrence time. An omitted time
    /// resets to now, the same default a new occurrence gets.
    pub async fn update<C>(
        conn: &C,
        id: i32,
        changes: ocorrencia::ActiveModel,
    ) -> Result<ocorrencia::Model, RepositoryError>
    where
        C: ConnectionTrait + TransactionTrait,
    {
        let txn = conn.begin().await?;

        let existing = Self::get_by_id(&txn, id)
            .await?
            .ok_or_else(|| RepositoryError::not_found(ENTITY, id))?;

        if let ActiveValue::Set(postagem_id) = changes.postagem_id {
            ensure_exists::<postagem::Entity, _>(&txn, postagem_id).await?;
        }

        let mut active: ocorrencia::ActiveModel = existing.into();
        overwrite(&mut active.postagem_id, changes.postagem_id);
        overwrite(&mut active.status, changes.status);
        active.data_ocorrencia = match changes.data_ocorrencia {
            ActiveValue::Set(when) => ActiveValue::Set(when),
            _ => ActiveValue::Set(datetime::now()),
        };

        let updated = active.update(&txn).await?;
        txn.commit().await?;
        Ok(updated)
    }

    pub async fn delete<C>(conn: &C, id: i32) -> Result<(), RepositoryError>
    where
        C: ConnectionTrait + TransactionTrait,
    {
        let txn = conn.begin().await?;

        let existing = Self::get_by_id(&txn, id)
            .await?
            .ok_or_else(|| RepositoryError::not_found(ENTITY, id))?;
        existing.delete(&txn).await?;

        txn.commit().await?;
        Ok(())
    }
}
