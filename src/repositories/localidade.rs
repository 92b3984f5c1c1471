//! Localidade repository for database operations.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, EntityTrait, ModelTrait, QueryOrder, TransactionTrait,
};

use super::{overwrite, PostagemRepository, RepositoryError};
use crate::entities::{localidade, postagem};

const ENTITY: &str = "Localidade";

/// Repository for locality-related database operations.
pub struct LocalidadeRepository;

impl LocalidadeRepository {
    /// Get all localities in insertion order.
    pub async fn get_all<C>(conn: &C) -> Result<Vec<localidade::Model>, RepositoryError>
    where
        C: ConnectionTrait,
    {
        Ok(localidade::Entity::find()
            .order_by_asc(localidade::Column::Id)
            .all(conn)
            .await?)
    }

    /// Get a single locality by id.
    pub async fn get_by_id<C>(conn: &C, id: i32) -> Result<Option<localidade::Model>, RepositoryError>
    where
        C: ConnectionTrait,
    {
        Ok(localidade::Entity::find_by_id(id).one(conn).await?)
    }

    pub async fn create<C>(conn: &C, mut record: localidade::ActiveModel) -> Result<localidade::Model, RepositoryError>
    where
        C: ConnectionTrait,
    {
        record.id = ActiveValue::NotSet;
        Ok(record.insert(conn).await?)
    }

    pub async fn update<C>(
        conn: &C,
        id: i32,
        changes: localidade::ActiveModel,
    ) -> Result<localidade::Model, RepositoryError>
    where
        C: ConnectionTrait + TransactionTrait,
    {
        let txn = conn.begin().await?;

        let existing = Self::get_by_id(&txn, id)
            .await?
            .ok_or_else(|| RepositoryError::not_found(ENTITY, id))?;

        let mut active: localidade::ActiveModel = existing.into();
        overwrite(&mut active.bairro, changes.bairro);
        overwrite(&mut active.zona, changes.zona);

        let updated = active.update(&txn).await?;
        txn.commit().await?;
        Ok(updated)
    }

    /// Delete locality `id` and every post filed under it.
    pub async fn delete<C>(conn: &C, id: i32) -> Result<(), RepositoryError>
    where
        C: ConnectionTrait + TransactionTrait,
    {
        let txn = conn.begin().await?;

        let existing = Self::get_by_id(&txn, id)
            .await?
            .ok_or_else(|| RepositoryError::not_found(ENTITY, id))?;

        let postagens = PostagemRepository::ids_referencing(&txn, postagem::Column::LocalidadeId, id).await?;
        PostagemRepository::delete_with_dependents(&txn, postagens).await?;
        existing.delete(&txn).await?;

        txn.commit().await?;
        Ok(())
    }
}
