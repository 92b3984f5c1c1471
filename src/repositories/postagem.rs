//! Postagem repository for database operations.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder, QuerySelect,
    TransactionTrait,
};

use super::{ensure_exists, overwrite, RepositoryError};
use crate::entities::{evento, localidade, ocorrencia, postagem, usuario};

const ENTITY: &str = "Postagem";

/// Repository for post-related database operations.
pub struct PostagemRepository;

impl PostagemRepository {
    /// Get all posts in insertion order.
    pub async fn get_all<C>(conn: &C) -> Result<Vec<postagem::Model>, RepositoryError>
    where
        C: ConnectionTrait,
    {
        Ok(postagem::Entity::find()
            .order_by_asc(postagem::Column::Id)
            .all(conn)
            .await?)
    }

    /// Get a single post by id.
    pub async fn get_by_id<C>(conn: &C, id: i32) -> Result<Option<postagem::Model>, RepositoryError>
    where
        C: ConnectionTrait,
    {
        Ok(postagem::Entity::find_by_id(id).one(conn).await?)
    }

    /// Ids of the posts whose `column` points at `parent_id`.
    pub async fn ids_referencing<C>(
        conn: &C,
        column: postagem::Column,
        parent_id: i32,
    ) -> Result<Vec<i32>, RepositoryError>
    where
        C: ConnectionTrait,
    {
        Ok(postagem::Entity::find()
            .select_only()
            .column(postagem::Column::Id)
            .filter(column.eq(parent_id))
            .into_tuple::<i32>()
            .all(conn)
            .await?)
    }

    /// Insert a new post after checking that its user, event and locality exist.
    pub async fn create<C>(conn: &C, mut record: postagem::ActiveModel) -> Result<postagem::Model, RepositoryError>
    where
        C: ConnectionTrait + TransactionTrait,
    {
        record.id = ActiveValue::NotSet;

        let txn = conn.begin().await?;
        Self::ensure_parents(&txn, &record).await?;
        let created = record.insert(&txn).await?;
        txn.commit().await?;

        Ok(created)
    }

    /// Overwrite references and text of post `id`. The creation time is kept.
    pub async fn update<C>(
        conn: &C,
        id: i32,
        changes: postagem::ActiveModel,
    ) -> Result<postagem::Model, RepositoryError>
    where
        C: ConnectionTrait + TransactionTrait,
    {
        let txn = conn.begin().await?;

        let existing = Self::get_by_id(&txn, id)
            .await?
            .ok_or_else(|| RepositoryError::not_found(ENTITY, id))?;

        Self::ensure_parents(&txn, &changes).await?;

        let mut active: postagem::ActiveModel = existing.into();
        overwrite(&mut active.usuario_id, changes.usuario_id);
        overwrite(&mut active.evento_id, changes.evento_id);
        overwrite(&mut active.localidade_id, changes.localidade_id);
        overwrite(&mut active.titulo, changes.titulo);
        overwrite(&mut active.descricao, changes.descricao);
        overwrite(&mut active.imagem_url, changes.imagem_url);

        let updated = active.update(&txn).await?;
        txn.commit().await?;
        Ok(updated)
    }

    /// Delete post `id` and its occurrences.
    pub async fn delete<C>(conn: &C, id: i32) -> Result<(), RepositoryError>
    where
        C: ConnectionTrait + TransactionTrait,
    {
        let txn = conn.begin().await?;

        if Self::get_by_id(&txn, id).await?.is_none() {
            return Err(RepositoryError::not_found(ENTITY, id));
        }
        Self::delete_with_dependents(&txn, vec![id]).await?;

        txn.commit().await?;
        Ok(())
    }

    /// Delete the given posts and every occurrence reported against them.
    ///
    /// Callers run this inside their own transaction.
    pub async fn delete_with_dependents<C>(conn: &C, ids: Vec<i32>) -> Result<u64, RepositoryError>
    where
        C: ConnectionTrait,
    {
        if ids.is_empty() {
            return Ok(0);
        }

        let removed = ocorrencia::Entity::delete_many()
            .filter(ocorrencia::Column::PostagemId.is_in(ids.clone()))
            .exec(conn)
            .await?;
        log::debug!("Removed {} ocorrencias with their postagens", removed.rows_affected);

        let result = postagem::Entity::delete_many()
            .filter(postagem::Column::Id.is_in(ids))
            .exec(conn)
            .await?;
        Ok(result.rows_affected)
    }

    async fn ensure_parents<C>(conn: &C, record: &postagem::ActiveModel) -> Result<(), RepositoryError>
    where
        C: ConnectionTrait,
    {
        if let ActiveValue::Set(usuario_id) = record.usuario_id {
            ensure_exists::<usuario::Entity, _>(conn, usuario_id).await?;
        }
        if let ActiveValue::Set(evento_id) = record.evento_id {
            ensure_exists::<evento::Entity, _>(conn, evento_id).await?;
        }
        if let ActiveValue::Set(localidade_id) = record.localidade_id {
            ensure_exists::<localidade::Entity, _>(conn, localidade_id).await?;
        }
        Ok(())
    }
}
