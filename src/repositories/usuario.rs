//! Usuario repository for database operations.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, EntityTrait, ModelTrait, QueryOrder, TransactionTrait,
};

use super::{overwrite, PostagemRepository, RepositoryError};
use crate::entities::{postagem, usuario};

const ENTITY: &str = "Usuario";

/// Repository for user-related database operations.
pub struct UsuarioRepository;

impl UsuarioRepository {
    /// Get all users in insertion order.
    pub async fn get_all<C>(conn: &C) -> Result<Vec<usuario::Model>, RepositoryError>
    where
        C: ConnectionTrait,
    {
        Ok(usuario::Entity::find()
            .order_by_asc(usuario::Column::Id)
            .all(conn)
            .await?)
    }

    /// Get a single user by id.
    pub async fn get_by_id<C>(conn: &C, id: i32) -> Result<Option<usuario::Model>, RepositoryError>
    where
        C: ConnectionTrait,
    {
        Ok(usuario::Entity::find_by_id(id).one(conn).await?)
    }

    /// Insert a new user; the store assigns the id and, if absent, the registration time.
    pub async fn create<C>(conn: &C, mut record: usuario::ActiveModel) -> Result<usuario::Model, RepositoryError>
    where
        C: ConnectionTrait,
    {
        record.id = ActiveValue::NotSet;
        Ok(record.insert(conn).await?)
    }

    /// Overwrite the mutable fields of user `id`. The registration time is kept.
    pub async fn update<C>(conn: &C, id: i32, changes: usuario::ActiveModel) -> Result<usuario::Model, RepositoryError>
    where
        C: ConnectionTrait + TransactionTrait,
    {
        let txn = conn.begin().await?;

        let existing = Self::get_by_id(&txn, id)
            .await?
            .ok_or_else(|| RepositoryError::not_found(ENTITY, id))?;

        let mut active: usuario::ActiveModel = existing.into();
        overwrite(&mut active.nome, changes.nome);
        overwrite(&mut active.email, changes.email);
        overwrite(&mut active.senha, changes.senha);
        overwrite(&mut active.endereco, changes.endereco);
        overwrite(&mut active.tipo_usuario, changes.tipo_usuario);

        let updated = active.update(&txn).await?;
        txn.commit().await?;
        Ok(updated)
    }

    /// Delete user `id` together with their posts and those posts' occurrences.
    pub async fn delete<C>(conn: &C, id: i32) -> Result<(), RepositoryError>
    where
        C: ConnectionTrait + TransactionTrait,
    {
        let txn = conn.begin().await?;

        let existing = Self::get_by_id(&txn, id)
            .await?
            .ok_or_else(|| RepositoryError::not_found(ENTITY, id))?;

        let postagens = PostagemRepository::ids_referencing(&txn, postagem::Column::UsuarioId, id).await?;
        PostagemRepository::delete_with_dependents(&txn, postagens).await?;
        existing.delete(&txn).await?;

        txn.commit().await?;
        Ok(())
    }
}
