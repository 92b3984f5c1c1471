//! Repository layer for database operations.
//!
//! This module provides repository structs that encapsulate database queries
//! and operations, following the Data Mapper pattern recommended by SeaORM.
//! Repositories keep entities as pure data models while providing reusable
//! database access methods.
//!
//! Every mutating operation runs inside a single transaction: parent rows are
//! checked before inserts and updates, and deletes remove the dependent
//! subtree (postagens, then their ocorrencias) together with the row itself.

pub mod error;
pub mod evento;
pub mod localidade;
pub mod ocorrencia;
pub mod postagem;
pub mod usuario;

pub use error::RepositoryError;
pub use evento::EventoRepository;
pub use localidade::LocalidadeRepository;
pub use ocorrencia::OcorrenciaRepository;
pub use postagem::PostagemRepository;
pub use usuario::UsuarioRepository;

use sea_orm::{ActiveValue, ConnectionTrait, EntityName, EntityTrait, PrimaryKeyTrait};

/// Fail with [`RepositoryError::ForeignKeyViolation`] unless row `id` of `E` exists.
pub(crate) async fn ensure_exists<E, C>(conn: &C, id: i32) -> Result<(), RepositoryError>
where
    E: EntityTrait,
    <E::PrimaryKey as PrimaryKeyTrait>::ValueType: From<i32>,
    C: ConnectionTrait,
{
    if E::find_by_id(id).one(conn).await?.is_none() {
        return Err(RepositoryError::ForeignKeyViolation(format!(
            "{} {} does not exist",
            E::default().table_name(),
            id
        )));
    }
    Ok(())
}

/// Replace `target` with `source` when the caller supplied a value.
pub(crate) fn overwrite<V>(target: &mut ActiveValue<V>, source: ActiveValue<V>)
where
    V: Into<sea_orm::Value>,
{
    if source.is_set() {
        *target = source;
    }
}
