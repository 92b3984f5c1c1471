//! Alert posts. Each post belongs to one user, one event type and one
//! locality, and owns the occurrences reported against it.

use sea_orm::entity::prelude::*;
use sea_orm::ActiveValue;
use serde::{Deserialize, Serialize};

use crate::utils::datetime;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "postagens")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub usuario_id: i32,
    pub evento_id: i32,
    pub localidade_id: i32,
    pub titulo: String,
    pub descricao: String,
    pub imagem_url: String,
    pub data_criacao: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::usuario::Entity",
        from = "Column::UsuarioId",
        to = "super::usuario::Column::Id",
        on_delete = "Cascade"
    )]
    Usuario,
    #[sea_orm(
        belongs_to = "super::evento::Entity",
        from = "Column::EventoId",
        to = "super::evento::Column::Id",
        on_delete = "Cascade"
    )]
    Evento,
    #[sea_orm(
        belongs_to = "super::localidade::Entity",
        from = "Column::LocalidadeId",
        to = "super::localidade::Column::Id",
        on_delete = "Cascade"
    )]
    Localidade,
    #[sea_orm(has_many = "super::ocorrencia::Entity")]
    Ocorrencias,
}

impl Related<super::usuario::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Usuario.def()
    }
}

impl Related<super::evento::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Evento.def()
    }
}

impl Related<super::localidade::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Localidade.def()
    }
}

impl Related<super::ocorrencia::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Ocorrencias.def()
    }
}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        if insert && self.data_criacao.is_not_set() {
            self.data_criacao = ActiveValue::Set(datetime::now());
        }
        Ok(self)
    }
}
