//! Registered users. A user owns the posts they author.

use sea_orm::entity::prelude::*;
use sea_orm::ActiveValue;
use serde::{Deserialize, Serialize};

use crate::utils::datetime;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "usuarios")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub nome: String,
    pub email: String,
    pub senha: String,
    pub endereco: String,
    pub tipo_usuario: String,
    pub data_cadastro: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::postagem::Entity")]
    Postagens,
}

impl Related<super::postagem::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Postagens.def()
    }
}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        if insert && self.data_cadastro.is_not_set() {
            self.data_cadastro = ActiveValue::Set(datetime::now());
        }
        Ok(self)
    }
}
