use sea_orm::entity::prelude::*;
use sea_orm::ActiveValue;
use serde::{Deserialize, Serialize};

use crate::utils::datetime;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "ocorrencias")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub postagem_id: i32,
    pub status: String,
    pub data_ocorrencia: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::postagem::Entity",
        from = "Column::PostagemId",
        to = "super::postagem::Column::Id",
        on_delete = "Cascade"
    )]
    Postagem,
}

impl Related<super::postagem::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Postagem.def()
    }
}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        if insert && self.data_ocorrencia.is_not_set() {
            self.data_ocorrencia = ActiveValue::Set(datetime::now());
        }
        Ok(self)
    }
}
