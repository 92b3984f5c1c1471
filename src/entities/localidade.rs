use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "localidades")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub bairro: String,
    pub zona: String,
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

impl ActiveModelBehavior for ActiveModel {}
