//! Event types (flood, landslide, ...) that posts are classified under.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "eventos")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_type = "Text", nullable)]
    pub tipo: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub descricao: Option<String>,
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
