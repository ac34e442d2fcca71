use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::cita;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "Clientes")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub nombre: String,
    pub telefono: Option<String>,
    pub email: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Citas,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Citas => Entity::has_many(cita::Entity).into(),
        }
    }
}

impl Related<cita::Entity> for Entity {
    fn to() -> RelationDef { Relation::Citas.def() }
}

impl ActiveModelBehavior for ActiveModel {}
