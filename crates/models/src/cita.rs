use chrono::{DateTime, NaiveDate};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{cliente, errors::ModelError};

pub const ESTADO_PENDIENTE: &str = "Pendiente";
pub const ESTADO_COMPLETADA: &str = "Completada";

/// Longest `servicio` accepted when an appointment is created.
pub const SERVICIO_MAX_LEN: usize = 30;

/// `fecha` is a DATE column, so it always serializes as `YYYY-MM-DD`.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "Citas")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub cliente_id: i32,
    pub fecha: Date,
    pub hora: String,
    pub servicio: String,
    pub estado: String,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Cliente,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Cliente => Entity::belongs_to(cliente::Entity)
                .from(Column::ClienteId)
                .to(cliente::Column::Id)
                .into(),
        }
    }
}

impl Related<cliente::Entity> for Entity {
    fn to() -> RelationDef { Relation::Cliente.def() }
}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate_servicio(servicio: &str) -> Result<(), ModelError> {
    if servicio.chars().count() > SERVICIO_MAX_LEN {
        return Err(ModelError::Validation("El nombre del servicio es demasiado largo".into()));
    }
    Ok(())
}

/// Accepts `YYYY-MM-DD` or an RFC 3339 timestamp, keeping only the date.
/// Anything else is what a DATE column refuses, so it fails as a store error.
pub fn parse_fecha(raw: &str) -> Result<Date, ModelError> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .or_else(|_| DateTime::parse_from_rfc3339(raw).map(|dt| dt.date_naive()))
        .map_err(|_| ModelError::Db(format!("Incorrect date value: '{raw}' for column 'fecha'")))
}
