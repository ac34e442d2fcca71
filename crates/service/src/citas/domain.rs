use serde::{Deserialize, Serialize};
use serde_json::Value;

use models::{cita, errors::ModelError};
use sea_orm::prelude::Date;

use crate::wire::{self, is_present};

pub const MSG_CAMPOS_REQUERIDOS: &str = "Todos los campos son requeridos";

/// Body of POST /citas as received. `estado` is accepted and ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NuevaCitaInput {
    #[serde(default)]
    pub cliente_id: Option<Value>,
    #[serde(default)]
    pub fecha: Option<Value>,
    #[serde(default)]
    pub hora: Option<Value>,
    #[serde(default)]
    pub servicio: Option<Value>,
    #[serde(default)]
    pub estado: Option<Value>,
}

/// Body of PUT /citas/:id. Absent fields are written as NULL.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CitaUpdateInput {
    #[serde(default)]
    pub cliente_id: Option<Value>,
    #[serde(default)]
    pub fecha: Option<Value>,
    #[serde(default)]
    pub hora: Option<Value>,
    #[serde(default)]
    pub estado: Option<Value>,
    #[serde(default)]
    pub servicio: Option<Value>,
}

/// A validated appointment ready to insert.
#[derive(Debug, Clone, PartialEq)]
pub struct NuevaCita {
    pub cliente_id: i32,
    pub fecha: Date,
    pub hora: String,
    pub servicio: String,
}

/// Column values for a full-replace update.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CitaUpdate {
    pub cliente_id: Option<i32>,
    pub fecha: Option<Date>,
    pub hora: Option<String>,
    pub estado: Option<String>,
    pub servicio: Option<String>,
}

impl NuevaCitaInput {
    /// Presence first, then the `servicio` length. Those two are the only
    /// validation errors; values the columns cannot hold fail as store errors.
    pub fn validate(self) -> Result<NuevaCita, ModelError> {
        let (Some(cliente_id), Some(fecha), Some(hora), Some(servicio)) = (
            self.cliente_id.filter(is_present),
            self.fecha.filter(is_present),
            self.hora.filter(is_present),
            self.servicio.filter(is_present),
        ) else {
            return Err(ModelError::Validation(MSG_CAMPOS_REQUERIDOS.into()));
        };
        let servicio = required_text("servicio", servicio)?;
        cita::validate_servicio(&servicio)?;
        Ok(NuevaCita {
            cliente_id: coerce_cliente_id(&cliente_id)?,
            fecha: cita::parse_fecha(&required_text("fecha", fecha)?)?,
            hora: required_text("hora", hora)?,
            servicio,
        })
    }
}

impl CitaUpdateInput {
    /// Binding only; no business rules apply to updates.
    pub fn into_update(self) -> Result<CitaUpdate, ModelError> {
        let cliente_id = match self.cliente_id {
            None | Some(Value::Null) => None,
            Some(v) => Some(coerce_cliente_id(&v)?),
        };
        let fecha = wire::text("fecha", self.fecha)?.as_deref().map(cita::parse_fecha).transpose()?;
        Ok(CitaUpdate {
            cliente_id,
            fecha,
            hora: wire::text("hora", self.hora)?,
            estado: wire::text("estado", self.estado)?,
            servicio: wire::text("servicio", self.servicio)?,
        })
    }
}

fn required_text(column: &str, v: Value) -> Result<String, ModelError> {
    Ok(wire::text(column, Some(v))?.unwrap_or_default())
}

/// Integer binding for `cliente_id`: numbers are truncated and numeric
/// strings parsed. Anything else is refused by the INT column.
pub fn coerce_cliente_id(v: &Value) -> Result<i32, ModelError> {
    let shown = v.as_str().map_or_else(|| v.to_string(), str::to_string);
    let invalid = || ModelError::Db(format!("Incorrect integer value: '{shown}' for column 'cliente_id'"));
    let n = match v {
        Value::Number(n) => match n.as_i64() {
            Some(i) => i,
            None => n.as_f64().filter(|f| f.is_finite()).ok_or_else(invalid)?.trunc() as i64,
        },
        Value::String(s) => s.trim().parse::<i64>().map_err(|_| invalid())?,
        _ => return Err(invalid()),
    };
    i32::try_from(n).map_err(|_| invalid())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn nueva(body: Value) -> Result<NuevaCita, ModelError> {
        serde_json::from_value::<NuevaCitaInput>(body).unwrap().validate()
    }

    fn msg(e: ModelError) -> String {
        match e {
            ModelError::Validation(m) | ModelError::Db(m) => m,
        }
    }

    #[test]
    fn valid_body_is_coerced() {
        let c = nueva(json!({"cliente_id": "7", "fecha": "2024-03-02", "hora": "10:00", "servicio": "Manicura"})).unwrap();
        assert_eq!(c.cliente_id, 7);
        assert_eq!(c.fecha.to_string(), "2024-03-02");
        assert_eq!(c.servicio, "Manicura");
    }

    #[test]
    fn each_missing_field_is_rejected() {
        let full = json!({"cliente_id": 1, "fecha": "2024-03-02", "hora": "10:00", "servicio": "Manicura"});
        for field in ["cliente_id", "fecha", "hora", "servicio"] {
            let mut body = full.clone();
            body.as_object_mut().unwrap().remove(field);
            assert_eq!(msg(nueva(body).unwrap_err()), MSG_CAMPOS_REQUERIDOS, "{field}");

            let mut body = full.clone();
            body[field] = json!("");
            assert_eq!(msg(nueva(body).unwrap_err()), MSG_CAMPOS_REQUERIDOS, "{field} empty");
        }
    }

    #[test]
    fn zero_or_null_cliente_id_counts_as_missing() {
        for id in [json!(0), json!(null)] {
            let body = json!({"cliente_id": id, "fecha": "2024-03-02", "hora": "10:00", "servicio": "Manicura"});
            assert_eq!(msg(nueva(body).unwrap_err()), MSG_CAMPOS_REQUERIDOS);
        }
    }

    #[test]
    fn servicio_length_boundary() {
        let ok = json!({"cliente_id": 1, "fecha": "2024-03-02", "hora": "10:00", "servicio": "s".repeat(30)});
        assert!(nueva(ok).is_ok());
        let long = json!({"cliente_id": 1, "fecha": "2024-03-02", "hora": "10:00", "servicio": "s".repeat(31)});
        assert_eq!(msg(nueva(long).unwrap_err()), "El nombre del servicio es demasiado largo");
    }

    #[test]
    fn non_numeric_cliente_id_is_a_store_failure() {
        for v in [json!("abc"), json!(true), json!(1e12)] {
            assert!(matches!(coerce_cliente_id(&v), Err(ModelError::Db(_))), "{v}");
        }
        assert_eq!(coerce_cliente_id(&json!(3.9)).unwrap(), 3);
        assert_eq!(coerce_cliente_id(&json!(" 12 ")).unwrap(), 12);
    }

    #[test]
    fn update_keeps_omissions_as_null() {
        let u: CitaUpdateInput = serde_json::from_value(json!({"cliente_id": "2", "estado": ""})).unwrap();
        let u = u.into_update().unwrap();
        assert_eq!(u, CitaUpdate { cliente_id: Some(2), estado: Some(String::new()), ..Default::default() });
    }

    #[test]
    fn unparseable_fecha_is_a_store_failure_not_a_validation_error() {
        let u: CitaUpdateInput = serde_json::from_value(json!({"fecha": "mañana"})).unwrap();
        assert!(matches!(u.into_update(), Err(ModelError::Db(_))));

        let body = json!({"cliente_id": 1, "fecha": "mañana", "hora": "10:00", "servicio": "Manicura"});
        assert!(matches!(nueva(body), Err(ModelError::Db(_))));
        let body = json!({"cliente_id": "abc", "fecha": "2024-03-02", "hora": "10:00", "servicio": "Manicura"});
        assert!(matches!(nueva(body), Err(ModelError::Db(_))));
    }

    #[test]
    fn scalar_fields_are_bound_as_text() {
        let body = json!({"cliente_id": 1, "fecha": "2024-03-02", "hora": 1030, "servicio": "Manicura"});
        assert_eq!(nueva(body).unwrap().hora, "1030");

        let u: CitaUpdateInput =
            serde_json::from_value(json!({"hora": 9, "estado": "Completada", "servicio": ["x"]})).unwrap();
        assert!(matches!(u.into_update(), Err(ModelError::Db(_))));
    }
}
