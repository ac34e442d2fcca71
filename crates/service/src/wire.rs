//! Loose JSON bodies into column values.
//!
//! Request fields arrive as arbitrary JSON. Scalars are bound the way a SQL
//! driver would bind them; values no column can hold surface as
//! `ModelError::Db`, the same class as a statement the store rejected.

use serde_json::Value;

use models::errors::ModelError;

/// Absent, `null`, `false`, `0` and `""` all count as not provided.
pub fn is_present(v: &Value) -> bool {
    match v {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Text for a string column. `null` and absence stay NULL.
pub fn text(column: &str, v: Option<Value>) -> Result<Option<String>, ModelError> {
    match v {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(Value::Number(n)) => Ok(Some(n.to_string())),
        Some(Value::Bool(b)) => Ok(Some(u8::from(b).to_string())),
        Some(other) => Err(ModelError::Db(format!("Incorrect string value: '{other}' for column '{column}'"))),
    }
}
