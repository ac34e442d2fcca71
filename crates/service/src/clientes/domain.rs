use serde::{Deserialize, Serialize};
use serde_json::Value;

use models::errors::ModelError;

use crate::wire;

/// Body of POST and PUT /clientes. Every field is optional on the wire;
/// an absent `nombre` reaches the store as NULL and is rejected there.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClienteInput {
    #[serde(default)]
    pub nombre: Option<Value>,
    #[serde(default)]
    pub telefono: Option<Value>,
    #[serde(default)]
    pub email: Option<Value>,
}

/// Column values for an insert or a full-replace update.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ClienteFields {
    pub nombre: Option<String>,
    pub telefono: Option<String>,
    pub email: Option<String>,
}

impl ClienteInput {
    pub fn into_fields(self) -> Result<ClienteFields, ModelError> {
        Ok(ClienteFields {
            nombre: wire::text("nombre", self.nombre)?,
            telefono: wire::text("telefono", self.telefono)?,
            email: wire::text("email", self.email)?,
        })
    }
}
