//! Static catalog of the services the salon offers. Not persisted.

use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Servicio {
    pub id: i32,
    pub nombre: &'static str,
}

pub const CATALOGO: [Servicio; 4] = [
    Servicio { id: 1, nombre: "Corte de cabello" },
    Servicio { id: 2, nombre: "Coloración" },
    Servicio { id: 3, nombre: "Manicura" },
    Servicio { id: 4, nombre: "Pedicura" },
];
