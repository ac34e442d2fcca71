use axum::Json;
use models::servicio::{self, Servicio};

/// Static service catalog used by the appointment form.
#[utoipa::path(get, path = "/servicios", tag = "servicios", responses((status = 200, description = "OK", body = [crate::openapi::ServicioDoc])))]
pub async fn list() -> Json<Vec<Servicio>> {
    Json(servicio::CATALOGO.to_vec())
}
