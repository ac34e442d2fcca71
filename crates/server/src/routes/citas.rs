use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    Json,
};
use tracing::info;

use common::types::{CreatedId, Message};
use models::cita;
use service::{citas::domain::{CitaUpdateInput, NuevaCitaInput}, errors::ServiceError};

use crate::{errors::JsonApiError, state::ServerState};

#[utoipa::path(
    get, path = "/citas", tag = "citas",
    responses(
        (status = 200, description = "OK", body = [crate::openapi::CitaDoc]),
        (status = 500, description = "Store failure", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<cita::Model>>, JsonApiError> {
    let list = state.citas.list().await?;
    info!(count = list.len(), "list citas");
    Ok(Json(list))
}

#[utoipa::path(
    get, path = "/citas/{id}", tag = "citas",
    params(("id" = i32, Path, description = "Cita ID")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::CitaDoc),
        (status = 404, description = "Not Found", body = crate::openapi::MessageDoc),
        (status = 500, description = "Store failure", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn get(
    State(state): State<ServerState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<Json<cita::Model>, JsonApiError> {
    // a non-numeric id can never match a row
    let Ok(Path(id)) = id else {
        return Err(JsonApiError::not_found("Cita no encontrada"));
    };
    match state.citas.get(id).await {
        Ok(c) => Ok(Json(c)),
        Err(ServiceError::NotFound(_)) => Err(JsonApiError::not_found("Cita no encontrada")),
        Err(e) => Err(e.into()),
    }
}

#[utoipa::path(
    post, path = "/citas", tag = "citas",
    request_body = crate::openapi::NuevaCitaDoc,
    responses(
        (status = 200, description = "Created", body = crate::openapi::CreatedIdDoc),
        (status = 400, description = "Missing field or servicio too long", body = crate::openapi::ErrorDoc),
        (status = 500, description = "Store failure", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    payload: Result<Json<NuevaCitaInput>, JsonRejection>,
) -> Result<Json<CreatedId>, JsonApiError> {
    let Json(input) = payload?;
    let id = state.citas.create(input).await?;
    Ok(Json(CreatedId { id }))
}

#[utoipa::path(
    put, path = "/citas/{id}", tag = "citas",
    params(("id" = i32, Path, description = "Cita ID")),
    request_body = crate::openapi::CitaUpdateDoc,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::MessageDoc),
        (status = 400, description = "Invalid id or body", body = crate::openapi::ErrorDoc),
        (status = 500, description = "Store failure", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn update(
    State(state): State<ServerState>,
    id: Result<Path<i32>, PathRejection>,
    payload: Result<Json<CitaUpdateInput>, JsonRejection>,
) -> Result<Json<Message>, JsonApiError> {
    let Path(id) = id?;
    let Json(input) = payload?;
    state.citas.update(id, input).await?;
    Ok(Json(Message::new("Cita actualizada correctamente")))
}

#[utoipa::path(
    delete, path = "/citas/{id}", tag = "citas",
    params(("id" = i32, Path, description = "Cita ID")),
    responses(
        (status = 200, description = "Deleted", body = crate::openapi::MessageDoc),
        (status = 400, description = "Invalid id", body = crate::openapi::ErrorDoc),
        (status = 500, description = "Store failure", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn delete(
    State(state): State<ServerState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<Json<Message>, JsonApiError> {
    let Path(id) = id?;
    state.citas.delete(id).await?;
    Ok(Json(Message::new("Cita eliminada correctamente")))
}
