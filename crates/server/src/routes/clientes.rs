use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    Json,
};
use tracing::info;

use common::types::{CreatedId, Message};
use models::cliente;
use service::clientes::domain::ClienteInput;

use crate::{errors::JsonApiError, state::ServerState};

#[utoipa::path(
    get, path = "/clientes", tag = "clientes",
    responses(
        (status = 200, description = "OK", body = [crate::openapi::ClienteDoc]),
        (status = 500, description = "Store failure", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<cliente::Model>>, JsonApiError> {
    let list = state.clientes.list().await?;
    info!(count = list.len(), "list clientes");
    Ok(Json(list))
}

#[utoipa::path(
    post, path = "/clientes", tag = "clientes",
    request_body = crate::openapi::ClienteInputDoc,
    responses(
        (status = 200, description = "Created", body = crate::openapi::CreatedIdDoc),
        (status = 500, description = "Store failure", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    payload: Result<Json<ClienteInput>, JsonRejection>,
) -> Result<Json<CreatedId>, JsonApiError> {
    let Json(input) = payload?;
    let id = state.clientes.create(input).await?;
    Ok(Json(CreatedId { id }))
}

#[utoipa::path(
    put, path = "/clientes/{id}", tag = "clientes",
    params(("id" = i32, Path, description = "Cliente ID")),
    request_body = crate::openapi::ClienteInputDoc,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::MessageDoc),
        (status = 400, description = "Invalid id or body", body = crate::openapi::ErrorDoc),
        (status = 500, description = "Store failure", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn update(
    State(state): State<ServerState>,
    id: Result<Path<i32>, PathRejection>,
    payload: Result<Json<ClienteInput>, JsonRejection>,
) -> Result<Json<Message>, JsonApiError> {
    let Path(id) = id?;
    let Json(input) = payload?;
    state.clientes.update(id, input).await?;
    Ok(Json(Message::new("Cliente actualizado correctamente")))
}

#[utoipa::path(
    delete, path = "/clientes/{id}", tag = "clientes",
    params(("id" = i32, Path, description = "Cliente ID")),
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
    state.clientes.delete(id).await?;
    Ok(Json(Message::new("Cliente eliminado correctamente")))
}
