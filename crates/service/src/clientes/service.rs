use std::sync::Arc;
use tracing::{debug, info, instrument};

use models::cliente;

use crate::clientes::{domain::ClienteInput, repository::ClienteRepository};
use crate::errors::ServiceError;

/// Pass-through service over a `ClienteRepository`.
#[derive(Clone)]
pub struct ClienteService {
    repo: Arc<dyn ClienteRepository>,
}

impl ClienteService {
    pub fn new(repo: Arc<dyn ClienteRepository>) -> Self { Self { repo } }

    pub async fn list(&self) -> Result<Vec<cliente::Model>, ServiceError> {
        self.repo.list().await
    }

    #[instrument(skip_all)]
    pub async fn create(&self, input: ClienteInput) -> Result<i32, ServiceError> {
        let id = self.repo.create(input.into_fields()?).await?;
        info!(cliente_id = id, "cliente_created");
        Ok(id)
    }

    #[instrument(skip(self, input))]
    pub async fn update(&self, id: i32, input: ClienteInput) -> Result<(), ServiceError> {
        let rows = self.repo.update(id, input.into_fields()?).await?;
        if rows == 0 {
            debug!(cliente_id = id, "update matched no cliente");
        }
        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        let rows = self.repo.delete(id).await?;
        if rows == 0 {
            debug!(cliente_id = id, "delete matched no cliente");
        }
        Ok(())
    }
}
