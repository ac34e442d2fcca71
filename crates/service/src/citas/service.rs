use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

use models::cita;

use crate::citas::domain::{CitaUpdateInput, NuevaCitaInput};
use crate::citas::repository::CitaRepository;
use crate::errors::ServiceError;

/// Application service for appointments. Creation is the only operation
/// with rules: required fields, the `servicio` limit and the initial estado.
#[derive(Clone)]
pub struct CitaService {
    repo: Arc<dyn CitaRepository>,
}

impl CitaService {
    pub fn new(repo: Arc<dyn CitaRepository>) -> Self { Self { repo } }

    pub async fn list(&self) -> Result<Vec<cita::Model>, ServiceError> {
        self.repo.list().await
    }

    pub async fn get(&self, id: i32) -> Result<cita::Model, ServiceError> {
        self.repo.get(id).await?.ok_or_else(|| ServiceError::not_found("cita"))
    }

    #[instrument(skip_all)]
    pub async fn create(&self, input: NuevaCitaInput) -> Result<i32, ServiceError> {
        let nueva = input.validate().map_err(|e| {
            warn!(err = %e, "cita rejected");
            e
        })?;
        let cliente_id = nueva.cliente_id;
        let id = self.repo.create(nueva, cita::ESTADO_PENDIENTE).await?;
        info!(cita_id = id, cliente_id, "cita_created");
        Ok(id)
    }

    #[instrument(skip(self, input))]
    pub async fn update(&self, id: i32, input: CitaUpdateInput) -> Result<(), ServiceError> {
        let rows = self.repo.update(id, input.into_update()?).await?;
        if rows == 0 {
            debug!(cita_id = id, "update matched no cita");
        }
        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        let rows = self.repo.delete(id).await?;
        if rows == 0 {
            debug!(cita_id = id, "delete matched no cita");
        }
        Ok(())
    }
}
