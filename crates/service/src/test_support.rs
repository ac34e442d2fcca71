#![cfg(test)]
use std::sync::Mutex;

use async_trait::async_trait;
use configs::DatabaseConfig;
use migration::MigratorTrait;
use models::{cita, db::connect_with_config};
use sea_orm::DatabaseConnection;

use crate::citas::domain::{CitaUpdate, NuevaCita};
use crate::citas::repository::CitaRepository;
use crate::errors::ServiceError;

/// Migrated in-memory SQLite database private to the calling test.
/// One connection only: every SQLite memory connection is its own database.
pub async fn memory_db() -> Result<DatabaseConnection, anyhow::Error> {
    let cfg = DatabaseConfig {
        url: "sqlite::memory:".into(),
        max_connections: 1,
        min_connections: 1,
        ..Default::default()
    };
    let db = connect_with_config(&cfg).await?;
    migration::Migrator::up(&db, None).await?;
    Ok(db)
}

/// Vec-backed `CitaRepository` double that counts inserts.
#[derive(Default)]
pub struct MemoryCitaRepository {
    rows: Mutex<Vec<cita::Model>>,
}

impl MemoryCitaRepository {
    pub fn inserts(&self) -> usize {
        self.rows.lock().unwrap().len()
    }
}

#[async_trait]
impl CitaRepository for MemoryCitaRepository {
    async fn list(&self) -> Result<Vec<cita::Model>, ServiceError> {
        Ok(self.rows.lock().unwrap().clone())
    }

    async fn get(&self, id: i32) -> Result<Option<cita::Model>, ServiceError> {
        Ok(self.rows.lock().unwrap().iter().find(|c| c.id == id).cloned())
    }

    async fn create(&self, nueva: NuevaCita, estado: &str) -> Result<i32, ServiceError> {
        let mut rows = self.rows.lock().unwrap();
        let id = rows.iter().map(|c| c.id).max().unwrap_or(0) + 1;
        rows.push(cita::Model {
            id,
            cliente_id: nueva.cliente_id,
            fecha: nueva.fecha,
            hora: nueva.hora,
            servicio: nueva.servicio,
            estado: estado.to_string(),
        });
        Ok(id)
    }

    async fn update(&self, id: i32, update: CitaUpdate) -> Result<u64, ServiceError> {
        let mut rows = self.rows.lock().unwrap();
        let Some(row) = rows.iter_mut().find(|c| c.id == id) else { return Ok(0) };
        let (Some(cliente_id), Some(fecha), Some(hora), Some(estado), Some(servicio)) =
            (update.cliente_id, update.fecha, update.hora, update.estado, update.servicio)
        else {
            return Err(ServiceError::Db("NOT NULL constraint failed".into()));
        };
        *row = cita::Model { id, cliente_id, fecha, hora, servicio, estado };
        Ok(1)
    }

    async fn delete(&self, id: i32) -> Result<u64, ServiceError> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|c| c.id != id);
        Ok((before - rows.len()) as u64)
    }
}
