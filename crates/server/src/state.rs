use std::sync::Arc;

use sea_orm::DatabaseConnection;
use service::{
    citas::{repository::SeaOrmCitaRepository, CitaService},
    clientes::{repository::SeaOrmClienteRepository, ClienteService},
};

/// Handler state: one service per entity, each over an injected repository.
#[derive(Clone)]
pub struct ServerState {
    pub clientes: ClienteService,
    pub citas: CitaService,
}

impl ServerState {
    /// Wire SeaORM repositories sharing one connection pool.
    pub fn from_db(db: DatabaseConnection) -> Self {
        Self {
            clientes: ClienteService::new(Arc::new(SeaOrmClienteRepository { db: db.clone() })),
            citas: CitaService::new(Arc::new(SeaOrmCitaRepository { db })),
        }
    }
}
