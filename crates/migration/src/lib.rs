//! Migrator for the salon schema. Indexes are applied last.
pub use sea_orm_migration::prelude::*;

mod m20240101_000001_create_clientes;
mod m20240101_000002_create_citas;
mod m20240101_000003_add_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_clientes::Migration),
            Box::new(m20240101_000002_create_citas::Migration),
            Box::new(m20240101_000003_add_indexes::Migration),
        ]
    }
}
