use sea_orm_migration::prelude::*;

use crate::m20240101_000002_create_citas::Citas;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Citas: lookups by client
        manager
            .create_index(
                Index::create()
                    .name("idx_citas_cliente")
                    .table(Citas::Table)
                    .col(Citas::ClienteId)
                    .to_owned(),
            )
            .await?;

        // Citas: agenda ordering
        manager
            .create_index(
                Index::create()
                    .name("idx_citas_fecha_hora")
                    .table(Citas::Table)
                    .col(Citas::Fecha)
                    .col(Citas::Hora)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_citas_fecha_hora").table(Citas::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_citas_cliente").table(Citas::Table).to_owned())
            .await
    }
}
