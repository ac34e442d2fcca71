//! Create `Citas` table.
//!
//! `cliente_id` is stored without a foreign-key constraint; deleting a
//! client leaves its appointments in place.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Citas::Table)
                    .if_not_exists()
                    .col(pk_auto(Citas::Id))
                    .col(integer(Citas::ClienteId))
                    .col(date(Citas::Fecha))
                    .col(string_len(Citas::Hora, 16))
                    .col(string(Citas::Servicio))
                    .col(string_len(Citas::Estado, 32).default("Pendiente"))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Citas::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
pub(crate) enum Citas {
    #[sea_orm(iden = "Citas")]
    Table,
    Id,
    ClienteId,
    Fecha,
    Hora,
    Servicio,
    Estado,
}
