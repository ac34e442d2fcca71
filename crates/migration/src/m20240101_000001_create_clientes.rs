//! Create `Clientes` table.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Clientes::Table)
                    .if_not_exists()
                    .col(pk_auto(Clientes::Id))
                    .col(string_len(Clientes::Nombre, 100))
                    .col(string_len_null(Clientes::Telefono, 30))
                    .col(string_len_null(Clientes::Email, 100))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Clientes::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
pub(crate) enum Clientes {
    #[sea_orm(iden = "Clientes")]
    Table,
    Id,
    Nombre,
    Telefono,
    Email,
}
