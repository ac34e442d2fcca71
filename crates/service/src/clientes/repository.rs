use async_trait::async_trait;
use sea_orm::{
    sea_query::Expr, ActiveValue::NotSet, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
    ColumnTrait, Set,
};

use models::cliente;

use crate::clientes::domain::ClienteFields;
use crate::errors::ServiceError;

#[async_trait]
pub trait ClienteRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<cliente::Model>, ServiceError>;
    async fn create(&self, input: ClienteFields) -> Result<i32, ServiceError>;
    /// Full replace of the three columns; returns affected rows.
    async fn update(&self, id: i32, input: ClienteFields) -> Result<u64, ServiceError>;
    async fn delete(&self, id: i32) -> Result<u64, ServiceError>;
}

/// SeaORM-backed repository implementation.
pub struct SeaOrmClienteRepository {
    pub db: DatabaseConnection,
}

#[async_trait]
impl ClienteRepository for SeaOrmClienteRepository {
    async fn list(&self) -> Result<Vec<cliente::Model>, ServiceError> {
        cliente::Entity::find()
            .order_by_asc(cliente::Column::Id)
            .all(&self.db)
            .await
            .map_err(ServiceError::db)
    }

    async fn create(&self, input: ClienteFields) -> Result<i32, ServiceError> {
        let am = cliente::ActiveModel {
            id: NotSet,
            nombre: input.nombre.map_or(NotSet, Set),
            telefono: Set(input.telefono),
            email: Set(input.email),
        };
        let res = cliente::Entity::insert(am).exec(&self.db).await.map_err(ServiceError::db)?;
        Ok(res.last_insert_id)
    }

    async fn update(&self, id: i32, input: ClienteFields) -> Result<u64, ServiceError> {
        let res = cliente::Entity::update_many()
            .col_expr(cliente::Column::Nombre, Expr::value(input.nombre))
            .col_expr(cliente::Column::Telefono, Expr::value(input.telefono))
            .col_expr(cliente::Column::Email, Expr::value(input.email))
            .filter(cliente::Column::Id.eq(id))
            .exec(&self.db)
            .await
            .map_err(ServiceError::db)?;
        Ok(res.rows_affected)
    }

    async fn delete(&self, id: i32) -> Result<u64, ServiceError> {
        let res = cliente::Entity::delete_by_id(id).exec(&self.db).await.map_err(ServiceError::db)?;
        Ok(res.rows_affected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::memory_db;

    fn input(nombre: Option<&str>, telefono: Option<&str>, email: Option<&str>) -> ClienteFields {
        ClienteFields {
            nombre: nombre.map(Into::into),
            telefono: telefono.map(Into::into),
            email: email.map(Into::into),
        }
    }

    #[tokio::test]
    async fn create_then_list_returns_exact_fields() -> anyhow::Result<()> {
        let repo = SeaOrmClienteRepository { db: memory_db().await? };
        let id = repo.create(input(Some("Ana"), Some("555"), Some("a@x.com"))).await?;
        assert_eq!(id, 1);

        let all = repo.list().await?;
        assert_eq!(all, vec![cliente::Model {
            id: 1,
            nombre: "Ana".into(),
            telefono: Some("555".into()),
            email: Some("a@x.com".into()),
        }]);
        Ok(())
    }

    #[tokio::test]
    async fn missing_nombre_is_a_store_failure() -> anyhow::Result<()> {
        let repo = SeaOrmClienteRepository { db: memory_db().await? };
        let err = repo.create(input(None, Some("555"), None)).await.unwrap_err();
        assert!(matches!(err, ServiceError::Db(_)));
        assert!(repo.list().await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn update_replaces_all_columns() -> anyhow::Result<()> {
        let repo = SeaOrmClienteRepository { db: memory_db().await? };
        let id = repo.create(input(Some("Ana"), Some("555"), Some("a@x.com"))).await?;

        let n = repo.update(id, input(Some("Ana María"), None, None)).await?;
        assert_eq!(n, 1);
        let all = repo.list().await?;
        assert_eq!(all[0].nombre, "Ana María");
        assert_eq!(all[0].telefono, None);
        assert_eq!(all[0].email, None);
        Ok(())
    }

    #[tokio::test]
    async fn update_and_delete_of_unknown_id_touch_nothing() -> anyhow::Result<()> {
        let repo = SeaOrmClienteRepository { db: memory_db().await? };
        assert_eq!(repo.update(42, input(Some("X"), None, None)).await?, 0);
        assert_eq!(repo.delete(42).await?, 0);
        Ok(())
    }

    #[tokio::test]
    async fn delete_removes_only_that_row() -> anyhow::Result<()> {
        let repo = SeaOrmClienteRepository { db: memory_db().await? };
        let a = repo.create(input(Some("Ana"), None, None)).await?;
        let b = repo.create(input(Some("Bea"), None, None)).await?;
        assert_eq!(repo.delete(a).await?, 1);
        let ids: Vec<i32> = repo.list().await?.into_iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![b]);
        Ok(())
    }
}
