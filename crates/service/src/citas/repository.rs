use async_trait::async_trait;
use sea_orm::{
    sea_query::Expr, ActiveValue::NotSet, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
    ColumnTrait, Set,
};

use models::cita;

use crate::citas::domain::{CitaUpdate, NuevaCita};
use crate::errors::ServiceError;

#[async_trait]
pub trait CitaRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<cita::Model>, ServiceError>;
    async fn get(&self, id: i32) -> Result<Option<cita::Model>, ServiceError>;
    /// Insert with the given `estado`; returns the new id.
    async fn create(&self, cita: NuevaCita, estado: &str) -> Result<i32, ServiceError>;
    /// Full replace of the five mutable columns; returns affected rows.
    async fn update(&self, id: i32, update: CitaUpdate) -> Result<u64, ServiceError>;
    async fn delete(&self, id: i32) -> Result<u64, ServiceError>;
}

/// SeaORM-backed repository implementation.
pub struct SeaOrmCitaRepository {
    pub db: DatabaseConnection,
}

#[async_trait]
impl CitaRepository for SeaOrmCitaRepository {
    async fn list(&self) -> Result<Vec<cita::Model>, ServiceError> {
        cita::Entity::find()
            .order_by_asc(cita::Column::Id)
            .all(&self.db)
            .await
            .map_err(ServiceError::db)
    }

    async fn get(&self, id: i32) -> Result<Option<cita::Model>, ServiceError> {
        cita::Entity::find_by_id(id).one(&self.db).await.map_err(ServiceError::db)
    }

    async fn create(&self, cita: NuevaCita, estado: &str) -> Result<i32, ServiceError> {
        let am = cita::ActiveModel {
            id: NotSet,
            cliente_id: Set(cita.cliente_id),
            fecha: Set(cita.fecha),
            hora: Set(cita.hora),
            servicio: Set(cita.servicio),
            estado: Set(estado.to_string()),
        };
        let res = cita::Entity::insert(am).exec(&self.db).await.map_err(ServiceError::db)?;
        Ok(res.last_insert_id)
    }

    async fn update(&self, id: i32, update: CitaUpdate) -> Result<u64, ServiceError> {
        let res = cita::Entity::update_many()
            .col_expr(cita::Column::ClienteId, Expr::value(update.cliente_id))
            .col_expr(cita::Column::Fecha, Expr::value(update.fecha))
            .col_expr(cita::Column::Hora, Expr::value(update.hora))
            .col_expr(cita::Column::Estado, Expr::value(update.estado))
            .col_expr(cita::Column::Servicio, Expr::value(update.servicio))
            .filter(cita::Column::Id.eq(id))
            .exec(&self.db)
            .await
            .map_err(ServiceError::db)?;
        Ok(res.rows_affected)
    }

    async fn delete(&self, id: i32) -> Result<u64, ServiceError> {
        let res = cita::Entity::delete_by_id(id).exec(&self.db).await.map_err(ServiceError::db)?;
        Ok(res.rows_affected)
    }
}
