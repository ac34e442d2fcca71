use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct ErrorDoc { pub error: String }

#[derive(ToSchema)]
pub struct MessageDoc { pub message: String }

#[derive(ToSchema)]
pub struct CreatedIdDoc { pub id: i32 }

#[derive(ToSchema)]
pub struct ServicioDoc { pub id: i32, pub nombre: String }

#[derive(ToSchema)]
pub struct ClienteDoc {
    pub id: i32,
    pub nombre: String,
    pub telefono: Option<String>,
    pub email: Option<String>,
}

#[derive(ToSchema)]
pub struct ClienteInputDoc {
    pub nombre: String,
    pub telefono: Option<String>,
    pub email: Option<String>,
}

#[derive(ToSchema)]
pub struct CitaDoc {
    pub id: i32,
    pub cliente_id: i32,
    /// `YYYY-MM-DD`
    #[schema(example = "2024-05-17")]
    pub fecha: String,
    #[schema(example = "10:30")]
    pub hora: String,
    pub servicio: String,
    #[schema(example = "Pendiente")]
    pub estado: String,
}

/// `cliente_id` may also be a numeric string. `estado` is ignored.
#[derive(ToSchema)]
pub struct NuevaCitaDoc {
    pub cliente_id: i32,
    pub fecha: String,
    pub hora: String,
    /// At most 30 characters.
    #[schema(max_length = 30)]
    pub servicio: String,
}

/// Full replace: omitted fields are written as NULL.
#[derive(ToSchema)]
pub struct CitaUpdateDoc {
    pub cliente_id: i32,
    pub fecha: String,
    pub hora: String,
    pub estado: String,
    pub servicio: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::servicios::list,
        crate::routes::clientes::list,
        crate::routes::clientes::create,
        crate::routes::clientes::update,
        crate::routes::clientes::delete,
        crate::routes::citas::list,
        crate::routes::citas::get,
        crate::routes::citas::create,
        crate::routes::citas::update,
        crate::routes::citas::delete,
    ),
    components(
        schemas(
            HealthResponse,
            ErrorDoc,
            MessageDoc,
            CreatedIdDoc,
            ServicioDoc,
            ClienteDoc,
            ClienteInputDoc,
            CitaDoc,
            NuevaCitaDoc,
            CitaUpdateDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "servicios"),
        (name = "clientes"),
        (name = "citas")
    )
)]
pub struct ApiDoc;
