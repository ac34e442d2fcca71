//! Service layer providing the salon's CRUD operations on top of models.
//! - Repository traits are the seam between handlers and the store.
//! - SeaORM implementations issue one statement per operation.
//! - The only business rule lives in `citas::service`: the creation guard.

pub mod errors;
pub mod runtime;
pub mod wire;
pub mod clientes;
pub mod citas;
#[cfg(test)]
pub mod test_support;
