//! Citas: wire inputs and coercion, repository and service.

pub mod domain;
pub mod repository;
pub mod service;

pub use service::CitaService;
