//! Clientes: domain input, repository and service.

pub mod domain;
pub mod repository;
pub mod service;

pub use service::ClienteService;
