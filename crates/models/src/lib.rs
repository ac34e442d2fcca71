pub mod errors;
pub mod db;
pub mod cliente;
pub mod cita;
pub mod servicio;

#[cfg(test)]
mod tests;
