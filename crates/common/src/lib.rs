//! Helpers shared by the salon crates: logging setup, startup checks and
//! the small response payloads every HTTP surface returns.

pub mod types;
pub mod utils;
pub mod env;
