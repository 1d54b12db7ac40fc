// FICHIER : backend/src/lib.rs

pub mod api;
pub mod json_db;
pub mod utils;

pub use api::{router, AppState};
