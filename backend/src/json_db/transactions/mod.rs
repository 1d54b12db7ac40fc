// FICHIER : backend/src/json_db/transactions/mod.rs

pub mod lock_manager;

pub use lock_manager::{CategoryGuard, LockManager};
