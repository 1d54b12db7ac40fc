// FICHIER : backend/src/utils/mod.rs

pub mod config;
pub mod env;
pub mod error;
pub mod fs;
pub mod json;
pub mod logger;

// --> Config & Erreurs
pub use config::AppConfig;
pub use error::{AppError, Result};
pub use logger::init_logging;

/// **Le Prélude** : À utiliser via `use crate::utils::prelude::*;`
pub mod prelude {
    pub use super::config::AppConfig;
    pub use super::error::{AppError, Result};
    pub use super::json::{json, Map, Value};
    pub use tracing::{debug, error, info, instrument, warn};
}
