// FICHIER : backend/src/json_db/storage/mod.rs

pub mod file_storage;

use crate::json_db::transactions::LockManager;
use crate::utils::{AppError, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::{Component, Path, PathBuf};

pub const COLLECTION_EXTENSION: &str = "json";

// --- CONFIGURATION ---

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonDbConfig {
    pub data_root: PathBuf,
}

impl JsonDbConfig {
    pub fn new(data_root: PathBuf) -> Self {
        Self { data_root }
    }

    /// Fichier d'une catégorie : {data_root}/{category}.json
    pub fn collection_path(&self, category: &str) -> Result<PathBuf> {
        validate_category(category)?;
        Ok(self
            .data_root
            .join(format!("{category}.{COLLECTION_EXTENSION}")))
    }
}

/// Une catégorie doit rester un simple nom de fichier dans `data_root`.
pub fn validate_category(category: &str) -> Result<()> {
    let invalid = category.is_empty()
        || category.contains(['/', '\\', '\0'])
        || !matches!(
            Path::new(category).components().collect::<Vec<_>>().as_slice(),
            [Component::Normal(_)]
        );

    if invalid {
        return Err(AppError::Database(format!(
            "catégorie invalide '{category}'"
        )));
    }
    Ok(())
}

// --- MOTEUR DE STOCKAGE ---

/// Accès disque partagé par toutes les requêtes : configuration + verrous par catégorie.
/// Aucun cache : chaque opération relit le fichier.
#[derive(Debug, Clone)]
pub struct StorageEngine {
    pub config: JsonDbConfig,
    pub locks: LockManager,
}

impl StorageEngine {
    pub fn new(config: JsonDbConfig) -> Self {
        Self {
            config,
            locks: LockManager::new(),
        }
    }

    pub async fn read_collection(&self, category: &str) -> Result<Vec<Value>> {
        file_storage::read_collection(&self.config, category).await
    }

    pub async fn write_collection(&self, category: &str, docs: &[Value]) -> Result<()> {
        file_storage::write_collection(&self.config, category, docs).await
    }
}
