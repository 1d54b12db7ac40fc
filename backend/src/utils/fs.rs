// FICHIER : backend/src/utils/fs.rs

use crate::utils::{json, AppError, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::instrument;

// --- RE-EXPORTS (Isolation de la couche OS) ---
pub use std::path::{Path, PathBuf};

/// Indique si un chemin existe (erreurs d'accès => `false`).
pub async fn exists(path: &Path) -> bool {
    fs::try_exists(path).await.unwrap_or(false)
}

/// Crée le répertoire (et ses parents) s'il n'existe pas.
pub async fn ensure_dir(path: &Path) -> Result<()> {
    fs::create_dir_all(path)
        .await
        .map_err(|e| AppError::fs(path, e))
}

pub async fn read_to_string(path: &Path) -> Result<String> {
    fs::read_to_string(path)
        .await
        .map_err(|e| AppError::fs(path, e))
}

pub async fn read_dir(path: &Path) -> Result<fs::ReadDir> {
    fs::read_dir(path).await.map_err(|e| AppError::fs(path, e))
}

#[instrument(skip(path), fields(path = ?path))]
pub async fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = read_to_string(path).await?;
    json::parse(&content)
}

// --- ÉCRITURE ATOMIQUE ---

/// Écriture atomique sécurisée (write -> sync -> rename).
#[instrument(skip(content, path), fields(path = ?path))]
pub async fn write_atomic(path: &Path, content: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !exists(parent).await {
            ensure_dir(parent).await?;
        }
    }

    let tmp_path = path.with_extension("json.tmp");
    {
        let mut file = fs::File::create(&tmp_path)
            .await
            .map_err(|e| AppError::fs(&tmp_path, e))?;
        file.write_all(content)
            .await
            .map_err(|e| AppError::fs(&tmp_path, e))?;
        // On force l'écriture physique avant le rename
        file.sync_all()
            .await
            .map_err(|e| AppError::fs(&tmp_path, e))?;
    }

    if let Err(e) = fs::rename(&tmp_path, path).await {
        let _ = fs::remove_file(&tmp_path).await;
        return Err(AppError::fs(path, e));
    }
    Ok(())
}

/// Sérialise en JSON indenté puis écrit de manière atomique.
pub async fn write_json_atomic<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let content = json::stringify_pretty(value)?;
    write_atomic(path, content.as_bytes()).await
}
