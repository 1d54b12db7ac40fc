// FICHIER : backend/src/json_db/storage/file_storage.rs

//! Persistance brute : une catégorie = un tableau JSON dans un fichier.
//! Lecture intégrale, réécriture intégrale (atomique), aucune logique métier ici.

use crate::json_db::storage::{validate_category, JsonDbConfig, COLLECTION_EXTENSION};
use crate::utils::{fs, AppError, Result};
use serde_json::Value;

/// Lit le fichier de la catégorie et exige un tableau JSON.
pub async fn read_collection(cfg: &JsonDbConfig, category: &str) -> Result<Vec<Value>> {
    let path = cfg.collection_path(category)?;
    match fs::read_json::<Value>(&path).await? {
        Value::Array(docs) => Ok(docs),
        _ => Err(AppError::Database(format!(
            "le contenu de '{}' n'est pas un tableau JSON",
            path.display()
        ))),
    }
}

/// Réécrit la collection complète (JSON indenté, 2 espaces).
pub async fn write_collection(cfg: &JsonDbConfig, category: &str, docs: &[Value]) -> Result<()> {
    let path = cfg.collection_path(category)?;
    fs::write_json_atomic(&path, &docs).await
}

/// Crée une collection vide (`[]`) si le fichier n'existe pas.
/// Renvoie `true` si le fichier a été créé.
pub async fn create_collection(cfg: &JsonDbConfig, category: &str) -> Result<bool> {
    let path = cfg.collection_path(category)?;
    if fs::exists(&path).await {
        return Ok(false);
    }
    fs::write_json_atomic(&path, &Vec::<Value>::new()).await?;
    Ok(true)
}

/// Liste les catégories présentes dans `data_root` (triées).
pub async fn list_categories(cfg: &JsonDbConfig) -> Result<Vec<String>> {
    let mut out = Vec::new();
    if !fs::exists(&cfg.data_root).await {
        return Ok(out);
    }
    let mut entries = fs::read_dir(&cfg.data_root).await?;
    while let Some(e) = entries
        .next_entry()
        .await
        .map_err(|e| AppError::fs(&cfg.data_root, e))?
    {
        let p = e.path();
        if p.is_file() && p.extension().and_then(|s| s.to_str()) == Some(COLLECTION_EXTENSION) {
            if let Some(stem) = p.file_stem().and_then(|s| s.to_str()) {
                if validate_category(stem).is_ok() {
                    out.push(stem.to_string());
                }
            }
        }
    }
    out.sort();
    Ok(out)
}
