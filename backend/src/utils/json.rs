// FICHIER : backend/src/utils/json.rs

use crate::utils::{AppError, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;

// --- RE-EXPORTS (Single Source of Truth pour le JSON) ---
pub use serde_json::{json, Map, Value};

/// Parse une chaîne JSON en un type T.
pub fn parse<T: DeserializeOwned>(s: &str) -> Result<T> {
    serde_json::from_str(s).map_err(AppError::Serialization)
}

/// Convertit un type T en chaîne JSON formatée (indentation 2 espaces, sans saut de ligne final).
pub fn stringify_pretty<T: Serialize>(v: &T) -> Result<String> {
    serde_json::to_string_pretty(v).map_err(AppError::Serialization)
}

/// Fusion superficielle : chaque clé de `patch` écrase celle de `target`.
/// Les clés existantes gardent leur position, les nouvelles sont ajoutées en fin.
pub fn merge_shallow(target: &mut Map<String, Value>, patch: Map<String, Value>) {
    for (k, v) in patch {
        target.insert(k, v);
    }
}
