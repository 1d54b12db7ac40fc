// FICHIER : backend/src/json_db/collections/ids.rs

use crate::utils::{AppError, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// Calcul de l'identifiant d'un nouvel enregistrement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IdStrategy {
    /// Historique : `id` du dernier élément + 1 (1 si vide).
    /// Peut produire un doublon si le dernier élément n'a pas l'id maximal.
    #[default]
    LastPlusOne,
    /// `id` maximal de la collection + 1 (1 si vide). Jamais de doublon.
    MaxPlusOne,
}

impl IdStrategy {
    /// Un élément sans `id` entier compte pour 0.
    pub fn next_id(&self, docs: &[Value]) -> i64 {
        let base = match self {
            IdStrategy::LastPlusOne => docs.last().map(|d| record_id(d).unwrap_or(0)),
            IdStrategy::MaxPlusOne => docs.iter().filter_map(record_id).max(),
        };
        base.unwrap_or(0).saturating_add(1)
    }
}

impl FromStr for IdStrategy {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "last-plus-one" | "last" | "legacy" => Ok(IdStrategy::LastPlusOne),
            "max-plus-one" | "max" => Ok(IdStrategy::MaxPlusOne),
            other => Err(AppError::Config(format!(
                "stratégie d'id inconnue '{other}' (attendu : last-plus-one | max-plus-one)"
            ))),
        }
    }
}

impl fmt::Display for IdStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IdStrategy::LastPlusOne => f.write_str("last-plus-one"),
            IdStrategy::MaxPlusOne => f.write_str("max-plus-one"),
        }
    }
}

/// `id` entier d'un enregistrement (`2.0` compte comme `2`).
pub fn record_id(doc: &Value) -> Option<i64> {
    let id = doc.get("id")?;
    id.as_i64().or_else(|| {
        id.as_f64()
            .filter(|f| f.is_finite() && f.fract() == 0.0)
            .filter(|f| *f >= i64::MIN as f64 && *f <= i64::MAX as f64)
            .map(|f| f as i64)
    })
}

/// Parse tolérant d'un id d'URL : espaces initiaux ignorés, signe optionnel,
/// puis le plus long préfixe de chiffres (`"12abc"` => 12).
/// Sans chiffre (ou hors bornes) => `None`, qui ne correspond à aucun enregistrement.
pub fn parse_id(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return None;
    }
    let value: i64 = rest[..digits_len].parse().ok()?;
    Some(if negative { -value } else { value })
}
