// FICHIER : backend/src/utils/env.rs

use crate::utils::{AppError, Result};
use std::env;
use std::str::FromStr;

/// Récupère une variable d'environnement (Requis).
/// Renvoie une erreur explicite si la clé est manquante.
pub fn get(key: &str) -> Result<String> {
    env::var(key)
        .map_err(|_| AppError::Config(format!("Variable d'environnement manquante : {}", key)))
}

/// Récupère une variable d'environnement (Optionnel).
/// Une valeur vide est traitée comme absente.
pub fn get_optional(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

/// Récupère et parse une variable (ex: booléen, entier).
/// Utile pour INVENTARIO_PORT=8080.
pub fn get_parsed<T: FromStr>(key: &str) -> Result<T> {
    let val = get(key)?;
    val.trim()
        .parse::<T>()
        .map_err(|_| AppError::Config(format!("Impossible de parser la variable : {}", key)))
}

/// Variante optionnelle de [`get_parsed`] : absente => `Ok(None)`, invalide => erreur.
pub fn get_parsed_optional<T: FromStr>(key: &str) -> Result<Option<T>> {
    match get_optional(key) {
        None => Ok(None),
        Some(_) => get_parsed(key).map(Some),
    }
}
