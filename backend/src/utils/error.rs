// FICHIER : backend/src/utils/error.rs

use std::io;
use std::path::PathBuf;

use crate::json_db::collections::StoreAction;

// On expose les outils flexibles d'anyhow pour les binaires (serveur, CLI)
pub use anyhow::{anyhow, Context};
// On renomme le Result de anyhow pour ne pas qu'il écrase le nôtre
pub use anyhow::Result as AnyResult;

/// Type de résultat standard de la crate.
pub type Result<T> = std::result::Result<T, AppError>;

/// Enumération centrale des erreurs.
///
/// Côté HTTP : `NotFound` (404), `BadRequest` (400, corps JSON refusé avant
/// tout accès disque) et tout le reste (500). `Storage` porte le gabarit de
/// message propre à chaque opération.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Erreur de configuration : {0}")]
    Config(String),

    #[error("{0}")]
    Io(#[from] io::Error),

    #[error("{source}, '{}'", .path.display())]
    Fs {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{0}")]
    Serialization(#[from] serde_json::Error),

    #[error("{0}")]
    Database(String),

    #[error("{0}")]
    BadRequest(String),

    #[error("Ítem no encontrado")]
    NotFound { category: String, id: Option<i64> },

    #[error("{}", .action.failure_message(.category, .source))]
    Storage {
        action: StoreAction,
        category: String,
        #[source]
        source: Box<AppError>,
    },

    #[error(transparent)]
    System(#[from] anyhow::Error),
}

impl AppError {
    pub fn fs(path: impl Into<PathBuf>, source: io::Error) -> Self {
        AppError::Fs {
            path: path.into(),
            source,
        }
    }

    /// Enveloppe une erreur bas niveau dans le gabarit de l'opération.
    /// `NotFound` et les erreurs déjà enveloppées traversent telles quelles.
    pub fn in_store(self, action: StoreAction, category: &str) -> Self {
        match self {
            e @ (AppError::NotFound { .. } | AppError::Storage { .. }) => e,
            other => AppError::Storage {
                action,
                category: category.to_string(),
                source: Box::new(other),
            },
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, AppError::NotFound { .. })
    }
}
