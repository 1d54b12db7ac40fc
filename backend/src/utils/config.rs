// FICHIER : backend/src/utils/config.rs

use crate::json_db::collections::IdStrategy;
use crate::utils::{env, AppError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

/// Singleton global pour la configuration
static CONFIG: OnceLock<AppConfig> = OnceLock::new();

pub const DEFAULT_DATA_DIR: &str = "data";
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Configuration du service.
///
/// Ordre de résolution : valeurs par défaut, fichier JSON optionnel,
/// variables d'environnement, puis drapeaux de ligne de commande (appliqués
/// par le binaire).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// Dossier contenant les fichiers `<categorie>.json`.
    pub data_dir: PathBuf,
    pub host: String,
    pub port: u16,
    pub id_strategy: IdStrategy,
    /// Dossier des logs fichier (JSON, rotation journalière). Absent = console seule.
    pub log_dir: Option<PathBuf>,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            id_strategy: IdStrategy::default(),
            log_dir: None,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl AppConfig {
    /// Charge la configuration : défauts, puis fichier (si fourni), puis environnement.
    pub fn load(config_file: Option<&Path>) -> Result<Self> {
        let mut config = match config_file {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_env()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            AppError::Config(format!("Lecture impossible de {} : {}", path.display(), e))
        })?;
        serde_json::from_str(&content).map_err(|e| {
            AppError::Config(format!("Format invalide dans {} : {}", path.display(), e))
        })
    }

    /// Surcharges `INVENTARIO_*` (et `PORT` pour les hébergeurs qui l'imposent).
    pub fn apply_env(&mut self) -> Result<()> {
        if let Some(dir) = env::get_optional("INVENTARIO_DATA_DIR") {
            self.data_dir = PathBuf::from(dir);
        }
        if let Some(host) = env::get_optional("INVENTARIO_HOST") {
            self.host = host;
        }
        if let Some(port) = env::get_parsed_optional::<u16>("INVENTARIO_PORT")? {
            self.port = port;
        } else if let Some(port) = env::get_parsed_optional::<u16>("PORT")? {
            self.port = port;
        }
        if let Some(strategy) = env::get_parsed_optional::<IdStrategy>("INVENTARIO_ID_STRATEGY")? {
            self.id_strategy = strategy;
        }
        if let Some(dir) = env::get_optional("INVENTARIO_LOG_DIR") {
            self.log_dir = Some(PathBuf::from(dir));
        }
        Ok(())
    }

    /// Fige la configuration pour tout le processus.
    pub fn init(config: AppConfig) -> Result<&'static AppConfig> {
        if CONFIG.set(config).is_err() {
            return Err(AppError::Config(
                "La configuration est déjà initialisée".to_string(),
            ));
        }
        Self::get()
    }

    pub fn get() -> Result<&'static AppConfig> {
        CONFIG.get().ok_or_else(|| {
            AppError::Config("AppConfig non initialisé ! Appelez AppConfig::init() au démarrage.".into())
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
