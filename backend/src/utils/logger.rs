// FICHIER : backend/src/utils/logger.rs

use crate::utils::config::AppConfig;
use std::sync::Once;
use tracing_appender::rolling;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

// Sécurité pour éviter la double initialisation (crash fréquent en tests)
static INIT: Once = Once::new();

pub fn init_logging(config: &AppConfig) {
    INIT.call_once(|| {
        // =========================================================================
        // LAYER 1 : CONSOLE
        // =========================================================================
        let env_filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_str()));

        let console_layer = fmt::layer()
            .compact()
            .with_target(false)
            .with_filter(env_filter);

        // =========================================================================
        // LAYER 2 : FICHIER (optionnel, JSON)
        // =========================================================================
        let file_layer = config.log_dir.as_ref().and_then(|log_dir| {
            if let Err(e) = std::fs::create_dir_all(log_dir) {
                eprintln!("⚠️ [Logger] Dossier de logs inaccessible {:?} : {}", log_dir, e);
                return None;
            }
            let file_appender = rolling::daily(log_dir, "inventario.log");
            Some(
                fmt::layer()
                    .json()
                    .with_writer(file_appender)
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_file(true)
                    .with_line_number(true),
            )
        });

        let registry = tracing_subscriber::registry()
            .with(console_layer)
            .with(file_layer);

        if registry.try_init().is_err() {
            tracing::warn!("⚠️ [Logger] Tentative de ré-initialisation ignorée (Global subscriber déjà actif).");
            return;
        }

        match &config.log_dir {
            Some(dir) => tracing::info!("🚀 Logger initialisé. Logs disponibles dans : {:?}", dir),
            None => tracing::info!("🚀 Logger initialisé (console uniquement)."),
        }
    });
}
