// FICHIER : backend/src/api/server.rs

use crate::api::{router, AppState};
use crate::utils::error::{AnyResult, Context};
use crate::utils::AppConfig;
use tokio::net::TcpListener;
use tracing::{info, warn};

/// Démarre le serveur HTTP et bloque jusqu'à l'arrêt (Ctrl-C / SIGTERM).
pub async fn serve(config: &AppConfig) -> AnyResult<()> {
    if !config.data_dir.is_dir() {
        warn!(
            "⚠️ Dossier de données introuvable : {:?} (toutes les requêtes échoueront)",
            config.data_dir
        );
    }

    let app = router(AppState::from_config(config));
    let addr = config.bind_addr();

    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("impossible d'écouter sur {addr}"))?;

    info!(
        addr = %addr,
        data_dir = ?config.data_dir,
        id_strategy = %config.id_strategy,
        "🚀 Serveur démarré"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("erreur du serveur HTTP")?;

    info!("Serveur arrêté");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Écoute de Ctrl-C impossible : {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                warn!("Écoute de SIGTERM impossible : {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
