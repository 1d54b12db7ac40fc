// FICHIER : backend/src/api/mod.rs

//! Surface HTTP : `/api/{category}` et `/api/{category}/{id}`.

pub mod error;
pub mod extract;
pub mod handlers;
pub mod server;

use axum::routing::{get, put};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::json_db::collections::IdStrategy;
use crate::json_db::storage::{JsonDbConfig, StorageEngine};
use crate::utils::AppConfig;

/// État partagé par les handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    pub storage: StorageEngine,
    pub id_strategy: IdStrategy,
}

impl AppState {
    pub fn new(storage: StorageEngine, id_strategy: IdStrategy) -> Self {
        Self {
            storage,
            id_strategy,
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        let storage = StorageEngine::new(JsonDbConfig::new(config.data_dir.clone()));
        Self::new(storage, config.id_strategy)
    }
}

/// Construit le routeur : CRUD par catégorie, CORS ouvert à toute origine.
/// Les chemins avec un `/` final sont acceptés.
pub fn router(state: AppState) -> Router {
    let collection = get(handlers::list_items).post(handlers::create_item);
    let item = put(handlers::update_item).delete(handlers::delete_item);

    Router::new()
        .route("/api/{category}", collection.clone())
        .route("/api/{category}/", collection)
        .route("/api/{category}/{id}", item.clone())
        .route("/api/{category}/{id}/", item)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
