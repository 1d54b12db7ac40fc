// FICHIER : backend/src/api/handlers.rs

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use crate::api::extract::JsonFields;
use crate::api::AppState;
use crate::json_db::collections::{parse_id, CollectionsManager};
use crate::utils::json::Value;
use crate::utils::Result;

pub const CREATED_MESSAGE: &str = "Ítem agregado con éxito";
pub const UPDATED_MESSAGE: &str = "Ítem actualizado con éxito";
pub const DELETED_MESSAGE: &str = "Ítem eliminado con éxito";

/// GET /api/{category}
pub async fn list_items(
    State(state): State<AppState>,
    Path(category): Path<String>,
) -> Result<Json<Vec<Value>>> {
    let docs = state.manager().list(&category).await?;
    Ok(Json(docs))
}

/// POST /api/{category}
pub async fn create_item(
    State(state): State<AppState>,
    Path(category): Path<String>,
    JsonFields(fields): JsonFields,
) -> Result<(StatusCode, &'static str)> {
    state.manager().insert(&category, fields).await?;
    Ok((StatusCode::CREATED, CREATED_MESSAGE))
}

/// PUT /api/{category}/{id}
pub async fn update_item(
    State(state): State<AppState>,
    Path((category, raw_id)): Path<(String, String)>,
    JsonFields(patch): JsonFields,
) -> Result<&'static str> {
    state
        .manager()
        .update(&category, parse_id(&raw_id), patch)
        .await?;
    Ok(UPDATED_MESSAGE)
}

/// DELETE /api/{category}/{id}
pub async fn delete_item(
    State(state): State<AppState>,
    Path((category, raw_id)): Path<(String, String)>,
) -> Result<&'static str> {
    state.manager().delete(&category, parse_id(&raw_id)).await?;
    Ok(DELETED_MESSAGE)
}

impl AppState {
    fn manager(&self) -> CollectionsManager<'_> {
        CollectionsManager::new(&self.storage, self.id_strategy)
    }
}
