// FICHIER : backend/src/json_db/collections/manager.rs

use crate::json_db::collections::{record_id, IdStrategy, StoreAction};
use crate::json_db::storage::{validate_category, StorageEngine};
use crate::json_db::transactions::CategoryGuard;
use crate::utils::json::{merge_shallow, Map, Value};
use crate::utils::prelude::*;

/// Opérations CRUD sur une catégorie.
///
/// Chaque opération est un cycle complet lecture → modification → écriture
/// du fichier, exécuté sous le verrou de la catégorie.
pub struct CollectionsManager<'a> {
    pub storage: &'a StorageEngine,
    pub id_strategy: IdStrategy,
}

impl<'a> CollectionsManager<'a> {
    pub fn new(storage: &'a StorageEngine, id_strategy: IdStrategy) -> Self {
        Self {
            storage,
            id_strategy,
        }
    }

    // Catégorie validée avant tout verrou : un nom invalide ne laisse aucune entrée.
    async fn lock(&self, action: StoreAction, category: &str) -> Result<CategoryGuard> {
        validate_category(category).map_err(|e| fail(action, category, e))?;
        Ok(self.storage.locks.lock(category).await)
    }

    /// Renvoie la collection telle que stockée, ordre conservé.
    #[instrument(skip(self))]
    pub async fn list(&self, category: &str) -> Result<Vec<Value>> {
        let _guard = self.lock(StoreAction::List, category).await?;
        self.storage
            .read_collection(category)
            .await
            .map_err(|e| fail(StoreAction::List, category, e))
    }

    /// Ajoute un enregistrement en fin de collection et renvoie sa version stockée.
    /// Un `id` fourni dans `fields` est écrasé.
    #[instrument(skip(self, fields))]
    pub async fn insert(&self, category: &str, fields: Map<String, Value>) -> Result<Value> {
        let _guard = self.lock(StoreAction::Create, category).await?;
        self.insert_locked(category, fields)
            .await
            .map_err(|e| fail(StoreAction::Create, category, e))
    }

    async fn insert_locked(&self, category: &str, mut fields: Map<String, Value>) -> Result<Value> {
        let mut docs = self.storage.read_collection(category).await?;

        let id = self.id_strategy.next_id(&docs);
        fields.insert("id".to_string(), Value::from(id));
        let record = Value::Object(fields);
        docs.push(record.clone());

        self.storage.write_collection(category, &docs).await?;
        info!(category, id, total = docs.len(), "Ítem agregado");
        Ok(record)
    }

    /// Fusion superficielle de `patch` dans le premier enregistrement d'id `id`.
    /// Un `id` présent dans `patch` remplace l'id stocké.
    #[instrument(skip(self, patch))]
    pub async fn update(
        &self,
        category: &str,
        id: Option<i64>,
        patch: Map<String, Value>,
    ) -> Result<Value> {
        let _guard = self.lock(StoreAction::Update, category).await?;
        self.update_locked(category, id, patch)
            .await
            .map_err(|e| fail(StoreAction::Update, category, e))
    }

    async fn update_locked(
        &self,
        category: &str,
        id: Option<i64>,
        patch: Map<String, Value>,
    ) -> Result<Value> {
        let mut docs = self.storage.read_collection(category).await?;

        let target = id.and_then(|id| {
            docs.iter_mut()
                .find(|d| record_id(d) == Some(id))
                .and_then(Value::as_object_mut)
        });
        let Some(record) = target else {
            return Err(not_found(category, id));
        };

        merge_shallow(record, patch);
        let updated = Value::Object(record.clone());

        self.storage.write_collection(category, &docs).await?;
        info!(category, ?id, "Ítem actualizado");
        Ok(updated)
    }

    /// Retire tous les enregistrements d'id `id` et les renvoie.
    #[instrument(skip(self))]
    pub async fn delete(&self, category: &str, id: Option<i64>) -> Result<Vec<Value>> {
        let _guard = self.lock(StoreAction::Delete, category).await?;
        self.delete_locked(category, id)
            .await
            .map_err(|e| fail(StoreAction::Delete, category, e))
    }

    async fn delete_locked(&self, category: &str, id: Option<i64>) -> Result<Vec<Value>> {
        let docs = self.storage.read_collection(category).await?;

        let (removed, kept): (Vec<Value>, Vec<Value>) = docs
            .into_iter()
            .partition(|d| id.is_some() && record_id(d) == id);

        if removed.is_empty() {
            return Err(not_found(category, id));
        }

        self.storage.write_collection(category, &kept).await?;
        info!(category, ?id, remaining = kept.len(), "Ítem eliminado");
        Ok(removed)
    }
}

fn not_found(category: &str, id: Option<i64>) -> AppError {
    AppError::NotFound {
        category: category.to_string(),
        id,
    }
}

/// Applique le gabarit de l'opération et trace l'échec.
fn fail(action: StoreAction, category: &str, err: AppError) -> AppError {
    let err = err.in_store(action, category);
    if err.is_not_found() {
        warn!(category, %action, "{}", err);
    } else {
        error!(category, %action, "{}", err);
    }
    err
}
