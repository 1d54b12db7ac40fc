// FICHIER : backend/src/json_db/transactions/lock_manager.rs

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};
use tokio::sync::{Mutex as AsyncMutex, OwnedMutexGuard};

type LockMap = HashMap<String, Arc<AsyncMutex<()>>>;

/// Gestionnaire de verrous simple (granularité : catégorie).
///
/// Chaque cycle lecture-modification-écriture d'une catégorie s'exécute sous
/// son verrou ; deux catégories différentes restent indépendantes. Une entrée
/// n'existe que tant qu'un guard ou un candidat en attente la référence.
#[derive(Debug, Default, Clone)]
pub struct LockManager {
    // Clé = nom de la catégorie
    locks: Arc<Mutex<LockMap>>,
}

impl LockManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Récupère (ou crée) le verrou d'une catégorie.
    fn get_lock(&self, category: &str) -> Arc<AsyncMutex<()>> {
        let mut map = self.locks.lock().unwrap_or_else(PoisonError::into_inner);
        map.entry(category.to_string())
            .or_insert_with(|| Arc::new(AsyncMutex::new(())))
            .clone()
    }

    /// Attend le verrou exclusif de la catégorie. Libéré au drop du guard.
    pub async fn lock(&self, category: &str) -> CategoryGuard {
        let lock = self.get_lock(category);
        let guard = lock.clone().lock_owned().await;
        CategoryGuard {
            locks: self.locks.clone(),
            category: category.to_string(),
            lock,
            guard: Some(guard),
        }
    }

    /// Nombre de catégories ayant actuellement un verrou enregistré.
    pub fn len(&self) -> usize {
        self.locks
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Verrou tenu sur une catégorie. Au drop, l'entrée de la table est retirée
/// si plus personne ne la référence.
#[derive(Debug)]
pub struct CategoryGuard {
    locks: Arc<Mutex<LockMap>>,
    category: String,
    lock: Arc<AsyncMutex<()>>,
    guard: Option<OwnedMutexGuard<()>>,
}

impl Drop for CategoryGuard {
    fn drop(&mut self) {
        // Table verrouillée pendant la vérification : aucun nouveau clone possible.
        let mut map = self.locks.lock().unwrap_or_else(PoisonError::into_inner);
        drop(self.guard.take());

        // Restent : l'entrée de la table + `self.lock`
        let unused = map
            .get(&self.category)
            .is_some_and(|entry| Arc::ptr_eq(entry, &self.lock) && Arc::strong_count(entry) == 2);
        if unused {
            map.remove(&self.category);
        }
    }
}
