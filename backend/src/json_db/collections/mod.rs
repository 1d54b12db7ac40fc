// FICHIER : backend/src/json_db/collections/mod.rs

pub mod ids;
pub mod manager;

pub use ids::{parse_id, record_id, IdStrategy};
pub use manager::CollectionsManager;

use std::fmt;

/// Opération exécutée sur une catégorie ; fixe le gabarit du message d'échec.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreAction {
    List,
    Create,
    Update,
    Delete,
}

impl StoreAction {
    pub fn failure_message(&self, category: &str, cause: &dyn fmt::Display) -> String {
        match self {
            StoreAction::List => format!("Error al leer los datos de {category}: {cause}"),
            StoreAction::Create => format!("Error al agregar un ítem a {category}: {cause}"),
            StoreAction::Update => format!("Error al actualizar el ítem en {category}: {cause}"),
            StoreAction::Delete => format!("Error al eliminar el ítem de {category}: {cause}"),
        }
    }
}

impl fmt::Display for StoreAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            StoreAction::List => "list",
            StoreAction::Create => "create",
            StoreAction::Update => "update",
            StoreAction::Delete => "delete",
        };
        f.write_str(name)
    }
}
