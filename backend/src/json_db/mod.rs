// FICHIER : backend/src/json_db/mod.rs

//! Base JSON à plat : une catégorie = un fichier `<categorie>.json` contenant
//! un tableau d'objets, identifiés par un champ `id` entier.

pub mod collections;
pub mod storage;
pub mod transactions;
