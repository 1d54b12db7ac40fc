// FICHIER : backend/tools/inventario-cli/src/main.rs

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use dotenvy::dotenv;
use serde_json::{Map, Value};
use std::fs;
use std::path::PathBuf;

use inventario::json_db::collections::{parse_id, CollectionsManager, IdStrategy};
use inventario::json_db::storage::{file_storage, JsonDbConfig, StorageEngine};

#[derive(Parser)]
#[command(
    name = "inventario-cli",
    author = "Inventario Team",
    version,
    about = "Outil d'administration des collections JSON d'Inventario"
)]
struct Cli {
    #[arg(long, env = "INVENTARIO_DATA_DIR", help = "Dossier des fichiers <categorie>.json")]
    root: PathBuf,

    #[arg(long, env = "INVENTARIO_ID_STRATEGY", default_value = "last-plus-one")]
    id_strategy: IdStrategy,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    ListCollections,
    CreateCollection {
        name: String,
    },
    List {
        category: String,
    },
    /// DATA : JSON en ligne ou `@fichier.json`
    Insert {
        category: String,
        data: String,
    },
    Update {
        category: String,
        id: String,
        data: String,
    },
    Delete {
        category: String,
        id: String,
    },
    /// Insère un objet ou chaque objet d'un tableau JSON lu depuis un fichier
    Import {
        category: String,
        path: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .try_init();

    let cli = Cli::parse();
    for line in run(cli).await? {
        println!("{line}");
    }
    Ok(())
}

async fn run(cli: Cli) -> Result<Vec<String>> {
    let config = JsonDbConfig::new(cli.root.clone());
    let storage = StorageEngine::new(config.clone());
    let mgr = CollectionsManager::new(&storage, cli.id_strategy);
    let mut out = Vec::new();

    match cli.command {
        // --- GESTION COLLECTIONS ---
        Commands::ListCollections => {
            let cols = file_storage::list_categories(&config).await?;
            out.push(format!("📂 Collections dans {:?}:", config.data_root));
            out.extend(cols.into_iter().map(|c| format!("  - {c}")));
        }

        Commands::CreateCollection { name } => {
            if file_storage::create_collection(&config, &name).await? {
                out.push(format!("✅ Collection '{name}' créée."));
            } else {
                out.push(format!("ℹ️  Collection '{name}' déjà présente."));
            }
        }

        // --- GESTION DOCUMENTS ---
        Commands::List { category } => {
            let docs = mgr.list(&category).await?;
            out.push(serde_json::to_string_pretty(&docs)?);
        }

        Commands::Insert { category, data } => {
            let fields = parse_object(&data)?;
            let created = mgr.insert(&category, fields).await?;
            out.push(format!("✅ Inséré ID: {}", created["id"]));
        }

        Commands::Update { category, id, data } => {
            let patch = parse_object(&data)?;
            let updated = mgr.update(&category, parse_id(&id), patch).await?;
            out.push(serde_json::to_string_pretty(&updated)?);
        }

        Commands::Delete { category, id } => {
            let removed = mgr.delete(&category, parse_id(&id)).await?;
            out.push(format!("🗑️  {} document(s) supprimé(s).", removed.len()));
        }

        Commands::Import { category, path } => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("lecture de {:?}", path))?;
            let docs = match serde_json::from_str::<Value>(&content)? {
                Value::Array(items) => items,
                single => vec![single],
            };
            let mut count = 0;
            for doc in docs {
                let Value::Object(fields) = doc else {
                    return Err(anyhow!("❌ Import : seuls des objets JSON sont acceptés"));
                };
                mgr.insert(&category, fields).await?;
                count += 1;
            }
            out.push(format!("📦 Import terminé : {count} documents."));
        }
    }

    Ok(out)
}

/// JSON en ligne, ou contenu d'un fichier si préfixé par `@`.
fn parse_object(data: &str) -> Result<Map<String, Value>> {
    let content = match data.strip_prefix('@') {
        Some(path) => fs::read_to_string(path).with_context(|| format!("lecture de {path}"))?,
        None => data.to_string(),
    };
    match serde_json::from_str::<Value>(&content)? {
        Value::Object(map) => Ok(map),
        _ => Err(anyhow!("❌ Un objet JSON est attendu")),
    }
}
