// FICHIER : backend/src/main.rs

use clap::Parser;
use dotenvy::dotenv;
use std::path::PathBuf;

use inventario::api::server;
use inventario::json_db::collections::IdStrategy;
use inventario::utils::error::AnyResult;
use inventario::utils::{init_logging, AppConfig};

#[derive(Parser)]
#[command(
    name = "inventario",
    author = "Inventario Team",
    version,
    about = "API CRUD générique sur des fichiers JSON par catégorie"
)]
struct Cli {
    /// Fichier de configuration JSON (optionnel)
    #[arg(long, short = 'c', env = "INVENTARIO_CONFIG")]
    config: Option<PathBuf>,

    /// Dossier des fichiers <categorie>.json
    #[arg(long)]
    data_dir: Option<PathBuf>,

    #[arg(long)]
    host: Option<String>,

    #[arg(long, short = 'p')]
    port: Option<u16>,

    /// last-plus-one (historique) | max-plus-one
    #[arg(long)]
    id_strategy: Option<IdStrategy>,

    #[arg(long)]
    log_dir: Option<PathBuf>,
}

impl Cli {
    fn apply(self, config: &mut AppConfig) {
        if let Some(dir) = self.data_dir {
            config.data_dir = dir;
        }
        if let Some(host) = self.host {
            config.host = host;
        }
        if let Some(port) = self.port {
            config.port = port;
        }
        if let Some(strategy) = self.id_strategy {
            config.id_strategy = strategy;
        }
        if let Some(dir) = self.log_dir {
            config.log_dir = Some(dir);
        }
    }
}

#[tokio::main]
async fn main() -> AnyResult<()> {
    dotenv().ok();
    let cli = Cli::parse();

    let mut config = AppConfig::load(cli.config.as_deref())?;
    cli.apply(&mut config);
    let config = AppConfig::init(config)?;

    init_logging(config);
    server::serve(config).await
}
