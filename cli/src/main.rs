mod commands;
mod terminal;

use std::sync::Arc;

use tracing::error;

use commands::{
    CommandLine, Commands, admin, camps, directory, districts, inventory, login, recipient,
    register, search, stock,
};
use lifeline_common::config::Config;
use lifeline_common::ports::repository::DocumentStore;
use lifeline_core::adapters::clock::SystemClock;
use lifeline_core::adapters::json_store::JsonStore;
use lifeline_core::adapters::notifier::LogNotifier;
use lifeline_core::services::Services;
use terminal::{print, spinner};

#[tokio::main]
async fn main() {
    let commands = CommandLine::parse_args();

    spinner::init_logging();

    let cfg = commands.config();
    print::banner(cfg.no_banner, cfg.quiet);

    if let Err(err) = run(commands.command, &cfg).await {
        error!("{err:#}");
        std::process::exit(1);
    }
}

async fn open_store(cfg: &Config) -> anyhow::Result<Arc<dyn DocumentStore>> {
    let store = match &cfg.store_path {
        Some(path) => JsonStore::open(path.clone()).await?,
        None => JsonStore::in_memory(),
    };
    Ok(Arc::new(store))
}

async fn run(command: Commands, cfg: &Config) -> anyhow::Result<()> {
    if let Commands::Districts { district } = &command {
        return districts::districts(district.as_deref(), cfg);
    }

    let store = open_store(cfg).await?;
    let services = Services::new(store, Arc::new(SystemClock), Arc::new(LogNotifier), cfg);

    match command {
        Commands::Search(args) => search::search(&services, args, cfg).await,
        Commands::Directory { term, location } => {
            directory::directory(&services, term, &location, cfg).await
        }
        Commands::Inventory => inventory::inventory(&services, cfg).await,
        Commands::Districts { .. } => Ok(()),
        Commands::Camps => camps::camps(&services, cfg).await,
        Commands::Register(kind) => register::register(&services, kind, cfg).await,
        Commands::Login(credentials) => login::login(&services, credentials, cfg).await,
        Commands::Recipient(args) => recipient::recipient(&services, args, cfg).await,
        Commands::Stock {
            credentials,
            group,
            units,
        } => stock::stock(&services, credentials, group, units, cfg).await,
        Commands::Admin {
            credentials,
            action,
        } => admin::admin(&services, credentials, action, cfg).await,
    }
}
