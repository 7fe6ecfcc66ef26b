//! Exploreo CLI Application
//!
//! Command-line front end for the Exploreo travel companion core.

mod args;
mod cli;
mod handlers;
mod renderer;

use std::sync::Arc;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::CatalogArgs;
use exploreo_core::{auth::LocalAuth, ConfigBuilder, DocumentStoreBuilder, SettingsStore};
use handlers::Cli;
use log::info;
use renderer::TerminalRenderer;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        geoapify_key,
        google_maps_key,
        no_color,
        command,
    } = Args::parse();

    let config = ConfigBuilder::new()
        .with_database_path(database_file)
        .with_geoapify_api_key(geoapify_key)
        .with_google_maps_api_key(google_maps_key)
        .build()
        .context("Invalid configuration")?;

    let store = DocumentStoreBuilder::new()
        .with_database_path(Some(&config.database_path))
        .build()
        .await
        .context("Failed to open the Exploreo database")?;
    let auth = Arc::new(
        LocalAuth::open(store.clone())
            .await
            .context("Failed to restore sign-in")?,
    );
    let settings = SettingsStore::open(store.clone())
        .await
        .context("Failed to load settings")?;

    let cli = Cli::new(
        config,
        store,
        auth,
        settings,
        TerminalRenderer::new(!no_color),
    );

    info!("Exploreo started");

    match command {
        Some(Catalog(args)) => cli.catalog(args),
        Some(Search(args)) => cli.search(args).await,
        Some(Auth { command }) => cli.handle_auth_command(command).await,
        Some(Bookmark { command }) => cli.handle_bookmark_command(command).await,
        Some(Itinerary { command }) => cli.handle_itinerary_command(command).await,
        Some(Settings { command }) => cli.handle_settings_command(command).await,
        None => cli.catalog(CatalogArgs { region: None }),
    }
}
