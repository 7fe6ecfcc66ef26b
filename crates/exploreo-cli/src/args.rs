use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{
    AuthCommands, BookmarkCommands, CatalogArgs, ItineraryCommands, SearchArgs, SettingsCommands,
};

/// Command-line front end for the Exploreo travel companion
///
/// Browse curated South African attractions, search for places nearby,
/// keep bookmarks and plan itineraries. Account data lives in a local
/// SQLite database.
#[derive(Parser)]
#[command(version, about, name = "exploreo")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to $EXPLOREO_DATABASE,
    /// then $XDG_DATA_HOME/exploreo/exploreo.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Geoapify API key for search and static maps. Defaults to
    /// $GEOAPIFY_API_KEY
    #[arg(long, global = true)]
    pub geoapify_key: Option<String>,

    /// Google Maps API key for street view imagery. Defaults to
    /// $GOOGLE_MAPS_API_KEY
    #[arg(long, global = true)]
    pub google_maps_key: Option<String>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Exploreo CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Browse the curated attraction catalog
    #[command(alias = "c")]
    Catalog(CatalogArgs),
    /// Search places through the places API
    Search(SearchArgs),
    /// Sign up, sign in and out
    Auth {
        #[command(subcommand)]
        command: AuthCommands,
    },
    /// Manage bookmarked places
    #[command(alias = "b")]
    Bookmark {
        #[command(subcommand)]
        command: BookmarkCommands,
    },
    /// Plan, share and save itineraries
    #[command(alias = "i")]
    Itinerary {
        #[command(subcommand)]
        command: ItineraryCommands,
    },
    /// Show or change preferences
    Settings {
        #[command(subcommand)]
        command: SettingsCommands,
    },
}
