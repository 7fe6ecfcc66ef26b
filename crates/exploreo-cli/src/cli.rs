//! Command-line argument wrappers.
//!
//! Each clap struct here converts into a core parameter type, keeping clap
//! out of `exploreo-core`:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Core Services
//! ```

use std::str::FromStr;

use clap::{Args, Subcommand};
use exploreo_core::{
    params::{DocumentId, NewItineraryItem, SearchPlaces, SignIn, SignUp},
    Place,
};
use jiff::{civil::Date, tz::TimeZone};

/// List curated regions and their attractions
#[derive(Args)]
pub struct CatalogArgs {
    /// Only show this region (case-insensitive)
    #[arg(short, long)]
    pub region: Option<String>,
}

/// Search places near an area
#[derive(Args)]
pub struct SearchArgs {
    #[arg(help = "Comma-separated categories, e.g. tourism.sights,catering.restaurant")]
    pub categories: String,
    #[arg(help = "Area filter, e.g. circle:18.42,-33.92,5000 (lon,lat,radius in meters)")]
    pub filter: String,
    /// Maximum number of results
    #[arg(short, long)]
    pub limit: Option<u32>,
}

impl SearchArgs {
    pub fn into_params(self, default_limit: u32) -> SearchPlaces {
        SearchPlaces::new(self.categories, self.filter)
            .with_limit(self.limit.unwrap_or(default_limit))
    }
}

#[derive(Args)]
pub struct SignUpArgs {
    pub email: String,
    #[arg(help = "At least 6 characters")]
    pub password: String,
    #[arg(long, help = "Name shown on your profile")]
    pub name: String,
}

impl From<SignUpArgs> for SignUp {
    fn from(val: SignUpArgs) -> Self {
        SignUp {
            email: val.email,
            password: val.password,
            display_name: val.name,
        }
    }
}

#[derive(Args)]
pub struct SignInArgs {
    pub email: String,
    pub password: String,
}

impl From<SignInArgs> for SignIn {
    fn from(val: SignInArgs) -> Self {
        SignIn {
            email: val.email,
            password: val.password,
        }
    }
}

#[derive(Subcommand)]
pub enum AuthCommands {
    /// Create an account and sign in
    SignUp(SignUpArgs),
    /// Sign in to an existing account
    SignIn(SignInArgs),
    /// Sign out
    SignOut,
    /// Show the signed-in profile
    Whoami,
}

/// Bookmark any place by name and coordinates
#[derive(Args)]
pub struct AddPlaceArgs {
    #[arg(long)]
    pub name: String,
    #[arg(long, allow_hyphen_values = true)]
    pub lat: f64,
    #[arg(long, allow_hyphen_values = true)]
    pub lon: f64,
    #[arg(long = "category", help = "Category tag; repeat for several")]
    pub categories: Vec<String>,
}

impl From<AddPlaceArgs> for Place {
    fn from(val: AddPlaceArgs) -> Self {
        Place {
            categories: val.categories,
            ..Place::named(val.name, val.lat, val.lon)
        }
    }
}

#[derive(Args)]
pub struct BookmarkIdArgs {
    #[arg(help = "Bookmark ID as shown by `bookmark list`")]
    pub id: String,
}

impl From<BookmarkIdArgs> for DocumentId {
    fn from(val: BookmarkIdArgs) -> Self {
        DocumentId { id: val.id }
    }
}

#[derive(Subcommand)]
pub enum BookmarkCommands {
    /// Bookmark a catalog attraction by name
    #[command(alias = "a")]
    Add {
        #[arg(help = "Attraction name, e.g. \"Table Mountain, Cape Town\"")]
        attraction: String,
    },
    /// Bookmark a place by coordinates
    AddPlace(AddPlaceArgs),
    #[command(aliases = ["l", "ls"])]
    List,
    #[command(alias = "s")]
    Show(BookmarkIdArgs),
    #[command(alias = "rm")]
    Remove(BookmarkIdArgs),
    /// Print the bookmark as shareable text
    Share(BookmarkIdArgs),
    /// Print map, navigation and imagery links
    Links(BookmarkIdArgs),
}

/// One itinerary stop written as `title|note|date|time|lat|lon`.
///
/// Only the title is required; trailing fields may be omitted and empty
/// fields are skipped. Dates use `YYYY-MM-DD`.
#[derive(Debug, Clone)]
pub struct ItemSpec(pub NewItineraryItem);

impl FromStr for ItemSpec {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut fields = s.split('|').map(str::trim);
        let field = |value: Option<&str>| value.filter(|v| !v.is_empty()).map(str::to_string);

        let title = fields.next().unwrap_or_default().to_string();
        let note = field(fields.next());
        let date = field(fields.next()).map(|d| parse_date(&d)).transpose()?;
        let time_label = field(fields.next());
        let latitude = field(fields.next()).map(|v| parse_coordinate(&v)).transpose()?;
        let longitude = field(fields.next()).map(|v| parse_coordinate(&v)).transpose()?;
        if fields.next().is_some() {
            return Err(format!("Too many fields in '{s}'"));
        }
        if latitude.is_some() != longitude.is_some() {
            return Err("Give both latitude and longitude or neither".to_string());
        }

        Ok(ItemSpec(NewItineraryItem {
            title,
            note,
            date_epoch_millis: date,
            time_label,
            latitude,
            longitude,
        }))
    }
}

/// Start of `raw` (a `YYYY-MM-DD` date) in the system time zone, as epoch
/// milliseconds.
fn parse_date(raw: &str) -> Result<i64, String> {
    let date: Date = raw
        .parse()
        .map_err(|e| format!("Invalid date '{raw}': {e}"))?;
    date.to_zoned(TimeZone::system())
        .map(|zoned| zoned.timestamp().as_millisecond())
        .map_err(|e| format!("Invalid date '{raw}': {e}"))
}

fn parse_coordinate(raw: &str) -> Result<f64, String> {
    raw.parse()
        .map_err(|_| format!("Invalid coordinate '{raw}'"))
}

#[derive(Args)]
pub struct PlanArgs {
    #[arg(
        short,
        long = "item",
        required = true,
        allow_hyphen_values = true,
        help = "Stop as \"title|note|date|time|lat|lon\"; repeat in visiting order"
    )]
    pub items: Vec<ItemSpec>,
    /// Print the share text
    #[arg(long)]
    pub share: bool,
    /// Save the itinerary
    #[arg(long)]
    pub save: bool,
}

#[derive(Args)]
pub struct LatestArgs {
    /// Print the share text instead of the item list
    #[arg(long)]
    pub share: bool,
}

#[derive(Subcommand)]
pub enum ItineraryCommands {
    /// Build an itinerary from stops, then share and/or save it
    #[command(alias = "p")]
    Plan(PlanArgs),
    /// Load the most recently saved itinerary
    Latest(LatestArgs),
    /// List saved itineraries, newest first
    #[command(aliases = ["l", "ls"])]
    List,
}

#[derive(Subcommand)]
pub enum SettingsCommands {
    Show,
    /// Change one setting
    Set {
        #[arg(help = "dark-mode, language, map-mode, traffic or image-quality")]
        key: String,
        value: String,
    },
}
