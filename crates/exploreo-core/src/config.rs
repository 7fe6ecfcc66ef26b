//! Runtime configuration.
//!
//! Values resolve in order: explicit builder values, then environment
//! variables, then defaults.

use std::path::PathBuf;

use url::Url;

use crate::{
    documents::DocumentStoreBuilder,
    error::{ExploreoError, Result},
    params::DEFAULT_SEARCH_LIMIT,
};

pub const ENV_DATABASE: &str = "EXPLOREO_DATABASE";
pub const ENV_GEOAPIFY_KEY: &str = "GEOAPIFY_API_KEY";
pub const ENV_GOOGLE_MAPS_KEY: &str = "GOOGLE_MAPS_API_KEY";
pub const ENV_PLACES_URL: &str = "EXPLOREO_PLACES_URL";

pub const DEFAULT_PLACES_URL: &str = "https://api.geoapify.com/";
pub const DEFAULT_STATIC_MAP_URL: &str = "https://maps.geoapify.com/v1/staticmap";
pub const DEFAULT_STREET_VIEW_URL: &str = "https://maps.googleapis.com/maps/api/streetview";

/// Resolved configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_path: PathBuf,
    /// Geoapify key for place search and static maps.
    pub geoapify_api_key: Option<String>,
    /// Google key for street view imagery.
    pub google_maps_api_key: Option<String>,
    /// Base of the places API; always ends with `/`.
    pub places_base_url: Url,
    pub static_map_url: Url,
    pub street_view_url: Url,
    pub search_limit: u32,
}

impl Config {
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::new()
    }

    /// Geoapify key or a configuration error naming the variable to set.
    pub fn require_geoapify_key(&self) -> Result<&str> {
        self.geoapify_api_key
            .as_deref()
            .ok_or_else(|| missing_key(ENV_GEOAPIFY_KEY))
    }

    /// Google Maps key or a configuration error naming the variable to set.
    pub fn require_google_maps_key(&self) -> Result<&str> {
        self.google_maps_api_key
            .as_deref()
            .ok_or_else(|| missing_key(ENV_GOOGLE_MAPS_KEY))
    }
}

fn missing_key(variable: &str) -> ExploreoError {
    ExploreoError::configuration(format!("API key not configured; set {variable}"))
}

type EnvLookup = fn(&str) -> Option<String>;

fn process_env(name: &str) -> Option<String> {
    std::env::var(name).ok()
}

/// Builder for [`Config`].
#[derive(Debug, Clone)]
pub struct ConfigBuilder {
    database_path: Option<PathBuf>,
    geoapify_api_key: Option<String>,
    google_maps_api_key: Option<String>,
    places_base_url: Option<String>,
    static_map_url: Option<String>,
    street_view_url: Option<String>,
    search_limit: Option<u32>,
    env: EnvLookup,
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self {
            database_path: None,
            geoapify_api_key: None,
            google_maps_api_key: None,
            places_base_url: None,
            static_map_url: None,
            street_view_url: None,
            search_limit: None,
            env: process_env,
        }
    }
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the environment lookup; tests pass `|_| None`.
    pub fn with_env_lookup(mut self, env: EnvLookup) -> Self {
        self.env = env;
        self
    }

    pub fn with_database_path(mut self, path: Option<PathBuf>) -> Self {
        if path.is_some() {
            self.database_path = path;
        }
        self
    }

    pub fn with_geoapify_api_key(mut self, key: Option<String>) -> Self {
        if key.is_some() {
            self.geoapify_api_key = key;
        }
        self
    }

    pub fn with_google_maps_api_key(mut self, key: Option<String>) -> Self {
        if key.is_some() {
            self.google_maps_api_key = key;
        }
        self
    }

    pub fn with_places_base_url(mut self, url: impl Into<String>) -> Self {
        self.places_base_url = Some(url.into());
        self
    }

    pub fn with_static_map_url(mut self, url: impl Into<String>) -> Self {
        self.static_map_url = Some(url.into());
        self
    }

    pub fn with_street_view_url(mut self, url: impl Into<String>) -> Self {
        self.street_view_url = Some(url.into());
        self
    }

    pub fn with_search_limit(mut self, limit: u32) -> Self {
        self.search_limit = Some(limit);
        self
    }

    /// Resolves every value.
    ///
    /// # Errors
    ///
    /// Returns `ExploreoError::Configuration` for unparseable URLs and
    /// `ExploreoError::XdgDirectory` when no database path is given and the
    /// XDG data directory cannot be determined.
    pub fn build(self) -> Result<Config> {
        let env = self.env;
        let non_blank = |value: Option<String>| value.filter(|v| !v.trim().is_empty());

        let database_path = match self
            .database_path
            .or_else(|| non_blank(env(ENV_DATABASE)).map(PathBuf::from))
        {
            Some(path) => path,
            None => DocumentStoreBuilder::default_database_path()?,
        };

        let places = self
            .places_base_url
            .or_else(|| non_blank(env(ENV_PLACES_URL)))
            .unwrap_or_else(|| DEFAULT_PLACES_URL.to_string());

        Ok(Config {
            database_path,
            geoapify_api_key: non_blank(self.geoapify_api_key.or_else(|| env(ENV_GEOAPIFY_KEY))),
            google_maps_api_key: non_blank(
                self.google_maps_api_key
                    .or_else(|| env(ENV_GOOGLE_MAPS_KEY)),
            ),
            places_base_url: parse_url(&with_trailing_slash(places))?,
            static_map_url: parse_url(
                self.static_map_url
                    .as_deref()
                    .unwrap_or(DEFAULT_STATIC_MAP_URL),
            )?,
            street_view_url: parse_url(
                self.street_view_url
                    .as_deref()
                    .unwrap_or(DEFAULT_STREET_VIEW_URL),
            )?,
            search_limit: self.search_limit.unwrap_or(DEFAULT_SEARCH_LIMIT),
        })
    }
}

fn with_trailing_slash(mut url: String) -> String {
    if !url.ends_with('/') {
        url.push('/');
    }
    url
}

fn parse_url(raw: &str) -> Result<Url> {
    Url::parse(raw).map_err(|e| ExploreoError::configuration(format!("Invalid URL '{raw}': {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    fn fake_env(name: &str) -> Option<String> {
        match name {
            ENV_DATABASE => Some("/tmp/from-env.db".to_string()),
            ENV_GEOAPIFY_KEY => Some("env-geo".to_string()),
            ENV_GOOGLE_MAPS_KEY => Some("  ".to_string()),
            ENV_PLACES_URL => Some("http://127.0.0.1:9000/api".to_string()),
            _ => None,
        }
    }

    #[test]
    fn test_defaults() {
        let config = ConfigBuilder::new()
            .with_env_lookup(no_env)
            .with_database_path(Some(PathBuf::from("/tmp/test.db")))
            .build()
            .unwrap();

        assert_eq!(config.database_path, PathBuf::from("/tmp/test.db"));
        assert_eq!(config.places_base_url.as_str(), DEFAULT_PLACES_URL);
        assert_eq!(config.static_map_url.as_str(), DEFAULT_STATIC_MAP_URL);
        assert_eq!(config.search_limit, 20);
        assert!(config.geoapify_api_key.is_none());
        assert!(matches!(
            config.require_geoapify_key(),
            Err(ExploreoError::Configuration { .. })
        ));
    }

    #[test]
    fn test_environment_fills_unset_values() {
        let config = ConfigBuilder::new()
            .with_env_lookup(fake_env)
            .build()
            .unwrap();

        assert_eq!(config.database_path, PathBuf::from("/tmp/from-env.db"));
        assert_eq!(config.require_geoapify_key().unwrap(), "env-geo");
        assert!(config.google_maps_api_key.is_none());
        assert_eq!(config.places_base_url.as_str(), "http://127.0.0.1:9000/api/");

        let err = config.require_google_maps_key().unwrap_err();
        assert!(err.to_string().contains(ENV_GOOGLE_MAPS_KEY));
    }

    #[test]
    fn test_explicit_values_win() {
        let config = ConfigBuilder::new()
            .with_env_lookup(fake_env)
            .with_database_path(Some(PathBuf::from("/tmp/flag.db")))
            .with_geoapify_api_key(Some("flag-geo".to_string()))
            .with_geoapify_api_key(None)
            .with_search_limit(5)
            .build()
            .unwrap();

        assert_eq!(config.database_path, PathBuf::from("/tmp/flag.db"));
        assert_eq!(config.require_geoapify_key().unwrap(), "flag-geo");
        assert_eq!(config.search_limit, 5);
    }

    #[test]
    fn test_invalid_url_is_configuration_error() {
        let err = ConfigBuilder::new()
            .with_env_lookup(no_env)
            .with_database_path(Some(PathBuf::from("/tmp/test.db")))
            .with_places_base_url("not a url")
            .build()
            .unwrap_err();

        assert!(matches!(err, ExploreoError::Configuration { .. }));
    }
}
