//! Remote place search.
//!
//! [`PlaceSearch`] is the contract; [`GeoapifyClient`] implements it against
//! the Geoapify places API. Each search is one GET request. Failures are
//! reported once as [`ExploreoError::Remote`] and never retried.

use async_trait::async_trait;
use log::{debug, warn};
use serde::Deserialize;
use url::Url;

use crate::{
    config::Config,
    error::{ExploreoError, Result},
    models::Place,
    params::SearchPlaces,
};

/// Places search contract.
#[async_trait]
pub trait PlaceSearch: Send + Sync {
    async fn search(&self, params: &SearchPlaces) -> Result<Vec<Place>>;
}

/// Body of a places response. A missing `results` field means no matches.
#[derive(Debug, Default, Deserialize)]
pub struct PlacesResponse {
    #[serde(default)]
    pub results: Option<Vec<Place>>,
}

impl PlacesResponse {
    pub fn into_places(self) -> Vec<Place> {
        self.results.unwrap_or_default()
    }
}

/// HTTP client for the Geoapify places endpoint.
pub struct GeoapifyClient {
    client: reqwest::Client,
    base_url: Url,
    api_key: Option<String>,
}

impl GeoapifyClient {
    pub fn new(base_url: Url, api_key: Option<String>) -> Result<Self> {
        let client = reqwest::Client::builder().build()?;
        Ok(Self {
            client,
            base_url,
            api_key,
        })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(
            config.places_base_url.clone(),
            config.geoapify_api_key.clone(),
        )
    }

    /// Validates `params` and builds the request URL without sending it.
    ///
    /// # Errors
    ///
    /// `ExploreoError::Validation` for a bad query, `ExploreoError::Configuration`
    /// when no API key is set.
    pub fn request_url(&self, params: &SearchPlaces) -> Result<Url> {
        params.validate()?;
        let api_key = self.api_key.as_deref().ok_or_else(|| {
            ExploreoError::configuration("Place search needs a Geoapify API key")
        })?;

        let mut url = self
            .base_url
            .join("v2/places")
            .map_err(|e| ExploreoError::configuration(format!("Invalid places URL: {e}")))?;
        url.query_pairs_mut()
            .append_pair("categories", params.categories.trim())
            .append_pair("filter", params.filter.trim())
            .append_pair("limit", &params.limit.to_string())
            .append_pair("apiKey", api_key);
        Ok(url)
    }
}

#[async_trait]
impl PlaceSearch for GeoapifyClient {
    async fn search(&self, params: &SearchPlaces) -> Result<Vec<Place>> {
        let url = self.request_url(params)?;
        debug!(
            "Searching places: categories={} filter={} limit={}",
            params.categories, params.filter, params.limit
        );

        let response = self
            .client
            .get(url)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| {
                // The URL carries the API key.
                let e = e.without_url();
                warn!("Place search failed: {e}");
                ExploreoError::remote(format!("Place search failed: {e}"))
            })?;

        let body: PlacesResponse = response
            .json()
            .await
            .map_err(|e| {
                ExploreoError::remote(format!(
                    "Unreadable place search response: {}",
                    e.without_url()
                ))
            })?;

        let places = body.into_places();
        debug!("Place search returned {} results", places.len());
        Ok(places)
    }
}
