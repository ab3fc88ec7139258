//! Caching PokeAPI client
//!
//! Every request goes through the response cache first. Each resource is
//! cached under its own fully-qualified URL, so pagination links and single
//! resources never share a key.

use reqwest::Url;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::cache::Cache;
use crate::error::{ApiError, Result};
use crate::models::{LocationArea, LocationAreaPage, Pokemon};
use crate::pokeapi::{Fetch, HttpFetcher};

/// PokeAPI client that memoizes raw response bodies.
#[derive(Debug, Clone)]
pub struct PokeApiClient<F = HttpFetcher> {
    fetcher: F,
    cache: Cache,
    base_url: String,
}

impl<F: Fetch> PokeApiClient<F> {
    /// Creates a client rooted at `base_url` that shares `cache`.
    pub fn new(fetcher: F, cache: Cache, base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            fetcher,
            cache,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Returns the cache this client reads through.
    pub fn cache(&self) -> &Cache {
        &self.cache
    }

    /// URL of the first location-area page.
    pub fn first_location_page_url(&self) -> String {
        format!("{}/location-area", self.base_url)
    }

    /// Fetches and decodes `url`. Bodies that fail to decode are not cached.
    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        if let Some(body) = self.cache.lookup(url).await {
            debug!(url, "cache hit");
            return Ok(serde_json::from_slice(&body)?);
        }

        debug!(url, "cache miss");
        let body = self.fetcher.fetch(url).await?;
        let decoded = serde_json::from_slice(&body)?;
        self.cache.insert(url, body).await;
        Ok(decoded)
    }

    /// Builds `<base>/<kind>/<name>`, percent-encoding `name` as a single
    /// path segment so user input can't add segments or a query.
    fn resource_url(&self, kind: &str, name: &str) -> Result<String> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|_| ApiError::InvalidUrl(self.base_url.clone()))?;
        url.path_segments_mut()
            .map_err(|_| ApiError::InvalidUrl(self.base_url.clone()))?
            .pop_if_empty()
            .push(kind)
            .push(name);
        Ok(url.into())
    }

    // == Location Areas ==
    /// Loads the location-area page at `url`, as returned in `next`/`previous`.
    pub async fn location_page(&self, url: &str) -> Result<LocationAreaPage> {
        self.get_json(url).await
    }

    /// Lists the Pokemon that can be found in the named area.
    pub async fn explore_area(&self, area: &str) -> Result<Vec<String>> {
        let url = self.resource_url("location-area", area)?;
        let area: LocationArea = self.get_json(&url).await?;
        Ok(area.pokemon_names())
    }

    // == Pokemon ==
    /// Looks up a Pokemon by name. A 404 becomes [`ApiError::UnknownPokemon`].
    pub async fn pokemon(&self, name: &str) -> Result<Pokemon> {
        let url = self.resource_url("pokemon", name)?;
        self.get_json(&url).await.map_err(|err| match err.status() {
            Some(404) => ApiError::UnknownPokemon(name.to_string()),
            _ => err,
        })
    }
}
