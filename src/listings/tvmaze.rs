/// TVMaze listings provider implementation.
use super::tvmaze_types::{TvMazeEpisode, TvMazeSearchResult};
use super::{Episode, ListingsError, ListingsProvider, Show};
use crate::config::BrowserConfig;
use serde::de::DeserializeOwned;
use tracing::debug;

/// Listings provider for the TVMaze API.
///
/// Searches go to `/search/shows`, episode lists to `/shows/{id}/episodes`.
pub struct TvMazeProvider {
    client: reqwest::blocking::Client,
    base_url: String,
    default_image: String,
}

impl TvMazeProvider {
    /// Creates a provider for the endpoint and fallback image in `config`.
    pub fn new(config: &BrowserConfig) -> Self {
        Self {
            client: reqwest::blocking::Client::new(),
            base_url: config.base_url().to_string(),
            default_image: config.default_image().to_string(),
        }
    }

    /// Sends a GET request to the listings API.
    fn send(
        &self,
        url: &str,
        query: &[(&str, &str)],
    ) -> Result<reqwest::blocking::Response, ListingsError> {
        debug!(url, ?query, "requesting listings");

        self.client
            .get(url)
            .query(query)
            .send()
            .map_err(|e| ListingsError::Network(e.to_string()))
    }

    /// Decodes a JSON response body.
    ///
    /// Non-success statuses become `ListingsError::Network`; bodies that do
    /// not decode into `T` become `ListingsError::Shape` carrying the JSON
    /// path where decoding stopped.
    fn decode<T: DeserializeOwned>(
        response: reqwest::blocking::Response,
    ) -> Result<T, ListingsError> {
        let status = response.status();
        if !status.is_success() {
            return Err(ListingsError::Network(format!(
                "HTTP {} {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or("Unknown")
            )));
        }

        let body = response
            .text()
            .map_err(|e| ListingsError::Network(e.to_string()))?;

        let deserializer = &mut serde_json::Deserializer::from_str(&body);
        serde_path_to_error::deserialize(deserializer).map_err(|e| ListingsError::Shape {
            path: e.path().to_string(),
            message: e.into_inner().to_string(),
        })
    }
}

impl ListingsProvider for TvMazeProvider {
    fn search_shows(&self, term: &str) -> Result<Vec<Show>, ListingsError> {
        let url = format!("{}/search/shows", self.base_url);
        let response = self.send(&url, &[("q", term)])?;
        let results: Vec<TvMazeSearchResult> = Self::decode(response)?;

        let shows: Vec<Show> = results
            .into_iter()
            .map(|result| result.show.into_show(&self.default_image))
            .collect();

        debug!(term, count = shows.len(), "shows fetched");
        Ok(shows)
    }

    fn fetch_episodes(&self, show_id: u64) -> Result<Vec<Episode>, ListingsError> {
        let url = format!("{}/shows/{}/episodes", self.base_url, show_id);

        let response = self.send(&url, &[])?;

        // Check if the show exists
        if response.status() == 404 {
            return Err(ListingsError::ShowNotFound(show_id));
        }

        let episodes: Vec<TvMazeEpisode> = Self::decode(response)?;

        debug!(show_id, count = episodes.len(), "episodes fetched");
        Ok(episodes.into_iter().map(Episode::from).collect())
    }
}
