/// Data structures and traits for TV listings retrieval.
///
/// This module provides the display entities for shows and episodes, the
/// image fallback policy applied to search results, and the trait listings
/// providers implement.
mod tvmaze;
mod tvmaze_types;

pub use tvmaze::TvMazeProvider;
pub use tvmaze_types::ImageLinks;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur during listings retrieval operations.
#[derive(Debug, Error)]
pub enum ListingsError {
    /// The request failed in transport or returned a non-success status
    #[error("Request failed: {0}")]
    Network(String),

    /// The requested show does not exist upstream
    #[error("Show not found: {0}")]
    ShowNotFound(u64),

    /// The response body did not have the expected shape
    #[error("Unexpected API response at '{path}': {message}")]
    Shape { path: String, message: String },
}

/// A single TV series search result, ready for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Show {
    /// Upstream show identifier
    pub id: u64,
    /// The show title
    pub name: String,
    /// Summary, possibly containing HTML markup
    pub summary: String,
    /// Artwork URL, never empty
    pub image: String,
}

/// A single episode of a show.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Episode {
    /// Upstream episode identifier
    pub id: u64,
    /// The episode title (absent for untitled episodes)
    pub name: Option<String>,
    /// The season number this episode belongs to
    pub season: u32,
    /// The episode number within the season (absent for specials)
    pub number: Option<u32>,
}

/// Picks the artwork URL for a show.
///
/// The medium resolution URL wins, then the original resolution URL, then
/// `default`. Empty URLs count as missing.
pub fn resolve_image(image: Option<&ImageLinks>, default: &str) -> String {
    fn usable(url: &Option<String>) -> Option<&str> {
        url.as_deref().filter(|url| !url.is_empty())
    }

    let medium = image.and_then(|links| usable(&links.medium));
    let original = image.and_then(|links| usable(&links.original));

    match (medium, original) {
        (Some(medium), _) => medium.to_string(),
        (None, Some(original)) => original.to_string(),
        (None, None) => default.to_string(),
    }
}

/// Trait for providers that can search shows and list their episodes.
///
/// Implementors talk to a concrete listings source such as TVMaze. Both
/// operations return results in upstream order.
pub trait ListingsProvider {
    /// Searches shows by free-text title.
    ///
    /// # Arguments
    ///
    /// * `term` - The search term, sent as-is (an empty term is not rejected)
    ///
    /// # Returns
    ///
    /// The matching shows with their image fallback applied
    fn search_shows(&self, term: &str) -> Result<Vec<Show>, ListingsError>;

    /// Lists every episode of the given show.
    fn fetch_episodes(&self, show_id: u64) -> Result<Vec<Episode>, ListingsError>;
}
