/// TVMaze API response types for deserialization.
///
/// These structures mirror the JSON response format from the TVMaze API.
/// Only the fields the display entities need are declared; everything else in
/// the payload is ignored.
use super::{Episode, Show, resolve_image};
use serde::Deserialize;

/// One entry of the `/search/shows` response.
#[derive(Debug, Deserialize)]
pub(super) struct TvMazeSearchResult {
    /// The matched show, wrapped next to its relevance score
    pub show: TvMazeShow,
}

/// A show as embedded in a search result.
#[derive(Debug, Deserialize)]
pub(super) struct TvMazeShow {
    pub id: u64,
    pub name: String,
    /// Summary in HTML format (may be null)
    pub summary: Option<String>,
    /// Artwork links (null when the show has no artwork at all)
    pub image: Option<ImageLinks>,
}

/// Artwork URLs in the resolutions TVMaze offers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ImageLinks {
    pub medium: Option<String>,
    pub original: Option<String>,
}

/// A single episode from the `/shows/{id}/episodes` response.
#[derive(Debug, Deserialize)]
pub(super) struct TvMazeEpisode {
    pub id: u64,
    /// Episode title (may be null for episodes without a title)
    pub name: Option<String>,
    /// Season number (0 for specials)
    pub season: u32,
    /// Episode number within the season (null for specials)
    pub number: Option<u32>,
}

impl TvMazeShow {
    /// Converts into a display show, applying the image fallback.
    pub fn into_show(self, default_image: &str) -> Show {
        let image = resolve_image(self.image.as_ref(), default_image);
        Show {
            id: self.id,
            name: self.name,
            summary: self.summary.unwrap_or_default(),
            image,
        }
    }
}

impl From<TvMazeEpisode> for Episode {
    fn from(episode: TvMazeEpisode) -> Self {
        Episode {
            id: episode.id,
            name: episode.name,
            season: episode.season,
            number: episode.number,
        }
    }
}
