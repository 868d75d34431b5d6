//! HTML templates for show cards, episode items and the page
//!
//! Templates live under `templates/`. Text is auto-escaped; only the show
//! summary (already HTML upstream) and pre-rendered fragments are inserted
//! with `|safe`.

use super::RenderError;
use super::html::ShowCard;
use crate::listings::{Episode, Show};
use askama::Template;

/// Template for a single show card.
#[derive(Template)]
#[template(path = "show_card.html")]
struct ShowCardTemplate<'a> {
    id: u64,
    name: &'a str,
    summary: &'a str,
    image: &'a str,
}

/// Template for a single episode list item.
#[derive(Template)]
#[template(path = "episode_item.html")]
struct EpisodeItemTemplate<'a> {
    id: u64,
    name: &'a str,
    season: u32,
    number: String,
}

/// Template for the full page with both regions.
#[derive(Template)]
#[template(path = "page.html")]
pub(super) struct PageTemplate<'a> {
    pub search_term: &'a str,
    pub cards: &'a [ShowCard],
    pub episodes_visible: bool,
    pub items: &'a [String],
}

/// Renders the card markup for a show
///
/// The show id is carried on both the card and its "Episodes" button.
pub(super) fn show_card(show: &Show) -> Result<String, RenderError> {
    let template = ShowCardTemplate {
        id: show.id,
        name: &show.name,
        summary: &show.summary,
        image: &show.image,
    };
    Ok(template.render()?)
}

/// Renders the list item markup for an episode
pub(super) fn episode_item(episode: &Episode) -> Result<String, RenderError> {
    let number = match episode.number {
        Some(number) => format!("number {}", number),
        None => "special".to_string(),
    };

    let template = EpisodeItemTemplate {
        id: episode.id,
        name: episode.name.as_deref().unwrap_or("Untitled"),
        season: episode.season,
        number,
    };
    Ok(template.render()?)
}
