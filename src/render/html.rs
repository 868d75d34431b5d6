//! HTML page model
//!
//! `HtmlPage` keeps the rendered markup of both regions and can serialize the
//! whole page into a standalone HTML document.

use super::markup::{PageTemplate, episode_item, show_card};
use super::{CardId, RenderError, View};
use crate::listings::{Episode, Show};
use askama::Template;

/// A rendered show card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowCard {
    /// Position of the card in the show list
    pub card: CardId,
    /// Identifier of the show, also present as `data-show-id` in the markup
    pub show_id: u64,
    /// The card markup
    pub markup: String,
}

/// The region holding show cards
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShowList {
    cards: Vec<ShowCard>,
}

impl ShowList {
    /// Replaces all cards with one card per show
    ///
    /// The previous cards stay in place if any card fails to render.
    fn replace(&mut self, shows: &[Show]) -> Result<(), RenderError> {
        self.cards = shows
            .iter()
            .enumerate()
            .map(|(index, show)| {
                Ok(ShowCard {
                    card: CardId(index),
                    show_id: show.id,
                    markup: show_card(show)?,
                })
            })
            .collect::<Result<_, RenderError>>()?;
        Ok(())
    }

    pub fn cards(&self) -> &[ShowCard] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

/// The region holding episode items, hidden until episodes are rendered
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EpisodeArea {
    items: Vec<String>,
    visible: bool,
}

impl EpisodeArea {
    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }
}

/// An HTML page with a search form, a show list and an episode area
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HtmlPage {
    search_term: String,
    shows: ShowList,
    episodes: EpisodeArea,
}

impl HtmlPage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value shown in the search input
    pub fn set_search_term(&mut self, term: &str) {
        self.search_term = term.to_string();
    }

    pub fn shows(&self) -> &ShowList {
        &self.shows
    }

    pub fn episodes(&self) -> &EpisodeArea {
        &self.episodes
    }

    /// Serializes the page into a complete HTML document
    pub fn to_document(&self) -> Result<String, RenderError> {
        let template = PageTemplate {
            search_term: &self.search_term,
            cards: self.shows.cards(),
            episodes_visible: self.episodes.is_visible(),
            items: self.episodes.items(),
        };
        Ok(template.render()?)
    }
}

impl View for HtmlPage {
    fn render_shows(&mut self, shows: &[Show]) -> Result<(), RenderError> {
        self.shows.replace(shows)
    }

    fn render_episodes(&mut self, episodes: &[Episode]) -> Result<(), RenderError> {
        self.episodes.items = episodes
            .iter()
            .map(episode_item)
            .collect::<Result<_, RenderError>>()?;
        self.episodes.visible = true;
        Ok(())
    }

    fn show_search_term(&mut self, term: &str) {
        self.set_search_term(term);
    }

    fn hide_episodes(&mut self) -> Result<(), RenderError> {
        self.episodes.visible = false;
        Ok(())
    }
}
