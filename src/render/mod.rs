//! Rendering of shows and episodes into display regions
//!
//! A view owns two regions: the show list, which holds one card per show,
//! and the episode area, which starts hidden and only becomes visible once an
//! episode list has been rendered into it. Every render call fully replaces
//! the content of its region.

mod html;
mod markup;
mod terminal;

pub use html::{EpisodeArea, HtmlPage, ShowCard, ShowList};
pub use terminal::TerminalView;

use crate::listings::{Episode, Show};
use std::fmt;
use std::io;
use thiserror::Error;

/// Errors that can occur while rendering
#[derive(Debug, Error)]
pub enum RenderError {
    /// Writing rendered output failed
    #[error("Failed to write rendered output: {0}")]
    Io(#[from] io::Error),

    /// An HTML template failed to render
    #[error("Failed to render template: {0}")]
    Template(#[from] askama::Error),
}

/// Identifies a rendered show card by its position in the show list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CardId(pub usize);

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // One-based, widened so the last index does not overflow
        write!(f, "#{}", self.0 as u128 + 1)
    }
}

/// A display surface with a show region and an episode region
pub trait View {
    /// Replaces all show cards with one card per show, in input order
    fn render_shows(&mut self, shows: &[Show]) -> Result<(), RenderError>;

    /// Replaces the episode list, in input order, and makes the region visible
    fn render_episodes(&mut self, episodes: &[Episode]) -> Result<(), RenderError>;

    /// Hides the episode region
    fn hide_episodes(&mut self) -> Result<(), RenderError>;

    /// Records the term the displayed shows were searched with
    fn show_search_term(&mut self, _term: &str) {}
}

/// Renders into both views, first `A` then `B`
impl<A: View, B: View> View for (A, B) {
    fn render_shows(&mut self, shows: &[Show]) -> Result<(), RenderError> {
        self.0.render_shows(shows)?;
        self.1.render_shows(shows)
    }

    fn render_episodes(&mut self, episodes: &[Episode]) -> Result<(), RenderError> {
        self.0.render_episodes(episodes)?;
        self.1.render_episodes(episodes)
    }

    fn hide_episodes(&mut self) -> Result<(), RenderError> {
        self.0.hide_episodes()?;
        self.1.hide_episodes()
    }

    fn show_search_term(&mut self, term: &str) {
        self.0.show_search_term(term);
        self.1.show_search_term(term);
    }
}
