//! Show Scout - Search TV listings and browse episodes
//!
//! This library searches the TVMaze API for shows by title, renders the
//! results as show cards, and lists the episodes of a show when the
//! "Episodes" trigger on its card is used.
//!
//! The pieces are:
//!
//! * [`ListingsProvider`] - fetches shows and episodes ([`TvMazeProvider`])
//! * [`View`] - renders them into a show region and an episode region
//!   ([`HtmlPage`], [`TerminalView`])
//! * [`ShowBrowser`] - the composition root running both pipelines
//!
//! # Examples
//!
//! ```no_run
//! use show_scout::{BrowserConfig, CardId, ClickTarget, HtmlPage, tvmaze_browser};
//!
//! let config = BrowserConfig::default();
//! let mut browser = tvmaze_browser(&config, HtmlPage::new())
//!     .with_error_handler(|e| eprintln!("Error: {}", e));
//!
//! browser.submit_search("bletchley").unwrap();
//! browser
//!     .handle_click(ClickTarget::EpisodesButton(CardId(0)))
//!     .unwrap();
//!
//! println!("{}", browser.view().to_document().unwrap());
//! ```

mod browser;
mod config;
mod listings;
mod render;

// Re-export error types
pub use browser::BrowserError;
pub use listings::ListingsError;
pub use render::RenderError;

pub use browser::{BrowserEvent, ClickTarget, ShowBrowser};
pub use config::{BrowserConfig, DEFAULT_BASE_URL, DEFAULT_IMAGE_URL};
pub use listings::{Episode, ImageLinks, ListingsProvider, Show, TvMazeProvider, resolve_image};
pub use render::{CardId, EpisodeArea, HtmlPage, ShowCard, ShowList, TerminalView, View};

/// Creates a browser backed by the TVMaze API
///
/// # Arguments
///
/// * `config` - Endpoint and fallback image configuration
/// * `view` - The view both pipelines render into
pub fn tvmaze_browser<V: View>(config: &BrowserConfig, view: V) -> ShowBrowser<TvMazeProvider, V> {
    ShowBrowser::new(TvMazeProvider::new(config), view)
}
