//! Show browser composition root
//!
//! `ShowBrowser` wires a listings provider to a view and runs the two
//! pipelines: searching shows and listing the episodes of a rendered show.
//! It keeps the association between rendered cards and the shows they
//! display, so resolving a clicked card never depends on the rendered output.

use crate::listings::{ListingsError, ListingsProvider, Show};
use crate::render::{CardId, RenderError, View};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can occur while running a browser pipeline
#[derive(Debug, Error)]
pub enum BrowserError {
    /// Fetching shows or episodes failed
    #[error("Listings error: {0}")]
    Listings(#[from] ListingsError),

    /// Rendering into the view failed
    #[error("Render error: {0}")]
    Render(#[from] RenderError),

    /// The card is not part of the currently displayed shows
    #[error("No show card {0} is displayed")]
    UnknownCard(CardId),
}

/// Where a click inside the show region landed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// The "Episodes" button of a card (or an element inside it)
    EpisodesButton(CardId),
    /// Anywhere else on a card
    Card(CardId),
    /// The show region outside of any card
    Elsewhere,
}

/// Progress event emitted while the pipelines run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowserEvent {
    /// A search was submitted
    SearchStarted { term: String },

    /// Search results replaced the show region
    ShowsRendered { count: usize },

    /// Episodes of a displayed show were requested
    EpisodesRequested { show_id: u64, show_name: String },

    /// Episodes replaced the episode region
    EpisodesRendered { show_id: u64, count: usize },
}

type ErrorHandler = Box<dyn FnMut(&BrowserError)>;
type EventHandler = Box<dyn FnMut(BrowserEvent)>;

/// Runs the search and episode pipelines against a provider and a view
pub struct ShowBrowser<P, V>
where
    P: ListingsProvider,
    V: View,
{
    provider: P,
    view: V,
    /// Shows backing the rendered cards, indexed by `CardId`
    cards: Vec<Show>,
    on_error: Option<ErrorHandler>,
    on_event: Option<EventHandler>,
}

impl<P, V> ShowBrowser<P, V>
where
    P: ListingsProvider,
    V: View,
{
    /// Creates a browser with no cards displayed
    pub fn new(provider: P, view: V) -> Self {
        Self {
            provider,
            view,
            cards: Vec::new(),
            on_error: None,
            on_event: None,
        }
    }

    /// Registers the callback every pipeline failure is presented to
    pub fn with_error_handler<F>(mut self, handler: F) -> Self
    where
        F: FnMut(&BrowserError) + 'static,
    {
        self.on_error = Some(Box::new(handler));
        self
    }

    /// Registers the callback receiving progress events
    pub fn with_event_handler<F>(mut self, handler: F) -> Self
    where
        F: FnMut(BrowserEvent) + 'static,
    {
        self.on_event = Some(Box::new(handler));
        self
    }

    /// Searches shows and renders them
    ///
    /// Waits for the fetch, then hides the episode region (it refers to a
    /// show from the previous results) and replaces the show cards. On
    /// failure nothing is rendered and the previous cards stay in place.
    ///
    /// # Returns
    ///
    /// The number of rendered cards
    pub fn submit_search(&mut self, term: &str) -> Result<usize, BrowserError> {
        self.emit(BrowserEvent::SearchStarted {
            term: term.to_string(),
        });

        let result = self.search_and_display(term);
        if let Err(e) = &result {
            self.report(e);
        }
        result
    }

    fn search_and_display(&mut self, term: &str) -> Result<usize, BrowserError> {
        let shows = self.provider.search_shows(term)?;

        self.view.show_search_term(term);
        self.view.hide_episodes()?;
        self.view.render_shows(&shows)?;

        let count = shows.len();
        self.cards = shows;

        info!(term, count, "shows rendered");
        self.emit(BrowserEvent::ShowsRendered { count });
        Ok(count)
    }

    /// Handles a click delegated from the show region
    ///
    /// Only clicks on a card's "Episodes" button request episodes; any other
    /// target is ignored and yields `Ok(None)`.
    pub fn handle_click(&mut self, target: ClickTarget) -> Result<Option<usize>, BrowserError> {
        match target {
            ClickTarget::EpisodesButton(card) => self.request_episodes(card).map(Some),
            ClickTarget::Card(_) | ClickTarget::Elsewhere => {
                debug!(?target, "click outside an episodes button ignored");
                Ok(None)
            }
        }
    }

    /// Fetches and renders the episodes of the show behind `card`
    ///
    /// # Returns
    ///
    /// The number of rendered episodes
    pub fn request_episodes(&mut self, card: CardId) -> Result<usize, BrowserError> {
        let result = self.episodes_and_display(card);
        if let Err(e) = &result {
            self.report(e);
        }
        result
    }

    fn episodes_and_display(&mut self, card: CardId) -> Result<usize, BrowserError> {
        let show = self
            .cards
            .get(card.0)
            .ok_or(BrowserError::UnknownCard(card))?;
        let show_id = show.id;
        let show_name = show.name.clone();

        self.emit(BrowserEvent::EpisodesRequested { show_id, show_name });

        let episodes = self.provider.fetch_episodes(show_id)?;
        self.view.render_episodes(&episodes)?;

        let count = episodes.len();
        info!(show_id, count, "episodes rendered");
        self.emit(BrowserEvent::EpisodesRendered { show_id, count });
        Ok(count)
    }

    /// Iterates the displayed shows with their card identifiers
    pub fn cards(&self) -> impl Iterator<Item = (CardId, &Show)> {
        self.cards
            .iter()
            .enumerate()
            .map(|(index, show)| (CardId(index), show))
    }

    /// Returns the show displayed on `card`
    pub fn show_for(&self, card: CardId) -> Option<&Show> {
        self.cards.get(card.0)
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    fn emit(&mut self, event: BrowserEvent) {
        if let Some(handler) = self.on_event.as_mut() {
            handler(event);
        }
    }

    fn report(&mut self, error: &BrowserError) {
        warn!(%error, "pipeline failed");
        if let Some(handler) = self.on_error.as_mut() {
            handler(error);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listings::Episode;
    use crate::render::HtmlPage;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Provider returning canned data and recording every call
    #[derive(Default)]
    struct RecordingProvider {
        shows: Vec<Show>,
        episodes: Vec<Episode>,
        fail: bool,
        searches: RefCell<Vec<String>>,
        episode_requests: RefCell<Vec<u64>>,
    }

    impl ListingsProvider for RecordingProvider {
        fn search_shows(&self, term: &str) -> Result<Vec<Show>, ListingsError> {
            self.searches.borrow_mut().push(term.to_string());
            if self.fail {
                return Err(ListingsError::Network("HTTP 503 Service Unavailable".to_string()));
            }
            Ok(self.shows.clone())
        }

        fn fetch_episodes(&self, show_id: u64) -> Result<Vec<Episode>, ListingsError> {
            self.episode_requests.borrow_mut().push(show_id);
            if self.fail {
                return Err(ListingsError::ShowNotFound(show_id));
            }
            Ok(self.episodes.clone())
        }
    }

    fn show(id: u64, name: &str) -> Show {
        Show {
            id,
            name: name.to_string(),
            summary: String::new(),
            image: format!("http://img/{}.jpg", id),
        }
    }

    fn episode(id: u64, number: u32) -> Episode {
        Episode {
            id,
            name: Some(format!("Episode {}", number)),
            season: 1,
            number: Some(number),
        }
    }

    fn browser_with(provider: RecordingProvider) -> ShowBrowser<RecordingProvider, HtmlPage> {
        ShowBrowser::new(provider, HtmlPage::new())
    }

    #[test]
    fn test_search_hides_episodes_and_renders_in_order() {
        let provider = RecordingProvider {
            shows: vec![
                show(1, "The Bletchley Circle"),
                show(2, "The Bletchley Circle: San Francisco"),
            ],
            episodes: vec![episode(10, 1)],
            ..Default::default()
        };
        let mut browser = browser_with(provider);

        browser.submit_search("bletchley").unwrap();
        browser.request_episodes(CardId(0)).unwrap();
        assert!(browser.view().episodes().is_visible());

        let count = browser.submit_search("bletchley").unwrap();
        assert_eq!(count, 2);
        assert!(!browser.view().episodes().is_visible());

        let ids: Vec<u64> = browser.view().shows().cards().iter().map(|c| c.show_id).collect();
        assert_eq!(ids, vec![1, 2]);
        assert_eq!(
            *browser.provider().searches.borrow(),
            vec!["bletchley".to_string(), "bletchley".to_string()]
        );
    }

    #[test]
    fn test_empty_term_is_sent_as_is() {
        let mut browser = browser_with(RecordingProvider::default());
        assert_eq!(browser.submit_search("").unwrap(), 0);
        assert_eq!(*browser.provider().searches.borrow(), vec![String::new()]);
        assert!(browser.view().shows().is_empty());
    }

    #[test]
    fn test_episode_request_uses_card_show_id() {
        let provider = RecordingProvider {
            shows: vec![show(7, "Seven"), show(42, "Forty-Two"), show(9, "Nine")],
            episodes: vec![episode(100, 1), episode(101, 2)],
            ..Default::default()
        };
        let mut browser = browser_with(provider);
        browser.submit_search("any").unwrap();

        let count = browser
            .handle_click(ClickTarget::EpisodesButton(CardId(1)))
            .unwrap();

        assert_eq!(count, Some(2));
        assert_eq!(*browser.provider().episode_requests.borrow(), vec![42]);
        assert_eq!(browser.view().episodes().items().len(), 2);
    }

    #[test]
    fn test_clicks_outside_episodes_button_are_ignored() {
        let provider = RecordingProvider {
            shows: vec![show(1, "One")],
            ..Default::default()
        };
        let mut browser = browser_with(provider);
        browser.submit_search("one").unwrap();

        assert_eq!(browser.handle_click(ClickTarget::Card(CardId(0))).unwrap(), None);
        assert_eq!(browser.handle_click(ClickTarget::Elsewhere).unwrap(), None);
        assert!(browser.provider().episode_requests.borrow().is_empty());
        assert!(!browser.view().episodes().is_visible());
    }

    #[test]
    fn test_no_episodes_still_shows_region() {
        let provider = RecordingProvider {
            shows: vec![show(1, "One")],
            ..Default::default()
        };
        let mut browser = browser_with(provider);
        browser.submit_search("one").unwrap();
        assert!(!browser.view().episodes().is_visible());

        assert_eq!(browser.request_episodes(CardId(0)).unwrap(), 0);
        assert!(browser.view().episodes().is_visible());
        assert!(browser.view().episodes().items().is_empty());
    }

    #[test]
    fn test_unknown_card_is_reported() {
        let errors = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&errors);

        let mut browser = browser_with(RecordingProvider::default())
            .with_error_handler(move |e| sink.borrow_mut().push(e.to_string()));

        let result = browser.request_episodes(CardId(3));
        assert!(matches!(result, Err(BrowserError::UnknownCard(CardId(3)))));
        assert!(browser.provider().episode_requests.borrow().is_empty());
        assert_eq!(*errors.borrow(), vec!["No show card #4 is displayed".to_string()]);
    }

    #[test]
    fn test_unknown_card_at_max_index_is_reported() {
        let errors = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&errors);

        let mut browser = browser_with(RecordingProvider::default())
            .with_error_handler(move |e| sink.borrow_mut().push(e.to_string()));

        let result = browser.request_episodes(CardId(usize::MAX));
        assert!(matches!(result, Err(BrowserError::UnknownCard(_))));
        assert_eq!(
            *errors.borrow(),
            vec![format!("No show card #{} is displayed", usize::MAX as u128 + 1)]
        );
    }

    #[test]
    fn test_search_term_is_recorded_on_page() {
        let provider = RecordingProvider {
            shows: vec![show(1, "The Bletchley Circle")],
            ..Default::default()
        };
        let mut browser = browser_with(provider);
        browser.submit_search("bletchley").unwrap();

        let document = browser.view().to_document().unwrap();
        assert!(document.contains("id=\"searchForm-term\" name=\"q\" value=\"bletchley\""));
    }

    #[test]
    fn test_failed_search_keeps_previous_term() {
        let provider = RecordingProvider {
            shows: vec![show(1, "One")],
            ..Default::default()
        };
        let mut browser = browser_with(provider);
        browser.submit_search("one").unwrap();

        browser.provider.fail = true;
        assert!(browser.submit_search("two").is_err());

        let document = browser.view().to_document().unwrap();
        assert!(document.contains("value=\"one\""));
    }

    #[test]
    fn test_failed_search_keeps_previous_cards() {
        let errors = Rc::new(RefCell::new(0));
        let sink = Rc::clone(&errors);

        let provider = RecordingProvider {
            shows: vec![show(1, "One")],
            ..Default::default()
        };
        let mut browser =
            browser_with(provider).with_error_handler(move |_| *sink.borrow_mut() += 1);
        browser.submit_search("one").unwrap();

        browser.provider.fail = true;
        let result = browser.submit_search("two");

        assert!(matches!(
            result,
            Err(BrowserError::Listings(ListingsError::Network(_)))
        ));
        assert_eq!(*errors.borrow(), 1);
        assert_eq!(browser.view().shows().len(), 1);
        assert_eq!(browser.show_for(CardId(0)).map(|s| s.id), Some(1));
    }

    #[test]
    fn test_failed_episode_fetch_is_reported() {
        let errors = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&errors);

        let provider = RecordingProvider {
            shows: vec![show(5, "Five")],
            ..Default::default()
        };
        let mut browser =
            browser_with(provider).with_error_handler(move |e| sink.borrow_mut().push(e.to_string()));
        browser.submit_search("five").unwrap();

        browser.provider.fail = true;
        let result = browser.request_episodes(CardId(0));

        assert!(matches!(
            result,
            Err(BrowserError::Listings(ListingsError::ShowNotFound(5)))
        ));
        assert_eq!(errors.borrow().len(), 1);
        assert!(!browser.view().episodes().is_visible());
    }

    #[test]
    fn test_events_follow_pipeline() {
        let events = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&events);

        let provider = RecordingProvider {
            shows: vec![show(3, "Three")],
            episodes: vec![episode(30, 1)],
            ..Default::default()
        };
        let mut browser =
            browser_with(provider).with_event_handler(move |e| sink.borrow_mut().push(e));

        browser.submit_search("three").unwrap();
        browser.request_episodes(CardId(0)).unwrap();

        assert_eq!(
            *events.borrow(),
            vec![
                BrowserEvent::SearchStarted {
                    term: "three".to_string()
                },
                BrowserEvent::ShowsRendered { count: 1 },
                BrowserEvent::EpisodesRequested {
                    show_id: 3,
                    show_name: "Three".to_string()
                },
                BrowserEvent::EpisodesRendered {
                    show_id: 3,
                    count: 1
                },
            ]
        );
    }

    #[test]
    fn test_cards_follow_latest_results() {
        let provider = RecordingProvider {
            shows: vec![show(1, "One"), show(2, "Two")],
            ..Default::default()
        };
        let mut browser = browser_with(provider);
        browser.submit_search("x").unwrap();

        let cards: Vec<(CardId, u64)> = browser.cards().map(|(card, s)| (card, s.id)).collect();
        assert_eq!(cards, vec![(CardId(0), 1), (CardId(1), 2)]);
        assert!(browser.show_for(CardId(2)).is_none());
    }
}
