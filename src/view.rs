//! View state for the search and detail screens.
//!
//! [`ViewController`] is a plain state machine with no I/O. Every fetch it
//! asks for is handed out as a [`Ticket`]; the caller performs the request
//! and passes the outcome back through [`ViewController::apply`]. Only the
//! most recently issued ticket can change the state, so a slow response to
//! an older request is dropped instead of overwriting newer results.

use log::{debug, warn};
use std::error::Error;

use crate::model::{RecipeDetail, RecipeSummary, SearchMode, SearchQuery};
use crate::RecipeError;

/// What the screen is currently showing
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ViewState {
    #[default]
    Idle,
    Loading,
    ListResults(Vec<RecipeSummary>),
    Detail(RecipeDetail),
    Error(String),
}

/// A fetch the controller wants performed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    Search(SearchQuery),
    Details(u64),
}

/// Handle for an issued request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticket {
    generation: u64,
    request: Request,
}

impl Ticket {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn request(&self) -> &Request {
        &self.request
    }
}

/// Result of performing a ticket's request
#[derive(Debug)]
pub enum Outcome {
    Results(Vec<RecipeSummary>),
    Detail(RecipeDetail),
    Failed(RecipeError),
}

impl From<Result<Vec<RecipeSummary>, RecipeError>> for Outcome {
    fn from(result: Result<Vec<RecipeSummary>, RecipeError>) -> Self {
        match result {
            Ok(results) => Outcome::Results(results),
            Err(e) => Outcome::Failed(e),
        }
    }
}

impl From<Result<RecipeDetail, RecipeError>> for Outcome {
    fn from(result: Result<RecipeDetail, RecipeError>) -> Self {
        match result {
            Ok(detail) => Outcome::Detail(detail),
            Err(e) => Outcome::Failed(e),
        }
    }
}

#[derive(Debug, Default)]
pub struct ViewController {
    state: ViewState,
    /// Most recent successful result list, restored by `back`
    results: Vec<RecipeSummary>,
    last_query: Option<SearchQuery>,
    generation: u64,
    pending: Option<u64>,
}

impl ViewController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, ViewState::Loading)
    }

    /// Result list kept for the list view, even while a detail is shown
    pub fn results(&self) -> &[RecipeSummary] {
        &self.results
    }

    pub fn last_query(&self) -> Option<&SearchQuery> {
        self.last_query.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        match &self.state {
            ViewState::Error(message) => Some(message),
            _ => None,
        }
    }

    /// True when a search went through and found nothing
    pub fn shows_empty_notice(&self) -> bool {
        matches!(&self.state, ViewState::ListResults(items) if items.is_empty())
            && self.last_query.is_some()
    }

    /// Start a search. Blank text issues nothing and leaves the state alone.
    pub fn submit(&mut self, mode: SearchMode, text: &str) -> Option<Ticket> {
        let query = SearchQuery::new(mode, text)?;
        Some(self.submit_query(query))
    }

    pub fn submit_query(&mut self, query: SearchQuery) -> Ticket {
        self.last_query = Some(query.clone());
        self.issue(Request::Search(query))
    }

    /// Start loading the details of one recipe
    pub fn select(&mut self, id: u64) -> Ticket {
        self.issue(Request::Details(id))
    }

    /// Leave the detail view for the previous result list without re-fetching.
    ///
    /// Returns `false` and does nothing unless a detail is shown.
    pub fn back(&mut self) -> bool {
        if !matches!(self.state, ViewState::Detail(_)) {
            return false;
        }
        self.state = ViewState::ListResults(self.results.clone());
        true
    }

    /// Apply the outcome of a ticket's request.
    ///
    /// Returns `false` when the ticket was superseded or the outcome does
    /// not match the request kind; the state is left untouched then.
    pub fn apply(&mut self, ticket: &Ticket, outcome: Outcome) -> bool {
        if self.pending != Some(ticket.generation) {
            debug!(
                "Dropping stale response for request #{} (current: {:?})",
                ticket.generation, self.pending
            );
            return false;
        }

        let next = match (&ticket.request, outcome) {
            (Request::Search(_), Outcome::Results(items)) => {
                self.results = items.clone();
                ViewState::ListResults(items)
            }
            (Request::Details(_), Outcome::Detail(detail)) => ViewState::Detail(detail),
            (_, Outcome::Failed(err)) => {
                match err.source() {
                    Some(cause) => warn!("{} ({})", err, cause),
                    None => warn!("{}", err),
                }
                ViewState::Error(err.to_string())
            }
            (request, outcome) => {
                warn!(
                    "Outcome {:?} does not match request {:?}, ignoring",
                    outcome, request
                );
                return false;
            }
        };

        self.pending = None;
        self.state = next;
        true
    }

    fn issue(&mut self, request: Request) -> Ticket {
        self.generation += 1;
        if let Some(previous) = self.pending.replace(self.generation) {
            debug!(
                "Request #{} superseded by #{}",
                previous, self.generation
            );
        }
        self.state = ViewState::Loading;
        Ticket {
            generation: self.generation,
            request,
        }
    }
}
