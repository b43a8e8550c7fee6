use log::info;

use crate::api::{HttpRecipeApi, RecipeApi};
use crate::config::ResolvedConfig;
use crate::model::SearchMode;
use crate::view::{Outcome, Request, Ticket, ViewController, ViewState};
use crate::RecipeError;

/// Drives a [`ViewController`] against a [`RecipeApi`]
///
/// Each user action performs at most one request and applies its outcome
/// before returning.
pub struct RecipeFinder<A: RecipeApi> {
    api: A,
    view: ViewController,
}

impl RecipeFinder<HttpRecipeApi> {
    pub fn from_config(config: &ResolvedConfig) -> Result<Self, RecipeError> {
        Ok(Self::with_api(HttpRecipeApi::new(config)?))
    }
}

impl<A: RecipeApi> RecipeFinder<A> {
    pub fn with_api(api: A) -> Self {
        RecipeFinder {
            api,
            view: ViewController::new(),
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn controller(&self) -> &ViewController {
        &self.view
    }

    pub fn state(&self) -> &ViewState {
        self.view.state()
    }

    /// Search in the given mode. Blank text is ignored.
    pub async fn search(&mut self, mode: SearchMode, text: &str) -> &ViewState {
        if let Some(ticket) = self.view.submit(mode, text) {
            info!("Searching recipes by {}: {:?}", mode, text);
            self.run(ticket).await;
        }
        self.view.state()
    }

    /// Load and show the details of one recipe
    pub async fn open(&mut self, id: u64) -> &ViewState {
        info!("Loading recipe {}", id);
        let ticket = self.view.select(id);
        self.run(ticket).await;
        self.view.state()
    }

    /// Return from the detail view to the result list
    pub fn back(&mut self) -> bool {
        self.view.back()
    }

    async fn run(&mut self, ticket: Ticket) {
        let outcome: Outcome = match ticket.request() {
            Request::Search(query) => self.api.search(query).await.into(),
            Request::Details(id) => self.api.details(*id).await.into(),
        };
        self.view.apply(&ticket, outcome);
    }
}
