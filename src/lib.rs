//! Search a recipe API by name, ingredients or cuisine and browse the
//! results.
//!
//! The crate is split into a URL builder ([`query`]), a fetch layer
//! ([`api`]), a view-state machine ([`view`]) and a [`RecipeFinder`]
//! session tying them together.

pub mod api;
pub mod builder;
pub mod config;
pub mod error;
pub mod model;
pub mod query;
pub mod render;
pub mod session;
pub mod view;

pub mod uniffi_bindings;

pub use api::{HttpRecipeApi, RecipeApi};
pub use builder::RecipeFinderBuilder;
pub use config::{ApiConfig, ResolvedConfig};
pub use error::RecipeError;
pub use model::{RecipeDetail, RecipeSummary, SearchMode, SearchQuery};
pub use query::QueryBuilder;
pub use session::RecipeFinder;
pub use view::{Outcome, Request, Ticket, ViewController, ViewState};

/// Run one search with configuration from file and environment
///
/// # Errors
/// Returns `RecipeError::InvalidInput` for blank text without making a
/// request, and `RecipeError::SearchFailed` for any fetch failure.
pub async fn search_recipes(
    mode: SearchMode,
    text: &str,
) -> Result<Vec<RecipeSummary>, RecipeError> {
    let query = SearchQuery::new(mode, text)
        .ok_or_else(|| RecipeError::InvalidInput("Search text cannot be empty".to_string()))?;
    let api = HttpRecipeApi::new(&RecipeFinder::builder().resolve()?)?;
    api.search(&query).await
}

/// Fetch one recipe's details with configuration from file and environment
pub async fn recipe_details(id: u64) -> Result<RecipeDetail, RecipeError> {
    let api = HttpRecipeApi::new(&RecipeFinder::builder().resolve()?)?;
    api.details(id).await
}
