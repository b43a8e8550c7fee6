mod http;
mod wire;

pub use http::HttpRecipeApi;
pub use wire::{DetailResponse, SearchResponse};

use async_trait::async_trait;

use crate::model::{RecipeDetail, RecipeSummary, SearchQuery};
use crate::RecipeError;

/// Source of recipe search results and details
///
/// Implementations perform exactly one request per call and never retry.
/// Any failure is reported as [`RecipeError::SearchFailed`] or
/// [`RecipeError::DetailsFailed`].
#[async_trait]
pub trait RecipeApi: Send + Sync {
    /// Run a search and return the matching summaries
    async fn search(&self, query: &SearchQuery) -> Result<Vec<RecipeSummary>, RecipeError>;

    /// Fetch the full record for one recipe
    async fn details(&self, id: u64) -> Result<RecipeDetail, RecipeError>;
}
