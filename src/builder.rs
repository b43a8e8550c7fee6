use std::time::Duration;

use crate::api::HttpRecipeApi;
use crate::config::{ApiConfig, ResolvedConfig};
use crate::session::RecipeFinder;
use crate::RecipeError;

/// Builder for configuring a [`RecipeFinder`] backed by the HTTP API
#[derive(Debug, Default)]
pub struct RecipeFinderBuilder {
    base_url: Option<String>,
    api_key: Option<String>,
    result_limit: Option<u32>,
    timeout: Option<Duration>,
    skip_config: bool,
}

impl RecipeFinderBuilder {
    /// Set the API base URL
    ///
    /// # Example
    /// ```
    /// use recipe_finder::RecipeFinderBuilder;
    ///
    /// let builder = RecipeFinderBuilder::default()
    ///     .base_url("https://api.spoonacular.com");
    /// ```
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the API key
    ///
    /// This allows passing the key directly instead of relying on
    /// environment variables or config files.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Set how many results a search asks for
    pub fn result_limit(mut self, limit: u32) -> Self {
        self.result_limit = Some(limit);
        self
    }

    /// Set a timeout for HTTP requests
    ///
    /// # Example
    /// ```
    /// use recipe_finder::RecipeFinderBuilder;
    /// use std::time::Duration;
    ///
    /// let builder = RecipeFinderBuilder::default()
    ///     .timeout(Duration::from_secs(30));
    /// ```
    pub fn timeout(mut self, duration: Duration) -> Self {
        self.timeout = Some(duration);
        self
    }

    /// Ignore config files and environment variables
    pub fn without_config(mut self) -> Self {
        self.skip_config = true;
        self
    }

    /// Merge explicit settings over the loaded configuration
    ///
    /// # Errors
    /// Returns `RecipeError` if:
    /// - The configuration sources cannot be read
    /// - The base URL or API key is missing from every source
    pub fn resolve(self) -> Result<ResolvedConfig, RecipeError> {
        let loaded = if self.skip_config {
            ApiConfig::default()
        } else {
            ApiConfig::load()?
        };

        loaded
            .with_overrides(self.base_url, self.api_key, self.result_limit, self.timeout)
            .resolve()
            .map_err(|e| match e {
                RecipeError::MissingSetting(name) => RecipeError::BuilderError(format!(
                    "No {} configured. Set it on the builder, in recipe-finder.toml or via RECIPE_FINDER__{}",
                    name,
                    name.to_uppercase()
                )),
                other => other,
            })
    }

    /// Build a ready-to-use finder
    ///
    /// # Example
    /// ```no_run
    /// # use recipe_finder::{RecipeFinder, SearchMode};
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let mut finder = RecipeFinder::builder()
    ///     .api_key("your-api-key")
    ///     .build()?;
    /// finder.search(SearchMode::Name, "pasta").await;
    /// # Ok(())
    /// # }
    /// ```
    pub fn build(self) -> Result<RecipeFinder<HttpRecipeApi>, RecipeError> {
        let config = self.resolve()?;
        RecipeFinder::from_config(&config)
    }
}

impl RecipeFinder<HttpRecipeApi> {
    /// Creates a new builder for a finder
    pub fn builder() -> RecipeFinderBuilder {
        RecipeFinderBuilder::default()
    }
}
