use async_trait::async_trait;
use log::{debug, warn};
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::error::Error;
use url::Url;

use crate::api::{DetailResponse, RecipeApi, SearchResponse};
use crate::config::ResolvedConfig;
use crate::model::{RecipeDetail, RecipeSummary, SearchQuery};
use crate::query::{redacted, QueryBuilder};
use crate::RecipeError;

/// [`RecipeApi`] backed by the recipe HTTP API
pub struct HttpRecipeApi {
    client: Client,
    queries: QueryBuilder,
}

impl HttpRecipeApi {
    /// Create a client from resolved configuration
    ///
    /// A timeout is only applied when the configuration sets one.
    pub fn new(config: &ResolvedConfig) -> Result<Self, RecipeError> {
        let queries = QueryBuilder::new(config)?;

        let mut builder = Client::builder().user_agent(concat!(
            "recipe-finder/",
            env!("CARGO_PKG_VERSION")
        ));
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(|e| {
            RecipeError::BuilderError(format!("Failed to create HTTP client: {}", e))
        })?;

        Ok(HttpRecipeApi { client, queries })
    }

    pub fn queries(&self) -> &QueryBuilder {
        &self.queries
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: Url,
    ) -> Result<T, Box<dyn Error + Send + Sync>> {
        debug!("GET {}", redacted(&url));

        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(format!("Recipe API responded with status: {}", status).into());
        }

        let body = response.text().await?;
        debug!("Received {} bytes", body.len());
        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl RecipeApi for HttpRecipeApi {
    async fn search(&self, query: &SearchQuery) -> Result<Vec<RecipeSummary>, RecipeError> {
        let url = self
            .queries
            .search_url(query)
            .map_err(RecipeError::search_failed)?;

        match self.get_json::<SearchResponse>(url).await {
            Ok(body) => {
                let summaries = body.into_summaries();
                debug!(
                    "Search by {} for {:?} returned {} recipes",
                    query.mode(),
                    query.text(),
                    summaries.len()
                );
                Ok(summaries)
            }
            Err(e) => {
                warn!("Search by {} for {:?} failed: {}", query.mode(), query.text(), e);
                Err(RecipeError::search_failed(e))
            }
        }
    }

    async fn details(&self, id: u64) -> Result<RecipeDetail, RecipeError> {
        let url = self
            .queries
            .details_url(id)
            .map_err(RecipeError::details_failed)?;

        match self.get_json::<DetailResponse>(url).await {
            Ok(body) => Ok(body.into()),
            Err(e) => {
                warn!("Fetching details for recipe {} failed: {}", id, e);
                Err(RecipeError::details_failed(e))
            }
        }
    }
}
