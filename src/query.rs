use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use url::Url;

use crate::config::ResolvedConfig;
use crate::model::{SearchMode, SearchQuery};
use crate::RecipeError;

const COMPLEX_SEARCH_PATH: &str = "/recipes/complexSearch";
const FIND_BY_INGREDIENTS_PATH: &str = "/recipes/findByIngredients";
const API_KEY_PARAM: &str = "apiKey";
const LIMIT_PARAM: &str = "number";

/// Bytes escaped inside a query value. `,` is not in the set so
/// ingredient lists reach the API untouched.
const QUERY_VALUE: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'&')
    .add(b'#')
    .add(b'+')
    .add(b'=')
    .add(b'%');

/// Builds request URLs for the recipe API
#[derive(Debug, Clone)]
pub struct QueryBuilder {
    base_url: String,
    api_key: String,
    result_limit: u32,
}

impl QueryBuilder {
    pub fn new(config: &ResolvedConfig) -> Result<Self, RecipeError> {
        let base_url = config.base_url.trim().trim_end_matches('/').to_string();
        // Base URL must parse on its own
        Url::parse(&base_url)?;

        Ok(QueryBuilder {
            base_url,
            api_key: config.api_key.clone(),
            result_limit: config.result_limit,
        })
    }

    /// Builder over a base URL that is not validated
    #[cfg(test)]
    pub(crate) fn unchecked(base_url: &str, api_key: &str) -> Self {
        QueryBuilder {
            base_url: base_url.to_string(),
            api_key: api_key.to_string(),
            result_limit: 12,
        }
    }

    /// API path used for a search mode
    pub fn search_path(mode: SearchMode) -> &'static str {
        match mode {
            SearchMode::Name | SearchMode::Cuisine => COMPLEX_SEARCH_PATH,
            SearchMode::Ingredients => FIND_BY_INGREDIENTS_PATH,
        }
    }

    /// Query parameter carrying the search text for a mode
    pub fn search_param(mode: SearchMode) -> &'static str {
        match mode {
            SearchMode::Name => "query",
            SearchMode::Ingredients => "ingredients",
            SearchMode::Cuisine => "cuisine",
        }
    }

    pub fn search_url(&self, query: &SearchQuery) -> Result<Url, RecipeError> {
        let raw = format!(
            "{}{}?{}={}&{}={}&{}={}",
            self.base_url,
            Self::search_path(query.mode()),
            Self::search_param(query.mode()),
            escape_value(query.text()),
            LIMIT_PARAM,
            self.result_limit,
            API_KEY_PARAM,
            escape_value(&self.api_key),
        );
        Ok(Url::parse(&raw)?)
    }

    pub fn details_url(&self, id: u64) -> Result<Url, RecipeError> {
        let raw = format!(
            "{}/recipes/{}/information?{}={}",
            self.base_url,
            id,
            API_KEY_PARAM,
            escape_value(&self.api_key),
        );
        Ok(Url::parse(&raw)?)
    }
}

/// Render a request URL for logging with the API key masked
pub fn redacted(url: &Url) -> String {
    let mut masked = url.clone();
    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(k, v)| {
            let v = if k == API_KEY_PARAM {
                "REDACTED".to_string()
            } else {
                v.into_owned()
            };
            (k.into_owned(), v)
        })
        .collect();
    masked.query_pairs_mut().clear().extend_pairs(pairs);
    masked.to_string()
}

fn escape_value(value: &str) -> String {
    utf8_percent_encode(value, QUERY_VALUE).to_string()
}
