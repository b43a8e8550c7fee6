//! UniFFI bindings for recipe-finder
//!
//! This module provides FFI-compatible types and functions for use with iOS and Android.
//! It wraps the async Rust API with synchronous functions that manage their own tokio runtime.

use std::fmt;
use std::time::Duration;

use crate::{RecipeApi, RecipeDetail, RecipeError, RecipeFinder, RecipeSummary, SearchMode};

// Re-export UniFFI macro
#[cfg(feature = "uniffi")]
uniffi::setup_scaffolding!();

/// FFI-compatible recipe summary
#[derive(Debug, Clone)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct FfiRecipeSummary {
    pub id: u64,
    pub title: String,
    /// Image URL (empty string if none)
    pub image_url: String,
}

/// FFI-compatible recipe detail
#[derive(Debug, Clone)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct FfiRecipeDetail {
    pub id: u64,
    pub title: String,
    /// Image URL (empty string if none)
    pub image_url: String,
    pub ready_in_minutes: Option<u32>,
    pub servings: Option<u32>,
    pub ingredients: Vec<String>,
    pub instruction_steps: Vec<String>,
}

impl From<RecipeSummary> for FfiRecipeSummary {
    fn from(summary: RecipeSummary) -> Self {
        FfiRecipeSummary {
            id: summary.id,
            title: summary.title,
            image_url: summary.image_url.unwrap_or_default(),
        }
    }
}

impl From<RecipeDetail> for FfiRecipeDetail {
    fn from(detail: RecipeDetail) -> Self {
        FfiRecipeDetail {
            id: detail.id,
            title: detail.title,
            image_url: detail.image_url.unwrap_or_default(),
            ready_in_minutes: detail.ready_in_minutes,
            servings: detail.servings,
            ingredients: detail.ingredients,
            instruction_steps: detail.instruction_steps,
        }
    }
}

/// FFI-compatible search mode
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Enum))]
pub enum FfiSearchMode {
    Name,
    Ingredients,
    Cuisine,
}

impl From<FfiSearchMode> for SearchMode {
    fn from(mode: FfiSearchMode) -> Self {
        match mode {
            FfiSearchMode::Name => SearchMode::Name,
            FfiSearchMode::Ingredients => SearchMode::Ingredients,
            FfiSearchMode::Cuisine => SearchMode::Cuisine,
        }
    }
}

/// FFI-compatible error type
#[derive(Debug, Clone)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Error))]
pub enum FfiRecipeError {
    /// Search request failed
    SearchFailed { message: String },
    /// Details request failed
    DetailsFailed { message: String },
    /// Invalid input provided
    InvalidInput { message: String },
    /// Configuration error
    ConfigError { message: String },
    /// Runtime error (tokio)
    RuntimeError { message: String },
}

impl fmt::Display for FfiRecipeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FfiRecipeError::SearchFailed { message } => write!(f, "{}", message),
            FfiRecipeError::DetailsFailed { message } => write!(f, "{}", message),
            FfiRecipeError::InvalidInput { message } => write!(f, "Invalid input: {}", message),
            FfiRecipeError::ConfigError { message } => write!(f, "Config error: {}", message),
            FfiRecipeError::RuntimeError { message } => write!(f, "Runtime error: {}", message),
        }
    }
}

impl std::error::Error for FfiRecipeError {}

impl From<RecipeError> for FfiRecipeError {
    fn from(err: RecipeError) -> Self {
        let message = err.to_string();
        match err {
            RecipeError::SearchFailed { .. } => FfiRecipeError::SearchFailed { message },
            RecipeError::DetailsFailed { .. } => FfiRecipeError::DetailsFailed { message },
            RecipeError::InvalidInput(msg) => FfiRecipeError::InvalidInput { message: msg },
            RecipeError::InvalidUrl(_)
            | RecipeError::ConfigError(_)
            | RecipeError::MissingSetting(_)
            | RecipeError::BuilderError(_) => FfiRecipeError::ConfigError { message },
        }
    }
}

/// Connection settings; unset fields fall back to config file and environment
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct FfiApiConfig {
    pub base_url: Option<String>,
    pub api_key: Option<String>,
    pub result_limit: Option<u32>,
    pub timeout_seconds: Option<u64>,
}

/// Create a new tokio runtime for FFI calls
fn create_runtime() -> Result<tokio::runtime::Runtime, FfiRecipeError> {
    tokio::runtime::Runtime::new().map_err(|e| FfiRecipeError::RuntimeError {
        message: format!("Failed to create async runtime: {}", e),
    })
}

fn finder_for(
    config: Option<FfiApiConfig>,
) -> Result<RecipeFinder<crate::HttpRecipeApi>, FfiRecipeError> {
    let config = config.unwrap_or_default();
    let mut builder = RecipeFinder::builder();

    if let Some(url) = config.base_url {
        builder = builder.base_url(url);
    }
    if let Some(key) = config.api_key {
        builder = builder.api_key(key);
    }
    if let Some(limit) = config.result_limit {
        builder = builder.result_limit(limit);
    }
    if let Some(secs) = config.timeout_seconds {
        builder = builder.timeout(Duration::from_secs(secs));
    }

    Ok(builder.build()?)
}

/// Search recipes
///
/// # Arguments
/// * `mode` - What the text searches by
/// * `text` - Search text; must not be blank
/// * `config` - Optional connection settings
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn search_recipes(
    mode: FfiSearchMode,
    text: String,
    config: Option<FfiApiConfig>,
) -> Result<Vec<FfiRecipeSummary>, FfiRecipeError> {
    let query = crate::SearchQuery::new(mode.into(), text).ok_or_else(|| {
        FfiRecipeError::InvalidInput {
            message: "Search text cannot be empty".to_string(),
        }
    })?;
    let finder = finder_for(config)?;

    let rt = create_runtime()?;
    rt.block_on(async {
        let results = finder.api().search(&query).await?;
        Ok(results.into_iter().map(Into::into).collect())
    })
}

/// Fetch the full recipe for an id
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn get_recipe_details(
    id: u64,
    config: Option<FfiApiConfig>,
) -> Result<FfiRecipeDetail, FfiRecipeError> {
    let finder = finder_for(config)?;

    let rt = create_runtime()?;
    rt.block_on(async {
        let detail = finder.api().details(id).await?;
        Ok(detail.into())
    })
}

/// Get the library version
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ffi_detail_conversion() {
        let detail = RecipeDetail {
            id: 11,
            title: "Test Recipe".to_string(),
            image_url: None,
            ready_in_minutes: Some(20),
            servings: Some(2),
            ingredients: vec!["2 eggs".to_string(), "1 cup flour".to_string()],
            instruction_steps: vec!["Mix together and bake.".to_string()],
        };

        let ffi: FfiRecipeDetail = detail.into();
        assert_eq!(ffi.id, 11);
        assert_eq!(ffi.image_url, "");
        assert_eq!(ffi.ingredients.len(), 2);
        assert_eq!(ffi.instruction_steps.len(), 1);
    }

    #[test]
    fn test_error_conversion_keeps_message() {
        let err: FfiRecipeError = RecipeError::InvalidInput("blank".to_string()).into();
        assert!(matches!(err, FfiRecipeError::InvalidInput { ref message } if message == "blank"));

        let err: FfiRecipeError = RecipeError::MissingSetting("api_key").into();
        assert_eq!(err.to_string(), "Config error: Missing setting: api_key");
    }

    #[test]
    fn test_blank_search_is_rejected() {
        let result = search_recipes(FfiSearchMode::Name, "  ".to_string(), None);
        assert!(matches!(result, Err(FfiRecipeError::InvalidInput { .. })));
    }

    #[test]
    fn test_get_version() {
        let version = get_version();
        assert!(!version.is_empty());
    }
}
