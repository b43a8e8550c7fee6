use std::error::Error as StdError;

use thiserror::Error;

type BoxedCause = Box<dyn StdError + Send + Sync>;

/// Errors that can occur while searching for or loading recipes
///
/// The two fetch variants display a single user-facing message whatever the
/// cause. The cause is available through [`std::error::Error::source`].
#[derive(Error, Debug)]
pub enum RecipeError {
    /// A search request failed (network, status or body)
    #[error("Failed to fetch recipes. Please try again.")]
    SearchFailed {
        #[source]
        source: BoxedCause,
    },

    /// A recipe details request failed (network, status or body)
    #[error("Failed to fetch recipe details.")]
    DetailsFailed {
        #[source]
        source: BoxedCause,
    },

    /// The configured base URL could not be turned into a request URL
    #[error("Invalid API URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),

    /// A required setting was not provided by any configuration source
    #[error("Missing setting: {0}")]
    MissingSetting(&'static str),

    /// Input rejected before any request was made
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Builder configuration error
    #[error("Builder error: {0}")]
    BuilderError(String),
}

impl RecipeError {
    pub(crate) fn search_failed(cause: impl Into<BoxedCause>) -> Self {
        RecipeError::SearchFailed {
            source: cause.into(),
        }
    }

    pub(crate) fn details_failed(cause: impl Into<BoxedCause>) -> Self {
        RecipeError::DetailsFailed {
            source: cause.into(),
        }
    }
}
