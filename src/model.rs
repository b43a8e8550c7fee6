use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which endpoint and query parameter a search goes through
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchMode {
    /// Free-text search on the recipe name
    #[default]
    #[serde(rename = "query", alias = "name")]
    Name,
    /// Comma separated list of ingredients
    Ingredients,
    /// Cuisine filter (italian, indian, ...)
    Cuisine,
}

impl SearchMode {
    pub const ALL: [SearchMode; 3] = [SearchMode::Name, SearchMode::Ingredients, SearchMode::Cuisine];

    /// Stable identifier for the mode
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchMode::Name => "query",
            SearchMode::Ingredients => "ingredients",
            SearchMode::Cuisine => "cuisine",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SearchMode::Name => "Recipe Name",
            SearchMode::Ingredients => "Ingredients",
            SearchMode::Cuisine => "Cuisine",
        }
    }

    /// Prompt shown next to the search input
    pub fn hint(&self) -> &'static str {
        match self {
            SearchMode::Name => "Search recipes...",
            SearchMode::Ingredients => "Enter ingredients (comma separated)",
            SearchMode::Cuisine => "Enter cuisine type (italian, indian, etc)",
        }
    }
}

impl fmt::Display for SearchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SearchMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "query" | "name" => Ok(SearchMode::Name),
            "ingredients" => Ok(SearchMode::Ingredients),
            "cuisine" => Ok(SearchMode::Cuisine),
            other => Err(format!(
                "Unknown search mode '{}', expected one of: name, ingredients, cuisine",
                other
            )),
        }
    }
}

/// A single search submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    mode: SearchMode,
    text: String,
}

impl SearchQuery {
    /// Returns `None` when `text` is empty or whitespace only.
    ///
    /// Non-blank text is kept exactly as given.
    pub fn new(mode: SearchMode, text: impl Into<String>) -> Option<Self> {
        let text = text.into();
        if text.trim().is_empty() {
            return None;
        }
        Some(SearchQuery { mode, text })
    }

    pub fn mode(&self) -> SearchMode {
        self.mode
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Minimal recipe record shown in the result list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeSummary {
    pub id: u64,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// Full recipe record, fetched on demand by id
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RecipeDetail {
    pub id: u64,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default)]
    pub ready_in_minutes: Option<u32>,
    #[serde(default)]
    pub servings: Option<u32>,
    /// Ingredient lines in recipe order
    #[serde(default)]
    pub ingredients: Vec<String>,
    /// Instruction steps in recipe order
    #[serde(default)]
    pub instruction_steps: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_query_is_rejected() {
        assert!(SearchQuery::new(SearchMode::Name, "").is_none());
        assert!(SearchQuery::new(SearchMode::Cuisine, "   \t").is_none());
    }

    #[test]
    fn test_query_text_is_kept_verbatim() {
        let query = SearchQuery::new(SearchMode::Ingredients, " egg, flour ").unwrap();
        assert_eq!(query.text(), " egg, flour ");
        assert_eq!(query.mode(), SearchMode::Ingredients);
    }

    #[test]
    fn test_mode_parsing() {
        assert_eq!("name".parse::<SearchMode>().unwrap(), SearchMode::Name);
        assert_eq!("query".parse::<SearchMode>().unwrap(), SearchMode::Name);
        assert_eq!(
            "Ingredients".parse::<SearchMode>().unwrap(),
            SearchMode::Ingredients
        );
        assert_eq!("cuisine".parse::<SearchMode>().unwrap(), SearchMode::Cuisine);

        let err = "diet".parse::<SearchMode>().unwrap_err();
        assert!(err.contains("Unknown search mode"));
    }

    #[test]
    fn test_mode_round_trips_through_as_str() {
        for mode in SearchMode::ALL {
            assert_eq!(mode.as_str().parse::<SearchMode>().unwrap(), mode);
        }
    }
}
