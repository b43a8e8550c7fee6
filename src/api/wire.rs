//! JSON shapes returned by the recipe API.
//!
//! These types stay at the API boundary; the rest of the crate only sees
//! [`RecipeSummary`] and [`RecipeDetail`].

use serde::Deserialize;

use crate::model::{RecipeDetail, RecipeSummary};

/// Body of a search response
///
/// `complexSearch` wraps its hits in a `results` field while
/// `findByIngredients` returns a bare array.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum SearchResponse {
    Wrapped { results: Vec<SummaryItem> },
    Bare(Vec<SummaryItem>),
}

#[derive(Debug, Deserialize)]
pub struct SummaryItem {
    id: u64,
    #[serde(default)]
    title: String,
    #[serde(default)]
    image: Option<String>,
}

impl SearchResponse {
    pub fn into_summaries(self) -> Vec<RecipeSummary> {
        let items = match self {
            SearchResponse::Wrapped { results } => results,
            SearchResponse::Bare(items) => items,
        };
        items.into_iter().map(RecipeSummary::from).collect()
    }
}

impl From<SummaryItem> for RecipeSummary {
    fn from(item: SummaryItem) -> Self {
        RecipeSummary {
            id: item.id,
            title: item.title,
            image_url: item.image,
        }
    }
}

/// Body of a `/recipes/{id}/information` response
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailResponse {
    id: u64,
    #[serde(default)]
    title: String,
    #[serde(default)]
    image: Option<String>,
    #[serde(default)]
    ready_in_minutes: Option<u32>,
    #[serde(default)]
    servings: Option<u32>,
    #[serde(default)]
    extended_ingredients: Option<Vec<IngredientItem>>,
    #[serde(default)]
    analyzed_instructions: Option<Vec<InstructionBlock>>,
}

#[derive(Debug, Deserialize)]
struct IngredientItem {
    #[serde(default)]
    original: Option<String>,
}

#[derive(Debug, Deserialize)]
struct InstructionBlock {
    #[serde(default)]
    steps: Option<Vec<StepItem>>,
}

#[derive(Debug, Deserialize)]
struct StepItem {
    #[serde(default)]
    step: Option<String>,
}

impl From<DetailResponse> for RecipeDetail {
    fn from(body: DetailResponse) -> Self {
        let ingredients = body
            .extended_ingredients
            .unwrap_or_default()
            .into_iter()
            .filter_map(|i| i.original)
            .collect();

        // Only the first instruction block is shown
        let instruction_steps = body
            .analyzed_instructions
            .unwrap_or_default()
            .into_iter()
            .next()
            .and_then(|block| block.steps)
            .unwrap_or_default()
            .into_iter()
            .filter_map(|s| s.step)
            .collect();

        RecipeDetail {
            id: body.id,
            title: body.title,
            image_url: body.image,
            ready_in_minutes: body.ready_in_minutes,
            servings: body.servings,
            ingredients,
            instruction_steps,
        }
    }
}
