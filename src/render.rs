//! Plain-text rendering of the view state.

use std::fmt::{self, Write};

use crate::model::{RecipeDetail, RecipeSummary};
use crate::view::{ViewController, ViewState};

pub const PLACEHOLDER_IMAGE: &str = "/api/placeholder/600/400";
pub const EMPTY_NOTICE: &str = "No recipes found. Try different search terms.";

/// Render whatever the controller currently shows
pub fn render(view: &ViewController) -> String {
    collect(|out| write_view(out, view))
}

/// Numbered result list, one recipe per line
pub fn render_results(items: &[RecipeSummary]) -> String {
    collect(|out| write_results(out, items))
}

pub fn render_detail(detail: &RecipeDetail) -> String {
    collect(|out| write_detail(out, detail))
}

// Writing into a String cannot fail
fn collect(fill: impl FnOnce(&mut String) -> fmt::Result) -> String {
    let mut out = String::new();
    fill(&mut out).map(|()| out).unwrap_or_default()
}

fn write_view(out: &mut String, view: &ViewController) -> fmt::Result {
    match view.state() {
        ViewState::Idle => {}
        ViewState::Loading => writeln!(out, "Loading...")?,
        ViewState::Error(message) => writeln!(out, "{}", message)?,
        ViewState::ListResults(items) => write_results(out, items)?,
        ViewState::Detail(detail) => write_detail(out, detail)?,
    }

    if view.shows_empty_notice() {
        writeln!(out, "{}", EMPTY_NOTICE)?;
    }
    Ok(())
}

fn write_results(out: &mut String, items: &[RecipeSummary]) -> fmt::Result {
    for (index, recipe) in items.iter().enumerate() {
        writeln!(
            out,
            "{:>3}. {} [#{}]\n     {}",
            index + 1,
            recipe.title,
            recipe.id,
            recipe.image_url.as_deref().unwrap_or(PLACEHOLDER_IMAGE)
        )?;
    }
    Ok(())
}

fn write_detail(out: &mut String, detail: &RecipeDetail) -> fmt::Result {
    writeln!(out, "{}", detail.title)?;
    writeln!(out, "{}", "=".repeat(detail.title.chars().count()))?;
    writeln!(
        out,
        "{}\n",
        detail.image_url.as_deref().unwrap_or(PLACEHOLDER_IMAGE)
    )?;

    writeln!(out, "Ready in: {} mins", optional(detail.ready_in_minutes))?;
    writeln!(out, "Servings: {}\n", optional(detail.servings))?;

    writeln!(out, "Ingredients")?;
    for ingredient in &detail.ingredients {
        writeln!(out, "  - {}", ingredient)?;
    }

    writeln!(out, "\nInstructions")?;
    for (index, step) in detail.instruction_steps.iter().enumerate() {
        writeln!(out, "  {}. {}", index + 1, step)?;
    }
    Ok(())
}

fn optional(value: Option<u32>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SearchMode;
    use crate::view::Outcome;

    #[test]
    fn test_render_results_uses_placeholder() {
        let items = vec![
            RecipeSummary {
                id: 1,
                title: "Pasta Bake".to_string(),
                image_url: Some("https://img/1.jpg".to_string()),
            },
            RecipeSummary {
                id: 2,
                title: "Pesto".to_string(),
                image_url: None,
            },
        ];

        let text = render_results(&items);
        assert!(text.contains("  1. Pasta Bake [#1]"));
        assert!(text.contains("https://img/1.jpg"));
        assert!(text.contains("  2. Pesto [#2]"));
        assert!(text.contains(PLACEHOLDER_IMAGE));
    }

    #[test]
    fn test_render_detail() {
        let detail = RecipeDetail {
            id: 3,
            title: "Shakshuka".to_string(),
            image_url: None,
            ready_in_minutes: Some(30),
            servings: None,
            ingredients: vec!["6 eggs".to_string(), "1 can tomatoes".to_string()],
            instruction_steps: vec!["Simmer.".to_string(), "Crack eggs.".to_string()],
        };

        let text = render_detail(&detail);
        assert!(text.starts_with("Shakshuka\n=========\n"));
        assert!(text.contains("Ready in: 30 mins"));
        assert!(text.contains("Servings: \n"));
        assert!(text.contains("  - 1 can tomatoes"));
        assert!(text.contains("  2. Crack eggs."));
    }

    #[test]
    fn test_render_detail_layout() {
        let detail = RecipeDetail {
            id: 5,
            title: "Dal".to_string(),
            image_url: Some("https://img/5.jpg".to_string()),
            ready_in_minutes: Some(40),
            servings: Some(2),
            ingredients: vec!["1 cup lentils".to_string()],
            instruction_steps: vec!["Boil.".to_string()],
        };

        assert_eq!(
            render_detail(&detail),
            "Dal\n===\nhttps://img/5.jpg\n\nReady in: 40 mins\nServings: 2\n\n\
             Ingredients\n  - 1 cup lentils\n\nInstructions\n  1. Boil.\n"
        );
    }

    #[test]
    fn test_render_states() {
        let mut view = ViewController::new();
        assert_eq!(render(&view), "");

        let ticket = view.submit(SearchMode::Name, "zzz").unwrap();
        assert_eq!(render(&view), "Loading...\n");

        view.apply(&ticket, Outcome::Results(vec![]));
        assert_eq!(render(&view), format!("{}\n", EMPTY_NOTICE));
    }
}
