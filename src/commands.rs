//! CLI Command Handlers
//!
//! Each handler takes CLI args and Output, returns ExitCode.

use std::io::Write;

use fuzzy_matcher::skim::SkimMatcherV2;

use crate::api::RecipeClient;
use crate::cli::{ExitCode, ListCmd, Output, ShowCmd};
use crate::models::Recipe;
use crate::ui::picker::rank;
use crate::ui::plain::write_lines;
use crate::ui::recipe::recipes_lines;

/// Fetch every recipe, mapping failures to an exit code
pub async fn fetch(client: &RecipeClient, output: &Output) -> Result<Vec<Recipe>, ExitCode> {
    output.info(format!("Fetching recipes from {}", client.url()));

    client.fetch_all().await.map_err(|e| {
        let code = if e.is_network() {
            ExitCode::NetworkError
        } else {
            ExitCode::InvalidResponse
        };
        output.error(format!("Could not load recipes: {}", e), code)
    })
}

/// Indices of recipes whose label matches `query`, in rank order
pub fn filter(recipes: &[Recipe], query: &str) -> Vec<usize> {
    let labels: Vec<String> = recipes.iter().map(Recipe::label).collect();
    rank(&SkimMatcherV2::default(), &labels, query)
}

/// Best match per query, in query order. Errors with the first unmatched query.
pub fn resolve<'a>(recipes: &[Recipe], queries: &'a [String]) -> Result<Vec<usize>, &'a str> {
    let labels: Vec<String> = recipes.iter().map(Recipe::label).collect();
    let matcher = SkimMatcherV2::default();

    queries
        .iter()
        .map(|q| {
            rank(&matcher, &labels, q)
                .first()
                .copied()
                .ok_or(q.as_str())
        })
        .collect()
}

/// Print recipes with the plain renderer
pub fn print_recipes(recipes: &[&Recipe], color: bool) -> std::io::Result<()> {
    let lines = recipes_lines(recipes);
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    write_lines(&mut out, &lines, color)?;
    out.flush()
}

// =============================================================================
// List Command
// =============================================================================

pub async fn list_cmd(cmd: ListCmd, client: &RecipeClient, output: &Output) -> ExitCode {
    let recipes = match fetch(client, output).await {
        Ok(recipes) => recipes,
        Err(code) => return code,
    };

    let indices = match cmd.query.as_deref() {
        Some(query) => filter(&recipes, query),
        None => (0..recipes.len()).collect(),
    };

    if output.json {
        let selected: Vec<&Recipe> = indices.iter().map(|&i| &recipes[i]).collect();
        if let Err(e) = output.print_json(&selected) {
            return output.error(format!("Failed to serialize: {}", e), ExitCode::Error);
        }
    } else {
        for i in indices {
            println!("{}", recipes[i].label());
        }
    }

    ExitCode::Success
}

// =============================================================================
// Show Command
// =============================================================================

pub async fn show_cmd(cmd: ShowCmd, client: &RecipeClient, output: &Output) -> ExitCode {
    let recipes = match fetch(client, output).await {
        Ok(recipes) => recipes,
        Err(code) => return code,
    };

    let indices = match resolve(&recipes, &cmd.queries) {
        Ok(indices) => indices,
        Err(query) => {
            return output.error(format!("No recipe matches \"{}\"", query), ExitCode::NoMatch)
        }
    };

    let selected: Vec<&Recipe> = indices.iter().map(|&i| &recipes[i]).collect();
    log::info!("showing {} recipe(s)", selected.len());

    let result = if output.json {
        output.print_json(&selected)
    } else {
        print_recipes(&selected, output.color).map_err(anyhow::Error::from)
    };

    match result {
        Ok(()) => ExitCode::Success,
        Err(e) => output.error(format!("Failed to write output: {}", e), ExitCode::Error),
    }
}
