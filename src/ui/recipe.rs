//! Recipe card rendering
//!
//! Turns a [`Recipe`] into styled lines: a title block, the cooking time,
//! a bulleted ingredient list and a numbered step list. The same lines feed
//! the picker preview, the full-screen viewport and the plain printer.

use ratatui::text::{Line, Span};

use crate::models::Recipe;
use crate::ui::Theme;

/// Bullet used for ingredients
pub const BULLET: &str = "•";

/// Header text for the ingredient list
pub const INGREDIENTS: &str = "Ingredients";

/// Header text for the step list
pub const STEPS: &str = "Steps";

/// Render one recipe
pub fn recipe_lines(recipe: &Recipe) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    // Title block: one padding row above and below the name
    let name = format!("  {}  ", recipe.name);
    let pad = " ".repeat(Span::raw(name.as_str()).width());
    lines.push(block_row(pad.clone()));
    lines.push(block_row(name));
    lines.push(block_row(pad));

    lines.push(Line::from(vec![
        Span::raw(" "),
        Span::styled(recipe.time.clone(), Theme::recipe_time()),
    ]));

    lines.push(Line::default());
    lines.push(Line::default());
    lines.push(header(INGREDIENTS));
    lines.push(Line::default());
    for ingredient in &recipe.ingredients {
        lines.push(Line::from(vec![
            Span::raw(" "),
            Span::styled(BULLET, Theme::bullet()),
            Span::raw(" "),
            Span::styled(ingredient.clone(), Theme::item()),
        ]));
    }

    lines.push(Line::default());
    lines.push(Line::default());
    lines.push(header(STEPS));

    let width = recipe.steps.len().to_string().len();
    for (i, step) in recipe.steps.iter().enumerate() {
        lines.push(Line::default());
        lines.push(Line::from(vec![
            Span::raw("  "),
            Span::styled(format!("{:>width$}.", i + 1), Theme::step_number()),
            Span::raw(" "),
            Span::styled(step.clone(), Theme::item()),
        ]));
    }

    lines
}

/// Render several recipes one after another, separated by blank lines
pub fn recipes_lines(recipes: &[&Recipe]) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for (i, recipe) in recipes.iter().enumerate() {
        if i > 0 {
            lines.push(Line::default());
            lines.push(Line::default());
        }
        lines.extend(recipe_lines(recipe));
    }
    lines
}

fn block_row(text: String) -> Line<'static> {
    Line::from(vec![Span::raw(" "), Span::styled(text, Theme::recipe_title())])
}

fn header(text: &'static str) -> Line<'static> {
    Line::from(vec![
        Span::raw(" "),
        Span::styled(format!(" {} ", text), Theme::section_header()),
    ])
}

/// Flatten a line to its bare text
pub fn line_text(line: &Line<'_>) -> String {
    line.spans.iter().map(|s| s.content.as_ref()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Recipe {
        Recipe::new("Pancakes", "20 min")
            .with_ingredients(["flour", "milk", "eggs"])
            .with_steps(["Mix", "Rest", "Fry"])
    }

    fn texts(lines: &[Line<'_>]) -> Vec<String> {
        lines.iter().map(line_text).collect()
    }

    #[test]
    fn test_title_block() {
        let lines = texts(&recipe_lines(&sample()));
        assert_eq!(lines[0], " ".repeat(13));
        assert_eq!(lines[1], "   Pancakes  ");
        assert_eq!(lines[2], lines[0]);
        assert_eq!(lines[3], " 20 min");
    }

    #[test]
    fn test_ingredients_are_bulleted() {
        let lines = texts(&recipe_lines(&sample()));
        assert!(lines.contains(&"  Ingredients ".to_string()));
        assert!(lines.contains(&" • flour".to_string()));
        assert!(lines.contains(&" • milk".to_string()));
        assert!(lines.contains(&" • eggs".to_string()));
    }

    #[test]
    fn test_steps_are_numbered_from_one() {
        let lines = texts(&recipe_lines(&sample()));
        let steps: Vec<String> = lines
            .iter()
            .filter(|l| l.starts_with("  ") && l.contains('.'))
            .cloned()
            .collect();
        assert_eq!(steps, vec!["  1. Mix", "  2. Rest", "  3. Fry"]);
    }

    #[test]
    fn test_step_numbers_right_aligned() {
        let steps: Vec<String> = (1..=10).map(|i| format!("step {}", i)).collect();
        let recipe = Recipe::new("Long", "2 h").with_steps(steps);
        let lines = texts(&recipe_lines(&recipe));
        assert!(lines.contains(&"   1. step 1".to_string()));
        assert!(lines.contains(&"  10. step 10".to_string()));
    }

    #[test]
    fn test_section_order() {
        let lines = texts(&recipe_lines(&sample()));
        let ing = lines.iter().position(|l| l.contains(INGREDIENTS)).unwrap();
        let flour = lines.iter().position(|l| l.contains("flour")).unwrap();
        let steps = lines.iter().position(|l| l.contains(" Steps ")).unwrap();
        let mix = lines.iter().position(|l| l.contains("Mix")).unwrap();
        assert!(ing < flour && flour < steps && steps < mix);
    }

    #[test]
    fn test_empty_lists_still_have_headers() {
        let lines = texts(&recipe_lines(&Recipe::new("Air", "0 min")));
        assert!(lines.iter().any(|l| l.contains(INGREDIENTS)));
        assert!(lines.iter().any(|l| l.contains(" Steps ")));
        assert!(!lines.iter().any(|l| l.contains(BULLET)));
    }

    #[test]
    fn test_recipes_lines_concatenates_in_order() {
        let a = Recipe::new("Alpha", "1");
        let b = Recipe::new("Beta", "2");
        let lines = texts(&recipes_lines(&[&a, &b]));
        let alpha = lines.iter().position(|l| l.contains("Alpha")).unwrap();
        let beta = lines.iter().position(|l| l.contains("Beta")).unwrap();
        assert!(alpha < beta);
        assert_eq!(
            lines.len(),
            recipe_lines(&a).len() + 2 + recipe_lines(&b).len()
        );
    }
}
