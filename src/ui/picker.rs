//! Fuzzy picker
//!
//! Multi-select list of recipe labels filtered by a fuzzy query, with an
//! optional preview of the recipe under the cursor.

use std::collections::BTreeSet;

use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;
use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph, Wrap},
};

use crate::models::Recipe;
use crate::ui::recipe::recipe_lines;
use crate::ui::search::QueryInput;
use crate::ui::Theme;

/// Rank `labels` against `query`.
///
/// An empty query keeps every label in original order. Otherwise only labels
/// with a fuzzy score are kept, best score first, ties in original order.
pub fn rank(matcher: &SkimMatcherV2, labels: &[String], query: &str) -> Vec<usize> {
    if query.is_empty() {
        return (0..labels.len()).collect();
    }

    let mut scored: Vec<(usize, i64)> = labels
        .iter()
        .enumerate()
        .filter_map(|(i, label)| matcher.fuzzy_match(label, query).map(|score| (i, score)))
        .collect();

    scored.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
    scored.into_iter().map(|(i, _)| i).collect()
}

/// Cursor over the match list, with the first visible row
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cursor {
    /// Row under the cursor
    pub selected: usize,
    /// First row drawn
    pub offset: usize,
    len: usize,
}

impl Cursor {
    pub fn new(len: usize) -> Self {
        Self {
            selected: 0,
            offset: 0,
            len,
        }
    }

    /// Point at the first of `len` rows
    pub fn reset(&mut self, len: usize) {
        *self = Self::new(len);
    }

    fn last_row(&self) -> usize {
        self.len.saturating_sub(1)
    }

    pub fn up(&mut self) {
        self.page_up(1);
    }

    pub fn down(&mut self) {
        self.page_down(1);
    }

    pub fn page_up(&mut self, rows: usize) {
        self.selected = self.selected.saturating_sub(rows);
        self.offset = self.offset.min(self.selected);
    }

    pub fn page_down(&mut self, rows: usize) {
        self.selected = (self.selected + rows).min(self.last_row());
    }

    /// Move `offset` so the cursor row is within `height` visible rows
    pub fn scroll_into_view(&mut self, height: usize) {
        if height == 0 {
            return;
        }
        self.offset = self
            .offset
            .min(self.selected)
            .max((self.selected + 1).saturating_sub(height));
    }
}

/// Picker state
pub struct Picker {
    /// Display labels, one per recipe, in original order
    labels: Vec<String>,
    /// Query being typed
    pub input: QueryInput,
    /// Indices of matching labels, in rank order
    matches: Vec<usize>,
    /// Cursor within `matches`
    pub list: Cursor,
    /// Multi-selected recipe indices
    toggled: BTreeSet<usize>,
    matcher: SkimMatcherV2,
    /// Rows visible on the last render, used as page size
    page: usize,
}

impl Picker {
    pub fn new(labels: Vec<String>) -> Self {
        let matches: Vec<usize> = (0..labels.len()).collect();
        Self {
            list: Cursor::new(matches.len()),
            labels,
            input: QueryInput::new(),
            matches,
            toggled: BTreeSet::new(),
            matcher: SkimMatcherV2::default(),
            page: 10,
        }
    }

    pub fn from_recipes(recipes: &[Recipe]) -> Self {
        Self::new(recipes.iter().map(Recipe::label).collect())
    }

    pub fn query(&self) -> &str {
        self.input.as_str()
    }

    /// Matching recipe indices in rank order
    pub fn matches(&self) -> &[usize] {
        &self.matches
    }

    /// Recompute matches after the query changed
    fn refresh(&mut self) {
        self.matches = rank(&self.matcher, &self.labels, self.input.as_str());
        self.list.reset(self.matches.len());
    }

    // -------------------------------------------------------------------------
    // Query editing
    // -------------------------------------------------------------------------

    pub fn insert(&mut self, c: char) {
        self.input.insert(c);
        self.refresh();
    }

    pub fn backspace(&mut self) {
        if self.input.backspace() {
            self.refresh();
        }
    }

    pub fn delete(&mut self) {
        if self.input.delete() {
            self.refresh();
        }
    }

    pub fn clear_query(&mut self) {
        if self.input.clear() {
            self.refresh();
        }
    }

    // -------------------------------------------------------------------------
    // Cursor movement
    // -------------------------------------------------------------------------

    pub fn up(&mut self) {
        self.list.up();
    }

    pub fn down(&mut self) {
        self.list.down();
    }

    pub fn page_up(&mut self) {
        self.list.page_up(self.page);
    }

    pub fn page_down(&mut self) {
        self.list.page_down(self.page);
    }

    /// Recipe index under the cursor
    pub fn current(&self) -> Option<usize> {
        self.matches.get(self.list.selected).copied()
    }

    // -------------------------------------------------------------------------
    // Multi-select
    // -------------------------------------------------------------------------

    pub fn is_toggled(&self, idx: usize) -> bool {
        self.toggled.contains(&idx)
    }

    pub fn toggled_count(&self) -> usize {
        self.toggled.len()
    }

    fn toggle(&mut self, idx: usize) {
        if !self.toggled.remove(&idx) {
            self.toggled.insert(idx);
        }
    }

    /// Toggle the item under the cursor and move down
    pub fn toggle_down(&mut self) {
        if let Some(idx) = self.current() {
            self.toggle(idx);
            self.list.down();
        }
    }

    /// Toggle the item under the cursor and move up
    pub fn toggle_up(&mut self) {
        if let Some(idx) = self.current() {
            self.toggle(idx);
            self.list.up();
        }
    }

    /// Toggle every matching item
    pub fn toggle_all(&mut self) {
        for idx in self.matches.clone() {
            self.toggle(idx);
        }
    }

    /// Accepted recipes: toggled ones in original order, else the cursor item
    pub fn selection(&self) -> Vec<usize> {
        if self.toggled.is_empty() {
            self.current().into_iter().collect()
        } else {
            self.toggled.iter().copied().collect()
        }
    }

    // -------------------------------------------------------------------------
    // Rendering
    // -------------------------------------------------------------------------

    /// Render the match list and the prompt line
    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(1), Constraint::Length(3)])
            .split(area);

        self.render_list(frame, chunks[0]);
        self.render_prompt(frame, chunks[1]);
    }

    fn render_list(&mut self, frame: &mut Frame, area: Rect) {
        let visible_height = area.height.saturating_sub(2) as usize;
        self.page = visible_height.max(1);
        self.list.scroll_into_view(visible_height);

        let mut title = format!(" RECIPES {}/{} ", self.matches.len(), self.labels.len());
        if !self.toggled.is_empty() {
            title.push_str(&format!("({} selected) ", self.toggled.len()));
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Theme::border_focused())
            .title(Span::styled(title, Theme::counter()));

        if self.matches.is_empty() {
            let empty = Paragraph::new("No matching recipes")
                .style(Theme::dimmed())
                .alignment(Alignment::Center)
                .block(block);
            frame.render_widget(empty, area);
            return;
        }

        let items: Vec<ListItem> = self
            .matches
            .iter()
            .enumerate()
            .skip(self.list.offset)
            .take(visible_height)
            .map(|(row, &idx)| self.render_item(row, idx))
            .collect();

        frame.render_widget(List::new(items).block(block), area);
    }

    fn render_item(&self, row: usize, idx: usize) -> ListItem<'static> {
        let is_cursor = row == self.list.selected;
        let marker = if is_cursor { "▸" } else { " " };
        let check = if self.is_toggled(idx) { "●" } else { " " };

        let line = Line::from(vec![
            Span::styled(
                marker,
                if is_cursor {
                    Theme::cursor_marker()
                } else {
                    Theme::text()
                },
            ),
            Span::styled(format!("{} ", check), Theme::toggled_marker()),
            Span::styled(
                self.labels[idx].clone(),
                if is_cursor {
                    Theme::cursor_line()
                } else {
                    Theme::text()
                },
            ),
        ]);

        ListItem::new(line)
    }

    fn render_prompt(&self, frame: &mut Frame, area: Rect) {
        let (before, after) = self.input.split_at_cursor();
        let prompt = Paragraph::new(Line::from(vec![
            Span::styled("> ", Theme::prompt()),
            Span::styled(before.to_string(), Theme::input()),
            Span::styled("│", Theme::prompt()),
            Span::styled(after.to_string(), Theme::input()),
        ]))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Theme::border())
                .title(Span::styled(" SEARCH ", Theme::prompt())),
        );
        frame.render_widget(prompt, area);
    }
}

/// Render the preview pane for the recipe under the cursor
pub fn render_preview(frame: &mut Frame, area: Rect, recipe: Option<&Recipe>) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Theme::border())
        .title(Span::styled(" PREVIEW ", Theme::counter()));

    let lines = recipe.map(recipe_lines).unwrap_or_default();
    let preview = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(block);
    frame.render_widget(preview, area);
}
