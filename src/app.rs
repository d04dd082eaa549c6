//! App state and core application logic
//!
//! Drives the picker and the viewport from keyboard events and records
//! how the session ended.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::models::Recipe;
use crate::ui::picker::{render_preview, Picker};
use crate::ui::recipe::recipes_lines;
use crate::ui::viewport::Viewport;
use crate::ui::Theme;

/// Narrowest terminal that still gets a preview pane
const PREVIEW_MIN_WIDTH: u16 = 60;

// =============================================================================
// App State Enum
// =============================================================================

/// Application state enum representing current screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppState {
    /// Fuzzy picker with optional preview
    #[default]
    Picking,
    /// Full-screen viewport over the accepted recipes
    Viewing,
}

/// Where accepted recipes go
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayMode {
    /// Full-screen scrollable viewport
    #[default]
    Viewport,
    /// Printed to stdout once the picker closes
    Print,
}

/// How the session ended (or that it has not yet)
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Outcome {
    #[default]
    Running,
    /// Picker dismissed with Esc or Ctrl+C
    Aborted,
    /// Accepted recipe indices, in original order
    Selected(Vec<usize>),
}

// =============================================================================
// Main Application State
// =============================================================================

/// Main application state
pub struct App {
    /// Every fetched recipe, in server order
    pub recipes: Vec<Recipe>,
    /// Current screen
    pub state: AppState,
    /// Where accepted recipes go
    pub mode: DisplayMode,
    /// Whether the event loop keeps going
    pub running: bool,
    /// Show the preview pane next to the picker
    pub show_preview: bool,
    pub picker: Picker,
    /// Present once recipes were accepted in viewport mode
    pub viewport: Option<Viewport>,
    outcome: Outcome,
}

impl App {
    /// Create a new App over the fetched recipes
    pub fn new(recipes: Vec<Recipe>) -> Self {
        Self {
            picker: Picker::from_recipes(&recipes),
            recipes,
            state: AppState::Picking,
            mode: DisplayMode::Viewport,
            running: true,
            show_preview: true,
            viewport: None,
            outcome: Outcome::Running,
        }
    }

    pub fn with_mode(mut self, mode: DisplayMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_preview(mut self, show_preview: bool) -> Self {
        self.show_preview = show_preview;
        self
    }

    pub fn outcome(&self) -> &Outcome {
        &self.outcome
    }

    /// Accepted recipes, in original order
    pub fn selected_recipes(&self) -> Vec<&Recipe> {
        match &self.outcome {
            Outcome::Selected(indices) => indices
                .iter()
                .filter_map(|&i| self.recipes.get(i))
                .collect(),
            _ => Vec::new(),
        }
    }

    /// Recipe under the picker cursor
    pub fn current_recipe(&self) -> Option<&Recipe> {
        self.picker.current().and_then(|i| self.recipes.get(i))
    }

    /// Quit the application
    pub fn quit(&mut self) {
        self.running = false;
    }

    fn abort(&mut self) {
        log::info!("selection aborted");
        self.outcome = Outcome::Aborted;
        self.quit();
    }

    /// Accept the picker selection and move on
    fn accept(&mut self) {
        let selection = self.picker.selection();
        log::info!("accepted {} recipe(s)", selection.len());
        self.outcome = Outcome::Selected(selection);

        if self.mode == DisplayMode::Print || self.selected_recipes().is_empty() {
            self.quit();
            return;
        }

        let lines = recipes_lines(&self.selected_recipes());
        self.viewport = Some(Viewport::new(lines));
        self.state = AppState::Viewing;
    }

    // -------------------------------------------------------------------------
    // Keyboard Event Handling
    // -------------------------------------------------------------------------

    /// Handle keyboard event, returns true if event was consumed
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        match self.state {
            AppState::Picking => self.handle_picking_key(key),
            AppState::Viewing => self.handle_viewing_key(key),
        }
    }

    fn handle_picking_key(&mut self, key: KeyEvent) -> bool {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        if ctrl {
            return match key.code {
                KeyCode::Char('c') => {
                    self.abort();
                    true
                }
                KeyCode::Char('p') | KeyCode::Char('k') => {
                    self.picker.up();
                    true
                }
                KeyCode::Char('n') | KeyCode::Char('j') => {
                    self.picker.down();
                    true
                }
                KeyCode::Char('u') => {
                    self.picker.clear_query();
                    true
                }
                KeyCode::Char('a') => {
                    self.picker.toggle_all();
                    true
                }
                _ => false,
            };
        }

        match key.code {
            KeyCode::Esc => {
                self.abort();
                true
            }
            KeyCode::Enter => {
                self.accept();
                true
            }
            KeyCode::Tab => {
                self.picker.toggle_down();
                true
            }
            KeyCode::BackTab => {
                self.picker.toggle_up();
                true
            }
            KeyCode::Up => {
                self.picker.up();
                true
            }
            KeyCode::Down => {
                self.picker.down();
                true
            }
            KeyCode::PageUp => {
                self.picker.page_up();
                true
            }
            KeyCode::PageDown => {
                self.picker.page_down();
                true
            }
            KeyCode::Backspace => {
                self.picker.backspace();
                true
            }
            KeyCode::Delete => {
                self.picker.delete();
                true
            }
            KeyCode::Left => {
                self.picker.input.cursor_left();
                true
            }
            KeyCode::Right => {
                self.picker.input.cursor_right();
                true
            }
            KeyCode::Home => {
                self.picker.input.cursor_home();
                true
            }
            KeyCode::End => {
                self.picker.input.cursor_end();
                true
            }
            KeyCode::Char(c) => {
                self.picker.insert(c);
                true
            }
            _ => false,
        }
    }

    fn handle_viewing_key(&mut self, key: KeyEvent) -> bool {
        let Some(viewport) = self.viewport.as_mut() else {
            self.quit();
            return true;
        };
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Char('c') if ctrl => self.running = false,
            KeyCode::Char('u') if ctrl => viewport.half_page_up(),
            KeyCode::Char('d') if ctrl => viewport.half_page_down(),
            KeyCode::Char('q') | KeyCode::Esc => self.running = false,
            KeyCode::Up | KeyCode::Char('k') => viewport.scroll_up(1),
            KeyCode::Down | KeyCode::Char('j') => viewport.scroll_down(1),
            KeyCode::PageUp | KeyCode::Char('b') => viewport.page_up(),
            KeyCode::PageDown | KeyCode::Char('f') | KeyCode::Char(' ') => viewport.page_down(),
            KeyCode::Home | KeyCode::Char('g') => viewport.top(),
            KeyCode::End | KeyCode::Char('G') => viewport.bottom(),
            _ => return false,
        }
        true
    }

    // -------------------------------------------------------------------------
    // Rendering
    // -------------------------------------------------------------------------

    /// Draw the current screen
    pub fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();

        if self.state == AppState::Viewing {
            if let Some(viewport) = self.viewport.as_mut() {
                viewport.render(frame, area);
                return;
            }
        }

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(1), Constraint::Length(1)])
            .split(area);

        if self.show_preview && chunks[0].width >= PREVIEW_MIN_WIDTH {
            let panes = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
                .split(chunks[0]);
            self.picker.render(frame, panes[0]);
            let current = self.picker.current().and_then(|i| self.recipes.get(i));
            render_preview(frame, panes[1], current);
        } else {
            self.picker.render(frame, chunks[0]);
        }

        self.render_status_bar(frame, chunks[1]);
    }

    fn render_status_bar(&self, frame: &mut Frame, area: Rect) {
        let accept = match self.mode {
            DisplayMode::Viewport => " view  ",
            DisplayMode::Print => " print  ",
        };
        let line = Line::from(vec![
            Span::styled(" TAB ", Theme::keybind()),
            Span::styled(" select  ", Theme::dimmed()),
            Span::styled(" ↵ ", Theme::keybind()),
            Span::styled(accept, Theme::dimmed()),
            Span::styled(" ESC ", Theme::keybind()),
            Span::styled(" quit", Theme::dimmed()),
        ]);
        frame.render_widget(Paragraph::new(line).style(Theme::status_bar()), area);
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
