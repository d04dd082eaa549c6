//! Full-screen scrollable viewport
//!
//! Shows the rendered recipes and scrolls through them with the keyboard.

use ratatui::{
    prelude::*,
    widgets::{Paragraph, Wrap},
};

use crate::ui::Theme;

/// Viewport state
#[derive(Debug, Default)]
pub struct Viewport {
    /// Content lines
    lines: Vec<Line<'static>>,
    /// First visible row
    pub offset: usize,
    /// Visible rows on the last render
    height: usize,
    /// Rows the content occupies after wrapping, as of the last render
    content_height: usize,
}

impl Viewport {
    pub fn new(lines: Vec<Line<'static>>) -> Self {
        let content_height = lines.len();
        Self {
            lines,
            offset: 0,
            height: 0,
            content_height,
        }
    }

    pub fn lines(&self) -> &[Line<'static>] {
        &self.lines
    }

    /// Set the visible height and wrapped content height (done on render)
    pub fn set_dimensions(&mut self, height: usize, content_height: usize) {
        self.height = height;
        self.content_height = content_height;
        self.clamp();
    }

    fn max_offset(&self) -> usize {
        self.content_height.saturating_sub(self.height)
    }

    fn clamp(&mut self) {
        self.offset = self.offset.min(self.max_offset());
    }

    pub fn scroll_up(&mut self, n: usize) {
        self.offset = self.offset.saturating_sub(n);
    }

    pub fn scroll_down(&mut self, n: usize) {
        self.offset = (self.offset + n).min(self.max_offset());
    }

    pub fn page_up(&mut self) {
        self.scroll_up(self.height.max(1));
    }

    pub fn page_down(&mut self) {
        self.scroll_down(self.height.max(1));
    }

    pub fn half_page_up(&mut self) {
        self.scroll_up((self.height / 2).max(1));
    }

    pub fn half_page_down(&mut self) {
        self.scroll_down((self.height / 2).max(1));
    }

    pub fn top(&mut self) {
        self.offset = 0;
    }

    pub fn bottom(&mut self) {
        self.offset = self.max_offset();
    }

    pub fn at_bottom(&self) -> bool {
        self.offset >= self.max_offset()
    }

    /// Scroll position as a percentage, 100 when everything fits
    pub fn percent(&self) -> u16 {
        let max = self.max_offset();
        if max == 0 {
            return 100;
        }
        ((self.offset * 100) / max) as u16
    }

    /// Render content plus a one-line footer
    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(1), Constraint::Length(1)])
            .split(area);

        let paragraph = Paragraph::new(self.lines.clone()).wrap(Wrap { trim: false });
        let content_height = paragraph.line_count(chunks[0].width);
        self.set_dimensions(chunks[0].height as usize, content_height);

        let offset = u16::try_from(self.offset).unwrap_or(u16::MAX);
        frame.render_widget(paragraph.scroll((offset, 0)), chunks[0]);

        let footer = Line::from(vec![
            Span::styled(" q ", Theme::keybind()),
            Span::styled(" quit  ", Theme::dimmed()),
            Span::styled(" ↑↓ ", Theme::keybind()),
            Span::styled(" scroll  ", Theme::dimmed()),
            Span::styled(" g/G ", Theme::keybind()),
            Span::styled(" top/bottom  ", Theme::dimmed()),
            Span::styled(format!("{:>3}%", self.percent()), Theme::counter()),
        ]);
        frame.render_widget(Paragraph::new(footer).style(Theme::status_bar()), chunks[1]);
    }
}
