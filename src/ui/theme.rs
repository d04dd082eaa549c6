//! Catppuccin Mocha theme for recipetui
//!
//! Color palette and style helpers shared by the picker, the preview pane,
//! the viewport and the plain printer.

use ratatui::style::{Color, Modifier, Style};

/// Catppuccin Mocha color palette
pub struct Theme;

impl Theme {
    // ═══════════════════════════════════════════════════════════════════════
    // PALETTE
    // ═══════════════════════════════════════════════════════════════════════

    /// Crust: #11111b
    pub const CRUST: Color = Color::Rgb(0x11, 0x11, 0x1b);

    /// Base: #1e1e2e
    pub const BASE: Color = Color::Rgb(0x1e, 0x1e, 0x2e);

    /// Surface0: #313244
    pub const SURFACE0: Color = Color::Rgb(0x31, 0x32, 0x44);

    /// Surface1: #45475a
    pub const SURFACE1: Color = Color::Rgb(0x45, 0x47, 0x5a);

    /// Overlay0: #6c7086
    pub const OVERLAY0: Color = Color::Rgb(0x6c, 0x70, 0x86);

    /// Subtext0: #a6adc8
    pub const SUBTEXT0: Color = Color::Rgb(0xa6, 0xad, 0xc8);

    /// Text: #cdd6f4
    pub const TEXT: Color = Color::Rgb(0xcd, 0xd6, 0xf4);

    /// Sky: #89dceb
    pub const SKY: Color = Color::Rgb(0x89, 0xdc, 0xeb);

    /// Green: #a6e3a1
    pub const GREEN: Color = Color::Rgb(0xa6, 0xe3, 0xa1);

    /// Mauve: #cba6f7
    pub const MAUVE: Color = Color::Rgb(0xcb, 0xa6, 0xf7);

    /// Peach: #fab387
    pub const PEACH: Color = Color::Rgb(0xfa, 0xb3, 0x87);

    /// Yellow: #f9e2af
    pub const YELLOW: Color = Color::Rgb(0xf9, 0xe2, 0xaf);

    /// Red: #f38ba8
    pub const RED: Color = Color::Rgb(0xf3, 0x8b, 0xa8);

    /// Lavender: #b4befe
    pub const LAVENDER: Color = Color::Rgb(0xb4, 0xbe, 0xfe);

    // ═══════════════════════════════════════════════════════════════════════
    // RECIPE STYLES
    // ═══════════════════════════════════════════════════════════════════════

    /// Recipe title block (crust on sky, bold)
    pub fn recipe_title() -> Style {
        Style::default()
            .fg(Self::CRUST)
            .bg(Self::SKY)
            .add_modifier(Modifier::BOLD)
    }

    /// Cooking time under the title
    pub fn recipe_time() -> Style {
        Style::default().fg(Self::TEXT)
    }

    /// "Ingredients" / "Steps" headers (crust on green, bold)
    pub fn section_header() -> Style {
        Style::default()
            .fg(Self::CRUST)
            .bg(Self::GREEN)
            .add_modifier(Modifier::BOLD)
    }

    /// Ingredient bullet
    pub fn bullet() -> Style {
        Style::default().fg(Self::PEACH)
    }

    /// Step number
    pub fn step_number() -> Style {
        Style::default()
            .fg(Self::MAUVE)
            .add_modifier(Modifier::BOLD)
    }

    /// Ingredient and step text
    pub fn item() -> Style {
        Style::default().fg(Self::TEXT)
    }

    // ═══════════════════════════════════════════════════════════════════════
    // PICKER STYLES
    // ═══════════════════════════════════════════════════════════════════════

    /// Query prompt marker
    pub fn prompt() -> Style {
        Style::default()
            .fg(Self::MAUVE)
            .add_modifier(Modifier::BOLD)
    }

    /// Query text
    pub fn input() -> Style {
        Style::default().fg(Self::TEXT)
    }

    /// Row under the cursor
    pub fn cursor_line() -> Style {
        Style::default()
            .fg(Self::TEXT)
            .bg(Self::SURFACE0)
            .add_modifier(Modifier::BOLD)
    }

    /// Cursor gutter marker
    pub fn cursor_marker() -> Style {
        Style::default()
            .fg(Self::RED)
            .bg(Self::SURFACE0)
            .add_modifier(Modifier::BOLD)
    }

    /// Multi-select marker
    pub fn toggled_marker() -> Style {
        Style::default()
            .fg(Self::YELLOW)
            .add_modifier(Modifier::BOLD)
    }

    /// Match counter ("3/12")
    pub fn counter() -> Style {
        Style::default().fg(Self::LAVENDER)
    }

    /// Default list text
    pub fn text() -> Style {
        Style::default().fg(Self::TEXT)
    }

    /// Dimmed/muted text
    pub fn dimmed() -> Style {
        Style::default().fg(Self::OVERLAY0)
    }

    /// Normal/unfocused border
    pub fn border() -> Style {
        Style::default().fg(Self::SURFACE1)
    }

    /// Focused border
    pub fn border_focused() -> Style {
        Style::default().fg(Self::LAVENDER)
    }

    /// Key binding hint
    pub fn keybind() -> Style {
        Style::default()
            .fg(Self::CRUST)
            .bg(Self::LAVENDER)
            .add_modifier(Modifier::BOLD)
    }

    /// Status bar background
    pub fn status_bar() -> Style {
        Style::default().fg(Self::SUBTEXT0).bg(Self::CRUST)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// COLOR UTILITIES
// ═══════════════════════════════════════════════════════════════════════════

/// Calculate relative luminance for a color (used in contrast ratio)
/// Formula: https://www.w3.org/TR/WCAG20/#relativeluminancedef
pub fn relative_luminance(r: u8, g: u8, b: u8) -> f64 {
    fn channel_luminance(c: u8) -> f64 {
        let c = c as f64 / 255.0;
        if c <= 0.03928 {
            c / 12.92
        } else {
            ((c + 0.055) / 1.055).powf(2.4)
        }
    }

    0.2126 * channel_luminance(r) + 0.7152 * channel_luminance(g) + 0.0722 * channel_luminance(b)
}

/// Contrast ratio between two colors, from 1 (same) to 21 (black/white)
pub fn contrast_ratio(fg: (u8, u8, u8), bg: (u8, u8, u8)) -> f64 {
    let l1 = relative_luminance(fg.0, fg.1, fg.2);
    let l2 = relative_luminance(bg.0, bg.1, bg.2);

    let (lighter, darker) = if l1 > l2 { (l1, l2) } else { (l2, l1) };

    (lighter + 0.05) / (darker + 0.05)
}

/// Check if a foreground/background pair meets WCAG AA for normal text
pub fn meets_wcag_aa(fg: (u8, u8, u8), bg: (u8, u8, u8)) -> bool {
    contrast_ratio(fg, bg) >= 4.5
}

/// Extract RGB tuple from ratatui Color (only works for Rgb variant)
pub fn color_to_rgb(color: Color) -> Option<(u8, u8, u8)> {
    match color {
        Color::Rgb(r, g, b) => Some((r, g, b)),
        _ => None,
    }
}
