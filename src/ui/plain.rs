//! Plain line output
//!
//! Writes rendered lines to a stream instead of a terminal frame. Styles are
//! emitted as ANSI sequences through crossterm when color is enabled.

use std::io::{self, Write};

use crossterm::{
    queue,
    style::{Attribute, Color as CColor, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor},
};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;

/// Map a ratatui color to its crossterm equivalent
fn to_crossterm(color: Color) -> Option<CColor> {
    match color {
        Color::Reset => None,
        Color::Rgb(r, g, b) => Some(CColor::Rgb { r, g, b }),
        Color::Indexed(i) => Some(CColor::AnsiValue(i)),
        Color::Black => Some(CColor::Black),
        Color::Red => Some(CColor::DarkRed),
        Color::Green => Some(CColor::DarkGreen),
        Color::Yellow => Some(CColor::DarkYellow),
        Color::Blue => Some(CColor::DarkBlue),
        Color::Magenta => Some(CColor::DarkMagenta),
        Color::Cyan => Some(CColor::DarkCyan),
        Color::Gray => Some(CColor::Grey),
        Color::DarkGray => Some(CColor::DarkGrey),
        Color::LightRed => Some(CColor::Red),
        Color::LightGreen => Some(CColor::Green),
        Color::LightYellow => Some(CColor::Yellow),
        Color::LightBlue => Some(CColor::Blue),
        Color::LightMagenta => Some(CColor::Magenta),
        Color::LightCyan => Some(CColor::Cyan),
        Color::White => Some(CColor::White),
    }
}

fn apply_style<W: Write>(out: &mut W, style: Style) -> io::Result<()> {
    if let Some(fg) = style.fg.and_then(to_crossterm) {
        queue!(out, SetForegroundColor(fg))?;
    }
    if let Some(bg) = style.bg.and_then(to_crossterm) {
        queue!(out, SetBackgroundColor(bg))?;
    }
    if style.add_modifier.contains(Modifier::BOLD) {
        queue!(out, SetAttribute(Attribute::Bold))?;
    }
    if style.add_modifier.contains(Modifier::ITALIC) {
        queue!(out, SetAttribute(Attribute::Italic))?;
    }
    if style.add_modifier.contains(Modifier::UNDERLINED) {
        queue!(out, SetAttribute(Attribute::Underlined))?;
    }
    Ok(())
}

/// Write lines, styled when `color` is set, one per output line
pub fn write_lines<W: Write>(out: &mut W, lines: &[Line<'_>], color: bool) -> io::Result<()> {
    for line in lines {
        for span in &line.spans {
            if color {
                let style = line.style.patch(span.style);
                apply_style(out, style)?;
                queue!(out, Print(span.content.as_ref()), SetAttribute(Attribute::Reset), ResetColor)?;
            } else {
                out.write_all(span.content.as_bytes())?;
            }
        }
        out.write_all(b"\n")?;
    }
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::text::Span;

    fn sample() -> Vec<Line<'static>> {
        vec![
            Line::from(vec![
                Span::raw(" "),
                Span::styled("Title", Style::default().fg(Color::Rgb(1, 2, 3))),
            ]),
            Line::default(),
            Line::from("plain"),
        ]
    }

    #[test]
    fn test_write_without_color() {
        let mut buf = Vec::new();
        write_lines(&mut buf, &sample(), false).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text, " Title\n\nplain\n");
        assert!(!text.contains('\x1b'));
    }

    #[test]
    fn test_write_with_color_emits_ansi() {
        let mut buf = Vec::new();
        write_lines(&mut buf, &sample(), true).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains('\x1b'));
        assert!(text.contains("Title"));
        // Truecolor foreground for Rgb(1, 2, 3)
        assert!(text.contains("38;2;1;2;3"));
        assert_eq!(text.lines().count(), 3);
    }

    #[test]
    fn test_reset_color_maps_to_none() {
        assert!(to_crossterm(Color::Reset).is_none());
        assert_eq!(to_crossterm(Color::Rgb(9, 8, 7)), Some(CColor::Rgb { r: 9, g: 8, b: 7 }));
    }
}
