//! Terminal preview of resolved styles.
//!
//! A terminal has no fonts, pixels or opacity, so the preview approximates:
//! colors become the nearest ANSI-256 entry, bold and thin families become
//! bold and dim, pixel widths become columns at a fixed cell width, and a
//! transparent element becomes blank space of the same width.

use console::Style;
use unicode_width::UnicodeWidthStr;

use crate::intent::Measure;
use crate::style::{FontFamily, Length, ResolvedStyle, TextDecoration, TextTransform, WhiteSpace};
use crate::util::{parse_css_color, rgb_to_ansi256, truncate_to_width};

/// Default pixel width of one terminal cell.
pub const DEFAULT_CELL_PX: f64 = 8.0;

/// Renders text in a terminal the way a resolved style describes it.
///
/// # Example
///
/// ```rust
/// use intentstyle::{resolve, StyleIntents, TerminalPreview, Theme};
///
/// let style = resolve(&StyleIntents::new().uppercase().width(48), Theme::light());
/// let preview = TerminalPreview::new().force_styling(false);
/// assert_eq!(preview.render(&style, "quarterly report"), "QUART…");
/// ```
#[derive(Debug, Clone)]
pub struct TerminalPreview {
    cell_px: f64,
    available_columns: Option<usize>,
    force_styling: Option<bool>,
}

impl TerminalPreview {
    pub fn new() -> Self {
        Self {
            cell_px: DEFAULT_CELL_PX,
            available_columns: None,
            force_styling: None,
        }
    }

    /// Sets how many pixels one terminal column stands for.
    pub fn cell_px(mut self, px: f64) -> Self {
        if px > 0.0 {
            self.cell_px = px;
        }
        self
    }

    /// Sets the width that percentage lengths are measured against.
    pub fn available_columns(mut self, columns: usize) -> Self {
        self.available_columns = Some(columns);
        self
    }

    /// Forces ANSI styling on or off regardless of terminal detection.
    pub fn force_styling(mut self, enabled: bool) -> Self {
        self.force_styling = Some(enabled);
        self
    }

    /// Builds the console style for a resolved style.
    pub fn console_style(&self, style: &ResolvedStyle) -> Style {
        let mut out = Style::new();
        if let Some(enabled) = self.force_styling {
            out = out.force_styling(enabled);
        }
        if let Some(rgb) = style.color().and_then(parse_css_color) {
            out = out.color256(rgb_to_ansi256(rgb));
        }
        match style.font_family() {
            Some(FontFamily::Bold) => out = out.bold(),
            Some(FontFamily::Thin) | Some(FontFamily::Light) => out = out.dim(),
            _ => {}
        }
        if style.is_italic() {
            out = out.italic();
        }
        match style.text_decoration() {
            Some(TextDecoration::Underline) => out = out.underlined(),
            Some(TextDecoration::LineThrough) => out = out.strikethrough(),
            None => {}
        }
        out
    }

    /// Column limit implied by the style's max width, if it truncates.
    pub fn column_limit(&self, style: &ResolvedStyle) -> Option<usize> {
        if !style.truncates() || style.white_space() == Some(WhiteSpace::Normal) {
            return None;
        }
        match style.max_width()? {
            Length::Px(Measure::Number(px)) => Some((px / self.cell_px).floor().max(0.0) as usize),
            Length::Percent(p) => self
                .available_columns
                .map(|cols| (cols as f64 * p / 100.0).floor() as usize),
            Length::Px(Measure::Raw(_)) | Length::Zero => None,
        }
    }

    /// Renders `text` with the style applied.
    pub fn render(&self, style: &ResolvedStyle, text: &str) -> String {
        let mut text = match style.text_transform() {
            Some(TextTransform::Uppercase) => text.to_uppercase(),
            None => text.to_string(),
        };
        if let Some(limit) = self.column_limit(style) {
            text = truncate_to_width(&text, limit);
        }
        if style.is_transparent() {
            return " ".repeat(text.width());
        }
        self.console_style(style).apply_to(text).to_string()
    }
}

impl Default for TerminalPreview {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::resolve;
    use crate::theme::Theme;
    use crate::StyleIntents;

    fn plain() -> TerminalPreview {
        TerminalPreview::new().force_styling(false)
    }

    #[test]
    fn plain_text_passes_through() {
        let style = resolve(&StyleIntents::new(), Theme::light());
        assert_eq!(plain().render(&style, "hello"), "hello");
    }

    #[test]
    fn fixed_width_truncates_in_columns() {
        let style = resolve(&StyleIntents::new().width(40), Theme::light());
        assert_eq!(plain().render(&style, "abcdefghij"), "abcd…");
        assert_eq!(plain().cell_px(4.0).render(&style, "abcdefghij"), "abcdefghij");
    }

    #[test]
    fn full_width_wraps_instead_of_truncating() {
        let style = resolve(&StyleIntents::new().full_width(), Theme::light());
        let preview = plain().available_columns(4);
        assert_eq!(preview.column_limit(&style), None);
        assert_eq!(preview.render(&style, "abcdefgh"), "abcdefgh");
    }

    #[test]
    fn percent_width_uses_available_columns() {
        let style = resolve(
            &StyleIntents::new().full_width().no_wrapping(),
            Theme::light(),
        );
        let preview = plain().available_columns(6);
        assert_eq!(preview.render(&style, "abcdefgh"), "abcde…");
    }

    #[test]
    fn transparent_renders_blank() {
        let style = resolve(&StyleIntents::new().no_color(), Theme::light());
        assert_eq!(plain().render(&style, "secret"), "      ");
    }

    #[test]
    fn styled_output_has_escapes() {
        console::set_colors_enabled(true);
        let style = resolve(&StyleIntents::new().bold().danger(), Theme::light());
        let out = TerminalPreview::new()
            .force_styling(true)
            .render(&style, "alert");
        assert!(out.contains("\x1b[1m"));
        assert!(out.contains("38;5;"));
        assert!(out.contains("alert"));
    }
}
