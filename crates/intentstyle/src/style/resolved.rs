//! The resolved style record and its fold.

use super::declaration::{Contribution, Declaration};
use super::value::{
    Cursor, Display, FontFamily, FontSizeTier, FontStyle, Length, LineHeight, Overflow,
    OverflowWrap, TextAlign, TextDecoration, TextOverflow, TextTransform, WhiteSpace, WordBreak,
};

/// A property value together with whether it was forced.
#[derive(Debug, Clone, PartialEq)]
pub struct Declared<T> {
    pub value: T,
    pub important: bool,
}

/// Later declarations win, except that an unforced one never replaces a
/// forced one.
fn cascade<T>(slot: &mut Option<Declared<T>>, value: T, important: bool) {
    if let Some(existing) = slot {
        if existing.important && !important {
            return;
        }
    }
    *slot = Some(Declared { value, important });
}

fn value_of<T>(slot: &Option<Declared<T>>) -> Option<&T> {
    slot.as_ref().map(|d| &d.value)
}

/// The concrete style properties to apply to a rendered element.
///
/// Built by folding an ordered list of [`Contribution`]s. Every property is
/// optional; an unset property leaves the host's default in place.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResolvedStyle {
    pub margin: Option<Declared<Length>>,
    pub font_size: Option<Declared<FontSizeTier>>,
    pub line_height: Option<Declared<LineHeight>>,
    pub font_family: Option<Declared<FontFamily>>,
    pub font_style: Option<Declared<FontStyle>>,
    pub color: Option<Declared<String>>,
    pub opacity: Option<Declared<f32>>,
    pub cursor: Option<Declared<Cursor>>,
    pub letter_spacing: Option<Declared<Length>>,
    pub word_break: Option<Declared<WordBreak>>,
    pub overflow_wrap: Option<Declared<OverflowWrap>>,
    pub white_space: Option<Declared<WhiteSpace>>,
    pub text_decoration: Option<Declared<TextDecoration>>,
    pub text_transform: Option<Declared<TextTransform>>,
    pub text_align: Option<Declared<TextAlign>>,
    pub display: Option<Declared<Display>>,
    pub overflow: Option<Declared<Overflow>>,
    pub text_overflow: Option<Declared<TextOverflow>>,
    pub width: Option<Declared<Length>>,
    pub min_width: Option<Declared<Length>>,
    pub max_width: Option<Declared<Length>>,
}

impl ResolvedStyle {
    /// Folds contributions left to right.
    pub fn from_contributions<'a, I>(contributions: I) -> Self
    where
        I: IntoIterator<Item = &'a Contribution>,
    {
        let mut style = Self::default();
        for contribution in contributions {
            style.apply(contribution);
        }
        style
    }

    /// Applies a single contribution.
    pub fn apply(&mut self, contribution: &Contribution) {
        let important = contribution.important;
        match contribution.declaration.clone() {
            Declaration::Margin(v) => cascade(&mut self.margin, v, important),
            Declaration::FontSize(v) => cascade(&mut self.font_size, v, important),
            Declaration::LineHeight(v) => cascade(&mut self.line_height, v, important),
            Declaration::FontFamily(v) => cascade(&mut self.font_family, v, important),
            Declaration::FontStyle(v) => cascade(&mut self.font_style, v, important),
            Declaration::Color(v) => cascade(&mut self.color, v, important),
            Declaration::Opacity(v) => cascade(&mut self.opacity, v, important),
            Declaration::Cursor(v) => cascade(&mut self.cursor, v, important),
            Declaration::LetterSpacing(v) => cascade(&mut self.letter_spacing, v, important),
            Declaration::WordBreak(v) => cascade(&mut self.word_break, v, important),
            Declaration::OverflowWrap(v) => cascade(&mut self.overflow_wrap, v, important),
            Declaration::WhiteSpace(v) => cascade(&mut self.white_space, v, important),
            Declaration::TextDecoration(v) => cascade(&mut self.text_decoration, v, important),
            Declaration::TextTransform(v) => cascade(&mut self.text_transform, v, important),
            Declaration::TextAlign(v) => cascade(&mut self.text_align, v, important),
            Declaration::Display(v) => cascade(&mut self.display, v, important),
            Declaration::Overflow(v) => cascade(&mut self.overflow, v, important),
            Declaration::TextOverflow(v) => cascade(&mut self.text_overflow, v, important),
            Declaration::Width(v) => cascade(&mut self.width, v, important),
            Declaration::MinWidth(v) => cascade(&mut self.min_width, v, important),
            Declaration::MaxWidth(v) => cascade(&mut self.max_width, v, important),
        }
    }

    /// The font-size tier, `Regular` when nothing set one.
    pub fn font_size_tier(&self) -> FontSizeTier {
        value_of(&self.font_size).copied().unwrap_or_default()
    }

    pub fn font_family(&self) -> Option<FontFamily> {
        value_of(&self.font_family).copied()
    }

    pub fn color(&self) -> Option<&str> {
        value_of(&self.color).map(String::as_str)
    }

    /// Returns `true` when the element is rendered fully transparent.
    pub fn is_transparent(&self) -> bool {
        value_of(&self.opacity).is_some_and(|o| *o == 0.0)
    }

    pub fn white_space(&self) -> Option<WhiteSpace> {
        value_of(&self.white_space).copied()
    }

    pub fn word_break(&self) -> Option<WordBreak> {
        value_of(&self.word_break).copied()
    }

    pub fn text_decoration(&self) -> Option<TextDecoration> {
        value_of(&self.text_decoration).copied()
    }

    pub fn text_transform(&self) -> Option<TextTransform> {
        value_of(&self.text_transform).copied()
    }

    pub fn text_align(&self) -> Option<TextAlign> {
        value_of(&self.text_align).copied()
    }

    pub fn display(&self) -> Option<Display> {
        value_of(&self.display).copied()
    }

    pub fn overflow(&self) -> Option<&Overflow> {
        value_of(&self.overflow)
    }

    pub fn text_overflow(&self) -> Option<TextOverflow> {
        value_of(&self.text_overflow).copied()
    }

    pub fn max_width(&self) -> Option<&Length> {
        value_of(&self.max_width)
    }

    pub fn is_italic(&self) -> bool {
        self.font_style.is_some()
    }

    /// Returns `true` when overflowing text is clipped with an ellipsis.
    pub fn truncates(&self) -> bool {
        self.overflow().is_some_and(Overflow::is_hidden)
            && self.text_overflow() == Some(TextOverflow::Ellipsis)
    }

    /// The resolved properties as `(property, value, important)` triples in
    /// a fixed property order.
    pub fn declarations(&self) -> Vec<(&'static str, String, bool)> {
        fn push<T: ToString>(
            out: &mut Vec<(&'static str, String, bool)>,
            property: &'static str,
            slot: &Option<Declared<T>>,
        ) {
            if let Some(declared) = slot {
                out.push((property, declared.value.to_string(), declared.important));
            }
        }

        let mut out = Vec::new();
        push(&mut out, "margin", &self.margin);
        push(&mut out, "font-size", &self.font_size);
        push(&mut out, "line-height", &self.line_height);
        push(&mut out, "font-family", &self.font_family);
        push(&mut out, "font-style", &self.font_style);
        push(&mut out, "color", &self.color);
        push(&mut out, "opacity", &self.opacity);
        push(&mut out, "cursor", &self.cursor);
        push(&mut out, "letter-spacing", &self.letter_spacing);
        push(&mut out, "word-break", &self.word_break);
        push(&mut out, "overflow-wrap", &self.overflow_wrap);
        push(&mut out, "white-space", &self.white_space);
        push(&mut out, "text-decoration", &self.text_decoration);
        push(&mut out, "text-transform", &self.text_transform);
        push(&mut out, "text-align", &self.text_align);
        push(&mut out, "display", &self.display);
        push(&mut out, "overflow", &self.overflow);
        push(&mut out, "text-overflow", &self.text_overflow);
        push(&mut out, "width", &self.width);
        push(&mut out, "min-width", &self.min_width);
        push(&mut out, "max-width", &self.max_width);
        out
    }

    /// Serializes the style as inline CSS declarations.
    pub fn to_css(&self) -> String {
        self.declarations()
            .into_iter()
            .map(|(property, value, important)| {
                if important {
                    format!("{}: {} !important;", property, value)
                } else {
                    format!("{}: {};", property, value)
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}
