//! Tagged style contributions.
//!
//! The rule chain emits an ordered list of [`Contribution`]s. Each one names
//! the [`Rule`] that fired, the [`Declaration`] it sets, and whether it is
//! forced (`!important`). [`ResolvedStyle`](super::ResolvedStyle) folds the
//! list left to right.

use std::fmt;

use super::value::{
    Cursor, Display, FontFamily, FontSizeTier, FontStyle, Length, LineHeight, Overflow,
    OverflowWrap, TextAlign, TextDecoration, TextOverflow, TextTransform, WhiteSpace, WordBreak,
};

/// A single property assignment.
#[derive(Debug, Clone, PartialEq)]
pub enum Declaration {
    Margin(Length),
    FontSize(FontSizeTier),
    LineHeight(LineHeight),
    FontFamily(FontFamily),
    FontStyle(FontStyle),
    Color(String),
    Opacity(f32),
    Cursor(Cursor),
    LetterSpacing(Length),
    WordBreak(WordBreak),
    OverflowWrap(OverflowWrap),
    WhiteSpace(WhiteSpace),
    TextDecoration(TextDecoration),
    TextTransform(TextTransform),
    TextAlign(TextAlign),
    Display(Display),
    Overflow(Overflow),
    TextOverflow(TextOverflow),
    Width(Length),
    MinWidth(Length),
    MaxWidth(Length),
}

impl Declaration {
    /// The CSS property name this declaration sets.
    pub fn property(&self) -> &'static str {
        match self {
            Declaration::Margin(_) => "margin",
            Declaration::FontSize(_) => "font-size",
            Declaration::LineHeight(_) => "line-height",
            Declaration::FontFamily(_) => "font-family",
            Declaration::FontStyle(_) => "font-style",
            Declaration::Color(_) => "color",
            Declaration::Opacity(_) => "opacity",
            Declaration::Cursor(_) => "cursor",
            Declaration::LetterSpacing(_) => "letter-spacing",
            Declaration::WordBreak(_) => "word-break",
            Declaration::OverflowWrap(_) => "overflow-wrap",
            Declaration::WhiteSpace(_) => "white-space",
            Declaration::TextDecoration(_) => "text-decoration",
            Declaration::TextTransform(_) => "text-transform",
            Declaration::TextAlign(_) => "text-align",
            Declaration::Display(_) => "display",
            Declaration::Overflow(_) => "overflow",
            Declaration::TextOverflow(_) => "text-overflow",
            Declaration::Width(_) => "width",
            Declaration::MinWidth(_) => "min-width",
            Declaration::MaxWidth(_) => "max-width",
        }
    }

    /// The CSS value text.
    pub fn value(&self) -> String {
        match self {
            Declaration::Margin(v)
            | Declaration::LetterSpacing(v)
            | Declaration::Width(v)
            | Declaration::MinWidth(v)
            | Declaration::MaxWidth(v) => v.to_string(),
            Declaration::FontSize(v) => v.to_string(),
            Declaration::LineHeight(v) => v.to_string(),
            Declaration::FontFamily(v) => v.to_string(),
            Declaration::FontStyle(v) => v.to_string(),
            Declaration::Color(v) => v.clone(),
            Declaration::Opacity(v) => v.to_string(),
            Declaration::Cursor(v) => v.to_string(),
            Declaration::WordBreak(v) => v.to_string(),
            Declaration::OverflowWrap(v) => v.to_string(),
            Declaration::WhiteSpace(v) => v.to_string(),
            Declaration::TextDecoration(v) => v.to_string(),
            Declaration::TextTransform(v) => v.to_string(),
            Declaration::TextAlign(v) => v.to_string(),
            Declaration::Display(v) => v.to_string(),
            Declaration::Overflow(v) => v.to_string(),
            Declaration::TextOverflow(v) => v.to_string(),
        }
    }
}

/// The rules of the resolution chain, in evaluation order.
///
/// The derived ordering matches the order in which rules are evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rule {
    BaseMargin,
    RegularSize,
    SmallSize,
    LargeSize,
    XLargeSize,
    ThinWeight,
    LightWeight,
    RegularWeight,
    MediumWeight,
    BoldWeight,
    DisableWordBreak,
    WordBreak,
    OverflowWrap,
    LetterSpacing,
    BreakAll,
    LineHeight,
    LineHeightUnit,
    BreakSpaces,
    ActiveColor,
    NoColor,
    ExplicitColor,
    DisabledColor,
    BlackColor,
    PrimaryColor,
    DangerColor,
    Underline,
    Uppercase,
    LineThrough,
    Center,
    LeftAligned,
    RightAligned,
    Inline,
    FixedWidth,
    FullWidth,
    TextOverflow,
    MinMaxWidth,
    OverflowKeyword,
    Italic,
    NoWrapping,
    WhiteSpaceNormal,
}

impl Rule {
    /// Short kebab-case name used in explain output.
    pub fn name(self) -> &'static str {
        match self {
            Rule::BaseMargin => "base-margin",
            Rule::RegularSize => "regular-size",
            Rule::SmallSize => "small-size",
            Rule::LargeSize => "large-size",
            Rule::XLargeSize => "xlarge-size",
            Rule::ThinWeight => "thin-weight",
            Rule::LightWeight => "light-weight",
            Rule::RegularWeight => "regular-weight",
            Rule::MediumWeight => "medium-weight",
            Rule::BoldWeight => "bold-weight",
            Rule::DisableWordBreak => "disable-word-break",
            Rule::WordBreak => "word-break",
            Rule::OverflowWrap => "overflow-wrap",
            Rule::LetterSpacing => "letter-spacing",
            Rule::BreakAll => "break-all",
            Rule::LineHeight => "line-height",
            Rule::LineHeightUnit => "line-height-unit",
            Rule::BreakSpaces => "break-spaces",
            Rule::ActiveColor => "active-color",
            Rule::NoColor => "no-color",
            Rule::ExplicitColor => "explicit-color",
            Rule::DisabledColor => "disabled-color",
            Rule::BlackColor => "black-color",
            Rule::PrimaryColor => "primary-color",
            Rule::DangerColor => "danger-color",
            Rule::Underline => "underline",
            Rule::Uppercase => "uppercase",
            Rule::LineThrough => "line-through",
            Rule::Center => "center",
            Rule::LeftAligned => "left-aligned",
            Rule::RightAligned => "right-aligned",
            Rule::Inline => "inline",
            Rule::FixedWidth => "fixed-width",
            Rule::FullWidth => "full-width",
            Rule::TextOverflow => "text-overflow",
            Rule::MinMaxWidth => "min-max-width",
            Rule::OverflowKeyword => "overflow-keyword",
            Rule::Italic => "italic",
            Rule::NoWrapping => "no-wrapping",
            Rule::WhiteSpaceNormal => "white-space-normal",
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One declaration emitted by one rule.
#[derive(Debug, Clone, PartialEq)]
pub struct Contribution {
    pub rule: Rule,
    pub declaration: Declaration,
    /// Forced declarations are not overridden by later unforced ones.
    pub important: bool,
}

impl Contribution {
    pub fn new(rule: Rule, declaration: Declaration) -> Self {
        Self {
            rule,
            declaration,
            important: false,
        }
    }

    pub fn forced(rule: Rule, declaration: Declaration) -> Self {
        Self {
            rule,
            declaration,
            important: true,
        }
    }
}

impl fmt::Display for Contribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {}: {}{}",
            self.rule,
            self.declaration.property(),
            self.declaration.value(),
            if self.important { " !important" } else { "" }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intent::Measure;

    #[test]
    fn contribution_display() {
        let c = Contribution::forced(
            Rule::LineHeight,
            Declaration::LineHeight(LineHeight::Px(Measure::Number(18.0))),
        );
        assert_eq!(c.to_string(), "line-height: line-height: 18px !important");

        let c = Contribution::new(Rule::Italic, Declaration::FontStyle(FontStyle::Italic));
        assert_eq!(c.to_string(), "italic: font-style: italic");
    }

    #[test]
    fn rules_order_by_evaluation() {
        assert!(Rule::SmallSize < Rule::XLargeSize);
        assert!(Rule::ExplicitColor < Rule::DangerColor);
        assert!(Rule::NoWrapping < Rule::WhiteSpaceNormal);
    }
}
