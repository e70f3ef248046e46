//! The ordered rule chain.
//!
//! Every rule is evaluated, in the order of [`Rule`], against the intents.
//! A rule that applies emits one or more contributions; the fold in
//! [`ResolvedStyle`](super::ResolvedStyle) settles conflicts.
//!
//! Two precedence outcomes are surprising but intentional:
//!
//! - When several size tiers are requested the last one evaluated wins, so
//!   `xlarge` beats `large` beats `small`.
//! - `danger` is forced and evaluated after the forced explicit `color`, so
//!   the danger token wins even over a caller-supplied color.

use crate::intent::{Measure, StyleIntents};
use crate::theme::{ColorToken, Theme};

use super::declaration::{Contribution, Declaration, Rule};
use super::value::{
    Cursor, Display, FontFamily, FontSizeTier, FontStyle, Length, LineHeight, Overflow,
    OverflowWrap, TextAlign, TextDecoration, TextOverflow, TextTransform, WhiteSpace, WordBreak,
};

struct Chain<'a> {
    theme: &'a Theme,
    fallback: &'a Theme,
    out: Vec<Contribution>,
}

impl Chain<'_> {
    fn emit(&mut self, rule: Rule, declaration: Declaration) {
        self.out.push(Contribution::new(rule, declaration));
    }

    fn force(&mut self, rule: Rule, declaration: Declaration) {
        self.out.push(Contribution::forced(rule, declaration));
    }

    fn emit_token(&mut self, rule: Rule, token: ColorToken, important: bool) {
        match self.theme.get_or(token, self.fallback) {
            Some(value) => {
                let declaration = Declaration::Color(value.to_string());
                if important {
                    self.force(rule, declaration);
                } else {
                    self.emit(rule, declaration);
                }
            }
            None => tracing::warn!(%token, %rule, "color token missing from theme and fallback"),
        }
    }

    fn size_tier(&mut self, rule: Rule, tier: FontSizeTier) {
        self.emit(rule, Declaration::FontSize(tier));
        self.emit(
            rule,
            Declaration::LineHeight(LineHeight::Px(Measure::Number(f64::from(
                tier.line_height_px(),
            )))),
        );
    }

    fn truncate(&mut self, rule: Rule) {
        self.emit(rule, Declaration::Overflow(Overflow::Hidden));
        self.emit(rule, Declaration::TextOverflow(TextOverflow::Ellipsis));
    }
}

/// A dimension intent only fires when truthy; zero and blank values are inert.
fn active(measure: &Option<Measure>) -> Option<&Measure> {
    measure.as_ref().filter(|m| m.is_truthy())
}

/// Evaluates every rule against `intents`, returning contributions in
/// evaluation order.
///
/// Color tokens missing from `theme` are read from `fallback`.
pub(crate) fn contributions(
    intents: &StyleIntents,
    theme: &Theme,
    fallback: &Theme,
) -> Vec<Contribution> {
    let mut chain = Chain {
        theme,
        fallback,
        out: Vec::new(),
    };
    let i = intents;

    chain.emit(Rule::BaseMargin, Declaration::Margin(Length::Zero));

    // Size tiers
    if !i.large && !i.small && !i.xlarge {
        chain.size_tier(Rule::RegularSize, FontSizeTier::Regular);
    }
    if i.small {
        chain.size_tier(Rule::SmallSize, FontSizeTier::Small);
    }
    if i.large {
        chain.size_tier(Rule::LargeSize, FontSizeTier::Large);
    }
    if i.xlarge {
        chain.size_tier(Rule::XLargeSize, FontSizeTier::XLarge);
    }

    // Weight; monospace suppresses family selection entirely.
    if !i.monospace {
        let weight = i.weight_style();
        if let Some(family) = FontFamily::from_weight_style(weight) {
            let rule = match family {
                FontFamily::Thin => Rule::ThinWeight,
                FontFamily::Light => Rule::LightWeight,
                FontFamily::Regular => Rule::RegularWeight,
                _ => Rule::MediumWeight,
            };
            chain.emit(rule, Declaration::FontFamily(family));
        }
        if weight == 6.0 || i.bold {
            chain.emit(Rule::BoldWeight, Declaration::FontFamily(FontFamily::Bold));
        }
    }

    // Breaking and spacing
    if i.disable_word_break {
        chain.force(Rule::DisableWordBreak, Declaration::WordBreak(WordBreak::Normal));
    }
    if i.word_break {
        chain.emit(Rule::WordBreak, Declaration::WordBreak(WordBreak::BreakWord));
    }
    if i.overflow_wrap {
        chain.emit(
            Rule::OverflowWrap,
            Declaration::OverflowWrap(OverflowWrap::BreakWord),
        );
    }
    if let Some(spacing) = active(&i.letter_spacing) {
        chain.force(
            Rule::LetterSpacing,
            Declaration::LetterSpacing(Length::Px(spacing.clone())),
        );
    }
    if i.break_all {
        chain.emit(Rule::BreakAll, Declaration::WordBreak(WordBreak::BreakAll));
    }
    if let Some(height) = active(&i.line_height) {
        chain.force(
            Rule::LineHeight,
            Declaration::LineHeight(LineHeight::Px(height.clone())),
        );
    }
    if let Some(height) = active(&i.line_height_unit) {
        chain.force(
            Rule::LineHeightUnit,
            Declaration::LineHeight(LineHeight::Unitless(height.clone())),
        );
    }
    if i.break_spaces {
        chain.emit(
            Rule::BreakSpaces,
            Declaration::WhiteSpace(WhiteSpace::BreakSpaces),
        );
    }

    // Color. noColor hides the element through opacity; later color rules
    // still run but have no visible effect.
    if !(i.default && i.disabled && i.muted) && !i.no_color {
        chain.emit_token(Rule::ActiveColor, ColorToken::Active, false);
    }
    if i.no_color {
        chain.emit(Rule::NoColor, Declaration::Opacity(0.0));
        chain.emit(Rule::NoColor, Declaration::Cursor(Cursor::Default));
    }
    if let Some(color) = i.color.as_ref().filter(|c| !c.is_empty()) {
        chain.force(Rule::ExplicitColor, Declaration::Color(color.clone()));
    }
    if i.disabled {
        chain.emit_token(Rule::DisabledColor, ColorToken::Disabled, false);
    }
    if i.black {
        chain.emit_token(Rule::BlackColor, ColorToken::Black, false);
    }
    if i.primary {
        chain.emit_token(Rule::PrimaryColor, ColorToken::PrimaryAction, false);
    }
    if i.danger {
        chain.emit_token(Rule::DangerColor, ColorToken::DangerBorder, true);
    }

    // Decoration, transform, alignment
    if i.underline {
        chain.emit(
            Rule::Underline,
            Declaration::TextDecoration(TextDecoration::Underline),
        );
    }
    if i.uppercase {
        chain.emit(
            Rule::Uppercase,
            Declaration::TextTransform(TextTransform::Uppercase),
        );
    }
    if i.line_through {
        chain.emit(
            Rule::LineThrough,
            Declaration::TextDecoration(TextDecoration::LineThrough),
        );
    }
    if i.center {
        chain.emit(Rule::Center, Declaration::TextAlign(TextAlign::Center));
    }
    if i.left_aligned {
        chain.emit(Rule::LeftAligned, Declaration::TextAlign(TextAlign::Left));
    }
    if i.right_aligned {
        chain.emit(Rule::RightAligned, Declaration::TextAlign(TextAlign::Right));
    }
    if i.inline || i.inline_text {
        chain.emit(Rule::Inline, Declaration::Display(Display::Inline));
    }

    // Truncation
    if let Some(width) = active(&i.width) {
        chain.truncate(Rule::FixedWidth);
        chain.emit(Rule::FixedWidth, Declaration::MaxWidth(Length::Px(width.clone())));
        chain.emit(Rule::FixedWidth, Declaration::Width(Length::Percent(100.0)));
        chain.emit(Rule::FixedWidth, Declaration::WhiteSpace(WhiteSpace::NoWrap));
    }
    if i.full_width {
        chain.truncate(Rule::FullWidth);
        chain.emit(Rule::FullWidth, Declaration::MaxWidth(Length::Percent(100.0)));
        chain.emit(Rule::FullWidth, Declaration::Width(Length::Percent(100.0)));
        chain.emit(Rule::FullWidth, Declaration::WhiteSpace(WhiteSpace::Normal));
    }
    if i.text_overflow {
        chain.truncate(Rule::TextOverflow);
        chain.emit(Rule::TextOverflow, Declaration::WhiteSpace(WhiteSpace::NoWrap));
    }
    let (min_width, max_width) = (active(&i.min_width), active(&i.max_width));
    if min_width.is_some() || max_width.is_some() {
        chain.truncate(Rule::MinMaxWidth);
        if let Some(min) = min_width {
            chain.emit(Rule::MinMaxWidth, Declaration::MinWidth(Length::Px(min.clone())));
        }
        if let Some(max) = max_width {
            chain.emit(Rule::MinMaxWidth, Declaration::MaxWidth(Length::Px(max.clone())));
        }
        chain.emit(Rule::MinMaxWidth, Declaration::Width(Length::Percent(100.0)));
        chain.emit(Rule::MinMaxWidth, Declaration::WhiteSpace(WhiteSpace::NoWrap));
    }
    if let Some(keyword) = i.overflow.as_ref().filter(|o| !o.is_empty()) {
        chain.emit(
            Rule::OverflowKeyword,
            Declaration::Overflow(Overflow::Keyword(keyword.clone())),
        );
    }

    if i.italic {
        chain.emit(Rule::Italic, Declaration::FontStyle(FontStyle::Italic));
    }

    // Final whitespace overrides
    if i.no_wrapping {
        chain.emit(Rule::NoWrapping, Declaration::WhiteSpace(WhiteSpace::NoWrap));
    }
    if i.white_space_normal {
        chain.emit(
            Rule::WhiteSpaceNormal,
            Declaration::WhiteSpace(WhiteSpace::Normal),
        );
    }

    for contribution in &chain.out {
        tracing::trace!(%contribution, "style rule fired");
    }
    chain.out
}
