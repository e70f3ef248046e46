//! The style resolver.

use crate::intent::StyleIntents;
use crate::theme::{ColorToken, Theme, ThemeChoice};

use super::declaration::Contribution;
use super::resolved::ResolvedStyle;
use super::rules::contributions;

/// Resolves intents against a theme.
///
/// The resolver holds the caller's theme and a fallback theme consulted for
/// any color token the caller's theme lacks. The fallback defaults to
/// [`Theme::light`].
///
/// Resolution is pure: the same intents always yield the same style.
///
/// # Example
///
/// ```rust
/// use intentstyle::{ColorToken, Resolver, StyleIntents, Theme};
///
/// let resolver = Resolver::new(Theme::new());
/// let style = resolver.resolve(&StyleIntents::new().primary());
/// assert_eq!(style.color(), Theme::light().get(ColorToken::PrimaryAction));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Resolver {
    theme: Theme,
    fallback: Option<Theme>,
}

impl Resolver {
    /// Creates a resolver for `theme`, falling back to the light theme.
    pub fn new(theme: Theme) -> Self {
        Self {
            theme,
            fallback: None,
        }
    }

    /// Creates a resolver over the theme `choice` selects.
    pub fn from_choice(choice: ThemeChoice<'_>) -> Self {
        Self::new(choice.resolve())
    }

    /// Replaces the fallback theme.
    pub fn with_fallback(mut self, fallback: Theme) -> Self {
        self.fallback = Some(fallback);
        self
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn fallback(&self) -> &Theme {
        self.fallback.as_ref().unwrap_or(Theme::light())
    }

    /// Looks up a color token with fallback.
    pub fn color(&self, token: ColorToken) -> Option<&str> {
        self.theme.get_or(token, self.fallback())
    }

    /// Returns the ordered contributions the fold consumes.
    ///
    /// Useful to see which rule set a property and which later rule
    /// overrode it.
    pub fn explain(&self, intents: &StyleIntents) -> Vec<Contribution> {
        contributions(intents, &self.theme, self.fallback())
    }

    /// Resolves intents to a style.
    pub fn resolve(&self, intents: &StyleIntents) -> ResolvedStyle {
        ResolvedStyle::from_contributions(&self.explain(intents))
    }
}

/// Resolves intents against `theme`, falling back to [`Theme::light`].
pub fn resolve(intents: &StyleIntents, theme: &Theme) -> ResolvedStyle {
    ResolvedStyle::from_contributions(&contributions(intents, theme, Theme::light()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::{
        Display, FontFamily, FontSizeTier, Overflow, TextAlign, TextDecoration, WhiteSpace,
        WordBreak,
    };
    use crate::theme::ColorGroup;

    fn light(token: ColorToken) -> Option<&'static str> {
        Theme::light().get(token)
    }

    fn r(intents: StyleIntents) -> ResolvedStyle {
        resolve(&intents, Theme::light())
    }

    #[test]
    fn defaults() {
        let style = r(StyleIntents::new());
        assert_eq!(style.font_size_tier(), FontSizeTier::Regular);
        assert_eq!(style.font_family(), Some(FontFamily::Regular));
        assert_eq!(style.color(), light(ColorToken::Active));
        assert!(!style.is_transparent());
    }

    #[test]
    fn size_tier_tie_break() {
        assert_eq!(r(StyleIntents::new().small()).font_size_tier(), FontSizeTier::Small);
        assert_eq!(
            r(StyleIntents::new().small().large()).font_size_tier(),
            FontSizeTier::Large
        );
        assert_eq!(
            r(StyleIntents::new().small().large().xlarge()).font_size_tier(),
            FontSizeTier::XLarge
        );
    }

    #[test]
    fn bold_overrides_weight_style() {
        let style = r(StyleIntents::new().with_weight_style(0).bold());
        assert_eq!(style.font_family(), Some(FontFamily::Bold));
        let style = r(StyleIntents::new().with_weight_style(6));
        assert_eq!(style.font_family(), Some(FontFamily::Bold));
        let style = r(StyleIntents::new().with_weight_style(5));
        assert_eq!(style.font_family(), None);
        let style = r(StyleIntents::new().with_weight_style(4));
        assert_eq!(style.font_family(), Some(FontFamily::Medium));
    }

    #[test]
    fn monospace_leaves_family_unset() {
        assert_eq!(r(StyleIntents::new().monospace().bold()).font_family(), None);
    }

    #[test]
    fn disable_word_break_wins_over_break_all() {
        let style = r(StyleIntents::new().disable_word_break().break_all().word_break());
        assert_eq!(style.word_break(), Some(WordBreak::Normal));
        let style = r(StyleIntents::new().word_break().break_all());
        assert_eq!(style.word_break(), Some(WordBreak::BreakAll));
    }

    #[test]
    fn forced_line_heights_override_tier() {
        let style = r(StyleIntents::new().line_height(18));
        assert_eq!(style.line_height.as_ref().unwrap().value.to_string(), "18px");

        let style = r(StyleIntents::new().line_height(18).line_height_unit(1.5));
        assert_eq!(style.line_height.as_ref().unwrap().value.to_string(), "1.5");

        let style = r(StyleIntents::new().large());
        assert_eq!(style.line_height.as_ref().unwrap().value.to_string(), "28px");
    }

    #[test]
    fn color_precedence_chain() {
        assert_eq!(
            r(StyleIntents::new().disabled()).color(),
            light(ColorToken::Disabled)
        );
        assert_eq!(
            r(StyleIntents::new().disabled().black()).color(),
            light(ColorToken::Black)
        );
        assert_eq!(
            r(StyleIntents::new().black().primary()).color(),
            light(ColorToken::PrimaryAction)
        );
        // Forced explicit color beats unforced theme colors.
        assert_eq!(
            r(StyleIntents::new().with_color("teal").primary().disabled()).color(),
            Some("teal")
        );
    }

    #[test]
    fn danger_beats_explicit_color() {
        let style = r(StyleIntents::new().with_color("teal").danger());
        assert_eq!(style.color(), light(ColorToken::DangerBorder));
    }

    #[test]
    fn no_color_is_transparent() {
        let style = r(StyleIntents::new().no_color().primary());
        assert!(style.is_transparent());
        assert_eq!(style.color(), light(ColorToken::PrimaryAction));
        assert!(style.cursor.is_some());
    }

    #[test]
    fn decoration_and_alignment_last_wins() {
        let style = r(StyleIntents::new().underline().line_through());
        assert_eq!(style.text_decoration(), Some(TextDecoration::LineThrough));

        let style = r(StyleIntents::new().center().left_aligned());
        assert_eq!(style.text_align(), Some(TextAlign::Left));
        let style = r(StyleIntents::new().center().left_aligned().right_aligned());
        assert_eq!(style.text_align(), Some(TextAlign::Right));
    }

    #[test]
    fn inline_text_sets_display() {
        assert_eq!(
            r(StyleIntents::new().inline_text()).display(),
            Some(Display::Inline)
        );
        assert_eq!(r(StyleIntents::new()).display(), None);
    }

    #[test]
    fn truncation_rules() {
        let style = r(StyleIntents::new().width(200));
        assert!(style.truncates());
        assert_eq!(style.white_space(), Some(WhiteSpace::NoWrap));
        assert_eq!(style.max_width().unwrap().to_string(), "200px");

        let style = r(StyleIntents::new().width(200).full_width());
        assert_eq!(style.white_space(), Some(WhiteSpace::Normal));
        assert_eq!(style.max_width().unwrap().to_string(), "100%");

        let style = r(StyleIntents::new().full_width().max_width(300).min_width(40));
        assert_eq!(style.white_space(), Some(WhiteSpace::NoWrap));
        assert_eq!(style.max_width().unwrap().to_string(), "300px");
        assert_eq!(
            style.min_width.as_ref().unwrap().value.to_string(),
            "40px"
        );
    }

    #[test]
    fn overflow_keyword_overrides_hidden() {
        let style = r(StyleIntents::new().text_overflow().with_overflow("auto"));
        assert_eq!(style.overflow(), Some(&Overflow::Keyword("auto".into())));
        assert!(!style.truncates());
    }

    #[test]
    fn final_whitespace_overrides() {
        let style = r(StyleIntents::new().full_width().no_wrapping());
        assert_eq!(style.white_space(), Some(WhiteSpace::NoWrap));
        let style = r(StyleIntents::new().width(10).no_wrapping().white_space_normal());
        assert_eq!(style.white_space(), Some(WhiteSpace::Normal));
        let style = r(StyleIntents::new().break_spaces().text_overflow());
        assert_eq!(style.white_space(), Some(WhiteSpace::NoWrap));
    }

    #[test]
    fn resolver_falls_back_per_token() {
        let theme = Theme::new().set(ColorGroup::Interactive, "primaryAction", "#abcdef");
        let resolver = Resolver::new(theme);
        assert_eq!(
            resolver.resolve(&StyleIntents::new().primary()).color(),
            Some("#abcdef")
        );
        assert_eq!(
            resolver.resolve(&StyleIntents::new().danger()).color(),
            light(ColorToken::DangerBorder)
        );
    }

    #[test]
    fn custom_fallback() {
        let resolver = Resolver::new(Theme::new()).with_fallback(Theme::dark().clone());
        assert_eq!(
            resolver.resolve(&StyleIntents::new()).color(),
            Theme::dark().get(ColorToken::Active)
        );
    }

    #[test]
    fn fallback_defaults_to_light_theme() {
        let resolver = Resolver::new(Theme::new());
        assert_eq!(resolver.fallback(), Theme::light());
        let resolver = resolver.with_fallback(Theme::dark().clone());
        assert_eq!(resolver.fallback(), Theme::dark());
    }

    #[test]
    fn default_css_snapshot() {
        let css = r(StyleIntents::new()).to_css();
        insta::assert_snapshot!(css, @"margin: 0; font-size: 14px; line-height: 24px; font-family: Inter Regular, Helvetica Neue, Helvetica, sans-serif; color: #1F2224;");
    }

    #[test]
    fn forced_css_snapshot() {
        let css = r(StyleIntents::new()
            .monospace()
            .danger()
            .letter_spacing(1)
            .text_overflow())
        .to_css();
        insta::assert_snapshot!(css, @"margin: 0; font-size: 14px; line-height: 24px; color: #E01E3C !important; letter-spacing: 1px !important; white-space: nowrap; overflow: hidden; text-overflow: ellipsis;");
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use crate::intent::IntentValue;
    use proptest::prelude::*;

    const FLAGS: &[&str] = &[
        "black",
        "bold",
        "breakAll",
        "breakSpaces",
        "center",
        "danger",
        "default",
        "disableWordBreak",
        "disabled",
        "inline",
        "inlineText",
        "italic",
        "large",
        "leftAligned",
        "lineThrough",
        "monospace",
        "muted",
        "noWrapping",
        "overflowWrap",
        "primary",
        "rightAligned",
        "small",
        "underline",
        "uppercase",
        "whiteSpaceNormal",
        "wordBreak",
        "xlarge",
    ];

    fn arb_intents() -> impl Strategy<Value = StyleIntents> {
        (
            proptest::collection::vec(any::<bool>(), FLAGS.len()),
            proptest::option::of(0u8..9),
            proptest::option::of("[a-z]{3,8}"),
        )
            .prop_map(|(bits, weight, color)| {
                let mut intents = StyleIntents::new();
                for (name, on) in FLAGS.iter().zip(bits) {
                    intents.set(name, IntentValue::Bool(on));
                }
                if let Some(w) = weight {
                    intents.set("weightStyle", IntentValue::Number(f64::from(w)));
                }
                if let Some(c) = color {
                    intents.set("color", IntentValue::Text(c));
                }
                intents
            })
    }

    proptest! {
        #[test]
        fn resolution_is_idempotent(intents in arb_intents()) {
            let theme = Theme::light();
            prop_assert_eq!(resolve(&intents, theme), resolve(&intents, theme));
        }

        #[test]
        fn danger_always_wins(intents in arb_intents(), color in "[a-z]{3,8}") {
            let intents = intents.with_color(color).danger();
            let style = resolve(&intents, Theme::light());
            prop_assert_eq!(style.color(), Theme::light().get(ColorToken::DangerBorder));
        }

        #[test]
        fn no_color_always_transparent(intents in arb_intents()) {
            let style = resolve(&intents.no_color(), Theme::light());
            prop_assert!(style.is_transparent());
        }

        #[test]
        fn single_truncation_intent_clips(which in 0usize..5, px in 1u16..2000) {
            let base = StyleIntents::new();
            let intents = match which {
                0 => base.width(f64::from(px)),
                1 => base.full_width(),
                2 => base.text_overflow(),
                3 => base.min_width(f64::from(px)),
                _ => base.max_width(f64::from(px)),
            };
            let style = resolve(&intents, Theme::light());
            prop_assert!(style.truncates());
        }

        #[test]
        fn exactly_one_size_tier(intents in arb_intents()) {
            let style = resolve(&intents, Theme::light());
            prop_assert!(style.font_size.is_some());
            let expected = if intents.xlarge {
                crate::style::FontSizeTier::XLarge
            } else if intents.large {
                crate::style::FontSizeTier::Large
            } else if intents.small {
                crate::style::FontSizeTier::Small
            } else {
                crate::style::FontSizeTier::Regular
            };
            prop_assert_eq!(style.font_size_tier(), expected);
        }
    }
}
