//! The typed intent record consumed by the resolver.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::value::{IntentValue, Measure};

/// Default `weightStyle` when the caller omits it.
pub const DEFAULT_WEIGHT_STYLE: f64 = 3.0;

macro_rules! flag_setters {
    ($($field:ident),* $(,)?) => {
        $(
            #[doc = concat!("Sets the `", stringify!($field), "` flag.")]
            pub fn $field(mut self) -> Self {
                self.$field = true;
                self
            }
        )*
    };
}

/// A flat set of style intents describing how a piece of text should render.
///
/// Intents are independent and unordered here; the order in which they take
/// effect is fixed by the resolver's rule chain. Build one with the fluent
/// setters, from a name/value map with [`StyleIntents::from_pairs`], or by
/// deserializing a JSON/YAML object. Unknown names are ignored.
///
/// # Example
///
/// ```rust
/// use intentstyle::StyleIntents;
///
/// let intents = StyleIntents::new().bold().primary().width(240);
/// assert!(intents.bold);
/// assert_eq!(intents.weight_style(), 3.0);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "BTreeMap<String, IntentValue>", into = "BTreeMap<String, IntentValue>")]
pub struct StyleIntents {
    pub black: bool,
    pub bold: bool,
    pub break_all: bool,
    pub break_spaces: bool,
    pub center: bool,
    pub danger: bool,
    pub default: bool,
    pub disable_word_break: bool,
    pub disabled: bool,
    pub full_width: bool,
    pub inline: bool,
    pub inline_text: bool,
    pub italic: bool,
    pub large: bool,
    pub left_aligned: bool,
    pub line_through: bool,
    pub monospace: bool,
    pub muted: bool,
    pub no_color: bool,
    pub no_wrapping: bool,
    pub overflow_wrap: bool,
    pub primary: bool,
    pub raw: bool,
    pub right_aligned: bool,
    pub small: bool,
    pub text_overflow: bool,
    pub underline: bool,
    pub uppercase: bool,
    pub white_space_normal: bool,
    pub word_break: bool,
    pub xlarge: bool,

    /// Numeric weight selector. `None` means omitted.
    pub weight_style_value: Option<f64>,
    pub color: Option<String>,
    pub overflow: Option<String>,
    pub letter_spacing: Option<Measure>,
    pub line_height: Option<Measure>,
    pub line_height_unit: Option<Measure>,
    pub width: Option<Measure>,
    pub min_width: Option<Measure>,
    pub max_width: Option<Measure>,
}

impl StyleIntents {
    /// Creates an empty intent set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds an intent set from `(name, value)` pairs.
    ///
    /// Names use the camelCase spelling (`fullWidth`, `weightStyle`, ...).
    /// Unrecognized names are skipped.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<IntentValue>,
    {
        let mut intents = Self::new();
        for (name, value) in pairs {
            intents.set(name.as_ref(), value.into());
        }
        intents
    }

    /// Applies a single named intent. Returns `false` if the name is unknown.
    pub fn set(&mut self, name: &str, value: IntentValue) -> bool {
        let truthy = value.is_truthy();
        match name {
            "black" => self.black = truthy,
            "bold" => self.bold = truthy,
            "breakAll" => self.break_all = truthy,
            "breakSpaces" => self.break_spaces = truthy,
            "center" => self.center = truthy,
            "danger" => self.danger = truthy,
            "default" => self.default = truthy,
            "disableWordBreak" => self.disable_word_break = truthy,
            "disabled" => self.disabled = truthy,
            "fullWidth" => self.full_width = truthy,
            "inline" => self.inline = truthy,
            "inlineText" => self.inline_text = truthy,
            "italic" => self.italic = truthy,
            "large" => self.large = truthy,
            "leftAligned" => self.left_aligned = truthy,
            "lineThrough" => self.line_through = truthy,
            "monospace" => self.monospace = truthy,
            "muted" => self.muted = truthy,
            "noColor" => self.no_color = truthy,
            "noWrapping" => self.no_wrapping = truthy,
            "overflowWrap" => self.overflow_wrap = truthy,
            "primary" => self.primary = truthy,
            "raw" => self.raw = truthy,
            "rightAligned" => self.right_aligned = truthy,
            "small" => self.small = truthy,
            "textOverflow" => self.text_overflow = truthy,
            "underline" => self.underline = truthy,
            "uppercase" => self.uppercase = truthy,
            "whiteSpaceNormal" => self.white_space_normal = truthy,
            "wordBreak" => self.word_break = truthy,
            "xlarge" => self.xlarge = truthy,
            "weightStyle" => self.weight_style_value = Some(value.to_number()),
            "color" => self.color = value.as_text().filter(|_| truthy),
            "overflow" => self.overflow = value.as_text().filter(|_| truthy),
            "letterSpacing" => self.letter_spacing = Measure::from_intent(&value),
            "lineHeight" => self.line_height = Measure::from_intent(&value),
            "lineHeightUnit" => self.line_height_unit = Measure::from_intent(&value),
            "width" => self.width = Measure::from_intent(&value),
            "minWidth" => self.min_width = Measure::from_intent(&value),
            "maxWidth" => self.max_width = Measure::from_intent(&value),
            _ => return false,
        }
        true
    }

    /// Effective `weightStyle`, substituting the default when omitted.
    pub fn weight_style(&self) -> f64 {
        self.weight_style_value.unwrap_or(DEFAULT_WEIGHT_STYLE)
    }

    /// Returns the intents as a camelCase name/value map, omitting inert entries.
    pub fn to_pairs(&self) -> BTreeMap<String, IntentValue> {
        let mut map = BTreeMap::new();
        let flags = [
            ("black", self.black),
            ("bold", self.bold),
            ("breakAll", self.break_all),
            ("breakSpaces", self.break_spaces),
            ("center", self.center),
            ("danger", self.danger),
            ("default", self.default),
            ("disableWordBreak", self.disable_word_break),
            ("disabled", self.disabled),
            ("fullWidth", self.full_width),
            ("inline", self.inline),
            ("inlineText", self.inline_text),
            ("italic", self.italic),
            ("large", self.large),
            ("leftAligned", self.left_aligned),
            ("lineThrough", self.line_through),
            ("monospace", self.monospace),
            ("muted", self.muted),
            ("noColor", self.no_color),
            ("noWrapping", self.no_wrapping),
            ("overflowWrap", self.overflow_wrap),
            ("primary", self.primary),
            ("raw", self.raw),
            ("rightAligned", self.right_aligned),
            ("small", self.small),
            ("textOverflow", self.text_overflow),
            ("underline", self.underline),
            ("uppercase", self.uppercase),
            ("whiteSpaceNormal", self.white_space_normal),
            ("wordBreak", self.word_break),
            ("xlarge", self.xlarge),
        ];
        for (name, on) in flags {
            if on {
                map.insert(name.to_string(), IntentValue::Bool(true));
            }
        }
        if let Some(w) = self.weight_style_value {
            // JSON has no NaN or infinity; text keeps them distinct from null.
            let value = if w.is_finite() {
                IntentValue::Number(w)
            } else {
                IntentValue::Text(w.to_string())
            };
            map.insert("weightStyle".into(), value);
        }
        if let Some(c) = &self.color {
            map.insert("color".into(), IntentValue::Text(c.clone()));
        }
        if let Some(o) = &self.overflow {
            map.insert("overflow".into(), IntentValue::Text(o.clone()));
        }
        let measures = [
            ("letterSpacing", &self.letter_spacing),
            ("lineHeight", &self.line_height),
            ("lineHeightUnit", &self.line_height_unit),
            ("width", &self.width),
            ("minWidth", &self.min_width),
            ("maxWidth", &self.max_width),
        ];
        for (name, measure) in measures {
            match measure {
                Some(Measure::Number(n)) => {
                    map.insert(name.to_string(), IntentValue::Number(*n));
                }
                Some(Measure::Raw(s)) => {
                    map.insert(name.to_string(), IntentValue::Text(s.clone()));
                }
                None => {}
            }
        }
        map
    }

    flag_setters!(
        black,
        bold,
        break_all,
        break_spaces,
        center,
        danger,
        disable_word_break,
        disabled,
        full_width,
        inline,
        inline_text,
        italic,
        large,
        left_aligned,
        line_through,
        monospace,
        muted,
        no_color,
        no_wrapping,
        overflow_wrap,
        primary,
        raw,
        right_aligned,
        small,
        text_overflow,
        underline,
        uppercase,
        white_space_normal,
        word_break,
        xlarge,
    );

    /// Sets the `default` flag, which together with `disabled` and `muted`
    /// suppresses the base content color.
    pub fn default_variant(mut self) -> Self {
        self.default = true;
        self
    }

    /// Sets the numeric weight selector.
    pub fn with_weight_style(mut self, weight: impl Into<f64>) -> Self {
        self.weight_style_value = Some(weight.into());
        self
    }

    /// Sets an explicit color value. An empty string clears it.
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into()).filter(|c| !c.is_empty());
        self
    }

    /// Sets the bare overflow keyword. An empty string clears it.
    pub fn with_overflow(mut self, overflow: impl Into<String>) -> Self {
        self.overflow = Some(overflow.into()).filter(|o| !o.is_empty());
        self
    }

    pub fn letter_spacing(mut self, value: impl Into<Measure>) -> Self {
        self.letter_spacing = active_measure(value.into());
        self
    }

    pub fn line_height(mut self, value: impl Into<Measure>) -> Self {
        self.line_height = active_measure(value.into());
        self
    }

    pub fn line_height_unit(mut self, value: impl Into<Measure>) -> Self {
        self.line_height_unit = active_measure(value.into());
        self
    }

    /// Truncates at a fixed pixel width.
    pub fn width(mut self, value: impl Into<Measure>) -> Self {
        self.width = active_measure(value.into());
        self
    }

    pub fn min_width(mut self, value: impl Into<Measure>) -> Self {
        self.min_width = active_measure(value.into());
        self
    }

    pub fn max_width(mut self, value: impl Into<Measure>) -> Self {
        self.max_width = active_measure(value.into());
        self
    }
}

/// Zero, `NaN` and blank dimensions are inert.
fn active_measure(measure: Measure) -> Option<Measure> {
    Some(measure).filter(Measure::is_truthy)
}

impl From<BTreeMap<String, IntentValue>> for StyleIntents {
    fn from(map: BTreeMap<String, IntentValue>) -> Self {
        StyleIntents::from_pairs(map)
    }
}

impl From<StyleIntents> for BTreeMap<String, IntentValue> {
    fn from(intents: StyleIntents) -> Self {
        intents.to_pairs()
    }
}
