//! Concrete style property values.
//!
//! Each type renders its CSS value text through `Display`.

use std::fmt;

use crate::intent::{format_number, Measure};

/// Font family for the thin weight.
pub const FONT_FAMILY_THIN: &str = "Inter Thin, Helvetica Neue, Helvetica, sans-serif";
/// Font family for the light weight.
pub const FONT_FAMILY_LIGHT: &str = "Inter Light, Helvetica Neue, Helvetica, sans-serif";
/// Font family for the regular weight.
pub const FONT_FAMILY_REGULAR: &str = "Inter Regular, Helvetica Neue, Helvetica, sans-serif";
/// Font family for the medium weight.
pub const FONT_FAMILY_MEDIUM: &str = "Inter Medium, Helvetica Neue, Helvetica, sans-serif";
/// Font family for the bold weight.
pub const FONT_FAMILY_BOLD: &str = "Inter Bold, Helvetica Neue, Helvetica, sans-serif";

/// A discrete font-size category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FontSizeTier {
    Small,
    #[default]
    Regular,
    Large,
    XLarge,
}

impl FontSizeTier {
    pub fn font_size_px(self) -> u32 {
        match self {
            FontSizeTier::Small => 12,
            FontSizeTier::Regular => 14,
            FontSizeTier::Large => 16,
            FontSizeTier::XLarge => 20,
        }
    }

    /// The line height the tier carries unless a forced line height overrides it.
    pub fn line_height_px(self) -> u32 {
        match self {
            FontSizeTier::Small => 20,
            FontSizeTier::Regular => 24,
            FontSizeTier::Large => 28,
            FontSizeTier::XLarge => 32,
        }
    }
}

impl fmt::Display for FontSizeTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}px", self.font_size_px())
    }
}

/// Font family selected from the weight intents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontFamily {
    Thin,
    Light,
    Regular,
    Medium,
    Bold,
}

impl FontFamily {
    /// Maps a `weightStyle` number to one of the four non-bold families.
    ///
    /// Bold (`6`) is handled by its own rule; every other number is no match.
    pub fn from_weight_style(weight: f64) -> Option<Self> {
        if weight == 0.0 {
            Some(FontFamily::Thin)
        } else if weight == 2.0 {
            Some(FontFamily::Light)
        } else if weight == 3.0 {
            Some(FontFamily::Regular)
        } else if weight == 4.0 {
            Some(FontFamily::Medium)
        } else {
            None
        }
    }

    pub fn stack(self) -> &'static str {
        match self {
            FontFamily::Thin => FONT_FAMILY_THIN,
            FontFamily::Light => FONT_FAMILY_LIGHT,
            FontFamily::Regular => FONT_FAMILY_REGULAR,
            FontFamily::Medium => FONT_FAMILY_MEDIUM,
            FontFamily::Bold => FONT_FAMILY_BOLD,
        }
    }
}

impl fmt::Display for FontFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.stack())
    }
}

/// A length value.
#[derive(Debug, Clone, PartialEq)]
pub enum Length {
    Zero,
    /// Pixels when numeric, verbatim when raw.
    Px(Measure),
    Percent(f64),
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Length::Zero => f.write_str("0"),
            Length::Px(measure) => f.write_str(&measure.with_unit("px")),
            Length::Percent(p) => write!(f, "{}%", format_number(*p)),
        }
    }
}

/// A line height in pixels or as a unitless multiplier.
#[derive(Debug, Clone, PartialEq)]
pub enum LineHeight {
    Px(Measure),
    Unitless(Measure),
}

impl fmt::Display for LineHeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LineHeight::Px(measure) => f.write_str(&measure.with_unit("px")),
            LineHeight::Unitless(measure) => f.write_str(&measure.with_unit("")),
        }
    }
}

macro_rules! keyword_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $css:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant),+
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(match self {
                    $($name::$variant => $css),+
                })
            }
        }
    };
}

keyword_enum!(
    /// `word-break` values.
    WordBreak { Normal => "normal", BreakWord => "break-word", BreakAll => "break-all" }
);
keyword_enum!(OverflowWrap { BreakWord => "break-word" });
keyword_enum!(
    /// `white-space` values.
    WhiteSpace { Normal => "normal", NoWrap => "nowrap", BreakSpaces => "break-spaces" }
);
keyword_enum!(TextDecoration { Underline => "underline", LineThrough => "line-through" });
keyword_enum!(TextTransform { Uppercase => "uppercase" });
keyword_enum!(TextAlign { Center => "center", Left => "left", Right => "right" });
keyword_enum!(Display { Inline => "inline" });
keyword_enum!(TextOverflow { Ellipsis => "ellipsis" });
keyword_enum!(FontStyle { Italic => "italic" });
keyword_enum!(Cursor { Default => "default" });

/// `overflow` values: `hidden` from truncation rules, or a caller keyword.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Overflow {
    Hidden,
    Keyword(String),
}

impl Overflow {
    pub fn is_hidden(&self) -> bool {
        match self {
            Overflow::Hidden => true,
            Overflow::Keyword(k) => k.eq_ignore_ascii_case("hidden"),
        }
    }
}

impl fmt::Display for Overflow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Overflow::Hidden => f.write_str("hidden"),
            Overflow::Keyword(k) => f.write_str(k),
        }
    }
}
