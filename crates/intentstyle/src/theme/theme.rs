//! Theme palettes of named color tokens.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use super::error::ThemeError;

/// A semantic color group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorGroup {
    Content,
    Monotone,
    Interactive,
}

impl ColorGroup {
    pub fn as_str(self) -> &'static str {
        match self {
            ColorGroup::Content => "content",
            ColorGroup::Monotone => "monotone",
            ColorGroup::Interactive => "interactive",
        }
    }
}

/// A color token the resolver reads from a theme.
///
/// Each token lives in exactly one [`ColorGroup`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorToken {
    /// `content.active`: the base text color.
    Active,
    /// `content.disabled`
    Disabled,
    /// `monotone.black`
    Black,
    /// `interactive.primaryAction`
    PrimaryAction,
    /// `interactive.dangerBorder`
    DangerBorder,
}

impl ColorToken {
    pub const ALL: [ColorToken; 5] = [
        ColorToken::Active,
        ColorToken::Disabled,
        ColorToken::Black,
        ColorToken::PrimaryAction,
        ColorToken::DangerBorder,
    ];

    pub fn group(self) -> ColorGroup {
        match self {
            ColorToken::Active | ColorToken::Disabled => ColorGroup::Content,
            ColorToken::Black => ColorGroup::Monotone,
            ColorToken::PrimaryAction | ColorToken::DangerBorder => ColorGroup::Interactive,
        }
    }

    /// The token's key inside its group.
    pub fn name(self) -> &'static str {
        match self {
            ColorToken::Active => "active",
            ColorToken::Disabled => "disabled",
            ColorToken::Black => "black",
            ColorToken::PrimaryAction => "primaryAction",
            ColorToken::DangerBorder => "dangerBorder",
        }
    }
}

impl std::fmt::Display for ColorToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}", self.group().as_str(), self.name())
    }
}

/// The named color tokens of one group.
pub type Palette = BTreeMap<String, String>;

/// A read-only palette of color tokens grouped by semantic role.
///
/// A theme may omit whole groups or single tokens; lookups through a
/// [`Resolver`](crate::Resolver) fall back to the default theme's value.
///
/// # Example
///
/// ```rust
/// use intentstyle::{ColorGroup, ColorToken, Theme};
///
/// let theme = Theme::new().set(ColorGroup::Interactive, "dangerBorder", "#ff0000");
/// assert_eq!(theme.get(ColorToken::DangerBorder), Some("#ff0000"));
/// assert_eq!(theme.get(ColorToken::Active), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Theme {
    groups: BTreeMap<ColorGroup, Palette>,
}

static LIGHT: Lazy<Theme> = Lazy::new(|| {
    Theme::new()
        .set(ColorGroup::Content, "active", "#1F2224")
        .set(ColorGroup::Content, "disabled", "#9B9FA5")
        .set(ColorGroup::Monotone, "black", "#111212")
        .set(ColorGroup::Interactive, "primaryAction", "#0057FF")
        .set(ColorGroup::Interactive, "dangerBorder", "#E01E3C")
});

static DARK: Lazy<Theme> = Lazy::new(|| {
    Theme::new()
        .set(ColorGroup::Content, "active", "#E8EAED")
        .set(ColorGroup::Content, "disabled", "#6B7078")
        .set(ColorGroup::Monotone, "black", "#000000")
        .set(ColorGroup::Interactive, "primaryAction", "#4D8DFF")
        .set(ColorGroup::Interactive, "dangerBorder", "#FF5468")
});

impl Theme {
    /// Creates an empty theme.
    pub fn new() -> Self {
        Self {
            groups: BTreeMap::new(),
        }
    }

    /// The compiled-in light theme, used as the default fallback.
    pub fn light() -> &'static Theme {
        &LIGHT
    }

    /// The compiled-in dark theme.
    pub fn dark() -> &'static Theme {
        &DARK
    }

    /// Sets a token value, returning the updated theme for chaining.
    pub fn set(mut self, group: ColorGroup, token: &str, value: impl Into<String>) -> Self {
        self.groups
            .entry(group)
            .or_default()
            .insert(token.to_string(), value.into());
        self
    }

    /// Replaces a whole group.
    pub fn with_group(mut self, group: ColorGroup, palette: Palette) -> Self {
        self.groups.insert(group, palette);
        self
    }

    /// Returns the palette for a group, if the theme defines it.
    pub fn group(&self, group: ColorGroup) -> Option<&Palette> {
        self.groups.get(&group)
    }

    /// Looks up a token in this theme only, without fallback.
    pub fn get(&self, token: ColorToken) -> Option<&str> {
        self.group(token.group())
            .and_then(|palette| palette.get(token.name()))
            .map(String::as_str)
    }

    /// Looks up a token, falling back to `fallback` when this theme lacks it.
    ///
    /// Returns `None` only if neither theme defines the token.
    pub fn get_or<'a>(&'a self, token: ColorToken, fallback: &'a Theme) -> Option<&'a str> {
        match self.get(token) {
            Some(value) => Some(value),
            None => {
                tracing::debug!(%token, "token missing from theme, using fallback");
                fallback.get(token)
            }
        }
    }

    /// Returns `true` when no group is defined.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Parses a theme from YAML.
    ///
    /// ```rust
    /// use intentstyle::{ColorToken, Theme};
    ///
    /// let theme = Theme::from_yaml("interactive:\n  primaryAction: '#123456'\n").unwrap();
    /// assert_eq!(theme.get(ColorToken::PrimaryAction), Some("#123456"));
    /// ```
    pub fn from_yaml(source: &str) -> Result<Self, ThemeError> {
        Ok(serde_yaml::from_str(source)?)
    }

    /// Parses a theme from JSON.
    pub fn from_json(source: &str) -> Result<Self, ThemeError> {
        Ok(serde_json::from_str(source)?)
    }

    /// Loads a theme from a `.yaml`, `.yml` or `.json` file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ThemeError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| ThemeError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("yaml") | Some("yml") => Self::from_yaml(&source),
            Some("json") => Self::from_json(&source),
            _ => Err(ThemeError::UnknownFormat {
                path: path.to_path_buf(),
            }),
        }
    }
}
