//! Picking the theme a resolver reads.

use super::adaptive::{detect_color_mode, AdaptiveTheme, ColorMode};
use super::theme::Theme;

/// How the theme for a resolver is selected.
///
/// `Mode` and `System` pick between the built-in light and dark themes;
/// `Adaptive` picks between a caller-supplied pair.
#[derive(Debug, Clone, Copy, Default)]
pub enum ThemeChoice<'a> {
    /// Exactly this theme.
    Fixed(&'a Theme),
    /// The built-in theme for an explicit mode.
    Mode(ColorMode),
    /// The variant of `adaptive` matching the detected mode.
    Adaptive(&'a AdaptiveTheme),
    /// The built-in theme matching the detected mode.
    #[default]
    System,
}

impl ThemeChoice<'_> {
    /// The color mode this choice depends on, if it is not fixed.
    ///
    /// Consults the detector for `Adaptive` and `System`.
    pub fn mode(&self) -> Option<ColorMode> {
        match self {
            ThemeChoice::Fixed(_) => None,
            ThemeChoice::Mode(mode) => Some(*mode),
            ThemeChoice::Adaptive(_) | ThemeChoice::System => Some(detect_color_mode()),
        }
    }

    /// Returns the selected theme.
    pub fn resolve(&self) -> Theme {
        let mode = self.mode();
        tracing::debug!(?mode, fixed = mode.is_none(), "selecting theme");
        match (self, mode) {
            (ThemeChoice::Fixed(theme), _) => (*theme).clone(),
            (ThemeChoice::Adaptive(adaptive), Some(mode)) => adaptive.for_mode(mode).clone(),
            (_, Some(ColorMode::Dark)) => Theme::dark().clone(),
            _ => Theme::light().clone(),
        }
    }
}

impl<'a> From<&'a Theme> for ThemeChoice<'a> {
    fn from(theme: &'a Theme) -> Self {
        ThemeChoice::Fixed(theme)
    }
}

impl<'a> From<&'a AdaptiveTheme> for ThemeChoice<'a> {
    fn from(adaptive: &'a AdaptiveTheme) -> Self {
        ThemeChoice::Adaptive(adaptive)
    }
}

impl From<ColorMode> for ThemeChoice<'_> {
    fn from(mode: ColorMode) -> Self {
        ThemeChoice::Mode(mode)
    }
}
