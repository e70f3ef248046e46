//! Adaptive themes that respond to system color mode.

use dark_light::{detect as detect_os_theme, Mode as OsThemeMode};
use once_cell::sync::Lazy;
use std::sync::Mutex;

use super::theme::Theme;

/// The user's preferred color mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    Light,
    Dark,
}

/// A theme that adapts based on the user's display mode.
///
/// Contains separate palettes for light and dark modes, selecting the
/// appropriate one based on OS settings.
///
/// # Example
///
/// ```rust
/// use intentstyle::{AdaptiveTheme, Theme};
///
/// let adaptive = AdaptiveTheme::new(Theme::light().clone(), Theme::dark().clone());
/// let _current = adaptive.resolve();
/// ```
#[derive(Debug, Clone)]
pub struct AdaptiveTheme {
    light: Theme,
    dark: Theme,
}

impl AdaptiveTheme {
    /// Creates an adaptive theme with separate light and dark variants.
    pub fn new(light: Theme, dark: Theme) -> Self {
        Self { light, dark }
    }

    /// Returns the variant for an explicit color mode.
    pub fn for_mode(&self, mode: ColorMode) -> &Theme {
        match mode {
            ColorMode::Light => &self.light,
            ColorMode::Dark => &self.dark,
        }
    }

    /// Resolves to the appropriate theme based on the current color mode.
    pub fn resolve(&self) -> Theme {
        self.for_mode(detect_color_mode()).clone()
    }
}

impl Default for AdaptiveTheme {
    fn default() -> Self {
        Self::new(Theme::light().clone(), Theme::dark().clone())
    }
}

type ThemeDetector = fn() -> ColorMode;

static THEME_DETECTOR: Lazy<Mutex<ThemeDetector>> = Lazy::new(|| Mutex::new(os_theme_detector));

/// Overrides the detector used to determine whether the user prefers a light or dark theme.
///
/// This is useful for testing or when you want to force a specific color mode.
pub fn set_theme_detector(detector: ThemeDetector) {
    let mut guard = THEME_DETECTOR
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    *guard = detector;
}

/// Returns the color mode reported by the current detector.
pub fn detect_color_mode() -> ColorMode {
    let detector = THEME_DETECTOR
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    (*detector)()
}

fn os_theme_detector() -> ColorMode {
    match detect_os_theme() {
        OsThemeMode::Dark => ColorMode::Dark,
        OsThemeMode::Light => ColorMode::Light,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::ColorToken;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_adaptive_theme_uses_detector() {
        let adaptive = AdaptiveTheme::default();

        set_theme_detector(|| ColorMode::Dark);
        assert_eq!(
            adaptive.resolve().get(ColorToken::Active),
            Theme::dark().get(ColorToken::Active)
        );

        set_theme_detector(|| ColorMode::Light);
        assert_eq!(
            adaptive.resolve().get(ColorToken::Active),
            Theme::light().get(ColorToken::Active)
        );
    }

    #[test]
    fn for_mode_is_independent_of_detector() {
        let light = Theme::new().set(crate::ColorGroup::Monotone, "black", "#111");
        let dark = Theme::new().set(crate::ColorGroup::Monotone, "black", "#000");
        let adaptive = AdaptiveTheme::new(light, dark);
        assert_eq!(adaptive.for_mode(ColorMode::Dark).get(ColorToken::Black), Some("#000"));
    }
}
