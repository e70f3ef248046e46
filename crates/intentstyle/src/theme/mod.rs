//! Theme system: palettes of color tokens the resolver reads.
//!
//! This module provides:
//!
//! - [`Theme`]: color tokens grouped by [`ColorGroup`], with compiled-in
//!   light and dark defaults
//! - [`AdaptiveTheme`]: light/dark theme pairs with OS detection
//! - [`ThemeChoice`]: fixed, per-mode, adaptive or system theme selection
//! - [`ThemeError`]: failures loading a theme from disk

mod adaptive;
mod choice;
mod error;
#[allow(clippy::module_inception)]
mod theme;

pub use adaptive::{detect_color_mode, set_theme_detector, AdaptiveTheme, ColorMode};
pub use choice::ThemeChoice;
pub use error::ThemeError;
pub use theme::{ColorGroup, ColorToken, Palette, Theme};
