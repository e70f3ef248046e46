//! Declarative text styling from boolean style intents.
//!
//! Callers describe *what* a piece of text is (`bold`, `danger`, `small`,
//! `noWrapping`, ...) and the resolver turns that into concrete style
//! properties, reading colors from a [`Theme`].
//!
//! # Concepts
//!
//! - [`StyleIntents`]: the typed intent record. Built fluently or from loose
//!   name/value pairs with [`StyleIntents::from_pairs`]
//! - [`Theme`]: color tokens grouped into `content`, `monotone` and
//!   `interactive`, with compiled-in light and dark defaults
//! - [`Resolver`]: folds an ordered rule chain over the intents into a
//!   [`ResolvedStyle`]. Later rules override earlier ones, except that a
//!   forced (`!important`) declaration is never replaced by an unforced one
//! - [`TextElement`]: intents plus content, rendered to a paragraph or span
//! - [`TerminalPreview`]: an approximation of a resolved style in a terminal
//!
//! The [`block`] module holds the pipeline editor's block-state adapter:
//! output normalization, collapse-flag migration and first-pipeline
//! redirects.
//!
//! # Example
//!
//! ```rust
//! use intentstyle::{Resolver, StyleIntents, Theme};
//!
//! let resolver = Resolver::new(Theme::dark().clone());
//! let style = resolver.resolve(&StyleIntents::new().small().danger());
//!
//! assert_eq!(style.color(), Some("#FF5468"));
//! assert!(style.to_css().contains("font-size: 12px;"));
//! ```

pub mod block;
mod element;
mod intent;
mod preview;
mod style;
mod theme;
mod util;

pub use element::{ElementKind, RenderMode, RenderedElement, TextElement};
pub use intent::{IntentValue, Measure, StyleIntents, DEFAULT_WEIGHT_STYLE};
pub use preview::{TerminalPreview, DEFAULT_CELL_PX};
pub use style::{
    resolve, Contribution, Cursor, Declaration, Declared, Display, FontFamily, FontSizeTier,
    FontStyle, Length, LineHeight, Overflow, OverflowWrap, ResolvedStyle, Resolver, Rule,
    TextAlign, TextDecoration, TextOverflow, TextTransform, WhiteSpace, WordBreak,
    FONT_FAMILY_BOLD, FONT_FAMILY_LIGHT, FONT_FAMILY_MEDIUM, FONT_FAMILY_REGULAR,
    FONT_FAMILY_THIN,
};
pub use theme::{
    detect_color_mode, set_theme_detector, AdaptiveTheme, ColorGroup, ColorMode, ColorToken,
    Palette, Theme, ThemeChoice, ThemeError,
};
pub use util::{parse_css_color, rgb_to_ansi256, truncate_to_width};
