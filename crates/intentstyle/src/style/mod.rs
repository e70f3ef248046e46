//! Style resolution: from intents and a theme to concrete properties.
//!
//! This module provides:
//!
//! - Property value types ([`FontSizeTier`], [`FontFamily`], [`WhiteSpace`], ...)
//! - [`Declaration`] and [`Contribution`]: tagged, ordered style contributions
//! - [`ResolvedStyle`]: the left fold of contributions, with CSS output
//! - [`Resolver`] and [`resolve`]: the rule chain entry points
//!
//! Resolution never fails. Unknown intents are dropped when the intent
//! record is built, and missing theme tokens fall back to the default theme.

mod declaration;
mod resolved;
mod resolver;
mod rules;
mod value;

pub use declaration::{Contribution, Declaration, Rule};
pub use resolved::{Declared, ResolvedStyle};
pub use resolver::{resolve, Resolver};
pub use value::{
    Cursor, Display, FontFamily, FontSizeTier, FontStyle, Length, LineHeight, Overflow,
    OverflowWrap, TextAlign, TextDecoration, TextOverflow, TextTransform, WhiteSpace, WordBreak,
    FONT_FAMILY_BOLD, FONT_FAMILY_LIGHT, FONT_FAMILY_MEDIUM, FONT_FAMILY_REGULAR,
    FONT_FAMILY_THIN,
};
