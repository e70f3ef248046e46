//! Style intents: the resolver's input vocabulary.
//!
//! - [`IntentValue`]: a loosely typed value with truthiness and numeric coercion
//! - [`Measure`]: a dimension given as a bare number or a raw CSS value
//! - [`StyleIntents`]: the typed record of every recognized intent

mod intents;
mod value;

pub use intents::{StyleIntents, DEFAULT_WEIGHT_STYLE};
pub use value::{IntentValue, Measure};
pub(crate) use value::format_number;
