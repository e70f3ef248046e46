//! Loosely typed intent values.
//!
//! Intents arrive from markup-like sources where a flag may be written as
//! `true`, `1`, `"yes"` or omitted entirely. [`IntentValue`] keeps the raw
//! shape and answers the two questions the resolver asks of it: is it
//! truthy, and what number does it coerce to.

use serde::{Deserialize, Serialize};

/// A single intent value as supplied by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum IntentValue {
    /// Explicit `null`.
    Null,
    Bool(bool),
    Number(f64),
    Text(String),
    /// Arrays and objects. Always truthy, never numeric.
    Composite(serde_json::Value),
}

impl IntentValue {
    /// Returns `true` when the value would enable an intent.
    ///
    /// `false`, `null`, `0`, `NaN` and the empty string are falsy; every
    /// other value, including composites, is truthy.
    pub fn is_truthy(&self) -> bool {
        match self {
            IntentValue::Null => false,
            IntentValue::Bool(b) => *b,
            IntentValue::Number(n) => *n != 0.0 && !n.is_nan(),
            IntentValue::Text(s) => !s.is_empty(),
            IntentValue::Composite(_) => true,
        }
    }

    /// Coerces the value to a number the way a numeric cast of loosely typed
    /// data does: booleans become 1/0, `null` and blank strings become 0,
    /// unparseable strings and composites become `NaN`.
    pub fn to_number(&self) -> f64 {
        match self {
            IntentValue::Null => 0.0,
            IntentValue::Bool(true) => 1.0,
            IntentValue::Bool(false) => 0.0,
            IntentValue::Number(n) => *n,
            IntentValue::Text(s) => {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    0.0
                } else {
                    trimmed.parse::<f64>().unwrap_or(f64::NAN)
                }
            }
            IntentValue::Composite(_) => f64::NAN,
        }
    }

    /// Returns the value as text, if it has a sensible textual form.
    pub fn as_text(&self) -> Option<String> {
        match self {
            IntentValue::Text(s) => Some(s.clone()),
            IntentValue::Number(n) => Some(format_number(*n)),
            IntentValue::Bool(b) => Some(b.to_string()),
            IntentValue::Null | IntentValue::Composite(_) => None,
        }
    }
}

impl From<bool> for IntentValue {
    fn from(value: bool) -> Self {
        IntentValue::Bool(value)
    }
}

impl From<f64> for IntentValue {
    fn from(value: f64) -> Self {
        IntentValue::Number(value)
    }
}

impl From<i32> for IntentValue {
    fn from(value: i32) -> Self {
        IntentValue::Number(f64::from(value))
    }
}

impl From<&str> for IntentValue {
    fn from(value: &str) -> Self {
        IntentValue::Text(value.to_string())
    }
}

impl From<String> for IntentValue {
    fn from(value: String) -> Self {
        IntentValue::Text(value)
    }
}

impl From<serde_json::Value> for IntentValue {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => IntentValue::Null,
            serde_json::Value::Bool(b) => IntentValue::Bool(b),
            serde_json::Value::Number(n) => IntentValue::Number(n.as_f64().unwrap_or(f64::NAN)),
            serde_json::Value::String(s) => IntentValue::Text(s),
            other => IntentValue::Composite(other),
        }
    }
}

/// A dimension-like intent: a bare number or a raw CSS value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Measure {
    Number(f64),
    Raw(String),
}

impl Measure {
    /// Builds a measure from a truthy intent value; falsy values yield `None`.
    ///
    /// Composites are truthy but have no dimension to emit, so they also
    /// yield `None` and leave the intent inert.
    pub fn from_intent(value: &IntentValue) -> Option<Self> {
        if !value.is_truthy() {
            return None;
        }
        match value {
            IntentValue::Number(n) => Some(Measure::Number(*n)),
            IntentValue::Text(s) => match s.trim().parse::<f64>() {
                Ok(n) => Some(Measure::Number(n)),
                Err(_) => Some(Measure::Raw(s.trim().to_string())),
            },
            IntentValue::Bool(_) => Some(Measure::Number(1.0)),
            IntentValue::Null | IntentValue::Composite(_) => None,
        }
    }

    /// Returns `false` for zero, `NaN` and blank raw values, which leave a
    /// dimension intent inert.
    pub fn is_truthy(&self) -> bool {
        match self {
            Measure::Number(n) => *n != 0.0 && !n.is_nan(),
            Measure::Raw(s) => !s.trim().is_empty(),
        }
    }

    /// Formats the measure with `unit` appended to bare numbers.
    ///
    /// Raw values already carry their own unit and are returned verbatim.
    pub fn with_unit(&self, unit: &str) -> String {
        match self {
            Measure::Number(n) => format!("{}{}", format_number(*n), unit),
            Measure::Raw(s) => s.clone(),
        }
    }
}

impl From<f64> for Measure {
    fn from(value: f64) -> Self {
        Measure::Number(value)
    }
}

impl From<i32> for Measure {
    fn from(value: i32) -> Self {
        Measure::Number(f64::from(value))
    }
}

impl From<&str> for Measure {
    fn from(value: &str) -> Self {
        Measure::Raw(value.to_string())
    }
}

/// Formats a number without a trailing `.0` for integral values.
///
/// `f64`'s `Display` never uses exponent notation and drops the fraction of
/// integral values, so large magnitudes keep every digit.
pub(crate) fn format_number(n: f64) -> String {
    if n == 0.0 {
        "0".to_string()
    } else {
        n.to_string()
    }
}
