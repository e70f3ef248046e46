//! Pipeline block records as they arrive from the API.

use serde::{Deserialize, Serialize};

/// A pipeline block with its captured outputs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Block {
    pub uuid: String,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub outputs: Vec<OutputRecord>,
}

impl Block {
    pub fn new(uuid: impl Into<String>) -> Self {
        Self {
            uuid: uuid.into(),
            ..Self::default()
        }
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn with_output(mut self, output: OutputRecord) -> Self {
        self.outputs.push(output);
        self
    }
}

/// One captured execution output of a block.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OutputRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sample_data: Option<serde_json::Value>,
    /// A JSON document encoded as a string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_data: Option<String>,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub output_type: Option<String>,
}

impl OutputRecord {
    pub fn sample(data: serde_json::Value, output_type: impl Into<String>) -> Self {
        Self {
            sample_data: Some(data),
            text_data: None,
            output_type: Some(output_type.into()),
        }
    }

    pub fn text(text_data: impl Into<String>) -> Self {
        Self {
            sample_data: None,
            text_data: Some(text_data.into()),
            output_type: None,
        }
    }
}

/// A renderable message derived from one output record.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Message {
    /// Structured sample data wrapped with its type tag.
    Sample {
        data: serde_json::Value,
        #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
        output_type: Option<String>,
    },
    /// The parsed textual JSON payload.
    Parsed(serde_json::Value),
    /// The textual field passed through unchanged (possibly absent or empty).
    Text(Option<String>),
}
