//! Output normalization for the pipeline editor.

use serde::Serialize;
use std::collections::BTreeMap;

use super::model::{Block, Message, OutputRecord};

/// Error returned when normalization fails.
#[derive(Debug, thiserror::Error)]
pub enum NormalizeError {
    /// A textual output payload is not valid JSON.
    #[error("output {index} of block '{block}' has malformed JSON text data: {source}")]
    Parse {
        block: String,
        index: usize,
        #[source]
        source: serde_json::Error,
    },
}

/// Per-block content and messages.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Normalized {
    /// Raw content of every block, including blocks without outputs.
    pub content: BTreeMap<String, Option<String>>,
    /// Messages of every block with at least one output, in output order.
    pub messages: BTreeMap<String, Vec<Message>>,
}

/// Normalizes captured outputs into per-block message lists.
///
/// For each output record: structured sample data wins when present;
/// otherwise a non-empty text payload is parsed as JSON; otherwise the text
/// field is passed through as is. A malformed payload fails the whole call.
///
/// # Example
///
/// ```rust
/// use intentstyle::block::{normalize, Block, OutputRecord};
///
/// let blocks = vec![Block::new("a").with_output(OutputRecord::text(r#"{"n": 1}"#))];
/// let normalized = normalize(&blocks).unwrap();
/// assert_eq!(normalized.messages["a"].len(), 1);
/// ```
pub fn normalize(blocks: &[Block]) -> Result<Normalized, NormalizeError> {
    let mut normalized = Normalized::default();

    for block in blocks {
        if !block.outputs.is_empty() {
            let messages = block
                .outputs
                .iter()
                .enumerate()
                .map(|(index, output)| {
                    to_message(output).map_err(|source| NormalizeError::Parse {
                        block: block.uuid.clone(),
                        index,
                        source,
                    })
                })
                .collect::<Result<Vec<_>, _>>()?;
            tracing::debug!(block = %block.uuid, count = messages.len(), "normalized block outputs");
            normalized.messages.insert(block.uuid.clone(), messages);
        }
        normalized
            .content
            .insert(block.uuid.clone(), block.content.clone());
    }

    Ok(normalized)
}

fn to_message(output: &OutputRecord) -> Result<Message, serde_json::Error> {
    if let Some(data) = output.sample_data.as_ref().filter(|d| is_truthy(d)) {
        return Ok(Message::Sample {
            data: data.clone(),
            output_type: output.output_type.clone(),
        });
    }
    match output.text_data.as_deref() {
        Some(text) if !text.is_empty() => Ok(Message::Parsed(serde_json::from_str(text)?)),
        _ => Ok(Message::Text(output.text_data.clone())),
    }
}

fn is_truthy(value: &serde_json::Value) -> bool {
    match value {
        serde_json::Value::Null => false,
        serde_json::Value::Bool(b) => *b,
        serde_json::Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        serde_json::Value::String(s) => !s.is_empty(),
        serde_json::Value::Array(_) | serde_json::Value::Object(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn sample_data_wins_over_text() {
        let output = OutputRecord {
            sample_data: Some(json!({"rows": []})),
            text_data: Some("{not json".into()),
            output_type: Some("table".into()),
        };
        let normalized = normalize(&[Block::new("b").with_output(output)]).unwrap();
        assert_eq!(
            normalized.messages["b"],
            vec![Message::Sample {
                data: json!({"rows": []}),
                output_type: Some("table".into())
            }]
        );
    }

    #[test]
    fn falsy_sample_data_falls_through_to_text() {
        let output = OutputRecord {
            sample_data: Some(json!("")),
            text_data: Some("[1, 2]".into()),
            output_type: None,
        };
        let normalized = normalize(&[Block::new("b").with_output(output)]).unwrap();
        assert_eq!(normalized.messages["b"], vec![Message::Parsed(json!([1, 2]))]);
    }

    #[test]
    fn empty_or_absent_text_passes_through() {
        let block = Block::new("b")
            .with_output(OutputRecord::text(""))
            .with_output(OutputRecord::default());
        let normalized = normalize(&[block]).unwrap();
        assert_eq!(
            normalized.messages["b"],
            vec![Message::Text(Some(String::new())), Message::Text(None)]
        );
    }

    #[test]
    fn message_count_matches_outputs_in_order() {
        let block = Block::new("b")
            .with_output(OutputRecord::text("1"))
            .with_output(OutputRecord::text("2"))
            .with_output(OutputRecord::text("3"));
        let normalized = normalize(&[block]).unwrap();
        assert_eq!(
            normalized.messages["b"],
            vec![
                Message::Parsed(json!(1)),
                Message::Parsed(json!(2)),
                Message::Parsed(json!(3))
            ]
        );
    }

    #[test]
    fn blocks_without_outputs_only_contribute_content() {
        let blocks = vec![
            Block::new("empty"),
            Block::new("code").with_content("print(1)"),
        ];
        let normalized = normalize(&blocks).unwrap();
        assert!(normalized.messages.is_empty());
        assert_eq!(normalized.content["empty"], None);
        assert_eq!(normalized.content["code"].as_deref(), Some("print(1)"));
    }

    #[test]
    fn malformed_payload_fails() {
        let blocks = vec![
            Block::new("ok").with_output(OutputRecord::text("{}")),
            Block::new("bad")
                .with_output(OutputRecord::text("{}"))
                .with_output(OutputRecord::text("{not valid json")),
        ];
        let err = normalize(&blocks).unwrap_err();
        let NormalizeError::Parse { block, index, .. } = &err;
        assert_eq!(block, "bad");
        assert_eq!(*index, 1);
        assert!(err.to_string().contains("malformed JSON"));
    }
}
