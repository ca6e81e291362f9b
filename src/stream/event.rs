//! Typed events decoded from the analysis stream.
//!
//! Each `data:` line carries one JSON payload, tagged by its `type` field:
//!
//! ```text
//! {"type":"chunk","chunk":"<string>"}
//! {"type":"complete","macros":{"carbs":45,"proteins":30,"fats":25},"image":"<data-url>"}
//! {"type":"error","error":"<string>"}
//! ```

use crate::utils::error::DecodeError;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Macronutrient percentage split reported by the analyzer.
///
/// Deserialization is strict: a `macros` object with any field missing or
/// non-numeric fails as a whole, so a partial payload is never half-applied.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacroSplit {
    pub carbs: f64,
    pub proteins: f64,
    pub fats: f64,
}

/// A decoded event from the analysis stream
#[derive(Debug, Clone, PartialEq)]
pub enum AnalysisEvent {
    /// A text fragment to append to the running transcript
    Chunk { text: String },

    /// Final structured result; `macros` is None when the payload was malformed
    Complete {
        macros: Option<MacroSplit>,
        image: Option<String>,
    },

    /// Server-side failure, terminal for the session
    Error { message: String },
}

impl AnalysisEvent {
    /// Decode a single data-line payload.
    ///
    /// Returns `Ok(None)` for well-formed JSON with an unrecognized (or
    /// missing) `type` tag; those payloads are ignored, not errors.
    ///
    /// # Errors
    /// * `DecodeError::JsonError` - payload is not valid JSON
    pub fn from_json(payload: &str) -> Result<Option<Self>, DecodeError> {
        let value: Value = serde_json::from_str(payload)?;

        match value.get("type").and_then(Value::as_str) {
            Some("chunk") => {
                let text = value
                    .get("chunk")
                    .and_then(Value::as_str)
                    .unwrap_or_default()
                    .to_string();
                Ok(Some(Self::Chunk { text }))
            }

            Some("complete") => {
                let macros = value
                    .get("macros")
                    .cloned()
                    .and_then(|m| serde_json::from_value::<MacroSplit>(m).ok());
                let image = value
                    .get("image")
                    .and_then(Value::as_str)
                    .map(str::to_string);
                Ok(Some(Self::Complete { macros, image }))
            }

            Some("error") => {
                let message = value
                    .get("error")
                    .and_then(Value::as_str)
                    .unwrap_or("unknown server error")
                    .to_string();
                Ok(Some(Self::Error { message }))
            }

            _ => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_chunk() {
        let event = AnalysisEvent::from_json(r#"{"type":"chunk","chunk":"Calories: 250"}"#)
            .unwrap()
            .unwrap();
        assert_eq!(
            event,
            AnalysisEvent::Chunk {
                text: "Calories: 250".to_string()
            }
        );
    }

    #[test]
    fn test_decode_complete_with_macros() {
        let payload = r#"{"type":"complete","macros":{"carbs":45.5,"proteins":30,"fats":24.5},"image":"data:image/png;base64,AAAA"}"#;
        let event = AnalysisEvent::from_json(payload).unwrap().unwrap();

        match event {
            AnalysisEvent::Complete { macros, image } => {
                let macros = macros.expect("macros should parse");
                assert_eq!(macros.carbs, 45.5);
                assert_eq!(macros.proteins, 30.0);
                assert_eq!(macros.fats, 24.5);
                assert_eq!(image.as_deref(), Some("data:image/png;base64,AAAA"));
            }
            other => panic!("expected complete event, got {:?}", other),
        }
    }

    #[test]
    fn test_decode_complete_non_numeric_macro_field() {
        // One bad field poisons the whole triple; no partial substitution
        let payload = r#"{"type":"complete","macros":{"carbs":40,"proteins":"bad","fats":30}}"#;
        let event = AnalysisEvent::from_json(payload).unwrap().unwrap();

        match event {
            AnalysisEvent::Complete { macros, image } => {
                assert!(macros.is_none());
                assert!(image.is_none());
            }
            other => panic!("expected complete event, got {:?}", other),
        }
    }

    #[test]
    fn test_decode_complete_missing_macro_field() {
        let payload = r#"{"type":"complete","macros":{"carbs":40,"proteins":30}}"#;
        let event = AnalysisEvent::from_json(payload).unwrap().unwrap();

        match event {
            AnalysisEvent::Complete { macros, .. } => assert!(macros.is_none()),
            other => panic!("expected complete event, got {:?}", other),
        }
    }

    #[test]
    fn test_decode_error_event() {
        let event = AnalysisEvent::from_json(r#"{"type":"error","error":"model unavailable"}"#)
            .unwrap()
            .unwrap();
        assert_eq!(
            event,
            AnalysisEvent::Error {
                message: "model unavailable".to_string()
            }
        );
    }

    #[test]
    fn test_decode_unrecognized_type() {
        let event = AnalysisEvent::from_json(r#"{"type":"heartbeat"}"#).unwrap();
        assert!(event.is_none());
    }

    #[test]
    fn test_decode_missing_type() {
        let event = AnalysisEvent::from_json(r#"{"chunk":"text"}"#).unwrap();
        assert!(event.is_none());
    }

    #[test]
    fn test_decode_malformed_json() {
        assert!(AnalysisEvent::from_json(r#"{"type":"chunk","chunk":"trunc"#).is_err());
    }
}
