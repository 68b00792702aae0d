//! A single timed transcript token.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One word of a transcript with its time span in seconds.
///
/// Serialized as `{"start": .., "end": .., "word": ".."}`, the shape the
/// transcription backend emits in `transcript_data`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Word {
    /// Start of the spoken span, seconds from clip start
    pub start: f64,

    /// End of the spoken span, seconds from clip start
    pub end: f64,

    /// The spoken text; the only user-editable field
    #[serde(rename = "word")]
    pub text: String,
}

impl Word {
    /// Create a new word.
    pub fn new(start: f64, end: f64, text: impl Into<String>) -> Self {
        Self {
            start,
            end,
            text: text.into(),
        }
    }

    /// Returns true if `time` falls within this word's span (inclusive on
    /// both ends, matching the subtitle overlay's highlight check).
    pub fn spans(&self, time: f64) -> bool {
        time >= self.start && time <= self.end
    }

    /// Duration of the spoken span in seconds.
    pub fn duration(&self) -> f64 {
        (self.end - self.start).max(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spans_is_inclusive() {
        let word = Word::new(1.0, 2.0, "hello");
        assert!(word.spans(1.0));
        assert!(word.spans(1.5));
        assert!(word.spans(2.0));
        assert!(!word.spans(0.999));
        assert!(!word.spans(2.001));
    }

    #[test]
    fn test_serde_field_name() {
        let word = Word::new(0.0, 0.5, "hey");
        let json = serde_json::to_value(&word).unwrap();
        assert_eq!(json["word"], "hey");
        assert!(json.get("text").is_none());

        let back: Word = serde_json::from_str(r#"{"start":0.0,"end":0.5,"word":"hey"}"#).unwrap();
        assert_eq!(back, word);
    }
}
