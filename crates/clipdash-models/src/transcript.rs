//! Ordered word-level transcript.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::word::Word;

/// An ordered sequence of words, indexed by position.
///
/// Edits target a word by its index, so positions are stable for the life of
/// a transcript: edits only change `text`, never insert, remove, or reorder.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct Transcript {
    words: Vec<Word>,
}

impl Transcript {
    /// Create a transcript from an already-ordered word list.
    ///
    /// The transcription backend emits words in non-decreasing `start`
    /// order; this constructor trusts that and does not sort. Callers that
    /// want to reject malformed input can run [`Transcript::validate`].
    pub fn new(words: Vec<Word>) -> Self {
        Self { words }
    }

    /// All words in order.
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Number of words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns true if the transcript has no words.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// The word at `index`, if in range.
    pub fn word(&self, index: usize) -> Option<&Word> {
        self.words.get(index)
    }

    /// Mutable access to the word at `index`, if in range.
    pub fn word_mut(&mut self, index: usize) -> Option<&mut Word> {
        self.words.get_mut(index)
    }

    /// Find the word spoken at `time`.
    ///
    /// Returns the first word (in transcript order) whose span contains
    /// `time`. Spans are allowed to overlap; the first match wins. Returns
    /// `None` when `time` falls in a gap between words.
    pub fn word_at(&self, time: f64) -> Option<(usize, &Word)> {
        self.words
            .iter()
            .enumerate()
            .find(|(_, word)| word.spans(time))
    }

    /// Check transcript invariants.
    ///
    /// Rejects negative times, spans with `start > end`, and words out of
    /// non-decreasing `start` order.
    pub fn validate(&self) -> Result<(), String> {
        let mut prev_start = 0.0_f64;
        for (i, word) in self.words.iter().enumerate() {
            if word.start < 0.0 || word.end < 0.0 {
                return Err(format!("word {i} has a negative timestamp"));
            }
            if word.start > word.end {
                return Err(format!(
                    "word {i} starts at {} but ends at {}",
                    word.start, word.end
                ));
            }
            if word.start < prev_start {
                return Err(format!("word {i} is out of order"));
            }
            prev_start = word.start;
        }
        Ok(())
    }
}

impl From<Vec<Word>> for Transcript {
    fn from(words: Vec<Word>) -> Self {
        Self::new(words)
    }
}
