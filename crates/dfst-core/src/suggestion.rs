// Suggestion record and the completion tri-state

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

/// Penalty weight of a suggestion. Lower is better.
pub type Weight = f32;

/// Completion byte: the engine does not know.
pub const COMPLETED_UNKNOWN: u8 = 0;
/// Completion byte: the suggestion is a partial word-form.
pub const COMPLETED_FALSE: u8 = 1;
/// Completion byte: the suggestion is a complete word-form.
pub const COMPLETED_TRUE: u8 = 2;

/// Encode the completion tri-state as its boundary byte.
pub fn completed_to_byte(completed: Option<bool>) -> u8 {
    match completed {
        None => COMPLETED_UNKNOWN,
        Some(false) => COMPLETED_FALSE,
        Some(true) => COMPLETED_TRUE,
    }
}

/// Decode a completion byte. Bytes outside the three known values read as
/// unknown.
pub fn completed_from_byte(byte: u8) -> Option<bool> {
    match byte {
        COMPLETED_FALSE => Some(false),
        COMPLETED_TRUE => Some(true),
        _ => None,
    }
}

/// A spelling correction candidate.
///
/// Ordered by weight, then by value, which is the ranking order the engine
/// hands out (best first).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Suggestion {
    /// The suggested word-form.
    pub value: String,
    /// Total penalty weight.
    pub weight: Weight,
    /// Whether the word-form is complete; `None` when unknown.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
}

impl Suggestion {
    pub fn new(value: impl Into<String>, weight: Weight, completed: Option<bool>) -> Self {
        Self {
            value: value.into(),
            weight,
            completed,
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn weight(&self) -> Weight {
        self.weight
    }

    pub fn completed(&self) -> Option<bool> {
        self.completed
    }
}

impl PartialEq for Suggestion {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value && self.weight == other.weight
    }
}

impl Eq for Suggestion {}

impl PartialOrd for Suggestion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Suggestion {
    fn cmp(&self, other: &Self) -> Ordering {
        self.weight
            .partial_cmp(&other.weight)
            .unwrap_or(Ordering::Equal)
            .then_with(|| self.value.cmp(&other.value))
    }
}
