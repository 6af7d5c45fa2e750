// Suggestion generation
//
// Produces correction candidates for a misspelled word by applying single
// edits (case change, transposition, deletion, insertion, replacement) and
// validating them against the lexicon.
//
//   - `generators`: one edit class each (SuggestionGenerator trait)
//   - `status`: cost budget, abort condition, deduplication
//   - `strategy`: composes generators into a run
//
// `suggest` drives a run and ranks the result for a `SpellerConfig`.

pub mod generators;
pub mod status;
pub mod strategy;

use std::borrow::Cow;

use hashbrown::HashSet;

use dfst_core::character::{capitalize_first, is_all_upper, is_first_upper};
use dfst_core::suggestion::{Suggestion, Weight};

use crate::speller::SpellerConfig;

pub use self::generators::SuggestionGenerator;
pub use self::status::SuggestionStatus;
pub use self::strategy::{SuggestionStrategy, edit_strategy};

/// A lexicon hit: the entry's own weight and completion flag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Accepted {
    pub weight: Weight,
    pub completed: Option<bool>,
}

/// What generators validate candidates against.
pub trait Acceptor {
    /// Exact lookup of `word`.
    fn accept(&self, word: &str) -> Option<Accepted>;

    /// Characters worth trying in insertions and replacements.
    fn alphabet(&self) -> &[char];
}

/// Casing pattern of an input word, restored on recased suggestions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Casing {
    Title,
    Upper,
    Other,
}

impl Casing {
    fn of(word: &str) -> Self {
        if is_first_upper(word) {
            Casing::Title
        } else if is_all_upper(word) {
            Casing::Upper
        } else {
            Casing::Other
        }
    }

    fn apply(self, word: &str) -> String {
        match self {
            Casing::Title => capitalize_first(word),
            Casing::Upper => word.to_uppercase(),
            Casing::Other => word.to_string(),
        }
    }
}

/// Generate and rank suggestions for `word`.
pub fn suggest(acceptor: &dyn Acceptor, word: &str, config: &SpellerConfig) -> Vec<Suggestion> {
    if word.is_empty() {
        return Vec::new();
    }

    let casing = if config.recase {
        Casing::of(word)
    } else {
        Casing::Other
    };
    let base: Cow<'_, str> = match casing {
        Casing::Other => Cow::Borrowed(word),
        _ => Cow::Owned(word.to_lowercase()),
    };

    let chars: Vec<char> = base.chars().collect();
    let mut status = SuggestionStatus::new(&chars);
    edit_strategy(config.lookup_budget).generate(acceptor, &mut status);
    tracing::trace!(
        word,
        cost = status.cost(),
        found = status.suggestion_count(),
        "suggestion run finished"
    );

    let mut list = status.into_suggestions();
    if casing != Casing::Other {
        for suggestion in &mut list {
            suggestion.value = casing.apply(&suggestion.value);
        }
    }
    rank(list, config)
}

/// Sort best first, drop duplicate values, then apply the weight limit,
/// the beam and the count limit in that order.
pub fn rank(mut list: Vec<Suggestion>, config: &SpellerConfig) -> Vec<Suggestion> {
    list.sort();

    let mut seen = HashSet::new();
    list.retain(|s| seen.insert(s.value.clone()));

    if let Some(max_weight) = config.max_weight {
        list.retain(|s| s.weight <= max_weight);
    }
    if let (Some(beam), Some(best)) = (config.beam, list.first().map(Suggestion::weight)) {
        list.retain(|s| s.weight <= best + beam);
    }
    if let Some(n_best) = config.n_best {
        list.truncate(n_best);
    }
    list
}
