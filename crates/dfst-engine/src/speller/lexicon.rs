// Speller over an in-memory word list

use std::collections::BTreeMap;

use hashbrown::HashMap;

use dfst_core::character::{capitalize_first, is_all_upper, is_first_upper};
use dfst_core::suggestion::{Suggestion, Weight};

use super::{Speller, SpellerConfig};
use crate::suggestion::{self, Acceptor, Accepted};

#[derive(Debug, Clone, Copy)]
struct Entry {
    weight: Weight,
    completed: bool,
}

/// Speller backed by a set of word-forms.
///
/// Full words and partial word-forms are both accepted. Completion is only
/// reported when the lexicon lists partial forms at all; otherwise it is
/// unknown.
#[derive(Debug)]
pub struct LexiconSpeller {
    entries: HashMap<String, Entry>,
    alphabet: Vec<char>,
    marks_completion: bool,
}

impl LexiconSpeller {
    /// Build a speller from full words, partial word-forms and per-entry
    /// weights. Entries without a weight weigh `0.0`.
    pub fn new(words: &[String], partial: &[String], weights: &BTreeMap<String, Weight>) -> Self {
        let mut entries = HashMap::with_capacity(words.len() + partial.len());
        for (list, completed) in [(partial, false), (words, true)] {
            for word in list {
                let weight = weights.get(word).copied().unwrap_or(0.0);
                entries.insert(word.clone(), Entry { weight, completed });
            }
        }

        let mut alphabet: Vec<char> = entries.keys().flat_map(|w| w.chars()).collect();
        alphabet.sort_unstable();
        alphabet.dedup();

        tracing::debug!(
            entries = entries.len(),
            alphabet = alphabet.len(),
            "built lexicon speller"
        );

        Self {
            entries,
            alphabet,
            marks_completion: !partial.is_empty(),
        }
    }

    /// Convenience constructor for full words only.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let words: Vec<String> = words.into_iter().map(Into::into).collect();
        Self::new(&words, &[], &BTreeMap::new())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn entry(&self, word: &str) -> Option<&Entry> {
        self.entries.get(word)
    }

    /// Exact lookup, then the lowercase entries a `Title` or `UPPER` form
    /// may stand for.
    fn lookup_recased(&self, word: &str) -> Option<&Entry> {
        if let Some(entry) = self.entry(word) {
            return Some(entry);
        }
        if is_first_upper(word) {
            return self.entry(&word.to_lowercase());
        }
        if is_all_upper(word) {
            let lower = word.to_lowercase();
            return self
                .entry(&lower)
                .or_else(|| self.entry(&capitalize_first(&lower)));
        }
        None
    }
}

impl Acceptor for LexiconSpeller {
    fn accept(&self, word: &str) -> Option<Accepted> {
        self.entry(word).map(|entry| Accepted {
            weight: entry.weight,
            completed: self.marks_completion.then_some(entry.completed),
        })
    }

    fn alphabet(&self) -> &[char] {
        &self.alphabet
    }
}

impl Speller for LexiconSpeller {
    fn is_correct(&self, word: &str) -> bool {
        !word.is_empty() && self.lookup_recased(word).is_some()
    }

    fn suggest_with_config(&self, word: &str, config: &SpellerConfig) -> Vec<Suggestion> {
        suggestion::suggest(self, word, config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sami() -> LexiconSpeller {
        LexiconSpeller::from_words(["boahtin", "boahtit", "sámegiella", "Sápmi"])
    }

    #[test]
    fn exact_words_are_correct() {
        let speller = sami();
        assert!(speller.is_correct("boahtin"));
        assert!(speller.is_correct("sámegiella"));
        assert!(!speller.is_correct("boatin"));
        assert!(!speller.is_correct(""));
    }

    #[test]
    fn recased_forms_are_correct() {
        let speller = sami();
        assert!(speller.is_correct("Boahtin"));
        assert!(speller.is_correct("BOAHTIN"));
        assert!(speller.is_correct("SÁPMI"));
        assert!(!speller.is_correct("sápmi"));
        assert!(!speller.is_correct("bOAHTIN"));
    }

    #[test]
    fn suggests_missing_letter_first() {
        let list = sami().suggest("boatin");
        assert_eq!(list[0].value, "boahtin");
        assert_eq!(list[0].weight, 1.0);
        assert_eq!(list[0].completed, None);
    }

    #[test]
    fn suggestions_keep_input_casing() {
        let list = sami().suggest("Boatin");
        assert_eq!(list[0].value, "Boahtin");
        let list = sami().suggest("BOATIN");
        assert_eq!(list[0].value, "BOAHTIN");
    }

    #[test]
    fn no_recasing_when_disabled() {
        let config = SpellerConfig {
            recase: false,
            ..SpellerConfig::default()
        };
        let list = sami().suggest_with_config("Boahtin", &config);
        assert_eq!(list[0].value, "boahtin");
        assert_eq!(list[0].weight, 0.0);
    }

    #[test]
    fn entry_weight_is_added() {
        let words = vec!["boahtin".to_string(), "boahtán".to_string()];
        let weights = BTreeMap::from([("boahtin".to_string(), 2.0)]);
        let speller = LexiconSpeller::new(&words, &[], &weights);
        let list = speller.suggest("boahtn");
        assert_eq!(list.len(), 2);
        assert_eq!(list[0].value, "boahtán");
        assert_eq!(list[0].weight, 1.0);
        assert_eq!(list[1].value, "boahtin");
        assert_eq!(list[1].weight, 3.0);
    }

    #[test]
    fn completion_known_with_partial_entries() {
        let words = vec!["sámegiella".to_string()];
        let partial = vec!["sámegiel".to_string()];
        let speller = LexiconSpeller::new(&words, &partial, &BTreeMap::new());
        assert!(speller.is_correct("sámegiel"));

        let list = speller.suggest("sámegiell");
        let full = list.iter().find(|s| s.value == "sámegiella").unwrap();
        let part = list.iter().find(|s| s.value == "sámegiel").unwrap();
        assert_eq!(full.completed, Some(true));
        assert_eq!(part.completed, Some(false));
    }

    #[test]
    fn order_is_stable_across_calls() {
        let speller = sami();
        let first = speller.suggest("boahti");
        for _ in 0..5 {
            assert_eq!(speller.suggest("boahti"), first);
        }
        let values: Vec<&str> = first.iter().map(Suggestion::value).collect();
        assert_eq!(values, ["boahtin", "boahtit"]);
    }

    #[test]
    fn empty_word_has_no_suggestions() {
        assert!(sami().suggest("").is_empty());
    }
}
