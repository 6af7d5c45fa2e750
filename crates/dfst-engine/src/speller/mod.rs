// Spell checking
//
// A `Speller` answers two questions about a word: is it correct, and which
// word-forms could have been meant instead. Archives hand out spellers as
// shared trait objects, so implementations must be `Send + Sync`.

pub mod lexicon;

use dfst_core::suggestion::{Suggestion, Weight};

pub use self::lexicon::LexiconSpeller;

/// Default number of lookups one suggestion run may spend.
pub const DEFAULT_LOOKUP_BUDGET: usize = 4000;

/// Default number of suggestions returned.
pub const DEFAULT_N_BEST: usize = 10;

/// Tuning for suggestion generation.
#[derive(Debug, Clone, PartialEq)]
pub struct SpellerConfig {
    /// Keep at most this many suggestions.
    pub n_best: Option<usize>,
    /// Drop suggestions heavier than this.
    pub max_weight: Option<Weight>,
    /// Drop suggestions more than this much heavier than the best one.
    pub beam: Option<Weight>,
    /// Maximum number of lexicon lookups per run.
    pub lookup_budget: usize,
    /// Generate from the lowercased input and restore the input's casing on
    /// the results.
    pub recase: bool,
}

impl Default for SpellerConfig {
    fn default() -> Self {
        Self {
            n_best: Some(DEFAULT_N_BEST),
            max_weight: None,
            beam: None,
            lookup_budget: DEFAULT_LOOKUP_BUDGET,
            recase: true,
        }
    }
}

/// Trait for spellers.
pub trait Speller {
    /// Whether `word` is a correct word-form. The empty string never is.
    fn is_correct(&self, word: &str) -> bool;

    /// Ranked suggestions for `word` under the default configuration.
    fn suggest(&self, word: &str) -> Vec<Suggestion> {
        self.suggest_with_config(word, &SpellerConfig::default())
    }

    /// Ranked suggestions for `word`, best first.
    fn suggest_with_config(&self, word: &str, config: &SpellerConfig) -> Vec<Suggestion>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = SpellerConfig::default();
        assert_eq!(config.n_best, Some(DEFAULT_N_BEST));
        assert_eq!(config.max_weight, None);
        assert_eq!(config.beam, None);
        assert_eq!(config.lookup_budget, DEFAULT_LOOKUP_BUDGET);
        assert!(config.recase);
    }
}
