// Suggestion status tracking: cost budget, abort conditions, deduplication

use hashbrown::HashMap;
use hashbrown::hash_map::Entry;

use dfst_core::suggestion::{Suggestion, Weight};

use super::Accepted;

/// Tracks one suggestion run: the word being corrected, the lookups spent so
/// far, and the candidates accepted by the lexicon.
///
/// Every lookup made by a generator increments `current_cost` by one via
/// `charge()`. The strategy sets `max_cost` from the configured lookup budget.
pub struct SuggestionStatus<'a> {
    word: &'a [char],
    max_cost: usize,
    current_cost: usize,
    found: HashMap<String, Accepted>,
}

impl<'a> SuggestionStatus<'a> {
    pub fn new(word: &'a [char]) -> Self {
        Self {
            word,
            max_cost: 0,
            current_cost: 0,
            found: HashMap::new(),
        }
    }

    /// Returns `true` once the lookup budget is spent.
    ///
    /// While nothing has been found the run may take twice the budget.
    pub fn should_abort(&self) -> bool {
        if self.current_cost < self.max_cost {
            return false;
        }
        !(self.found.is_empty() && self.current_cost < 2 * self.max_cost)
    }

    /// Account for one lexicon lookup.
    pub fn charge(&mut self) {
        self.current_cost += 1;
    }

    pub fn set_max_cost(&mut self, max_cost: usize) {
        self.max_cost = max_cost;
    }

    /// Record an accepted candidate. A candidate reached by several edits
    /// keeps its lightest weight.
    pub fn add_suggestion(&mut self, candidate: String, weight: Weight, completed: Option<bool>) {
        let accepted = Accepted { weight, completed };
        match self.found.entry(candidate) {
            Entry::Occupied(mut slot) => {
                if weight < slot.get().weight {
                    slot.insert(accepted);
                }
            }
            Entry::Vacant(slot) => {
                slot.insert(accepted);
            }
        }
    }

    pub fn suggestion_count(&self) -> usize {
        self.found.len()
    }

    pub fn cost(&self) -> usize {
        self.current_cost
    }

    pub fn word(&self) -> &'a [char] {
        self.word
    }

    pub fn word_len(&self) -> usize {
        self.word.len()
    }

    /// Consume the status and return the collected suggestions, unordered.
    pub fn into_suggestions(self) -> Vec<Suggestion> {
        self.found
            .into_iter()
            .map(|(value, hit)| Suggestion::new(value, hit.weight, hit.completed))
            .collect()
    }
}
