// Suggestion strategy: composes generators under a lookup budget

use super::Acceptor;
use super::generators::{CaseChange, Deletion, Insertion, Replacement, Swap, SuggestionGenerator};
use super::status::SuggestionStatus;

/// Primary and secondary generator lists run under one cost budget.
pub struct SuggestionStrategy {
    max_cost: usize,
    /// Run first; if any of them finds something, secondaries are skipped.
    primary_generators: Vec<Box<dyn SuggestionGenerator>>,
    /// Run only if the primaries found nothing.
    generators: Vec<Box<dyn SuggestionGenerator>>,
}

impl SuggestionStrategy {
    pub fn new(
        max_cost: usize,
        primary_generators: Vec<Box<dyn SuggestionGenerator>>,
        generators: Vec<Box<dyn SuggestionGenerator>>,
    ) -> Self {
        Self {
            max_cost,
            primary_generators,
            generators,
        }
    }

    /// Run the primary generators, then the secondaries if the primaries
    /// found nothing.
    pub fn generate(&self, acceptor: &dyn Acceptor, status: &mut SuggestionStatus<'_>) {
        status.set_max_cost(self.max_cost);

        for generator in &self.primary_generators {
            if status.should_abort() {
                break;
            }
            generator.generate(acceptor, status);
        }
        if status.suggestion_count() > 0 {
            return;
        }

        for generator in &self.generators {
            if status.should_abort() {
                break;
            }
            generator.generate(acceptor, status);
        }
    }
}

/// The single-edit strategy: case change first, then transposition,
/// deletion, insertion and replacement, cheapest edit first.
pub fn edit_strategy(max_cost: usize) -> SuggestionStrategy {
    SuggestionStrategy::new(
        max_cost,
        vec![Box::new(CaseChange)],
        vec![
            Box::new(Swap),
            Box::new(Deletion),
            Box::new(Insertion),
            Box::new(Replacement),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::suggestion::Accepted;

    struct Words(Vec<&'static str>, Vec<char>);

    impl Acceptor for Words {
        fn accept(&self, word: &str) -> Option<Accepted> {
            self.0.iter().any(|w| *w == word).then_some(Accepted {
                weight: 0.0,
                completed: None,
            })
        }

        fn alphabet(&self) -> &[char] {
            &self.1
        }
    }

    fn words(list: &[&'static str]) -> Words {
        let mut alphabet: Vec<char> = list.iter().flat_map(|w| w.chars()).collect();
        alphabet.sort_unstable();
        alphabet.dedup();
        Words(list.to_vec(), alphabet)
    }

    fn values(status: SuggestionStatus<'_>) -> Vec<String> {
        let mut list: Vec<String> = status.into_suggestions().into_iter().map(|s| s.value).collect();
        list.sort();
        list
    }

    #[test]
    fn primary_hit_skips_secondaries() {
        let lexicon = words(&["sana", "sanat"]);
        let chars: Vec<char> = "Sana".chars().collect();
        let mut status = SuggestionStatus::new(&chars);
        edit_strategy(1000).generate(&lexicon, &mut status);
        assert_eq!(values(status), ["sana"]);
    }

    #[test]
    fn secondaries_collect_all_single_edits() {
        let lexicon = words(&["sana", "sanat", "sama"]);
        let chars: Vec<char> = "sanaa".chars().collect();
        let mut status = SuggestionStatus::new(&chars);
        edit_strategy(1000).generate(&lexicon, &mut status);
        assert_eq!(values(status), ["sana", "sanat"]);
    }
}
