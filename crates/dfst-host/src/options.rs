// Suggestion tuning

use dfst_core::abi::FfiSpellerConfig;

/// Options for [`Speller::suggest_with`](crate::Speller::suggest_with).
///
/// `None` in a limit means no limit; unlike [`Speller::suggest`], the
/// default options return every candidate the search finds.
///
/// The boundary encodes "no limit" as zero, so `Some(0)` and weights of zero
/// or below also mean no limit. The builder methods store those as `None`.
///
/// [`Speller::suggest`]: crate::Speller::suggest
#[derive(Debug, Clone, PartialEq)]
pub struct SuggestOptions {
    /// Maximum number of suggestions.
    pub n_best: Option<usize>,
    /// Drop suggestions heavier than this.
    pub max_weight: Option<f32>,
    /// Drop suggestions heavier than the best one plus this.
    pub beam: Option<f32>,
    /// Lookups the search may spend before giving up; `None` keeps the
    /// engine's budget.
    pub lookup_budget: Option<usize>,
    /// Match title case and upper case input against lower case entries.
    pub recase: bool,
}

impl Default for SuggestOptions {
    fn default() -> Self {
        Self {
            n_best: None,
            max_weight: None,
            beam: None,
            lookup_budget: None,
            recase: true,
        }
    }
}

impl SuggestOptions {
    pub fn n_best(mut self, n: usize) -> Self {
        self.n_best = (n > 0).then_some(n);
        self
    }

    pub fn max_weight(mut self, weight: f32) -> Self {
        self.max_weight = (weight > 0.0).then_some(weight);
        self
    }

    pub fn beam(mut self, beam: f32) -> Self {
        self.beam = (beam > 0.0).then_some(beam);
        self
    }

    pub fn lookup_budget(mut self, budget: usize) -> Self {
        self.lookup_budget = (budget > 0).then_some(budget);
        self
    }

    pub fn recase(mut self, recase: bool) -> Self {
        self.recase = recase;
        self
    }

    pub(crate) fn to_ffi(&self) -> FfiSpellerConfig {
        FfiSpellerConfig {
            n_best: self.n_best.unwrap_or(0),
            max_weight: self.max_weight.filter(|w| *w > 0.0).unwrap_or(0.0),
            beam: self.beam.filter(|b| *b > 0.0).unwrap_or(0.0),
            lookup_budget: self.lookup_budget.unwrap_or(0),
            recase: u8::from(self.recase),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_maps_to_unset_fields() {
        assert_eq!(SuggestOptions::default().to_ffi(), FfiSpellerConfig::default());
    }

    #[test]
    fn non_positive_limits_are_unset() {
        let options = SuggestOptions::default().n_best(0).max_weight(0.0).beam(-1.0);
        assert_eq!(options, SuggestOptions::default());
        assert_eq!(options.to_ffi().n_best, 0);
    }

    #[test]
    fn builder_sets_fields() {
        let ffi = SuggestOptions::default()
            .n_best(3)
            .beam(0.5)
            .recase(false)
            .to_ffi();
        assert_eq!(ffi.n_best, 3);
        assert_eq!(ffi.beam, 0.5);
        assert_eq!(ffi.max_weight, 0.0);
        assert_eq!(ffi.recase, 0);
    }
}
